use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::ProblemsApi;
use crate::bookmarks::BookmarkList;
use crate::AppError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemId(pub String);

impl ProblemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A curated challenge record as served by the problems API.
///
/// List-endpoint records may omit the long-form fields, so everything past
/// `title` is defaulted on deserialization. The client never edits a
/// problem's content, only its membership in the bookmark list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(rename = "_id")]
    pub id: ProblemId,
    pub title: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub description: String,
    /// Machine-matchable filter key; may differ from the display `domain`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default)]
    pub existing_solutions: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
}

/// One entry of the canonical category rail on the explore screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub key: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { name: "Healthcare", key: "healthcare", icon: "stethoscope" },
    Category { name: "Environment", key: "environment", icon: "leaf" },
    Category { name: "Accessibility", key: "accessibility", icon: "accessibility" },
    Category { name: "Public Services", key: "public-services", icon: "building" },
    Category { name: "Education", key: "education", icon: "book-open" },
    Category { name: "Machine Learning", key: "machine-learning", icon: "brain" },
    Category { name: "AI", key: "ai", icon: "brain" },
    Category { name: "E-Commerce", key: "ecommerce", icon: "shopping-cart" },
    Category { name: "Software Engineering", key: "software-engineering", icon: "code" },
];

#[must_use]
pub fn category_by_key(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key.eq_ignore_ascii_case(key))
}

/// Icon hint for a problem card, keyed on `category` falling back to `domain`.
/// Accepts both the slug and display spellings; unmapped values get the
/// default lightbulb.
#[must_use]
pub fn icon_for(category_or_domain: &str) -> &'static str {
    let key = category_or_domain.trim().to_lowercase().replace(' ', "-");
    category_by_key(&key).map_or("lightbulb", |c| c.icon)
}

/// Top-level screens. Exactly one is active at a time; category and query
/// changes never leave `MainList`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Onboarding,
    MainList,
    SavedList,
    ProblemDetail(ProblemId),
}

/// Navigation requests, kept separate from the full event set so that screen
/// transitions stay a pure function of (screen, request, resolvable ids).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nav {
    DismissOnboarding,
    OpenSaved,
    SelectProblem(ProblemId),
    Back,
}

impl Screen {
    /// Applies one navigation request, returning the next screen.
    ///
    /// Requests outside the transition table leave the screen unchanged.
    /// Selecting a problem resolves against the loaded list from `MainList`
    /// and against the bookmark snapshots from `SavedList`; an unresolvable
    /// id rejects the transition rather than opening a blank detail screen.
    #[must_use]
    pub fn navigate(&self, nav: &Nav, loaded: &[Problem], saved: &BookmarkList) -> Screen {
        match (self, nav) {
            (Screen::Onboarding, Nav::DismissOnboarding) => Screen::MainList,

            (Screen::MainList, Nav::OpenSaved) => Screen::SavedList,
            (Screen::MainList, Nav::SelectProblem(id)) => {
                if loaded.iter().any(|p| &p.id == id) {
                    Screen::ProblemDetail(id.clone())
                } else {
                    tracing::warn!(id = %id, "rejected selection of unknown problem");
                    Screen::MainList
                }
            }

            (Screen::SavedList, Nav::Back) => Screen::MainList,
            (Screen::SavedList, Nav::SelectProblem(id)) => {
                if saved.contains(id) {
                    Screen::ProblemDetail(id.clone())
                } else {
                    tracing::warn!(id = %id, "rejected selection of unsaved problem");
                    Screen::SavedList
                }
            }

            (Screen::ProblemDetail(_), Nav::Back) => Screen::MainList,
            // Re-selecting the open problem is an idempotent no-op.
            (Screen::ProblemDetail(current), Nav::SelectProblem(id)) if current == id => {
                Screen::ProblemDetail(id.clone())
            }

            (screen, _) => screen.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self { message: message.into(), kind }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub screen: Screen,
    pub problems: Vec<Problem>,
    pub bookmarks: BookmarkList,
    pub selected_category: Option<String>,
    pub search_query: String,
    pub show_search: bool,
    pub show_about: bool,
    pub is_loading: bool,
    pub welcome_seen: bool,
    pub feedback: FeedbackStatus,
    pub last_error: Option<AppError>,
    pub active_toast: Option<Toast>,
    pub api: ProblemsApi,
}

impl Model {
    pub fn set_error(&mut self, error: AppError) {
        tracing::warn!(code = error.code(), %error, "surfacing error");
        self.last_error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.active_toast = Some(Toast::new(message, kind));
    }

    pub fn clear_toast(&mut self) {
        self.active_toast = None;
    }

    /// Resolves a problem for detail rendering: the loaded list first, then
    /// the bookmark snapshots (which are self-contained by construction).
    #[must_use]
    pub fn find_problem(&self, id: &ProblemId) -> Option<&Problem> {
        self.problems
            .iter()
            .find(|p| &p.id == id)
            .or_else(|| self.bookmarks.get(id))
    }
}
