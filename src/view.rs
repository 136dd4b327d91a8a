//! Shell-facing view model.
//!
//! The shell renders this and nothing else; it holds pre-filtered lists and
//! display hints so no shell needs to reimplement filtering or icon mapping.

use serde::Serialize;

use crate::filter;
use crate::model::{icon_for, FeedbackStatus, Model, Problem, Screen, Toast, CATEGORIES};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenView {
    Onboarding,
    MainList,
    SavedList,
    ProblemDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: &'static str,
    pub key: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

/// One card in a problem grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProblemCard {
    pub id: String,
    pub title: String,
    pub domain: String,
    pub description: String,
    pub icon: &'static str,
    pub saved: bool,
}

/// The full record rendered on the detail screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProblemView {
    pub id: String,
    pub title: String,
    pub domain: String,
    pub description: String,
    pub background: Option<String>,
    pub existing_solutions: Vec<String>,
    pub limitations: Vec<String>,
    pub icon: &'static str,
    pub saved: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub screen: ScreenView,
    pub categories: Vec<CategoryView>,
    pub problems: Vec<ProblemCard>,
    pub saved: Vec<ProblemCard>,
    pub detail: Option<ProblemView>,
    pub search_query: String,
    pub show_search: bool,
    pub show_about: bool,
    pub is_loading: bool,
    pub result_count: usize,
    pub saved_count: usize,
    pub feedback: FeedbackStatus,
    /// Generic, user-safe rendering of the last surfaced error, if any.
    pub error_message: Option<String>,
    pub toast: Option<Toast>,
}

fn card(problem: &Problem, saved: bool) -> ProblemCard {
    let icon_key = problem.category.as_deref().unwrap_or(&problem.domain);
    ProblemCard {
        id: problem.id.as_str().to_owned(),
        title: problem.title.clone(),
        domain: problem.domain.clone(),
        description: problem.description.clone(),
        icon: icon_for(icon_key),
        saved,
    }
}

fn detail_view(problem: &Problem, saved: bool) -> ProblemView {
    let icon_key = problem.category.as_deref().unwrap_or(&problem.domain);
    ProblemView {
        id: problem.id.as_str().to_owned(),
        title: problem.title.clone(),
        domain: problem.domain.clone(),
        description: problem.description.clone(),
        background: problem.background.clone(),
        existing_solutions: problem.existing_solutions.clone(),
        limitations: problem.limitations.clone(),
        icon: icon_for(icon_key),
        saved,
    }
}

#[must_use]
pub fn view_model(model: &Model) -> ViewModel {
    let screen = match &model.screen {
        Screen::Onboarding => ScreenView::Onboarding,
        Screen::MainList => ScreenView::MainList,
        Screen::SavedList => ScreenView::SavedList,
        Screen::ProblemDetail(_) => ScreenView::ProblemDetail,
    };

    let filtered = filter::filter_problems(
        &model.problems,
        model.selected_category.as_deref(),
        &model.search_query,
    );
    let problems: Vec<ProblemCard> = filtered
        .iter()
        .map(|p| card(p, model.bookmarks.contains(&p.id)))
        .collect();

    let saved: Vec<ProblemCard> = model.bookmarks.iter().map(|p| card(p, true)).collect();

    let detail = match &model.screen {
        Screen::ProblemDetail(id) => model
            .find_problem(id)
            .map(|p| detail_view(p, model.bookmarks.contains(id))),
        _ => None,
    };

    ViewModel {
        screen,
        categories: CATEGORIES
            .iter()
            .map(|c| CategoryView {
                name: c.name,
                key: c.key,
                icon: c.icon,
                selected: model
                    .selected_category
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(c.key)),
            })
            .collect(),
        result_count: problems.len(),
        saved_count: saved.len(),
        problems,
        saved,
        detail,
        search_query: model.search_query.clone(),
        show_search: model.show_search,
        show_about: model.show_about,
        is_loading: model.is_loading,
        feedback: model.feedback,
        error_message: model
            .last_error
            .as_ref()
            .map(crate::AppError::user_facing_message),
        toast: model.active_toast.clone(),
    }
}
