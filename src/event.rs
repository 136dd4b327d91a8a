use crux_kv::error::KeyValueError;

use crate::model::ProblemId;

type HttpResult = crux_http::Result<crux_http::Response<Vec<u8>>>;

/// Everything that can drive the core: shell-originated user actions plus
/// capability completions. HTTP responses are boxed to keep the enum small.
#[derive(Debug)]
pub enum Event {
    /// Sent by the shell exactly once after the core is constructed.
    Started,

    // -- user actions --
    OnboardingDismissed,
    CategorySelected(Option<String>),
    QueryChanged(String),
    SearchToggled(bool),
    AboutToggled(bool),
    SavedOpened,
    ProblemSelected(ProblemId),
    BackPressed,
    BookmarkToggled(ProblemId),
    FeedbackSubmitted(String),
    ToastDismissed,

    // -- capability completions --
    BookmarksLoaded(Result<Option<Vec<u8>>, KeyValueError>),
    WelcomeFlagLoaded(Result<Option<Vec<u8>>, KeyValueError>),
    BookmarksWritten,
    WelcomeFlagWritten,
    ProblemsFetched(Box<HttpResult>),
    FeedbackResponse(Box<HttpResult>),
}

impl Event {
    /// Stable name for log lines; payloads are deliberately excluded.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::Started => "started",
            Event::OnboardingDismissed => "onboarding_dismissed",
            Event::CategorySelected(_) => "category_selected",
            Event::QueryChanged(_) => "query_changed",
            Event::SearchToggled(_) => "search_toggled",
            Event::AboutToggled(_) => "about_toggled",
            Event::SavedOpened => "saved_opened",
            Event::ProblemSelected(_) => "problem_selected",
            Event::BackPressed => "back_pressed",
            Event::BookmarkToggled(_) => "bookmark_toggled",
            Event::FeedbackSubmitted(_) => "feedback_submitted",
            Event::ToastDismissed => "toast_dismissed",
            Event::BookmarksLoaded(_) => "bookmarks_loaded",
            Event::WelcomeFlagLoaded(_) => "welcome_flag_loaded",
            Event::BookmarksWritten => "bookmarks_written",
            Event::WelcomeFlagWritten => "welcome_flag_written",
            Event::ProblemsFetched(_) => "problems_fetched",
            Event::FeedbackResponse(_) => "feedback_response",
        }
    }
}
