//! The update loop: one event in, model mutation plus effects out.
//!
//! Every branch ends in a render request so shells stay in sync with the
//! model. Capability completions for superseded requests still apply in
//! arrival order; the last response to land wins.

use uuid::Uuid;

use crate::api;
use crate::bookmarks::BookmarkList;
use crate::capabilities::Capabilities;
use crate::event::Event;
use crate::model::{FeedbackStatus, Model, Nav, ToastKind};
use crate::view::{self, ViewModel};
use crate::{
    AppError, ErrorKind, MAX_FEEDBACK_MESSAGE_LEN, SAVED_PROBLEMS_KEY, WELCOME_SEEN_KEY,
    WELCOME_SEEN_VALUE,
};

#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        tracing::debug!(event = event.name(), "update");

        match event {
            Event::Started => {
                caps.kv
                    .get(WELCOME_SEEN_KEY.to_string(), Event::WelcomeFlagLoaded);
                caps.kv
                    .get(SAVED_PROBLEMS_KEY.to_string(), Event::BookmarksLoaded);
                Self::fetch_problems(model, caps);
            }

            Event::OnboardingDismissed => {
                model.screen = model
                    .screen
                    .navigate(&Nav::DismissOnboarding, &model.problems, &model.bookmarks);
                if !model.welcome_seen {
                    model.welcome_seen = true;
                    caps.kv.set(
                        WELCOME_SEEN_KEY.to_string(),
                        WELCOME_SEEN_VALUE.to_vec(),
                        |_| Event::WelcomeFlagWritten,
                    );
                }
            }

            Event::CategorySelected(selection) => {
                model.selected_category =
                    selection.filter(|key| !key.trim().is_empty());
                Self::fetch_problems(model, caps);
            }

            Event::QueryChanged(query) => {
                model.search_query = query;
            }

            Event::SearchToggled(visible) => {
                model.show_search = visible;
                if !visible {
                    model.search_query.clear();
                }
            }

            Event::AboutToggled(visible) => {
                model.show_about = visible;
            }

            Event::SavedOpened => {
                model.screen = model
                    .screen
                    .navigate(&Nav::OpenSaved, &model.problems, &model.bookmarks);
            }

            Event::ProblemSelected(id) => {
                model.screen = model.screen.navigate(
                    &Nav::SelectProblem(id),
                    &model.problems,
                    &model.bookmarks,
                );
            }

            Event::BackPressed => {
                model.screen =
                    model
                        .screen
                        .navigate(&Nav::Back, &model.problems, &model.bookmarks);
            }

            Event::BookmarkToggled(id) => {
                let Some(problem) = model.find_problem(&id).cloned() else {
                    tracing::warn!(id = %id, "ignoring bookmark toggle for unknown problem");
                    return;
                };
                let (bookmarks, now_saved) =
                    std::mem::take(&mut model.bookmarks).toggled(&problem);
                model.bookmarks = bookmarks;

                if now_saved {
                    model.show_toast("Problem saved!", ToastKind::Success);
                } else {
                    model.show_toast("Problem removed", ToastKind::Info);
                }

                caps.kv.set(
                    SAVED_PROBLEMS_KEY.to_string(),
                    model.bookmarks.to_bytes(),
                    |_| Event::BookmarksWritten,
                );
            }

            Event::FeedbackSubmitted(message) => {
                model.clear_error();
                let message = message.trim().to_owned();
                if message.is_empty() {
                    caps.render.render();
                    return;
                }
                if message.len() > MAX_FEEDBACK_MESSAGE_LEN {
                    model.set_error(AppError::new(
                        ErrorKind::Validation,
                        "Feedback message is too long.",
                    ));
                    model.feedback = FeedbackStatus::Failed;
                    caps.render.render();
                    return;
                }

                model.feedback = FeedbackStatus::Submitting;
                let payload = api::FeedbackPayload::anonymous(message);
                let idempotency_key = Uuid::new_v4().to_string();
                caps.http
                    .post(model.api.feedback_url().as_str())
                    .header("Content-Type", "application/json")
                    .header("Idempotency-Key", &idempotency_key)
                    .body(payload.to_bytes())
                    .send(|result| Event::FeedbackResponse(Box::new(result)));
            }

            Event::ToastDismissed => {
                model.clear_toast();
            }

            Event::BookmarksLoaded(result) => match result {
                Ok(stored) => {
                    model.bookmarks = BookmarkList::from_stored(stored.as_deref());
                    tracing::debug!(count = model.bookmarks.len(), "bookmarks restored");
                }
                Err(error) => {
                    tracing::warn!(?error, "bookmark storage unavailable, starting empty");
                }
            },

            Event::WelcomeFlagLoaded(result) => match result {
                Ok(Some(_)) => {
                    model.welcome_seen = true;
                    model.screen = model.screen.navigate(
                        &Nav::DismissOnboarding,
                        &model.problems,
                        &model.bookmarks,
                    );
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(?error, "welcome flag unreadable, keeping onboarding");
                }
            },

            Event::BookmarksWritten | Event::WelcomeFlagWritten => {
                // Writes are fire-and-forget; nothing to redraw.
                return;
            }

            Event::ProblemsFetched(result) => {
                model.is_loading = false;
                model.problems = Self::problems_from(*result);
            }

            Event::FeedbackResponse(result) => match *result {
                Ok(response) if response.status().is_success() => {
                    model.feedback = FeedbackStatus::Submitted;
                }
                Ok(response) => {
                    model.feedback = FeedbackStatus::Failed;
                    model.set_error(AppError::from_http_status(u16::from(response.status())));
                }
                Err(error) => {
                    model.feedback = FeedbackStatus::Failed;
                    model.set_error(
                        AppError::new(ErrorKind::Network, "feedback submission failed")
                            .with_internal(error.to_string()),
                    );
                }
            },
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        view::view_model(model)
    }
}

impl App {
    fn fetch_problems(model: &mut Model, caps: &Capabilities) {
        model.is_loading = true;
        let url = model.api.listing_url(model.selected_category.as_deref());
        tracing::debug!(url = %url, "fetching problem list");
        caps.http
            .get(url.as_str())
            .send(|result| Event::ProblemsFetched(Box::new(result)));
    }

    /// Turns a listing response into a problem list, degrading every failure
    /// mode to the empty list.
    fn problems_from(
        result: crux_http::Result<crux_http::Response<Vec<u8>>>,
    ) -> Vec<crate::model::Problem> {
        let mut response = match result {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, "problem fetch failed, showing empty list");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                status = u16::from(response.status()),
                "problem fetch rejected, showing empty list"
            );
            return Vec::new();
        }

        let body = response.take_body().unwrap_or_default();
        match api::parse_problems(&body) {
            Ok(problems) => problems,
            Err(error) => {
                let error = AppError::from(error);
                tracing::warn!(code = error.code(), %error, "showing empty list");
                Vec::new()
            }
        }
    }
}
