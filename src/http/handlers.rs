//! Page handlers for the note workflow.
//!
//! ```text
//! GET  /        entry: fresh session + CSRF token
//! GET  /start   note form
//! GET  /assets/start.js  expiration toggle for the note form
//! ANY  /review  review step (POST only, enforced by the step itself)
//! ANY  /done    final confirmation
//! ```

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use crate::http::request::ClientSession;
use crate::http::response::{page_after_teardown, page_with_session, teardown_redirect};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::render::assets::START_SCRIPT;
use crate::render::{pages, ReviewView};
use crate::security::csrf::generate_token;
use crate::session::keys;
use crate::workflow::done::{self, ConfirmForm};
use crate::workflow::review::{self, ReviewForm};
use crate::workflow::{StepError, Transition, ENTRY_PAGE};

#[derive(Debug, Default, Deserialize)]
pub struct EntryParams {
    pub lang: Option<String>,
}

pub async fn entry(
    State(state): State<AppState>,
    Query(params): Query<EntryParams>,
    ClientSession { mut handle, mut language }: ClientSession,
) -> Response {
    let id = handle.restart();
    handle.set(keys::CSRF_TOKEN, generate_token());

    if let Some(lang) = params.lang.filter(|l| state.catalog.knows(l)) {
        language = lang.to_lowercase();
        handle.set(keys::LANGUAGE, language.clone());
    }

    tracing::debug!(language = %language, "Session opened");
    page_with_session(&state.cookie, id, pages::entry_page(&state.catalog, &language))
}

pub async fn start(
    State(state): State<AppState>,
    ClientSession { mut handle, language }: ClientSession,
) -> Response {
    match handle.get(keys::CSRF_TOKEN) {
        Some(token) => Html(pages::start_page(&state.catalog, &language, &token)).into_response(),
        None => {
            handle.destroy();
            teardown_redirect(&state.cookie, ENTRY_PAGE)
        }
    }
}

pub async fn start_script() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], START_SCRIPT)
}

pub async fn review(
    State(state): State<AppState>,
    method: Method,
    ClientSession { mut handle, language }: ClientSession,
    form: Result<Form<ReviewForm>, FormRejection>,
) -> Response {
    let form = form.ok().map(|Form(form)| form);
    let transition = review::submit(&method, form, &mut handle, state.clock.today());
    record("review", &transition);

    match transition {
        Transition::Advanced(draft) => {
            let token = handle.get(keys::CSRF_TOKEN).unwrap_or_default();
            let view = ReviewView::new(&state.catalog, &language, &draft, &token);
            Html(pages::review_page(&state.catalog, &view)).into_response()
        }
        Transition::Rejected(err) => teardown_redirect(&state.cookie, err.redirect_target()),
    }
}

pub async fn done(
    State(state): State<AppState>,
    method: Method,
    ClientSession { mut handle, language }: ClientSession,
    form: Result<Form<ConfirmForm>, FormRejection>,
) -> Response {
    let form = form.ok().map(|Form(form)| form);
    let transition = done::confirm(&method, form, &mut handle);
    record("done", &transition);

    match transition {
        Transition::Advanced(_) => {
            page_after_teardown(&state.cookie, pages::done_page(&state.catalog, &language))
        }
        Transition::Rejected(err) => teardown_redirect(&state.cookie, err.redirect_target()),
    }
}

fn record<T>(step: &'static str, transition: &Transition<T>) {
    let category = match transition {
        Transition::Advanced(_) => "none",
        Transition::Rejected(err) => err.category(),
    };
    metrics::record_transition(step, transition.outcome(), category);

    if let Transition::Rejected(err) = transition {
        log_rejection(step, err);
    } else {
        tracing::debug!(step, "Step advanced");
    }
}

fn log_rejection(step: &'static str, err: &StepError) {
    tracing::debug!(
        step,
        category = err.category(),
        target = err.redirect_target(),
        "Step rejected, session destroyed"
    );
}
