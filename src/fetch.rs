use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::citation::CanonKind;
use crate::document::Annotation;
use crate::excerpt::{self, ExcerptConfig};
use crate::query::{self, VerseQuery};

/// One error entry in a fetch response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchError {
    pub message: String,
}

/// Response envelope for a verse query. Failures surface as a structured
/// `errors` field, not as a transport error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchResponse {
    pub data: Option<Value>,
    pub errors: Option<Vec<FetchError>>,
}

/// The transport seam. One call per excerpt open; implementations do not
/// retry.
#[async_trait]
pub trait VerseFetch: Send + Sync {
    async fn fetch(&self, query: &VerseQuery, variables: &Value) -> Result<FetchResponse>;
}

/// Display state of one excerpt area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcerptState {
    Loading,
    Ready(String),
    NotFound,
    Failed,
}

/// Generation counter and display state, guarded together: the token
/// re-check and the state write must happen under one lock so a stale
/// result cannot slip in between them.
struct LoaderState {
    generation: u64,
    display: ExcerptState,
}

/// Drives one excerpt display area.
///
/// Every `open` captures a generation token; the fetched result is applied
/// only while that token is still current. `close` (or a newer `open`)
/// bumps the generation, so a fetch resolving late can never overwrite a
/// display area that has since been closed or reused.
pub struct ExcerptLoader<F> {
    fetch: F,
    config: ExcerptConfig,
    not_found: String,
    state: Mutex<LoaderState>,
}

impl<F: VerseFetch> ExcerptLoader<F> {
    pub fn new(fetch: F, config: ExcerptConfig, not_found: impl Into<String>) -> Self {
        Self {
            fetch,
            config,
            not_found: not_found.into(),
            state: Mutex::new(LoaderState {
                generation: 0,
                display: ExcerptState::Loading,
            }),
        }
    }

    /// Current display state.
    pub fn state(&self) -> ExcerptState {
        self.guard().display.clone()
    }

    /// Resets the display area and invalidates any in-flight fetch.
    pub fn close(&self) {
        let mut state = self.guard();
        state.generation += 1;
        state.display = ExcerptState::Loading;
    }

    /// Fetches and renders the excerpt for an annotated span. The query is
    /// built from the annotation's frozen metadata; in particular the
    /// version resolved at annotation time is sent as-is, a missing one as
    /// null. Returns the display state current once this request settled,
    /// which is a newer request's state when this one went stale.
    pub async fn open(&self, annotation: &Annotation) -> ExcerptState {
        let token = {
            let mut state = self.guard();
            state.generation += 1;
            state.display = ExcerptState::Loading;
            state.generation
        };

        let built = query::build(annotation.canon, &annotation.verses);
        let variables = query::variables(
            annotation.version.as_deref(),
            annotation.book.as_deref(),
            annotation.chapter,
        );

        let response = match self.fetch.fetch(&built, &variables).await {
            Ok(response) => response,
            Err(error) => {
                warn!(error = %error, "verse fetch failed");
                return self.apply(token, ExcerptState::Failed);
            }
        };

        if let Some(errors) = response.errors.as_deref() {
            if !errors.is_empty() {
                warn!(
                    count = errors.len(),
                    first = %errors[0].message,
                    "verse fetch returned errors"
                );
                return self.apply(token, ExcerptState::Failed);
            }
        }

        let chapter = response
            .data
            .as_ref()
            .and_then(|data| chapter_payload(annotation.canon, data));
        let state = match excerpt::render(chapter, &self.config) {
            Some(html) => ExcerptState::Ready(html),
            None => ExcerptState::NotFound,
        };
        self.apply(token, state)
    }

    /// Markup for the current state; `NotFound` renders the localized
    /// placeholder the loader was constructed with.
    pub fn display_html(&self) -> String {
        match self.state() {
            ExcerptState::Loading => "<div class=\"alkotob-loading\"></div>".to_string(),
            ExcerptState::Ready(html) => html,
            ExcerptState::NotFound => format!("<span>{}</span>", self.not_found),
            ExcerptState::Failed => {
                "<span class=\"alkotob-error\">Unable to load passage</span>".to_string()
            }
        }
    }

    fn apply(&self, token: u64, state: ExcerptState) -> ExcerptState {
        let mut guard = self.guard();
        if guard.generation != token {
            // A close or a newer open superseded this request.
            return guard.display.clone();
        }
        guard.display = state.clone();
        state
    }

    fn guard(&self) -> MutexGuard<'_, LoaderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Digs the chapter payload out of the response data, per canon shape.
fn chapter_payload(canon: CanonKind, data: &Value) -> Option<&Value> {
    match canon {
        CanonKind::Quran => data.pointer("/quran/chapter"),
        CanonKind::Bible => data.pointer("/bible/book/chapter"),
    }
}
