// Full excerpt pipeline: annotate a document, then load and render the
// excerpt for a span through a scripted fetch implementation.

use anyhow::Result;
use async_trait::async_trait;
use reftagger::fetch::FetchError;
use reftagger::query::VerseQuery;
use reftagger::{
    Document, ExcerptConfig, ExcerptLoader, ExcerptState, FetchResponse, Reftagger, Settings,
    VerseFetch,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

type RequestLog = Arc<Mutex<Vec<(String, Value)>>>;

/// Serves a canned response and records what was asked of it through a
/// handle the test keeps after the loader takes ownership of the fetch.
struct CannedFetch {
    response: FetchResponse,
    requests: RequestLog,
}

impl CannedFetch {
    fn new(response: FetchResponse) -> (Self, RequestLog) {
        let requests: RequestLog = Arc::default();
        (
            Self {
                response,
                requests: requests.clone(),
            },
            requests,
        )
    }
}

#[async_trait]
impl VerseFetch for CannedFetch {
    async fn fetch(&self, query: &VerseQuery, variables: &Value) -> Result<FetchResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((query.text.clone(), variables.clone()));
        Ok(self.response.clone())
    }
}

fn annotated_john_span() -> reftagger::Annotation {
    let tagger = Reftagger::new(Settings::default()).expect("Tagger construction should succeed");
    let mut doc = Document::from_text("Read John 3:16-17 tonight.");
    tagger.annotate(&mut doc).expect("Annotation should succeed");
    let annotation = doc.blocks[0]
        .annotations()
        .next()
        .expect("annotation present")
        .clone();
    annotation
}

/// The loader queries with the annotation's frozen metadata and renders the
/// verses that come back.
#[tokio::test]
async fn test_annotation_to_excerpt() {
    let (fetch, requests) = CannedFetch::new(FetchResponse {
        data: Some(json!({
            "bible": {
                "name": "Injil Sharif",
                "direction": "rtl",
                "language": "ar",
                "book": {
                    "name": "John",
                    "chapter": {
                        "id": 3,
                        "name": "John 3",
                        "verses16": [
                            { "number": 16, "text": "For God so loved the world." },
                            { "number": 17, "text": "For God sent not his Son to condemn." }
                        ]
                    }
                }
            }
        })),
        errors: None,
    });
    let loader = ExcerptLoader::new(fetch, ExcerptConfig::default(), "Not found");

    let annotation = annotated_john_span();
    let state = loader.open(&annotation).await;

    let html = match state {
        ExcerptState::Ready(html) => html,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert!(html.contains("<sup>16</sup> For God so loved the world."));
    assert!(html.contains("<sup>17</sup>"));

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (query_text, variables) = &requests[0];
    assert!(query_text.contains("verses16: verses(start: 16, end: 17)"));
    assert_eq!(variables["version"], "injil");
    assert_eq!(variables["book"], "john");
    assert_eq!(variables["chapter"], 3);
}

/// A tight budget truncates at a word boundary across the whole excerpt.
#[tokio::test]
async fn test_excerpt_respects_configured_budget() {
    let (fetch, _requests) = CannedFetch::new(FetchResponse {
        data: Some(json!({
            "bible": {
                "book": {
                    "chapter": {
                        "verses16": [
                            { "number": 16, "text": "For God so loved the world" }
                        ]
                    }
                }
            }
        })),
        errors: None,
    });
    let config = ExcerptConfig {
        max_chars: 11,
        ..Default::default()
    };
    let loader = ExcerptLoader::new(fetch, config, "Not found");

    let state = loader.open(&annotated_john_span()).await;

    match state {
        ExcerptState::Ready(html) => {
            assert!(html.contains("For God so &hellip;"));
            assert!(!html.contains("loved"));
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

/// No chapter payload renders the localized not-found placeholder.
#[tokio::test]
async fn test_uncovered_citation_renders_not_found() {
    let (fetch, _requests) = CannedFetch::new(FetchResponse {
        data: Some(json!({ "bible": null })),
        errors: None,
    });
    let settings = Settings::default();
    let loader = ExcerptLoader::new(fetch, ExcerptConfig::default(), settings.not_found_message());

    let state = loader.open(&annotated_john_span()).await;

    assert_eq!(state, ExcerptState::NotFound);
    assert_eq!(loader.display_html(), "<span>Not found</span>");
}

/// Structured fetch errors leave an explicit failed display state.
#[tokio::test]
async fn test_fetch_errors_surface_as_failed_state() {
    let (fetch, _requests) = CannedFetch::new(FetchResponse {
        data: None,
        errors: Some(vec![FetchError {
            message: "upstream unavailable".to_string(),
        }]),
    });
    let loader = ExcerptLoader::new(fetch, ExcerptConfig::default(), "Not found");

    let state = loader.open(&annotated_john_span()).await;

    assert_eq!(state, ExcerptState::Failed);
}
