pub mod canon;
pub mod citation;
pub mod document;
pub mod excerpt;
pub mod fetch;
pub mod query;
pub mod settings;
pub mod tagger;
pub mod version;

// Re-export main types for convenient access
pub use citation::{CanonKind, Citation, VerseRange};
pub use document::{Annotation, Document, Node, TextBlock};
pub use settings::Settings;
pub use tagger::{Reftagger, TagStats};

// Re-export the resolution and excerpt surfaces used by embedders
pub use excerpt::ExcerptConfig;
pub use fetch::{ExcerptLoader, ExcerptState, FetchResponse, VerseFetch};
pub use version::Translation;
