use anyhow::Result;
use regex::Regex;

use super::registry;
use super::{name_alternation, CitationSource, VERSE_LIST};
use crate::citation::{parse_verse_list, CanonKind, Citation};
use crate::version::Translation;

/// The multi-book canon. Citations name a book, so resolution keys are book
/// keys; a numeric-looking key still gets the uniform chapter-index shift.
pub struct BibleCanon {
    translations: Vec<Translation>,
    /// `John 3:16` style with registry book names and abbreviations.
    reference: Regex,
}

impl BibleCanon {
    pub fn new() -> Result<Self> {
        Self::with_translations(default_translations())
    }

    pub fn with_translations(translations: Vec<Translation>) -> Result<Self> {
        let names = name_alternation(
            registry::BIBLE_BOOKS
                .iter()
                .flat_map(|entry| entry.names.iter().copied()),
        );
        let reference = Regex::new(&format!(
            r"(?i)\b(?P<book>{names})\.?\s+(?P<chapter>\d{{1,3}})\s*:\s*(?P<verses>{VERSE_LIST})"
        ))?;
        Ok(Self {
            translations,
            reference,
        })
    }
}

/// Bundled editions; callers with their own catalog use `with_translations`.
fn default_translations() -> Vec<Translation> {
    vec![
        Translation::new("injil").with_books(registry::NEW_TESTAMENT.iter().copied()),
        Translation::new("zabur").with_books(["psalms"]),
        Translation::new("tma").with_books(registry::TORAH.iter().copied()),
        Translation::new("sbleng")
            .with_books(registry::BIBLE_BOOKS.iter().map(|entry| entry.key)),
        Translation::new("gnt").with_books(registry::NEW_TESTAMENT.iter().copied()),
    ]
}

impl CitationSource for BibleCanon {
    fn kind(&self) -> CanonKind {
        CanonKind::Bible
    }

    fn translations(&self) -> &[Translation] {
        &self.translations
    }

    fn parse(&self, text: &str) -> Vec<Citation> {
        let mut citations = Vec::new();

        for caps in self.reference.captures_iter(text) {
            let Some(matched) = caps.get(0) else { continue };
            let Some(book) = registry::bible_book_key(&caps["book"]) else {
                continue;
            };
            let Ok(chapter) = caps["chapter"].parse::<u32>() else {
                continue;
            };
            let verses = parse_verse_list(&caps["verses"]);
            if chapter == 0 || verses.is_empty() {
                continue;
            }
            citations.push(Citation {
                canon: CanonKind::Bible,
                book: Some(book.to_string()),
                chapter,
                verses,
                text: matched.as_str().to_string(),
                order: matched.start(),
            });
        }

        citations
    }
}
