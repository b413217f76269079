use anyhow::{bail, Result};
use std::collections::HashMap;

/// One published edition of a canon with partial coverage. Chapter coverage
/// is keyed by zero-based chapter index, book coverage by book key; an entry
/// counts only when its value is `true`.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    pub abbreviation: String,
    pub chapters: HashMap<usize, bool>,
    pub books: HashMap<String, bool>,
}

impl Translation {
    pub fn new(abbreviation: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            ..Default::default()
        }
    }

    pub fn with_chapters(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        for idx in indices {
            self.chapters.insert(idx, true);
        }
        self
    }

    pub fn with_books<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        for key in keys {
            self.books.insert(key.into(), true);
        }
        self
    }

    pub fn covers_chapter(&self, index: usize) -> bool {
        self.chapters.get(&index).copied().unwrap_or(false)
    }

    pub fn covers_book(&self, key: &str) -> bool {
        self.books.get(key).copied().unwrap_or(false)
    }
}

/// Picks the highest-priority edition that covers `key`.
///
/// A numeric-looking key is a 1-based chapter number as written in the source
/// text and is shifted down by one before lookup; the shifted value feeds
/// both the chapter and the book coverage checks. Any other key is used
/// as-is against book coverage. Returns `Ok(None)` when no desired edition
/// covers the key; callers treat that as "excerpt unavailable", not as an
/// error.
pub fn resolve_version<'a>(
    translations: &'a [Translation],
    key: &str,
    desired: &[String],
) -> Result<Option<&'a str>> {
    if translations.is_empty() {
        bail!("no translations configured for this canon");
    }

    let chapter_index = key
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1));
    let book_key = match chapter_index {
        Some(index) => index.to_string(),
        None => key.to_string(),
    };

    for want in desired {
        let Some(translation) = translations.iter().find(|t| &t.abbreviation == want) else {
            continue;
        };

        if let Some(index) = chapter_index {
            if translation.covers_chapter(index) {
                return Ok(Some(&translation.abbreviation));
            }
        }

        if translation.covers_book(&book_key) {
            return Ok(Some(&translation.abbreviation));
        }
    }

    Ok(None)
}
