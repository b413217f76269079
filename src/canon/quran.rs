use anyhow::Result;
use regex::Regex;

use super::registry;
use super::{name_alternation, CitationSource, VERSE_LIST};
use crate::citation::{parse_verse_list, CanonKind, Citation};
use crate::version::Translation;

/// The single-book canon. Citations address chapters (surahs) directly, so
/// resolution keys are always numeric chapter numbers.
pub struct QuranCanon {
    translations: Vec<Translation>,
    /// `Quran 2:255` style, explicit chapter and verse list.
    explicit: Regex,
    /// `سورة البقرة 255` style, surah name resolved through the registry.
    named: Regex,
}

impl QuranCanon {
    pub fn new() -> Result<Self> {
        Self::with_translations(default_translations())
    }

    pub fn with_translations(translations: Vec<Translation>) -> Result<Self> {
        let explicit = Regex::new(&format!(
            r"(?i)\b(?:quran|qur['\u{{2019}}]an|koran|surah|sura)\s+(?P<chapter>\d{{1,3}})\s*:\s*(?P<verses>{VERSE_LIST})"
        ))?;
        let names = name_alternation(
            registry::QURAN_CHAPTERS
                .iter()
                .flat_map(|entry| entry.iter().copied()),
        );
        let named = Regex::new(&format!(
            r"سورة\s+(?P<name>{names})\s+(?P<verses>{VERSE_LIST})"
        ))?;
        Ok(Self {
            translations,
            explicit,
            named,
        })
    }
}

/// Bundled editions; callers with their own catalog use `with_translations`.
fn default_translations() -> Vec<Translation> {
    vec![
        Translation::new("quran").with_chapters(0..registry::QURAN_CHAPTERS.len()),
        Translation::new("sabeel").with_chapters(0..registry::QURAN_CHAPTERS.len()),
    ]
}

impl CitationSource for QuranCanon {
    fn kind(&self) -> CanonKind {
        CanonKind::Quran
    }

    fn translations(&self) -> &[Translation] {
        &self.translations
    }

    fn parse(&self, text: &str) -> Vec<Citation> {
        let mut citations = Vec::new();

        for caps in self.explicit.captures_iter(text) {
            let Some(matched) = caps.get(0) else { continue };
            let Ok(chapter) = caps["chapter"].parse::<u32>() else {
                continue;
            };
            let verses = parse_verse_list(&caps["verses"]);
            if chapter == 0 || verses.is_empty() {
                continue;
            }
            citations.push(Citation {
                canon: CanonKind::Quran,
                book: None,
                chapter,
                verses,
                text: matched.as_str().to_string(),
                order: matched.start(),
            });
        }

        for caps in self.named.captures_iter(text) {
            let Some(matched) = caps.get(0) else { continue };
            let Some(chapter) = registry::quran_chapter_number(&caps["name"]) else {
                continue;
            };
            let verses = parse_verse_list(&caps["verses"]);
            if verses.is_empty() {
                continue;
            }
            citations.push(Citation {
                canon: CanonKind::Quran,
                book: None,
                chapter,
                verses,
                text: matched.as_str().to_string(),
                order: matched.start(),
            });
        }

        citations
    }
}
