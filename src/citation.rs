use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the two supported canons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonKind {
    Quran,
    Bible,
}

impl CanonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonKind::Quran => "quran",
            CanonKind::Bible => "bible",
        }
    }
}

impl fmt::Display for CanonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inclusive verse range. `end == None` means a single verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRange {
    pub start: u32,
    pub end: Option<u32>,
}

impl VerseRange {
    pub fn single(start: u32) -> Self {
        Self { start, end: None }
    }

    pub fn span(start: u32, end: u32) -> Self {
        Self { start, end: Some(end) }
    }
}

impl fmt::Display for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}

/// Parses a verse list as written in prose, e.g. `16`, `4-7` or `4-7,9`.
/// Pieces that do not parse as numbers are dropped.
pub fn parse_verse_list(raw: &str) -> Vec<VerseRange> {
    raw.split(',')
        .filter_map(|piece| {
            let piece = piece.trim();
            let mut bounds = piece.splitn(2, ['-', '\u{2013}']);
            let start: u32 = bounds.next()?.trim().parse().ok()?;
            match bounds.next() {
                Some(end) => {
                    let end: u32 = end.trim().parse().ok()?;
                    Some(VerseRange::span(start, end))
                }
                None => Some(VerseRange::single(start)),
            }
        })
        .collect()
}

/// One located reference, produced per scan and consumed immediately by the
/// annotator. `order` is the byte offset of the match start in the scanned
/// text; it drives the reverse-order wrap pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub canon: CanonKind,
    pub book: Option<String>,
    pub chapter: u32,
    pub verses: Vec<VerseRange>,
    pub text: String,
    pub order: usize,
}

impl Citation {
    /// Verse ranges formatted back to the compact prose form, e.g. `4-7,9`.
    pub fn verses_label(&self) -> String {
        self.verses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Permalink to the cited passage on the reading site. The version query
    /// parameter is omitted when resolution found no covering edition.
    pub fn permalink(&self, version: Option<&str>) -> String {
        let mut link = format!("https://alkotob.org/{}", self.canon);
        if let Some(book) = &self.book {
            link.push('/');
            link.push_str(book);
        }
        link.push_str(&format!("/{}:{}", self.chapter, self.verses_label()));
        if let Some(version) = version {
            link.push_str(&format!("?version={version}"));
        }
        link
    }
}
