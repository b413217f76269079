//! The two canons behind one seam: each canon can scan prose for citations
//! and resolve the best covering edition for a citation key.

use anyhow::Result;

use crate::citation::{CanonKind, Citation};
use crate::version::{resolve_version, Translation};

pub mod bible;
pub mod quran;
pub mod registry;

pub use bible::BibleCanon;
pub use quran::QuranCanon;

/// Capability shared by `QuranCanon` and `BibleCanon`. The parser must be
/// pure and side-effect-free; a caller can swap in a richer grammar by
/// implementing this trait.
pub trait CitationSource {
    fn kind(&self) -> CanonKind;

    /// The editions available for this canon, with their coverage tables.
    fn translations(&self) -> &[Translation];

    /// Scans `text` and returns every located citation with its start offset.
    fn parse(&self, text: &str) -> Vec<Citation>;

    /// Picks the highest-priority covering edition for a citation key.
    fn resolve_version(&self, key: &str, desired: &[String]) -> Result<Option<&str>> {
        resolve_version(self.translations(), key, desired)
    }
}

/// Verse-list subpattern shared by both canon parsers: `16`, `4-7`, `4-7,9`,
/// with optional spaces and en-dash ranges.
pub(crate) const VERSE_LIST: &str =
    r"\d{1,3}(?:\s*[-\u{2013}]\s*\d{1,3})?(?:\s*,\s*\d{1,3}(?:\s*[-\u{2013}]\s*\d{1,3})?)*";

/// Builds a longest-first regex alternation from registry name spellings so
/// that e.g. `1 corinthians` is tried before `corinthians`-style prefixes.
pub(crate) fn name_alternation<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_alternation_is_longest_first() {
        let alternation = name_alternation(["jn", "john", "1 john"].into_iter());
        assert_eq!(alternation, "1 john|john|jn");
    }

    #[test]
    fn test_name_alternation_escapes_metacharacters() {
        let alternation = name_alternation(["a.b"].into_iter());
        assert_eq!(alternation, "a\\.b");
    }
}
