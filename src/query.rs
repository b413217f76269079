use serde_json::{json, Map, Value};

use crate::citation::{CanonKind, VerseRange};

/// A built verse query: the query text plus the canon shape it was built
/// for. Construction is pure; no I/O happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseQuery {
    pub canon: CanonKind,
    pub text: String,
}

/// Builds the query for a verse-range sequence.
///
/// Each range becomes a sub-request aliased by its start verse so disjoint
/// ranges from one chapter cannot collide: an exact `end` bound when the
/// range has one, otherwise a single-verse `limit: 1`. The single-book shape
/// omits the book selector; both shapes request canon name, text direction,
/// language tag, and chapter id + name around the verse sub-requests.
pub fn build(canon: CanonKind, verses: &[VerseRange]) -> VerseQuery {
    let mut verse_fields = String::new();
    for range in verses {
        let bound = match range.end {
            Some(end) => format!("end: {end}"),
            None => "limit: 1".to_string(),
        };
        verse_fields.push_str(&format!(
            "verses{start}: verses(start: {start}, {bound}) {{ number text }}\n",
            start = range.start,
        ));
    }

    let text = match canon {
        CanonKind::Quran => format!(
            "query ($version: String!, $chapter: Int!) {{\n\
             quran (id: $version) {{\n\
             name\ndirection\nlanguage\n\
             chapter (id: $chapter) {{\nid\nname\n{verse_fields}}}\n\
             }}\n}}"
        ),
        CanonKind::Bible => format!(
            "query ($version: String!, $chapter: Int!, $book: String!) {{\n\
             bible (id: $version) {{\n\
             name\ndirection\nlanguage\n\
             book (id: $book) {{\nname\n\
             chapter (id: $chapter) {{\nid\nname\n{verse_fields}}}\n\
             }}\n}}\n}}"
        ),
    };

    VerseQuery { canon, text }
}

/// Builds the variables object for a built query. A missing version is sent
/// as an explicit null; the query layer tolerates it and the fetch comes
/// back without chapter data, which downstream renders as "not found".
pub fn variables(version: Option<&str>, book: Option<&str>, chapter: u32) -> Value {
    let mut vars = Map::new();
    vars.insert("version".to_string(), json!(version));
    vars.insert("chapter".to_string(), json!(chapter));
    if let Some(book) = book {
        vars.insert("book".to_string(), json!(book));
    }
    Value::Object(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_range_emits_end() {
        let query = build(CanonKind::Bible, &[VerseRange::span(3, 5)]);
        assert!(query.text.contains("verses3: verses(start: 3, end: 5)"));
    }

    #[test]
    fn test_open_range_emits_single_verse_limit() {
        let query = build(CanonKind::Bible, &[VerseRange::single(3)]);
        assert!(query.text.contains("verses3: verses(start: 3, limit: 1)"));
    }

    #[test]
    fn test_disjoint_ranges_get_unique_aliases() {
        let query = build(
            CanonKind::Quran,
            &[VerseRange::span(3, 5), VerseRange::single(9)],
        );
        assert!(query.text.contains("verses3:"));
        assert!(query.text.contains("verses9:"));
    }

    #[test]
    fn test_quran_shape_omits_book_selector() {
        let query = build(CanonKind::Quran, &[VerseRange::single(1)]);
        assert!(query.text.contains("quran (id: $version)"));
        assert!(!query.text.contains("$book"));
        assert!(query.text.contains("direction"));
        assert!(query.text.contains("language"));
    }

    #[test]
    fn test_bible_shape_requires_book_selector() {
        let query = build(CanonKind::Bible, &[VerseRange::single(1)]);
        assert!(query.text.contains("bible (id: $version)"));
        assert!(query.text.contains("book (id: $book)"));
        assert!(query.text.contains("$book: String!"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let ranges = [VerseRange::span(1, 2), VerseRange::single(7)];
        assert_eq!(build(CanonKind::Bible, &ranges), build(CanonKind::Bible, &ranges));
    }

    #[test]
    fn test_variables_with_null_version() {
        let vars = variables(None, Some("john"), 3);
        assert!(vars["version"].is_null());
        assert_eq!(vars["chapter"], 3);
        assert_eq!(vars["book"], "john");
    }

    #[test]
    fn test_variables_without_book() {
        let vars = variables(Some("quran"), None, 2);
        assert_eq!(vars["version"], "quran");
        assert!(vars.get("book").is_none());
    }
}
