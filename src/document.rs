use std::fmt::Write as _;

use crate::citation::{CanonKind, VerseRange};

/// Metadata attached to one annotated span. The resolved version and
/// permalink are computed once, at annotation time, and read back verbatim
/// by the excerpt loader so the two moments can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub canon: CanonKind,
    pub book: Option<String>,
    pub chapter: u32,
    pub verses: Vec<VerseRange>,
    /// Exact matched substring, kept unchanged as the visible text.
    pub text: String,
    pub version: Option<String>,
    pub permalink: String,
}

/// One node inside a text block: a plain text run or an annotated span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Annotation(Annotation),
}

/// A text-bearing block with a container tag. Starts life as a single text
/// run; annotation splits it into alternating text and annotation nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub tag: String,
    nodes: Vec<Node>,
}

impl TextBlock {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            nodes: vec![Node::Text(text.into())],
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Annotation(annotation) => Some(annotation),
            Node::Text(_) => None,
        })
    }

    /// Visible text of the block, annotations included.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(t) => text.push_str(t),
                Node::Annotation(a) => text.push_str(&a.text),
            }
        }
        text
    }

    /// Locates `needle` in the live head run. The head is the leading text
    /// node, which holds everything before the earliest annotation inserted
    /// so far; a match already consumed by a prior (higher-offset) wrap is
    /// not found here.
    pub(crate) fn head_find(&self, needle: &str) -> Option<usize> {
        match self.nodes.first() {
            Some(Node::Text(head)) => head.find(needle),
            _ => None,
        }
    }

    /// Splits the head run at `at`, removes `annotation.text` from the
    /// remainder, and inserts the annotation between the two halves.
    pub(crate) fn wrap_at(&mut self, at: usize, annotation: Annotation) {
        let Some(Node::Text(head)) = self.nodes.first_mut() else {
            return;
        };
        let suffix = head[at + annotation.text.len()..].to_string();
        head.truncate(at);
        self.nodes.insert(1, Node::Text(suffix));
        self.nodes.insert(1, Node::Annotation(annotation));
    }

    /// Replaces every annotation with its visible text and merges the runs
    /// back into one. Restores the original text byte for byte; idempotent.
    pub fn strip_annotations(&mut self) {
        let restored = self.text_content();
        self.nodes = vec![Node::Text(restored)];
    }

    fn to_html(&self, out: &mut String) {
        let _ = write!(out, "<{}>", self.tag);
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Annotation(annotation) => annotation_html(annotation, out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// A finite, ordered sequence of text blocks; the crate's stand-in for the
/// browser text-node supply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<TextBlock>,
}

impl Document {
    /// Builds a document from plain text, one `p` block per paragraph.
    /// Paragraphs are separated by blank lines; separator whitespace is not
    /// preserved, the paragraph text itself is kept verbatim.
    pub fn from_text(text: &str) -> Self {
        let blocks = text
            .split("\n\n")
            .map(|paragraph| paragraph.trim_matches('\n'))
            .filter(|paragraph| !paragraph.trim().is_empty())
            .map(|paragraph| TextBlock::new("p", paragraph))
            .collect();
        Self { blocks }
    }

    pub fn text_content(&self) -> String {
        self.blocks
            .iter()
            .map(TextBlock::text_content)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            block.to_html(&mut out);
            out.push('\n');
        }
        out
    }
}

fn annotation_html(annotation: &Annotation, out: &mut String) {
    let _ = write!(
        out,
        "<a href=\"{href}\" target=\"_blank\" class=\"alkotob-ayah\"",
        href = escape_html(&annotation.permalink),
    );
    let _ = write!(out, " data-text=\"{}\"", escape_html(&annotation.text));
    let _ = write!(out, " data-type=\"{}\"", annotation.canon);
    if let Some(book) = &annotation.book {
        let _ = write!(out, " data-book=\"{}\"", escape_html(book));
    }
    let _ = write!(out, " data-chapter=\"{}\"", annotation.chapter);
    let verses = annotation
        .verses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let _ = write!(out, " data-verses=\"{verses}\"");
    if let Some(version) = &annotation.version {
        let _ = write!(out, " data-version=\"{}\"", escape_html(version));
    }
    let _ = write!(
        out,
        " data-permalink=\"{}\">{}</a>",
        escape_html(&annotation.permalink),
        escape_html(&annotation.text),
    );
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(text: &str) -> Annotation {
        Annotation {
            canon: CanonKind::Bible,
            book: Some("john".to_string()),
            chapter: 3,
            verses: vec![VerseRange::single(16)],
            text: text.to_string(),
            version: Some("injil".to_string()),
            permalink: "https://alkotob.org/bible/john/3:16?version=injil".to_string(),
        }
    }

    #[test]
    fn test_from_text_splits_paragraphs() {
        let doc = Document::from_text("First paragraph.\n\nSecond paragraph.");
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].text_content(), "First paragraph.");
        assert_eq!(doc.blocks[1].text_content(), "Second paragraph.");
    }

    #[test]
    fn test_from_text_drops_blank_paragraphs() {
        let doc = Document::from_text("One.\n\n\n\nTwo.\n\n");
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_wrap_splits_head_run() {
        let mut block = TextBlock::new("p", "Read John 3:16 today.");
        let at = block.head_find("John 3:16").unwrap();
        block.wrap_at(at, annotation("John 3:16"));

        assert_eq!(block.nodes().len(), 3);
        assert_eq!(block.nodes()[0], Node::Text("Read ".to_string()));
        assert!(matches!(block.nodes()[1], Node::Annotation(_)));
        assert_eq!(block.nodes()[2], Node::Text(" today.".to_string()));
        assert_eq!(block.text_content(), "Read John 3:16 today.");
    }

    #[test]
    fn test_head_find_ignores_consumed_text() {
        let mut block = TextBlock::new("p", "John 3:16 and John 3:17");
        let at = block.head_find("John 3:17").unwrap();
        block.wrap_at(at, annotation("John 3:17"));

        // The second reference now lives past the head run.
        assert_eq!(block.head_find("John 3:17"), None);
        assert!(block.head_find("John 3:16").is_some());
    }

    #[test]
    fn test_strip_annotations_restores_original_text() {
        let original = "Read John 3:16 today.";
        let mut block = TextBlock::new("p", original);
        let at = block.head_find("John 3:16").unwrap();
        block.wrap_at(at, annotation("John 3:16"));

        block.strip_annotations();
        assert_eq!(block.nodes().len(), 1);
        assert_eq!(block.text_content(), original);

        // Idempotent.
        block.strip_annotations();
        assert_eq!(block.text_content(), original);
    }

    #[test]
    fn test_annotation_html_carries_metadata() {
        let mut block = TextBlock::new("p", "John 3:16");
        block.wrap_at(0, annotation("John 3:16"));

        let mut html = String::new();
        block.to_html(&mut html);

        assert!(html.contains("class=\"alkotob-ayah\""));
        assert!(html.contains("data-type=\"bible\""));
        assert!(html.contains("data-book=\"john\""));
        assert!(html.contains("data-chapter=\"3\""));
        assert!(html.contains("data-verses=\"16\""));
        assert!(html.contains("data-version=\"injil\""));
        assert!(html.contains(">John 3:16</a>"));
    }

    #[test]
    fn test_html_escapes_text_runs() {
        let doc = Document::from_text("a < b & c");
        assert_eq!(doc.to_html(), "<p>a &lt; b &amp; c</p>\n");
    }
}
