use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::canon::{BibleCanon, CitationSource, QuranCanon};
use crate::citation::{CanonKind, Citation};
use crate::document::{Annotation, Document, TextBlock};
use crate::settings::Settings;

/// Summary of one annotation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagStats {
    pub blocks_scanned: usize,
    pub blocks_skipped: usize,
    pub citations_found: usize,
    pub citations_annotated: usize,
}

/// Applies citations to a block as a greedy pass keyed by descending start
/// offset. The latest match is wrapped first, which keeps every earlier
/// offset valid; an earlier citation whose text was already consumed by an
/// overlapping wrap is no longer locatable and is dropped. This is the
/// deliberate conflict policy: the latest match wins.
///
/// `annotate` turns a citation that is about to be wrapped into its
/// annotation metadata; it is not called for dropped citations.
pub fn apply_citations<F>(
    block: &mut TextBlock,
    mut citations: Vec<Citation>,
    mut annotate: F,
) -> Result<usize>
where
    F: FnMut(&Citation) -> Result<Annotation>,
{
    citations.sort_by(|a, b| b.order.cmp(&a.order));

    let mut annotated = 0;
    for citation in citations {
        let Some(at) = block.head_find(&citation.text) else {
            debug!(
                text = %citation.text,
                "citation not locatable in remaining text, dropped"
            );
            continue;
        };
        let annotation = annotate(&citation)?;
        block.wrap_at(at, annotation);
        annotated += 1;
    }
    Ok(annotated)
}

/// The tagger instance: configuration plus the two canons. Constructed
/// explicitly by the caller; there is no page-global singleton.
pub struct Reftagger {
    settings: Settings,
    quran: QuranCanon,
    bible: BibleCanon,
}

impl Reftagger {
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            settings,
            quran: QuranCanon::new()?,
            bible: BibleCanon::new()?,
        })
    }

    /// Replaces the bundled canons, e.g. to supply a custom edition catalog.
    pub fn with_canons(settings: Settings, quran: QuranCanon, bible: BibleCanon) -> Self {
        Self {
            settings,
            quran,
            bible,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Scans every eligible block and wraps each located citation in an
    /// annotation carrying its resolved version and permalink.
    pub fn annotate(&self, document: &mut Document) -> Result<TagStats> {
        let mut stats = TagStats::default();

        for block in &mut document.blocks {
            if self.settings.is_excluded(&block.tag) {
                stats.blocks_skipped += 1;
                continue;
            }
            stats.blocks_scanned += 1;

            let text = block.text_content();
            let mut citations = self.quran.parse(&text);
            citations.extend(self.bible.parse(&text));
            stats.citations_found += citations.len();

            stats.citations_annotated +=
                apply_citations(block, citations, |citation| self.annotation_for(citation))?;
        }

        info!(
            blocks_scanned = stats.blocks_scanned,
            citations_found = stats.citations_found,
            citations_annotated = stats.citations_annotated,
            "annotation pass complete"
        );
        Ok(stats)
    }

    /// Restores every block to its original text. Idempotent.
    pub fn destroy(&self, document: &mut Document) {
        for block in &mut document.blocks {
            block.strip_annotations();
        }
    }

    /// Resolves the citation's version once and freezes it, with the
    /// permalink, into the annotation metadata.
    fn annotation_for(&self, citation: &Citation) -> Result<Annotation> {
        let key = match citation.canon {
            CanonKind::Quran => citation.chapter.to_string(),
            CanonKind::Bible => citation.book.clone().unwrap_or_default(),
        };
        let version = match citation.canon {
            CanonKind::Quran => self.quran.resolve_version(&key, &self.settings.versions)?,
            CanonKind::Bible => self.bible.resolve_version(&key, &self.settings.versions)?,
        }
        .map(str::to_string);

        let permalink = citation.permalink(version.as_deref());
        Ok(Annotation {
            canon: citation.canon,
            book: citation.book.clone(),
            chapter: citation.chapter,
            verses: citation.verses.clone(),
            text: citation.text.clone(),
            version,
            permalink,
        })
    }
}
