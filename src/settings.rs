/// Container tags never scanned, independent of caller configuration.
pub const ALWAYS_EXCLUDED: &[&str] = &["script", "style", "title", "head", "html"];

/// Caller-facing configuration. `versions` is the ordered translation
/// priority list and is the one option with behavioral effect on
/// resolution; the rest mirror the embedding surface.
#[derive(Debug, Clone)]
pub struct Settings {
    /// UI locale for user-visible placeholder text.
    pub language: String,
    /// Run annotation automatically when the host page finishes loading.
    pub on_page_load: bool,
    /// Recurse into embedded frames when collecting text blocks.
    pub iframes: bool,
    /// Extra container tags or selector names to skip.
    pub exclude: Vec<String>,
    /// Cosmetic tooltip theme.
    pub theme: String,
    /// Ordered translation priority list.
    pub versions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            on_page_load: true,
            iframes: true,
            exclude: Vec::new(),
            theme: "alkotob".to_string(),
            versions: ["quran", "injil", "tma", "zabur", "sabeel", "sbleng", "gnt"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Whether a block with this container tag is skipped by annotation.
    pub fn is_excluded(&self, tag: &str) -> bool {
        ALWAYS_EXCLUDED.contains(&tag) || self.exclude.iter().any(|name| name == tag)
    }

    /// Placeholder shown when a fetch comes back without chapter data.
    pub fn not_found_message(&self) -> &'static str {
        match self.language.as_str() {
            "ar" => "\u{63a}\u{64a}\u{631} \u{645}\u{648}\u{62c}\u{648}\u{62f}",
            _ => "Not found",
        }
    }
}
