use serde_json::Value;

/// Rendering knobs for the excerpt. The budget counts characters of verse
/// text across the whole excerpt, markup excluded.
#[derive(Debug, Clone)]
pub struct ExcerptConfig {
    pub max_chars: usize,
    pub ellipsis: String,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            max_chars: 400,
            ellipsis: " &hellip;".to_string(),
        }
    }
}

/// Renders a fetched chapter result into a length-bounded excerpt.
///
/// Scans every field whose name starts with `verses` in response order, and
/// the verses inside each in their given order. Returns `None` for an
/// absent, non-object, or verse-less result so callers have a single
/// "no content" case instead of an empty string to special-case.
pub fn render(chapter: Option<&Value>, config: &ExcerptConfig) -> Option<String> {
    let fields = chapter?.as_object()?;

    let mut html = String::new();
    let mut consumed = 0usize;

    for (name, value) in fields {
        if !name.starts_with("verses") {
            continue;
        }
        let Some(verses) = value.as_array() else { continue };
        for verse in verses {
            let number = verse.get("number").map(display_number).unwrap_or_default();
            let text = verse.get("text").and_then(Value::as_str).unwrap_or("");
            let Some(fragment) = take_fragment(text, config, &mut consumed) else {
                continue;
            };
            html.push_str(&format!(
                "<span class=\"verse\"><sup>{number}</sup> {fragment}</span> "
            ));
        }
    }

    (!html.is_empty()).then_some(html)
}

/// Consumes one verse against the running budget.
///
/// A verse considered with no allowance left is skipped outright. A verse
/// that straddles the budget is cut to the allowance and then trimmed back
/// to the last whole-word boundary; when the cut fragment has no interior
/// space the fragment collapses to the ellipsis marker alone.
fn take_fragment(text: &str, config: &ExcerptConfig, consumed: &mut usize) -> Option<String> {
    let allowance = config.max_chars.saturating_sub(*consumed);
    if allowance == 0 {
        return None;
    }

    let length = text.chars().count();
    *consumed += length;

    if length <= allowance {
        return Some(text.to_string());
    }

    let cut: String = text.chars().take(allowance).collect();
    let word_safe = match cut.rfind(' ') {
        Some(space) => &cut[..space],
        None => "",
    };
    Some(format!("{word_safe}{}", config.ellipsis))
}

fn display_number(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
