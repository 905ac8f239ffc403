use regex::{Captures, Regex};

use crate::defaults::{
    BUTTON_CLASS, CLOSE_INDENT, ICON_CLASS, LABEL_INDENT, LEGACY_HEADER_PATTERN, SORT_HANDLER,
};
use crate::error::{Error, Result};

/// Derive the `handleSort` argument from a header label.
///
/// Lower-cases the label, drops every space and spells `#` as `Nbr`:
/// `"Quote #"` becomes `"quoteNbr"`, `"Date Created"` becomes `"datecreated"`.
pub fn sort_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "").replace('#', "Nbr")
}

/// Render the replacement `Button` for a captured label.
pub fn render_target(label: &str) -> String {
    format!(
        "<Button variant=\"ghost\" size=\"sm\" onClick={{() => {}('{}')}} className=\"{}\">\n{}{} <ArrowUpDown className=\"{}\" />\n{}</Button>",
        SORT_HANDLER,
        sort_key(label),
        BUTTON_CLASS,
        LABEL_INDENT,
        label,
        ICON_CLASS,
        CLOSE_INDENT,
    )
}

/// Result of rewriting one text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRewrite {
    pub content: String,
    /// Captured labels, in source order.
    pub labels: Vec<String>,
}

impl TextRewrite {
    pub fn replacements(&self) -> usize {
        self.labels.len()
    }
}

/// Compiled legacy header matcher.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
}

impl HeaderPattern {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(LEGACY_HEADER_PATTERN).map_err(|e| {
            Error::internal_unexpected(format!("Invalid legacy header pattern: {}", e))
        })?;
        Ok(Self { regex })
    }

    /// Replace every legacy header in `text` in a single pass.
    ///
    /// Matches are located against the original text; everything outside a
    /// matched span is copied through untouched.
    pub fn rewrite(&self, text: &str) -> TextRewrite {
        let mut labels = Vec::new();
        let content = self
            .regex
            .replace_all(text, |cap: &Captures| {
                let label = &cap[1];
                labels.push(label.to_string());
                render_target(label)
            })
            .into_owned();

        TextRewrite { content, labels }
    }
}
