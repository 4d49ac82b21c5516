use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Namespace n8n puts in front of every built-in node type.
pub const DEFAULT_NAMESPACE_PREFIX: &str = "n8n-nodes-base.";

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("camel boundary pattern is valid"));
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[A-Za-z0-9_]").expect("word start pattern is valid"));

/// Turns machine-readable node types into display labels.
///
/// `n8n-nodes-base.httpRequest` becomes `Http Request`: the first matching namespace
/// prefix is removed, camel-case humps are split with a space, and every word is
/// capitalized.
#[derive(Debug, Clone)]
pub struct LabelFormatter {
    prefixes: Vec<String>,
}

impl Default for LabelFormatter {
    fn default() -> Self {
        Self {
            prefixes: vec![DEFAULT_NAMESPACE_PREFIX.to_string()],
        }
    }
}

impl LabelFormatter {
    /// A formatter that strips only the given prefixes.
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Registers an additional namespace prefix. Duplicates are ignored.
    pub fn add_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        if !prefix.is_empty() && !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Formats a raw node type into its display label.
    pub fn format(&self, raw_type: &str) -> String {
        let bare = self
            .prefixes
            .iter()
            .find_map(|prefix| raw_type.strip_prefix(prefix.as_str()))
            .unwrap_or(raw_type);

        let spaced = CAMEL_BOUNDARY.replace_all(bare, "$1 $2");
        WORD_START
            .replace_all(&spaced, |caps: &Captures| caps[0].to_ascii_uppercase())
            .into_owned()
    }
}

/// Formats a raw node type with the default `n8n-nodes-base.` namespace.
pub fn format_type_label(raw_type: &str) -> String {
    LabelFormatter::default().format(raw_type)
}
