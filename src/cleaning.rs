use scraper::{Html, Selector};
use tracing::debug;
use crate::error::{GrabError, Result};

/// Tags whose whole subtree never carries article text.
pub const SKIP_TAGS: [&str; 3] = ["aside", "script", "style"];

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| GrabError::Extraction(format!("invalid selector {css:?}: {e:?}")))
}

/// Returns a copy of `document` with every `aside`, `script` and `style`
/// element detached together with its subtree. The input is left untouched.
pub fn clean_html(document: &Html) -> Result<Html> {
    let skip_selector = selector(&SKIP_TAGS.join(", "))?;

    let skipped: Vec<_> = document
        .select(&skip_selector)
        .map(|element| element.id())
        .collect();

    let mut cleaned = document.clone();
    for id in &skipped {
        if let Some(mut node) = cleaned.tree.get_mut(*id) {
            node.detach();
        }
    }

    debug!(removed = skipped.len(), "stripped noise tags");
    Ok(cleaned)
}
