use scraper::{ElementRef, Html};
use tracing::{debug, info};

use crate::cleaning::{clean_html, selector};
use crate::error::{GrabError, Result};
use crate::formatting::{format_text, format_text_line};
use crate::title::get_title;

/// Tags considered to carry paragraphs, in the order they are collected.
pub const NODE_TAGS: [&str; 3] = ["p", "pre", "td"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub text: String,
}

impl Article {
    /// Cleans `html`, then picks its title and body and lays them out as
    /// paragraphs wrapped at `wrap_width` columns.
    pub fn from_html(html: &str, url: &str, wrap_width: usize) -> Result<Self> {
        let document = clean_html(&Html::parse_document(html))?;

        let title = get_title(&document)?;
        let paragraphs = get_article(&document)?;

        let mut lines = Vec::with_capacity(paragraphs.len() + 1);
        lines.push(title.clone());
        lines.extend(paragraphs.iter().cloned());
        let text = format_text(&lines, wrap_width);

        info!(url, title = %title, paragraphs = paragraphs.len(), "article extracted");

        Ok(Self {
            url: url.to_string(),
            title,
            paragraphs,
            text,
        })
    }
}

/// Every `p`, then every `pre`, then every `td` of the document, each group in
/// document order.
pub fn get_article_nodes(document: &Html) -> Result<Vec<ElementRef<'_>>> {
    let mut nodes = Vec::new();
    for tag in NODE_TAGS {
        let sel = selector(tag)?;
        nodes.extend(document.select(&sel));
    }
    Ok(nodes)
}

/// Number of pieces the node's text splits into around single spaces.
fn weight(node: ElementRef) -> usize {
    node.text().collect::<String>().split(' ').count()
}

/// The first node with the greatest weight.
pub fn get_best_node<'a>(nodes: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    let mut best: Option<(usize, ElementRef<'a>)> = None;
    for node in nodes {
        let node_weight = weight(*node);
        if best.is_none_or(|(best_weight, _)| node_weight > best_weight) {
            best = Some((node_weight, *node));
        }
    }
    best.map(|(_, node)| node)
}

/// Formatted paragraphs of the container holding the best candidate node.
pub fn get_article(document: &Html) -> Result<Vec<String>> {
    let nodes = get_article_nodes(document)?;
    let best_node = get_best_node(&nodes).ok_or_else(|| {
        GrabError::Extraction("no <p>, <pre> or <td> element to take the article from".into())
    })?;

    let parent_node = best_node
        .parent()
        .ok_or_else(|| GrabError::Extraction("best node has no parent".into()))?;

    let paragraphs: Vec<String> = parent_node
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| NODE_TAGS.contains(&child.value().name()))
        .map(format_text_line)
        .collect();

    debug!(candidates = nodes.len(), paragraphs = paragraphs.len(), "article body located");
    Ok(paragraphs)
}
