use scraper::{ElementRef, Node};

pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// `[href] text` rendering of an anchor. A missing `href` renders as `[]`.
pub fn format_text_for_a_element(anchor: ElementRef) -> String {
    let href = anchor.value().attr("href").unwrap_or_default();
    let text: String = anchor.text().collect();
    format!("[{href}] {text}")
}

/// Renders one paragraph element as text.
///
/// Paragraphs holding an anchor anywhere below them are rebuilt from their
/// direct children: text is kept verbatim, anchor children become
/// `[href] text` and other element children contribute their text.
/// Anything else is the element's plain text.
pub fn format_text_line(item: ElementRef) -> String {
    let has_anchor = item
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|element| element.value().name() == "a");

    if !has_anchor {
        return item.text().collect();
    }

    let mut result = String::new();
    for child in item.children() {
        match child.value() {
            Node::Text(text) => result.push_str(text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    if element.value().name() == "a" {
                        result.push_str(&format_text_for_a_element(element));
                    } else {
                        result.extend(element.text());
                    }
                }
            }
            _ => {}
        }
    }
    result
}

/// Assembles the output document: every line is wrapped at `width` columns
/// when it is longer than that, and followed by a blank line.
pub fn format_text<S: AsRef<str>>(lines: &[S], width: usize) -> String {
    let mut text = String::new();
    for line in lines {
        let line = line.as_ref();
        if line.chars().count() <= width {
            text.push_str(line);
        } else {
            text.push_str(&fill(line, width));
        }
        text.push_str("\n\n");
    }
    text
}

fn fill(line: &str, width: usize) -> String {
    // ASCII whitespace becomes a plain space; U+00A0 and friends stay glued.
    let flattened: String = line
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\x0b' | '\x0c' | '\r') { ' ' } else { c })
        .collect();
    textwrap::fill(flattened.trim_matches(' '), width)
}
