// HTML to plain text for similarity scoring.
//
// Only the visible body copy matters: scripts, styles and the page chrome
// (nav, header, footer) would add boilerplate words shared by every page on
// a site and inflate overlap scores.

use scraper::{Html, Node, Selector};

/// Elements whose text is dropped.
pub const EXCLUDED_ELEMENTS: &[&str] = &["script", "style", "noscript", "nav", "header", "footer"];

/// Extract the readable `<body>` text of an HTML document with whitespace
/// collapsed to single spaces.
pub fn body_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let root = Selector::parse("body")
        .ok()
        .and_then(|sel| doc.select(&sel).next())
        .unwrap_or_else(|| doc.root_element());

    let mut pieces: Vec<&str> = Vec::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let excluded = node.ancestors().any(|a| match a.value() {
            Node::Element(el) => EXCLUDED_ELEMENTS.contains(&el.name()),
            _ => false,
        });
        if !excluded {
            pieces.push(&**text);
        }
    }

    // Text nodes are joined with a space so adjacent block elements
    // ("<p>one</p><p>two</p>") don't fuse into a single word.
    pieces
        .iter()
        .flat_map(|p| p.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
