//! Text helpers for scraped elements and log output.

use scraper::ElementRef;

/// Elements whose text is code or markup, not page content.
const NON_CONTENT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Text content of an element with every text node stripped.
///
/// Each descendant text node is trimmed and empty nodes are dropped before
/// concatenation, so indentation between tags never reaches the output. Text
/// nested in `script`, `style` or `template` below the element is skipped.
pub fn stripped_text(element: &ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != element.id())
                .filter_map(|ancestor| ancestor.value().as_element())
                .any(|el| NON_CONTENT_ELEMENTS.contains(&el.name()));
            (!hidden).then(|| text.trim())
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// First `max_chars` characters of `text`, for debug logging of response bodies.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}... (truncated, original length: {} chars)", head, text.chars().count())
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_stripped_text_trims_edges() {
        let document = Html::parse_fragment("<p id='x'>\n   £500 per day \t</p>");
        assert_eq!(stripped_text(&first(&document, "#x")), "£500 per day");
    }

    #[test]
    fn test_stripped_text_drops_layout_whitespace_between_nodes() {
        let document = Html::parse_fragment(
            "<div id='x'>\n  <p>Build services</p>\n  <p> in Rust </p>\n</div>",
        );
        assert_eq!(
            stripped_text(&first(&document, "#x")),
            "Build servicesin Rust"
        );
    }

    #[test]
    fn test_stripped_text_empty_element() {
        let document = Html::parse_fragment("<span id='x'>   </span>");
        assert_eq!(stripped_text(&first(&document, "#x")), "");
    }

    #[test]
    fn test_stripped_text_skips_script_and_style() {
        let document = Html::parse_fragment(
            "<div id='x'><style>p { color: red; }</style><p>Role</p>\
             <script>var x = 1;</script></div>",
        );
        assert_eq!(stripped_text(&first(&document, "#x")), "Role");
    }

    #[test]
    fn test_stripped_text_skips_nested_template_content() {
        let document = Html::parse_fragment(
            "<div id='x'><p>Visible</p><template><p>Hidden</p></template></div>",
        );
        assert_eq!(stripped_text(&first(&document, "#x")), "Visible");
    }

    #[test]
    fn test_stripped_text_of_style_element_itself() {
        let document = Html::parse_fragment("<div><style id='x'>p { margin: 0; }</style></div>");
        assert_eq!(stripped_text(&first(&document, "#x")), "p { margin: 0; }");
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let out = preview("ééééé", 2);
        assert!(out.starts_with("éé..."));
        assert!(out.contains("original length: 5"));
    }
}
