//! DOM helpers shared by the endpoint and definition extractors.
//!
//! Reference pages lay out each facet as an `<h2>` heading followed by sibling
//! elements, so most lookups walk siblings rather than descendants.

use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("static selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));

/// Removes the tab, newline and carriage-return characters the site embeds
/// inside table cells.
pub fn strip_control_chars(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

pub fn find_heading<'a>(document: &'a Html, title: &str) -> Option<ElementRef<'a>> {
    document
        .select(&HEADING)
        .find(|heading| heading.text().collect::<String>().trim() == title)
}

/// Every `<table>` that follows `element` at the same nesting level.
pub fn following_tables<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == "table")
}

/// The first table after the `<h2>` titled `title`, if both exist.
pub fn section_table<'a>(document: &'a Html, title: &str) -> Option<ElementRef<'a>> {
    find_heading(document, title).and_then(|heading| following_tables(heading).next())
}

pub fn previous_element<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.prev_siblings().find_map(ElementRef::wrap)
}

/// Cell texts of every row after the header row.
pub fn data_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    table
        .select(&ROW)
        .skip(1)
        .map(|row| {
            row.children()
                .filter_map(ElementRef::wrap)
                .filter(|cell| matches!(cell.value().name(), "td" | "th"))
                .map(cell_text)
                .collect()
        })
        .collect()
}

/// Text of the first non-blank child of a cell. Cells often carry a second
/// child with supplementary markup that is not part of the value.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    cell.children()
        .map(|child| match child.value() {
            Node::Text(text) => text.trim().to_string(),
            Node::Element(_) => ElementRef::wrap(child)
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Returns the cell at `index`, or an empty string when the row is short.
pub fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tabs_newlines_and_carriage_returns() {
        assert_eq!(strip_control_chars("<td>\r\n\tid\t</td>"), "<td>id</td>");
        assert_eq!(strip_control_chars("a b"), "a b");
    }

    #[test]
    fn section_table_skips_non_table_siblings() {
        let document = Html::parse_document(
            "<h2>Responses</h2><p>intro</p><table><tr><th>Name</th></tr><tr><td>200 OK</td></tr></table>",
        );
        let table = section_table(&document, "Responses").unwrap();
        assert_eq!(data_rows(table), vec![vec!["200 OK".to_string()]]);
    }

    #[test]
    fn missing_heading_has_no_table() {
        let document = Html::parse_document("<h2>Other</h2><table></table>");
        assert!(section_table(&document, "Responses").is_none());
    }

    #[test]
    fn cell_text_uses_first_non_blank_child() {
        let document = Html::parse_document(
            "<table><tr><th>h</th></tr><tr><td> <span>top</span><div>extra</div></td><td></td></tr></table>",
        );
        let table = section_table_root(&document);
        assert_eq!(data_rows(table), vec![vec!["top".to_string(), String::new()]]);
    }

    fn section_table_root(document: &Html) -> ElementRef<'_> {
        let selector = Selector::parse("table").unwrap();
        document.select(&selector).next().unwrap()
    }
}
