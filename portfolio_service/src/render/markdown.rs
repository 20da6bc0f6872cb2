//! Markdown-to-HTML conversion for content bodies.

use comrak::Options;

/// Converts markdown to display HTML.
///
/// Tables, footnotes and definition lists are enabled, and single newlines
/// become hard breaks so operators can write bullet-point prose without
/// worrying about markdown line rules. Raw HTML in the input is stripped by
/// comrak's safe defaults; the returned string is inserted into pages without
/// further escaping, so this function is the trust boundary.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    options.render.hardbreaks = true;

    comrak::markdown_to_html(text, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_list_structure() {
        let html = markdown_to_html("# H\n\n- a\n- b");

        assert!(html.contains("<h1>H</h1>"), "missing heading in {html:?}");
        assert_eq!(html.matches("<li>").count(), 2, "expected two items in {html:?}");
    }

    #[test]
    fn test_single_newline_becomes_hard_break() {
        let html = markdown_to_html("first line\nsecond line");
        assert!(html.contains("<br"), "missing hard break in {html:?}");
    }

    #[test]
    fn test_table_support() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"), "missing table in {html:?}");
    }

    #[test]
    fn test_raw_html_is_not_passed_through() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"), "raw html leaked into {html:?}");
    }
}
