//! Regex-based extraction of HTML tables into an in-memory model.
//!
//! The source pages are server-rendered and well-formed enough for element
//! regexes; parsing never fails, malformed markup just yields fewer or
//! emptier tables.

use regex::Regex;

/// A parsed HTML table: the first row's `<th>` cells as headers, every
/// following row's `<td>` cells as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Extracts every `<table>` in document order.
///
/// Cell text is tag-stripped, entity-decoded, and whitespace-collapsed;
/// citation markers are left in place for [`crate::normalize::clean_text`]
/// downstream.
#[must_use]
pub fn parse_tables(html: &str) -> Vec<HtmlTable> {
    let table_re = Regex::new(r"(?is)<table[^>]*>(.*?)</table>").expect("valid table regex");
    let tr_re = Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").expect("valid row regex");
    let th_re = Regex::new(r"(?is)<th[^>]*>(.*?)</th>").expect("valid header cell regex");
    let td_re = Regex::new(r"(?is)<td[^>]*>(.*?)</td>").expect("valid data cell regex");
    let tag_re = Regex::new(r"(?is)<[^>]+>").expect("valid tag regex");

    table_re
        .captures_iter(html)
        .filter_map(|table_cap| {
            let body = table_cap.get(1)?.as_str();
            let mut row_caps = tr_re.captures_iter(body);

            let header_row = row_caps.next()?;
            let headers: Vec<String> = th_re
                .captures_iter(header_row.get(1).map_or("", |m| m.as_str()))
                .map(|cell| cell_text(&tag_re, cell.get(1).map_or("", |m| m.as_str())))
                .collect();

            let rows: Vec<Vec<String>> = row_caps
                .map(|row| {
                    td_re
                        .captures_iter(row.get(1).map_or("", |m| m.as_str()))
                        .map(|cell| cell_text(&tag_re, cell.get(1).map_or("", |m| m.as_str())))
                        .collect()
                })
                .collect();

            Some(HtmlTable { headers, rows })
        })
        .collect()
}

fn cell_text(tag_re: &Regex, inner: &str) -> String {
    let no_tags = tag_re.replace_all(inner, " ");
    decode_entities(&no_tags)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes the handful of entities that actually occur in the source cells.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_rows() {
        let html = r"
            <table class='wikitable'>
              <tr><th>Country</th><th>Visa requirement</th></tr>
              <tr><td>Germany</td><td>Freedom of movement</td></tr>
              <tr><td>Japan</td><td>Visa not required</td></tr>
            </table>
        ";
        let tables = parse_tables(html);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].headers, vec!["Country", "Visa requirement"]);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[0].rows[0], vec!["Germany", "Freedom of movement"]);
    }

    #[test]
    fn preserves_document_order_of_tables() {
        let html = r"
            <table><tr><th>First</th></tr><tr><td>a</td></tr></table>
            <table><tr><th>Second</th></tr><tr><td>b</td></tr></table>
        ";
        let tables = parse_tables(html);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].headers, vec!["First"]);
        assert_eq!(tables[1].headers, vec!["Second"]);
    }

    #[test]
    fn strips_tags_inside_cells() {
        let html = r#"
            <table>
              <tr><th>Country</th></tr>
              <tr><td><a href="/wiki/Germany" title="Germany">Germany</a></td></tr>
            </table>
        "#;
        let tables = parse_tables(html);
        assert_eq!(tables[0].rows[0], vec!["Germany"]);
    }

    #[test]
    fn keeps_citation_markers_in_cell_text() {
        let html = r"
            <table>
              <tr><th>Visa</th></tr>
              <tr><td>Visa not required<sup>[12]</sup></td></tr>
            </table>
        ";
        let tables = parse_tables(html);
        assert_eq!(tables[0].rows[0], vec!["Visa not required [12]"]);
    }

    #[test]
    fn decodes_common_entities() {
        let html = r"
            <table>
              <tr><th>Country</th></tr>
              <tr><td>C&ocirc;te</td></tr>
              <tr><td>Trinidad &amp; Tobago</td></tr>
              <tr><td>90&nbsp;days</td></tr>
            </table>
        ";
        let tables = parse_tables(html);
        // Named entities outside the decoded set pass through untouched.
        assert_eq!(tables[0].rows[0], vec!["C&ocirc;te"]);
        assert_eq!(tables[0].rows[1], vec!["Trinidad & Tobago"]);
        assert_eq!(tables[0].rows[2], vec!["90 days"]);
    }

    #[test]
    fn table_without_rows_yields_empty_row_set() {
        let html = "<table><tr><th>Country</th><th>Visa</th></tr></table>";
        let tables = parse_tables(html);
        assert_eq!(tables.len(), 1);
        assert!(tables[0].rows.is_empty());
    }

    #[test]
    fn no_tables_yields_empty_vec() {
        assert!(parse_tables("<p>No tables here.</p>").is_empty());
    }

    #[test]
    fn row_with_fewer_cells_is_kept_short() {
        let html = r"
            <table>
              <tr><th>Country</th><th>Visa</th><th>Allowed stay</th></tr>
              <tr><td>Germany</td><td>Visa not required</td></tr>
            </table>
        ";
        let tables = parse_tables(html);
        assert_eq!(tables[0].rows[0].len(), 2);
    }
}
