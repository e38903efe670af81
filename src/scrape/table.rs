// src/scrape/table.rs
//
// Hero stat tables. Layout assumptions:
// - the first <table> on the page holds the data (its <tbody> if present)
// - every data row has the hero name in cell 1
// - stat cells carry the raw number in `data-value`; the rendered text may be
//   formatted ("1,234", "52.3%") and is never parsed
// Rows with no <td> at all are header rows when the table has no <tbody> and
// are skipped there. Inside a <tbody> they, like anything else that doesn't
// fit, abort the whole page.

use std::collections::HashMap;

use crate::core::html::{self, attr_value, blocks_ci, first_block_ci, first_text};
use crate::error::ExtractionError::{self, *};

/// Cell index of the hero's display name.
pub const NAME_COLUMN: usize = 1;

/// Attribute holding the machine-readable value of a stat cell.
pub const VALUE_ATTR: &str = "data-value";

/// Read statistic `key` from cell `column` of each row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRequest {
    pub key: String,
    pub column: usize,
}

impl StatRequest {
    pub fn new(key: &str, column: usize) -> Self {
        Self { key: s!(key), column }
    }
}

/// One extracted value: the attribute text as found, and its parse.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCell {
    pub raw: String,
    pub value: f64,
}

/// Statistic key → value for one hero.
pub type StatRow = HashMap<String, StatCell>;

/// Display name → row, for one page and one request set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableExtraction {
    rows: HashMap<String, StatRow>,
    overwritten: Vec<String>,
}

impl TableExtraction {
    pub fn row(&self, display_name: &str) -> Option<&StatRow> {
        self.rows.get(display_name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Display names that appeared on more than one row. The last row won.
    pub fn overwritten(&self) -> &[String] {
        &self.overwritten
    }
}

/// Extract the requested statistics from every data row of `document`.
pub fn parse(document: &str, requests: &[StatRequest]) -> Result<TableExtraction, ExtractionError> {
    let table = first_block_ci(document, "table").ok_or(NoTableFound)?;
    // Without a tbody, header rows share the table with data rows.
    let tbody = first_block_ci(table, "tbody");
    let in_tbody = tbody.is_some();
    let body = tbody.unwrap_or(table);

    let needed = requests
        .iter()
        .map(|r| r.column)
        .chain(std::iter::once(NAME_COLUMN))
        .max()
        .unwrap_or(NAME_COLUMN)
        + 1;

    let mut out = TableExtraction::default();
    let mut row_ix = 0usize;

    for tr in blocks_ci(body, "tr") {
        let cells: Vec<&str> = blocks_ci(tr, "td").collect();
        if cells.is_empty() && !in_tbody {
            continue;
        }
        let row = row_ix;
        row_ix += 1;

        if cells.is_empty() {
            return Err(MalformedRow { row, reason: s!("no <td> cells") });
        }

        if cells.len() < needed {
            return Err(MalformedRow {
                row,
                reason: format!("expected at least {needed} cells, found {}", cells.len()),
            });
        }

        let name = first_text(html::inner_after_open_tag(cells[NAME_COLUMN]))
            .ok_or_else(|| MalformedRow { row, reason: s!("hero name cell is empty") })?;

        let mut stats = StatRow::with_capacity(requests.len());
        for req in requests {
            let cell = read_stat_cell(cells[req.column]).map_err(|why| MalformedRow {
                row,
                reason: format!("{name}: '{}' (cell {}) {why}", req.key, req.column),
            })?;
            stats.insert(req.key.clone(), cell);
        }

        if out.rows.insert(name.clone(), stats).is_some() {
            logw!("Extract: duplicate row for '{name}', keeping the later one");
            out.overwritten.push(name);
        }
    }

    logd!("Extract: {} data rows, {} heroes", row_ix, out.rows.len());
    Ok(out)
}

fn read_stat_cell(td: &str) -> Result<StatCell, String> {
    let raw = attr_value(td, VALUE_ATTR).ok_or_else(|| {
        format!("has no {VALUE_ATTR} attribute (text: {:?})", html::strip_tags(td))
    })?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{VALUE_ATTR}={raw:?} is not a number"))?;
    if !value.is_finite() {
        return Err(format!("{VALUE_ATTR}={raw:?} is not a finite number"));
    }
    Ok(StatCell { raw, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, a: &str, b: &str) -> String {
        format!(
            r#"<tr><td class="cell-icon"><img src="/{name}.png"></td><td><a href="/heroes/x">{name}</a><div class="subtext">Carry</div></td><td data-value="{a}">{a}</td><td data-value="{b}">{b}%</td></tr>"#
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            "<html><body><table class=\"sortable\"><thead><tr><th>Hero</th><th></th><th>GPM</th><th>XPM</th></tr></thead><tbody>{}</tbody></table></body></html>",
            rows.concat()
        )
    }

    fn reqs() -> Vec<StatRequest> {
        vec![StatRequest::new("gpm", 2), StatRequest::new("xpm", 3)]
    }

    #[test]
    fn extracts_requested_columns_by_name() {
        let doc = page(&[row("Anti-Mage", "642.5", "701"), row("Axe", "401", "1,234")]);
        let ex = parse(&doc, &reqs()).unwrap();
        assert_eq!(ex.len(), 2);

        let am = ex.row("Anti-Mage").unwrap();
        assert_eq!(am["gpm"].value, 642.5);
        assert_eq!(am["gpm"].raw, "642.5");
        assert_eq!(am["xpm"].value, 701.0);
        assert!(ex.overwritten().is_empty());
    }

    #[test]
    fn rendered_text_is_ignored() {
        // data-value is authoritative even when the text says otherwise
        let doc = page(&[
            r#"<tr><td></td><td>Lina</td><td data-value="1234.5">1,234.5</td><td data-value="0.5231">52.31%</td></tr>"#.to_string(),
        ]);
        let ex = parse(&doc, &reqs()).unwrap();
        assert_eq!(ex.row("Lina").unwrap()["xpm"].value, 0.5231);
    }

    #[test]
    fn no_table() {
        let err = parse("<html><body><p>Rate limited</p></body></html>", &reqs()).unwrap_err();
        assert_eq!(err, NoTableFound);
    }

    #[test]
    fn missing_value_attribute_is_malformed() {
        let doc = page(&[
            row("Anti-Mage", "642.5", "701"),
            r#"<tr><td></td><td>Axe</td><td>401</td><td data-value="600">600</td></tr>"#.to_string(),
        ]);
        match parse(&doc, &reqs()).unwrap_err() {
            MalformedRow { row, reason } => {
                assert_eq!(row, 1);
                assert!(reason.contains("Axe"));
                assert!(reason.contains("data-value"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn short_row_is_malformed() {
        let doc = page(&[r#"<tr><td></td><td>Axe</td><td data-value="1">1</td></tr>"#.to_string()]);
        let err = parse(&doc, &reqs()).unwrap_err();
        assert_eq!(
            err,
            MalformedRow { row: 0, reason: s!("expected at least 4 cells, found 3") }
        );
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let doc = page(&[row("Axe", "n/a", "1")]);
        assert!(matches!(parse(&doc, &reqs()), Err(MalformedRow { row: 0, .. })));

        let doc = page(&[row("Axe", "NaN", "1")]);
        assert!(matches!(parse(&doc, &reqs()), Err(MalformedRow { row: 0, .. })));
    }

    #[test]
    fn empty_name_is_malformed() {
        let doc = page(&[r#"<tr><td></td><td><img src="x"></td><td data-value="1"></td><td data-value="2"></td></tr>"#.to_string()]);
        assert!(matches!(parse(&doc, &reqs()), Err(MalformedRow { row: 0, .. })));
    }

    #[test]
    fn duplicate_names_last_write_wins() {
        let doc = page(&[row("Axe", "100", "1"), row("Lina", "300", "3"), row("Axe", "200", "2")]);
        let ex = parse(&doc, &reqs()).unwrap();
        assert_eq!(ex.len(), 2);
        assert_eq!(ex.row("Axe").unwrap()["gpm"].value, 200.0);
        assert_eq!(ex.overwritten(), ["Axe".to_string()]);
    }

    #[test]
    fn header_rows_without_tbody_are_skipped() {
        let doc = format!(
            "<TABLE><TR><TH>Hero</TH><TH>GPM</TH></TR>{}</TABLE>",
            row("Zeus", "550", "600")
        );
        let ex = parse(&doc, &reqs()).unwrap();
        assert_eq!(ex.row("Zeus").unwrap()["gpm"].value, 550.0);
    }

    #[test]
    fn body_rows_without_cells_are_malformed() {
        let th_row = page(&[
            r#"<tr><td></td><td>Axe</td><td data-value="1">1</td><td data-value="2">2</td></tr>"#.to_string(),
            s!("<tr><th>Lina</th><th>1</th></tr>"),
        ]);
        assert_eq!(
            parse(&th_row, &reqs()).unwrap_err(),
            MalformedRow { row: 1, reason: s!("no <td> cells") }
        );

        let empty_row = page(&[s!("<tr></tr>"), row("Axe", "1", "2")]);
        assert_eq!(
            parse(&empty_row, &reqs()).unwrap_err(),
            MalformedRow { row: 0, reason: s!("no <td> cells") }
        );
    }

    #[test]
    fn only_the_first_table_counts() {
        let doc = format!(
            "{}<table><tbody>{}</tbody></table>",
            page(&[row("Axe", "1", "1")]),
            row("Lina", "2", "2")
        );
        let ex = parse(&doc, &reqs()).unwrap();
        assert!(ex.row("Axe").is_some());
        assert!(ex.row("Lina").is_none());
    }

    #[test]
    fn entity_encoded_names_are_decoded() {
        let doc = page(&[row("Nature&#39;s Prophet", "480", "520")]);
        let ex = parse(&doc, &reqs()).unwrap();
        assert!(ex.row("Nature's Prophet").is_some());
    }
}
