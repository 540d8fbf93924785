use crate::domain::model::{Assessment, ProfileId};
use crate::domain::ports::Fetch;
use crate::utils::error::{Result, WhatsDueError};
use scraper::{ElementRef, Html, Selector};

const REQUIRED_FIELDS: [&str; 4] = ["subject", "task", "due date", "weighting"];

/// Fetches the combined assessment report for the given profile ids (one
/// page for the whole batch, ids joined in caller order) and parses it.
pub async fn fetch_report<F: Fetch>(
    fetcher: &F,
    endpoint: &str,
    profile_ids: &[ProfileId],
) -> Result<Vec<Assessment>> {
    let joined = profile_ids
        .iter()
        .map(ProfileId::as_str)
        .collect::<Vec<_>>()
        .join(",");
    let url = format!("{endpoint}{joined}");
    tracing::debug!(%url, profiles = profile_ids.len(), "fetching assessment report");
    let html = fetcher.get_text(&url).await?;
    parse_report(&html)
}

/// Parses the report page's `tblborder` table into assessment records.
///
/// The first row is the column headers and is skipped. Each data row must
/// yield four non-empty fields; an empty field rejects the whole batch
/// immediately rather than skipping the row, so a parse either produces
/// every row or nothing.
pub fn parse_report(html: &str) -> Result<Vec<Assessment>> {
    let table_selector = Selector::parse("table.tblborder").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let document = Html::parse_document(html);
    let table = document
        .select(&table_selector)
        .next()
        .ok_or(WhatsDueError::MalformedReport)?;

    let mut assessments = Vec::new();
    for (index, row) in table.select(&row_selector).skip(1).enumerate() {
        let row_number = index + 1;
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();

        let subject = cell_text(cells.first());
        let task = cell_text(cells.get(1));
        let due_date = cell_text(cells.get(2));
        let weighting = cell_text(cells.get(3));

        for (field, value) in REQUIRED_FIELDS
            .into_iter()
            .zip([&subject, &task, &due_date, &weighting])
        {
            if value.is_empty() {
                return Err(WhatsDueError::MalformedRow {
                    row: row_number,
                    field,
                });
            }
        }

        // The subject cell carries trailing noise after the code itself.
        let subject = subject.chars().take(8).collect();
        assessments.push(Assessment::new(subject, task, due_date, weighting));
    }

    tracing::debug!(rows = assessments.len(), "parsed assessment table");
    Ok(assessments)
}

/// Reads a cell's first nested `div`, rendering embedded `<br>` breaks as
/// " - " since task cells may carry a secondary line of text.
fn cell_text(cell: Option<&ElementRef>) -> String {
    let div_selector = Selector::parse("div").unwrap();
    let Some(div) = cell.and_then(|c| c.select(&div_selector).next()) else {
        return String::new();
    };

    let mut out = String::new();
    for node in div.descendants() {
        if let Some(text) = node.value().as_text() {
            out.push_str(text);
        } else if let Some(element) = node.value().as_element() {
            if element.name() == "br" && !out.trim().is_empty() {
                out.push_str(" - ");
            }
        }
    }
    out.trim().to_string()
}
