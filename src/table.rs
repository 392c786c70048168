//! Fixed-width monospaced tables for the chat client.
//!
//! Column widths and the period/dash padding are display constraints for a
//! narrow chat window; names are truncated, never the counts.

use std::collections::HashMap;

use thiserror::Error;

use crate::constants::WEBSITE_LINK;
use crate::districts::District;
use crate::national::{NationalSummary, StateRecord};
use crate::stats::RankedEntry;

const NATIONAL_COL: usize = 5;
const NATIONAL_NAME_COL: usize = 6;
const DISTRICT_CONFIRMED_COL: usize = 8;
const DISTRICT_NAME_COL: usize = 14;
const DISTRICT_NAME_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("no national record for ranked region {0:?}")]
    MissingRecord(String),
}

/// One row per ranked entry, columns in confirmed/recovered/deaths/active
/// order. A ranked name without a matching record fails the whole render;
/// values are never carried over from another row.
pub(crate) fn render_national(
    ranked: &[RankedEntry],
    summary: &NationalSummary,
) -> Result<String, RenderError> {
    let by_name: HashMap<&str, &StateRecord> = summary
        .statewise
        .iter()
        .map(|record| (record.state.as_str(), record))
        .collect();

    let mut message = String::from("\n");
    message.push_str(WEBSITE_LINK);
    message.push_str("\n\n");
    for (i, heading) in ["REGION", "CONF", "RECO", "DECE", "ACTI"].iter().enumerate() {
        if i > 0 {
            message.push('|');
        }
        message.push_str(&ljust(heading, NATIONAL_COL, '.'));
    }
    message.push('\n');
    message.push_str("------|-----|-----|-----|-----\n");

    for entry in ranked {
        let record = by_name
            .get(entry.name.as_str())
            .ok_or_else(|| RenderError::MissingRecord(entry.name.clone()))?;

        if entry.name.trim() == "Total" {
            message.push_str("INDIA.");
        } else {
            message.push_str(&ljust(truncate(&entry.name, NATIONAL_NAME_COL), NATIONAL_NAME_COL, ' '));
        }
        for value in [&record.confirmed, &record.recovered, &record.deaths, &record.active] {
            message.push('|');
            message.push_str(&ljust(value, NATIONAL_COL, ' '));
        }
        message.push('\n');
    }

    Ok(format!("```{message}```"))
}

/// Districts in payload order; an empty list still renders the total line
/// and the header row.
pub(crate) fn render_district_table(
    region: &str,
    total_confirmed: u64,
    districts: &[District],
) -> String {
    let mut table = String::from(WEBSITE_LINK);
    table.push('\n');
    table.push_str(&ljust("District", DISTRICT_NAME_COL, ' '));
    table.push_str("|Total Confirmed\n");

    for district in districts {
        table.push_str(&ljust(
            truncate(&district.district, DISTRICT_NAME_LIMIT),
            DISTRICT_NAME_COL,
            '.',
        ));
        table.push('|');
        table.push_str(&ljust(&district.confirmed.to_string(), DISTRICT_CONFIRMED_COL, ' '));
        table.push('\n');
    }

    format!("{region} Total Cases : {total_confirmed}\n```{table}```")
}

fn ljust(value: &str, width: usize, fill: char) -> String {
    let mut out = String::from(value);
    while out.len() < width {
        out.push(fill);
    }
    out
}

// ASCII names assumed upstream; a mid-codepoint cut falls back to the full name.
fn truncate(name: &str, limit: usize) -> &str {
    name.get(..limit).unwrap_or(name)
}
