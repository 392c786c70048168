//! Ranking of the national summary and per-region district aggregation.

use crate::districts::{District, StateDistricts};
use crate::fetch::FetchError;
use crate::national::{NationalSummary, StateRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Metric {
    Confirmed,
    Recovered,
    Deceased,
    #[default]
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankedEntry {
    pub(crate) name: String,
    pub(crate) value: u64,
}

/// Orders every statewise record (the synthetic "Total" row included) by the
/// chosen metric, descending. Equal values fall back to name order so the
/// result does not depend on payload order.
pub(crate) fn rank_national(
    summary: &NationalSummary,
    metric: Metric,
) -> Result<Vec<RankedEntry>, FetchError> {
    let mut entries = summary
        .statewise
        .iter()
        .map(|record| {
            Ok(RankedEntry {
                name: record.state.clone(),
                value: metric_value(record, metric)?,
            })
        })
        .collect::<Result<Vec<_>, FetchError>>()?;

    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}

/// Returns the matching region's districts in payload order together with
/// the sum of their confirmed counts. The server-side regional total is
/// ignored. An absent region yields an empty slice and a zero total.
pub(crate) fn aggregate_districts<'a>(
    doc: &'a [StateDistricts],
    region: &str,
) -> (&'a [District], u64) {
    for state in doc {
        if state.state == region {
            let total = state.district_data.iter().map(|d| d.confirmed).sum();
            return (&state.district_data, total);
        }
    }
    (&[], 0)
}

fn metric_value(record: &StateRecord, metric: Metric) -> Result<u64, FetchError> {
    let (field, raw) = match metric {
        Metric::Confirmed => ("confirmed", record.confirmed.as_str()),
        Metric::Recovered => ("recovered", record.recovered.as_str()),
        Metric::Deceased => ("deaths", record.deaths.as_str()),
        Metric::Active => ("active", record.active.as_str()),
    };

    raw.trim().parse().map_err(|_| FetchError::BadCount {
        field,
        value: raw.to_string(),
    })
}
