//! Command boundary: turns one inbound message into one reply string.
//! Every failure past this point becomes fixed user-readable text; raw
//! error detail goes to the log only.

use tracing::warn;

use crate::constants::WEBSITE_LINK;
use crate::fetch::{self, HttpsClient};
use crate::statecodes::StateCodes;
use crate::stats::{self, Metric};
use crate::table;

pub(crate) const INVALID_STATE: &str = "Invalid state name. Use /statecodes to display codes.";
const SERVICE_UNAVAILABLE: &str = "covid19india.org data is temporarily unavailable, try again later.";
const INCONSISTENT_DATA: &str = "Received inconsistent data upstream, try again later.";
const USAGE: &str = "Send INDIA for national statistics, a two letter state code \
    for district statistics, or /statecodes to list the codes.";

pub(crate) struct AppState {
    pub(crate) client: HttpsClient,
    pub(crate) codes: StateCodes,
}

pub(crate) async fn handle(state: &AppState, text: &str) -> String {
    let input = text.trim().to_uppercase();
    match input.as_str() {
        "/START" | "/HELP" => USAGE.to_string(),
        "/STATECODES" => statecodes_listing(&state.codes),
        "" | "INDIA" => national(state).await,
        code => match state.codes.resolve(code) {
            Some(region) => district(state, region).await,
            None => INVALID_STATE.to_string(),
        },
    }
}

async fn national(state: &AppState) -> String {
    let summary = match fetch::fetch_national(&state.client).await {
        Ok(summary) => summary,
        Err(err) => {
            warn!(%err, "national fetch failed");
            return SERVICE_UNAVAILABLE.to_string();
        }
    };

    let ranked = match stats::rank_national(&summary, Metric::default()) {
        Ok(ranked) => ranked,
        Err(err) => {
            warn!(%err, "national ranking failed");
            return SERVICE_UNAVAILABLE.to_string();
        }
    };

    match table::render_national(&ranked, &summary) {
        Ok(text) => text,
        Err(err) => {
            warn!(%err, "national render failed");
            INCONSISTENT_DATA.to_string()
        }
    }
}

async fn district(state: &AppState, region: &str) -> String {
    let doc = match fetch::fetch_district_wise(&state.client).await {
        Ok(doc) => doc,
        Err(err) => {
            warn!(%err, "district-wise fetch failed");
            return SERVICE_UNAVAILABLE.to_string();
        }
    };

    let (districts, total_confirmed) = stats::aggregate_districts(&doc, region);
    table::render_district_table(region, total_confirmed, districts)
}

fn statecodes_listing(codes: &StateCodes) -> String {
    let mut body = String::new();
    for (code, name) in codes.short_codes() {
        body.push_str(code);
        body.push_str(": ");
        body.push_str(name);
        body.push('\n');
    }
    format!("{WEBSITE_LINK}```\n\nState codes\n\n{body}```")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_state() -> AppState {
        let codes = StateCodes::parse(
            r#"{"KA": "Karnataka", "KL": "Kerala", "KERALA": "Kerala"}"#,
        )
        .unwrap();
        AppState {
            client: fetch::https_client(),
            codes,
        }
    }

    #[tokio::test]
    async fn unknown_code_gets_the_fixed_reply_without_a_fetch() {
        let state = app_state();
        assert_eq!(handle(&state, "ZZ").await, INVALID_STATE);
    }

    #[tokio::test]
    async fn commands_are_case_insensitive() {
        let state = app_state();
        assert_eq!(handle(&state, "/Start").await, USAGE);
        assert_eq!(handle(&state, "/HELP").await, USAGE);
    }

    #[tokio::test]
    async fn statecodes_listing_excludes_aliases() {
        let state = app_state();
        let reply = handle(&state, "/statecodes").await;
        assert!(reply.contains("KA: Karnataka\n"));
        assert!(reply.contains("KL: Kerala\n"));
        assert!(!reply.contains("KERALA:"));
        assert!(reply.starts_with(WEBSITE_LINK));
    }
}
