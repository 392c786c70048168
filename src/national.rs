use serde_derive::Deserialize;

/// Payload of `data.json`. Count fields arrive as numeric strings and are
/// kept that way for rendering; ranking coerces them to integers.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct NationalSummary {
    pub(crate) statewise: Vec<StateRecord>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct StateRecord {
    pub(crate) state: String,
    pub(crate) statecode: String,
    pub(crate) confirmed: String,
    pub(crate) recovered: String,
    pub(crate) deaths: String,
    pub(crate) active: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_statewise_payload() {
        let raw = r#"{
            "statewise": [
                {
                    "state": "Total",
                    "statecode": "TT",
                    "confirmed": "500",
                    "recovered": "380",
                    "deaths": "20",
                    "active": "100",
                    "deltaconfirmed": "12"
                },
                {
                    "state": "Karnataka",
                    "statecode": "KA",
                    "confirmed": "50",
                    "recovered": "38",
                    "deaths": "2",
                    "active": "10"
                }
            ]
        }"#;

        let summary: NationalSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.statewise.len(), 2);
        assert_eq!(summary.statewise[0].state, "Total");
        assert_eq!(summary.statewise[0].statecode, "TT");
        assert_eq!(summary.statewise[1].confirmed, "50");
    }

    #[test]
    fn rejects_payload_missing_required_field() {
        let raw = r#"{"statewise": [{"state": "Karnataka", "statecode": "KA"}]}"#;
        assert!(serde_json::from_str::<NationalSummary>(raw).is_err());
    }
}
