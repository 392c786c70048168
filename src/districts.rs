use serde_derive::Deserialize;

/// One entry of `v2/state_district_wise.json`. District order is the payload
/// order and is preserved through aggregation and rendering.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct StateDistricts {
    pub(crate) state: String,
    #[serde(rename = "districtData")]
    pub(crate) district_data: Vec<District>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct District {
    pub(crate) district: String,
    pub(crate) confirmed: u64,
    pub(crate) delta: Delta,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Delta {
    pub(crate) confirmed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_district_wise_payload() {
        let raw = r#"[
            {
                "state": "Karnataka",
                "districtData": [
                    {"district": "Bengaluru", "confirmed": 50, "delta": {"confirmed": 5}},
                    {"district": "Mysuru", "confirmed": 8, "delta": {"confirmed": 0}}
                ]
            }
        ]"#;

        let doc: Vec<StateDistricts> = serde_json::from_str(raw).unwrap();
        assert_eq!(doc[0].state, "Karnataka");
        assert_eq!(doc[0].district_data[0].district, "Bengaluru");
        assert_eq!(doc[0].district_data[0].confirmed, 50);
        assert_eq!(doc[0].district_data[0].delta.confirmed, 5);
    }

    #[test]
    fn rejects_negative_confirmed_count() {
        let raw = r#"[
            {
                "state": "Karnataka",
                "districtData": [
                    {"district": "Bengaluru", "confirmed": -3, "delta": {"confirmed": 0}}
                ]
            }
        ]"#;

        assert!(serde_json::from_str::<Vec<StateDistricts>>(raw).is_err());
    }
}
