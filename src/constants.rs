pub(crate) const WEBSITE_LINK: &str = "https://www.covid19india.org";

pub(crate) const NATIONAL_DATA_URL: &str = "https://api.covid19india.org/data.json";
pub(crate) const DISTRICT_WISE_URL: &str =
    "https://api.covid19india.org/v2/state_district_wise.json";

pub(crate) const TELEGRAM_API_AUTHORITY: &str = "api.telegram.org";
