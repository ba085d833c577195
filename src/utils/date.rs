use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` value, returning the raw text on failure.
pub fn parse_optional_date(s: Option<&String>) -> Result<Option<NaiveDate>, String> {
    match s {
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| raw.clone()),
        None => Ok(None),
    }
}
