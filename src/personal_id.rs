use crate::error::{ErrorCode, ValidationError};
use crate::filters::fi_ssn_filter;
use crate::validators::fi_ssn_validator;
use chrono::{Datelike, NaiveDate, Utc};

/// Full years between `born` and `today` (defaults to the current UTC date).
pub fn calculate_age(born: NaiveDate, today: Option<NaiveDate>) -> i32 {
    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    let birthday_not_reached = (today.month(), today.day()) < (born.month(), born.day());
    today.year() - born.year() - i32::from(birthday_not_reached)
}

/// Birth date encoded in a Finnish personal identity code
pub fn fi_ssn_birthday(v: &str) -> Result<NaiveDate, ValidationError> {
    fi_ssn_validator(v)?;
    let ssn = fi_ssn_filter(v);
    let field = |range: std::ops::Range<usize>| -> u32 { ssn[range].parse().unwrap_or(0) };
    let day = field(0..2);
    let month = field(2..4);
    let year = field(4..6) as i32;
    let century = match &ssn[6..7] {
        "+" => 1800,
        "-" => 1900,
        _ => 2000,
    };
    NaiveDate::from_ymd_opt(century + year, month, day)
        .ok_or_else(|| ValidationError::invalid(ErrorCode::InvalidSsn, v))
}

/// Age in full years of the person with the Finnish personal identity code `ssn`
pub fn fi_ssn_age(ssn: &str, today: Option<NaiveDate>) -> Result<i32, ValidationError> {
    Ok(calculate_age(fi_ssn_birthday(ssn)?, today))
}
