use crate::checksum::{
    fi_reference_check_digit, CreditorReferenceChecksum, FinnishBusinessIdChecksum,
    FinnishHetuChecksum, FinnishReferenceChecksum, IbanChecksum, SwedenPINChecksum, Validator,
};
use crate::error::{ErrorCode, ValidationError};
use crate::filters::{
    bic_filter, country_code_filter, email_filter, fi_company_org_id_filter, fi_ssn_filter,
    iban_filter, passport_filter, phone_filter, se_ssn_filter,
};
use crate::iban_registry::{iban_length, MAX_CHECKSUM_IBAN_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_VALIDATOR: Regex =
        Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z]+$").unwrap();
    static ref PHONE_VALIDATOR: Regex = Regex::new(r"^\+?[0-9]{6,}$").unwrap();
    static ref FI_SSN_VALIDATOR: Regex =
        Regex::new(r"^[0-9]{6}[-+A][0-9]{3}[0-9A-Z]$").unwrap();
    static ref SE_SSN_VALIDATOR: Regex = Regex::new(r"^[0-9]{6}-[0-9]{4}$").unwrap();
}

const MIN_PASSPORT_LENGTH: usize = 5;
const MIN_FI_PAYMENT_REFERENCE_DIGITS: usize = 3;

fn ensure(valid: bool, code: ErrorCode, original: &str) -> Result<(), ValidationError> {
    if valid {
        Ok(())
    } else {
        Err(ValidationError::invalid(code, original))
    }
}

fn strip_whitespace(v: &str) -> String {
    v.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn phone_validator(v: &str) -> Result<(), ValidationError> {
    ensure(
        PHONE_VALIDATOR.is_match(&phone_filter(v)),
        ErrorCode::InvalidPhone,
        v,
    )
}

pub fn is_email(v: &str) -> bool {
    EMAIL_VALIDATOR.is_match(&email_filter(v))
}

pub fn email_validator(v: &str) -> Result<(), ValidationError> {
    ensure(is_email(v), ErrorCode::InvalidEmail, v)
}

pub fn passport_validator(v: &str) -> Result<(), ValidationError> {
    ensure(
        passport_filter(v).len() >= MIN_PASSPORT_LENGTH,
        ErrorCode::InvalidPassport,
        v,
    )
}

/// Accepts both ISO-2 and ISO-3 codes
pub fn country_code_validator(v: &str) -> Result<(), ValidationError> {
    let length = country_code_filter(v).chars().count();
    ensure(
        (2..=3).contains(&length),
        ErrorCode::InvalidCountryCode,
        v,
    )
}

/// Bank BIC/SWIFT code, 8 to 11 characters
pub fn bic_validator(v: &str) -> Result<(), ValidationError> {
    let length = bic_filter(v).chars().count();
    ensure((8..=11).contains(&length), ErrorCode::InvalidBic, v)
}

/// IBAN account number: country prefix, length, and mod-97 checksum.
///
/// The checksum is only verified for IBANs of at most 26 characters; longer IBANs are accepted
/// on country and length alone.
pub fn iban_validator(v: &str) -> Result<(), ValidationError> {
    validate_filtered_iban(&iban_filter(v), v)
}

fn validate_filtered_iban(iban: &str, original: &str) -> Result<(), ValidationError> {
    if iban.is_empty() {
        return Err(ValidationError::invalid(ErrorCode::InvalidIban, original));
    }
    // filtered IBANs are ASCII
    let country = &iban[..iban.len().min(2)];
    let expected_length = iban_length(country)
        .ok_or_else(|| ValidationError::invalid(ErrorCode::InvalidCountryCode, original))?;
    ensure(
        iban.len() == expected_length,
        ErrorCode::InvalidIban,
        original,
    )?;
    if expected_length <= MAX_CHECKSUM_IBAN_LENGTH {
        ensure(
            IbanChecksum.is_valid_match(iban),
            ErrorCode::InvalidIban,
            original,
        )?;
    }
    Ok(())
}

pub fn is_iban(v: &str) -> bool {
    let iban = iban_filter(v);
    let Some(expected_length) = iban.get(..2).and_then(iban_length) else {
        return false;
    };
    iban.len() == expected_length
        && (expected_length > MAX_CHECKSUM_IBAN_LENGTH || IbanChecksum.is_valid_match(&iban))
}

/// IBAN that must belong to the given country
pub fn validate_country_iban(v: &str, country: &str) -> Result<(), ValidationError> {
    let iban = iban_filter(v);
    ensure(iban.get(..2) == Some(country), ErrorCode::InvalidIban, v)?;
    validate_filtered_iban(&iban, v)
}

pub fn be_iban_validator(v: &str) -> Result<(), ValidationError> {
    validate_country_iban(v, "BE")
}

pub fn dk_iban_validator(v: &str) -> Result<(), ValidationError> {
    validate_country_iban(v, "DK")
}

pub fn ee_iban_validator(v: &str) -> Result<(), ValidationError> {
    validate_country_iban(v, "EE")
}

pub fn fi_iban_validator(v: &str) -> Result<(), ValidationError> {
    validate_country_iban(v, "FI")
}

pub fn se_iban_validator(v: &str) -> Result<(), ValidationError> {
    validate_country_iban(v, "SE")
}

/// Significant digits of `num` followed by the Finnish reference check digit. `None` if `num`
/// contains anything but digits and whitespace, or has fewer than 3 significant digits.
fn fi_reference_with_check_digit(num: &str) -> Option<String> {
    let digits = strip_whitespace(num);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let digits = digits.trim_start_matches('0');
    if digits.len() < MIN_FI_PAYMENT_REFERENCE_DIGITS {
        return None;
    }
    let check_digit = fi_reference_check_digit(digits)?;
    Some(format!("{}{}", digits, check_digit))
}

/// Appends the Finnish reference number check digit to `num` (at least 3 significant digits).
/// Whitespace and leading zeros are dropped: `"0 100"` gives `"1009"`.
pub fn fi_payment_reference_number(num: &str) -> Result<String, ValidationError> {
    fi_reference_with_check_digit(num)
        .ok_or_else(|| ValidationError::invalid(ErrorCode::InvalidPaymentReference, num))
}

/// Finnish reference number. Leading zeros make the reference invalid.
pub fn fi_payment_reference_validator(v: &str) -> Result<(), ValidationError> {
    let reference = strip_whitespace(v);
    ensure(
        reference.len() > MIN_FI_PAYMENT_REFERENCE_DIGITS
            && !reference.starts_with('0')
            && FinnishReferenceChecksum.is_valid_match(&reference),
        ErrorCode::InvalidPaymentReference,
        v,
    )
}

/// ISO 11649 creditor reference, e.g. `RF92 1229`
pub fn iso_payment_reference_validator(v: &str) -> Result<(), ValidationError> {
    ensure(
        CreditorReferenceChecksum.is_valid_match(v),
        ErrorCode::InvalidPaymentReference,
        v,
    )
}

/// Finnish business ID, with or without an `FI` prefix: `2084069-9`, `FI20840699`
pub fn fi_company_org_id_validator(v: &str) -> Result<(), ValidationError> {
    let compact = strip_whitespace(v);
    let mut prefix: String = compact.chars().take(2).collect();
    let org_id = fi_company_org_id_filter(&compact);
    if org_id.starts_with(prefix.as_str()) {
        // numeric only, no country prefix
        prefix = "FI".to_string();
    }
    let dash_before_check_digit =
        org_id.len() >= 2 && org_id.as_bytes()[org_id.len() - 2] == b'-';
    ensure(
        dash_before_check_digit && prefix == "FI",
        ErrorCode::InvalidCompanyOrgId,
        v,
    )?;
    ensure(
        FinnishBusinessIdChecksum.is_valid_match(&org_id),
        ErrorCode::InvalidCompanyOrgId,
        v,
    )
}

/// Company registration number checked by the rules of its country. Only Finnish IDs
/// have a checksum; other countries are accepted as-is.
pub fn validate_country_company_org_id(
    country_code: &str,
    v: &str,
) -> Result<(), ValidationError> {
    if country_code == "FI" {
        fi_company_org_id_validator(v)?;
    }
    Ok(())
}

/// Finnish personal identity code, `DDMMYYsNNNC`
pub fn fi_ssn_validator(v: &str) -> Result<(), ValidationError> {
    let ssn = fi_ssn_filter(v);
    ensure(FI_SSN_VALIDATOR.is_match(&ssn), ErrorCode::InvalidSsn, v)?;
    ensure(
        FinnishHetuChecksum.is_valid_match(&ssn),
        ErrorCode::InvalidSsn,
        v,
    )
}

/// Swedish personal identity number, `YYMMDD-NNNC`
pub fn se_ssn_validator(v: &str) -> Result<(), ValidationError> {
    let ssn = se_ssn_filter(v);
    ensure(SE_SSN_VALIDATOR.is_match(&ssn), ErrorCode::InvalidSsn, v)?;
    ensure(
        SwedenPINChecksum.is_valid_match(&ssn),
        ErrorCode::InvalidSsn,
        v,
    )
}

/// Filtered phone number, or `""` if it is not valid
pub fn phone_sanitizer(v: &str) -> String {
    let phone = phone_filter(v);
    if PHONE_VALIDATOR.is_match(&phone) {
        phone
    } else {
        String::new()
    }
}

/// Filtered email address, or `""` if it is not valid
pub fn email_sanitizer(v: &str) -> String {
    let email = email_filter(v);
    if EMAIL_VALIDATOR.is_match(&email) {
        email
    } else {
        String::new()
    }
}

/// Filtered passport number, or `""` if it is too short
pub fn passport_sanitizer(v: &str) -> String {
    let passport = passport_filter(v);
    if passport.len() >= MIN_PASSPORT_LENGTH {
        passport
    } else {
        String::new()
    }
}

pub fn country_code_sanitizer(v: &str) -> String {
    let country_code = country_code_filter(v);
    if (2..=3).contains(&country_code.chars().count()) {
        country_code
    } else {
        String::new()
    }
}

pub fn bic_sanitizer(v: &str) -> String {
    let bic = bic_filter(v);
    if (8..=11).contains(&bic.chars().count()) {
        bic
    } else {
        String::new()
    }
}
