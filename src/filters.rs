//! Normalization of free-form user input into the canonical form each validator expects.
//!
//! Filters never fail: anything they don't understand is dropped, and empty input gives
//! an empty string.

use unicode_normalization::UnicodeNormalization;

fn keep_chars(v: &str, keep: impl Fn(char) -> bool) -> String {
    v.chars().filter(|c| keep(*c)).collect()
}

/// Digits, plus a `+` if it is the first character kept.
pub fn phone_filter(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

pub fn email_filter(v: &str) -> String {
    v.trim().to_lowercase()
}

pub fn passport_filter(v: &str) -> String {
    keep_chars(&v.to_uppercase(), |c| {
        c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-'
    })
}

pub fn country_code_filter(v: &str) -> String {
    v.trim().to_uppercase()
}

pub fn bic_filter(v: &str) -> String {
    v.trim().to_uppercase()
}

pub fn iban_filter(v: &str) -> String {
    keep_chars(&v.to_uppercase(), |c| {
        c.is_ascii_uppercase() || c.is_ascii_digit()
    })
}

/// IBAN in the printed form, e.g. `FI88 4730 4720 0175 17`
pub fn iban_filter_readable(v: &str) -> String {
    let iban = iban_filter(v);
    let mut out = String::with_capacity(iban.len() + iban.len() / 4);
    for (i, c) in iban.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn fi_ssn_filter(v: &str) -> String {
    keep_chars(&v.to_uppercase(), |c| {
        c.is_ascii_uppercase() || c.is_ascii_digit() || c == '+' || c == '-'
    })
}

pub fn se_ssn_filter(v: &str) -> String {
    keep_chars(v, |c| c.is_ascii_digit() || c == '-')
}

/// Finnish business ID in `NNNNNNN-C` form. Needs at least two digits.
pub fn fi_company_org_id_filter(v: &str) -> String {
    let digits = digit_filter(v);
    if digits.len() < 2 {
        return String::new();
    }
    let (body, check) = digits.split_at(digits.len() - 1);
    format!("{}-{}", body, check)
}

/// Company ID filtered by the rules of its registration country
pub fn filter_country_company_org_id(country_code: &str, v: &str) -> String {
    if country_code == "FI" {
        fi_company_org_id_filter(v)
    } else {
        keep_chars(v, |c| {
            c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-'
        })
    }
}

/// Replaces accented characters with their plain ASCII base, drops anything else outside ASCII.
/// `"HELÉN"` becomes `"HELEN"`.
pub fn ascii_filter(v: &str) -> String {
    v.nfkd().filter(char::is_ascii).collect()
}

/// Turns arbitrary text into something usable as an identifier: `"1st Name"` becomes `"_1st_Name"`.
pub fn variable_name_filter(v: &str) -> String {
    let mut out: String = ascii_filter(v)
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

pub fn digit_filter(v: &str) -> String {
    keep_chars(v, |c| c.is_ascii_digit())
}

/// Alphanumeric characters plus any character listed in `extra`
pub fn alnum_filter(v: &str, extra: &str) -> String {
    keep_chars(v, |c| c.is_alphanumeric() || extra.contains(c))
}

/// True if `v` is an integer written the way it would be printed (`"12"`, `"-3"`, `"0"`).
pub fn is_int(v: &str) -> bool {
    let digits = v.strip_prefix('-').unwrap_or(v);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if digits.starts_with('0') {
        // "0" is canonical, "-0" and "007" are not
        return v == "0";
    }
    true
}
