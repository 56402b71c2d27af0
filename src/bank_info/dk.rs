use crate::bank_info::{clamped, BankInfo};
use crate::filters::iban_filter;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Danish bank registration numbers ("reg.nr.", the first four digits of the account).
const DK_BANK_CLEARING_CODES: &[(&str, &str)] = &[
    ("0040", "Nordea"),
    ("0400", "Lån & Spar Bank"),
    ("1551", "Danske Bank"),
    ("2000", "Nordea"),
    ("2100", "Nordea"),
    ("2191", "Nordea"),
    ("2222", "Nordea"),
    ("2400", "Nordea"),
    ("3000", "Danske Bank"),
    ("3001", "Danske Bank"),
    ("3100", "Danske Bank"),
    ("4180", "Danske Bank"),
    ("4183", "Danske Bank"),
    ("5301", "Arbejdernes Landsbank"),
    ("8114", "Nykredit Bank"),
    ("9070", "Spar Nord Bank"),
];

lazy_static! {
    static ref DK_BANK_CLEARING_MAP: HashMap<&'static str, &'static str> =
        DK_BANK_CLEARING_CODES.iter().copied().collect();
}

/// Bank name by the registration number of a Danish account number or IBAN
pub fn dk_clearing_code_bank_name(v: &str) -> &'static str {
    let account = iban_filter(v);
    let account = match account.strip_prefix("DK") {
        Some(_) => clamped(&account, 4, account.len()),
        None => &account,
    };
    DK_BANK_CLEARING_MAP
        .get(clamped(account, 0, 4))
        .copied()
        .unwrap_or("")
}

/// Danish banks have no BIC in the table: `("", bank name)`
pub fn dk_iban_bank_info(v: &str) -> BankInfo {
    ("", dk_clearing_code_bank_name(v))
}
