//! Bank metadata (BIC, bank name) resolved from the account number embedded in an IBAN.
//!
//! Each supported country registers a [BankInfoLookup]; the tables behind them are built once
//! and never modified. Missing data is not an error: lookups return empty strings.

mod be;
mod dk;
mod fi;
mod se;

pub use be::be_iban_bank_info;
pub use dk::{dk_clearing_code_bank_name, dk_iban_bank_info};
pub use fi::fi_iban_bank_info;
pub use se::{se_clearing_code_bank_info, se_iban_bank_info};

use crate::filters::iban_filter;
use crate::stats::record_bank_lookup;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// `(BIC, bank name)`; either may be empty when unknown.
pub type BankInfo = (&'static str, &'static str);

pub const NO_BANK_INFO: BankInfo = ("", "");

pub trait BankInfoLookup: Send + Sync {
    fn bank_info(&self, iban: &str) -> BankInfo;
}

struct BelgianBanks;
struct DanishBanks;
struct FinnishBanks;
struct SwedishBanks;

impl BankInfoLookup for BelgianBanks {
    fn bank_info(&self, iban: &str) -> BankInfo {
        be_iban_bank_info(iban)
    }
}

impl BankInfoLookup for DanishBanks {
    fn bank_info(&self, iban: &str) -> BankInfo {
        dk_iban_bank_info(iban)
    }
}

impl BankInfoLookup for FinnishBanks {
    fn bank_info(&self, iban: &str) -> BankInfo {
        fi_iban_bank_info(iban)
    }
}

impl BankInfoLookup for SwedishBanks {
    fn bank_info(&self, iban: &str) -> BankInfo {
        se_iban_bank_info(iban)
    }
}

lazy_static! {
    static ref BANK_INFO_BY_COUNTRY: HashMap<&'static str, &'static dyn BankInfoLookup> =
        HashMap::from([
            ("BE", &BelgianBanks as &'static dyn BankInfoLookup),
            ("DK", &DanishBanks as &'static dyn BankInfoLookup),
            ("FI", &FinnishBanks as &'static dyn BankInfoLookup),
            ("SE", &SwedishBanks as &'static dyn BankInfoLookup),
        ]);
}

/// BIC and bank name for an IBAN, or `("", "")` if the country or bank is not known.
pub fn iban_bank_info(v: &str) -> BankInfo {
    let iban = iban_filter(v);
    let country = clamped(&iban, 0, 2);
    match BANK_INFO_BY_COUNTRY.get(country) {
        Some(lookup) => {
            let info = lookup.bank_info(&iban);
            record_bank_lookup(country, info != NO_BANK_INFO);
            info
        }
        None => NO_BANK_INFO,
    }
}

/// BIC for an IBAN, or `""` if not known
pub fn iban_bic(v: &str) -> &'static str {
    iban_bank_info(v).0
}

/// Countries that have a bank table
pub fn supported_countries() -> Vec<&'static str> {
    let mut countries: Vec<_> = BANK_INFO_BY_COUNTRY.keys().copied().collect();
    countries.sort_unstable();
    countries
}

/// `v[start..end]` clamped to the string length. Only called on filtered (ASCII) values.
fn clamped(v: &str, start: usize, end: usize) -> &str {
    let end = end.min(v.len());
    let start = start.min(end);
    &v[start..end]
}

/// Expands inclusive `(begin, end, value)` rows of equal-width numeric codes into an exact-match map.
fn expand_code_ranges(
    rows: &[(&'static str, &'static str, &'static str)],
) -> HashMap<String, &'static str> {
    let mut map = HashMap::new();
    for (begin, end, value) in rows {
        let width = begin.len();
        if let (Ok(first), Ok(last)) = (begin.parse::<u32>(), end.parse::<u32>()) {
            for code in first..=last {
                map.insert(format!("{:0width$}", code, width = width), *value);
            }
        }
    }
    map
}

#[cfg(test)]
mod test {
    use crate::bank_info::*;

    #[test]
    fn test_bank_info() {
        assert_eq!(
            iban_bank_info("FI8847304720017517"),
            ("POPFFI22", "POP-Pankki")
        );
        assert_eq!(iban_bank_info(""), NO_BANK_INFO);
        assert_eq!(
            iban_bank_info("BE75270187592710"),
            ("GEBABEBB", "BNP Paribas Fortis")
        );
        assert_eq!(
            iban_bank_info("BE58465045170210"),
            ("KREDBEBB", "KBC Bank")
        );
        assert_eq!(
            iban_bank_info("BE11000123456748"),
            ("BPOTBEB1", "bpost bank")
        );
        assert_eq!(iban_bank_info("DK50 0040 0440 1162 43"), ("", "Nordea"));
        assert_eq!(
            iban_bank_info("SE7912001200012350223035"),
            ("", "Danske Bank")
        );
    }

    #[test]
    fn unsupported_country_has_no_info() {
        assert_eq!(iban_bank_info("EE382200221020145685"), NO_BANK_INFO);
        assert_eq!(iban_bank_info("DE44500105175407324931"), NO_BANK_INFO);
        assert_eq!(iban_bank_info("F"), NO_BANK_INFO);
    }

    #[test]
    fn test_iban_bic() {
        assert_eq!(iban_bic("FI21 1234 5600 0007 85"), "NDEAFIHH");
        assert_eq!(iban_bic("DK5000400440116243"), "");
        assert_eq!(iban_bic("XX"), "");
    }

    #[test]
    fn test_supported_countries() {
        assert_eq!(supported_countries(), vec!["BE", "DK", "FI", "SE"]);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(clamped("FI21", 0, 2), "FI");
        assert_eq!(clamped("FI21123", 4, 7), "123");
        assert_eq!(clamped("FI211", 4, 7), "1");
        assert_eq!(clamped("FI", 4, 7), "");
    }

    #[test]
    fn test_expand_code_ranges() {
        let map = expand_code_ranges(&[("098", "101", "A"), ("7", "7", "B")]);
        assert_eq!(map.len(), 5);
        assert_eq!(map.get("098"), Some(&"A"));
        assert_eq!(map.get("100"), Some(&"A"));
        assert_eq!(map.get("101"), Some(&"A"));
        assert_eq!(map.get("7"), Some(&"B"));
        assert_eq!(map.get("102"), None);
    }
}
