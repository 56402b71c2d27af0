use crate::bank_info::{clamped, expand_code_ranges, BankInfo};
use crate::filters::iban_filter;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Inclusive ranges of Belgian bank protocol numbers (the three digits following `BExx`).
const BE_BIC_BY_BANK_CODE_RANGE: &[(&str, &str, &str)] = &[
    ("000", "049", "BPOTBEB1"),
    ("050", "099", "GKCCBEBB"),
    ("103", "108", "NICABEBB"),
    ("140", "149", "GEBABEBB"),
    ("200", "299", "GEBABEBB"),
    ("300", "399", "BBRUBEBB"),
    ("400", "499", "KREDBEBB"),
    ("523", "524", "TRIOBEBB"),
    ("550", "560", "GKCCBEBB"),
    ("562", "569", "GKCCBEBB"),
    ("630", "631", "BBRUBEBB"),
    ("750", "774", "AXABBE22"),
    ("775", "799", "GKCCBEBB"),
    ("825", "826", "DEUTBEBE"),
    ("890", "899", "VDSPBE91"),
    ("973", "973", "ARSPBE22"),
    ("978", "980", "ARSPBE22"),
];

const BE_BANK_NAME_BY_BIC: &[(&str, &str)] = &[
    ("ARSPBE22", "Argenta"),
    ("AXABBE22", "AXA Bank"),
    ("BBRUBEBB", "ING Belgium"),
    ("BPOTBEB1", "bpost bank"),
    ("DEUTBEBE", "Deutsche Bank"),
    ("GEBABEBB", "BNP Paribas Fortis"),
    ("GKCCBEBB", "Belfius Bank"),
    ("KREDBEBB", "KBC Bank"),
    ("NICABEBB", "Crelan"),
    ("TRIOBEBB", "Triodos Bank"),
    ("VDSPBE91", "vdk bank"),
];

lazy_static! {
    static ref BE_BIC_BY_ACCOUNT_NUMBER: HashMap<String, &'static str> =
        expand_code_ranges(BE_BIC_BY_BANK_CODE_RANGE);
    static ref BE_BANK_NAME: HashMap<&'static str, &'static str> =
        BE_BANK_NAME_BY_BIC.iter().copied().collect();
}

/// BIC and bank name of a Belgian IBAN
pub fn be_iban_bank_info(v: &str) -> BankInfo {
    let iban = iban_filter(v);
    match BE_BIC_BY_ACCOUNT_NUMBER.get(clamped(&iban, 4, 7)) {
        Some(&bic) => (bic, BE_BANK_NAME.get(bic).copied().unwrap_or("")),
        None => ("", ""),
    }
}

#[cfg(test)]
mod test {
    use crate::bank_info::be::*;

    #[test]
    fn test_be_iban_bank_info() {
        assert_eq!(
            be_iban_bank_info("BE75270187592710"),
            ("GEBABEBB", "BNP Paribas Fortis")
        );
        assert_eq!(
            be_iban_bank_info("BE58 4650 4517 0210"),
            ("KREDBEBB", "KBC Bank")
        );
        assert_eq!(
            be_iban_bank_info("BE11000123456748"),
            ("BPOTBEB1", "bpost bank")
        );
    }

    #[test]
    fn unknown_bank_code() {
        assert_eq!(be_iban_bank_info("BE68539007547034"), ("", ""));
        assert_eq!(be_iban_bank_info("BE"), ("", ""));
    }

    #[test]
    fn every_bic_has_a_name() {
        for (_, _, bic) in BE_BIC_BY_BANK_CODE_RANGE {
            assert!(BE_BANK_NAME.contains_key(bic), "{}", bic);
        }
    }
}
