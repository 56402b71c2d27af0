use crate::bank_info::{clamped, expand_code_ranges, BankInfo};
use crate::filters::iban_filter;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Inclusive ranges of the first three digits of a Finnish account number (the digits
/// following `FIxx`) and the BIC of the bank that owns them.
const FI_BIC_BY_ACCOUNT_RANGE: &[(&str, &str, &str)] = &[
    ("100", "299", "NDEAFIHH"),
    ("310", "319", "HANDFIHH"),
    ("330", "339", "ESSEFIHX"),
    ("340", "349", "DABAFIHX"),
    ("360", "369", "SBANFIHH"),
    ("370", "379", "DNBAFIHX"),
    ("380", "389", "SWEDFIHH"),
    ("390", "399", "SBANFIHH"),
    ("400", "400", "ITELFIHH"),
    ("402", "403", "ITELFIHH"),
    ("405", "405", "HELSFIHH"),
    ("406", "408", "ITELFIHH"),
    ("410", "412", "ITELFIHH"),
    ("414", "421", "ITELFIHH"),
    ("423", "432", "ITELFIHH"),
    ("435", "452", "ITELFIHH"),
    ("454", "464", "ITELFIHH"),
    ("470", "479", "POPFFI22"),
    ("483", "493", "ITELFIHH"),
    ("495", "496", "ITELFIHH"),
    ("497", "497", "HELSFIHH"),
    ("500", "599", "OKOYFIHH"),
    ("600", "699", "AABAFI22"),
    ("713", "713", "CITIFIHX"),
    ("715", "715", "ITELFIHH"),
    ("717", "717", "BIGKFIH1"),
    ("799", "799", "HOLVFIHH"),
    ("800", "899", "DABAFIHH"),
];

const FI_BANK_NAME_BY_BIC: &[(&str, &str)] = &[
    ("AABAFI22", "Ålandsbanken"),
    ("BIGKFIH1", "Bigbank"),
    ("CITIFIHX", "Citibank"),
    ("DABAFIHH", "Danske Bank"),
    ("DABAFIHX", "Danske Bank"),
    ("DNBAFIHX", "DNB Bank ASA, Finland Branch"),
    ("ESSEFIHX", "Skandinaviska Enskilda Banken (SEB)"),
    ("HANDFIHH", "Handelsbanken"),
    ("HELSFIHH", "Aktia Pankki"),
    ("HOLVFIHH", "Holvi"),
    ("ITELFIHH", "Säästöpankit (Sp) and Oma Säästöpankki"),
    ("NDEAFIHH", "Nordea Pankki (Nordea)"),
    ("OKOYFIHH", "OP Ryhmä"),
    ("POPFFI22", "POP-Pankki"),
    ("SBANFIHH", "S-Pankki"),
    ("SWEDFIHH", "Swedbank"),
];

lazy_static! {
    static ref FI_BIC_BY_ACCOUNT_NUMBER: HashMap<String, &'static str> =
        expand_code_ranges(FI_BIC_BY_ACCOUNT_RANGE);
    static ref FI_BANK_NAME: HashMap<&'static str, &'static str> =
        FI_BANK_NAME_BY_BIC.iter().copied().collect();
}

/// BIC and bank name of a Finnish IBAN
pub fn fi_iban_bank_info(v: &str) -> BankInfo {
    let iban = iban_filter(v);
    match FI_BIC_BY_ACCOUNT_NUMBER.get(clamped(&iban, 4, 7)) {
        Some(&bic) => (bic, FI_BANK_NAME.get(bic).copied().unwrap_or("")),
        None => ("", ""),
    }
}
