use crate::bank_info::{clamped, BankInfo};
use crate::filters::iban_filter;

/// A range of Swedish clearing numbers. Bounds are 4-digit, zero padded and inclusive.
pub struct ClearingRange {
    pub bank_name: &'static str,
    pub begin: &'static str,
    pub end: &'static str,
    /// Number of account digits following the clearing number
    pub account_digits: u8,
}

const fn range(
    bank_name: &'static str,
    begin: &'static str,
    end: &'static str,
    account_digits: u8,
) -> ClearingRange {
    ClearingRange {
        bank_name,
        begin,
        end,
        account_digits,
    }
}

/// Searched in order, first match wins.
pub const SE_BANK_CLEARING_LIST: &[ClearingRange] = &[
    range("Nordea AB", "1100", "1199", 7),
    range("Danske Bank", "1200", "1399", 7),
    range("Nordea AB", "1401", "2099", 7),
    range("Ålandsbanken Abp", "2300", "2399", 7),
    range("Danske Bank", "2400", "2499", 7),
    range("Nordea AB", "3000", "3299", 7),
    range("Nordea AB Personkonto", "3300", "3300", 10),
    range("Nordea AB", "3301", "3399", 7),
    range("Länsförsäkringar Bank AB", "3400", "3409", 7),
    range("Nordea AB", "3460", "3599", 7),
    range("Nordea AB", "3600", "3999", 7),
    range("Nordea AB", "4000", "4999", 7),
    range("SEB", "5000", "5999", 7),
    range("Handelsbanken", "6000", "6999", 9),
    range("Swedbank", "7000", "7999", 7),
    // Swedbank account numbers can have 10 digits, clearing numbers up to 5
    range("Swedbank", "8000", "8999", 8),
    range("Länsförsäkringar Bank AB", "9020", "9029", 7),
    range("Citibank", "9040", "9049", 7),
    range("Länsförsäkringar Bank AB", "9060", "9069", 7),
    range("Royal Bank of Scotland", "9090", "9099", 7),
    range("Nordnet Bank", "9100", "9109", 7),
    range("SEB", "9120", "9124", 7),
    range("SEB", "9130", "9149", 7),
    range("Skandiabanken AB", "9150", "9169", 7),
    range("IKANO Banken AB", "9170", "9179", 7),
    range("Danske Bank", "9180", "9189", 7),
    range("Den Norske Bank", "9190", "9199", 7),
    range("Marginalen Bank", "9230", "9239", 7),
    range("SBAB Bank AB", "9250", "9259", 7),
    range("ICA Banken AB", "9270", "9279", 7),
    range("Resurs Bank AB", "9280", "9289", 7),
    range("Landshypotek AB", "9390", "9399", 7),
    range("Forex Bank AB", "9400", "9449", 7),
    range("Santander Consumer Bank AS", "9460", "9469", 7),
    range("BNP Paribas Fortis SA/NV", "9470", "9470", 7),
    range("Nordea AB", "9500", "9549", 10),
    range("Avanza Bank", "9550", "9569", 7),
    range("Sparbanken Syd", "9570", "9579", 8),
    range("Erik Penser Bankaktiebolag", "9590", "9599", 7),
    range("Lån og Spar Bank Sverige", "9630", "9639", 7),
    range("Nordax Bank AB", "9640", "9649", 7),
    range("Med Mera Bank AB", "9650", "9659", 7),
    range("Svea Bank", "9660", "9669", 7),
    range("JAK Medlemsbank", "9670", "9679", 7),
    range("Bluestep Finans AB", "9680", "9689", 7),
    range("Ekobanken", "9700", "9709", 7),
    range("Riksgälden", "9880", "9889", 7),
    range("Nordea AB", "9960", "9969", 10),
];

/// Bank name and account digit count by the clearing number of a Swedish account number
/// or IBAN; `("", None)` if the clearing number is not in any range.
pub fn se_clearing_code_bank_info(account_number: &str) -> (&'static str, Option<u8>) {
    let account = iban_filter(account_number);
    let account = match account.strip_prefix("SE") {
        Some(_) => clamped(&account, 4, account.len()),
        None => &account,
    };
    let clearing = clamped(account, 0, 4);
    SE_BANK_CLEARING_LIST
        .iter()
        .find(|range| range.begin <= clearing && clearing <= range.end)
        .map(|range| (range.bank_name, Some(range.account_digits)))
        .unwrap_or(("", None))
}

/// Swedish banks have no BIC in the table: `("", bank name)`
pub fn se_iban_bank_info(v: &str) -> BankInfo {
    ("", se_clearing_code_bank_info(v).0)
}
