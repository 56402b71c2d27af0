mod creditor_reference_checksum;
mod finnish_business_id_checksum;
mod finnish_hetu_checksum;
mod finnish_reference_checksum;
mod iban_checksum;
mod sweden_pin_checksum;

pub use crate::checksum::creditor_reference_checksum::CreditorReferenceChecksum;
pub use crate::checksum::finnish_business_id_checksum::{
    business_id_remainder, FinnishBusinessIdChecksum,
};
pub use crate::checksum::finnish_hetu_checksum::{hetu_control_character, FinnishHetuChecksum};
pub use crate::checksum::finnish_reference_checksum::{
    fi_reference_check_digit, FinnishReferenceChecksum,
};
pub use crate::checksum::iban_checksum::IbanChecksum;
pub use crate::checksum::sweden_pin_checksum::SwedenPINChecksum;

use iso_iec_7064::{System, MOD_97_10};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Value of an ISO 13616 / ISO 11649 character: digits as themselves, `A`..`Z` as 10..35.
#[inline]
fn alphanumeric_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Decimal string obtained by writing every character's [alphanumeric_value] one after
/// another. `None` if a character has no value.
fn expand_alphanumeric(chars: impl Iterator<Item = char>) -> Option<String> {
    let mut digits = String::new();
    for c in chars {
        digits.push_str(&alphanumeric_value(c)?.to_string());
    }
    Some(digits)
}

/// ISO 7064 MOD 97-10 over the expanded characters: the number must leave a remainder of 1.
fn is_valid_mod97(chars: impl Iterator<Item = char>) -> bool {
    match expand_alphanumeric(chars) {
        Some(digits) if !digits.is_empty() => MOD_97_10.validate_string(&digits),
        _ => false,
    }
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}
