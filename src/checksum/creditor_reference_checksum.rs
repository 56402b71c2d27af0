use crate::checksum::{is_valid_mod97, Validator};

/// ISO 11649 creditor reference (`RFxx...`).
pub struct CreditorReferenceChecksum;

impl Validator for CreditorReferenceChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        /*
         * Whitespace and leading zeros are ignored. The first four characters are rotated
         * to the end, letters expand to 10..35 and the remainder modulo 97 must be 1.
         * Lowercase letters and punctuation make the reference invalid.
         */
        let reference: Vec<char> = candidate
            .chars()
            .filter(|c| !c.is_whitespace())
            .skip_while(|c| *c == '0')
            .collect();
        if reference.is_empty() {
            return false;
        }
        let (head, tail) = reference.split_at(reference.len().min(4));
        is_valid_mod97(tail.iter().chain(head).copied())
    }
}
