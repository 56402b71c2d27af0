use lazy_static::lazy_static;
use std::collections::HashMap;

/// Total IBAN length (country code and check digits included) per ISO 3166 country code.
pub const IBAN_LENGTH_BY_COUNTRY: &[(&str, usize)] = &[
    ("AD", 24),
    ("AE", 23),
    ("AL", 28),
    ("AT", 20),
    ("AX", 18),
    ("AZ", 28),
    ("BA", 20),
    ("BE", 16),
    ("BG", 22),
    ("BH", 22),
    ("BR", 29),
    ("BY", 28),
    ("CH", 21),
    ("CR", 22),
    ("CY", 28),
    ("CZ", 24),
    ("DE", 22),
    ("DK", 18),
    ("DO", 28),
    ("EE", 20),
    ("EG", 29),
    ("ES", 24),
    ("FI", 18),
    ("FO", 18),
    ("FR", 27),
    ("GB", 22),
    ("GE", 22),
    ("GI", 23),
    ("GL", 18),
    ("GR", 27),
    ("GT", 28),
    ("HR", 21),
    ("HU", 28),
    ("IE", 22),
    ("IL", 23),
    ("IQ", 23),
    ("IS", 26),
    ("IT", 27),
    ("JO", 30),
    ("KW", 30),
    ("KZ", 20),
    ("LB", 28),
    ("LC", 32),
    ("LI", 21),
    ("LT", 20),
    ("LU", 20),
    ("LV", 21),
    ("MC", 27),
    ("MD", 24),
    ("ME", 22),
    ("MK", 19),
    ("MR", 27),
    ("MT", 31),
    ("MU", 30),
    ("NL", 18),
    ("NO", 15),
    ("PK", 24),
    ("PL", 28),
    ("PS", 29),
    ("PT", 25),
    ("QA", 29),
    ("RO", 24),
    ("RS", 22),
    ("SA", 24),
    ("SC", 31),
    ("SE", 24),
    ("SI", 19),
    ("SK", 24),
    ("SM", 27),
    ("ST", 25),
    ("SV", 28),
    ("TL", 23),
    ("TN", 24),
    ("TR", 26),
    ("UA", 29),
    ("VA", 22),
    ("VG", 24),
    ("XK", 20),
];

/// Longest IBAN for which the numeric checksum is verified and generated
pub const MAX_CHECKSUM_IBAN_LENGTH: usize = 26;

lazy_static! {
    static ref IBAN_LENGTHS: HashMap<&'static str, usize> =
        IBAN_LENGTH_BY_COUNTRY.iter().copied().collect();
}

/// Expected IBAN length for the country, or `None` if IBANs of that country are not supported.
pub fn iban_length(country: &str) -> Option<usize> {
    IBAN_LENGTHS.get(country).copied()
}

/// Countries whose IBANs are at most `max_length` characters long, in alphabetical order.
pub fn countries_with_max_length(max_length: usize) -> Vec<&'static str> {
    IBAN_LENGTH_BY_COUNTRY
        .iter()
        .filter(|(_, length)| *length <= max_length)
        .map(|(country, _)| *country)
        .collect()
}
