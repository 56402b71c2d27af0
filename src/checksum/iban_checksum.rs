use crate::checksum::{is_valid_mod97, Validator};

/// ISO 13616 mod-97 check: the first four characters are moved to the end, letters are
/// expanded to two digits and the resulting number must leave a remainder of 1.
pub struct IbanChecksum;

impl Validator for IbanChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let iban: Vec<char> = candidate
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if iban.len() <= 4 {
            return false;
        }
        let (head, tail) = iban.split_at(4);
        is_valid_mod97(tail.iter().chain(head).copied())
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn test_valid_ibans() {
        let valid_ibans = vec![
            "FI2112345600000785",
            "FI8847304720017517",
            "SE4550000000058398257466",
            "EE382200221020145685",
            "BE68539007547034",
            "DK5000400440116243",
            "DE44500105175407324931",
            "DE4450-0105-1754-0732-4931",
            "KZ86 125K ZT50 0410 0100",
            "fi21 1234 5600 0007 85",
        ];
        for iban in valid_ibans {
            assert!(IbanChecksum.is_valid_match(iban), "{}", iban);
        }
    }

    #[test]
    fn test_invalid_ibans() {
        let invalid_ibans = vec![
            "FI2112345600000784",
            "FI2112345600000786",
            "SE4550000000058398257465",
            "DE45500105175407324931",
            "FI21",
            "",
        ];
        for iban in invalid_ibans {
            assert!(!IbanChecksum.is_valid_match(iban), "{}", iban);
        }
    }
}
