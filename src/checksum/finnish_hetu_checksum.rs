use crate::checksum::Validator;

pub struct FinnishHetuChecksum;

const HETU_LENGTH: usize = 11;
const CONTROL_CHARS: &str = "0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Control character for the birth date (`DDMMYY`) and individual number (`ZZZ`).
/// `None` if either part is not all digits.
pub fn hetu_control_character(date_part: &str, individual_number: &str) -> Option<char> {
    if !date_part
        .chars()
        .chain(individual_number.chars())
        .all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let numeric_value: u64 = format!("{}{}", date_part, individual_number)
        .parse()
        .ok()?;
    CONTROL_CHARS.chars().nth((numeric_value % 31) as usize)
}

impl Validator for FinnishHetuChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        /*
         * Finnish personal identity code (HETU) format:
         * DDMMYYCZZZQ where:
         * - DDMMYY is the date of birth
         * - C is the century marker: + for the 1800s, - for the 1900s, A for the 2000s
         * - ZZZ is the individual number
         * - Q is the control character
         */
        let chars: Vec<char> = candidate.chars().collect();
        if chars.len() != HETU_LENGTH {
            return false;
        }

        if !matches!(chars[6], '-' | '+' | 'A') {
            return false;
        }

        let date_part: String = chars[..6].iter().collect();
        let individual_number: String = chars[7..10].iter().collect();

        match hetu_control_character(&date_part, &individual_number) {
            Some(expected_control) => chars[10] == expected_control,
            None => false,
        }
    }
}
