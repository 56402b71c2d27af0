//! Random identifiers that pass their own validators, for test data.
//!
//! Each generator has a `_with_rng` variant taking any [Rng], so callers (and tests) can
//! seed the output.

use crate::checksum::{business_id_remainder, hetu_control_character, IbanChecksum, Validator};
use crate::config::FiSsnGeneratorConfig;
use crate::error::ValidationError;
use crate::iban_registry::{countries_with_max_length, iban_length, MAX_CHECKSUM_IBAN_LENGTH};
use crate::stats::{record_generated, GeneratedKind};
use rand::seq::SliceRandom;
use rand::Rng;

const MIN_FI_SSN_YEAR: i32 = 1800;
const MAX_FI_SSN_YEAR: i32 = 2099;

fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

pub fn iban_generator(country: Option<&str>) -> Result<String, ValidationError> {
    iban_generator_with_rng(&mut rand::thread_rng(), country)
}

/// Random IBAN with an all-digit BBAN. Without a country, one is picked among those whose IBANs
/// are short enough for the checksum to be verified.
pub fn iban_generator_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    country: Option<&str>,
) -> Result<String, ValidationError> {
    let country = match country {
        Some(country) => country,
        None => countries_with_max_length(MAX_CHECKSUM_IBAN_LENGTH)
            .choose(rng)
            .copied()
            .ok_or_else(|| ValidationError::unsupported("no IBAN countries available"))?,
    };
    let length = iban_length(country).ok_or_else(|| {
        ValidationError::unsupported(format!("IBANs of country {:?} are not supported", country))
    })?;
    if length > MAX_CHECKSUM_IBAN_LENGTH {
        return Err(ValidationError::unsupported(format!(
            "IBANs of country {} are longer than {} characters",
            country, MAX_CHECKSUM_IBAN_LENGTH
        )));
    }

    let bban = random_digits(rng, length - 4);
    // ISO 13616 check digits are 02..=98, exactly one of them passes mod-97
    let iban = (2..=98)
        .map(|check_digits| format!("{}{:02}{}", country, check_digits, bban))
        .find(|candidate| IbanChecksum.is_valid_match(candidate))
        .ok_or_else(|| ValidationError::unsupported(format!("no check digits for {}", bban)))?;
    record_generated(GeneratedKind::Iban);
    Ok(iban)
}

pub fn fi_ssn_generator(config: &FiSsnGeneratorConfig) -> Result<String, ValidationError> {
    fi_ssn_generator_with_rng(&mut rand::thread_rng(), config)
}

/// Random Finnish personal identity code born between `config.min_year` and `config.max_year`
pub fn fi_ssn_generator_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    config: &FiSsnGeneratorConfig,
) -> Result<String, ValidationError> {
    let (min_year, max_year) = (config.min_year, config.max_year);
    if min_year < MIN_FI_SSN_YEAR || max_year > MAX_FI_SSN_YEAR {
        return Err(ValidationError::unsupported(format!(
            "birth years must be within {}..={}",
            MIN_FI_SSN_YEAR, MAX_FI_SSN_YEAR
        )));
    }
    if min_year > max_year {
        return Err(ValidationError::unsupported(format!(
            "min_year {} is after max_year {}",
            min_year, max_year
        )));
    }

    let day = rng.gen_range(1..=28);
    let month = rng.gen_range(1..=12);
    let year = rng.gen_range(min_year..=max_year);
    let individual_number = rng.gen_range(100..=999);
    let separator = if year < 1900 {
        '+'
    } else if year < 2000 {
        '-'
    } else {
        'A'
    };

    let date_part = format!("{:02}{:02}{:02}", day, month, year % 100);
    let individual_number = individual_number.to_string();
    let control = hetu_control_character(&date_part, &individual_number)
        .ok_or_else(|| ValidationError::unsupported("control character out of range"))?;
    record_generated(GeneratedKind::FiSsn);
    Ok(format!(
        "{}{}{}{}",
        date_part, separator, individual_number, control
    ))
}

pub fn fi_company_org_id_generator() -> String {
    fi_company_org_id_generator_with_rng(&mut rand::thread_rng())
}

/// Random Finnish business ID, `NNNNNNN-C`
pub fn fi_company_org_id_generator_with_rng<R: Rng + ?Sized>(rng: &mut R) -> String {
    loop {
        let candidate = rng.gen_range(11_111_111..=99_999_999u32).to_string();
        let body = &candidate[..7];
        match business_id_remainder(body) {
            // remainders 0 and 1 are skipped
            Some(remainder) if remainder >= 2 => {
                record_generated(GeneratedKind::FiCompanyOrgId);
                return format!("{}-{}", body, 11 - remainder);
            }
            _ => continue,
        }
    }
}
