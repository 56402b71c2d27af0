// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod bank_info;
mod checksum;
mod config;
mod error;
mod filters;
mod generators;
mod iban_registry;
mod observability;
mod personal_id;
mod stats;
mod validators;

// This is the public API of the jutil library
pub use bank_info::{
    be_iban_bank_info, dk_clearing_code_bank_name, dk_iban_bank_info, fi_iban_bank_info,
    iban_bank_info, iban_bic, se_clearing_code_bank_info, se_iban_bank_info,
    supported_countries, BankInfo, BankInfoLookup, NO_BANK_INFO,
};
pub use checksum::Validator;
pub use config::{FiSsnGeneratorConfig, IdentifierKind};
pub use error::{ErrorCode, ValidationError};
pub use filters::{
    alnum_filter, ascii_filter, bic_filter, country_code_filter, digit_filter, email_filter,
    fi_company_org_id_filter, fi_ssn_filter, filter_country_company_org_id, iban_filter,
    iban_filter_readable, is_int, passport_filter, phone_filter, se_ssn_filter,
    variable_name_filter,
};
pub use generators::{
    fi_company_org_id_generator, fi_company_org_id_generator_with_rng, fi_ssn_generator,
    fi_ssn_generator_with_rng, iban_generator, iban_generator_with_rng,
};
pub use iban_registry::{countries_with_max_length, iban_length, MAX_CHECKSUM_IBAN_LENGTH};
pub use observability::labels::Labels;
pub use personal_id::{calculate_age, fi_ssn_age, fi_ssn_birthday};
pub use stats::{BANK_INFO_LOOKUPS, GENERATED_IDENTIFIERS, VALIDATION_FAILURES};
pub use validators::{
    be_iban_validator, bic_sanitizer, bic_validator, country_code_sanitizer,
    country_code_validator, dk_iban_validator, ee_iban_validator, email_sanitizer,
    email_validator, fi_company_org_id_validator, fi_iban_validator, iban_validator,
    fi_payment_reference_number, fi_payment_reference_validator, fi_ssn_validator,
    is_email, is_iban, iso_payment_reference_validator, passport_sanitizer, passport_validator,
    phone_sanitizer, phone_validator, se_iban_validator, se_ssn_validator,
    validate_country_company_org_id, validate_country_iban,
};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::checksum::{
    business_id_remainder, fi_reference_check_digit, hetu_control_character,
    CreditorReferenceChecksum, FinnishBusinessIdChecksum, FinnishHetuChecksum,
    FinnishReferenceChecksum, IbanChecksum, SwedenPINChecksum,
};
