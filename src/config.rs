use crate::checksum::Validator;
use crate::error::ValidationError;
use crate::filters::*;
use crate::validators::*;
use serde::{Deserialize, Serialize};

/// Names a field validator, e.g. `{"type": "CountryIban", "country": "FI"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum IdentifierKind {
    Phone,
    Email,
    Passport,
    CountryCode,
    Bic,
    Iban,
    CountryIban { country: String },
    FiSsn,
    SeSsn,
    FiCompanyOrgId,
    CountryCompanyOrgId { country: String },
    FiPaymentReference,
    IsoPaymentReference,
}

impl IdentifierKind {
    /// Normalizes `v` the way the matching validator expects it
    pub fn filter(&self, v: &str) -> String {
        match self {
            IdentifierKind::Phone => phone_filter(v),
            IdentifierKind::Email => email_filter(v),
            IdentifierKind::Passport => passport_filter(v),
            IdentifierKind::CountryCode => country_code_filter(v),
            IdentifierKind::Bic => bic_filter(v),
            IdentifierKind::Iban | IdentifierKind::CountryIban { .. } => iban_filter(v),
            IdentifierKind::FiSsn => fi_ssn_filter(v),
            IdentifierKind::SeSsn => se_ssn_filter(v),
            IdentifierKind::FiCompanyOrgId => fi_company_org_id_filter(v),
            IdentifierKind::CountryCompanyOrgId { country } => {
                filter_country_company_org_id(country, v)
            }
            IdentifierKind::FiPaymentReference => digit_filter(v),
            IdentifierKind::IsoPaymentReference => iban_filter(v),
        }
    }

    pub fn validate(&self, v: &str) -> Result<(), ValidationError> {
        match self {
            IdentifierKind::Phone => phone_validator(v),
            IdentifierKind::Email => email_validator(v),
            IdentifierKind::Passport => passport_validator(v),
            IdentifierKind::CountryCode => country_code_validator(v),
            IdentifierKind::Bic => bic_validator(v),
            IdentifierKind::Iban => iban_validator(v),
            IdentifierKind::CountryIban { country } => validate_country_iban(v, country),
            IdentifierKind::FiSsn => fi_ssn_validator(v),
            IdentifierKind::SeSsn => se_ssn_validator(v),
            IdentifierKind::FiCompanyOrgId => fi_company_org_id_validator(v),
            IdentifierKind::CountryCompanyOrgId { country } => {
                validate_country_company_org_id(country, v)
            }
            IdentifierKind::FiPaymentReference => fi_payment_reference_validator(v),
            IdentifierKind::IsoPaymentReference => iso_payment_reference_validator(v),
        }
    }
}

impl Validator for IdentifierKind {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }
}

const DEFAULT_MIN_YEAR: i32 = 1920;
const DEFAULT_MAX_YEAR: i32 = 1999;

fn default_min_year() -> i32 {
    DEFAULT_MIN_YEAR
}

fn default_max_year() -> i32 {
    DEFAULT_MAX_YEAR
}

/// Birth year range (inclusive) of generated Finnish personal identity codes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FiSsnGeneratorConfig {
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

impl Default for FiSsnGeneratorConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl FiSsnGeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_year(&self, min_year: i32) -> Self {
        self.mutate_clone(|x| x.min_year = min_year)
    }

    pub fn max_year(&self, max_year: i32) -> Self {
        self.mutate_clone(|x| x.max_year = max_year)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
