use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// Machine-readable reason attached to every [ValidationError::InvalidFormat].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
    InvalidIban,
    InvalidBic,
    InvalidPhone,
    InvalidEmail,
    InvalidPassport,
    InvalidCountryCode,
    InvalidSsn,
    InvalidCompanyOrgId,
    InvalidPaymentReference,
}

impl ErrorCode {
    /// Human-readable prefix used in error messages
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidIban => "Invalid IBAN account number",
            ErrorCode::InvalidBic => "Invalid bank BIC/SWIFT code",
            ErrorCode::InvalidPhone => "Invalid phone number",
            ErrorCode::InvalidEmail => "Invalid email",
            ErrorCode::InvalidPassport => "Invalid passport number",
            ErrorCode::InvalidCountryCode => "Invalid country code",
            ErrorCode::InvalidSsn => "Invalid personal identification number",
            ErrorCode::InvalidCompanyOrgId => "Invalid company organization ID",
            ErrorCode::InvalidPaymentReference => "Invalid payment reference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value failed a structural or checksum check. `value` is the input as the caller gave it.
    #[error("{} ({})", .code.message(), display_value(.value))]
    InvalidFormat { code: ErrorCode, value: String },

    /// A generator was asked for something it cannot produce
    #[error("Unsupported configuration: {reason}")]
    UnsupportedConfiguration { reason: String },
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "Missing value"
    } else {
        value
    }
}

impl ValidationError {
    pub(crate) fn invalid(code: ErrorCode, value: &str) -> Self {
        crate::stats::record_validation_failure(code);
        ValidationError::InvalidFormat {
            code,
            value: value.to_owned(),
        }
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        ValidationError::UnsupportedConfiguration {
            reason: reason.into(),
        }
    }

    /// The error code, if this is a format error
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ValidationError::InvalidFormat { code, .. } => Some(*code),
            ValidationError::UnsupportedConfiguration { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::{ErrorCode, ValidationError};
    use std::str::FromStr;

    #[test]
    fn error_codes_are_snake_case() {
        assert_eq!(ErrorCode::InvalidIban.as_ref(), "invalid_iban");
        assert_eq!(
            ErrorCode::InvalidCompanyOrgId.to_string(),
            "invalid_company_org_id"
        );
        assert_eq!(
            ErrorCode::from_str("invalid_payment_reference"),
            Ok(ErrorCode::InvalidPaymentReference)
        );
    }

    #[test]
    fn message_includes_original_value() {
        let err = ValidationError::invalid(ErrorCode::InvalidIban, "FI21 1234");
        assert_eq!(err.to_string(), "Invalid IBAN account number (FI21 1234)");
        assert_eq!(err.code(), Some(ErrorCode::InvalidIban));
    }

    #[test]
    fn empty_value_is_reported_as_missing() {
        let err = ValidationError::invalid(ErrorCode::InvalidBic, "");
        assert_eq!(err.to_string(), "Invalid bank BIC/SWIFT code (Missing value)");
    }

    #[test]
    fn unsupported_configuration_has_no_code() {
        let err = ValidationError::unsupported("IBAN length over 26");
        assert_eq!(err.code(), None);
        assert_eq!(
            err.to_string(),
            "Unsupported configuration: IBAN length over 26"
        );
    }
}
