use crate::error::ErrorCode;
use crate::observability::labels::Labels;
use metrics::counter;

const CODE: &str = "code";
const TYPE: &str = "type";
const COUNTRY: &str = "country";
const FOUND: &str = "found";

pub const VALIDATION_FAILURES: &str = "validation.failures";
pub const GENERATED_IDENTIFIERS: &str = "generator.identifiers";
pub const BANK_INFO_LOOKUPS: &str = "bank_info.lookups";

/// Kinds of values the generators produce, used as the `type` label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedKind {
    Iban,
    FiSsn,
    FiCompanyOrgId,
}

impl GeneratedKind {
    fn as_label(&self) -> &'static str {
        match self {
            GeneratedKind::Iban => "iban",
            GeneratedKind::FiSsn => "fi_ssn",
            GeneratedKind::FiCompanyOrgId => "fi_company_org_id",
        }
    }
}

pub fn record_validation_failure(code: ErrorCode) {
    let code: &'static str = code.into();
    counter!(VALIDATION_FAILURES, Labels::new(&[(CODE, code)])).increment(1);
}

pub fn record_generated(kind: GeneratedKind) {
    counter!(GENERATED_IDENTIFIERS, Labels::new(&[(TYPE, kind.as_label())])).increment(1);
}

pub fn record_bank_lookup(country: &str, found: bool) {
    let labels = Labels::new(&[(COUNTRY, country.to_string())]).with(FOUND, found.to_string());
    counter!(BANK_INFO_LOOKUPS, labels).increment(1);
}

#[cfg(test)]
mod test {
    use crate::bank_info::iban_bank_info;
    use crate::generators::fi_company_org_id_generator;
    use crate::stats::*;
    use crate::validators::{fi_ssn_validator, iban_validator};
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    fn counter_key(name: &'static str, labels: &[(&'static str, &'static str)]) -> CompositeKey {
        let labels: Vec<Label> = labels.iter().map(|(k, v)| Label::new(*k, *v)).collect();
        CompositeKey::new(Counter, Key::from_parts(name, labels))
    }

    #[test]
    fn should_count_validation_failures_by_code() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            assert!(iban_validator("FI2112345600000785").is_ok());
            assert!(iban_validator("FI2112345600000786").is_err());
            assert!(iban_validator("").is_err());
            assert!(fi_ssn_validator("010101-0102").is_err());
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let metric_value = snapshot
            .get(&counter_key(VALIDATION_FAILURES, &[("code", "invalid_iban")]))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(2)));

        let metric_value = snapshot
            .get(&counter_key(VALIDATION_FAILURES, &[("code", "invalid_ssn")]))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
    }

    #[test]
    fn should_count_generated_identifiers() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            for _ in 0..3 {
                fi_company_org_id_generator();
            }
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let metric_value = snapshot
            .get(&counter_key(
                GENERATED_IDENTIFIERS,
                &[("type", "fi_company_org_id")],
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(3)));
    }

    #[test]
    fn should_count_bank_lookups() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            iban_bank_info("FI2112345600000785");
            iban_bank_info("BE68539007547034");
            // no table for Germany, nothing recorded
            iban_bank_info("DE44500105175407324931");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let metric_value = snapshot
            .get(&counter_key(
                BANK_INFO_LOOKUPS,
                &[("country", "FI"), ("found", "true")],
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let metric_value = snapshot
            .get(&counter_key(
                BANK_INFO_LOOKUPS,
                &[("country", "BE"), ("found", "false")],
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
        assert_eq!(snapshot.len(), 2);
    }
}
