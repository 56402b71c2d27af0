use metrics::{IntoLabels, Label, SharedString};

/// Key-value [Label]s attached to the crate's counters.
#[derive(Clone, Debug, Default)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Labels with one more key-value pair; the original is left untouched
    pub fn with(&self, key: impl Into<SharedString>, value: impl Into<SharedString>) -> Labels {
        let mut labels = self.0.clone();
        labels.push(Label::new(key, value));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::Labels;
    use metrics::{IntoLabels, Label};

    #[test]
    fn test_with_label() {
        let labels = Labels::new(&[("country", "FI")]);

        let found = labels.with("found", "true").into_labels();
        assert!(found.contains(&Label::new("country", "FI")));
        assert!(found.contains(&Label::new("found", "true")));

        let missing = labels.with("found", "false").into_labels();
        assert!(missing.contains(&Label::new("country", "FI")));
        assert!(!missing.contains(&Label::new("found", "true")));
        assert!(missing.contains(&Label::new("found", "false")));

        assert_eq!(labels.into_labels().len(), 1);
    }

    #[test]
    fn default_has_no_labels() {
        assert!(Labels::default().into_labels().is_empty());
        assert_eq!(
            Labels::default().with("code", "invalid_iban").into_labels(),
            vec![Label::new("code", "invalid_iban")]
        );
    }
}
