//! Rewriting styles accepted by `/api/improve`.

/// One of the four fixed rewriting modes. Drives the prompt block, the example lines,
/// and the fallback post-transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Impactful,
    Technical,
    MetricsFocused,
    Concise,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Impactful,
        Style::Technical,
        Style::MetricsFocused,
        Style::Concise,
    ];

    /// Wire label, exactly as clients send it.
    pub fn label(self) -> &'static str {
        match self {
            Style::Impactful => "Impactful",
            Style::Technical => "Technical",
            Style::MetricsFocused => "Metrics-Focused",
            Style::Concise => "Concise",
        }
    }

    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Resolves optional client input; anything missing or unknown becomes `Impactful`.
    pub fn resolve(input: Option<&str>) -> Self {
        input.and_then(Self::from_label).unwrap_or_default()
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_resolve() {
        assert_eq!(Style::resolve(Some("Technical")), Style::Technical);
        assert_eq!(Style::resolve(Some("Metrics-Focused")), Style::MetricsFocused);
        assert_eq!(Style::resolve(Some("Concise")), Style::Concise);
        assert_eq!(Style::resolve(Some("Impactful")), Style::Impactful);
    }

    #[test]
    fn test_missing_or_unknown_defaults_to_impactful() {
        assert_eq!(Style::resolve(None), Style::Impactful);
        assert_eq!(Style::resolve(Some("Poetic")), Style::Impactful);
        assert_eq!(Style::resolve(Some("")), Style::Impactful);
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        assert_eq!(Style::from_label("technical"), None);
        assert_eq!(Style::from_label("Metrics Focused"), None);
    }
}
