//! Local fallback — deterministic rewrites used when no completion client is configured,
//! and to pad short completion output.

use std::sync::LazyLock;

use regex::Regex;

use crate::improve::style::Style;

/// Action verbs prefixed to each variant, picked by variant index.
const ACTION_VERBS: [&str; 6] = [
    "Led",
    "Optimized",
    "Engineered",
    "Delivered",
    "Spearheaded",
    "Automated",
];

/// Metric phrases appended for `Metrics-Focused`, picked by variant index.
const METRIC_PHRASES: [&str; 5] = [
    "in 6 months",
    "by 30%",
    "for 1.2M users",
    "cut costs 20%",
    "reduced p99 latency 35%",
];

const IMPACT_SUFFIX: &str = " to drive measurable outcomes";

/// Case-insensitive substring substitutions applied in order for `Technical`.
const TECHNICAL_SUBSTITUTIONS: [(&str, &str); 3] = [
    ("team", "cross-functional team"),
    ("feature", "microservice"),
    ("app", "distributed system"),
];

static TECHNICAL_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    TECHNICAL_SUBSTITUTIONS
        .iter()
        .map(|(from, to)| {
            let pattern = format!("(?i){}", regex::escape(from));
            (Regex::new(&pattern).expect("valid substitution pattern"), *to)
        })
        .collect()
});

static STOPWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(the|a|an|to|for|that|which)\b").expect("valid stopword pattern")
});

static REPEATED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"));

/// Produces three style-flavored variants of `bullet` without any I/O.
pub fn local_fallback(bullet: &str, style: Style) -> [String; 3] {
    let base = bullet
        .trim_end_matches(|c: char| c.is_whitespace() || c == '.')
        .trim();

    std::array::from_fn(|i| {
        let variant = format!("{} {base}", ACTION_VERBS[i % ACTION_VERBS.len()]);
        apply_style(variant, style, i)
    })
}

fn apply_style(variant: String, style: Style, index: usize) -> String {
    match style {
        Style::Technical => TECHNICAL_PATTERNS
            .iter()
            .fold(variant, |acc, (pattern, replacement)| {
                pattern.replace_all(&acc, *replacement).into_owned()
            }),
        Style::Concise => {
            let stripped = STOPWORDS.replace_all(&variant, "");
            REPEATED_WHITESPACE
                .replace_all(&stripped, " ")
                .trim()
                .to_string()
        }
        Style::Impactful => variant + IMPACT_SUFFIX,
        Style::MetricsFocused => format!(
            "{variant} \u{2014} {}",
            METRIC_PHRASES[index % METRIC_PHRASES.len()]
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULLETS: &[&str] = &[
        "Led a team project",
        "Built the new checkout feature for the mobile app.",
        "reduced costs",
        "x",
    ];

    #[test]
    fn test_every_style_yields_three_non_empty_variants() {
        for bullet in BULLETS {
            for style in Style::ALL {
                let out = local_fallback(bullet, style);
                assert_eq!(out.len(), 3);
                assert!(
                    out.iter().all(|v| !v.trim().is_empty()),
                    "{style} produced an empty variant for {bullet:?}"
                );
            }
        }
    }

    #[test]
    fn test_variants_use_first_three_verbs_in_order() {
        let out = local_fallback("shipped onboarding", Style::Impactful);
        assert!(out[0].starts_with("Led "));
        assert!(out[1].starts_with("Optimized "));
        assert!(out[2].starts_with("Engineered "));
    }

    #[test]
    fn test_trailing_periods_and_whitespace_are_stripped() {
        let out = local_fallback("  shipped onboarding...  ", Style::Impactful);
        assert_eq!(out[0], "Led shipped onboarding to drive measurable outcomes");
    }

    #[test]
    fn test_impactful_appends_outcome_suffix() {
        let out = local_fallback("Shipped billing", Style::Impactful);
        assert!(out.iter().all(|v| v.ends_with(" to drive measurable outcomes")));
    }

    #[test]
    fn test_technical_substitutions() {
        let out = local_fallback("Led a team project", Style::Technical);
        assert_eq!(out[0], "Led Led a cross-functional team project");
        assert!(out.iter().all(|v| v.contains("cross-functional team")));

        let out = local_fallback("Built a Feature for the App", Style::Technical);
        assert_eq!(out[1], "Optimized Built a microservice for the distributed system");
    }

    #[test]
    fn test_concise_strips_stopwords_and_collapses_spaces() {
        let out = local_fallback("Moved the billing to a new provider for the team", Style::Concise);
        assert_eq!(out[0], "Led Moved billing new provider team");
        assert!(out.iter().all(|v| !v.contains("  ")));
    }

    #[test]
    fn test_concise_keeps_stopwords_inside_words() {
        let out = local_fallback("Theorized an anomaly detector", Style::Concise);
        assert_eq!(out[2], "Engineered Theorized anomaly detector");
    }

    #[test]
    fn test_metrics_focused_appends_metric_by_index() {
        let out = local_fallback("Grew signups.", Style::MetricsFocused);
        assert_eq!(out[0], "Led Grew signups \u{2014} in 6 months");
        assert_eq!(out[1], "Optimized Grew signups \u{2014} by 30%");
        assert_eq!(out[2], "Engineered Grew signups \u{2014} for 1.2M users");
    }

    #[test]
    fn test_fallback_is_deterministic() {
        for style in Style::ALL {
            assert_eq!(
                local_fallback("Led a team project", style),
                local_fallback("Led a team project", style)
            );
        }
    }
}
