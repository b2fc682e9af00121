// Prompt constants for bullet rewriting, plus the builder that assembles them.
// Style blocks and example lines are keyed by `Style`, so every style always has both.

use crate::improve::style::Style;

/// System-role message sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are an expert resume editor.";

/// Instructions shared by every style.
pub const GENERAL_INSTRUCTION: &str = "You are an expert resume editor.
Rewrite the resume bullet into 3 high\u{2011}quality variations that feel compelling and clear.

Language: write in the SAME language as the input (if mixed/unclear, default to English).
Tense & POV: past tense, no first\u{2011}person pronouns.
Tone: professional, confident, no hype.
Forbidden: \u{201c}responsible for\u{201d}, buzzwords, filler, emojis, quotes.
Formatting: each variation MUST be a single line. Output EXACTLY 3 lines. No headings/prefixes.

Core structure (adapt as needed):
Action verb + what + how + tools/tech + scope + outcome/impact + metric(s) + timeframe (if relevant)";

/// Closing instruction restating the output contract.
pub const OUTPUT_INSTRUCTION: &str =
    "Return exactly 3 variations as 3 separate lines (no extra text).";

/// Style-specific guidance block.
pub fn style_block(style: Style) -> &'static str {
    match style {
        Style::Impactful => "Style: Impactful
Emphasize outcome and scope. Prefer strong verbs (Led, Drove, Accelerated, Delivered, Orchestrated).
Use at least one concrete metric or scope indicator (users, revenue, latency, volume).",
        Style::Technical => "Style: Technical
Highlight architecture, stack, scale, performance. Include specific technologies (e.g., Node.js, React, AWS, Postgres), scale (RPS, data size), and perf numbers (p95, CPU, memory).
Prefer precise terms over generic words (service, microservice, pipeline, index, cache, shard, CDN).
Avoid marketing phrasing.",
        Style::MetricsFocused => "Style: Metrics\u{2011}Focused
Include at least TWO numeric metrics (percent, counts, timeframes) and a clear before/after or baseline (e.g., 180ms \u{2192} 95ms; +32%; 1.2M users; 4 regions; 3 months).",
        Style::Concise => "Style: Concise
Keep each variation ~12\u{2013}18 words. Prioritize the most meaningful action + impact. Remove articles and filler. Still include ONE concrete metric.",
    }
}

/// Three example output lines that ground the model's format and tone.
pub fn style_examples(style: Style) -> [&'static str; 3] {
    match style {
        Style::Impactful => [
            "Orchestrated launch of analytics dashboard used by 1.2M users, speeding insights and trimming reporting time 45%.",
            "Led cross\u{2011}functional rollout of subscription flow, boosting conversions 23% and reducing support tickets 18%.",
            "Delivered caching strategy that cut page load times 38% and stabilized uptime to 99.95%.",
        ],
        Style::Technical => [
            "Engineered Node.js + Postgres microservice with Redis cache, handling 3k RPS; reduced p95 latency 120ms \u{2192} 60ms.",
            "Designed S3 + CloudFront asset pipeline with checksum invalidation, slashing cold starts 55% and egress costs 28%.",
            "Implemented columnar analytics store (DuckDB/Parquet) enabling 10\u{d7} faster cohort queries over 200M rows.",
        ],
        Style::MetricsFocused => [
            "Increased trial\u{2011}to\u{2011}paid by 27% and reduced churn by 6 pts within 90 days via experiment\u{2011}driven onboarding.",
            "Cut p99 API latency 42% and error rate 65% by refactoring hot paths and introducing circuit breakers.",
            "Grew weekly active users 18% and referral sign\u{2011}ups 2.3\u{d7} through shareable templates and in\u{2011}app prompts.",
        ],
        Style::Concise => [
            "Optimized checkout; +19% conversion, \u{2212}35% errors in 6 weeks.",
            "Shipped autoscaling; p95 \u{2212}40% at 3k RPS on AWS.",
            "Launched email nudge; +22% reactivation in 30 days.",
        ],
    }
}

/// Builds the full user-role prompt for one bullet. Pure and deterministic.
pub fn build_prompt(bullet: &str, style: Style) -> String {
    let examples = style_examples(style)
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{GENERAL_INSTRUCTION}\n\n{block}\n\nExamples ({label}):\n{examples}\n\nBullet:\n{bullet}\n\n{OUTPUT_INSTRUCTION}",
        block = style_block(style),
        label = style.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULLET: &str = "Built a reporting dashboard for the sales team";

    #[test]
    fn test_prompt_contains_bullet_and_three_line_contract_for_every_style() {
        for style in Style::ALL {
            let prompt = build_prompt(BULLET, style);
            assert!(prompt.contains(BULLET), "{style}: bullet missing");
            assert!(prompt.contains("Output EXACTLY 3 lines"), "{style}");
            assert!(prompt.ends_with(OUTPUT_INSTRUCTION), "{style}");
        }
    }

    #[test]
    fn test_prompt_embeds_style_block_and_examples() {
        let prompt = build_prompt(BULLET, Style::Technical);
        assert!(prompt.contains("Style: Technical"));
        assert!(prompt.contains("Examples (Technical):"));
        for example in style_examples(Style::Technical) {
            assert!(prompt.contains(&format!("- {example}")));
        }
        assert!(!prompt.contains("Style: Concise"));
    }

    #[test]
    fn test_metrics_focused_uses_wire_label_in_examples_header() {
        let prompt = build_prompt(BULLET, Style::MetricsFocused);
        assert!(prompt.contains("Examples (Metrics-Focused):"));
    }

    #[test]
    fn test_sections_appear_in_order() {
        let prompt = build_prompt(BULLET, Style::Concise);
        let general = prompt.find("Core structure").unwrap();
        let block = prompt.find("Style: Concise").unwrap();
        let examples = prompt.find("Examples (Concise):").unwrap();
        let bullet = prompt.find("Bullet:\n").unwrap();
        assert!(general < block && block < examples && examples < bullet);
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        assert_eq!(
            build_prompt(BULLET, Style::Impactful),
            build_prompt(BULLET, Style::Impactful)
        );
    }
}
