//! Post-processing over generated advisory text: cited-source extraction,
//! the fixed roadmap timeline summary, and scholarship record extraction.

use std::collections::HashSet;

use chrono::{DateTime, Months, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A URL run ends at the next double quote or whitespace.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^"\s]+"#).expect("valid URL regex"));

/// Extracts `http(s)` URLs cited in generated text, deduplicated while
/// preserving first-seen order.
pub fn extract_sources(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    URL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmap timeline
// ────────────────────────────────────────────────────────────────────────────

/// One phase of the structured roadmap summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub phase: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

const TIMELINE_PHASES: [&str; 3] = [
    "Exam Preparation",
    "Extracurricular Development",
    "Application Phase",
];

/// Coarse structured summary of a roadmap: three fixed six-month phases
/// starting now. No dates are parsed out of the generated text; the text
/// itself is the authoritative roadmap.
pub fn default_timeline() -> Vec<TimelinePhase> {
    let start = Utc::now();
    let end = start + Months::new(6);

    TIMELINE_PHASES
        .iter()
        .map(|phase| TimelinePhase {
            phase: (*phase).to_string(),
            start_date: start,
            end_date: end,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Scholarship extraction
// ────────────────────────────────────────────────────────────────────────────

/// A single structured scholarship record extracted from generated text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scholarship {
    pub name: String,
    pub amount: String,
    pub deadline: String,
    pub eligibility: String,
    pub link: String,
}

/// Pluggable scholarship parser. Implement this to swap extraction backends
/// without touching the orchestration in `assistant`.
///
/// Carried in `AppState` as `Arc<dyn ScholarshipExtractor>`.
pub trait ScholarshipExtractor: Send + Sync {
    /// Best-effort extraction. An unparseable response yields an empty list;
    /// the prose recommendations are still returned to the caller verbatim.
    fn extract(&self, text: &str) -> Vec<Scholarship>;
}

/// Default extractor. The scholarship prompt instructs the model to append a
/// fenced ```json array after the prose; this parses that block.
pub struct JsonBlockExtractor;

impl ScholarshipExtractor for JsonBlockExtractor {
    fn extract(&self, text: &str) -> Vec<Scholarship> {
        find_json_block(text)
            .and_then(|block| serde_json::from_str(block).ok())
            .unwrap_or_default()
    }
}

/// Returns the contents of the first ```json fenced block, if any.
fn find_json_block(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_sources_dedupes_preserving_first_seen_order() {
        let text = "See https://www.chevening.org and https://collegeboard.org. \
                    Apply via https://www.chevening.org before the deadline.";
        let sources = extract_sources(text);
        assert_eq!(
            sources,
            vec!["https://www.chevening.org", "https://collegeboard.org."]
        );
    }

    #[test]
    fn test_extract_sources_stops_at_quote_and_whitespace() {
        let text = r#"Linked as "https://example.org/aid" in the portal, or http://example.com/faq?tab=1 inline."#;
        let sources = extract_sources(text);
        assert_eq!(
            sources,
            vec!["https://example.org/aid", "http://example.com/faq?tab=1"]
        );
    }

    #[test]
    fn test_extract_sources_empty_when_no_urls() {
        assert!(extract_sources("No links cited here.").is_empty());
    }

    #[test]
    fn test_default_timeline_has_three_fixed_phases_in_order() {
        let timeline = default_timeline();
        let phases: Vec<&str> = timeline.iter().map(|t| t.phase.as_str()).collect();
        assert_eq!(
            phases,
            vec![
                "Exam Preparation",
                "Extracurricular Development",
                "Application Phase"
            ]
        );
    }

    #[test]
    fn test_default_timeline_phases_span_six_months() {
        for phase in default_timeline() {
            assert_eq!(phase.end_date, phase.start_date + Months::new(6));
        }
    }

    #[test]
    fn test_timeline_phase_uses_camel_case_on_the_wire() {
        let timeline = default_timeline();
        let value = serde_json::to_value(&timeline[0]).unwrap();
        assert!(value.get("startDate").is_some());
        assert!(value.get("endDate").is_some());
        assert!(value.get("start_date").is_none());
    }

    #[test]
    fn test_json_block_extractor_parses_fenced_array() {
        let text = r#"Here are my recommendations...

```json
[
  {
    "name": "Chevening Scholarship",
    "amount": "Full tuition + stipend",
    "deadline": "November 2026",
    "eligibility": "International students",
    "link": "https://www.chevening.org"
  }
]
```
Good luck!"#;

        let scholarships = JsonBlockExtractor.extract(text);
        assert_eq!(scholarships.len(), 1);
        assert_eq!(scholarships[0].name, "Chevening Scholarship");
        assert_eq!(scholarships[0].link, "https://www.chevening.org");
    }

    #[test]
    fn test_json_block_extractor_returns_empty_without_block() {
        let scholarships = JsonBlockExtractor.extract("Just prose, no structured data.");
        assert!(scholarships.is_empty());
    }

    #[test]
    fn test_json_block_extractor_returns_empty_on_malformed_json() {
        let text = "```json\n[{\"name\": \"Broken\"\n```";
        assert!(JsonBlockExtractor.extract(text).is_empty());
    }
}
