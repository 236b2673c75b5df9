use crate::models::Analysis;
use serde_json::{Map, Value};
use tracing::warn;

/// Span from the first `{` to the last `}` of the reply, if any.
pub fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

/// Turns the model's reply into an analysis. Anything unusable falls back to
/// [`Analysis::fallback`], field by field once an object has been found.
pub fn parse_analysis(content: Option<&str>) -> Analysis {
    let Some(content) = content else {
        warn!("Completion reply had no message content, using fallback analysis");
        return Analysis::fallback();
    };

    let Some(span) = extract_json_object(content) else {
        warn!("No JSON object in completion reply, using fallback analysis");
        return Analysis::fallback();
    };

    match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(fields)) => analysis_from_fields(&fields),
        Ok(_) | Err(_) => {
            warn!("Completion reply JSON did not parse, using fallback analysis");
            Analysis::fallback()
        }
    }
}

fn analysis_from_fields(fields: &Map<String, Value>) -> Analysis {
    let fallback = Analysis::fallback();
    Analysis {
        human_thinking: text_field(fields, "humanThinking").unwrap_or(fallback.human_thinking),
        ai_thinking: text_field(fields, "aiThinking").unwrap_or(fallback.ai_thinking),
        urgency_score: score_field(fields, "urgencyScore").unwrap_or(fallback.urgency_score),
        competitor_gaps: list_field(fields, "competitorGaps").unwrap_or(fallback.competitor_gaps),
        target_audience: list_field(fields, "targetAudience").unwrap_or(fallback.target_audience),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)?
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

fn score_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    fields.get(key)?.as_f64()
}

fn list_field(fields: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = fields
        .get(key)?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_embedded_object_unchanged() {
        let content = r#"Here is the result: {"humanThinking":"x","aiThinking":"y","urgencyScore":6.5,"competitorGaps":["a","b"],"targetAudience":["c","d"]} done"#;
        let analysis = parse_analysis(Some(content));

        assert_eq!(
            analysis,
            Analysis {
                human_thinking: "x".to_string(),
                ai_thinking: "y".to_string(),
                urgency_score: 6.5,
                competitor_gaps: vec!["a".to_string(), "b".to_string()],
                target_audience: vec!["c".to_string(), "d".to_string()],
            }
        );
    }

    #[test]
    fn refusal_uses_fallback() {
        assert_eq!(parse_analysis(Some("I cannot comply.")), Analysis::fallback());
        assert_eq!(parse_analysis(None), Analysis::fallback());
    }

    #[test]
    fn malformed_object_uses_fallback() {
        assert_eq!(
            parse_analysis(Some(r#"{"humanThinking": "x", oops}"#)),
            Analysis::fallback()
        );
        assert_eq!(parse_analysis(Some("} backwards {")), Analysis::fallback());
    }

    #[test]
    fn missing_fields_default_individually() {
        let analysis = parse_analysis(Some(
            r#"```json
{"competitorGaps": ["Nobody scrapes forums"], "urgencyScore": "12", "aiThinking": 3}
```"#,
        ));
        let fallback = Analysis::fallback();

        assert_eq!(analysis.competitor_gaps, vec!["Nobody scrapes forums".to_string()]);
        assert_eq!(analysis.urgency_score, fallback.urgency_score);
        assert_eq!(analysis.human_thinking, fallback.human_thinking);
        assert_eq!(analysis.ai_thinking, fallback.ai_thinking);
        assert_eq!(analysis.target_audience, fallback.target_audience);
    }

    #[test]
    fn scores_and_empty_lists_pass_through_untouched() {
        let analysis = parse_analysis(Some(
            r#"{"urgencyScore": 6.66, "competitorGaps": [], "targetAudience": []}"#,
        ));
        assert_eq!(analysis.urgency_score, 6.66);
        assert!(analysis.competitor_gaps.is_empty());
        assert!(analysis.target_audience.is_empty());

        let analysis = parse_analysis(Some(r#"{"urgencyScore": 12}"#));
        assert_eq!(analysis.urgency_score, 12.0);
    }

    #[test]
    fn greedy_span_covers_nested_objects() {
        assert_eq!(
            extract_json_object(r#"a {"x": {"y": 1}} b"#),
            Some(r#"{"x": {"y": 1}}"#)
        );
        assert_eq!(extract_json_object("no braces"), None);
    }
}
