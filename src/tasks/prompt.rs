use crate::models::DiscussionItem;

pub fn build_prompt(idea: &str, discussions: &[DiscussionItem]) -> String {
    let discussion_lines = discussions
        .iter()
        .map(|d| format!("[{}] {} ({})", d.source.label(), d.headline(), d.date))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
Analyze this SaaS idea using the discussions below.

IDEA: "{}"

DISCUSSIONS:
{}

Respond in JSON only:
{{
  "humanThinking": "2 raw pain quotes from users",
  "aiThinking": "1-sentence market gap",
  "urgencyScore": number (0-10, one decimal),
  "competitorGaps": ["Gap 1", "Gap 2"],
  "targetAudience": ["Audience 1", "Audience 2"]
}}
"#,
        idea, discussion_lines
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_each_discussion_on_its_own_line() {
        let discussions = vec![
            DiscussionItem::hacker_news("Ask HN: How do you validate ideas?", "3/5/2024"),
            DiscussionItem::reddit("I built it and nobody came", "11/14/2023"),
        ];
        let prompt = build_prompt("AI tool for validating startup ideas", &discussions);

        assert!(prompt.contains("IDEA: \"AI tool for validating startup ideas\""));
        assert!(prompt.contains(
            "DISCUSSIONS:\n[Hacker News] Ask HN: How do you validate ideas? (3/5/2024)\n[Reddit] I built it and nobody came (11/14/2023)\n"
        ));
    }

    #[test]
    fn asks_for_all_five_fields() {
        let prompt = build_prompt("Meal planner for shift workers", &[]);
        for field in [
            "\"humanThinking\"",
            "\"aiThinking\"",
            "\"urgencyScore\": number (0-10, one decimal)",
            "\"competitorGaps\": [\"Gap 1\", \"Gap 2\"]",
            "\"targetAudience\": [\"Audience 1\", \"Audience 2\"]",
        ] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }
}
