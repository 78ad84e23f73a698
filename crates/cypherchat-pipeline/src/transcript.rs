use cypherchat_types::{Role, Turn};
use serde_json::Value;

/// Render prior turns as the plain-text transcript embedded in model prompts.
///
/// One line per fact, in history order:
/// `User: ..` for user turns, `Assistant: ..` for assistant turns, followed by
/// `Cypher: ..` and `Results: ..` when the turn carries them.
pub fn format_transcript(history: &[Turn]) -> String {
    let mut lines = Vec::with_capacity(history.len());

    for turn in history {
        match turn.role {
            Role::User => lines.push(format!("User: {}", turn.text)),
            Role::Assistant => {
                lines.push(format!("Assistant: {}", turn.text));
                if let Some(cypher) = turn.cypher_query.as_deref().filter(|q| !q.is_empty()) {
                    lines.push(format!("Cypher: {}", cypher));
                }
                if let Some(results) = turn.results.as_ref().filter(|r| is_present(r)) {
                    lines.push(format!("Results: {}", results));
                }
            }
        }
    }

    lines.join("\n")
}

/// Empty and falsy values count as absent
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_history_is_empty_transcript() {
        assert_eq!(format_transcript(&[]), "");
    }

    #[test]
    fn test_turns_keep_order() {
        let history = vec![
            Turn::user("Who directed The Matrix?"),
            Turn::assistant("Lana and Lilly Wachowski.")
                .with_cypher("MATCH (p:Person)-[:DIRECTED]->(m:Movie {title: 'The Matrix'}) RETURN p.name")
                .with_results(json!([{"p.name": "Lana Wachowski"}, {"p.name": "Lilly Wachowski"}])),
            Turn::user("And who produced it?"),
        ];

        let expected = "User: Who directed The Matrix?\n\
            Assistant: Lana and Lilly Wachowski.\n\
            Cypher: MATCH (p:Person)-[:DIRECTED]->(m:Movie {title: 'The Matrix'}) RETURN p.name\n\
            Results: [{\"p.name\":\"Lana Wachowski\"},{\"p.name\":\"Lilly Wachowski\"}]\n\
            User: And who produced it?";
        assert_eq!(format_transcript(&history), expected);
    }

    #[test]
    fn test_absent_fields_omit_lines() {
        let history = vec![Turn::assistant("No idea.")];
        assert_eq!(format_transcript(&history), "Assistant: No idea.");
    }

    #[test]
    fn test_empty_fields_omit_lines() {
        let history = vec![Turn::assistant("Nothing found.")
            .with_cypher("")
            .with_results(json!([]))];
        assert_eq!(format_transcript(&history), "Assistant: Nothing found.");
    }

    #[test]
    fn test_user_turn_ignores_cypher_and_results() {
        let history = vec![Turn::user("Hi")
            .with_cypher("MATCH (n) RETURN n")
            .with_results(json!([1]))];
        assert_eq!(format_transcript(&history), "User: Hi");
    }

    #[test]
    fn test_falsy_results() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!({})));
        assert!(!is_present(&json!("")));
        assert!(is_present(&json!(3)));
        assert!(is_present(&json!({"count": 0})));
    }
}
