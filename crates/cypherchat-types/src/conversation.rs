use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Speaker of a conversation turn.
///
/// Any role other than `"user"` (including `null`) is treated as the
/// assistant, and a missing role defaults to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Role {
    #[default]
    User,
    Assistant,
}

impl From<Option<String>> for Role {
    fn from(role: Option<String>) -> Self {
        match role.as_deref() {
            Some("user") => Role::User,
            _ => Role::Assistant,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One prior turn of the conversation, supplied by the caller on every request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Turn {
    #[serde(default)]
    pub role: Role,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cypher_query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_cypher(mut self, cypher_query: impl Into<String>) -> Self {
        self.cypher_query = Some(cypher_query.into());
        self
    }

    pub fn with_results(mut self, results: Value) -> Self {
        self.results = Some(results);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_role_defaults_to_user() {
        let turn: Turn = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text, "hi");
    }

    #[test]
    fn test_unknown_role_is_assistant() {
        let turn: Turn = serde_json::from_str(r#"{"role":"bot","text":"hi"}"#).unwrap();
        assert_eq!(turn.role, Role::Assistant);
    }

    #[test]
    fn test_null_role_is_assistant() {
        let turn: Turn = serde_json::from_str(r#"{"role":null,"text":"hi"}"#).unwrap();
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.text, "hi");
    }

    #[test]
    fn test_null_text_is_empty() {
        let turn: Turn = serde_json::from_str(r#"{"role":"user","text":null}"#).unwrap();
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text, "");
    }

    #[test]
    fn test_missing_text_defaults_to_empty() {
        let turn: Turn = serde_json::from_str(r#"{"role":"assistant"}"#).unwrap();
        assert_eq!(turn.text, "");
        assert!(turn.cypher_query.is_none());
        assert!(turn.results.is_none());
    }

    #[test]
    fn test_assistant_turn_serialization() {
        let turn = Turn::assistant("Two movies")
            .with_cypher("MATCH (m:Movie) RETURN m.title")
            .with_results(json!([{"m.title": "Heat"}]));

        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["cypher_query"], "MATCH (m:Movie) RETURN m.title");
        assert_eq!(value["results"][0]["m.title"], "Heat");
    }

    #[test]
    fn test_user_turn_skips_absent_fields() {
        let json = serde_json::to_string(&Turn::user("Hello")).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"Hello"}"#);
    }
}
