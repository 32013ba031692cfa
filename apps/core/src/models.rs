use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// A single member message as served by the upstream messages API.
///
/// Every field is optional. Upstream has renamed its text and date fields
/// over time, so the accessors below pick the first populated candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
}

impl MessageRecord {
    /// Builds a record with only a `message` body.
    pub fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// Sets the `date` field.
    pub fn dated(mut self, date: &str) -> Self {
        self.date = Some(Value::String(date.to_string()));
        self
    }

    /// Message body: `message`, then `text`, first non-empty wins.
    pub fn body(&self) -> &str {
        [&self.message, &self.text]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }

    /// Raw date value: `date`, then `timestamp`, then `created_at`.
    ///
    /// JSON nulls count as absent. Strings are returned verbatim, other
    /// values in their JSON text form.
    pub fn date_value(&self) -> Option<String> {
        [&self.date, &self.timestamp, &self.created_at]
            .into_iter()
            .flatten()
            .find(|v| !v.is_null())
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }
}

/// Upstream payloads come either as a bare list or wrapped in an envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessagesPayload {
    List(Vec<MessageRecord>),
    Envelope {
        #[serde(alias = "messages", alias = "data")]
        items: Vec<MessageRecord>,
    },
}

impl MessagesPayload {
    pub fn into_records(self) -> Vec<MessageRecord> {
        match self {
            MessagesPayload::List(records) => records,
            MessagesPayload::Envelope { items } => items,
        }
    }
}

/// Body of `POST /ask` and query of `GET /ask`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AskRequest {
    /// The free-text question. Missing deserializes to empty and fails validation.
    #[serde(default)]
    #[validate(length(min = 3, message = "Question must be at least 3 characters long."))]
    pub question: String,
}

impl AskRequest {
    /// Same request with surrounding whitespace removed from the question.
    pub fn trimmed(self) -> Self {
        Self {
            question: self.question.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
