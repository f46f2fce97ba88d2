use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// JSON body an endpoint may answer with. Only `message` is meaningful to clients;
/// other members are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ReplyBody {
    #[serde(default, deserialize_with = "non_blank_text")]
    pub message: Option<String>,
}

/// Keeps a message only when it is a string with visible content.
fn non_blank_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string))
}

impl ReplyBody {
    /// Lenient parse: a missing, non-JSON or non-object body yields no message.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str::<Value>(raw)
            .ok()
            .filter(Value::is_object)
            .and_then(|value| Self::deserialize(value).ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    #[error("endpoint rejected the submission with status {status}")]
    Rejected { status: u16, message: Option<String> },
}

impl ReplyError {
    /// Server-supplied explanation, if the body carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
        }
    }
}

/// Classify an HTTP answer: any 2xx is success, everything else a rejection.
pub fn classify(status: u16, raw_body: &str) -> Result<ReplyBody, ReplyError> {
    let body = ReplyBody::parse(raw_body);
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ReplyError::Rejected {
            status,
            message: body.message,
        })
    }
}
