//! Wire contract between the site's forms and the endpoints that receive them.
//!
//! Both the internal API routes and the third-party contact relay speak the
//! same dialect: a `POST` with a flat JSON object of string fields, answered by
//! a 2xx (body optional) or by a non-2xx whose JSON body may carry a `message`.

mod endpoint;
pub use endpoint::{Endpoint, CONTACT_RELAY_URL, IDEMPOTENCY_HEADER};

mod reply;
pub use reply::{classify, ReplyBody, ReplyError};

use std::collections::BTreeMap;

/// Request body sent to every endpoint: field name to field value.
pub type SubmissionBody = BTreeMap<String, String>;

/// Serialize a submission body exactly as it goes on the wire.
pub fn encode_body(body: &SubmissionBody) -> String {
    // A map of strings cannot fail to serialize.
    serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string())
}
