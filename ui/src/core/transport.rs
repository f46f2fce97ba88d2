//! Submission transport: one request per accepted submit, classified into
//! success or a [`SubmitError`].

use std::future::Future;

use api::{ReplyError, IDEMPOTENCY_HEADER};
use dioxus::logger::tracing::{debug, error};
use thiserror::Error;

use super::config::SiteConfig;
use super::form::PendingSubmission;
use super::platform::{self, HttpRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] ReplyError),
    #[error("network error: {0}")]
    Network(String),
}

impl SubmitError {
    /// Explanation supplied by the endpoint, if any. Network failures never have one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(reply) => reply.message(),
            Self::Network(_) => None,
        }
    }
}

/// Anything able to deliver a pending submission.
///
/// Implementations make exactly one attempt; retrying is the user's call.
pub trait Transport {
    fn send(&self, submission: &PendingSubmission)
        -> impl Future<Output = Result<(), SubmitError>>;
}

/// Posts submissions as JSON over HTTP (fetch on the web, ureq natively).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransport {
    api_base: String,
    relay_url: String,
}

impl HttpTransport {
    pub fn new(api_base: impl Into<String>, relay_url: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            relay_url: relay_url.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.api_base.clone(), config.contact_endpoint.clone())
    }

    /// Build the HTTP request for a submission without sending it.
    pub fn request_for(&self, submission: &PendingSubmission) -> HttpRequest {
        let endpoint = submission.endpoint;
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        // The relay is a third party; only our own routes honor the key.
        if endpoint.route().is_some() {
            headers.push((IDEMPOTENCY_HEADER, submission.idempotency_key.to_string()));
        }
        if endpoint.wants_json_accept() {
            headers.push(("Accept", "application/json".to_string()));
        }
        HttpRequest {
            url: endpoint.url(&self.api_base, &self.relay_url),
            body: api::encode_body(&submission.body),
            headers,
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, submission: &PendingSubmission) -> Result<(), SubmitError> {
        let endpoint = submission.endpoint.label();
        let request = self.request_for(submission);
        debug!(endpoint, url = %request.url, "posting submission");

        let reply = match platform::post_json(request).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(endpoint, %err, "submission failed before a response arrived");
                return Err(err);
            }
        };

        match api::classify(reply.status, &reply.body) {
            Ok(_) => Ok(()),
            Err(rejection) => {
                error!(
                    endpoint,
                    status = reply.status,
                    body = %reply.body,
                    "submission rejected"
                );
                Err(rejection.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Endpoint;
    use uuid::Uuid;

    fn pending(endpoint: Endpoint) -> PendingSubmission {
        let mut body = api::SubmissionBody::new();
        body.insert("email".into(), "test@example.com".into());
        PendingSubmission {
            attempt: 1,
            endpoint,
            body,
            idempotency_key: Uuid::nil(),
        }
    }

    #[test]
    fn internal_request_shape() {
        let transport = HttpTransport::new("https://goat.example", api::CONTACT_RELAY_URL);
        let request = transport.request_for(&pending(Endpoint::Newsletter));
        assert_eq!(request.url, "https://goat.example/api/subscribe");
        assert_eq!(request.body, r#"{"email":"test@example.com"}"#);
        assert!(request
            .headers
            .iter()
            .any(|(name, value)| *name == IDEMPOTENCY_HEADER && value == &Uuid::nil().to_string()));
        assert!(!request.headers.iter().any(|(name, _)| *name == "Accept"));
    }

    #[test]
    fn relay_request_asks_for_json() {
        let transport = HttpTransport::new("", "https://relay.example/f/abc");
        let request = transport.request_for(&pending(Endpoint::ContactRelay));
        assert_eq!(request.url, "https://relay.example/f/abc");
        assert!(request
            .headers
            .iter()
            .any(|(name, value)| *name == "Accept" && value == "application/json"));
    }

    #[test]
    fn relay_request_carries_no_idempotency_key() {
        let transport = HttpTransport::new("", "https://relay.example/f/abc");
        let request = transport.request_for(&pending(Endpoint::ContactRelay));
        assert!(!request.headers.iter().any(|(name, _)| *name == IDEMPOTENCY_HEADER));
        assert!(request.headers.iter().any(|(name, _)| *name == "Content-Type"));
    }

    #[test]
    fn only_rejections_carry_server_messages() {
        let rejected = SubmitError::from(ReplyError::Rejected {
            status: 400,
            message: Some("Invalid email".into()),
        });
        assert_eq!(rejected.server_message(), Some("Invalid email"));
        assert_eq!(SubmitError::Network("offline".into()).server_message(), None);
    }
}
