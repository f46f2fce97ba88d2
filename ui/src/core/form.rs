//! The submittable-form state machine shared by every form on the site.
//!
//! ```text
//!   Idle ──submit──▶ Submitting ──2xx──▶ Success ──reset──▶ Idle
//!    ▲ │                  │
//!    │ │                  └──failure──▶ Error ──submit──▶ Submitting
//!    │ └─select QR method─▶ PaymentPending ──confirm──▶ Success
//!    └──────────back───────────┘
//! ```
//!
//! The controller never performs I/O. [`FormSubmission::begin_submit`] hands out
//! a [`PendingSubmission`] for a transport to deliver, and the outcome comes
//! back through [`FormSubmission::resolve`]. Only the most recent attempt can
//! resolve the form; stale outcomes are dropped.

use api::Endpoint;
use dioxus::logger::tracing::debug;
use thiserror::Error;
use uuid::Uuid;

use super::schema::{FieldIssue, FieldValues, FormSchema, ValidationErrors};
use super::transport::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error,
    PaymentPending,
}

impl FormStatus {
    /// Fields accept edits only while the form is open for (re)submission.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
            Self::PaymentPending => "payment-pending",
        }
    }
}

/// How a form reached `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessKind {
    /// The endpoint accepted the submission.
    Submitted,
    /// The user reported a QR payment as done; nothing was sent or verified.
    PaymentSelfReported,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("form is {} and cannot be submitted", .0.as_str())]
    NotEditable(FormStatus),
    #[error("form is invalid ({0})")]
    Invalid(ValidationErrors),
}

/// Everything a transport needs to deliver one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    /// Sequence number of the attempt within its form instance.
    pub attempt: u64,
    pub endpoint: Endpoint,
    /// Frozen snapshot of the fields at submit time.
    pub body: FieldValues,
    /// Stable across retries of unchanged fields.
    pub idempotency_key: Uuid,
}

#[derive(Debug, Clone)]
pub struct FormSubmission {
    schema: &'static FormSchema,
    fields: FieldValues,
    status: FormStatus,
    error_message: Option<String>,
    field_errors: ValidationErrors,
    success: Option<SuccessKind>,
    idempotency_key: Option<Uuid>,
    attempts: u64,
}

impl FormSubmission {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            fields: schema.blank_values(),
            status: FormStatus::Idle,
            error_message: None,
            field_errors: ValidationErrors::default(),
            success: None,
            idempotency_key: None,
            attempts: 0,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Present exactly when the status is `Error`.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn field_issue(&self, name: &str) -> Option<FieldIssue> {
        self.field_errors.get(name)
    }

    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    pub fn success_kind(&self) -> Option<SuccessKind> {
        self.success
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Update one field. Returns `false` when the edit was ignored, either
    /// because the form is locked or because the schema has no such field.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        if !self.status.is_editable() {
            debug!(
                form = self.schema.id,
                field = name,
                status = self.status.as_str(),
                "ignoring edit on locked form"
            );
            return false;
        }
        let Some(spec) = self.schema.field(name) else {
            debug!(form = self.schema.id, field = name, "ignoring unknown field");
            return false;
        };

        let value = value.into();
        if self.value(spec.name) != value {
            self.fields.insert(spec.name.to_string(), value);
            // Changed content is a different submission for deduplication purposes.
            self.idempotency_key = None;
        }
        self.field_errors.clear_field(spec.name);
        true
    }

    /// Record a picked file, or the reason it was refused. A refused file
    /// leaves the field empty.
    pub fn attach_file(&mut self, name: &str, file_name: &str, size: u64) -> bool {
        let Some(spec) = self.schema.field(name) else {
            return false;
        };
        match spec.check_file(file_name, size) {
            None => self.set_field(name, file_name),
            Some(issue) => {
                let spec_name = spec.name;
                if !self.set_field(spec_name, "") {
                    return false;
                }
                self.field_errors.insert(spec_name, issue);
                true
            }
        }
    }

    /// Validate and move to `Submitting`, handing back the attempt to deliver.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejection> {
        if !self.status.is_editable() {
            return Err(SubmitRejection::NotEditable(self.status));
        }
        if let Err(errors) = self.schema.validate(&self.fields) {
            self.field_errors = errors.clone();
            return Err(SubmitRejection::Invalid(errors));
        }

        self.field_errors = ValidationErrors::default();
        self.error_message = None;
        self.status = FormStatus::Submitting;
        self.attempts += 1;
        let idempotency_key = *self.idempotency_key.get_or_insert_with(Uuid::new_v4);

        Ok(PendingSubmission {
            attempt: self.attempts,
            endpoint: self.schema.endpoint,
            body: self.fields.clone(),
            idempotency_key,
        })
    }

    /// Apply the transport's verdict. Returns `false` for outcomes that no
    /// longer belong to the in-flight attempt.
    pub fn resolve(
        &mut self,
        pending: &PendingSubmission,
        outcome: Result<(), SubmitError>,
    ) -> bool {
        if self.status != FormStatus::Submitting || pending.attempt != self.attempts {
            debug!(
                form = self.schema.id,
                attempt = pending.attempt,
                "dropping stale submission outcome"
            );
            return false;
        }

        match outcome {
            Ok(()) => self.finish(SuccessKind::Submitted),
            Err(err) => {
                self.status = FormStatus::Error;
                self.error_message = Some(
                    err.server_message()
                        .map(str::to_string)
                        .unwrap_or_else(self.schema.fallback_error),
                );
            }
        }
        true
    }

    /// Back to a blank, idle form.
    pub fn reset(&mut self) {
        self.fields = self.schema.blank_values();
        self.status = FormStatus::Idle;
        self.error_message = None;
        self.field_errors = ValidationErrors::default();
        self.success = None;
        self.idempotency_key = None;
    }

    /// Set the payment method; picking the QR method from `Idle` opens the
    /// payment panel. Forms without a QR payment flow treat this as `set_field`.
    pub fn select_payment_method(&mut self, method: &str) -> bool {
        let Some(qr) = self.schema.qr_payment else {
            return false;
        };
        if !self.set_field(qr.field, method) {
            return false;
        }
        if method == qr.method && self.status == FormStatus::Idle {
            self.status = FormStatus::PaymentPending;
        }
        true
    }

    /// The user says the QR payment went through. No request is made.
    pub fn confirm_payment(&mut self) -> bool {
        if self.status != FormStatus::PaymentPending {
            return false;
        }
        self.finish(SuccessKind::PaymentSelfReported);
        true
    }

    /// Reopen the payment panel for a form whose QR method is still selected.
    pub fn open_payment(&mut self) -> bool {
        let Some(qr) = self.schema.qr_payment else {
            return false;
        };
        if !self.status.is_editable() || self.value(qr.field) != qr.method {
            return false;
        }
        self.status = FormStatus::PaymentPending;
        self.error_message = None;
        true
    }

    /// Close the payment panel and return to the form, keeping its values.
    pub fn leave_payment(&mut self) -> bool {
        if self.status != FormStatus::PaymentPending {
            return false;
        }
        self.status = FormStatus::Idle;
        true
    }

    fn finish(&mut self, kind: SuccessKind) {
        self.status = FormStatus::Success;
        self.success = Some(kind);
        self.error_message = None;
        self.fields = self.schema.blank_values();
        self.field_errors = ValidationErrors::default();
        self.idempotency_key = None;
    }
}
