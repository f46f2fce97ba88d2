//! `use_submittable_form`: binds a [`FormSubmission`] to a component and runs
//! its transport on the component's task scope.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::config;
use crate::core::form::{FormStatus, FormSubmission, SuccessKind};
use crate::core::schema::{FieldIssue, FormSchema};
use crate::core::transport::{HttpTransport, Transport};

/// Copyable handle to one mounted form. Event handlers capture it by value.
pub struct FormHandle<T: 'static> {
    state: Signal<FormSubmission>,
    transport: CopyValue<T>,
}

impl<T: 'static> Clone for FormHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FormHandle<T> {}

impl<T: 'static> PartialEq for FormHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.transport == other.transport
    }
}

impl<T: Transport + Clone + 'static> FormHandle<T> {
    pub fn schema(&self) -> &'static FormSchema {
        self.state.peek().schema()
    }

    pub fn status(&self) -> FormStatus {
        self.state.read().status()
    }

    pub fn value(&self, name: &str) -> String {
        self.state.read().value(name).to_string()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.read().error_message().map(str::to_string)
    }

    pub fn field_issue(&self, name: &str) -> Option<FieldIssue> {
        self.state.read().field_issue(name)
    }

    pub fn success_kind(&self) -> Option<SuccessKind> {
        self.state.read().success_kind()
    }

    pub fn set_field(&self, name: &str, value: String) {
        let mut state = self.state;
        state.with_mut(|form| form.set_field(name, value));
    }

    pub fn attach_file(&self, name: &str, file_name: String, size: u64) {
        let mut state = self.state;
        state.with_mut(|form| form.attach_file(name, &file_name, size));
    }

    /// Start a submission unless one is already running or the form is invalid.
    pub fn submit(&self) {
        let mut state = self.state;
        let pending = match state.with_mut(|form| form.begin_submit()) {
            Ok(pending) => pending,
            Err(rejection) => {
                debug!(form = self.schema().id, %rejection, "submission not started");
                return;
            }
        };

        let transport = self.transport.read().clone();
        spawn(async move {
            let outcome = transport.send(&pending).await;
            state.with_mut(|form| form.resolve(&pending, outcome));
        });
    }

    pub fn reset(&self) {
        let mut state = self.state;
        state.with_mut(FormSubmission::reset);
    }

    pub fn select_payment_method(&self, method: &str) {
        let mut state = self.state;
        state.with_mut(|form| form.select_payment_method(method));
    }

    pub fn confirm_payment(&self) {
        let mut state = self.state;
        state.with_mut(FormSubmission::confirm_payment);
    }

    pub fn open_payment(&self) {
        let mut state = self.state;
        state.with_mut(FormSubmission::open_payment);
    }

    pub fn leave_payment(&self) {
        let mut state = self.state;
        state.with_mut(FormSubmission::leave_payment);
    }
}

/// Mount a form for `schema`, delivering through the transport built by `make_transport`.
pub fn use_submittable_form<T: Transport + Clone + 'static>(
    schema: &'static FormSchema,
    make_transport: impl FnOnce() -> T,
) -> FormHandle<T> {
    let state = use_signal(|| FormSubmission::new(schema));
    let transport = use_hook(|| CopyValue::new(make_transport()));
    FormHandle { state, transport }
}

/// Mount a form posting over HTTP with the site configuration.
pub fn use_http_form(schema: &'static FormSchema) -> FormHandle<HttpTransport> {
    use_submittable_form(schema, || HttpTransport::from_config(config::site()))
}
