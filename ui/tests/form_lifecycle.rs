//! Drives the site's real form schemas through the submission lifecycle with
//! a scripted transport standing in for the network.

use std::cell::{Cell, RefCell};

use api::{Endpoint, IDEMPOTENCY_HEADER};
use futures::executor::block_on;
use ui::core::form::{
    FormStatus, FormSubmission, PendingSubmission, SubmitRejection, SuccessKind,
};
use ui::core::presenter::{affordance, Panel};
use ui::core::transport::{HttpTransport, SubmitError, Transport};
use ui::core::schema::{FieldIssue, FieldKind};
use ui::forms::{CAMPUS_FORM, CONTACT_FORM, NEWSLETTER_FORM, TRAINING_FORM};

/// Answers every request with the same status and body, recording what it was asked to send.
struct ScriptedTransport {
    status: u16,
    body: &'static str,
    sent: RefCell<Vec<PendingSubmission>>,
    calls: Cell<usize>,
}

impl ScriptedTransport {
    fn answering(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            sent: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, submission: &PendingSubmission) -> Result<(), SubmitError> {
        self.calls.set(self.calls.get() + 1);
        self.sent.borrow_mut().push(submission.clone());
        api::classify(self.status, self.body)
            .map(|_| ())
            .map_err(SubmitError::from)
    }
}

/// A submission that left the page, with the answer it will get.
struct InFlight {
    pending: PendingSubmission,
    outcome: Result<(), SubmitError>,
}

/// What the form hook does on a submit click, minus the task spawning: the
/// request goes out now and its answer is applied by [`deliver`].
fn click_submit(form: &mut FormSubmission, transport: &ScriptedTransport) -> Option<InFlight> {
    let pending = form.begin_submit().ok()?;
    let outcome = block_on(transport.send(&pending));
    Some(InFlight { pending, outcome })
}

fn deliver(form: &mut FormSubmission, flight: InFlight) -> bool {
    form.resolve(&flight.pending, flight.outcome)
}

fn filled_contact() -> FormSubmission {
    let mut form = FormSubmission::new(&CONTACT_FORM);
    assert!(form.set_field("name", "Lionel"));
    assert!(form.set_field("email", "lionel@example.com"));
    assert!(form.set_field("message", "Quiero entrenar"));
    form
}

fn filled_campus() -> FormSubmission {
    let mut form = FormSubmission::new(&CAMPUS_FORM);
    form.set_field("name", "Luciana Aymar");
    form.set_field("email", "lu@example.com");
    form.set_field("phone", "+54 9 11 5555 5555");
    form.set_field("age", "17");
    form.set_field("experience", "Avanzado");
    form
}

#[test]
fn repeated_submit_while_in_flight_sends_once() {
    let transport = ScriptedTransport::answering(200, "");
    let mut form = filled_contact();

    let first = click_submit(&mut form, &transport).expect("first click starts a submission");
    assert!(click_submit(&mut form, &transport).is_none());
    assert!(click_submit(&mut form, &transport).is_none());
    assert_eq!(
        form.begin_submit(),
        Err(SubmitRejection::NotEditable(FormStatus::Submitting))
    );

    assert_eq!(transport.calls.get(), 1);
    assert_eq!(form.status(), FormStatus::Submitting);
    assert!(affordance(form.status()).submit_disabled);

    assert!(deliver(&mut form, first));
    assert_eq!(form.status(), FormStatus::Success);
}

#[test]
fn success_clears_every_field() {
    for schema in [&CONTACT_FORM, &NEWSLETTER_FORM, &CAMPUS_FORM] {
        let transport = ScriptedTransport::answering(201, r#"{"ok":true}"#);
        let mut form = FormSubmission::new(schema);
        for field in schema.fields {
            let value = match field.name {
                "email" => "player@example.com",
                "age" => "12",
                "experience" => "Elite",
                "paymentMethod" => "cash",
                _ => "x",
            };
            form.set_field(field.name, value);
        }

        let flight = click_submit(&mut form, &transport).expect("valid form submits");
        assert!(deliver(&mut form, flight));

        assert_eq!(form.status(), FormStatus::Success, "{}", schema.id);
        assert_eq!(form.success_kind(), Some(SuccessKind::Submitted));
        assert!(form.fields().values().all(String::is_empty), "{}", schema.id);
        assert_eq!(form.fields().len(), schema.fields.len());
        assert_eq!(affordance(form.status()).panel, Panel::Confirmation);
    }
}

#[test]
fn rejection_message_is_shown_verbatim() {
    let transport = ScriptedTransport::answering(400, r#"{"message":"Invalid email"}"#);
    let mut form = FormSubmission::new(&NEWSLETTER_FORM);
    form.set_field("email", "test@example.com");

    let flight = click_submit(&mut form, &transport).expect("valid form submits");
    assert!(deliver(&mut form, flight));

    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(form.error_message(), Some("Invalid email"));
    assert_eq!(form.value("email"), "test@example.com");
    assert!(affordance(form.status()).show_error);
}

#[test]
fn rejection_without_message_uses_the_form_default() {
    ui::i18n::init();
    for (status, body) in [(400, "{}"), (500, "<html>Bad gateway</html>"), (422, "")] {
        let transport = ScriptedTransport::answering(status, body);
        let mut form = filled_contact();

        let flight = click_submit(&mut form, &transport).expect("valid form submits");
        assert!(deliver(&mut form, flight));

        let fallback = (CONTACT_FORM.fallback_error)();
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.error_message(), Some(fallback.as_str()));
        assert!(!fallback.is_empty());
    }
}

#[test]
fn reset_returns_to_a_clean_idle_form() {
    let transport = ScriptedTransport::answering(503, "");
    let mut form = filled_contact();
    let flight = click_submit(&mut form, &transport).expect("valid form submits");
    deliver(&mut form, flight);
    assert_eq!(form.status(), FormStatus::Error);

    form.reset();
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.error_message(), None);
    assert_eq!(form.value("name"), "");

    // "Send another" after a success behaves the same.
    let transport = ScriptedTransport::answering(200, "");
    let mut form = filled_contact();
    let flight = click_submit(&mut form, &transport).expect("valid form submits");
    deliver(&mut form, flight);
    form.reset();
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.success_kind(), None);
}

#[test]
fn retry_after_error_reuses_the_idempotency_key() {
    let failing = ScriptedTransport::answering(500, "");
    let mut form = filled_contact();
    let first = click_submit(&mut form, &failing).expect("valid form submits");
    let first_key = first.pending.idempotency_key;
    deliver(&mut form, first);

    let working = ScriptedTransport::answering(200, "");
    let second = click_submit(&mut form, &working).expect("retry submits");
    assert_eq!(second.pending.idempotency_key, first_key);
    assert_eq!(second.pending.attempt, 2);
    assert!(deliver(&mut form, second));
    assert_eq!(form.status(), FormStatus::Success);
}

#[test]
fn mercadopago_payment_skips_the_network() {
    let transport = ScriptedTransport::answering(200, "");
    let mut form = filled_campus();

    assert!(form.select_payment_method("mercadopago"));
    assert_eq!(form.status(), FormStatus::PaymentPending);
    assert_eq!(affordance(form.status()).panel, Panel::Payment);

    // Submitting is not possible from the payment panel.
    assert!(click_submit(&mut form, &transport).is_none());

    assert!(form.confirm_payment());
    assert_eq!(form.status(), FormStatus::Success);
    assert_eq!(form.success_kind(), Some(SuccessKind::PaymentSelfReported));
    assert_eq!(transport.calls.get(), 0);

    // Confirming again is a no-op.
    assert!(!form.confirm_payment());
    assert_eq!(form.status(), FormStatus::Success);
}

#[test]
fn leaving_the_payment_panel_keeps_the_form() {
    let mut form = filled_campus();
    form.select_payment_method("mercadopago");
    assert!(form.leave_payment());

    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.value("name"), "Luciana Aymar");
    assert_eq!(form.value("paymentMethod"), "mercadopago");

    // Other methods post normally.
    assert!(form.select_payment_method("transfer"));
    assert_eq!(form.status(), FormStatus::Idle);
    let transport = ScriptedTransport::answering(200, "");
    let pending = click_submit(&mut form, &transport)
        .expect("valid form submits")
        .pending;
    assert_eq!(pending.endpoint, Endpoint::CampusRegistration);
    assert_eq!(pending.body["paymentMethod"], "transfer");
}

#[test]
fn newsletter_posts_exactly_the_email() {
    let transport = ScriptedTransport::answering(200, "");
    let mut form = FormSubmission::new(&NEWSLETTER_FORM);
    form.set_field("email", "test@example.com");

    let flight = click_submit(&mut form, &transport).expect("valid form submits");
    assert!(deliver(&mut form, flight));
    assert_eq!(form.status(), FormStatus::Success);

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);

    let request = HttpTransport::new("https://goatsports.com.ar", "https://relay.invalid/f/x")
        .request_for(&sent[0]);
    assert_eq!(request.url, "https://goatsports.com.ar/api/subscribe");
    assert_eq!(request.body, r#"{"email":"test@example.com"}"#);
    assert!(request
        .headers
        .iter()
        .any(|(name, value)| *name == IDEMPOTENCY_HEADER && !value.is_empty()));
}

#[test]
fn contact_without_message_never_reaches_the_transport() {
    let transport = ScriptedTransport::answering(200, "");
    let mut form = filled_contact();
    form.set_field("message", "");

    assert!(click_submit(&mut form, &transport).is_none());
    assert_eq!(transport.calls.get(), 0);
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(form.field_issue("message").is_some());
    assert!(form.field_issue("phone").is_none());
}

#[test]
fn contact_goes_to_the_relay_with_json_accept() {
    let transport = ScriptedTransport::answering(200, "");
    let mut form = filled_contact();
    let pending = click_submit(&mut form, &transport)
        .expect("valid form submits")
        .pending;

    let request = HttpTransport::new("", "https://relay.invalid/f/x").request_for(&pending);
    assert_eq!(request.url, "https://relay.invalid/f/x");
    assert!(request
        .headers
        .iter()
        .any(|(name, value)| *name == "Accept" && value == "application/json"));
    assert!(!request.headers.iter().any(|(name, _)| *name == IDEMPOTENCY_HEADER));
}

#[test]
fn training_registration_needs_a_slot() {
    let transport = ScriptedTransport::answering(200, "");
    let mut form = FormSubmission::new(&TRAINING_FORM);
    for field in TRAINING_FORM.fields.iter().filter(|f| f.required) {
        if field.name != "availability" {
            form.set_field(field.name, sample_training_value(field.name));
        }
    }

    assert!(click_submit(&mut form, &transport).is_none());
    assert!(form.field_issue("availability").is_some());

    form.set_field("availability", ui::forms::training::slot_id("martes", 18));
    let pending = click_submit(&mut form, &transport)
        .expect("complete form submits")
        .pending;
    assert_eq!(pending.endpoint, Endpoint::TrainingRegistration);
    assert_eq!(pending.body["availability"], "martes-18");
}

#[test]
fn oversized_certificate_blocks_the_training_registration() {
    let transport = ScriptedTransport::answering(200, "");
    let mut form = FormSubmission::new(&TRAINING_FORM);
    for field in TRAINING_FORM.fields.iter().filter(|f| f.required) {
        form.set_field(field.name, sample_training_value(field.name));
    }
    form.set_field("availability", ui::forms::training::slot_id("lunes", 9));

    assert!(form.attach_file("medicalCertificate", "apto.pdf", 6 * 1024 * 1024));
    assert_eq!(
        form.field_issue("medicalCertificate"),
        Some(FieldIssue::FileTooLarge { max_mb: 5 })
    );
    assert!(click_submit(&mut form, &transport).is_none());
    assert_eq!(transport.calls.get(), 0);

    assert!(form.attach_file("medicalCertificate", "apto.PNG", 300 * 1024));
    let pending = click_submit(&mut form, &transport)
        .expect("complete form submits")
        .pending;
    assert_eq!(pending.body["medicalCertificate"], "apto.PNG");
}

#[test]
fn payment_panel_reopens_after_going_back() {
    let transport = ScriptedTransport::answering(200, "");
    let mut form = filled_campus();
    form.select_payment_method("mercadopago");
    assert!(form.leave_payment());

    assert!(form.open_payment());
    assert_eq!(affordance(form.status()).panel, Panel::Payment);
    assert!(form.confirm_payment());
    assert_eq!(form.success_kind(), Some(SuccessKind::PaymentSelfReported));
    assert_eq!(transport.calls.get(), 0);
}

fn sample_training_value(name: &str) -> String {
    let spec = TRAINING_FORM.field(name).expect("field exists");
    match spec.kind {
        FieldKind::Email => "player@example.com".to_string(),
        FieldKind::Date => "2010-05-04".to_string(),
        FieldKind::Choice(options) => options[0].to_string(),
        FieldKind::Number { min, .. } => min.to_string(),
        FieldKind::Document { extensions, .. } => format!("apto.{}", extensions[0]),
        _ => "x".to_string(),
    }
}
