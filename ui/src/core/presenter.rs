//! Status presenter: which affordances a form shows for a given status.
//! Components read this instead of matching on [`FormStatus`] themselves so
//! every form behaves the same way.

use super::form::FormStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// The editable form.
    Form,
    /// Confirmation replacing the form, with a control to start over.
    Confirmation,
    /// QR payment instructions with "payment complete" and "back" controls.
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub panel: Panel,
    pub inputs_locked: bool,
    pub submit_disabled: bool,
    pub show_spinner: bool,
    pub show_error: bool,
}

pub fn affordance(status: FormStatus) -> Affordance {
    let form = Affordance {
        panel: Panel::Form,
        inputs_locked: false,
        submit_disabled: false,
        show_spinner: false,
        show_error: false,
    };
    match status {
        FormStatus::Idle => form,
        FormStatus::Error => Affordance {
            show_error: true,
            ..form
        },
        FormStatus::Submitting => Affordance {
            inputs_locked: true,
            submit_disabled: true,
            show_spinner: true,
            ..form
        },
        FormStatus::Success => Affordance {
            panel: Panel::Confirmation,
            ..form
        },
        FormStatus::PaymentPending => Affordance {
            panel: Panel::Payment,
            ..form
        },
    }
}

/// Modifier class for the form container, e.g. `submittable--error`.
pub fn status_class(status: FormStatus) -> String {
    format!("submittable submittable--{}", status.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_and_error_are_editable() {
        for status in [FormStatus::Idle, FormStatus::Error] {
            let a = affordance(status);
            assert_eq!(a.panel, Panel::Form);
            assert!(!a.inputs_locked);
            assert!(!a.submit_disabled);
        }
        assert!(affordance(FormStatus::Error).show_error);
        assert!(!affordance(FormStatus::Idle).show_error);
    }

    #[test]
    fn submitting_locks_everything() {
        let a = affordance(FormStatus::Submitting);
        assert_eq!(a.panel, Panel::Form);
        assert!(a.inputs_locked && a.submit_disabled && a.show_spinner);
        assert!(!a.show_error);
    }

    #[test]
    fn terminal_panels_replace_the_form() {
        assert_eq!(affordance(FormStatus::Success).panel, Panel::Confirmation);
        assert_eq!(affordance(FormStatus::PaymentPending).panel, Panel::Payment);
    }

    #[test]
    fn status_class_names() {
        assert_eq!(
            status_class(FormStatus::PaymentPending),
            "submittable submittable--payment-pending"
        );
    }
}
