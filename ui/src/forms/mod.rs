//! The site's forms, all built on one submittable-form controller.

pub mod fields;
pub mod hook;

pub mod campus;
pub mod contact;
pub mod newsletter;
pub mod training;

pub use campus::{CampusRegistrationForm, CAMPUS_FORM};
pub use contact::{ContactForm, CONTACT_FORM};
pub use hook::{use_http_form, use_submittable_form, FormHandle};
pub use newsletter::{NewsletterForm, NEWSLETTER_FORM};
pub use training::{TrainingRegistrationForm, TRAINING_FORM};
