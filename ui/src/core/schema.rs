//! Static description of a form: which fields it has, what each accepts and
//! where it is posted.
//!
//! The same [`FieldSpec`] drives both the native HTML constraints rendered on
//! the inputs (`required`, `type`, `min`/`max`) and [`FormSchema::validate`],
//! which the controller runs before any request leaves the page.

use std::collections::BTreeMap;
use std::fmt;

use api::Endpoint;
use once_cell::sync::Lazy;
use regex::Regex;

/// Current field values, keyed by wire name.
pub type FieldValues = api::SubmissionBody;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    Tel,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    Date,
    Number {
        min: i64,
        max: i64,
    },
    /// Closed list of accepted wire values.
    Choice(&'static [&'static str]),
    /// Comma-separated slot identifiers; `required` means at least one slot.
    SlotList,
    /// Name of a file picked on the device. Only the name is submitted.
    Document {
        extensions: &'static [&'static str],
        max_bytes: u64,
    },
}

impl FieldKind {
    /// Value of the `type` attribute for a plain `<input>` rendering of this kind.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Number { .. } => "number",
            Self::Document { .. } => "file",
            Self::Text | Self::LongText | Self::Choice(_) | Self::SlotList => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// Check one value the way the browser would before letting the form submit.
    pub fn check(&self, raw: &str) -> Option<FieldIssue> {
        let value = raw.trim();
        if value.is_empty() {
            return self.required.then_some(FieldIssue::Missing);
        }
        match self.kind {
            FieldKind::Text | FieldKind::LongText | FieldKind::Tel => None,
            FieldKind::Email => (!EMAIL_SHAPE.is_match(value)).then_some(FieldIssue::InvalidEmail),
            FieldKind::Date => (!DATE_SHAPE.is_match(value)).then_some(FieldIssue::InvalidDate),
            FieldKind::Number { min, max } => match value.parse::<i64>() {
                Ok(n) if n < min || n > max => Some(FieldIssue::OutOfRange { min, max }),
                Ok(_) => None,
                Err(_) => Some(FieldIssue::NotANumber),
            },
            FieldKind::Choice(options) => {
                (!options.contains(&value)).then_some(FieldIssue::UnknownChoice)
            }
            FieldKind::SlotList => {
                let any = value.split(',').any(|slot| !slot.trim().is_empty());
                (self.required && !any).then_some(FieldIssue::Missing)
            }
            FieldKind::Document { extensions, .. } => {
                (!has_extension(value, extensions)).then_some(FieldIssue::UnsupportedFile)
            }
        }
    }

    /// Check a picked file: its type first, then its size.
    pub fn check_file(&self, file_name: &str, size: u64) -> Option<FieldIssue> {
        let FieldKind::Document { max_bytes, .. } = self.kind else {
            return Some(FieldIssue::UnsupportedFile);
        };
        self.check(file_name).or_else(|| {
            (size > max_bytes).then_some(FieldIssue::FileTooLarge {
                max_mb: max_bytes / (1024 * 1024),
            })
        })
    }
}

fn has_extension(file_name: &str, extensions: &[&str]) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Marks the field whose value routes a form into the manual QR payment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrPayment {
    pub field: &'static str,
    pub method: &'static str,
}

#[derive(Debug)]
pub struct FormSchema {
    /// Stable identifier, also used to prefix element ids.
    pub id: &'static str,
    pub endpoint: Endpoint,
    pub fields: &'static [FieldSpec],
    /// Message shown when a submission fails without a server explanation.
    pub fallback_error: fn() -> String,
    pub qr_payment: Option<QrPayment>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Initial values: every declared field present and empty.
    pub fn blank_values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|spec| (spec.name.to_string(), String::new()))
            .collect()
    }

    pub fn validate(&self, values: &FieldValues) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for spec in self.fields {
            let raw = values.get(spec.name).map(String::as_str).unwrap_or("");
            if let Some(issue) = spec.check(raw) {
                errors.0.insert(spec.name, issue);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    InvalidEmail,
    InvalidDate,
    NotANumber,
    OutOfRange { min: i64, max: i64 },
    UnknownChoice,
    UnsupportedFile,
    FileTooLarge { max_mb: u64 },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::InvalidEmail => write!(f, "invalid email"),
            Self::InvalidDate => write!(f, "invalid date"),
            Self::NotANumber => write!(f, "not a number"),
            Self::OutOfRange { min, max } => write!(f, "outside {min}..={max}"),
            Self::UnknownChoice => write!(f, "unknown option"),
            Self::UnsupportedFile => write!(f, "unsupported file type"),
            Self::FileTooLarge { max_mb } => write!(f, "file over {max_mb} MB"),
        }
    }
}

/// Per-field validation failures, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, FieldIssue>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<FieldIssue> {
        self.0.get(field).copied()
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn insert(&mut self, field: &'static str, issue: FieldIssue) {
        self.0.insert(field, issue);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldIssue)> + '_ {
        self.0.iter().map(|(name, issue)| (*name, *issue))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(name, issue)| format!("{name}: {issue}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> String {
        "fallback".into()
    }

    static SAMPLE: FormSchema = FormSchema {
        id: "sample",
        endpoint: Endpoint::Newsletter,
        fields: &[
            FieldSpec::required("email", FieldKind::Email),
            FieldSpec::required("age", FieldKind::Number { min: 8, max: 30 }),
            FieldSpec::optional("club", FieldKind::Text),
            FieldSpec::required("level", FieldKind::Choice(&["Elite", "Avanzado"])),
        ],
        fallback_error: fallback,
        qr_payment: None,
    };

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        let mut v = SAMPLE.blank_values();
        for (k, val) in pairs {
            v.insert(k.to_string(), val.to_string());
        }
        v
    }

    #[test]
    fn blank_values_cover_every_field() {
        let blank = SAMPLE.blank_values();
        assert_eq!(blank.len(), 4);
        assert!(blank.values().all(String::is_empty));
    }

    #[test]
    fn complete_form_passes() {
        let v = values(&[("email", "a@b.co"), ("age", "12"), ("level", "Elite")]);
        assert_eq!(SAMPLE.validate(&v), Ok(()));
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let errors = SAMPLE.validate(&SAMPLE.blank_values()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("email"), Some(FieldIssue::Missing));
        assert_eq!(errors.get("club"), None);
    }

    #[test]
    fn shape_and_range_checks() {
        let v = values(&[("email", "not-an-email"), ("age", "31"), ("level", "Pro")]);
        let errors = SAMPLE.validate(&v).unwrap_err();
        assert_eq!(errors.get("email"), Some(FieldIssue::InvalidEmail));
        assert_eq!(
            errors.get("age"),
            Some(FieldIssue::OutOfRange { min: 8, max: 30 })
        );
        assert_eq!(errors.get("level"), Some(FieldIssue::UnknownChoice));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let spec = FieldSpec::required("message", FieldKind::LongText);
        assert_eq!(spec.check("   \n"), Some(FieldIssue::Missing));
    }

    #[test]
    fn slot_list_needs_one_slot() {
        let spec = FieldSpec::required("availability", FieldKind::SlotList);
        assert_eq!(spec.check(" , "), Some(FieldIssue::Missing));
        assert_eq!(spec.check("lunes-08"), None);
    }

    #[test]
    fn documents_check_type_then_size() {
        let spec = FieldSpec::required(
            "certificate",
            FieldKind::Document {
                extensions: &["pdf", "jpg", "png"],
                max_bytes: 5 * 1024 * 1024,
            },
        );
        assert_eq!(spec.check("apto.PDF"), None);
        assert_eq!(spec.check("apto.docx"), Some(FieldIssue::UnsupportedFile));
        assert_eq!(spec.check("apto"), Some(FieldIssue::UnsupportedFile));
        assert_eq!(spec.check_file("scan.png", 5 * 1024 * 1024), None);
        assert_eq!(
            spec.check_file("scan.png", 5 * 1024 * 1024 + 1),
            Some(FieldIssue::FileTooLarge { max_mb: 5 })
        );
        assert_eq!(
            spec.check_file("scan.gif", 10),
            Some(FieldIssue::UnsupportedFile)
        );
        assert_eq!(
            FieldSpec::required("email", FieldKind::Email).check_file("a.pdf", 1),
            Some(FieldIssue::UnsupportedFile)
        );
    }

    #[test]
    fn dates_must_be_iso_shaped() {
        let spec = FieldSpec::required("birthDate", FieldKind::Date);
        assert_eq!(spec.check("2010-04-21"), None);
        assert_eq!(spec.check("21/04/2010"), Some(FieldIssue::InvalidDate));
    }
}
