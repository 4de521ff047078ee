//! Form schemas and required-field validation.
//!
//! A form is a flat map of named fields. Each schema marks which fields are
//! required; [`FormSchema::validate`] reports a message per missing field.
//! The same schemas validate request bodies on the server.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Comma-separated input stored as a trimmed, de-duplicated list.
    List,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    /// Value of an untouched field.
    pub fn empty_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::List => FieldValue::List(Vec::new()),
            FieldKind::Number => FieldValue::Number(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Number(Option<f64>),
}

impl FieldValue {
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Number(n) => n.is_some(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => *n,
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        FieldValue::Text(value.unwrap_or_default())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(Some(f64::from(value)))
    }
}

impl From<Option<u32>> for FieldValue {
    fn from(value: Option<u32>) -> Self {
        FieldValue::Number(value.map(f64::from))
    }
}

pub type FormValues = BTreeMap<String, FieldValue>;

/// Splits comma-separated input into trimmed entries, dropping blanks and
/// case-insensitive duplicates. First occurrence wins.
pub fn parse_list(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter(|item| seen.insert(item.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Field name to message, only for failing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for `field`, or `""` when it passed.
    pub fn message_for(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// One line summary, e.g. for a 400 response body.
    pub fn summary(&self) -> String {
        self.0
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Values of a freshly opened form.
    pub fn initial_values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.empty_value()))
            .collect()
    }

    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in self.fields.iter().filter(|f| f.required) {
            let present = values.get(field.name).is_some_and(FieldValue::is_present);
            if !present {
                errors.insert(field.name, format!("{} is required", field.label));
            }
        }
        errors
    }
}

use FieldKind::{List, Number, Text};

pub static HACKATHON_POST: FormSchema = FormSchema {
    name: "hackathon_post",
    fields: &[
        FieldSpec::required("hackathonName", "Hackathon name", Text),
        FieldSpec::required("hackathonLink", "Hackathon link", Text),
        FieldSpec::required("description", "Description", Text),
        FieldSpec::required("skills", "Skills", List),
        FieldSpec::required("location", "Location", Text),
        FieldSpec::optional("city", "City", Text),
        FieldSpec::required("teammatesRequired", "Teammates required", Number),
        FieldSpec::optional("status", "Status", Text),
        FieldSpec::optional("prize", "Prize", Text),
        FieldSpec::required("startDate", "Start date", Text),
        FieldSpec::required("endDate", "End date", Text),
    ],
};

pub static JOB_POSTING: FormSchema = FormSchema {
    name: "job_posting",
    fields: &[
        FieldSpec::required("title", "Job title", Text),
        FieldSpec::required("company", "Company", Text),
        FieldSpec::required("description", "Description", Text),
        FieldSpec::required("location", "Location", Text),
        FieldSpec::required("jobType", "Job type", Text),
        FieldSpec::optional("salaryMin", "Minimum salary", Number),
        FieldSpec::optional("salaryMax", "Maximum salary", Number),
        FieldSpec::optional("experienceMin", "Minimum experience", Number),
        FieldSpec::optional("experienceMax", "Maximum experience", Number),
        FieldSpec::required("skills", "Skills", List),
        FieldSpec::required("applyLink", "Apply link", Text),
    ],
};

pub static MENTOR_APPLICATION: FormSchema = FormSchema {
    name: "mentor_application",
    fields: &[
        FieldSpec::required("expertise", "Expertise", List),
        FieldSpec::required("experienceYears", "Years of experience", Number),
        FieldSpec::required("bio", "Bio", Text),
        FieldSpec::optional("linkedin", "LinkedIn", Text),
        FieldSpec::required("availability", "Availability", Text),
    ],
};

pub static PROFILE: FormSchema = FormSchema {
    name: "profile",
    fields: &[
        FieldSpec::required("fullName", "Full name", Text),
        FieldSpec::required("role", "Role", Text),
        FieldSpec::required("userType", "User type", Text),
        FieldSpec::optional("location", "Location", Text),
        FieldSpec::required("skills", "Skills", List),
        FieldSpec::optional("bio", "Bio", Text),
        FieldSpec::optional("profilePicture", "Profile picture", Text),
    ],
};

pub static PROMOTION: FormSchema = FormSchema {
    name: "promotion",
    fields: &[
        FieldSpec::required("title", "Title", Text),
        FieldSpec::required("description", "Description", Text),
        FieldSpec::required("link", "Link", Text),
    ],
};
