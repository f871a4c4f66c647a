//! Contact form submission model.
//!
//! The form is not validated. Any JSON body except `null` is accepted; keys
//! are looked up by name, so arrays and scalars simply have no fields. Each
//! field is tracked as present or absent so the email body can say exactly
//! what the browser sent.

use serde::de::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Rendered in place of a field the submission did not include.
pub const MISSING_FIELD_PLACEHOLDER: &str = "undefined";

/// Rendered for any JSON object value.
const OBJECT_PLACEHOLDER: &str = "[object Object]";

/// One field of the submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormField {
    /// The key was not in the request body.
    #[default]
    Missing,
    /// The key was present, with any JSON value (including `null`).
    Value(Value),
}

impl FormField {
    /// Text used when the field is interpolated into the email.
    ///
    /// Strings are used verbatim and absent fields become
    /// [`MISSING_FIELD_PLACEHOLDER`]. Other values follow browser string
    /// coercion: `null` and booleans by name, whole numbers without a
    /// fraction, arrays as their comma-joined elements, objects as
    /// `[object Object]`.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Missing => MISSING_FIELD_PLACEHOLDER.to_string(),
            Self::Value(value) => coerce(value),
        }
    }
}

fn coerce(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => OBJECT_PLACEHOLDER.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl From<&str> for FormField {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_string()))
    }
}

impl Serialize for FormField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

/// A contact form submission as posted by the website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
}

impl FormSubmission {
    /// Parse a request body.
    ///
    /// Duplicate keys keep the last value. Arrays, strings, numbers and
    /// booleans parse to a submission with every field missing.
    ///
    /// # Errors
    /// Returns an error when the body is not valid JSON or is `null`.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        if value.is_null() {
            return Err(serde_json::Error::custom(
                "form submission is null, expected a JSON object",
            ));
        }
        Ok(Self::from_value(&value))
    }

    /// Build a submission from an already-parsed, non-null body.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .as_object()
                .and_then(|map| map.get(key))
                .map_or(FormField::Missing, |v| FormField::Value(v.clone()))
        };

        Self {
            name: field("name"),
            email: field("email"),
            message: field("message"),
        }
    }
}
