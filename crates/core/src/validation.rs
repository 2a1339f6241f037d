//! Request validation.
//!
//! Field rules are declared with the `validator` derive. [`validate`] runs
//! them and reduces the result to a single human-readable message: the first
//! failing field in declaration order, and within that field the first
//! failing rule. Callers get one [`CoreError::Validation`] per call, never an
//! aggregate.

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Declaration order of a request's validated fields.
///
/// `validator` reports failures in a hash map, so the order used to pick the
/// reported failure is declared here, next to the struct.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Validate `input`, returning the first failure as [`CoreError::Validation`].
pub fn validate<T>(input: &T) -> Result<(), CoreError>
where
    T: Validate + FieldOrder,
{
    match input.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(CoreError::Validation(first_violation(&errors, T::FIELDS))),
    }
}

/// Pick the message for the first failing field listed in `fields`.
///
/// Fields missing from `fields` are only consulted when none of the listed
/// ones failed, in lexical order so the result stays deterministic.
pub fn first_violation(errors: &ValidationErrors, fields: &[&str]) -> String {
    let by_field = errors.errors();

    for field in fields {
        if let Some(ValidationErrorsKind::Field(errs)) = by_field.get(*field) {
            if let Some(err) = errs.first() {
                return describe(field, err);
            }
        }
    }

    let mut rest: Vec<_> = by_field
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs.first().map(|err| (&**field, err)),
            _ => None,
        })
        .collect();
    rest.sort_by(|a, b| a.0.cmp(b.0));

    match rest.first() {
        Some((field, err)) => describe(field, err),
        None => "Request is invalid".to_string(),
    }
}

fn describe(field: &str, err: &ValidationError) -> String {
    match &*err.code {
        "required" => format!("Field {field} is required"),
        "length" | "range" => bound_message(field, err),
        _ => match &err.message {
            Some(message) => format!("Field {field} {message}"),
            None => format!("Field {field} is invalid"),
        },
    }
}

/// Message for a min/max rule, naming whichever bound the value broke.
fn bound_message(field: &str, err: &ValidationError) -> String {
    let min = err.params.get("min");
    let max = err.params.get("max");
    let actual = err.params.get("value").and_then(measure);

    let below_min = match (min.and_then(Value::as_f64), actual) {
        (Some(min), Some(actual)) => actual < min,
        (Some(_), None) => max.is_none(),
        (None, _) => false,
    };

    if below_min {
        if let Some(min) = min {
            return format!("Field {field} must be at least {}", bound(min));
        }
    }
    if let Some(max) = max {
        return format!("Field {field} must not exceed {}", bound(max));
    }
    match min {
        Some(min) => format!("Field {field} must be at least {}", bound(min)),
        None => format!("Field {field} is invalid"),
    }
}

/// Render a bound without a trailing `.0` for whole numbers.
fn bound(value: &Value) -> String {
    match value.as_f64() {
        Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
        _ => value.to_string(),
    }
}

/// Size of a reported value: character count, element count, or the number.
fn measure(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => Some(s.chars().count() as f64),
        Value::Array(items) => Some(items.len() as f64),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
