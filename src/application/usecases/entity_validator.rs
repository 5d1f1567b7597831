use chrono::{DateTime, Utc};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::domain::value_objects::{
    bookings::{CreateBookingModel, parse_scheduled_date},
    validation::ValidationError,
};

fn friendly_message(code: &str) -> &str {
    match code {
        "required" => "is required",
        "email" => "must be a valid email",
        "length" => "has invalid length",
        "range" => "is out of range",
        other => other,
    }
}

/// Collapses validator output into the first offending field, in field-name order.
fn first_violation(prefix: &str, errs: &ValidationErrors) -> Option<ValidationError> {
    let mut fields: Vec<_> = errs.errors().iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields.into_iter().find_map(|(field, kind)| {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => field_errors.first().map(|e| {
                let constraint = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| friendly_message(&e.code).to_string());
                ValidationError::new(path, constraint)
            }),
            ValidationErrorsKind::Struct(nested) => first_violation(&path, nested),
            ValidationErrorsKind::List(items) => items
                .iter()
                .find_map(|(idx, nested)| first_violation(&format!("{path}[{idx}]"), nested)),
        }
    })
}

/// Shape check every candidate record passes before it reaches the store.
pub fn validate_entity<T: Validate>(candidate: &T) -> Result<(), ValidationError> {
    candidate.validate().map_err(|errs| {
        first_violation("", &errs)
            .unwrap_or_else(|| ValidationError::new("_schema", "is invalid"))
    })
}

/// Booking requests also need a parseable schedule.
pub fn validate_booking(candidate: &CreateBookingModel) -> Result<DateTime<Utc>, ValidationError> {
    validate_entity(candidate)?;

    parse_scheduled_date(&candidate.scheduled_date)
        .ok_or_else(|| ValidationError::new("scheduled_date", "must be a valid timestamp"))
}
