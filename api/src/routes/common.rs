use validator::ValidationErrors;

/// Flattens `validator` errors into a single human-readable message with
/// field-level detail, e.g. `"Validation failed: title: title is required"`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            parts.push(format!("{field}: {message}"));
        }
    }

    parts.sort();
    format!("Validation failed: {}", parts.join(", "))
}
