//! Request field validation shared by the parameter conversions.

use crate::server::error::AppError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Collects the names of required fields that were absent or blank.
///
/// Each accessor returns a placeholder for missing values so conversions can keep
/// reading the remaining fields; `finish` then reports every missing name at once.
///
/// ```rust,ignore
/// let mut required = RequiredFields::new();
/// let name = required.text("name", dto.name);
/// let year = required.value("year", dto.year);
/// required.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<String>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed text value; blank counts as missing.
    pub fn text(&mut self, name: &str, value: Option<String>) -> String {
        match optional_text(value) {
            Some(value) => value,
            None => {
                self.missing.push(name.to_string());
                String::new()
            }
        }
    }

    pub fn value<T: Default>(&mut self, name: &str, value: Option<T>) -> T {
        match value {
            Some(value) => value,
            None => {
                self.missing.push(name.to_string());
                T::default()
            }
        }
    }

    /// # Returns
    /// - `Ok(())` - Every required field was present
    /// - `Err(AppError::MissingFields)` - Names of the missing fields, in request order
    pub fn finish(self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingFields(self.missing))
        }
    }
}

/// Trims text and maps blank strings to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Emails are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Rejects addresses without a local part and domain around an `@`.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::BadRequest("Invalid email address".to_string())),
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
