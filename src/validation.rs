use regex::Regex;

use crate::domain::Contact;
use crate::errors::AppError;

pub fn validate_full_name(name: &str) -> bool {
    // Anything non-empty is acceptable
    !name.is_empty()
}

pub fn validate_address(address: &str) -> bool {
    !address.is_empty()
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    // local part of word chars, dots and hyphens, then '@', a similar
    // domain part, and at least one word char after the final dot
    let re = Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$")?;
    Ok(re.is_match(email))
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // Ukrainian format: +380 followed by exactly 9 digits
    let re = Regex::new(r"^\+380\d{9}$")?;
    Ok(re.is_match(phone))
}

/// Runs every field check and collects a message per failing field.
/// An empty list means the submission is accepted.
pub fn validate_contact(contact: &Contact) -> Result<Vec<String>, AppError> {
    let mut errors = Vec::new();

    if !validate_full_name(&contact.full_name) {
        errors.push("Invalid full name".to_string());
    }
    if !validate_address(&contact.address) {
        errors.push("Invalid address".to_string());
    }
    if !validate_email(&contact.email)? {
        errors.push("Invalid email".to_string());
    }
    if !validate_phone(&contact.mobile_phone)? {
        errors.push("Invalid mobile phone".to_string());
    }
    if !validate_phone(&contact.home_phone)? {
        errors.push("Invalid home phone".to_string());
    }

    Ok(errors)
}
