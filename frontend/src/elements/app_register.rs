use std::rc::Rc;

use dominator::Dom;

use shared::types::Credentials;

use crate::config::CONFIG;
use crate::elements::auth_form::{auth_page, AuthKind};
use crate::error::ValidationError;
use crate::platform::Platform;
use crate::session::Session;

pub fn register_page<P: Platform>(session: &Rc<Session<P>>) -> Option<Dom> {
    auth_page(AuthKind::Register, session)
}

/// Checks run in order: presence, length, then confirmation.
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<Credentials, ValidationError> {
    if email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password.chars().count() < CONFIG.min_password_len {
        return Err(ValidationError::PasswordTooShort(CONFIG.min_password_len));
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(Credentials { email: email.to_string(), password: password.to_string() })
}
