use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if password.trim().is_empty() {
        return Err(ApplicationError::validation(
            "password cannot consist of whitespace only",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("        ").is_err());
        assert!(validate_password("long enough").is_ok());
    }
}
