use validator::ValidateEmail;

/// Decides whether an email address is well formed.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, address: &str) -> bool;
}

/// HTML5-style address check from the `validator` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEmailValidator;

impl EmailValidator for StandardEmailValidator {
    fn is_valid(&self, address: &str) -> bool {
        !address.trim().is_empty() && address.validate_email()
    }
}
