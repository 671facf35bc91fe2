//! Client-side validation for the signup form
//!
//! Only two rules are enforced before the signup callback runs: the
//! password confirmation must match and the terms must be accepted.
//! Everything else (required fields, email shape) is left to the browser.

/// Reasons a signup submission is blocked
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,
}

/// Values collected by the signup form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupSubmission {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
}

impl SignupSubmission {
    /// Check the submission, reporting the first failing rule.
    ///
    /// The password check runs before the terms check.
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }

        if !self.agreed_to_terms {
            return Err(SignupError::TermsNotAccepted);
        }

        Ok(())
    }

    /// Validate and consume the submission, yielding the
    /// `(email, password, name)` arguments for the signup callback.
    pub fn into_signup_args(self) -> Result<(String, String, String), SignupError> {
        self.validate()?;
        Ok((self.email, self.password, self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> SignupSubmission {
        SignupSubmission {
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            agreed_to_terms: true,
        }
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(submission().validate(), Ok(()));
    }

    #[test]
    fn test_mismatched_passwords_blocked() {
        let mut form = submission();
        form.confirm_password = "hunter23".to_string();
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_terms_required() {
        let mut form = submission();
        form.agreed_to_terms = false;
        assert_eq!(form.validate(), Err(SignupError::TermsNotAccepted));
    }

    #[test]
    fn test_mismatch_reported_before_terms() {
        let mut form = submission();
        form.confirm_password = String::new();
        form.agreed_to_terms = false;
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_password_comparison_is_exact() {
        let mut form = submission();
        form.confirm_password = "hunter22 ".to_string();
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_signup_args_order() {
        assert_eq!(
            submission().into_signup_args(),
            Ok((
                "jane.smith@example.com".to_string(),
                "hunter22".to_string(),
                "Jane Smith".to_string(),
            ))
        );
    }

    #[test]
    fn test_blocked_submission_yields_no_args() {
        let mut mismatch = submission();
        mismatch.confirm_password = "other".to_string();
        assert_eq!(
            mismatch.into_signup_args(),
            Err(SignupError::PasswordMismatch)
        );

        let mut no_terms = submission();
        no_terms.agreed_to_terms = false;
        assert_eq!(
            no_terms.into_signup_args(),
            Err(SignupError::TermsNotAccepted)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SignupError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            SignupError::TermsNotAccepted.to_string(),
            "Please agree to the terms and conditions"
        );
    }
}
