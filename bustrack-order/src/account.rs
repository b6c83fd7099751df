//! Mock registration and login. No credentials are stored or checked.

use std::time::Duration;
use bustrack_core::{Navigation, Page, Session};
use bustrack_shared::{Masked, Notification};
use serde::{Deserialize, Serialize};
use crate::{OrderError, OrderResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Masked<String>,
    #[serde(default)]
    pub phone: Masked<String>,
    #[serde(default)]
    pub password: Masked<String>,
    #[serde(default)]
    pub confirm_password: Masked<String>,
    #[serde(default)]
    pub agreed_to_terms: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> OrderResult<()> {
        let required = [
            ("full name", self.full_name.as_str()),
            ("email", self.email.expose().as_str()),
            ("phone", self.phone.expose().as_str()),
            ("password", self.password.expose().as_str()),
            ("password confirmation", self.confirm_password.expose().as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(OrderError::MissingField(*field));
        }

        if self.password != self.confirm_password {
            return Err(OrderError::PasswordMismatch);
        }
        if !self.agreed_to_terms {
            return Err(OrderError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: Masked<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Registration {
    pub notification: Notification,
    #[serde(flatten)]
    pub navigation: Navigation,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Login {
    pub session: Session,
    #[serde(flatten)]
    pub navigation: Navigation,
}

pub struct AccountService {
    register_delay: Duration,
}

impl AccountService {
    pub fn new(register_delay: Duration) -> Self {
        Self { register_delay }
    }

    pub async fn register(&self, form: &RegistrationForm) -> OrderResult<Registration> {
        if let Err(e) = form.validate() {
            tracing::warn!("Registration rejected: {}", e);
            return Err(e);
        }

        tokio::time::sleep(self.register_delay).await;
        tracing::info!("Registered {} <{:?}>", form.full_name, form.email);

        Ok(Registration {
            notification: Notification::success("Registration successful! You can now log in."),
            navigation: Navigation::to(Page::Login),
        })
    }

    /// Any non-empty pair of credentials logs in.
    pub fn login(&self, form: &LoginForm) -> OrderResult<Login> {
        if form.email.trim().is_empty() {
            return Err(OrderError::MissingField("email"));
        }
        if form.password.expose().is_empty() {
            return Err(OrderError::MissingField("password"));
        }

        Ok(Login {
            session: Session::member(),
            navigation: Navigation::to(Page::Home),
        })
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            full_name: "John Doe".to_string(),
            email: Masked::from("john@example.com"),
            phone: Masked::from("(123) 456-7890"),
            password: Masked::from("hunter22"),
            confirm_password: Masked::from("hunter22"),
            agreed_to_terms: true,
        }
    }

    #[tokio::test]
    async fn test_register_redirects_to_login() {
        let registration = AccountService::new(Duration::ZERO).register(&form()).await.unwrap();
        assert_eq!(registration.navigation.location, "/login");
        assert_eq!(registration.notification.message, "Registration successful! You can now log in.");
    }

    #[test]
    fn test_password_mismatch_checked_before_terms() {
        let mut mismatch = form();
        mismatch.confirm_password = Masked::from("hunter23");
        mismatch.agreed_to_terms = false;

        let err = mismatch.validate().unwrap_err();
        assert_eq!(err, OrderError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords don't match!");
    }

    #[test]
    fn test_terms_required() {
        let mut no_terms = form();
        no_terms.agreed_to_terms = false;
        assert_eq!(no_terms.validate(), Err(OrderError::TermsNotAccepted));
    }

    #[test]
    fn test_login_is_mocked() {
        let service = AccountService::default();
        let login = service
            .login(&LoginForm { email: "a@b.c".to_string(), password: Masked::from("x") })
            .unwrap();
        assert_eq!(login.session, Session::member());
        assert_eq!(login.navigation.location, "/");

        assert!(service.login(&LoginForm::default()).is_err());
    }
}
