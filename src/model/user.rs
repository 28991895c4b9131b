//! The signed-in traveller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Strings;

/// A signed-in user. Persisted as JSON in the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    /// The demo account every login signs in as.
    pub fn demo() -> Self {
        Self {
            id: "1".into(),
            name: "Abdelnassir Haroun".into(),
            email: "abdelnassir@example.com".into(),
            phone: "77777850".into(),
        }
    }

    /// A freshly registered account with a generated id.
    pub fn register(name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }
}

/// Nationality chosen at sign-up. Decides which identity document is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nationality {
    Djiboutian,
    Foreign,
}

/// Why a login or sign-up form was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("email and password are required")]
    MissingCredentials,

    #[error("name, phone, nationality, email and password are required")]
    MissingFields,

    #[error("a national ID number is required for Djiboutian travellers")]
    MissingIdNumber,

    #[error("a passport number is required for foreign travellers")]
    MissingPassport,
}

impl SignupError {
    pub fn message(self, s: &Strings) -> &'static str {
        match self {
            Self::MissingCredentials | Self::MissingFields => s.fill_required_fields,
            Self::MissingIdNumber => s.id_number_required,
            Self::MissingPassport => s.passport_required,
        }
    }
}

/// Login form. Any non-empty credentials sign in as [`User::demo`].
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn submit(&self) -> Result<User, SignupError> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(SignupError::MissingCredentials);
        }
        Ok(User::demo())
    }
}

/// Sign-up form. Submitting it yields the user to sign in once the OTP is verified.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub phone: String,
    pub nationality: Option<Nationality>,
    pub id_number: String,
    pub passport_number: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn submit(&self) -> Result<User, SignupError> {
        let Some(nationality) = self.nationality else {
            return Err(SignupError::MissingFields);
        };
        if [&self.full_name, &self.phone, &self.email]
            .into_iter()
            .any(|field| is_blank(field))
            || self.password.is_empty()
        {
            return Err(SignupError::MissingFields);
        }
        match nationality {
            Nationality::Djiboutian if is_blank(&self.id_number) => {
                Err(SignupError::MissingIdNumber)
            }
            Nationality::Foreign if is_blank(&self.passport_number) => {
                Err(SignupError::MissingPassport)
            }
            _ => Ok(User::register(&self.full_name, &self.email, &self.phone)),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_signup() -> SignupForm {
        SignupForm {
            full_name: "Amina Ali".into(),
            phone: "+253 77 12 34 56".into(),
            nationality: Some(Nationality::Djiboutian),
            id_number: "DJ-4471".into(),
            passport_number: String::new(),
            email: "amina@example.com".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn login_signs_in_demo_user() {
        let form = LoginForm {
            email: "someone@example.com".into(),
            password: "x".into(),
        };
        assert_eq!(form.submit().unwrap(), User::demo());
    }

    #[test]
    fn login_requires_credentials() {
        let form = LoginForm {
            email: "  ".into(),
            password: "x".into(),
        };
        assert_eq!(form.submit().unwrap_err(), SignupError::MissingCredentials);
    }

    #[test]
    fn signup_registers_new_user() {
        let user = complete_signup().submit().unwrap();
        assert_eq!(user.name, "Amina Ali");
        assert_eq!(user.email, "amina@example.com");
        assert_ne!(user.id, User::demo().id);
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn signup_requires_nationality() {
        let mut form = complete_signup();
        form.nationality = None;
        assert_eq!(form.submit().unwrap_err(), SignupError::MissingFields);
    }

    #[test]
    fn djiboutian_needs_id_number() {
        let mut form = complete_signup();
        form.id_number.clear();
        assert_eq!(form.submit().unwrap_err(), SignupError::MissingIdNumber);
    }

    #[test]
    fn foreigner_needs_passport_not_id() {
        let mut form = complete_signup();
        form.nationality = Some(Nationality::Foreign);
        form.id_number.clear();
        assert_eq!(form.submit().unwrap_err(), SignupError::MissingPassport);

        form.passport_number = "P123456".into();
        assert!(form.submit().is_ok());
    }
}
