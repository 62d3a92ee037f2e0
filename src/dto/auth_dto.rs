use serde::Deserialize;
use validator::Validate;

use crate::models::user::Role;

pub const REQUIRED_FIELDS: &str = "All fields are required.";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(length(max = 64, message = "Username must be at most 64 characters."))]
    pub username: String,
    #[serde(default)]
    #[validate(
        email(message = "Please enter a valid email address."),
        length(max = 120, message = "Email must be at most 120 characters.")
    )]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "Passwords do not match."))]
    pub confirm_password: String,
    #[serde(default)]
    pub role: String,
}

/// Registration input that passed every check.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    pub fn into_new_user(self) -> Result<NewUser, String> {
        let form = RegisterForm {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self
        };

        if [
            &form.username,
            &form.email,
            &form.password,
            &form.confirm_password,
            &form.role,
        ]
        .iter()
        .any(|v| v.is_empty())
        {
            return Err(REQUIRED_FIELDS.to_string());
        }
        if let Some(message) = crate::utils::validation::first_error(
            &form,
            &["confirm_password", "username", "email"],
        ) {
            return Err(message);
        }
        let role: Role = form
            .role
            .parse()
            .map_err(|_| "Invalid role selected.".to_string())?;

        Ok(NewUser {
            username: form.username,
            email: form.email,
            password: form.password,
            role,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
