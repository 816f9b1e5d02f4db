//! User — a household member who can log in.

use serde::{Deserialize, Serialize};

use crate::error::{HomeSphereError, ValidationError};
use crate::id::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub login_name: String,
    #[serde(skip_serializing, default)]
    pub login_password: String,
    pub user_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when `login_name` is empty.
    pub fn validate(&self) -> Result<(), HomeSphereError> {
        if self.login_name.is_empty() {
            return Err(ValidationError::EmptyLoginName.into());
        }
        Ok(())
    }

    #[must_use]
    pub fn matches_credentials(&self, login_name: &str, password: &str) -> bool {
        self.login_name == login_name && self.login_password == password
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} <{}>", self.id, self.user_name, self.email)?;
        if self.is_admin {
            f.write_str(" [admin]")?;
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    login_name: Option<String>,
    login_password: Option<String>,
    user_name: Option<String>,
    email: Option<String>,
    is_admin: bool,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn login_name(mut self, login_name: impl Into<String>) -> Self {
        self.login_name = Some(login_name.into());
        self
    }

    #[must_use]
    pub fn login_password(mut self, password: impl Into<String>) -> Self {
        self.login_password = Some(password.into());
        self
    }

    #[must_use]
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] if `login_name` is missing or empty.
    pub fn build(self) -> Result<User, HomeSphereError> {
        let user = User {
            id: self.id.unwrap_or_default(),
            login_name: self.login_name.unwrap_or_default(),
            login_password: self.login_password.unwrap_or_default(),
            user_name: self.user_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            is_admin: self.is_admin,
        };
        user.validate()?;
        Ok(user)
    }
}
