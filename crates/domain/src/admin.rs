use crate::shared::entity::{Entity, ID};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Unable to hash password: {0}")]
    Hash(String),
}

/// Administrator allowed to sign in to the dashboard.
///
/// Only the argon2 PHC string of the password is ever kept.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: ID,
    pub username: String,
    pub password_hash: String,
}

impl Admin {
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self, PasswordError> {
        Ok(Self {
            id: Default::default(),
            username: username.into(),
            password_hash: hash_password(password)?,
        })
    }

    /// A hash that cannot be parsed never matches
    pub fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl Entity for Admin {
    fn id(&self) -> &ID {
        &self.id
    }
}

fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}
