//! Password hashing and bearer tokens.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{Role, User};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("failed to issue token: {0}")]
    Issue(#[source] jsonwebtoken::errors::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

const DUMMY_PASSWORD: &str = "no such user";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Hashes passwords and issues/validates HS256 tokens.
#[derive(Clone)]
pub struct Auth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_ttl: Duration,
    bcrypt_cost: u32,
    /// Verified against when the user does not exist, at the same cost.
    dummy_hash: Arc<str>,
}

impl Auth {
    /// Fails when `bcrypt_cost` is outside the range bcrypt accepts.
    pub fn new(secret: &str, token_ttl: Duration, bcrypt_cost: u32) -> Result<Self, AuthError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, bcrypt_cost)?;
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl,
            bcrypt_cost,
            dummy_hash: dummy_hash.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AuthError> {
        Self::new(
            &config.secret_key,
            Duration::hours(config.token_ttl_hours),
            config.bcrypt_cost,
        )
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        Ok(bcrypt::hash(password, self.bcrypt_cost)?)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        // A malformed stored hash is treated like a wrong password.
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    /// Checks a login attempt. Without a stored hash the password is still
    /// run through bcrypt so unknown usernames cost as much as wrong passwords.
    pub fn verify_login(&self, password: &str, stored_hash: Option<&str>) -> bool {
        match stored_hash {
            Some(hash) => self.verify_password(password, hash),
            None => {
                let _ = bcrypt::verify(password, &self.dummy_hash);
                false
            }
        }
    }

    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(AuthError::Issue)
    }

    /// Validates a token, accepting it with or without the `Bearer ` prefix.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(AuthError::InvalidToken)?;
        Ok(data.claims)
    }
}

/// The caller identified by a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    Auth: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .ok_or(AuthError::MissingToken)?;

        let auth = Auth::from_ref(state);
        let claims = auth.verify_token(header)?;
        Ok(AuthUser(claims))
    }
}
