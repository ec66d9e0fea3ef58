//! Bearer token generation and hashing.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

/// Bearer token prefix.
pub const API_TOKEN_PREFIX: &str = "of";

/// Number of random bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

const API_TOKEN_SECRET_HEX_CHARS: usize = API_TOKEN_SECRET_BYTES * 2;

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token secret encoding is invalid")]
    InvalidSecretEncoding,
}

/// A raw bearer token. Only ever shown to its owner once.
#[derive(Clone)]
pub struct ApiTokenSecret {
    token: String,
}

impl ApiTokenSecret {
    /// Generate a fresh token from OS entropy.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; API_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut bytes);

        let token = format!("{API_TOKEN_PREFIX}_{}", hex::encode(bytes));

        bytes.zeroize();

        Self { token }
    }

    /// Validate the shape of a presented bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is wrong or the body is not 64 hex characters.
    pub fn parse(token: &str) -> Result<Self, ApiTokenError> {
        let (prefix, body) = token.split_once('_').ok_or(ApiTokenError::InvalidFormat)?;

        if prefix != API_TOKEN_PREFIX {
            return Err(ApiTokenError::InvalidFormat);
        }

        if body.len() != API_TOKEN_SECRET_HEX_CHARS {
            return Err(ApiTokenError::InvalidSecretEncoding);
        }

        hex::decode(body).map_err(|_decode| ApiTokenError::InvalidSecretEncoding)?;

        Ok(Self {
            token: token.to_string(),
        })
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.token
    }

    /// Lowercase hex SHA-256 of the token, the only form kept in storage.
    #[must_use]
    pub fn hash(&self) -> String {
        hash_api_token(&self.token)
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiTokenSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.token.zeroize();
    }
}

#[must_use]
pub fn hash_api_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
