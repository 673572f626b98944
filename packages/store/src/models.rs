//! # Credential model
//!
//! [`Credential`] is the pair handed back by the remote `/auth/login` endpoint
//! (`{ "token": "...", "email": "..." }`) and persisted by
//! [`crate::SessionStore`]. The token is opaque to the client; it is attached
//! verbatim to every authorized request.

use serde::{Deserialize, Serialize};

/// An authenticated administrator session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Opaque session token issued by the server.
    pub token: String,
    /// Identity the token was issued for.
    pub email: String,
}

impl Credential {
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
        }
    }
}
