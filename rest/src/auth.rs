//! Authorization header construction.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::error::RestResult;

/// Issuer claim stamped into signed secret-key tokens.
const TOKEN_ISSUER: &str = "iam-sdk-rs";

/// Lifetime of a signed secret-key token.
const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

#[derive(Serialize)]
struct Claims<'a> {
    aud: &'a str,
    iss: &'a str,
    exp: i64,
    iat: i64,
    nbf: i64,
}

/// Signs a short-lived JWT with the secret key, identifying the key by
/// `kid = secret_id`. The audience is the API group being addressed.
pub(crate) fn sign(secret_id: &str, secret_key: &str, audience: &str) -> RestResult<String> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        aud: audience,
        iss: TOKEN_ISSUER,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
        nbf: now,
    };

    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(secret_id.to_string());

    let token = jsonwebtoken::encode(
        &header,
        &claims,
        &EncodingKey::from_secret(secret_key.as_bytes()),
    )?;

    Ok(token)
}

/// Encodes basic-auth credentials for an `Authorization: Basic` header.
pub(crate) fn basic_auth(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}
