use crate::{
    modules::user::repository::{Role, User},
    types::JwtContext,
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Length of the `Bearer ` scheme prefix the verify endpoint strips.
pub const SCHEME_PREFIX_LEN: usize = 7;

#[derive(Debug, PartialEq)]
pub enum Error {
    FailedToIssueToken,
    InvalidToken,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: Role,
    pub iat: u64,
    pub exp: u64,
}

pub fn issue_token(jwt: &JwtContext, user: &User) -> Result<String> {
    let now = Utc::now().timestamp().max(0) as u64;
    let claims = Claims {
        sub: user.id.clone(),
        username: user.username.clone(),
        role: user.role,
        iat: now,
        exp: now + jwt.expiration_secs,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to issue token for user {}: {}", user.id, err);
        Error::FailedToIssueToken
    })
}

pub fn decode_token(jwt: &JwtContext, token: &str) -> Result<Claims> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|err| {
        tracing::debug!("Rejected token: {}", err);
        Error::InvalidToken
    })
}

pub fn validate_token(jwt: &JwtContext, token: &str) -> bool {
    decode_token(jwt, token).is_ok()
}

/// Caller identity handed to the workflows; they never see the credential itself.
pub fn resolve_caller_id(claims: &Claims) -> String {
    claims.sub.clone()
}

/// Drops the first [`SCHEME_PREFIX_LEN`] bytes without looking at them.
///
/// Headers too short to hold the prefix yield `None` rather than panicking.
pub fn strip_scheme_prefix(header: &str) -> Option<&str> {
    header.get(SCHEME_PREFIX_LEN..)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn jwt() -> JwtContext {
        JwtContext {
            secret: "test-secret".to_string(),
            expiration_secs: 3600,
        }
    }

    fn user() -> User {
        User {
            id: "U1".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            role: Role::Owner,
            created_at: NaiveDateTime::default(),
            updated_at: None,
        }
    }

    #[test]
    fn issued_token_decodes_to_caller() {
        let token = issue_token(&jwt(), &user()).unwrap();
        let claims = decode_token(&jwt(), &token).unwrap();

        assert_eq!(resolve_caller_id(&claims), "U1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::Owner);
        assert!(validate_token(&jwt(), &token));
    }

    #[test]
    fn token_signed_with_another_secret_is_invalid() {
        let other = JwtContext {
            secret: "another-secret".to_string(),
            expiration_secs: 3600,
        };
        let token = issue_token(&other, &user()).unwrap();

        assert_eq!(decode_token(&jwt(), &token), Err(Error::InvalidToken));
    }

    #[test]
    fn expired_token_is_invalid() {
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: "U1".to_string(),
            username: "alice".to_string(),
            role: Role::Owner,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(!validate_token(&jwt(), &token));
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(!validate_token(&jwt(), "not-a-jwt"));
        assert!(!validate_token(&jwt(), ""));
    }

    #[test]
    fn strips_prefix_without_inspecting_it() {
        assert_eq!(strip_scheme_prefix("Bearer abc.def"), Some("abc.def"));
        assert_eq!(strip_scheme_prefix("Token: abc"), Some("abc"));
        assert_eq!(strip_scheme_prefix("Bearer "), Some(""));
    }

    #[test]
    fn short_header_has_nothing_to_strip() {
        assert_eq!(strip_scheme_prefix(""), None);
        assert_eq!(strip_scheme_prefix("Bear"), None);
        assert_eq!(strip_scheme_prefix("Bearer"), None);
    }

    #[test]
    fn prefix_ending_inside_a_multibyte_char_is_rejected() {
        // 'é' occupies bytes 6..8, so byte 7 is not a char boundary.
        assert_eq!(strip_scheme_prefix("Bearer\u{e9} token"), None);
    }
}
