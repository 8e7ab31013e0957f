//! Bearer Token Management
//!
//! This module builds and verifies the signed bearer tokens issued to
//! authenticated accounts. Tokens are HMAC-SHA256 JWTs whose signing
//! parameters come from the injected [`JwtConfig`]; nothing here reads the
//! environment.
//!
//! # Claims
//!
//! | Claim | Content |
//! |---|---|
//! | `sub` | fixed subject from configuration |
//! | `iss` / `aud` | issuer and audience from configuration, validated on decode |
//! | `jti` | fresh UUID per token |
//! | `iat` / `exp` | issue time and expiry (issue time + configured TTL) |
//! | `id` / `email` / `role` | the authenticated account |
//!
//! Verification checks signature, expiry, issuer, and audience; role
//! interpretation is left to the caller.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::config::JwtConfig;
use crate::users::UserInfo;

/// JWT claims carried by every issued token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Fixed subject identifier from configuration
    pub sub: String,
    /// Issuer from configuration
    pub iss: String,
    /// Audience from configuration
    pub aud: String,
    /// Fresh random token id
    pub jti: String,
    /// Issue time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Account id
    pub id: i64,
    /// Account email
    pub email: String,
    /// Account role, absent until an administrator assigns one
    #[serde(default)]
    pub role: Option<String>,
}

/// Create a signed bearer token for an account
///
/// # Arguments
/// * `config` - Signing parameters (secret, issuer, audience, subject, TTL)
/// * `user` - The authenticated account
///
/// # Returns
/// Encoded JWT string
pub fn create_token(
    config: &JwtConfig,
    user: &UserInfo,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: config.subject.clone(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now,
        exp: now + config.ttl_secs as i64,
        id: user.user_id,
        email: user.email.clone(),
        role: user.role.clone(),
    };

    let key = EncodingKey::from_secret(config.secret.as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a bearer token
///
/// Validates signature, expiry, issuer, and audience against the same
/// configuration that signed the token.
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(
    config: &JwtConfig,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());

    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret-key-0123456789abcdef".to_string(),
            issuer: "orgcore-test".to_string(),
            audience: "orgcore-test-clients".to_string(),
            subject: "orgcore-test-auth".to_string(),
            ttl_secs: 3600,
        }
    }

    fn test_user() -> UserInfo {
        UserInfo {
            user_id: 42,
            email: "user@example.com".to_string(),
            password: "$2b$12$hash".to_string(),
            role: Some("Admin".to_string()),
        }
    }

    #[test]
    fn test_round_trip_preserves_account_claims() {
        let config = test_config();
        let token = create_token(&config, &test_user()).unwrap();

        let claims = verify_token(&config, &token).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.role.as_deref(), Some("Admin"));
        assert_eq!(claims.sub, "orgcore-test-auth");
        assert_eq!(claims.iss, "orgcore-test");
        assert_eq!(claims.aud, "orgcore-test-clients");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_each_token_gets_fresh_jti() {
        let config = test_config();
        let user = test_user();

        let first = verify_token(&config, &create_token(&config, &user).unwrap()).unwrap();
        let second = verify_token(&config, &create_token(&config, &user).unwrap()).unwrap();
        assert_ne!(first.jti, second.jti);
        Uuid::parse_str(&first.jti).unwrap();
    }

    #[test]
    fn test_null_role_survives_round_trip() {
        let config = test_config();
        let user = UserInfo {
            role: None,
            ..test_user()
        };

        let claims = verify_token(&config, &create_token(&config, &user).unwrap()).unwrap();
        assert_eq!(claims.role, None);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(verify_token(&test_config(), "not.a.token").is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let token = create_token(&config, &test_user()).unwrap();

        let other = JwtConfig {
            secret: "a-completely-different-secret-key".to_string(),
            ..config
        };
        let err = verify_token(&other, &token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let config = test_config();
        let issued_elsewhere = JwtConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        };
        let token = create_token(&issued_elsewhere, &test_user()).unwrap();

        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: config.subject.clone(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now - 7200,
            exp: now - 3600,
            id: 42,
            email: "user@example.com".to_string(),
            role: None,
        };
        let key = EncodingKey::from_secret(config.secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let err = verify_token(&config, &token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }
}
