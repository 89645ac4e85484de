use std::collections::HashMap;

use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::{claims::TokenClaims, AuthError, Principal},
    config::Config,
    errors::{AppError, AppResult},
};

/// Turns an opaque bearer token into the caller's [`Principal`].
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

enum SigningKeys {
    /// HS256 with a shared secret.
    Shared(DecodingKey),
    /// RS256 keys from the issuer's JWKS document, indexed by `kid`.
    KeySet(HashMap<String, DecodingKey>),
}

/// Validates signature, expiry, audience and issuer of a JWT.
pub struct JwtVerifier {
    keys: SigningKeys,
    validation: Validation,
}

impl JwtVerifier {
    pub fn with_secret(secret: &SecretString, audience: &str, issuer: Option<&str>) -> Self {
        let key = DecodingKey::from_secret(secret.expose_secret().as_bytes());

        Self {
            keys: SigningKeys::Shared(key),
            validation: validation(Algorithm::HS256, audience, issuer),
        }
    }

    pub fn with_key_set(jwks: &JwkSet, audience: &str, issuer: &str) -> Self {
        let keys = jwks
            .keys
            .iter()
            .filter_map(|jwk| {
                let kid = jwk.common.key_id.clone()?;
                match DecodingKey::from_jwk(jwk) {
                    Ok(key) => Some((kid, key)),
                    Err(e) => {
                        log::warn!("Skipping unusable signing key '{}': {}", kid, e);
                        None
                    }
                }
            })
            .collect();

        Self {
            keys: SigningKeys::KeySet(keys),
            validation: validation(Algorithm::RS256, audience, Some(issuer)),
        }
    }

    /// Downloads `https://<domain>/.well-known/jwks.json` once.
    pub async fn fetch_key_set(domain: &str, audience: &str, issuer: &str) -> AppResult<Self> {
        let url = format!("https://{}/.well-known/jwks.json", domain);
        log::info!("Fetching token signing keys from {}", url);

        let jwks = reqwest::get(&url)
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;

        if jwks.keys.is_empty() {
            return Err(AppError::InternalError(format!(
                "No signing keys published at {}",
                url
            )));
        }

        log::info!("Loaded {} signing key(s)", jwks.keys.len());
        Ok(Self::with_key_set(&jwks, audience, issuer))
    }

    pub async fn from_config(config: &Config) -> AppResult<Self> {
        let issuer = config.issuer();

        match (&config.auth_domain, &config.jwt_secret) {
            (Some(domain), _) => {
                let issuer = issuer.unwrap_or_else(|| format!("https://{}/", domain));
                Self::fetch_key_set(domain, &config.api_audience, &issuer).await
            }
            (None, Some(secret)) => {
                log::warn!("AUTH_DOMAIN not set, verifying HS256 tokens with JWT_SECRET");
                Ok(Self::with_secret(secret, &config.api_audience, issuer.as_deref()))
            }
            (None, None) => Err(AppError::InternalError(
                "No token key source configured; set AUTH_DOMAIN or JWT_SECRET".to_string(),
            )),
        }
    }

    fn decoding_key(&self, token: &str) -> Result<&DecodingKey, AuthError> {
        match &self.keys {
            SigningKeys::Shared(key) => Ok(key),
            SigningKeys::KeySet(keys) => {
                let header = decode_header(token).map_err(|_| AuthError::UnableToParse)?;
                let kid = header.kid.ok_or(AuthError::AuthorizationMalformed)?;
                keys.get(&kid).ok_or(AuthError::InvalidKey)
            }
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let key = self.decoding_key(token)?;
        let data = decode::<TokenClaims>(token, key, &self.validation)?;
        Principal::try_from(data.claims)
    }
}

fn validation(algorithm: Algorithm, audience: &str, issuer: Option<&str>) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.set_audience(&[audience]);
    if let Some(issuer) = issuer {
        validation.set_issuer(&[issuer]);
    }
    validation
}
