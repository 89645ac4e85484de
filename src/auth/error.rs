use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Failures of the bearer-token authorization check.
///
/// Every variant surfaces as `401 Unauthorized`; the [`AuthError::code`] is
/// reported alongside the message so clients can tell the cases apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Authorization header in request headers is mandatory.")]
    MissingAuthorization,

    #[error("Authorization header must start with \"Bearer\".")]
    MissingBearer,

    #[error("Authorization header must have token.")]
    MissingToken,

    #[error("Authorization header must be a Bearer token.")]
    MissingBearerToken,

    #[error("Authorization malformed.")]
    AuthorizationMalformed,

    #[error("Token Expired.")]
    TokenExpired,

    #[error("Invalid claims. Please, check the audience and issuer.")]
    InvalidClaims,

    #[error("Unable to parse authentication token.")]
    UnableToParse,

    #[error("Unable to find the appropriate key.")]
    InvalidKey,

    #[error("Permission '{0}' not granted.")]
    Forbidden(String),
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AuthError::MissingBearer => "MISSING_BEARER",
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::MissingBearerToken => "MISSING_BEARER_TOKEN",
            AuthError::AuthorizationMalformed => "AUTHORIZATION_MALFORMED",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::InvalidClaims => "INVALID_CLAIMS",
            AuthError::UnableToParse => "UNABLE_TO_PARSE",
            AuthError::InvalidKey => "INVALID_KEY",
            AuthError::Forbidden(_) => "FORBIDDEN_PERMISSION",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::InvalidSubject
            | ErrorKind::ImmatureSignature
            | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidKeyFormat
            | ErrorKind::InvalidRsaKey(_)
            | ErrorKind::InvalidEcdsaKey => AuthError::InvalidKey,
            _ => AuthError::UnableToParse,
        }
    }
}
