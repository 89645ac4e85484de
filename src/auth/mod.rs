pub mod claims;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod utils;

pub use claims::{Permission, Principal, TokenClaims};
pub use error::AuthError;
pub use jwt::{JwtVerifier, TokenVerifier};
pub use middleware::{bearer_token, AuthenticatedUser};
pub use utils::require_permission;
