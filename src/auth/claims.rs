use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::auth::AuthError;

/// Claims read from a verified token. Audience, issuer and expiry are
/// checked by the verifier and are not kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // Subject (user id at the issuer)
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// Actions gated behind a permission claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    PostQuestion,
    PatchQuestion,
    DeleteQuestion,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::PostQuestion => "post:question",
            Permission::PatchQuestion => "patch:question",
            Permission::DeleteQuestion => "delete:question",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated caller: who they are and what they may do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    pub permissions: HashSet<String>,
}

impl Principal {
    pub fn new<I, S>(subject: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subject: subject.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(permission.as_str())
    }
}

impl TryFrom<TokenClaims> for Principal {
    type Error = AuthError;

    fn try_from(claims: TokenClaims) -> Result<Self, Self::Error> {
        let permissions = claims.permissions.ok_or(AuthError::InvalidClaims)?;
        Ok(Principal::new(claims.sub, permissions))
    }
}
