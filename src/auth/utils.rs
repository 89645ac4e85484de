use crate::{
    auth::{AuthError, Permission, Principal},
    errors::AppResult,
};

pub fn require_permission(principal: &Principal, permission: Permission) -> AppResult<()> {
    if !principal.has(permission) {
        log::warn!(
            "Subject '{}' lacks permission '{}'",
            principal.subject,
            permission
        );
        return Err(AuthError::Forbidden(permission.to_string()).into());
    }
    Ok(())
}
