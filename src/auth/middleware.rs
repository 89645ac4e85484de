use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{
    app_state::AppState,
    auth::{AuthError, Principal},
    errors::AppError,
    middleware::get_request_id,
};

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingAuthorization)?;
    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts.as_slice() {
        [scheme, ..] if scheme.eq_ignore_ascii_case("bearer") => match parts.len() {
            1 => Err(AuthError::MissingToken),
            2 => Ok(parts[1]),
            _ => Err(AuthError::MissingBearerToken),
        },
        _ => Err(AuthError::MissingBearer),
    }
}

fn authenticate(req: &HttpRequest) -> Result<Principal, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))?;

    let header = match req.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| AuthError::AuthorizationMalformed)?),
        None => None,
    };

    let token = bearer_token(header)?;
    Ok(state.verifier.verify(token)?)
}

/// Extractor for routes that need a verified bearer token.
pub struct AuthenticatedUser(pub Principal);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).inspect_err(|err| {
            let request_id = get_request_id(req)
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            log::warn!(
                "[{}] {} {} rejected: {}",
                request_id,
                req.method(),
                req.path(),
                err
            );
        });

        ready(result.map(AuthenticatedUser))
    }
}
