//! JWT-based caller-identity extractor for axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pressroom_core::actor::Actor;
use pressroom_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller identity, extracted from an optional JWT Bearer token.
///
/// Unlike a strict auth guard, every endpoint accepts anonymous callers:
/// a request without an `Authorization` header resolves to
/// [`Actor::anonymous`], and role checks happen in the service layer. A
/// header that is present but malformed or carries an invalid token is
/// still rejected with 401, so a caller who *tried* to authenticate is
/// never silently downgraded.
///
/// ```ignore
/// async fn my_handler(CurrentActor(actor): CurrentActor) -> AppResult<Json<()>> {
///     tracing::info!(actor_id = ?actor.id, role = %actor.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

impl FromRequestParts<AppState> for CurrentActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
        else {
            return Ok(CurrentActor(Actor::anonymous()));
        };

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(CurrentActor(Actor {
            id: Some(claims.sub),
            role: claims.role,
        }))
    }
}
