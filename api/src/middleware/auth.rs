use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use app::state::AppState;

use crate::{cookies::admin_credential, error::ApiError};

/// Whether the request carries a valid admin credential.
pub fn is_admin(state: &AppState, cookies: &Cookies) -> bool {
    let credential = admin_credential(cookies);
    state.auth.is_authenticated(credential.as_deref())
}

/// Guards the admin JSON API; anonymous requests get a 401.
pub async fn require_admin(
    State(state): State<AppState>,
    cookies: Cookies,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !is_admin(&state, &cookies) {
        tracing::debug!("Rejected unauthenticated request to {}", req.uri().path());
        return Err(ApiError::unauthorized());
    }

    Ok(next.run(req).await)
}
