use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_cookies::Cookies;
use utoipa::OpenApi;

use app::persistence::competitions::list_competitions;
use app::state::AppState;

use crate::{error::ApiError, middleware::auth::is_admin, openapi::ApiDoc, pages};

async fn index_get(State(state): State<AppState>, cookies: Cookies) -> Result<Response, ApiError> {
    if !is_admin(&state, &cookies) {
        return Ok(Redirect::to("/login").into_response());
    }

    let competitions = list_competitions(&state.conn).await?;
    Ok(Html(pages::index(&competitions)).into_response())
}

async fn openapi_get() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

pub fn create_root_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_get))
        .route("/api-docs/openapi.json", get(openapi_get))
}
