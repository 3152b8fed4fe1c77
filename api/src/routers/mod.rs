use axum::Router;

pub mod auth;
pub mod dashboard;
pub mod root;
pub mod vote;

use app::state::AppState;
use auth::create_auth_router;
use dashboard::{create_dashboard_api_router, create_dashboard_router};
use root::create_root_router;
use vote::create_vote_router;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_root_router())
        .merge(create_auth_router())
        .merge(create_vote_router())
        .merge(create_dashboard_router())
        .nest("/api/dashboard", create_dashboard_api_router(state.clone()))
        .with_state(state)
}
