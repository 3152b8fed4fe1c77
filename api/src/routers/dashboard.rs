use axum::{
    Router,
    extract::State,
    middleware::from_fn_with_state,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, post},
};
use tower_cookies::Cookies;

use app::error::AppError;
use app::persistence::{
    candidates::{create_candidate, delete_candidate, ranked_candidates},
    competitions::{competitions_with_candidates, get_competition, toggle_randomize},
    votes::reset_votes,
};
use app::state::AppState;
use models::params::candidate::CreateCandidateParams;
use models::schemas::candidate::{CandidateSchema, CreatedCandidateSchema};
use models::schemas::competition::{RandomizeSchema, StatsSchema};

use crate::extractor::{Json, Path, Valid};
use crate::middleware::auth::{is_admin, require_admin};
use crate::models::response::{ApiErrorResponse, MessageResponse, SuccessResponse};
use crate::{error::ApiError, pages};

pub const VOTES_RESET: &str = "Votos eliminados correctamente";

async fn dashboard_main_get(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, ApiError> {
    if !is_admin(&state, &cookies) {
        return Ok(Redirect::to("/dashboard").into_response());
    }

    let competitions = competitions_with_candidates(&state.conn).await?;
    Ok(Html(pages::dashboard(&competitions)).into_response())
}

/// Add a candidate to a competition.
#[utoipa::path(
    post,
    path = "/api/dashboard/candidate",
    request_body = CreateCandidateParams,
    responses(
        (status = 200, description = "Candidate created", body = CreatedCandidateSchema),
        (status = 400, description = "Invalid name", body = ApiErrorResponse),
        (status = 401, description = "Not logged in", body = ApiErrorResponse),
        (status = 404, description = "Unknown competition", body = ApiErrorResponse),
    ),
    tag = "dashboard"
)]
pub async fn candidate_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CreateCandidateParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate = create_candidate(&state.conn, params).await?;
    tracing::info!(
        "Added candidate {} to competition {}",
        candidate.name,
        candidate.competition_id
    );

    Ok(Json(CreatedCandidateSchema {
        success: true,
        candidate: CandidateSchema::from(candidate),
    }))
}

/// Delete a candidate together with its votes.
#[utoipa::path(
    delete,
    path = "/api/dashboard/candidate/{id}",
    params(("id" = i32, Path, description = "Candidate id")),
    responses(
        (status = 200, description = "Candidate deleted", body = SuccessResponse),
        (status = 401, description = "Not logged in", body = ApiErrorResponse),
        (status = 404, description = "Unknown candidate", body = ApiErrorResponse),
    ),
    tag = "dashboard"
)]
pub async fn candidate_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let removed_votes = delete_candidate(&state.conn, id)
        .await?
        .ok_or(AppError::CandidateNotFound)?;
    tracing::info!("Deleted candidate {} and {} votes", id, removed_votes);

    Ok(Json(SuccessResponse::ok()))
}

/// Flip whether the ballot shows candidates in random order.
#[utoipa::path(
    post,
    path = "/api/dashboard/competition/{id}/randomize",
    params(("id" = i32, Path, description = "Competition id")),
    responses(
        (status = 200, description = "New flag value", body = RandomizeSchema),
        (status = 401, description = "Not logged in", body = ApiErrorResponse),
        (status = 404, description = "Unknown competition", body = ApiErrorResponse),
    ),
    tag = "dashboard"
)]
pub async fn randomize_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let randomize = toggle_randomize(&state.conn, id)
        .await?
        .ok_or(AppError::CompetitionNotFound)?;

    Ok(Json(RandomizeSchema {
        success: true,
        randomize,
    }))
}

/// Live tally of a competition, most voted first.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats/{competition_id}",
    params(("competition_id" = i32, Path, description = "Competition id")),
    responses(
        (status = 200, description = "Vote counts", body = StatsSchema),
        (status = 401, description = "Not logged in", body = ApiErrorResponse),
        (status = 404, description = "Unknown competition", body = ApiErrorResponse),
    ),
    tag = "dashboard"
)]
pub async fn stats_get(
    State(state): State<AppState>,
    Path(competition_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let competition = get_competition(&state.conn, competition_id)
        .await?
        .ok_or(AppError::CompetitionNotFound)?;
    let candidates = ranked_candidates(&state.conn, competition.id).await?;

    Ok(Json(StatsSchema::new(competition, candidates)))
}

/// Delete every vote of a competition. Irreversible.
#[utoipa::path(
    post,
    path = "/api/dashboard/competition/{id}/reset-votes",
    params(("id" = i32, Path, description = "Competition id")),
    responses(
        (status = 200, description = "Votes deleted", body = MessageResponse),
        (status = 401, description = "Not logged in", body = ApiErrorResponse),
        (status = 404, description = "Unknown competition", body = ApiErrorResponse),
    ),
    tag = "dashboard"
)]
pub async fn reset_votes_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let competition = get_competition(&state.conn, id)
        .await?
        .ok_or(AppError::CompetitionNotFound)?;

    let removed = reset_votes(&state.conn, competition.id).await?;
    tracing::warn!("Reset {} votes of {}", removed, competition.name);

    Ok(Json(MessageResponse::success(VOTES_RESET)))
}

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard/main", get(dashboard_main_get))
}

/// Admin JSON API, mounted under `/api/dashboard`.
pub fn create_dashboard_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/candidate", post(candidate_post))
        .route("/candidate/{id}", delete(candidate_delete))
        .route("/competition/{id}/randomize", post(randomize_post))
        .route("/stats/{competition_id}", get(stats_get))
        .route("/competition/{id}/reset-votes", post(reset_votes_post))
        .route_layer(from_fn_with_state(state, require_admin))
}
