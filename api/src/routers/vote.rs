use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use rand::seq::SliceRandom;
use tower_cookies::Cookies;

use app::error::AppError;
use app::persistence::{
    candidates::list_candidates, competitions::get_competition_by_slug, votes::cast_ballot,
};
use app::state::AppState;
use models::params::ballot::SubmitBallotParams;

use crate::cookies::{ballot_token, has_voted, mark_voted};
use crate::extractor::{Json, Path};
use crate::models::response::{ApiErrorResponse, MessageResponse};
use crate::{error::ApiError, pages};

pub const THANKS: &str = "¡Gracias por votar!";

async fn vote_page_get(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let Some(competition) = get_competition_by_slug(&state.conn, &slug).await? else {
        return Ok((StatusCode::NOT_FOUND, Html(pages::not_found())).into_response());
    };

    let voted = has_voted(&cookies, &slug);
    if !voted {
        ballot_token(&cookies, &state.config.cookie_key, &slug);
    }

    let mut candidates = list_candidates(&state.conn, competition.id).await?;
    if competition.randomize_candidates {
        candidates.shuffle(&mut rand::rng());
    }

    Ok(Html(pages::vote(&competition, &candidates, voted)).into_response())
}

/// Submit a ballot of exactly three candidates.
#[utoipa::path(
    post,
    path = "/api/vote/{slug}",
    params(("slug" = String, Path, description = "Competition slug")),
    request_body = SubmitBallotParams,
    responses(
        (status = 200, description = "Ballot recorded", body = MessageResponse),
        (status = 400, description = "Invalid ballot or already voted", body = ApiErrorResponse),
        (status = 404, description = "Unknown competition", body = ApiErrorResponse),
    ),
    tag = "vote"
)]
pub async fn vote_post(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(slug): Path<String>,
    body: Result<Json<SubmitBallotParams>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let competition = get_competition_by_slug(&state.conn, &slug)
        .await?
        .ok_or(AppError::CompetitionNotFound)?;

    if has_voted(&cookies, &slug) {
        return Err(AppError::AlreadyVoted.into());
    }

    // An undecodable body carries no candidate ids.
    let params = match body {
        Ok(Json(params)) => params,
        Err(_) => SubmitBallotParams::default(),
    };

    let token = ballot_token(&cookies, &state.config.cookie_key, &slug);
    cast_ballot(
        &state.conn,
        &competition,
        params.candidate_ids.as_ref(),
        &token,
    )
    .await?;

    tracing::info!("Ballot recorded for {}", competition.slug);
    mark_voted(&cookies, &slug);

    Ok(Json(MessageResponse::success(THANKS)))
}

pub fn create_vote_router() -> Router<AppState> {
    Router::new()
        .route("/vote/{slug}", get(vote_page_get))
        .route("/api/vote/{slug}", post(vote_post))
}
