use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Podium API",
        version = "0.1.0",
        description = "Ballot submission and admin endpoints for three-choice competitions",
        license(name = "MIT"),
    ),
    paths(
        crate::routers::vote::vote_post,
        crate::routers::dashboard::candidate_post,
        crate::routers::dashboard::candidate_delete,
        crate::routers::dashboard::randomize_post,
        crate::routers::dashboard::stats_get,
        crate::routers::dashboard::reset_votes_post,
    ),
    components(
        schemas(
            crate::models::response::ApiErrorResponse,
            crate::models::response::SuccessResponse,
            crate::models::response::MessageResponse,
            models::params::ballot::SubmitBallotParams,
            models::params::candidate::CreateCandidateParams,
            models::schemas::candidate::CandidateSchema,
            models::schemas::candidate::CreatedCandidateSchema,
            models::schemas::competition::StatsSchema,
            models::schemas::competition::RandomizeSchema,
        )
    ),
    tags(
        (name = "vote", description = "Public ballot submission"),
        (name = "dashboard", description = "Admin endpoints, require the admin_auth cookie"),
    )
)]
pub struct ApiDoc;
