use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, Debug, ToSchema)]
pub struct CreateCandidateParams {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub competition_id: i32,
}
