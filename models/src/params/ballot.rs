use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Body of a ballot submission.
///
/// `candidate_ids` is kept as raw JSON so that a missing field, a non-list
/// value and a list of the wrong shape can each be reported with their own
/// message instead of a generic decoding failure.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct SubmitBallotParams {
    #[serde(default)]
    #[schema(value_type = Option<Vec<i32>>, example = json!([1, 2, 3]))]
    pub candidate_ids: Option<Value>,
}
