use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::candidates;

/// A candidate together with its live vote count.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct CandidateSchema {
    pub id: i32,
    pub name: String,
    pub votes: i64,
}

impl CandidateSchema {
    pub fn with_votes(candidate: candidates::Model, votes: i64) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            votes,
        }
    }
}

impl From<candidates::Model> for CandidateSchema {
    fn from(candidate: candidates::Model) -> Self {
        Self::with_votes(candidate, 0)
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CreatedCandidateSchema {
    pub success: bool,
    pub candidate: CandidateSchema,
}
