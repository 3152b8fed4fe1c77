use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::competitions;

use super::candidate::CandidateSchema;

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct CompetitionSchema {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub randomize_candidates: bool,
    pub candidates: Vec<CandidateSchema>,
}

impl CompetitionSchema {
    pub fn new(competition: competitions::Model, candidates: Vec<CandidateSchema>) -> Self {
        Self {
            id: competition.id,
            name: competition.name,
            slug: competition.slug,
            randomize_candidates: competition.randomize_candidates,
            candidates,
        }
    }

    pub fn total_votes(&self) -> i64 {
        self.candidates.iter().map(|c| c.votes).sum()
    }
}

/// Live tally for one competition, candidates ordered by votes descending.
#[derive(Serialize, Debug, ToSchema)]
pub struct StatsSchema {
    pub competition: String,
    pub candidates: Vec<CandidateSchema>,
    pub total_votes: i64,
}

impl StatsSchema {
    pub fn new(competition: competitions::Model, candidates: Vec<CandidateSchema>) -> Self {
        let total_votes = candidates.iter().map(|c| c.votes).sum();
        Self {
            competition: competition.name,
            candidates,
            total_votes,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct RandomizeSchema {
    pub success: bool,
    pub randomize: bool,
}
