use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr, TransactionTrait,
};
use serde_json::Value;

use models::domains::*;

use crate::error::AppError;

/// Number of choices on every ballot.
pub const BALLOT_SIZE: usize = 3;

/// Checks the shape of a submitted `candidate_ids` value: present, a
/// non-empty list, exactly [`BALLOT_SIZE`] entries, each an integer id.
pub fn parse_candidate_ids(
    candidate_ids: Option<&Value>,
) -> Result<[i32; BALLOT_SIZE], AppError> {
    let entries = match candidate_ids {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => return Err(AppError::MissingCandidates),
    };

    if entries.len() != BALLOT_SIZE {
        return Err(AppError::WrongCandidateCount);
    }

    let mut ids = [0; BALLOT_SIZE];
    for (slot, entry) in ids.iter_mut().zip(entries) {
        *slot = entry
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .ok_or(AppError::InvalidCandidate)?;
    }
    Ok(ids)
}

/// Validates and stores one ballot for `competition`.
///
/// Every id must name a candidate of this competition and no id may repeat.
/// The ballot row for `token` and the three votes are written in a single
/// transaction; a token that already voted here yields
/// [`AppError::AlreadyVoted`] and nothing is written.
pub async fn cast_ballot(
    db: &DbConn,
    competition: &competitions::Model,
    candidate_ids: Option<&Value>,
    token: &str,
) -> Result<(), AppError> {
    let ids = parse_candidate_ids(candidate_ids)?;

    let found = candidates::Entity::find()
        .filter(candidates::Column::Id.is_in(ids))
        .all(db)
        .await?;
    for id in ids {
        let belongs = found
            .iter()
            .any(|c| c.id == id && c.competition_id == competition.id);
        if !belongs {
            return Err(AppError::InvalidCandidate);
        }
    }

    if ids.iter().collect::<HashSet<_>>().len() != BALLOT_SIZE {
        return Err(AppError::DuplicateCandidate);
    }

    record_ballot(db, competition.id, &ids, token).await
}

async fn record_ballot(
    db: &DbConn,
    competition_id: i32,
    candidate_ids: &[i32],
    token: &str,
) -> Result<(), AppError> {
    let now = Utc::now().fixed_offset();
    let txn = db.begin().await?;

    let ballot = ballots::ActiveModel {
        competition_id: Set(competition_id),
        token: Set(token.to_owned()),
        created_at: Set(now),
        ..Default::default()
    };
    if let Err(e) = ballot.insert(&txn).await {
        return Err(match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyVoted,
            _ => AppError::Database(e),
        });
    }

    let new_votes = candidate_ids.iter().map(|&candidate_id| votes::ActiveModel {
        candidate_id: Set(candidate_id),
        competition_id: Set(competition_id),
        created_at: Set(now),
        ..Default::default()
    });
    votes::Entity::insert_many(new_votes).exec(&txn).await?;

    txn.commit().await?;
    Ok(())
}

/// Deletes every vote and ballot of one competition. Returns the number of
/// votes removed.
pub async fn reset_votes(db: &DbConn, competition_id: i32) -> Result<u64, DbErr> {
    let txn = db.begin().await?;

    let removed = votes::Entity::delete_many()
        .filter(votes::Column::CompetitionId.eq(competition_id))
        .exec(&txn)
        .await?
        .rows_affected;
    ballots::Entity::delete_many()
        .filter(ballots::Column::CompetitionId.eq(competition_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;
    Ok(removed)
}

pub async fn count_votes<C: ConnectionTrait>(db: &C, competition_id: i32) -> Result<u64, DbErr> {
    votes::Entity::find()
        .filter(votes::Column::CompetitionId.eq(competition_id))
        .count(db)
        .await
}
