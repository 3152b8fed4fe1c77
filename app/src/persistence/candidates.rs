use std::collections::HashMap;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use models::domains::*;
use models::params::candidate::CreateCandidateParams;
use models::schemas::candidate::CandidateSchema;

use super::competitions::get_competition;
use crate::error::AppError;

const MAX_NAME_LEN: usize = 200;

pub async fn list_candidates<C: ConnectionTrait>(
    db: &C,
    competition_id: i32,
) -> Result<Vec<candidates::Model>, DbErr> {
    candidates::Entity::find()
        .filter(candidates::Column::CompetitionId.eq(competition_id))
        .order_by_asc(candidates::Column::Id)
        .all(db)
        .await
}

pub(crate) async fn insert_candidate<C: ConnectionTrait>(
    db: &C,
    competition_id: i32,
    name: &str,
) -> Result<candidates::Model, DbErr> {
    candidates::ActiveModel {
        name: Set(name.to_owned()),
        competition_id: Set(competition_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a candidate under an existing competition. The name is trimmed and
/// must not end up empty.
pub async fn create_candidate(
    db: &DbConn,
    params: CreateCandidateParams,
) -> Result<candidates::Model, AppError> {
    let name = params.name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidName);
    }

    get_competition(db, params.competition_id)
        .await?
        .ok_or(AppError::CompetitionNotFound)?;

    Ok(insert_candidate(db, params.competition_id, name).await?)
}

/// Removes the votes of a candidate and then the candidate itself. Runs on
/// whatever connection or transaction the caller holds.
pub(crate) async fn remove_candidate<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, DbErr> {
    let removed_votes = votes::Entity::delete_many()
        .filter(votes::Column::CandidateId.eq(id))
        .exec(db)
        .await?
        .rows_affected;
    candidates::Entity::delete_by_id(id).exec(db).await?;
    Ok(removed_votes)
}

/// Deletes a candidate and its votes atomically. Returns the number of votes
/// removed, or `None` when the candidate does not exist.
pub async fn delete_candidate(db: &DbConn, id: i32) -> Result<Option<u64>, DbErr> {
    let txn = db.begin().await?;

    if candidates::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Ok(None);
    }
    let removed_votes = remove_candidate(&txn, id).await?;

    txn.commit().await?;
    Ok(Some(removed_votes))
}

/// Number of votes per candidate id for one competition. Candidates without
/// votes are absent.
pub async fn vote_counts<C: ConnectionTrait>(
    db: &C,
    competition_id: i32,
) -> Result<HashMap<i32, i64>, DbErr> {
    let rows = votes::Entity::find()
        .select_only()
        .column(votes::Column::CandidateId)
        .column_as(Expr::col(votes::Column::Id).count(), "votes")
        .filter(votes::Column::CompetitionId.eq(competition_id))
        .group_by(votes::Column::CandidateId)
        .into_tuple::<(i32, i64)>()
        .all(db)
        .await?;

    Ok(rows.into_iter().collect())
}

/// Candidates of a competition in creation order, each with its vote count.
pub async fn candidates_with_votes<C: ConnectionTrait>(
    db: &C,
    competition_id: i32,
) -> Result<Vec<CandidateSchema>, DbErr> {
    let counts = vote_counts(db, competition_id).await?;
    let candidates = list_candidates(db, competition_id).await?;

    Ok(candidates
        .into_iter()
        .map(|candidate| {
            let votes = counts.get(&candidate.id).copied().unwrap_or(0);
            CandidateSchema::with_votes(candidate, votes)
        })
        .collect())
}

/// Same as [`candidates_with_votes`] but ordered by votes, most first. Ties
/// keep creation order.
pub async fn ranked_candidates<C: ConnectionTrait>(
    db: &C,
    competition_id: i32,
) -> Result<Vec<CandidateSchema>, DbErr> {
    let mut candidates = candidates_with_votes(db, competition_id).await?;
    candidates.sort_by(|a, b| b.votes.cmp(&a.votes));
    Ok(candidates)
}
