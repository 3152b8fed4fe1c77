use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use models::domains::*;
use models::schemas::competition::CompetitionSchema;

use super::candidates::candidates_with_votes;

pub async fn get_competition<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<competitions::Model>, DbErr> {
    competitions::Entity::find_by_id(id).one(db).await
}

pub async fn get_competition_by_slug<C: ConnectionTrait>(
    db: &C,
    slug: &str,
) -> Result<Option<competitions::Model>, DbErr> {
    competitions::Entity::find()
        .filter(competitions::Column::Slug.eq(slug))
        .one(db)
        .await
}

pub async fn list_competitions(db: &DbConn) -> Result<Vec<competitions::Model>, DbErr> {
    competitions::Entity::find()
        .order_by_asc(competitions::Column::Id)
        .all(db)
        .await
}

/// Every competition with its candidates in creation order and their live
/// vote counts.
pub async fn competitions_with_candidates(db: &DbConn) -> Result<Vec<CompetitionSchema>, DbErr> {
    let mut result = Vec::new();
    for competition in list_competitions(db).await? {
        let candidates = candidates_with_votes(db, competition.id).await?;
        result.push(CompetitionSchema::new(competition, candidates));
    }
    Ok(result)
}

/// Returns the competition with `slug`, inserting it first when absent.
pub async fn create_competition_if_missing<C: ConnectionTrait>(
    db: &C,
    name: &str,
    slug: &str,
) -> Result<competitions::Model, DbErr> {
    if let Some(existing) = get_competition_by_slug(db, slug).await? {
        return Ok(existing);
    }

    competitions::ActiveModel {
        name: Set(name.to_owned()),
        slug: Set(slug.to_owned()),
        randomize_candidates: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Deletes a competition with its ballots, votes and candidates in one
/// transaction. Returns `false` when no such competition exists.
pub async fn delete_competition(db: &DbConn, id: i32) -> Result<bool, DbErr> {
    let txn = db.begin().await?;

    if get_competition(&txn, id).await?.is_none() {
        return Ok(false);
    }

    votes::Entity::delete_many()
        .filter(votes::Column::CompetitionId.eq(id))
        .exec(&txn)
        .await?;
    ballots::Entity::delete_many()
        .filter(ballots::Column::CompetitionId.eq(id))
        .exec(&txn)
        .await?;
    candidates::Entity::delete_many()
        .filter(candidates::Column::CompetitionId.eq(id))
        .exec(&txn)
        .await?;
    competitions::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    Ok(true)
}

/// Flips the randomize flag, returning the new value.
pub async fn toggle_randomize(db: &DbConn, id: i32) -> Result<Option<bool>, DbErr> {
    let Some(competition) = get_competition(db, id).await? else {
        return Ok(None);
    };

    let randomize = !competition.randomize_candidates;
    let mut active: competitions::ActiveModel = competition.into();
    active.randomize_candidates = Set(randomize);
    let updated = active.update(db).await?;

    Ok(Some(updated.randomize_candidates))
}
