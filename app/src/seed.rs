use std::path::Path;

use sea_orm::{DbConn, DbErr, TransactionTrait};
use tracing::{error, warn};

use models::domains::competitions;

use crate::persistence::competitions::{create_competition_if_missing, list_competitions};
use crate::sync::sync_candidates_from_file;

/// Competitions that always exist, as `(name, slug)`.
pub const COMPETITIONS: &[(&str, &str)] = &[
    ("3MT - UCA", "3mt-uca"),
    ("3min - UCA TFG", "3min-uca-tfg"),
];

/// Inserts whichever of [`COMPETITIONS`] are missing.
pub async fn seed_competitions(db: &DbConn) -> Result<Vec<competitions::Model>, DbErr> {
    let txn = db.begin().await?;
    let mut seeded = Vec::with_capacity(COMPETITIONS.len());
    for (name, slug) in COMPETITIONS {
        seeded.push(create_competition_if_missing(&txn, name, slug).await?);
    }
    txn.commit().await?;
    Ok(seeded)
}

/// Startup data preparation: seed the fixed competitions, then sync each
/// competition's candidates from `candidates_dir`. Failures are logged and
/// never abort startup.
pub async fn prepare_data(db: &DbConn, candidates_dir: &Path) {
    if let Err(e) = seed_competitions(db).await {
        warn!("Database initialization warning: {}", e);
    }

    let competitions = match list_competitions(db).await {
        Ok(competitions) => competitions,
        Err(e) => {
            error!("Could not load competitions for candidate sync: {}", e);
            return;
        }
    };

    for competition in &competitions {
        if let Err(e) = sync_candidates_from_file(db, competition, candidates_dir).await {
            error!("Error syncing candidates for {}: {}", competition.name, e);
        }
    }
}
