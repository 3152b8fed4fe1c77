//! Reconciles a competition's candidates with `candidates_{slug}.txt`.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sea_orm::{DbConn, DbErr, TransactionTrait};
use tracing::{error, info};

use models::domains::competitions;

use crate::persistence::candidates::{insert_candidate, list_candidates, remove_candidate};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SyncReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

pub fn candidates_file(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("candidates_{slug}.txt"))
}

/// One name per non-blank line, trimmed. Repeated names are kept once, at
/// their first position.
pub fn parse_candidate_names(contents: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_owned)
        .collect()
}

/// Reads the candidate list for `slug`. A missing or unreadable file yields
/// `None`, which leaves the competition untouched.
pub async fn load_candidates_from_file(dir: &Path, slug: &str) -> Option<Vec<String>> {
    let path = candidates_file(dir, slug);
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Some(parse_candidate_names(&contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            error!("Error reading {}: {}", path.display(), e);
            None
        }
    }
}

/// Makes the candidate names of `competition` equal to `names`.
///
/// Candidates whose name is not listed are deleted together with their
/// votes; listed names without a candidate are created. Candidates that stay
/// keep their votes. Everything happens in one transaction.
pub async fn sync_candidates(
    db: &DbConn,
    competition: &competitions::Model,
    names: &[String],
) -> Result<SyncReport, DbErr> {
    let txn = db.begin().await?;
    let mut report = SyncReport::default();

    let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
    let current = list_candidates(&txn, competition.id).await?;
    let existing: HashSet<String> = current.iter().map(|c| c.name.clone()).collect();

    for candidate in current {
        if !wanted.contains(candidate.name.as_str()) {
            remove_candidate(&txn, candidate.id).await?;
            report.removed.push(candidate.name);
        }
    }

    for name in names {
        if !existing.contains(name) {
            insert_candidate(&txn, competition.id, name).await?;
            report.added.push(name.clone());
        }
    }

    txn.commit().await?;
    Ok(report)
}

/// Runs [`sync_candidates`] against the file for `competition`, if there is
/// one. `Ok(None)` means no file was found.
pub async fn sync_candidates_from_file(
    db: &DbConn,
    competition: &competitions::Model,
    dir: &Path,
) -> Result<Option<SyncReport>, DbErr> {
    let Some(names) = load_candidates_from_file(dir, &competition.slug).await else {
        return Ok(None);
    };

    let report = sync_candidates(db, competition, &names).await?;
    for name in &report.removed {
        info!("Removed candidate: {} from {}", name, competition.name);
    }
    for name in &report.added {
        info!("Added candidate: {} to {}", name, competition.name);
    }
    Ok(Some(report))
}
