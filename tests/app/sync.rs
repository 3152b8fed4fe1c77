use std::fs;

use app::persistence::{
    candidates::{candidates_with_votes, list_candidates},
    competitions::list_competitions,
    votes::count_votes,
};
use app::seed::prepare_data;
use app::sync::{SyncReport, candidates_file, sync_candidates, sync_candidates_from_file};
use utils::testing::setup_test_db;

use super::{add_candidates, scratch_dir, setup, vote};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn sync_adds_missing_names_and_is_idempotent() {
    let (db, competitions) = setup().await;
    let competition = &competitions[0];
    let wanted = names(&["Ana", "Luis", "Marta"]);

    let report = sync_candidates(&db, competition, &wanted).await.unwrap();
    assert_eq!(report.added, wanted);
    assert!(report.removed.is_empty());

    let again = sync_candidates(&db, competition, &wanted).await.unwrap();
    assert!(again.is_empty());
    assert_eq!(list_candidates(&db, competition.id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn sync_removes_unlisted_candidates_with_their_votes() {
    let (db, competitions) = setup().await;
    let competition = &competitions[0];
    let ids: Vec<i32> = add_candidates(&db, competition.id, &["Ana", "Luis", "Marta", "Pablo"])
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    vote(&db, competition, "a", [ids[0], ids[1], ids[3]]).await;

    let report = sync_candidates(&db, competition, &names(&["Luis", "Marta", "Pablo"]))
        .await
        .unwrap();
    assert_eq!(
        report,
        SyncReport {
            added: vec![],
            removed: names(&["Ana"]),
        }
    );

    // Survivors keep their votes.
    let tally: Vec<(String, i64)> = candidates_with_votes(&db, competition.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| (c.name, c.votes))
        .collect();
    assert_eq!(
        tally,
        vec![
            ("Luis".to_string(), 1),
            ("Marta".to_string(), 0),
            ("Pablo".to_string(), 1),
        ]
    );
    assert_eq!(count_votes(&db, competition.id).await.unwrap(), 2);

    // Adding the name back creates a new candidate at zero.
    let report = sync_candidates(&db, competition, &names(&["Ana", "Luis", "Marta", "Pablo"]))
        .await
        .unwrap();
    assert_eq!(report.added, names(&["Ana"]));
    let ana = candidates_with_votes(&db, competition.id)
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.name == "Ana")
        .unwrap();
    assert_ne!(ana.id, ids[0]);
    assert_eq!(ana.votes, 0);
}

#[tokio::test]
async fn sync_without_file_changes_nothing() {
    let (db, competitions) = setup().await;
    let competition = &competitions[0];
    add_candidates(&db, competition.id, &["Ana"]).await;
    let dir = scratch_dir();

    let report = sync_candidates_from_file(&db, competition, &dir)
        .await
        .unwrap();
    assert!(report.is_none());
    assert_eq!(list_candidates(&db, competition.id).await.unwrap().len(), 1);

    fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn empty_file_removes_every_candidate() {
    let (db, competitions) = setup().await;
    let competition = &competitions[1];
    add_candidates(&db, competition.id, &["Ana", "Luis"]).await;
    let dir = scratch_dir();
    fs::write(candidates_file(&dir, &competition.slug), "\n  \n").unwrap();

    let report = sync_candidates_from_file(&db, competition, &dir)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.removed, names(&["Ana", "Luis"]));
    assert!(list_candidates(&db, competition.id).await.unwrap().is_empty());

    fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn prepare_data_seeds_and_syncs_from_files() {
    let db = setup_test_db("sqlite::memory:").await.unwrap();
    let dir = scratch_dir();
    fs::write(
        candidates_file(&dir, "3mt-uca"),
        "  Ana Pérez\nLuis\n\nLuis\nMarta  \n",
    )
    .unwrap();

    prepare_data(&db, &dir).await;

    let competitions = list_competitions(&db).await.unwrap();
    let slugs: Vec<&str> = competitions.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["3mt-uca", "3min-uca-tfg"]);

    let listed: Vec<String> = list_candidates(&db, competitions[0].id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(listed, names(&["Ana Pérez", "Luis", "Marta"]));
    assert!(list_candidates(&db, competitions[1].id).await.unwrap().is_empty());

    // A second startup with the same file is a no-op.
    prepare_data(&db, &dir).await;
    assert_eq!(list_candidates(&db, competitions[0].id).await.unwrap().len(), 3);

    fs::remove_dir_all(dir).ok();
}
