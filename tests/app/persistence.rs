use serde_json::json;

use app::error::AppError;
use app::persistence::{
    candidates::{candidates_with_votes, delete_candidate, ranked_candidates},
    competitions::{
        create_competition_if_missing, delete_competition, get_competition, list_competitions,
        toggle_randomize,
    },
    votes::{cast_ballot, count_votes, reset_votes},
};
use app::seed::{COMPETITIONS, seed_competitions};
use models::params::candidate::CreateCandidateParams;

use super::{add_candidates, setup, vote};

#[tokio::test]
async fn seeding_is_idempotent() {
    let (db, first) = setup().await;
    let second = seed_competitions(&db).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(list_competitions(&db).await.unwrap().len(), COMPETITIONS.len());

    let existing = create_competition_if_missing(&db, "renamed", "3mt-uca")
        .await
        .unwrap();
    assert_eq!(existing.name, "3MT - UCA");
}

#[tokio::test]
async fn ballot_checks_run_in_order() {
    let (db, competitions) = setup().await;
    let ids: Vec<i32> = add_candidates(&db, competitions[0].id, &["Ana", "Luis", "Marta"])
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    let foreign = add_candidates(&db, competitions[1].id, &["Otro"]).await[0].id;

    let invalid = json!([ids[0], ids[0], foreign]);
    let err = cast_ballot(&db, &competitions[0], Some(&invalid), "t")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidCandidate));

    let duplicate = json!([ids[0], ids[0], ids[1]]);
    let err = cast_ballot(&db, &competitions[0], Some(&duplicate), "t")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateCandidate));

    assert_eq!(count_votes(&db, competitions[0].id).await.unwrap(), 0);
}

#[tokio::test]
async fn a_token_votes_once_per_competition() {
    let (db, competitions) = setup().await;
    let ids: Vec<i32> = add_candidates(&db, competitions[0].id, &["Ana", "Luis", "Marta"])
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    let ballot = json!(ids);

    cast_ballot(&db, &competitions[0], Some(&ballot), "token")
        .await
        .unwrap();
    let err = cast_ballot(&db, &competitions[0], Some(&ballot), "token")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyVoted));
    assert_eq!(count_votes(&db, competitions[0].id).await.unwrap(), 3);

    // After a reset the same browser may vote again.
    assert_eq!(reset_votes(&db, competitions[0].id).await.unwrap(), 3);
    cast_ballot(&db, &competitions[0], Some(&ballot), "token")
        .await
        .unwrap();
    assert_eq!(count_votes(&db, competitions[0].id).await.unwrap(), 3);
}

#[tokio::test]
async fn ranking_breaks_ties_by_creation_order() {
    let (db, competitions) = setup().await;
    let competition = &competitions[0];
    let ids: Vec<i32> = add_candidates(&db, competition.id, &["Ana", "Luis", "Marta", "Pablo"])
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();

    vote(&db, competition, "a", [ids[3], ids[2], ids[1]]).await;

    let ranked: Vec<(String, i64)> = ranked_candidates(&db, competition.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| (c.name, c.votes))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Luis".to_string(), 1),
            ("Marta".to_string(), 1),
            ("Pablo".to_string(), 1),
            ("Ana".to_string(), 0),
        ]
    );

    // The unranked listing keeps creation order regardless of votes.
    let listed: Vec<String> = candidates_with_votes(&db, competition.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(listed, vec!["Ana", "Luis", "Marta", "Pablo"]);
}

#[tokio::test]
async fn deleting_a_candidate_keeps_other_votes() {
    let (db, competitions) = setup().await;
    let competition = &competitions[0];
    let ids: Vec<i32> = add_candidates(&db, competition.id, &["Ana", "Luis", "Marta", "Pablo"])
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    vote(&db, competition, "a", [ids[0], ids[1], ids[2]]).await;
    vote(&db, competition, "b", [ids[1], ids[2], ids[3]]).await;

    assert_eq!(delete_candidate(&db, ids[1]).await.unwrap(), Some(2));
    assert_eq!(delete_candidate(&db, ids[1]).await.unwrap(), None);
    assert_eq!(count_votes(&db, competition.id).await.unwrap(), 4);
}

#[tokio::test]
async fn create_candidate_rejects_bad_input() {
    let (db, competitions) = setup().await;

    let blank = CreateCandidateParams {
        name: " \t ".to_string(),
        competition_id: competitions[0].id,
    };
    assert!(matches!(
        app::persistence::candidates::create_candidate(&db, blank).await,
        Err(AppError::InvalidName)
    ));

    let orphan = CreateCandidateParams {
        name: "Ana".to_string(),
        competition_id: 4242,
    };
    assert!(matches!(
        app::persistence::candidates::create_candidate(&db, orphan).await,
        Err(AppError::CompetitionNotFound)
    ));
}

#[tokio::test]
async fn reset_leaves_other_competitions_alone() {
    let (db, competitions) = setup().await;
    for competition in &competitions {
        let ids: Vec<i32> = add_candidates(&db, competition.id, &["Uno", "Dos", "Tres"])
            .await
            .into_iter()
            .map(|c| c.id)
            .collect();
        vote(&db, competition, "shared", [ids[0], ids[1], ids[2]]).await;
    }

    assert_eq!(reset_votes(&db, competitions[0].id).await.unwrap(), 3);
    assert_eq!(count_votes(&db, competitions[0].id).await.unwrap(), 0);
    assert_eq!(count_votes(&db, competitions[1].id).await.unwrap(), 3);
    assert_eq!(reset_votes(&db, competitions[0].id).await.unwrap(), 0);
}

#[tokio::test]
async fn toggle_randomize_flips_and_persists() {
    let (db, competitions) = setup().await;
    let id = competitions[1].id;

    assert_eq!(toggle_randomize(&db, id).await.unwrap(), Some(true));
    assert!(get_competition(&db, id).await.unwrap().unwrap().randomize_candidates);
    assert_eq!(toggle_randomize(&db, id).await.unwrap(), Some(false));
    assert_eq!(toggle_randomize(&db, 4242).await.unwrap(), None);
}

#[tokio::test]
async fn deleting_a_competition_cascades() {
    let (db, competitions) = setup().await;
    let doomed = &competitions[0];
    let ids: Vec<i32> = add_candidates(&db, doomed.id, &["Ana", "Luis", "Marta"])
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    vote(&db, doomed, "a", [ids[0], ids[1], ids[2]]).await;

    assert!(delete_competition(&db, doomed.id).await.unwrap());
    assert!(get_competition(&db, doomed.id).await.unwrap().is_none());
    assert!(candidates_with_votes(&db, doomed.id).await.unwrap().is_empty());
    assert_eq!(count_votes(&db, doomed.id).await.unwrap(), 0);
    assert!(!delete_competition(&db, doomed.id).await.unwrap());

    // The fixed competitions come back on the next seed.
    assert_eq!(seed_competitions(&db).await.unwrap().len(), COMPETITIONS.len());
}
