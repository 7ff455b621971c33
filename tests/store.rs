mod common;

use common::*;
use trivia_api::db::queries::categories::{get_all_categories, import_categories};
use trivia_api::db::queries::questions::{
    count_questions_for_category, create_question, delete_question, get_quiz_candidates,
    import_questions, search_questions,
};

#[tokio::test]
async fn import_overwrites_existing_rows() {
    let pool = seeded_pool().await;
    import_categories(&pool, vec![category(2, "Fine Art"), category(4, "Sports")])
        .await
        .unwrap();

    let categories = get_all_categories(&pool).await.unwrap();
    assert_eq!(
        categories,
        vec![
            category(1, "Science"),
            category(2, "Fine Art"),
            category(3, "Geography"),
            category(4, "Sports"),
        ]
    );

    import_questions(&pool, vec![question(1, "Renamed", 4)])
        .await
        .unwrap();
    assert_eq!(count_questions_for_category(&pool, 4).await.unwrap(), 1);
    assert_eq!(count_questions_for_category(&pool, 1).await.unwrap(), 15);
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let pool = seeded_pool().await;
    delete_question(&pool, TOTAL_QUESTIONS).await.unwrap();
    let id = create_question(&pool, "q", "a", 1, 1).await.unwrap();
    assert_eq!(id, TOTAL_QUESTIONS + 1);
}

#[tokio::test]
async fn candidates_respect_category_and_exclusions() {
    let pool = seeded_pool().await;

    let all = get_quiz_candidates(&pool, None, &[]).await.unwrap();
    assert_eq!(all.len() as i64, TOTAL_QUESTIONS);

    let art = get_quiz_candidates(&pool, Some(2), &[16, 17, 1]).await.unwrap();
    let art_ids: Vec<i64> = art.iter().map(|q| q.id).collect();
    assert_eq!(art_ids, vec![18, 19, 20, 21, 22]);
}

#[tokio::test]
async fn search_of_empty_term_matches_everything() {
    let pool = seeded_pool().await;
    let found = search_questions(&pool, "").await.unwrap();
    assert_eq!(found.len() as i64, TOTAL_QUESTIONS);
}

#[tokio::test]
async fn search_folds_non_ascii_case() {
    let pool = seeded_pool().await;
    import_questions(&pool, vec![question(30, "Who painted Élan Vital?", 2)])
        .await
        .unwrap();

    let found = search_questions(&pool, "élan").await.unwrap();
    let ids: Vec<i64> = found.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![30]);

    let found = search_questions(&pool, "ÉLAN VITAL").await.unwrap();
    assert_eq!(found.len(), 1);
}
