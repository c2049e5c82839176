//! Integration tests: feed core session workflows
//!
//! Coverage:
//! - Load seeds the fixture feed after the simulated delay and freshens likes
//! - Load failure surfaces the retry message and stops the loading indicator
//! - Like/comment mutate exactly one post; unknown ids are byte-for-byte no-ops
//! - Publish prepends, preserves prior ordering and keeps ids unique
//! - Publish workflow phase timing on the paused clock
//! - Detached composer discards delayed transitions instead of applying them
//!
//! All tests run on tokio's paused clock, so the fixed artificial delays
//! elapse instantly but remain observable through `Instant` arithmetic.

use tokio::time::{Duration, Instant};

use feed_core::error::AppError;
use feed_core::fixtures;
use feed_core::models::{CommentDraft, PostDraft};
use feed_core::services::LOAD_ERROR_MESSAGE;
use feed_core::{FeedStore, PublishConfig, PublishPhase, PublishSimulator, SimulationConfig};

fn store() -> FeedStore {
    FeedStore::new(SimulationConfig::default())
}

fn simulator(store: &FeedStore) -> PublishSimulator {
    PublishSimulator::new(
        store.clone(),
        PublishConfig::new(fixtures::current_user(), &SimulationConfig::default()),
    )
}

/// Seeds the store with the raw fixture posts (no like freshening), so tests
/// can assert against the exact fixture counts.
async fn seeded_store() -> FeedStore {
    let store = store();
    store.load_from(|| Ok(fixtures::seed_posts())).await;
    store
}

#[tokio::test(start_paused = true)]
async fn test_load_seeds_seven_posts_after_delay() {
    let store = store();
    assert!(store.snapshot().await.is_loading);

    let started = Instant::now();
    store.load().await;
    assert!(started.elapsed() >= Duration::from_millis(800));

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.posts.len(), 7);
    assert!(!snapshot.is_loading);
    assert!(snapshot.load_error.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_load_freshens_fixture_like_counts() {
    let store = store();
    store.load().await;

    let fixture_counts: std::collections::HashMap<String, u32> = fixtures::seed_posts()
        .into_iter()
        .map(|post| (post.id.clone(), post.like_count))
        .collect();

    for post in store.snapshot().await.posts {
        let original = fixture_counts[&post.id];
        // likes/10 plus a random offset in [0, 50)
        assert!(post.like_count >= original / 10);
        assert!(post.like_count < original / 10 + 50);
    }
}

#[tokio::test(start_paused = true)]
async fn test_load_failure_surfaces_retry_message() {
    let store = store();
    store
        .load_from(|| Err(AppError::LoadFailure("backend indisponível".to_string())))
        .await;

    let snapshot = store.snapshot().await;
    assert!(!snapshot.is_loading);
    assert!(snapshot.posts.is_empty());
    assert_eq!(snapshot.load_error.as_deref(), Some(LOAD_ERROR_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn test_like_increments_exactly_one_post() {
    let store = seeded_store().await;
    let before = store.snapshot().await;

    store.like_post("3").await;

    let after = store.snapshot().await;
    for (was, is) in before.posts.iter().zip(after.posts.iter()) {
        if is.id == "3" {
            assert_eq!(was.like_count, 2187);
            assert_eq!(is.like_count, 2188);
        } else {
            assert_eq!(was, is);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_like_unknown_id_changes_nothing() {
    let store = seeded_store().await;
    let before = store.snapshot().await;

    store.like_post("does-not-exist").await;

    assert_eq!(store.snapshot().await, before);
}

#[tokio::test(start_paused = true)]
async fn test_add_comment_appends_last() {
    let store = seeded_store().await;
    let before = store.get_post("1").await.unwrap();
    assert_eq!(before.comments.len(), 2);

    store
        .add_comment("1", CommentDraft::text(fixtures::current_user(), "oi"))
        .await;

    let after = store.get_post("1").await.unwrap();
    assert_eq!(after.comments.len(), 3);
    assert_eq!(after.comments[..2], before.comments[..]);

    let added = &after.comments[2];
    assert_eq!(added.text, "oi");
    assert_eq!(added.like_count, 0);
    assert_eq!(added.author.username, "memezada");
}

#[tokio::test(start_paused = true)]
async fn test_add_comment_unknown_id_changes_nothing() {
    let store = seeded_store().await;
    let before = store.snapshot().await;

    store
        .add_comment(
            "does-not-exist",
            CommentDraft::text(fixtures::current_user(), "oi"),
        )
        .await;

    assert_eq!(store.snapshot().await, before);
}

#[tokio::test(start_paused = true)]
async fn test_publish_prepends_and_keeps_ids_unique() {
    let store = seeded_store().await;
    let before = store.snapshot().await;

    let post_id = simulator(&store)
        .submit(PostDraft {
            caption: "teste".to_string(),
            tags: "#a #b".to_string(),
            image: None,
        })
        .await;

    let after = store.snapshot().await;
    assert_eq!(after.posts.len(), 8);
    assert_eq!(after.posts[0].id, post_id);
    assert_eq!(after.posts[0].caption.as_deref(), Some("teste"));
    assert_eq!(after.posts[0].tags, vec!["a", "b"]);
    // Prior ordering preserved behind the new head
    assert_eq!(after.posts[1..], before.posts[..]);

    let mut ids: Vec<&str> = after.posts.iter().map(|post| post.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[tokio::test(start_paused = true)]
async fn test_publish_workflow_phase_timing() {
    let store = seeded_store().await;
    let sim = simulator(&store);
    let mut phases = sim.phase_watch();

    let started = Instant::now();
    let submit = {
        let sim = sim.clone();
        tokio::spawn(async move {
            sim.submit(PostDraft {
                caption: "teste".to_string(),
                tags: String::new(),
                image: None,
            })
            .await
        })
    };

    phases
        .wait_for(|phase| *phase == PublishPhase::Submitting)
        .await
        .expect("simulator alive");

    phases
        .wait_for(|phase| *phase == PublishPhase::Success)
        .await
        .expect("simulator alive");
    // Success is reached no earlier than the submit delay
    assert!(started.elapsed() >= Duration::from_millis(1200));
    // The post is already in the feed while the success state shows
    assert_eq!(store.snapshot().await.posts.len(), 8);

    phases
        .wait_for(|phase| *phase == PublishPhase::Idle)
        .await
        .expect("simulator alive");
    // Idle is reached no earlier than submit delay + success dwell
    assert!(started.elapsed() >= Duration::from_millis(1200 + 2000));

    submit.await.expect("submit task");
}

#[tokio::test(start_paused = true)]
async fn test_detached_composer_discards_publish() {
    let store = seeded_store().await;
    let sim = simulator(&store);

    let submit = {
        let sim = sim.clone();
        tokio::spawn(async move {
            sim.submit(PostDraft {
                caption: "nunca aparece".to_string(),
                tags: String::new(),
                image: None,
            })
            .await
        })
    };

    // Let the submission get in flight, then tear the composer down
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(sim.phase(), PublishPhase::Submitting);
    sim.detach();

    submit.await.expect("submit task");

    // The delayed transitions were discarded: nothing published, no Success
    assert_eq!(store.snapshot().await.posts.len(), 7);
    assert_eq!(sim.phase(), PublishPhase::Submitting);
}

#[tokio::test(start_paused = true)]
async fn test_session_scenario_end_to_end() {
    let store = store();
    store.load().await;

    let first_id = store.snapshot().await.posts[0].id.clone();
    store.like_post(&first_id).await;
    store
        .add_comment(
            &first_id,
            CommentDraft::text(fixtures::current_user(), "primeiro!"),
        )
        .await;

    simulator(&store)
        .submit(PostDraft {
            caption: "fim da sessão".to_string(),
            tags: "#fim".to_string(),
            image: None,
        })
        .await;

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.posts.len(), 8);

    // Post ids stay unique through the whole session
    let mut post_ids: Vec<&str> = snapshot.posts.iter().map(|post| post.id.as_str()).collect();
    post_ids.sort_unstable();
    post_ids.dedup();
    assert_eq!(post_ids.len(), 8);

    // Comment ids too, across all posts
    let mut comment_ids: Vec<&str> = snapshot
        .posts
        .iter()
        .flat_map(|post| post.comments.iter().map(|comment| comment.id.as_str()))
        .collect();
    let total = comment_ids.len();
    comment_ids.sort_unstable();
    comment_ids.dedup();
    assert_eq!(comment_ids.len(), total);
}
