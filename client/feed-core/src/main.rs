//! Scripted demo session driving the feed core the way the rendering surfaces
//! do: load the feed, focus a post, like it once, comment, share a saved meme
//! and publish a new post through the simulated workflow.

use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use feed_core::fixtures;
use feed_core::models::{CommentDraft, MediaAttachment, PostDraft};
use feed_core::utils::format_distance_to_now;
use feed_core::{
    ActiveItemSelector, Config, FeedStore, ItemBounds, PublishConfig, PublishSimulator,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(env = %config.app.env, "starting feed-demo session");

    let store = FeedStore::new(config.simulation.clone());

    let mut feed_updates = store.subscribe();
    tokio::spawn(async move {
        while feed_updates.changed().await.is_ok() {
            let snapshot = feed_updates.borrow().clone();
            debug!(
                posts = snapshot.posts.len(),
                is_loading = snapshot.is_loading,
                "feed state changed"
            );
        }
    });

    store.load().await;
    let snapshot = store.snapshot().await;
    if let Some(message) = &snapshot.load_error {
        info!(%message, "feed load failed, session over");
        return Ok(());
    }
    info!(posts = snapshot.posts.len(), "feed ready");

    // One-post-at-a-time focus, as the feed surface computes it on scroll.
    // Items are full-viewport-height cells; pretend the user flicked down one.
    let viewport = ItemBounds::new(0.0, 640.0);
    let mut selector = ActiveItemSelector::new();
    let cells: Vec<ItemBounds> = (0..snapshot.posts.len())
        .map(|index| ItemBounds::new(index as f64 * 640.0 - 640.0, 640.0))
        .collect();
    let active = selector.on_scroll(viewport, &cells);
    if let Some(post) = snapshot.posts.get(active) {
        info!(active, post_id = %post.id, "active post after scroll");
    }

    let me = fixtures::current_user();

    // Like once; the surface owns the per-session already-liked guard
    let mut liked: HashSet<String> = HashSet::new();
    if let Some(first) = snapshot.posts.first() {
        if liked.insert(first.id.clone()) {
            store.like_post(&first.id).await;
        }
        // A double tap is swallowed by the guard, not the store
        if liked.insert(first.id.clone()) {
            store.like_post(&first.id).await;
        }

        store
            .add_comment(&first.id, CommentDraft::text(me.clone(), "Esse é muito bom 😂"))
            .await;

        // Share a saved meme into the thread as a structured attachment
        if let Some(saved) = fixtures::saved_lists()
            .first()
            .and_then(|list| list.posts.first().cloned())
        {
            store
                .add_comment(
                    &first.id,
                    CommentDraft::attachment(
                        me.clone(),
                        MediaAttachment {
                            url: saved.image,
                            alt_text: Some("Meme".to_string()),
                        },
                    ),
                )
                .await;
        }
    }

    // Publish through the simulated workflow, logging phase transitions
    let simulator = PublishSimulator::new(store.clone(), PublishConfig::new(me, &config.simulation));
    let mut phases = simulator.phase_watch();
    let phase_logger = tokio::spawn(async move {
        while phases.changed().await.is_ok() {
            info!(phase = ?*phases.borrow(), "publish phase");
        }
    });

    let post_id = simulator
        .submit(PostDraft {
            caption: "Direto do feed-demo".to_string(),
            tags: "#meme #demo".to_string(),
            image: None,
        })
        .await;
    drop(simulator);
    phase_logger.await?;

    let final_snapshot = store.snapshot().await;
    info!(
        %post_id,
        posts = final_snapshot.posts.len(),
        "session finished"
    );
    for post in &final_snapshot.posts {
        info!(
            id = %post.id,
            author = %post.author.username,
            likes = post.like_count,
            comments = post.comments.len(),
            age = %format_distance_to_now(post.created_at),
            "post"
        );
    }
    println!("{}", serde_json::to_string_pretty(&final_snapshot)?);

    Ok(())
}
