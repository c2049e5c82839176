//! Feed store - single source of truth for the post collection during a
//! session.
//!
//! Rendering surfaces read state through [`FeedStore::subscribe`] or
//! [`FeedStore::snapshot`] and mutate only through the store's operations; no
//! collaborator touches a `Post` or `Comment` record directly. The collection
//! lives for the session and is never persisted.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::fixtures;
use crate::models::{Comment, CommentDraft, FeedSnapshot, Post};
use crate::utils;

/// User-facing copy surfaced next to the manual retry control when a load
/// fails.
pub const LOAD_ERROR_MESSAGE: &str = "Falha ao carregar os posts. Tente novamente mais tarde.";

#[derive(Debug)]
struct FeedState {
    posts: Vec<Post>,
    is_loading: bool,
    load_error: Option<String>,
}

/// Owns the mutable post collection; cheap to clone and share across surfaces.
#[derive(Clone)]
pub struct FeedStore {
    state: Arc<RwLock<FeedState>>,
    updates: Arc<watch::Sender<FeedSnapshot>>,
    simulation: SimulationConfig,
}

impl FeedStore {
    pub fn new(simulation: SimulationConfig) -> Self {
        let (updates, _) = watch::channel(FeedSnapshot::default());
        Self {
            state: Arc::new(RwLock::new(FeedState {
                posts: Vec::new(),
                is_loading: true,
                load_error: None,
            })),
            updates: Arc::new(updates),
            simulation,
        }
    }

    /// Stream of state changes for rendering surfaces.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.updates.subscribe()
    }

    /// One-shot read of the current state.
    pub async fn snapshot(&self) -> FeedSnapshot {
        snapshot_of(&*self.state.read().await)
    }

    pub async fn get_post(&self, post_id: &str) -> Option<Post> {
        self.state
            .read()
            .await
            .posts
            .iter()
            .find(|post| post.id == post_id)
            .cloned()
    }

    /// Populates the collection from the fixture set after the simulated
    /// fetch delay, rescaling each fixture's like count so the numbers look
    /// fresh on every load.
    pub async fn load(&self) {
        self.load_from(|| Ok(freshen_like_counts(fixtures::seed_posts())))
            .await;
    }

    /// The load workflow with an injectable post source. Posts are applied
    /// exactly as returned; an `Err` surfaces the retry message in
    /// `load_error` and stops the loading indicator.
    pub async fn load_from<F>(&self, source: F)
    where
        F: FnOnce() -> Result<Vec<Post>>,
    {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.load_error = None;
            self.notify(&state);
        }

        tokio::time::sleep(self.simulation.load_delay()).await;

        let mut state = self.state.write().await;
        match source() {
            Ok(posts) => {
                info!(count = posts.len(), "feed loaded");
                state.posts = posts;
            }
            Err(err) => {
                warn!(error = %err, "feed load failed");
                state.load_error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        state.is_loading = false;
        self.notify(&state);
    }

    /// Increments the matching post's like count by exactly 1. Unknown ids
    /// are a silent no-op. The store performs no dedup; the viewing surface
    /// keeps its own per-session already-liked flag.
    pub async fn like_post(&self, post_id: &str) {
        let mut state = self.state.write().await;
        let Some(post) = state.posts.iter_mut().find(|post| post.id == post_id) else {
            debug!(%post_id, "like ignored, post not in collection");
            return;
        };
        post.like_count += 1;
        debug!(%post_id, like_count = post.like_count, "post liked");
        self.notify(&state);
    }

    /// Builds a full comment from the draft (assigning id, timestamp and a
    /// zero like count) and appends it to the target post. Unknown ids are a
    /// silent no-op. Text is stored verbatim.
    pub async fn add_comment(&self, post_id: &str, draft: CommentDraft) {
        let mut state = self.state.write().await;
        let Some(post) = state.posts.iter_mut().find(|post| post.id == post_id) else {
            debug!(%post_id, "comment ignored, post not in collection");
            return;
        };
        let comment = Comment {
            id: utils::comment_id(),
            author: draft.author,
            text: draft.text,
            created_at: Utc::now(),
            like_count: 0,
            attachment: draft.attachment,
        };
        debug!(%post_id, comment_id = %comment.id, "comment added");
        post.comments.push(comment);
        self.notify(&state);
    }

    /// Prepends a fully-formed post, keeping the collection most-recent-first.
    /// A duplicate id would break the uniqueness invariant, so it is dropped
    /// with a warning instead of applied.
    pub async fn publish_post(&self, post: Post) {
        let mut state = self.state.write().await;
        if state.posts.iter().any(|existing| existing.id == post.id) {
            warn!(post_id = %post.id, "duplicate post id, publish dropped");
            return;
        }
        info!(post_id = %post.id, "post published");
        state.posts.insert(0, post);
        self.notify(&state);
    }

    fn notify(&self, state: &FeedState) {
        self.updates.send_replace(snapshot_of(state));
    }
}

fn snapshot_of(state: &FeedState) -> FeedSnapshot {
    FeedSnapshot {
        posts: state.posts.clone(),
        is_loading: state.is_loading,
        load_error: state.load_error.clone(),
    }
}

// likes/10 plus a bounded random offset, so the seeded counts look recent on
// every load.
fn freshen_like_counts(mut posts: Vec<Post>) -> Vec<Post> {
    let mut rng = rand::thread_rng();
    for post in &mut posts {
        post.like_count = post.like_count / 10 + rng.gen_range(0..50);
    }
    posts
}
