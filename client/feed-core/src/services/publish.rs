//! Publish workflow - orchestrates the user-facing "create post" flow without
//! a real backend.
//!
//! The sequence is strictly linear with no abort path once submission begins:
//! `Idle -> Submitting -> Success -> Idle`, with a fixed artificial delay
//! between each transition. Concurrent submissions are not guarded here; the
//! composing surface must disable its submit affordance while the phase is not
//! [`PublishPhase::Idle`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SimulationConfig;
use crate::models::{MediaKind, Post, PostContent, PostDraft, User};
use crate::services::feed::FeedStore;
use crate::utils;

/// Substituted when the composer submits without selecting an image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/id/237/600/800";

/// Publish workflow phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishPhase {
    /// Composer open, nothing in flight
    Idle,
    /// Post composed, simulated round-trip running
    Submitting,
    /// Post landed in the feed; confirmation showing
    Success,
}

#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// The fixed identity new posts are attributed to
    pub author: User,
    pub placeholder_image: String,
    pub submit_delay: Duration,
    pub success_dwell: Duration,
}

impl PublishConfig {
    pub fn new(author: User, simulation: &SimulationConfig) -> Self {
        Self {
            author,
            placeholder_image: PLACEHOLDER_IMAGE_URL.to_string(),
            submit_delay: simulation.submit_delay(),
            success_dwell: simulation.success_dwell(),
        }
    }
}

/// Drives the create-post workflow against a [`FeedStore`].
#[derive(Clone)]
pub struct PublishSimulator {
    store: FeedStore,
    config: PublishConfig,
    phase: Arc<watch::Sender<PublishPhase>>,
    attached: Arc<AtomicBool>,
}

impl PublishSimulator {
    pub fn new(store: FeedStore, config: PublishConfig) -> Self {
        let (phase, _) = watch::channel(PublishPhase::Idle);
        Self {
            store,
            config,
            phase: Arc::new(phase),
            attached: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn phase(&self) -> PublishPhase {
        *self.phase.borrow()
    }

    /// Phase transitions for the composing surface. The return to
    /// [`PublishPhase::Idle`] after `Success` is its cue to close and show
    /// the feed's default view again.
    pub fn phase_watch(&self) -> watch::Receiver<PublishPhase> {
        self.phase.subscribe()
    }

    /// Marks the owning surface as torn down. In-flight delays still elapse,
    /// but their state transitions are discarded instead of applied.
    pub fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }

    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    /// Runs the full workflow: compose, simulated round-trip, publish into
    /// the store, success dwell, back to idle. Returns the id assigned to the
    /// composed post.
    pub async fn submit(&self, draft: PostDraft) -> String {
        let workflow_id = Uuid::new_v4();
        let post = self.compose_post(&draft);
        let post_id = post.id.clone();
        info!(%workflow_id, %post_id, "publish submitted");
        self.phase.send_replace(PublishPhase::Submitting);

        sleep(self.config.submit_delay).await;
        if !self.is_attached() {
            debug!(%workflow_id, "composer torn down mid-submit, publish discarded");
            return post_id;
        }
        self.store.publish_post(post).await;
        self.phase.send_replace(PublishPhase::Success);

        sleep(self.config.success_dwell).await;
        if self.is_attached() {
            self.phase.send_replace(PublishPhase::Idle);
            info!(%workflow_id, %post_id, "publish workflow complete");
        }
        post_id
    }

    fn compose_post(&self, draft: &PostDraft) -> Post {
        let image = draft
            .image
            .clone()
            .unwrap_or_else(|| self.config.placeholder_image.clone());
        let caption = Some(draft.caption.clone()).filter(|caption| !caption.trim().is_empty());
        Post {
            id: utils::post_id(),
            author: self.config.author.clone(),
            content: PostContent {
                kind: MediaKind::Image,
                data: image,
                alt_text: Some("Post image".to_string()),
            },
            caption,
            created_at: Utc::now(),
            like_count: rand::thread_rng().gen_range(0..100),
            comments: Vec::new(),
            tags: parse_tags(&draft.tags),
        }
    }
}

/// Whitespace-delimited tokens prefixed with `#`, stored without the prefix.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .filter_map(|token| token.strip_prefix('#'))
        .map(str::to_string)
        .collect()
}
