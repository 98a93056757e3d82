//! Post feed
//!
//! Loads every post (with tags) from a [`ContentSource`] once per feed
//! instance. Consumers read `posts` and `is_loading`, and can tell a failed
//! fetch apart from an empty blog through [`FeedStatus`].
//!
//! The fetch runs on a tokio task tied to the feed's lifetime: unmounting or
//! dropping the feed cancels it, and a fetch that resolves afterwards leaves
//! the published state untouched.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::ghost::{BrowseParams, ContentSource, Post};

/// Where a feed is in its single fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// Not mounted yet
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch succeeded with at least one post
    Loaded,
    /// Fetch succeeded but the service has no posts
    Empty,
    /// Fetch failed; the message is what was logged
    Failed(String),
}

/// Snapshot of a feed's published state
#[derive(Debug, Clone)]
pub struct FeedState {
    /// Absent until a fetch succeeds; never set by a failed fetch
    pub posts: Option<Arc<Vec<Post>>>,
    pub is_loading: bool,
    pub status: FeedStatus,
}

impl FeedState {
    fn idle() -> Self {
        Self {
            posts: None,
            is_loading: false,
            status: FeedStatus::Idle,
        }
    }

    fn loading() -> Self {
        Self {
            posts: None,
            is_loading: true,
            status: FeedStatus::Loading,
        }
    }

    fn loaded(posts: Vec<Post>) -> Self {
        let status = if posts.is_empty() {
            FeedStatus::Empty
        } else {
            FeedStatus::Loaded
        };
        Self {
            posts: Some(Arc::new(posts)),
            is_loading: false,
            status,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            posts: None,
            is_loading: false,
            status: FeedStatus::Failed(message),
        }
    }
}

/// A post collection fetched once per instance
pub struct PostFeed {
    source: Arc<dyn ContentSource>,
    /// Taken by the first `mount`; its absence means the fetch was already issued
    state_tx: Option<watch::Sender<FeedState>>,
    state_rx: watch::Receiver<FeedState>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PostFeed {
    /// Create an unmounted feed; nothing is fetched until [`PostFeed::mount`]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        let (state_tx, state_rx) = watch::channel(FeedState::idle());
        Self {
            source,
            state_tx: Some(state_tx),
            state_rx,
            cancel: CancellationToken::new(),
            task: None,
        }
    }

    /// Start the fetch. Only the first call on an instance does anything.
    ///
    /// Outside a tokio runtime the feed settles straight into `Failed`.
    pub fn mount(&mut self) {
        if self.cancel.is_cancelled() {
            tracing::debug!("Ignoring mount of a torn-down post feed");
            return;
        }
        let Some(state_tx) = self.state_tx.take() else {
            return;
        };

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Error fetching posts: {}", e);
                state_tx.send_replace(FeedState::failed(e.to_string()));
                return;
            }
        };

        state_tx.send_replace(FeedState::loading());

        let source = Arc::clone(&self.source);
        let cancel = self.cancel.clone();

        self.task = Some(runtime.spawn(async move {
            let params = BrowseParams::all_with_tags();

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!("Post feed torn down before fetch resolved");
                    return;
                }
                result = source.browse_posts(&params) => result,
            };

            let next = match result {
                Ok(posts) => {
                    tracing::info!("Loaded {} posts", posts.len());
                    FeedState::loaded(posts)
                }
                Err(e) => {
                    tracing::error!("Error fetching posts: {}", e);
                    FeedState::failed(e.to_string())
                }
            };

            // Checked under the channel's write lock; unmount waits on that lock after cancelling
            state_tx.send_if_modified(|state| {
                if cancel.is_cancelled() {
                    return false;
                }
                *state = next;
                true
            });
        }));
    }

    /// Tear the feed down, cancelling an in-flight fetch
    pub fn unmount(&mut self) {
        self.cancel.cancel();
        // Wait out a write that passed its cancellation check before we cancelled
        drop(self.state_rx.borrow());
        self.state_tx = None;
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether this instance can no longer start a fetch (already mounted or torn down)
    pub fn is_spent(&self) -> bool {
        self.state_tx.is_none()
    }

    pub fn posts(&self) -> Option<Arc<Vec<Post>>> {
        self.state_rx.borrow().posts.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state_rx.borrow().is_loading
    }

    pub fn status(&self) -> FeedStatus {
        self.state_rx.borrow().status.clone()
    }

    pub fn snapshot(&self) -> FeedState {
        self.state_rx.borrow().clone()
    }

    /// Watch the feed's state from elsewhere
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state_rx.clone()
    }

    /// Wait until the fetch has finished and return the final state.
    ///
    /// Returns the current state straight away for an unmounted feed, and the
    /// last published state if the feed is torn down mid-flight.
    pub async fn settled(&self) -> FeedState {
        let mut rx = self.state_rx.clone();
        loop {
            {
                let state = rx.borrow_and_update();
                if !state.is_loading {
                    return state.clone();
                }
            }
            if rx.changed().await.is_err() {
                return rx.borrow().clone();
            }
        }
    }
}

impl Drop for PostFeed {
    fn drop(&mut self) {
        self.cancel.cancel();
        drop(self.state_rx.borrow());
    }
}
