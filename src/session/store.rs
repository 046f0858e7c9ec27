//! In-memory session store
//!
//! Sessions live only as long as their view: nothing is persisted. Each slot
//! owns a cancellation token that fires when the session is closed, so an
//! in-flight judge call never outlives its session.
//!
//! A view that goes away without closing its session leaves the slot behind.
//! Slots untouched for longer than the idle timeout are swept like a close.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{AlgorithmEntry, Language, VerdictResult},
};

use super::{CompletionOutcome, EditorSession, SessionState, SubmissionTicket};

/// Session plus the resources tied to its lifetime
#[derive(Debug)]
struct SessionSlot {
    session: EditorSession,
    cancel: CancellationToken,
    opened_at: DateTime<Utc>,
    last_touched: Instant,
}

impl SessionSlot {
    fn touch(&mut self) -> &mut Self {
        self.last_touched = Instant::now();
        self
    }

    fn is_idle(&self, now: Instant, idle_timeout: Duration) -> bool {
        !self.session.is_submitting() && now.duration_since(self.last_touched) >= idle_timeout
    }
}

/// Point-in-time copy of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub algorithm: &'static AlgorithmEntry,
    pub language: Language,
    pub code: String,
    pub state: SessionState,
    pub generation: u64,
    pub last_result: Option<VerdictResult>,
    pub opened_at: DateTime<Utc>,
}

/// Result of asking a session to start a submission
#[derive(Debug)]
pub enum SubmitStart {
    Dispatched {
        ticket: SubmissionTicket,
        cancel: CancellationToken,
    },
    AlreadyInFlight,
}

/// Shared map of open sessions (cheap to clone)
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionSlot>>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    /// Register a session and return its id
    pub async fn open(&self, session: EditorSession) -> AppResult<Uuid> {
        let mut sessions = self.inner.write().await;
        if sessions.len() >= self.max_sessions {
            return Err(AppError::SessionLimitReached(self.max_sessions));
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            SessionSlot {
                session,
                cancel: CancellationToken::new(),
                opened_at: Utc::now(),
                last_touched: Instant::now(),
            },
        );
        Ok(id)
    }

    /// Copy out the current state of a session
    pub async fn snapshot(&self, id: Uuid) -> Option<SessionSnapshot> {
        let mut sessions = self.inner.write().await;
        let slot = sessions.get_mut(&id)?.touch();
        Some(SessionSnapshot {
            id,
            algorithm: slot.session.algorithm(),
            language: slot.session.language(),
            code: slot.session.buffer().to_string(),
            state: slot.session.state(),
            generation: slot.session.generation(),
            last_result: slot.session.last_result().cloned(),
            opened_at: slot.opened_at,
        })
    }

    /// Run a transition against a session; `None` if it does not exist
    pub async fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut EditorSession) -> T) -> Option<T> {
        let mut sessions = self.inner.write().await;
        sessions.get_mut(&id).map(|slot| f(&mut slot.touch().session))
    }

    /// Start a submission; `None` if the session does not exist
    pub async fn begin_submit(&self, id: Uuid) -> Option<SubmitStart> {
        let mut sessions = self.inner.write().await;
        let slot = sessions.get_mut(&id)?.touch();

        Some(match slot.session.begin_submit() {
            Some(ticket) => SubmitStart::Dispatched {
                ticket,
                cancel: slot.cancel.clone(),
            },
            None => SubmitStart::AlreadyInFlight,
        })
    }

    /// Deliver a result to the session that issued the submission
    pub async fn complete(&self, id: Uuid, generation: u64, result: VerdictResult) -> CompletionOutcome {
        let mut sessions = self.inner.write().await;
        let Some(slot) = sessions.get_mut(&id) else {
            debug!(session_id = %id, "Session closed before judge answered, dropping result");
            return CompletionOutcome::Detached;
        };

        let outcome = slot.touch().session.complete(generation, result);
        if outcome == CompletionOutcome::Stale {
            debug!(
                session_id = %id,
                issued_generation = generation,
                current_generation = slot.session.generation(),
                "Selection changed while submitting, dropping result"
            );
        }
        outcome
    }

    /// Release a session's in-flight slot without a result
    pub async fn abandon(&self, id: Uuid) {
        if let Some(slot) = self.inner.write().await.get_mut(&id) {
            slot.session.abandon();
        }
    }

    /// Remove a session and cancel its in-flight work
    pub async fn close(&self, id: Uuid) -> bool {
        match self.inner.write().await.remove(&id) {
            Some(slot) => {
                slot.cancel.cancel();
                true
            }
            None => false,
        }
    }

    /// Close every session
    pub async fn close_all(&self) -> usize {
        let mut sessions = self.inner.write().await;
        let closed = sessions.len();
        for (_, slot) in sessions.drain() {
            slot.cancel.cancel();
        }
        closed
    }

    /// Remove idle sessions and cancel their tokens. Sessions with a
    /// submission in flight are never evicted.
    pub async fn evict_idle(&self, idle_timeout: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let before = sessions.len();

        sessions.retain(|id, slot| {
            if !slot.is_idle(now, idle_timeout) {
                return true;
            }
            debug!(session_id = %id, opened_at = %slot.opened_at, "Evicting idle session");
            slot.cancel.cancel();
            false
        });

        before - sessions.len()
    }

    /// Periodically evict idle sessions until the task is aborted
    pub fn spawn_idle_sweeper(&self, idle_timeout: Duration, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle(idle_timeout).await;
                if evicted > 0 {
                    info!(evicted = evicted, "Evicted idle sessions");
                }
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
