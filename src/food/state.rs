//! Food List Application State
//!
//! Holds one [`Store`] per browser session plus the services shared by all
//! sessions (bootstrap catalog, summary client).

use super::helpers::new_session_id;
use super::models::GUEST_USERNAME;
use super::summary::SummaryClient;
use crate::store::{CatalogItem, Store, StoreState, UserIdentity};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default idle time after which a session is dropped
pub const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(30 * 60);

/// Default upper bound on live sessions
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Bounds on the in-memory session table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Sessions untouched for longer than this are evicted
    pub idle_ttl: Duration,
    /// Oldest sessions are evicted once this many are live
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_ttl: DEFAULT_SESSION_IDLE,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

/// A session store and the last time a request touched it
#[derive(Debug)]
pub struct SessionEntry {
    pub store: Arc<Store>,
    pub last_seen: Instant,
}

/// Core application state containing session stores and shared services
pub struct AppState {
    /// In-memory stores, keyed by server-issued session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, SessionEntry>,

    /// Catalog every new session starts with
    pub catalog: Vec<CatalogItem>,

    /// Client used by the summary submitter
    pub summary_client: SummaryClient,

    limits: SessionLimits,
}

impl AppState {
    pub fn new(catalog: Vec<CatalogItem>, summary_client: SummaryClient) -> Self {
        Self::with_limits(catalog, summary_client, SessionLimits::default())
    }

    pub fn with_limits(
        catalog: Vec<CatalogItem>,
        summary_client: SummaryClient,
        limits: SessionLimits,
    ) -> Self {
        Self {
            sessions: DashMap::new(),
            catalog,
            summary_client,
            limits,
        }
    }

    /// Looks up a catalog item by id
    pub fn find_food(&self, id: u32) -> Option<&CatalogItem> {
        self.catalog.iter().find(|item| item.id == id)
    }

    /// Returns the store of a live session and refreshes its idle timer.
    ///
    /// Unknown or expired ids yield `None`; they never create a store.
    pub fn session_store(&self, session_id: &str) -> Option<Arc<Store>> {
        let mut entry = self.sessions.get_mut(session_id)?;
        let now = Instant::now();

        if now.duration_since(entry.last_seen) > self.limits.idle_ttl {
            drop(entry);
            self.sessions.remove(session_id);
            tracing::info!(session_id, "Session expired");
            return None;
        }

        entry.last_seen = now;
        Some(Arc::clone(&entry.store))
    }

    /// Creates a store under a fresh id.
    ///
    /// New sessions get an empty cart and a guest identity whose token is
    /// the session id.
    pub fn create_session(&self) -> (String, Arc<Store>) {
        self.evict_sessions();

        let session_id = new_session_id();
        let user = UserIdentity {
            username: GUEST_USERNAME.to_string(),
            token: session_id.clone(),
        };
        let store = Arc::new(Store::new(StoreState::new(self.catalog.clone(), user)));

        self.sessions.insert(
            session_id.clone(),
            SessionEntry {
                store: Arc::clone(&store),
                last_seen: Instant::now(),
            },
        );
        tracing::info!(session_id = %session_id, live = self.sessions.len(), "Creating session store");

        (session_id, store)
    }

    /// Drops idle sessions, then the least recently seen ones until there is
    /// room for one more.
    fn evict_sessions(&self) {
        let now = Instant::now();
        let idle_ttl = self.limits.idle_ttl;
        self.sessions
            .retain(|_, entry| now.duration_since(entry.last_seen) <= idle_ttl);

        let max = self.limits.max_sessions.max(1);
        if self.sessions.len() < max {
            return;
        }

        let mut by_age: Vec<(String, Instant)> = self
            .sessions
            .iter()
            .map(|entry| (entry.key().clone(), entry.last_seen))
            .collect();
        by_age.sort_by_key(|(_, seen)| *seen);

        let excess = self.sessions.len() + 1 - max;
        for (session_id, _) in by_age.into_iter().take(excess) {
            self.sessions.remove(&session_id);
            tracing::debug!(session_id = %session_id, "Evicted session");
        }
    }
}
