//! In-memory contact form state, one entry per rendered page.

use std::{collections::HashMap, sync::Arc, time::Duration};

use folio_contact::ContactSession;
use tokio::{sync::Mutex, time::Instant};
use ulid::Ulid;

/// Views untouched for this long are dropped by [`ViewStore::sweep`].
pub const VIEW_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

/// Most views kept at once. Opening one more evicts the least recently seen.
pub const MAX_VIEWS: usize = 10_000;

/// How often the server sweeps idle views.
pub const SWEEP_EVERY: Duration = Duration::from_secs(60);

struct Entry {
    session: ContactSession,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct ViewStore {
    entries: Arc<Mutex<HashMap<Ulid, Entry>>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new(VIEW_IDLE_TTL)
    }
}

impl ViewStore {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, MAX_VIEWS)
    }

    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Arc::default(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Starts a fresh form for a new page view.
    pub async fn open(&self) -> (Ulid, ContactSession) {
        let id = Ulid::new();
        let session = ContactSession::new();
        let mut entries = self.entries.lock().await;

        while entries.len() >= self.capacity {
            let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };
            entries.remove(&oldest);
            tracing::debug!(view = %oldest, "evicted contact view at capacity");
        }

        entries.insert(
            id,
            Entry {
                session: session.clone(),
                last_seen: Instant::now(),
            },
        );

        (id, session)
    }

    /// Looks a view up and marks it as seen. Malformed ids are unknown ids.
    pub async fn get(&self, id: &str) -> Option<ContactSession> {
        let id = Ulid::from_string(id).ok()?;
        let mut entries = self.entries.lock().await;
        let entry = entries.get_mut(&id)?;
        entry.last_seen = Instant::now();

        Some(entry.session.clone())
    }

    /// Drops idle views and returns how many were removed.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.last_seen) < self.ttl);

        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Sweeps forever on `every`. The caller aborts the handle on shutdown.
    pub fn spawn_sweeper(&self, every: Duration) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let removed = store.sweep().await;
                if removed > 0 {
                    tracing::debug!(removed, "expired contact views");
                }
            }
        })
    }
}
