//! Access to stored opening hours.
//!
//! The engine never owns a global connection. Every operation takes a
//! [`HoursStore`] handle from its caller, so the same code runs against the
//! in-memory store in tests and against any other backend in production.
//!
//! # Seed files
//!
//! [`InMemoryStore::from_seed_json`] and [`InMemoryStore::from_seed_file`]
//! load a document of this shape:
//!
//! ```json
//! { "washrooms": [
//!     { "id": "north-gate", "times": { "Sunday": [{ "start": 540, "end": 1350 }] } }
//! ] }
//! ```
//!
//! Days may be omitted. Every interval is validated, and one bad entry
//! rejects the whole document.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{HoursError, Result};
use crate::schedule::WeeklySchedule;

/// Opaque, non-empty washroom identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WashroomId(String);

impl WashroomId {
    /// # Errors
    ///
    /// Returns [`HoursError::InvalidId`] if the id is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(HoursError::InvalidId("id must not be empty".to_string()));
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WashroomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WashroomId {
    type Error = HoursError;

    fn try_from(id: String) -> Result<Self> {
        Self::new(id)
    }
}

impl From<WashroomId> for String {
    fn from(id: WashroomId) -> Self {
        id.0
    }
}

/// Read access to washroom schedules.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one handle can serve concurrent
/// requests.
#[async_trait]
pub trait HoursStore: Send + Sync {
    /// Load the full week for a washroom.
    ///
    /// # Returns
    /// * `Ok(WeeklySchedule)` - the stored schedule, missing days empty
    /// * `Err(HoursError::NotFound)` - if the id is unknown
    /// * `Err(HoursError::StoreUnavailable)` - if the backend cannot be reached
    async fn get_schedule(&self, id: &WashroomId) -> Result<WeeklySchedule>;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> Result<bool>;
}

/// What to do when a looked-up washroom does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEntityPolicy {
    /// Answer as if the washroom were closed all week.
    #[default]
    TreatAsEmpty,
    /// Propagate [`HoursError::NotFound`] to the caller.
    Reject,
}

/// Load a schedule, applying `policy` to unknown ids.
///
/// Other store errors always propagate unchanged. Nothing is retried.
///
/// # Errors
///
/// Returns [`HoursError::NotFound`] under [`MissingEntityPolicy::Reject`], or
/// whatever non-`NotFound` error the store reports.
pub async fn fetch_schedule(
    store: &dyn HoursStore,
    id: &WashroomId,
    policy: MissingEntityPolicy,
) -> Result<WeeklySchedule> {
    match store.get_schedule(id).await {
        Ok(schedule) => Ok(schedule),
        Err(HoursError::NotFound(_)) if policy == MissingEntityPolicy::TreatAsEmpty => {
            tracing::debug!(washroom = %id, "unknown washroom, treating as closed all week");
            Ok(WeeklySchedule::new())
        }
        Err(e) => {
            if e.is_transient() {
                tracing::warn!(washroom = %id, error = %e, "schedule lookup failed");
            }
            Err(e)
        }
    }
}

/// In-memory store.
///
/// Cloning is cheap and clones share the same data.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    data: Arc<RwLock<StoreData>>,
}

#[derive(Debug)]
struct StoreData {
    washrooms: HashMap<WashroomId, WeeklySchedule>,
    is_healthy: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct SeedDocument {
    #[serde(default)]
    washrooms: Vec<SeedEntry>,
}

#[derive(Deserialize)]
struct SeedEntry {
    id: WashroomId,
    #[serde(default)]
    times: WeeklySchedule,
}

impl InMemoryStore {
    /// Create an empty, healthy store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreData {
                washrooms: HashMap::new(),
                is_healthy: true,
            })),
        }
    }

    /// Build a store from a seed document.
    ///
    /// Later entries with a repeated id replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::Seed`] if the document is malformed or contains
    /// an invalid id or interval.
    pub fn from_seed_json(json: &str) -> Result<Self> {
        let doc: SeedDocument =
            serde_json::from_str(json).map_err(|e| HoursError::Seed(e.to_string()))?;
        let store = Self::new();
        for entry in doc.washrooms {
            store.insert(entry.id, entry.times)?;
        }
        Ok(store)
    }

    /// Read and parse a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::Seed`] if the file cannot be read or parsed.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| HoursError::Seed(format!("{}: {e}", path.display())))?;
        let store = Self::from_seed_json(&json)?;
        tracing::info!(path = %path.display(), washrooms = store.len(), "loaded seed file");
        Ok(store)
    }

    /// Insert or replace a washroom's schedule.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::StoreUnavailable`] if the lock is poisoned.
    pub fn insert(&self, id: WashroomId, schedule: WeeklySchedule) -> Result<()> {
        self.write()?.washrooms.insert(id, schedule);
        Ok(())
    }

    /// Remove a washroom, returning its schedule if it existed.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::StoreUnavailable`] if the lock is poisoned.
    pub fn remove(&self, id: &WashroomId) -> Result<Option<WeeklySchedule>> {
        Ok(self.write()?.washrooms.remove(id))
    }

    /// Drop every washroom.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::StoreUnavailable`] if the lock is poisoned.
    pub fn clear(&self) -> Result<()> {
        self.write()?.washrooms.clear();
        Ok(())
    }

    /// Simulate a backend outage (`false`) or recovery (`true`).
    ///
    /// While unhealthy, lookups fail with [`HoursError::StoreUnavailable`].
    pub fn set_healthy(&self, healthy: bool) {
        match self.data.write() {
            Ok(mut data) => data.is_healthy = healthy,
            Err(poisoned) => poisoned.into_inner().is_healthy = healthy,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.washrooms.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreData>> {
        self.data
            .write()
            .map_err(|_| HoursError::StoreUnavailable("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl HoursStore for InMemoryStore {
    async fn get_schedule(&self, id: &WashroomId) -> Result<WeeklySchedule> {
        let data = self
            .data
            .read()
            .map_err(|_| HoursError::StoreUnavailable("store lock poisoned".to_string()))?;
        if !data.is_healthy {
            return Err(HoursError::StoreUnavailable(
                "in-memory store marked unhealthy".to_string(),
            ));
        }
        data.washrooms
            .get(id)
            .cloned()
            .ok_or_else(|| HoursError::NotFound(id.to_string()))
    }

    async fn health_check(&self) -> Result<bool> {
        let data = self
            .data
            .read()
            .map_err(|_| HoursError::StoreUnavailable("store lock poisoned".to_string()))?;
        Ok(data.is_healthy)
    }
}
