//! Shared application state

use std::sync::Arc;

use property_store::{AgentState, DemoTicker, PropertyStore};
use shared_types::ActivityItem;
use tokio::sync::{Mutex, RwLock};

/// State handed to every handler.
///
/// Mutating handlers take the store's write lock for the whole operation, so
/// concurrent requests never observe a half-applied change. The demo ticker
/// has its own lock and never blocks on the store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<PropertyStore>>,
    pub ticker: Arc<Mutex<DemoTicker>>,
}

impl AppState {
    pub fn new(store: PropertyStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            ticker: Arc::new(Mutex::new(DemoTicker::new())),
        }
    }

    /// Advance the simulated agent status
    pub async fn agent_state(&self) -> AgentState {
        self.ticker.lock().await.next_agent_state()
    }

    /// Next rotating window of the activity log
    pub async fn activity_slice(&self, limit: usize) -> Vec<ActivityItem> {
        let store = self.store.read().await;
        let mut ticker = self.ticker.lock().await;
        ticker.activity_slice(store.activity_log(), limit)
    }
}
