use std::sync::Arc;

use shared::store::{LocalStore, RedbStore};

use crate::core::{Config, Result};
use crate::shop::ShopStorage;

/// Handler state, cheap to clone
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Configuration (immutable) |
/// | shop | Orders / customers / payments over the local store |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub shop: ShopStorage,
}

impl ServerState {
    /// Build state around an already opened store
    pub fn new(config: Config, store: Arc<dyn LocalStore>) -> Self {
        let shop = ShopStorage::new(store).with_default_rate(config.rate_per_item);
        Self { config, shop }
    }

    /// Create the work directory and open the redb store inside it
    pub async fn initialize(config: &Config) -> Result<Self> {
        tokio::fs::create_dir_all(&config.work_dir).await?;
        let path = config.store_path();
        let store = RedbStore::open(&path)?;
        tracing::info!(path = %path.display(), "Local store opened");
        Ok(Self::new(config.clone(), Arc::new(store)))
    }
}
