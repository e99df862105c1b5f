//! Village pradhans

use std::sync::Arc;

use shared::models::PradhanRecord;

use super::configure;
use crate::resolver::{Fallback, Resolved, Resolver};
use crate::seed;
use crate::sources::{Lgd, LocalBodyData, VillageRef};
use crate::{ClientConfig, HttpClient};

struct PradhanSeed;

impl Fallback<VillageRef, PradhanRecord> for PradhanSeed {
    fn seed(&self, village: &VillageRef) -> Option<PradhanRecord> {
        seed::pradhan(village.id)
    }

    fn sentinel(&self, village: &VillageRef) -> PradhanRecord {
        PradhanRecord::unknown(village.id)
    }
}

pub struct PradhanService {
    resolver: Resolver<VillageRef, PradhanRecord>,
}

impl PradhanService {
    pub fn new(config: &ClientConfig, http: &HttpClient) -> Self {
        let resolver = Resolver::new("pradhan", Arc::new(PradhanSeed))
            .with_source(Arc::new(Lgd::new(http.clone(), &config.urls.lgd)))
            .with_source(Arc::new(LocalBodyData::new(
                http.clone(),
                &config.urls.local_body_data,
            )));
        Self {
            resolver: configure(resolver, config),
        }
    }

    pub async fn pradhan(&self, village: &VillageRef) -> Resolved<PradhanRecord> {
        self.resolver.resolve(village).await
    }

    pub async fn pradhan_batch(&self, villages: &[VillageRef]) -> Vec<Resolved<PradhanRecord>> {
        self.resolver.resolve_batch(villages).await
    }
}
