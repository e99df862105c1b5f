//! Civic data services
//!
//! | Service | Backing |
//! |---------|---------|
//! | villages | OpenDataStack → data.gov.in → Wikipedia → seed |
//! | population | Census 2011 API → World Bank → seed → sentinel |
//! | pradhans | LGD → localbodydata.com → seed → sentinel |
//! | schemes | seed list |
//! | members | seed MLA + generated per village |
//! | complaints | local store + seed list |

use std::sync::Arc;

use serde::Serialize;

use shared::models::{
    Complaint, Member, PopulationRecord, PopulationStats, PradhanRecord, Village,
};
use shared::store::LocalStore;

mod complaints;
mod members;
mod population;
mod pradhan;
mod schemes;
mod villages;

pub use complaints::ComplaintService;
pub use members::{MemberService, village_pradhan, ward_members};
pub use population::{PopulationService, population_stats};
pub use pradhan::PradhanService;
pub use schemes::{MYSCHEME_URL, SchemeService};
pub use villages::VillageService;

pub use crate::sources::{BlockRef, PINDRA_BLOCK, VillageRef};

use crate::resolver::{Resolved, Resolver};
use crate::{ClientConfig, ClientResult};

/// Apply the configured timeout and cache to a resolver
fn configure<K, T>(resolver: Resolver<K, T>, config: &ClientConfig) -> Resolver<K, T>
where
    K: std::fmt::Display + Sync,
    T: Clone + Send + Sync,
{
    let resolver = resolver.with_timeout(config.timeout);
    match config.cache_ttl {
        Some(ttl) => resolver.with_cache(ttl),
        None => resolver,
    }
}

/// Everything the village detail page shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageProfile {
    pub village: Village,
    pub population: Resolved<PopulationRecord>,
    pub pradhan: Resolved<PradhanRecord>,
    pub complaints: Vec<Complaint>,
}

/// All civic services over one HTTP client and one local store
pub struct CivicClient {
    pub villages: VillageService,
    pub population: PopulationService,
    pub pradhans: PradhanService,
    pub schemes: SchemeService,
    pub complaints: ComplaintService,
    pub members: MemberService,
}

impl CivicClient {
    pub fn new(config: &ClientConfig, store: Arc<dyn LocalStore>) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        Ok(Self {
            villages: VillageService::new(config, &http),
            population: PopulationService::new(config, &http),
            pradhans: PradhanService::new(config, &http),
            schemes: SchemeService::new(),
            complaints: ComplaintService::new(store),
            members: MemberService::new(),
        })
    }

    /// Village with its population, pradhan and complaints
    ///
    /// `None` when the village id is not in the current village list.
    pub async fn village_profile(&self, village_id: u32) -> ClientResult<Option<VillageProfile>> {
        let Some(village) = self.villages.village(village_id).await else {
            return Ok(None);
        };
        let key = VillageRef::from(&village);
        let (population, pradhan) = tokio::join!(
            self.population.population(&key),
            self.pradhans.pradhan(&key)
        );
        let complaints = self.complaints.list(Some(village_id)).await?;
        Ok(Some(VillageProfile {
            village,
            population,
            pradhan,
            complaints,
        }))
    }

    /// Members page listing for one village, or every village when `None`
    ///
    /// `None` when the village id is not in the current village list.
    pub async fn village_members(&self, village_id: Option<u32>) -> Option<Vec<Member>> {
        match village_id {
            Some(id) => {
                let village = self.villages.village(id).await?;
                Some(self.members.members(&village))
            }
            None => {
                let villages = self.villages.villages().await.data;
                Some(self.members.all_members(&villages))
            }
        }
    }

    /// Population statistics across every village of the block
    pub async fn block_population_stats(&self) -> PopulationStats {
        let villages = self.villages.villages().await.data;
        let keys: Vec<VillageRef> = villages.iter().map(VillageRef::from).collect();
        let records: Vec<PopulationRecord> = self
            .population
            .population_batch(&keys)
            .await
            .into_iter()
            .map(|r| r.data)
            .collect();
        population_stats(&records)
    }
}
