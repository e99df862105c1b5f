//! Village population figures

use std::sync::Arc;

use shared::models::{PopulationRecord, PopulationStats};

use super::configure;
use crate::resolver::{Fallback, Resolved, Resolver};
use crate::seed;
use crate::sources::{CensusApi, VillageRef, WorldBank};
use crate::{ClientConfig, HttpClient};

struct CensusSeed;

impl Fallback<VillageRef, PopulationRecord> for CensusSeed {
    fn seed(&self, village: &VillageRef) -> Option<PopulationRecord> {
        seed::census_2011(village.id)
    }

    fn sentinel(&self, village: &VillageRef) -> PopulationRecord {
        PopulationRecord::unknown(village.id)
    }
}

pub struct PopulationService {
    resolver: Resolver<VillageRef, PopulationRecord>,
}

impl PopulationService {
    pub fn new(config: &ClientConfig, http: &HttpClient) -> Self {
        let resolver = Resolver::new("population", Arc::new(CensusSeed))
            .with_source(Arc::new(CensusApi::new(http.clone(), &config.urls.data_gov)))
            .with_source(Arc::new(WorldBank::new(http.clone(), &config.urls.world_bank)));
        Self {
            resolver: configure(resolver, config),
        }
    }

    pub async fn population(&self, village: &VillageRef) -> Resolved<PopulationRecord> {
        self.resolver.resolve(village).await
    }

    pub async fn population_batch(&self, villages: &[VillageRef]) -> Vec<Resolved<PopulationRecord>> {
        self.resolver.resolve_batch(villages).await
    }
}

/// Total, rounded average, max and min over villages with a known population
///
/// Villages reporting 0 are left out; all figures are 0 when none remain.
pub fn population_stats(records: &[PopulationRecord]) -> PopulationStats {
    let pops: Vec<u64> = records
        .iter()
        .map(|r| r.population)
        .filter(|p| *p > 0)
        .collect();
    let (Some(&max), Some(&min)) = (pops.iter().max(), pops.iter().min()) else {
        return PopulationStats::default();
    };
    let total: u64 = pops.iter().sum();
    let count = pops.len() as u64;
    PopulationStats {
        total_population: total,
        average_population: (total + count / 2) / count,
        max_population: max,
        min_population: min,
    }
}
