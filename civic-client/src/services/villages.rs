//! Village list

use std::sync::Arc;

use shared::models::Village;

use super::configure;
use crate::resolver::{Fallback, Resolved, Resolver};
use crate::search::fuzzy_search;
use crate::seed;
use crate::sources::{BlockRef, DataGovVillages, OpenDataStack, PINDRA_BLOCK, Wikipedia};
use crate::{ClientConfig, HttpClient};

/// Seeded villages exist for the Pindra block only
struct VillageSeed;

impl Fallback<BlockRef, Vec<Village>> for VillageSeed {
    fn seed(&self, block: &BlockRef) -> Option<Vec<Village>> {
        (*block == PINDRA_BLOCK).then(seed::villages)
    }

    fn sentinel(&self, _block: &BlockRef) -> Vec<Village> {
        Vec::new()
    }
}

pub struct VillageService {
    block: BlockRef,
    resolver: Resolver<BlockRef, Vec<Village>>,
}

impl VillageService {
    pub fn new(config: &ClientConfig, http: &HttpClient) -> Self {
        let urls = &config.urls;
        let resolver = Resolver::new("villages", Arc::new(VillageSeed))
            .with_source(Arc::new(OpenDataStack::new(
                http.clone(),
                &urls.open_data_stack,
            )))
            .with_source(Arc::new(DataGovVillages::new(http.clone(), &urls.data_gov)))
            .with_source(Arc::new(Wikipedia::new(http.clone(), &urls.wikipedia)));
        Self::with_resolver(PINDRA_BLOCK, configure(resolver, config))
    }

    /// Service over a custom source chain
    pub fn with_resolver(block: BlockRef, resolver: Resolver<BlockRef, Vec<Village>>) -> Self {
        Self { block, resolver }
    }

    pub async fn villages(&self) -> Resolved<Vec<Village>> {
        self.resolver.resolve(&self.block).await
    }

    pub async fn village(&self, id: u32) -> Option<Village> {
        self.villages().await.data.into_iter().find(|v| v.id == id)
    }

    /// Villages by name, typo tolerant
    pub async fn search(&self, query: &str) -> Vec<Village> {
        let villages = self.villages().await.data;
        fuzzy_search(&villages, query, |v| v.name.as_str())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Forget the cached list so the next call goes to the sources again
    pub fn refresh(&self) {
        self.resolver.invalidate(Some(&self.block));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::DataSource;

    fn offline() -> VillageService {
        VillageService::with_resolver(PINDRA_BLOCK, Resolver::new("villages", Arc::new(VillageSeed)))
    }

    #[tokio::test]
    async fn test_seed_when_no_sources() {
        let r = offline().villages().await;
        assert_eq!(r.source, DataSource::Local { seeded: true });
        assert_eq!(r.data.len(), 10);
    }

    #[tokio::test]
    async fn test_unknown_block_is_empty() {
        let other = BlockRef {
            state: "Uttar Pradesh",
            district: "Varanasi",
            block: "Cholapur",
        };
        let service =
            VillageService::with_resolver(other, Resolver::new("villages", Arc::new(VillageSeed)));
        let r = service.villages().await;
        assert!(r.data.is_empty());
        assert_eq!(r.source, DataSource::Local { seeded: false });
    }

    #[tokio::test]
    async fn test_lookup_and_search() {
        let service = offline();
        assert_eq!(service.village(2).await.unwrap().name, "बाबतपुर");
        assert!(service.village(99).await.is_none());

        let hits = service.search("रामपुर").await;
        assert_eq!(hits[0].name, "रामपुर");
    }
}
