//! Population providers

use async_trait::async_trait;
use serde_json::Value;

use shared::models::PopulationRecord;

use super::{VillageRef, lenient_u64};
use crate::http::{HttpClient, join};
use crate::{ClientResult, Source};

/// Census 2011 village table on data.gov.in
const CENSUS_RESOURCE: &str = "0e0de90d-d76f-49bb-8c42-e8b1a5ee4c7f";

/// data.gov.in Census 2011 lookup by village name
pub struct CensusApi {
    http: HttpClient,
    base_url: String,
}

impl CensusApi {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Source<VillageRef, PopulationRecord> for CensusApi {
    fn name(&self) -> &'static str {
        "Census 2011"
    }

    async fn fetch(&self, village: &VillageRef) -> ClientResult<Option<PopulationRecord>> {
        let url = join(&self.base_url, "/api/3/action/datastore_search");
        let filters = serde_json::json!({ "village": village.name }).to_string();
        let body: Value = self
            .http
            .get_json(
                &url,
                &[
                    ("resource_id", CENSUS_RESOURCE),
                    ("filters", filters.as_str()),
                    ("limit", "1"),
                ],
            )
            .await?;

        if body.get("success").and_then(Value::as_bool) != Some(true) {
            return Ok(None);
        }
        let Some(record) = body.pointer("/result/records/0") else {
            return Ok(None);
        };
        Ok(Some(PopulationRecord {
            village_id: village.id,
            population: lenient_u64(&record["population"]),
            males: lenient_u64(&record["males"]),
            females: lenient_u64(&record["females"]),
            year: 2011,
        }))
    }
}

/// World Bank population indicator
///
/// The indicator is country level only, so a reachable endpoint still
/// yields nothing for a village.
pub struct WorldBank {
    http: HttpClient,
    base_url: String,
}

impl WorldBank {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Source<VillageRef, PopulationRecord> for WorldBank {
    fn name(&self) -> &'static str {
        "World Bank"
    }

    async fn fetch(&self, village: &VillageRef) -> ClientResult<Option<PopulationRecord>> {
        let url = join(&self.base_url, "/v2/country/IND/indicator/SP.POP.TOTL");
        let _: Value = self
            .http
            .get_json(&url, &[("format", "json"), ("per_page", "1")])
            .await?;
        tracing::debug!(village = %village, "World Bank has no village-level figures");
        Ok(None)
    }
}
