//! Village list providers

use async_trait::async_trait;
use serde_json::Value;

use shared::models::Village;

use super::{BlockRef, first_str, lenient_u64};
use crate::http::{HttpClient, join};
use crate::{ClientResult, Source};

/// LGD village directory on data.gov.in
const LGD_VILLAGE_RESOURCE: &str = "f0aedc01-2e2d-4e6e-b926-6b5e1f47ab45";

fn village_from(idx: usize, raw: &Value, name_keys: &[&str], block: &BlockRef) -> Village {
    let name = first_str(raw, name_keys).unwrap_or_else(|| "Unknown".to_string());
    Village {
        id: idx as u32 + 1,
        description: first_str(raw, &["description"])
            .unwrap_or_else(|| format!("{name} गाँव, {} ब्लॉक, {}", block.block, block.district)),
        population: lenient_u64(&raw["population"]),
        wards: lenient_u64(&raw["wards"]) as u32,
        sarpanch: first_str(raw, &["sarpanch"]),
        phone: first_str(raw, &["phone"]),
        name,
    }
}

fn non_empty(villages: Vec<Village>) -> Option<Vec<Village>> {
    (!villages.is_empty()).then_some(villages)
}

/// opendatastack.in village API
pub struct OpenDataStack {
    http: HttpClient,
    base_url: String,
}

impl OpenDataStack {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Source<BlockRef, Vec<Village>> for OpenDataStack {
    fn name(&self) -> &'static str {
        "OpenDataStack"
    }

    async fn fetch(&self, block: &BlockRef) -> ClientResult<Option<Vec<Village>>> {
        let url = join(&self.base_url, "/api/villages");
        let body: Value = self
            .http
            .get_json(
                &url,
                &[
                    ("state", block.state),
                    ("district", block.district),
                    ("block", block.block),
                    ("format", "json"),
                ],
            )
            .await?;

        let Some(raw) = body.get("villages").and_then(Value::as_array) else {
            return Ok(None);
        };
        Ok(non_empty(
            raw.iter()
                .enumerate()
                .map(|(i, v)| village_from(i, v, &["name", "village_name"], block))
                .collect(),
        ))
    }
}

/// data.gov.in CKAN SQL query over the LGD village directory
pub struct DataGovVillages {
    http: HttpClient,
    base_url: String,
}

impl DataGovVillages {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn sql(block: &BlockRef) -> String {
        format!(
            "SELECT * FROM \"{LGD_VILLAGE_RESOURCE}\" WHERE \"stateNameEnglish\"='{}' \
             AND \"districtNameEnglish\"='{}' AND \"subdistrictNameEnglish\"='{}' LIMIT 1000",
            block.state, block.district, block.block
        )
    }
}

#[async_trait]
impl Source<BlockRef, Vec<Village>> for DataGovVillages {
    fn name(&self) -> &'static str {
        "data.gov.in"
    }

    async fn fetch(&self, block: &BlockRef) -> ClientResult<Option<Vec<Village>>> {
        let url = join(&self.base_url, "/api/3/action/datastore_search_sql");
        let sql = Self::sql(block);
        let body: Value = self.http.get_json(&url, &[("sql", sql.as_str())]).await?;

        if body.get("success").and_then(Value::as_bool) != Some(true) {
            return Ok(None);
        }
        let Some(records) = body.pointer("/result/records").and_then(Value::as_array) else {
            return Ok(None);
        };
        Ok(non_empty(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| village_from(i, r, &["villageNameEnglish", "village_name"], block))
                .collect(),
        ))
    }
}

/// Wikipedia article on the block
///
/// Only prose is available there, so this source never yields a list; a
/// reachable endpoint is logged and the chain moves on.
pub struct Wikipedia {
    http: HttpClient,
    base_url: String,
}

impl Wikipedia {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Source<BlockRef, Vec<Village>> for Wikipedia {
    fn name(&self) -> &'static str {
        "Wikipedia"
    }

    async fn fetch(&self, block: &BlockRef) -> ClientResult<Option<Vec<Village>>> {
        let url = join(&self.base_url, "/w/api.php");
        let title = format!("{}_block", block.block);
        let _: Value = self
            .http
            .get_json(
                &url,
                &[
                    ("action", "query"),
                    ("titles", title.as_str()),
                    ("prop", "extracts"),
                    ("explaintext", "true"),
                    ("format", "json"),
                ],
            )
            .await?;
        tracing::debug!(block = %block, "Wikipedia reachable but has no structured village list");
        Ok(None)
    }
}
