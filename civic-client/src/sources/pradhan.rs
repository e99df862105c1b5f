//! Pradhan (village head) providers

use async_trait::async_trait;
use serde_json::Value;

use shared::models::PradhanRecord;

use super::{VillageRef, first_str};
use crate::http::{HttpClient, join};
use crate::{ClientResult, Source};

fn pradhan_from(village_id: u32, raw: &Value) -> Option<PradhanRecord> {
    let name = first_str(raw, &["name"])?;
    Some(PradhanRecord {
        name,
        phone: first_str(raw, &["phone"]),
        email: first_str(raw, &["email"]),
        party: first_str(raw, &["party"]),
        ..PradhanRecord::unknown(village_id)
    })
}

/// Local Government Directory, looked up by village id
pub struct Lgd {
    http: HttpClient,
    base_url: String,
}

impl Lgd {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Source<VillageRef, PradhanRecord> for Lgd {
    fn name(&self) -> &'static str {
        "LGD"
    }

    async fn fetch(&self, village: &VillageRef) -> ClientResult<Option<PradhanRecord>> {
        let url = join(&self.base_url, &format!("/api/villages/{}", village.id));
        let body: Value = self.http.get_json(&url, &[]).await?;
        Ok(body
            .get("pradhan")
            .and_then(|p| pradhan_from(village.id, p)))
    }
}

/// localbodydata.com, looked up by village name
pub struct LocalBodyData {
    http: HttpClient,
    base_url: String,
}

impl LocalBodyData {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Source<VillageRef, PradhanRecord> for LocalBodyData {
    fn name(&self) -> &'static str {
        "localbodydata.com"
    }

    async fn fetch(&self, village: &VillageRef) -> ClientResult<Option<PradhanRecord>> {
        let url = join(
            &self.base_url,
            &format!("/api/villages/{}", urlencoding::encode(&village.name)),
        );
        let body: Value = self.http.get_json(&url, &[]).await?;
        Ok(body
            .get("sarpanch")
            .and_then(|p| pradhan_from(village.id, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pradhan_needs_a_name() {
        assert!(pradhan_from(1, &json!({ "phone": "123" })).is_none());
        let p = pradhan_from(1, &json!({ "name": "Rajesh Singh", "phone": "9876543210" })).unwrap();
        assert_eq!(p.village_id, 1);
        assert_eq!(p.phone.as_deref(), Some("9876543210"));
        assert!(p.email.is_none());
    }
}
