//! Village, population and pradhan models (civic app)

use serde::{Deserialize, Serialize};

/// Gram panchayat village of the block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub wards: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sarpanch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Population figures for one village
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationRecord {
    pub village_id: u32,
    pub population: u64,
    pub males: u64,
    pub females: u64,
    /// Census year the figures come from
    pub year: u16,
}

impl PopulationRecord {
    /// Record with no known figures
    pub fn unknown(village_id: u32) -> Self {
        Self {
            village_id,
            population: 0,
            males: 0,
            females: 0,
            year: 2011,
        }
    }
}

/// Aggregate statistics over a set of population records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationStats {
    pub total_population: u64,
    pub average_population: u64,
    pub max_population: u64,
    pub min_population: u64,
}

/// Term of office
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<u16>,
}

/// Elected village head (pradhan / sarpanch)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PradhanRecord {
    pub village_id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure: Option<Tenure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
}

/// Name shown when no pradhan information exists ("information not available")
pub const PRADHAN_UNKNOWN_NAME: &str = "जानकारी उपलब्ध नहीं";

impl PradhanRecord {
    /// Sentinel record for a village without any known pradhan
    pub fn unknown(village_id: u32) -> Self {
        Self {
            village_id,
            name: PRADHAN_UNKNOWN_NAME.to_string(),
            phone: None,
            email: None,
            tenure: None,
            party: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_records() {
        let p = PopulationRecord::unknown(42);
        assert_eq!(p.population, 0);
        assert_eq!(p.year, 2011);

        let pr = PradhanRecord::unknown(42);
        assert_eq!(pr.name, PRADHAN_UNKNOWN_NAME);
        assert!(pr.phone.is_none());
    }

    #[test]
    fn test_village_defaults() {
        let v: Village = serde_json::from_str(r#"{"id":3,"name":"Pindra"}"#).unwrap();
        assert_eq!(v.population, 0);
        assert_eq!(v.wards, 0);
        assert!(v.sarpanch.is_none());
    }
}
