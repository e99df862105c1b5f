//! External data providers
//!
//! Every source is a [`Source`](crate::Source) implementation over the
//! shared [`HttpClient`](crate::HttpClient). Payloads are read leniently:
//! providers disagree on field names and on numbers versus strings.

use std::fmt;

use serde_json::Value;

mod population;
mod pradhan;
mod villages;

pub use population::{CensusApi, WorldBank};
pub use pradhan::{LocalBodyData, Lgd};
pub use villages::{DataGovVillages, OpenDataStack, Wikipedia};

/// Administrative block whose villages are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRef {
    pub state: &'static str,
    pub district: &'static str,
    pub block: &'static str,
}

pub const PINDRA_BLOCK: BlockRef = BlockRef {
    state: "Uttar Pradesh",
    district: "Varanasi",
    block: "Pindra",
};

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.state, self.district, self.block)
    }
}

/// Village lookup key: providers are queried by id or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageRef {
    pub id: u32,
    pub name: String,
}

impl VillageRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<&shared::models::Village> for VillageRef {
    fn from(v: &shared::models::Village) -> Self {
        Self::new(v.id, v.name.clone())
    }
}

impl fmt::Display for VillageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "village:{}", self.id)
    }
}

/// Number or numeric string, 0 otherwise
pub(crate) fn lenient_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// First non-empty string among `keys`
pub(crate) fn first_str(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| obj.get(k).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_numbers() {
        assert_eq!(lenient_u64(&json!(2500)), 2500);
        assert_eq!(lenient_u64(&json!("1800")), 1800);
        assert_eq!(lenient_u64(&json!(" 12 ")), 12);
        assert_eq!(lenient_u64(&json!("n/a")), 0);
        assert_eq!(lenient_u64(&json!(null)), 0);
        assert_eq!(lenient_u64(&json!(-4)), 0);
    }

    #[test]
    fn test_first_str() {
        let v = json!({ "name": "", "village_name": "Babatpur" });
        assert_eq!(first_str(&v, &["name", "village_name"]).as_deref(), Some("Babatpur"));
        assert_eq!(first_str(&v, &["missing"]), None);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(PINDRA_BLOCK.to_string(), "Uttar Pradesh/Varanasi/Pindra");
        assert_eq!(VillageRef::new(3, "Khalispur").to_string(), "village:3");
    }
}
