//! Government scheme Model

use serde::{Deserialize, Serialize};

/// Category filter value meaning "all categories"
pub const ALL_CATEGORIES: &str = "सभी";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub eligibility: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
