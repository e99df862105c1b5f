//! Panchayat member directory Model (civic app)

use serde::{Deserialize, Serialize};

/// Elected representative listed on the members page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub ward: String,
    /// `None` for members who serve the whole constituency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Member {
    pub fn serves_constituency(&self) -> bool {
        self.village_id.is_none()
    }
}
