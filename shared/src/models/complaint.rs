//! Complaint Model (civic app)

use serde::{Deserialize, Serialize};

use super::{Patch, Record};

/// Category used when the citizen does not pick one ("other")
pub const DEFAULT_COMPLAINT_CATEGORY: &str = "अन्य";

/// Name shown when the complaint is submitted without a name
pub const ANONYMOUS_USER: &str = "Anonymous";

/// Complaint progress
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

/// Citizen complaint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: i64,
    /// Issued on submission, used for status lookups
    pub tracking_id: String,
    pub title: String,
    pub description: String,
    /// Submission date, `dd/mm/yyyy` in IST
    pub date: String,
    /// Submission time, `HH:MM` in IST
    pub time: String,
    pub user_name: String,
    pub village: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village_id: Option<u32>,
    pub status: ComplaintStatus,
    pub category: String,
    pub votes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Record for Complaint {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

/// Complaint submission payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub village_id: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial complaint update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUpdate {
    pub status: Option<ComplaintStatus>,
    pub votes: Option<u32>,
}

impl Patch<Complaint> for ComplaintUpdate {
    fn apply_to(self, target: &mut Complaint) {
        if let Some(status) = self.status {
            target.status = status;
        }
        if let Some(votes) = self.votes {
            target.votes = votes;
        }
    }
}
