//! Citizen complaints
//!
//! Submitted complaints are kept newest first under their own store key;
//! listings append the seeded complaints after them.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use shared::models::{
    ANONYMOUS_USER, Complaint, ComplaintStatus, ComplaintUpdate, DEFAULT_COMPLAINT_CATEGORY,
    NewComplaint,
};
use shared::store::{Collection, LocalStore, keys};
use shared::util::{now, snowflake_id, tracking_id};

use crate::filters::complaints_by_village;
use crate::search::{SearchMethod, multi_field_search};
use crate::seed;
use crate::{ClientError, ClientResult};

/// India Standard Time, UTC+05:30
const IST_OFFSET_MINUTES: i64 = 5 * 60 + 30;

const MAX_TITLE_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 2000;

/// `dd/mm/yyyy` and `HH:MM` in IST
fn ist_stamp(at: DateTime<Utc>) -> (String, String) {
    let local = at.naive_utc() + Duration::minutes(IST_OFFSET_MINUTES);
    (
        local.format("%d/%m/%Y").to_string(),
        local.format("%H:%M").to_string(),
    )
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct ComplaintService {
    submitted: Collection<Complaint>,
    seeded: Arc<Vec<Complaint>>,
    write_lock: Arc<Mutex<()>>,
}

impl ComplaintService {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            submitted: Collection::new(store, keys::COMPLAINTS),
            seeded: Arc::new(seed::complaints()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Submitted complaints followed by seeded ones, optionally for one village
    pub async fn list(&self, village_id: Option<u32>) -> ClientResult<Vec<Complaint>> {
        let mut all = self.submitted.get_all()?;
        all.extend(self.seeded.iter().cloned());
        Ok(complaints_by_village(all, village_id))
    }

    /// Store a new complaint and return it with its tracking id
    #[tracing::instrument(skip(self, new), fields(village = %new.village))]
    pub async fn submit(&self, new: NewComplaint) -> ClientResult<Complaint> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(ClientError::Validation("title must not be empty".into()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ClientError::Validation(format!(
                "title is too long (max {MAX_TITLE_LEN} chars)"
            )));
        }
        if new.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ClientError::Validation(format!(
                "description is too long (max {MAX_DESCRIPTION_LEN} chars)"
            )));
        }

        let (date, time) = ist_stamp(now());
        let complaint = Complaint {
            id: snowflake_id(),
            tracking_id: tracking_id(),
            title: title.to_string(),
            description: new.description.trim().to_string(),
            date,
            time,
            user_name: non_blank(new.user_name).unwrap_or_else(|| ANONYMOUS_USER.to_string()),
            village: new.village.trim().to_string(),
            village_id: new.village_id,
            status: ComplaintStatus::Pending,
            category: non_blank(new.category)
                .unwrap_or_else(|| DEFAULT_COMPLAINT_CATEGORY.to_string()),
            votes: 0,
            image: non_blank(new.image),
        };

        let _guard = self.write_lock.lock().await;
        self.submitted.prepend(complaint.clone())?;
        tracing::info!(tracking_id = %complaint.tracking_id, "Complaint submitted");
        Ok(complaint)
    }

    /// Look a complaint up by tracking id, submitted ones first
    pub async fn status(&self, tracking_id: &str) -> ClientResult<Option<Complaint>> {
        let tracking_id = tracking_id.trim();
        if let Some(found) = self
            .submitted
            .get_all()?
            .into_iter()
            .find(|c| c.tracking_id.eq_ignore_ascii_case(tracking_id))
        {
            return Ok(Some(found));
        }
        Ok(self
            .seeded
            .iter()
            .find(|c| c.tracking_id.eq_ignore_ascii_case(tracking_id))
            .cloned())
    }

    /// Add one vote to a submitted complaint
    pub async fn upvote(&self, id: i64) -> ClientResult<Option<Complaint>> {
        let _guard = self.write_lock.lock().await;
        Ok(self.submitted.modify(&id, |c| c.votes += 1)?)
    }

    /// Move a submitted complaint to `status`; `false` when unknown
    pub async fn set_status(&self, id: i64, status: ComplaintStatus) -> ClientResult<bool> {
        let _guard = self.write_lock.lock().await;
        let updated = self.submitted.update(
            &id,
            ComplaintUpdate {
                status: Some(status),
                votes: None,
            },
        )?;
        if updated {
            tracing::info!(complaint_id = id, status = ?status, "Complaint status changed");
        }
        Ok(updated)
    }

    /// Complaints whose title, description or village contains `query`
    pub async fn search(&self, query: &str) -> ClientResult<Vec<Complaint>> {
        let all = self.list(None).await?;
        Ok(multi_field_search(
            &all,
            query,
            |c| vec![c.title.as_str(), c.description.as_str(), c.village.as_str()],
            SearchMethod::Simple,
        )
        .into_iter()
        .cloned()
        .collect())
    }
}
