//! Village scoping for list pages
//!
//! `None` means "all villages" and returns the input unchanged.

use shared::models::{Complaint, Scheme};

pub fn complaints_by_village(complaints: Vec<Complaint>, village_id: Option<u32>) -> Vec<Complaint> {
    match village_id {
        None => complaints,
        Some(id) => complaints
            .into_iter()
            .filter(|c| c.village_id == Some(id))
            .collect(),
    }
}

/// Schemes are block-wide; every village sees all of them
pub fn schemes_by_village(schemes: Vec<Scheme>, _village_id: Option<u32>) -> Vec<Scheme> {
    schemes
}
