//! Panchayat member directory
//!
//! Constituency members come from the seed list. Each village adds a
//! pradhan and one member per ward for the first three wards, generated
//! from the village id so the same village always lists the same people.

use shared::models::{Member, Village};

use crate::search::simple_search;
use crate::seed;

const FIRST_NAMES: &[&str] = &[
    "राम", "श्याम", "विजय", "संजय", "कमलेश", "राजेश", "दिनेश", "सुनीता", "गीता", "कमला", "विमला",
    "पुष्पा", "मीना",
];

const LAST_NAMES: &[&str] = &[
    "सिंह", "यादव", "मौर्या", "पटेल", "मिश्रा", "तिवारी", "गौड़", "प्रजापति", "राजभर", "चौरसिया",
];

/// Wards listed per village
pub const LISTED_WARDS: u64 = 3;

const PRADHAN_ID_BASE: u64 = 1000;
const WARD_MEMBER_ID_BASE: u64 = 2000;
const PHONE_DIGITS: usize = 9;

fn pick(names: &[&'static str], n: u64) -> &'static str {
    names[(n % names.len() as u64) as usize]
}

/// `prefix` followed by at most nine digits of `n`
fn phone(prefix: char, n: u64) -> String {
    let digits = n.to_string();
    let mut phone = String::with_capacity(PHONE_DIGITS + 1);
    phone.push(prefix);
    phone.extend(digits.chars().take(PHONE_DIGITS));
    phone
}

fn member_id(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Gram pradhan of `village`
pub fn village_pradhan(village: &Village) -> Member {
    let seed = u64::from(village.id);
    let first = pick(FIRST_NAMES, seed);
    let name = if seed % 3 == 0 {
        format!("{first} देवी")
    } else {
        format!("{first} {}", pick(LAST_NAMES, seed * 7))
    };
    let avatar = if seed % 2 == 0 { "👨‍💼" } else { "👩‍💼" };

    Member {
        id: member_id(PRADHAN_ID_BASE + seed),
        name,
        role: "ग्राम प्रधान (सरपंच)".to_string(),
        ward: "सम्पूर्ण ग्राम".to_string(),
        village_id: Some(village.id),
        phone: Some(phone('9', seed * 1_234_567)),
        avatar: Some(avatar.to_string()),
    }
}

/// Ward members of `village`, ward 1 first
pub fn ward_members(village: &Village) -> Vec<Member> {
    let id = u64::from(village.id);
    (1..=LISTED_WARDS)
        .map(|ward| {
            let avatar = if (id + ward) % 2 == 0 { "👨" } else { "👩" };
            Member {
                id: member_id(WARD_MEMBER_ID_BASE + id * 10 + ward),
                name: format!(
                    "{} {}",
                    pick(FIRST_NAMES, id + ward),
                    pick(LAST_NAMES, id * ward)
                ),
                role: format!("वार्ड सदस्य (वार्ड {ward})"),
                ward: format!("वार्ड {ward}"),
                village_id: Some(village.id),
                phone: Some(phone('8', id * 98_765 + ward)),
                avatar: Some(avatar.to_string()),
            }
        })
        .collect()
}

pub struct MemberService {
    constituency: Vec<Member>,
}

impl MemberService {
    pub fn new() -> Self {
        Self {
            constituency: seed::constituency_members(),
        }
    }

    /// Constituency members, then the village's pradhan and ward members
    pub fn members(&self, village: &Village) -> Vec<Member> {
        let mut members = self.constituency.clone();
        members.push(village_pradhan(village));
        members.extend(ward_members(village));
        members
    }

    /// Listing for "all villages": constituency members once, then each
    /// village's own members in village order
    pub fn all_members(&self, villages: &[Village]) -> Vec<Member> {
        let mut members = self.constituency.clone();
        for village in villages {
            members.push(village_pradhan(village));
            members.extend(ward_members(village));
        }
        members
    }

    /// Members whose name contains `query`
    pub fn search(&self, members: &[Member], query: &str) -> Vec<Member> {
        simple_search(members, query, |m| m.name.as_str())
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Default for MemberService {
    fn default() -> Self {
        Self::new()
    }
}
