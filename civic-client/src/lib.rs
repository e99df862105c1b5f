//! Civic Client - data access for the Pindra constituency app
//!
//! Villages, population and pradhan records come from public government
//! APIs through a [`Resolver`] that falls back to seeded local data when
//! every source fails. Complaints live in the local store.

pub mod cache;
pub mod config;
pub mod error;
pub mod filters;
pub mod http;
pub mod resolver;
pub mod search;
pub mod seed;
pub mod services;
pub mod sources;

pub use cache::TtlCache;
pub use config::{ClientConfig, SourceUrls};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use resolver::{DataSource, Fallback, Resolved, Resolver, Source};
pub use search::{Page, SearchMethod};
pub use services::{
    BlockRef, CivicClient, ComplaintService, MemberService, PINDRA_BLOCK, PopulationService,
    PradhanService, SchemeService, VillageProfile, VillageRef, VillageService, population_stats,
};
