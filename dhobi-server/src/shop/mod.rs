//! Shop storage manager
//!
//! Order, customer and payment operations of the dry-cleaning shop over
//! the local store. Mutations are serialised through one async mutex so a
//! payment record and its ledger effect land together.

mod error;
mod storage;

pub use error::{ShopError, ShopResult};
pub use storage::{OrderFilter, ShopStorage};
