//! Data models
//!
//! Shared between dhobi-server, civic-client and API consumers.
//! Field names serialise as camelCase, the layout of the persisted
//! collections. Money is `Decimal` serialised as a JSON number.

pub mod complaint;
pub mod customer;
pub mod member;
pub mod order;
pub mod payment;
pub mod scheme;
pub mod village;

// Re-exports
pub use complaint::*;
pub use customer::*;
pub use member::*;
pub use order::*;
pub use payment::*;
pub use scheme::*;
pub use village::*;

use std::fmt::Debug;

/// A record stored in a keyed collection
pub trait Record {
    type Id: PartialEq + Debug + ?Sized;

    fn id(&self) -> &Self::Id;
}

/// A partial update merged into an existing record
///
/// Fields left as `None` keep their current value.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}
