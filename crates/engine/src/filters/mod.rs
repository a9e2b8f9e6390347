//! Filters narrowing the catalog to viable candidates.
//!
//! Two stages run in order: the hard capability predicate, then the caller's
//! optional soft constraints.

mod capability;
mod constraints;

pub use capability::CapabilityFilter;
pub use constraints::ConstraintFilter;
