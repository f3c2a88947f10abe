//! # Query layer
//!
//! The traversal core: entity resolution ([`Resolver`]), typed relation
//! lookup with catalog-driven reverse inference ([`RelationIndex`]), and
//! one-hop graph navigation ([`Navigator`]).
//!
//! All operations are synchronous, side-effect-free reads against an
//! already-populated [`crate::store::Store`]; the components borrow the
//! store per call and hold nothing across calls.

mod error;
mod navigator;
mod relation_index;
mod resolver;

pub use error::{WordNetError, WordNetResult};
pub use navigator::Navigator;
pub use relation_index::RelationIndex;
pub use resolver::Resolver;
