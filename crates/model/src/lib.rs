//! `model` crate — shared persistence-identity primitives.
//!
//! Every persistent record type carries the same primary key: a UUID,
//! unset at construction and bound exactly once.  Instead of inheriting a
//! mapped base class, record structs embed an [`Identity`] field by
//! composition (or wrap their payload in a [`Record`]).

pub mod error;
pub mod identity;
pub mod pg;
pub mod record;

pub use error::IdentityError;
pub use identity::{Identified, Identity};
pub use record::Record;
