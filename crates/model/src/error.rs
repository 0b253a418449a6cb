//! Typed error type for the model crate.

use thiserror::Error;
use uuid::Uuid;

/// Errors produced when working with a record's primary-key identity.
///
/// Storage-level violations (duplicate keys, null key columns) are raised by
/// the database, not here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The identity is already bound; a key is assigned exactly once.
    #[error("identity already assigned as '{existing}', refusing to rebind to '{attempted}'")]
    AlreadyAssigned { existing: Uuid, attempted: Uuid },

    /// A key was demanded from an identity that was never assigned.
    #[error("identity has not been assigned")]
    Unassigned,
}
