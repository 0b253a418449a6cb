//! The primary-key holder shared by all persistent record types.
//!
//! Rules the holder enforces:
//! 1. The key is unset at construction and bound exactly once — by the
//!    caller up front, or by the persistence layer at first save.
//! 2. Once bound, the key never changes for the record's lifetime.
//! 3. The key is a real UUID end to end, never a string or integer alias.
//!
//! Key *generation* is deliberately not mandated: [`Identity::generate`]
//! covers client-side assignment, [`Identity::assign`] covers keys handed
//! back by the storage layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::IdentityError;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// UUID primary key embedded by every persistent record type.
///
/// Serialises transparently as the UUID itself (`null` while unassigned),
/// so records that embed one keep a flat wire shape.  A key uniquely
/// identifies one logical record for all time; keys are not reused after
/// the owning record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Option<Uuid>);

impl Identity {
    /// An identity with no key bound yet.
    ///
    /// Equivalent to `Identity::default()`; the state of every freshly
    /// constructed, never-saved record.
    pub const fn unassigned() -> Self {
        Self(None)
    }

    /// An identity already bound to `id`.
    ///
    /// Used where the key exists before the record does: rows read back
    /// from storage, or import/sync paths carrying external identity.
    pub const fn assigned(id: Uuid) -> Self {
        Self(Some(id))
    }

    /// An identity bound to a freshly generated random (v4) key.
    pub fn generate() -> Self {
        Self(Some(Uuid::new_v4()))
    }

    /// Bind this identity to `id`.
    ///
    /// # Errors
    /// [`IdentityError::AlreadyAssigned`] if a key is already bound — the
    /// key is assigned exactly once and never rewritten, even to the same
    /// value.
    pub fn assign(&mut self, id: Uuid) -> Result<(), IdentityError> {
        match self.0 {
            Some(existing) => Err(IdentityError::AlreadyAssigned {
                existing,
                attempted: id,
            }),
            None => {
                debug!(id = %id, "identity assigned");
                self.0 = Some(id);
                Ok(())
            }
        }
    }

    /// The bound key, if any.
    pub fn get(&self) -> Option<Uuid> {
        self.0
    }

    /// The bound key, or [`IdentityError::Unassigned`] for a record that
    /// was never keyed.
    pub fn require(&self) -> Result<Uuid, IdentityError> {
        self.0.ok_or(IdentityError::Unassigned)
    }

    /// Whether a key has been bound.
    pub fn is_assigned(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Uuid> for Identity {
    fn from(id: Uuid) -> Self {
        Self::assigned(id)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => write!(f, "unassigned"),
        }
    }
}

// ---------------------------------------------------------------------------
// Identified
// ---------------------------------------------------------------------------

/// Implemented by every record type that embeds an [`Identity`].
///
/// This trait is the seam the mapped-superclass pattern becomes in Rust:
/// concrete record structs embed the field and implement the two accessors,
/// generic code works against the trait.
pub trait Identified {
    /// The record's primary-key identity.
    fn identity(&self) -> &Identity;

    /// Mutable access, for the persistence layer binding the key at first
    /// save.
    fn identity_mut(&mut self) -> &mut Identity;

    /// Convenience accessor for the bound key.
    fn id(&self) -> Option<Uuid> {
        self.identity().get()
    }
}
