//! Generic record wrapper — payload plus primary-key identity.
//!
//! The alternative to embedding an [`Identity`] field directly: wrap the
//! payload in [`Record`] and get the identity plumbing (and the
//! [`Identified`] impl) for free.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Identified, Identity};

/// A payload of type `T` paired with its primary-key [`Identity`].
///
/// Derefs to the payload, so wrapped records read like the plain struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<T> {
    /// Primary key. Serialised as `id` to match the storage column name;
    /// a missing `id` deserialises as unassigned.
    #[serde(rename = "id", default)]
    pub identity: Identity,
    pub payload: T,
}

impl<T> Record<T> {
    /// Wrap a payload with no key bound yet.
    pub fn new(payload: T) -> Self {
        Self {
            identity: Identity::unassigned(),
            payload,
        }
    }

    /// Wrap a payload whose key already exists (rows read back from
    /// storage, import paths).
    pub fn with_id(id: Uuid, payload: T) -> Self {
        Self {
            identity: Identity::assigned(id),
            payload,
        }
    }

    /// Discard the identity and return the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T> Identified for Record<T> {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.payload
    }
}

impl<T> DerefMut for Record<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.payload
    }
}
