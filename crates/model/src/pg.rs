//! Postgres column binding for [`Identity`].
//!
//! Pins the storage-level type code to UUID, so the key column is never
//! bound through the driver's default text or integer mapping.  An
//! unassigned identity encodes as SQL NULL — a primary-key column rejects
//! that at the constraint level, which keeps duplicate/null enforcement in
//! the database where it belongs.

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};
use uuid::Uuid;

use crate::Identity;

impl Type<Postgres> for Identity {
    fn type_info() -> PgTypeInfo {
        <Uuid as Type<Postgres>>::type_info()
    }
}

impl<'q> Encode<'q, Postgres> for Identity {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        match self.get() {
            Some(id) => <Uuid as Encode<'q, Postgres>>::encode_by_ref(&id, buf),
            None => Ok(IsNull::Yes),
        }
    }
}

impl<'r> Decode<'r, Postgres> for Identity {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let id = <Uuid as Decode<'r, Postgres>>::decode(value)?;
        Ok(Identity::assigned(id))
    }
}
