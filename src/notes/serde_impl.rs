//! Serialization for NoteSource
//!
//! In memory a source is a `SourceKind` variant; on the wire it keeps the
//! flat shape callers expect: `{source_id, name, path, is_daily, description}`.

use super::note::NoteSource;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

impl Serialize for NoteSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("NoteSource", 5)?;
        state.serialize_field("source_id", &self.source_id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("path", &self.path())?;
        state.serialize_field("is_daily", &self.is_daily())?;
        state.serialize_field("description", &self.description)?;
        state.end()
    }
}
