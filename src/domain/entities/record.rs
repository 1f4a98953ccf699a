use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};

/// Editable, non-id fields of a record. Filled by name from the console and the edit buffer.
pub trait FieldSet: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Field names as they appear in the JSON file
    const FIELD_NAMES: &'static [&'static str];

    fn set(&mut self, name: &str, value: String) -> Result<(), String>;

    fn get(&self, name: &str) -> Option<&str>;

    /// Business rules checked before anything is persisted
    fn validate(&self) -> Result<(), String>;

    fn unknown_field(name: &str) -> String {
        format!(
            "Unknown field '{}' (expected one of: {})",
            name,
            Self::FIELD_NAMES.join(", ")
        )
    }
}

/// One persisted entity; its id is the creation timestamp in milliseconds.
pub trait Record:
    Clone + Debug + Display + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Fields: FieldSet;

    /// Human-readable name of the record kind, used in log lines and replies
    const KIND: &'static str;

    fn new(id: u64, fields: Self::Fields) -> Self;

    fn id(&self) -> u64;

    fn fields(&self) -> Self::Fields;

    fn set_fields(&mut self, fields: Self::Fields);
}
