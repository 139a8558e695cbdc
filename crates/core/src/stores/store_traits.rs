use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Result;

/// Form-submitted data for creating or editing a record.
pub trait EntityInput: Send {
    /// Checks the input against its schema constraints.
    fn validate(&self) -> Result<()>;
}

/// A record owned by an [`EntityStore`](super::EntityStore).
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Input: EntityInput;

    /// Human-readable record kind, used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Builds a new record from validated input.
    fn from_input(id: String, input: Self::Input) -> Self;

    /// Replaces the editable fields with validated input. The id is kept.
    fn apply_input(&mut self, input: Self::Input);
}
