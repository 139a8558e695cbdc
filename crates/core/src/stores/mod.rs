//! Entity stores - ordered, id-keyed collections persisted as one document each.

mod entity_store;
mod store_model;
mod store_traits;


pub use entity_store::EntityStore;
pub(crate) use entity_store::{insert_record, remove_record, update_record};
pub use store_model::WriteOutcome;
pub use store_traits::{Entity, EntityInput};
