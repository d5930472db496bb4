//! Contact entity.

pub mod kind;
pub mod model;

pub use kind::ContactKind;
pub use model::{Contact, ContactSort, ContactSortField, CreateContact, UpdateContact};
