//! Single-item operations.

mod put;

pub use put::{identity_item, put_identity_row};
