//! Adapters implementing the port traits.

pub mod capturing;
pub mod live;
