//! Tindahan
//!
//! The order-lifecycle core of the Tindahan storefront: carts, checkout,
//! the order status engine, and the review gate, built over pluggable
//! store collaborators.

pub mod context;
pub mod domain;
pub mod ids;
