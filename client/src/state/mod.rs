//! Client-side state.
//!
//! The landing page has a single piece of transient state; see `page`.

pub mod page;
