//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and content blocks. Interactive ones take
//! read-only signals and transition callbacks from the landing page rather
//! than reaching into shared context.

pub mod analytics;
pub mod contact_link;
pub mod footer;
pub mod icon;
pub mod legal_modal;
pub mod nav_bar;
pub mod sections;
pub mod side_menu;
