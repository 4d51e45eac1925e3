//! Interactive terminal dashboard
//!
//! `view` holds the root [`Dashboard`] component; `components` the pieces it
//! is built from.

pub mod components;
pub mod theme;
pub mod view;

pub use theme::Theme;
pub use view::{Dashboard, DashboardProps};
