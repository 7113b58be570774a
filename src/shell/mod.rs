//! Layout Shell
//!
//! The navigation bar and the notification surface that wrap every page.
//! Both are plain values built by the composition root and handed to the
//! application; nothing here is global.

pub mod navbar;
pub mod notifications;

pub use navbar::{NavItem, Navbar};
pub use notifications::{Level, Notifications, Toast};
