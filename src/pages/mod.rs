//! Page-level components, one per screen.

pub mod home;
pub mod login;
