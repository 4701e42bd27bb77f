//! # regportal-client
//!
//! Leptos + WASM login screen for the registration portal. Collects
//! credentials, posts them to the authentication endpoint, persists the
//! resulting session in `localStorage`, and toggles between the login form
//! and a greeting view.
//!
//! Browser-only code (HTTP, storage, mounting) is gated behind the `csr`
//! feature so the state machine and storage logic test natively with
//! `cargo test`.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
