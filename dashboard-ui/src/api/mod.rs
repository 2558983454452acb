//! Backend access
//!
//! `gloo-net` rendition of the dashboard endpoints.

pub mod client;

pub use client::*;
