//! SEI Dashboard
//!
//! Browser front-end for SEI network analytics built with Leptos (WASM).
//!
//! # Features
//!
//! - Trending topics grid, refreshed every minute
//! - Chat assistant with suggested follow-ups
//! - Latest block dump and posts list
//! - Toast notifications and a render-failure fallback
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Request bookkeeping lives in the `sei-dashboard` core; this
//! crate only wires it to signals, timers and `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
