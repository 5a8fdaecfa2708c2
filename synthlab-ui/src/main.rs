//! Synthlab Web UI
//!
//! Browser front end for the synthetic-data backend, built with Leptos (WASM).
//!
//! # Pages
//!
//! - Home: the "generate synthetic rows" form
//! - Login: username/password form
//! - Dataset: the real dataset table and real vs. synthetic bar charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. Loading and form
//! handling come from the `synthlab` core; this crate supplies the fetch
//! backend and a reactive implementation of the page surface.

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
