//! Backend access from the browser

mod client;

pub use client::{get_api_base, set_api_base, BrowserBackend};
