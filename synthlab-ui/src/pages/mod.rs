//! Pages
//!
//! Top-level page components for each route.

pub mod dataset;
pub mod home;
pub mod login;

pub use dataset::Dataset;
pub use home::Home;
pub use login::Login;
