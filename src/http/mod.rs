//! HTTP client for the site's AJAX endpoints.

pub mod client;

pub use client::MptfHttp;
