// Iconsmith - lib.rs
//
// Library entry point, exposing every module for integration testing and
// for build scripts that want to run the icon build programmatically.
//
// Console wording and exit status live in `main.rs` and are not part of the
// library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
