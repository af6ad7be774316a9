// Iconsmith - app/mod.rs
//
// Application layer: orchestration of the build step.
// Dependencies: core, platform.

pub mod build;
