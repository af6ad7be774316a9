// Iconsmith - core/mod.rs
//
// Core layer: data model, rasterisation, and in-memory encoders.
// Must NOT depend on: platform, app, or the filesystem.

pub mod container;
pub mod model;
pub mod raster;
pub mod reference;
