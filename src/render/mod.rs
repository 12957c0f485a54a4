//! Reference raster backend.
//!
//! Hosts normally supply their own [`crate::DrawSurface`]; this module
//! provides one that rasterizes on the CPU with `vello_cpu`, used by the CLI
//! and the render tests.

pub mod cpu;
