//! Snapshot output: SVG serialization and CPU rasterization.

/// Rasterization of SVG documents into RGBA frames.
pub mod raster;
/// Snapshot to SVG document serialization.
pub mod svg;
