//! Offline asset generator for a dress-up game.
//!
//! - [`catalog`] draws each asset as a [`scene::Scene`] on a fixed 1024×1024 canvas
//! - [`raster`] picks one converter per run and turns serialized scenes into PNGs
//! - [`generate`](generate::generate) drives the batch and writes the [`Manifest`]
//! - [`merge`] combines game-data fragments and can embed the generated images
#![forbid(unsafe_code)]

mod foundation;

pub mod catalog;
pub mod generate;
pub mod manifest;
pub mod merge;
pub mod raster;
pub mod scene;

pub use crate::catalog::{AssetSpec, CATALOG, Category, validate_catalog};
pub use crate::foundation::error::{WardrobeError, WardrobeResult};
pub use crate::generate::{GenerateConfig, generate};
pub use crate::manifest::{Manifest, ManifestEntry};
pub use crate::merge::{
    MetadataPolicy, category_summary, inject_generated, merge_fragments, read_fragment,
    write_document,
};
pub use crate::raster::{
    BackendKind, Candidate, ProbeContext, RasterBackend, RasterOutcome, RasterSettings,
    Rasterizer, Selection,
};
