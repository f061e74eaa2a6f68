//! Core transformation pipeline for sdknix.
//!
//! Turns a pre-populated package [`Catalog`](sdknix_schema::Catalog) into a
//! deterministic Nix expression in two passes: [`assemble`] builds the
//! immutable document model, [`render`] serializes it. Everything in between
//! (path resolution, builder selection, platform classification, checksum
//! normalization) is a pure function over the input.

pub mod assemble;
pub mod attrpath;
pub mod builder;
pub mod error;
pub mod model;
pub mod render;
pub mod sanitize;

pub use assemble::{NullReporter, Reporter, UrlResolver, assemble};
pub use builder::Builder;
pub use error::GenError;
pub use model::{Document, Package, Source};
pub use render::{RenderOptions, render};
