//! # `mealie-bulk`: Bulk recipe importer for Mealie
//!
//! This crate provides the core logic for importing batches of structured
//! recipe records into a [Mealie](https://mealie.io) instance. The remote API
//! is abstracted behind the [`CatalogGateway`] trait so the orchestration can
//! be exercised against a mock; [`MealieClient`] is the reqwest-backed
//! implementation used in production.
//!
//! The import itself is driven by [`BulkImporter`]: shared reference data
//! (tags, categories, tools) is reconciled against the remote catalog once per
//! batch, then each recipe runs through a create-then-enrich pipeline where
//! enrichment failures degrade the result instead of failing the recipe.

pub mod client;
pub mod errors;
pub mod gateway;
pub mod import;
pub mod types;

pub use client::{MealieClient, MealieConfig};
pub use errors::MealieError;
pub use gateway::CatalogGateway;
pub use import::{BulkImporter, ImportOptions, RecipeOutcome, ReferenceMaps};
pub use types::{BulkImportResult, Recipe};
