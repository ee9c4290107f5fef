//! # `mealie-bulk-server`
//!
//! HTTP surface for the bulk recipe importer. One ingress endpoint
//! (`POST /api/import/bulk`) accepts a JSON array of recipes, resolves the
//! effective Mealie credentials (request headers take precedence over the
//! environment), validates them, and runs the import, returning the aggregate
//! result.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;
