//! Route handlers.

use crate::errors::AppError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use mealie_bulk::{
    BulkImportResult, BulkImporter, ImportOptions, MealieClient, MealieConfig, Recipe,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

pub async fn root() -> &'static str {
    "Mealie bulk importer is running"
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize, Default)]
pub struct ImportParams {
    /// Attach reconciled tags to created recipes (off by default).
    #[serde(default)]
    pub attach_tags: bool,
}

/// `POST /api/import/bulk` — imports a JSON array of recipes into Mealie.
///
/// The Mealie instance is chosen per request: `X-Mealie-Base-Url` and
/// `X-Mealie-Api-Token` headers take precedence over the server's configured
/// defaults. Invalid or missing credentials are a 400; import failures are
/// reported inside the returned result, never as an error status.
pub async fn bulk_import_handler(
    State(state): State<AppState>,
    Query(params): Query<ImportParams>,
    headers: HeaderMap,
    Json(recipes): Json<Vec<Recipe>>,
) -> Result<Json<BulkImportResult>, AppError> {
    let mealie = resolve_mealie_config(&state, &headers)?;

    info!("starting bulk import of {} recipes", recipes.len());
    // The base URL was already validated above, so a client build failure
    // here is unexpected rather than a caller mistake.
    let client = MealieClient::new(mealie).map_err(|e| AppError::Internal(e.into()))?;
    let importer = BulkImporter::with_options(
        client,
        ImportOptions {
            attach_tags: params.attach_tags,
        },
    );
    let result = importer.import(&recipes).await;
    info!(
        success = result.success_count,
        failed = result.failure_count,
        "bulk import completed"
    );

    Ok(Json(result))
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Resolves the effective Mealie config with priority headers > environment,
/// then validates it the same way the importer's client will.
fn resolve_mealie_config(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<MealieConfig, AppError> {
    let base_url = header_value(headers, "x-mealie-base-url")
        .or_else(|| state.config.mealie_base_url.clone());
    let api_token = header_value(headers, "x-mealie-api-token")
        .or_else(|| state.config.mealie_api_token.clone());

    let mut errors = Vec::new();
    match &base_url {
        None => errors.push(
            "Mealie base URL is required. Provide it via the X-Mealie-Base-Url header \
             or the MEALIE_BASE_URL environment variable."
                .to_string(),
        ),
        Some(url) => match reqwest::Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            _ => errors.push("Mealie base URL must be a valid HTTP or HTTPS URL".to_string()),
        },
    }
    match &api_token {
        None => errors.push(
            "Mealie API token is required. Provide it via the X-Mealie-Api-Token header \
             or the MEALIE_API_TOKEN environment variable."
                .to_string(),
        ),
        Some(token) if token.len() < 10 => {
            errors.push("Mealie API token appears to be invalid (too short)".to_string());
        }
        Some(_) => {}
    }

    match (base_url, api_token) {
        (Some(base_url), Some(api_token)) if errors.is_empty() => Ok(MealieConfig {
            base_url,
            api_token,
        }),
        _ => Err(AppError::Config(errors)),
    }
}
