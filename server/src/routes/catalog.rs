//! Template catalogue route.

use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::catalog::{self, Template};

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub templates: Vec<Template>,
}

/// `GET /api/catalog`: list available card templates.
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse { templates: catalog::templates() })
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
