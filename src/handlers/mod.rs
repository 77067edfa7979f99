/// HTTP request handlers
use crate::domain::{
    AnnotationSearchResponse, CatalogResponse, Health, QueryResponse, SearchResponse,
    StatusSnapshot,
};
use crate::errors::ApiError;
use crate::services::SearchService;
use axum::{extract::State, Json};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<SearchService>,
    pub default_limit: i64,
}

/// Body of POST /databases/search
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Comma-separated canonical category keys.
    pub categories: String,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Body of POST /databases/query
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub sequence: String,
    pub databases: Vec<String>,
    pub query_type: String,
    #[serde(default)]
    pub e_value: Option<f64>,
    #[serde(default)]
    pub identity_threshold: Option<f64>,
}

/// Body of POST /databases/annotations/search
#[derive(Debug, Deserialize)]
pub struct AnnotationRequest {
    pub accession: String,
    #[serde(default)]
    pub databases: Option<Vec<String>>,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// List supported databases with canonical category keys
pub async fn get_supported_databases(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "databases": state.search_service.registry().supported()
    }))
}

/// Multi-category fan-out search
pub async fn search_databases(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let limit = req.limit.unwrap_or(state.default_limit);
    debug!(
        "search query '{}' over categories '{}' (limit {})",
        req.query, req.categories, limit
    );
    let mut rng = StdRng::from_entropy();
    let response =
        state
            .search_service
            .search_multiple_databases(&mut rng, &req.query, &req.categories, limit);
    Ok(Json(response))
}

/// Full catalog plus summary
pub async fn get_databases(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(state.search_service.catalog_overview())
}

/// Query an explicit set of sources
pub async fn query_databases(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    debug!(
        "{} query of {} residues against {} databases",
        req.query_type,
        req.sequence.len(),
        req.databases.len()
    );
    let mut rng = StdRng::from_entropy();
    let response = state
        .search_service
        .query_databases(
            &mut rng,
            &req.databases,
            &req.query_type,
            req.e_value,
            req.identity_threshold,
        )
        .await;
    Ok(Json(response))
}

/// Catalog health snapshot
pub async fn get_database_status(State(state): State<AppState>) -> Json<StatusSnapshot> {
    Json(state.search_service.status_snapshot())
}

/// Annotation lookup by accession
pub async fn search_annotations(
    State(state): State<AppState>,
    Json(req): Json<AnnotationRequest>,
) -> Result<Json<AnnotationSearchResponse>, ApiError> {
    let mut rng = StdRng::from_entropy();
    let response = state.search_service.search_annotations(
        &mut rng,
        &req.accession,
        req.databases.as_deref(),
    )?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_wire_names() {
        let body = serde_json::json!({
            "sequence": "ATGC",
            "databases": ["uniprot"],
            "queryType": "blast",
            "eValue": 1e-5,
            "identityThreshold": 90.0
        });
        let req: QueryRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.query_type, "blast");
        assert_eq!(req.e_value, Some(1e-5));
        assert_eq!(req.identity_threshold, Some(90.0));
    }

    #[test]
    fn test_query_request_optional_thresholds() {
        let body = serde_json::json!({
            "sequence": "ATGC",
            "databases": [],
            "queryType": "hmmer"
        });
        let req: QueryRequest = serde_json::from_value(body).unwrap();
        assert!(req.e_value.is_none());
        assert!(req.identity_threshold.is_none());
    }

    #[test]
    fn test_search_request_default_limit_absent() {
        let body = serde_json::json!({
            "query": "Aspirin",
            "categories": "genomic,protein"
        });
        let req: SearchRequest = serde_json::from_value(body).unwrap();
        assert!(req.limit.is_none());
    }

    #[test]
    fn test_annotation_request_scope_optional() {
        let body = serde_json::json!({ "accession": "UP_ABC123" });
        let req: AnnotationRequest = serde_json::from_value(body).unwrap();
        assert!(req.databases.is_none());
    }
}
