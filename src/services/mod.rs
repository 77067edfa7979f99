/// Business logic services layer
use crate::catalog::DatabaseRegistry;
use crate::domain::{
    AnnotationSearchResponse, CatalogResponse, CategorySearchResult, DataSource, DatabaseResult,
    DatabaseResultSet, QueryMetadata, QueryResponse, SearchResponse, SearchResultEntry,
    SourceHealth, SourceStatus, StatusSnapshot,
};
use crate::errors::{ApiError, ApiResult};
use crate::generator;
use crate::utils::split_csv;
use chrono::Utc;
use rand::Rng;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Constant placeholder payload carried by every search entry.
/// Known stub inherited from the demo data model, identical regardless of
/// query or source; a real data feed would replace it.
fn placeholder_compound() -> Value {
    json!({
        "formula": "C9H8O4",
        "molecular_weight": 180.16,
        "smiles": "CC(=O)OC1=CC=CC=C1C(=O)O"
    })
}

/// Fan-out search over the catalog of simulated sources.
pub struct SearchService {
    registry: Arc<DatabaseRegistry>,
    simulate_latency: bool,
}

impl SearchService {
    pub fn new(registry: Arc<DatabaseRegistry>, simulate_latency: bool) -> Self {
        Self {
            registry,
            simulate_latency,
        }
    }

    pub fn registry(&self) -> &DatabaseRegistry {
        &self.registry
    }

    /// Multi-category fan-out search.
    ///
    /// Requested category keys are processed in the order given, duplicates
    /// included. Keys that select no online source are skipped entirely;
    /// sources and categories never appear with empty result lists.
    /// `total_results` counts exactly the entries kept after truncation.
    pub fn search_multiple_databases<R: Rng>(
        &self,
        rng: &mut R,
        query: &str,
        categories: &str,
        limit: i64,
    ) -> SearchResponse {
        let keep = limit.max(0) as usize;
        let mut total_results = 0;
        let mut results_by_category = Vec::new();

        for key in split_csv(categories) {
            let canonical = match key.parse() {
                Ok(c) => c,
                Err(_) => {
                    debug!("skipping unknown category key: {}", key);
                    continue;
                }
            };

            let mut databases = Vec::new();
            for source in self.registry.online_in_category(canonical) {
                let entries: Vec<SearchResultEntry> = generator::generate_matches(rng, source)
                    .into_iter()
                    .take(keep)
                    .map(|m| SearchResultEntry {
                        url: format!("/databases/{}/entries/{}", source.id, m.accession),
                        name: format!("{} match in {}", query, source.name),
                        description: m.description,
                        data: placeholder_compound(),
                        relevance_score: m.score / 1000.0,
                        id: m.accession,
                    })
                    .collect();

                if !entries.is_empty() {
                    total_results += entries.len();
                    databases.push(DatabaseResultSet {
                        database_name: source.name.clone(),
                        entries,
                    });
                }
            }

            if !databases.is_empty() {
                results_by_category.push(CategorySearchResult {
                    category: canonical,
                    databases,
                });
            }
        }

        SearchResponse {
            query: query.to_string(),
            total_results,
            results_by_category,
        }
    }

    /// Query an explicit set of sources by id.
    ///
    /// Unknown and non-online ids are skipped without error. Each queried
    /// source is awaited for its declared response time, sequentially, so
    /// total simulated latency is the sum, not the max. Sources whose match
    /// list ends up empty after threshold filtering are omitted.
    pub async fn query_databases<R: Rng + Send>(
        &self,
        rng: &mut R,
        databases: &[String],
        query_type: &str,
        e_value_ceiling: Option<f64>,
        identity_floor: Option<f64>,
    ) -> QueryResponse {
        let mut results = Vec::new();
        let mut searched = 0;
        let mut total_time_ms = 0;

        for id in databases {
            let source = match self.registry.get(id) {
                Some(s) if s.status == SourceStatus::Online => s,
                Some(s) => {
                    debug!("skipping source {} with status {}", id, s.status.as_str());
                    continue;
                }
                None => {
                    debug!("skipping unknown source id: {}", id);
                    continue;
                }
            };

            if self.simulate_latency {
                tokio::time::sleep(Duration::from_millis(source.response_time)).await;
            }
            searched += 1;
            total_time_ms += source.response_time;

            let matches: Vec<_> = generator::generate_matches(rng, source)
                .into_iter()
                .filter(|m| e_value_ceiling.map_or(true, |max| m.e_value <= max))
                .filter(|m| identity_floor.map_or(true, |min| m.identity >= min))
                .collect();

            if matches.is_empty() {
                continue;
            }

            results.push(DatabaseResult {
                database: source.id.clone(),
                database_name: source.name.clone(),
                match_count: matches.len(),
                query_time_ms: source.response_time,
                matches,
            });
        }

        let total_matches = results.iter().map(|r| r.match_count).sum();
        QueryResponse {
            results,
            metadata: QueryMetadata {
                total_databases: databases.len(),
                searched_databases: searched,
                total_matches,
                query_type: query_type.to_string(),
                total_time_ms,
                timestamp: Utc::now(),
            },
        }
    }

    /// Full catalog plus aggregate summary.
    pub fn catalog_overview(&self) -> CatalogResponse {
        CatalogResponse {
            databases: self.registry.all().to_vec(),
            summary: self.registry.summary(),
        }
    }

    /// Point-in-time health view over the catalog.
    pub fn status_snapshot(&self) -> StatusSnapshot {
        let all_online = self
            .registry
            .all()
            .iter()
            .all(|s| s.status == SourceStatus::Online);
        StatusSnapshot {
            status: if all_online { "operational" } else { "degraded" },
            databases: self
                .registry
                .all()
                .iter()
                .map(|s| SourceHealth {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    status: s.status,
                    response_time: s.response_time,
                    last_checked: s.last_checked,
                })
                .collect(),
            last_update: Utc::now(),
        }
    }

    /// Annotation lookup by accession.
    ///
    /// The accession's prefix decides the owning source; sources in scope
    /// whose prefix does not match contribute nothing, so an accession no
    /// source recognizes yields an empty list rather than an error.
    pub fn search_annotations<R: Rng>(
        &self,
        rng: &mut R,
        accession: &str,
        databases: Option<&[String]>,
    ) -> ApiResult<AnnotationSearchResponse> {
        if accession.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "accession must not be empty".to_string(),
            ));
        }

        let in_scope = |s: &DataSource| match databases {
            Some(ids) => ids.iter().any(|id| *id == s.id),
            None => true,
        };

        let mut annotations = Vec::new();
        for source in self.registry.online() {
            if !in_scope(source) {
                continue;
            }
            let prefix = format!("{}_", generator::accession_prefix(&source.id));
            if !accession.starts_with(&prefix) {
                continue;
            }
            annotations.extend(generator::generate_annotations(rng, source, accession));
        }

        Ok(AnnotationSearchResponse { annotations })
    }
}
