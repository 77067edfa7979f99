/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Canonical category keys used for grouping catalog sources.
///
/// Every free-text catalog label maps to exactly one of these keys; `Other`
/// is the fallback, so normalization is total and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalCategory {
    Genomic,
    Protein,
    Pathogenicity,
    Resistance,
    Immunology,
    Regulatory,
    Other,
}

impl CanonicalCategory {
    /// Normalize a free-text category label to a canonical key.
    ///
    /// Substring rules are checked in fixed priority order; first match
    /// wins. Canonical keys are fixed points of this mapping.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        const RULES: &[(&str, CanonicalCategory)] = &[
            ("genomic", CanonicalCategory::Genomic),
            ("sequence", CanonicalCategory::Genomic),
            ("protein", CanonicalCategory::Protein),
            ("structure", CanonicalCategory::Protein),
            ("pathogen", CanonicalCategory::Pathogenicity),
            ("virulence", CanonicalCategory::Pathogenicity),
            ("resistance", CanonicalCategory::Resistance),
            ("antimicrobial", CanonicalCategory::Resistance),
            ("immun", CanonicalCategory::Immunology),
            ("epitope", CanonicalCategory::Immunology),
            ("regulatory", CanonicalCategory::Regulatory),
            ("compliance", CanonicalCategory::Regulatory),
        ];
        for (needle, key) in RULES {
            if lower.contains(needle) {
                return *key;
            }
        }
        CanonicalCategory::Other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalCategory::Genomic => "genomic",
            CanonicalCategory::Protein => "protein",
            CanonicalCategory::Pathogenicity => "pathogenicity",
            CanonicalCategory::Resistance => "resistance",
            CanonicalCategory::Immunology => "immunology",
            CanonicalCategory::Regulatory => "regulatory",
            CanonicalCategory::Other => "other",
        }
    }
}

impl fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of a canonical key, unlike [`CanonicalCategory::from_label`]
/// which normalizes arbitrary labels. Request-side category tokens must
/// already be canonical; anything else is rejected.
impl std::str::FromStr for CanonicalCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genomic" => Ok(CanonicalCategory::Genomic),
            "protein" => Ok(CanonicalCategory::Protein),
            "pathogenicity" => Ok(CanonicalCategory::Pathogenicity),
            "resistance" => Ok(CanonicalCategory::Resistance),
            "immunology" => Ok(CanonicalCategory::Immunology),
            "regulatory" => Ok(CanonicalCategory::Regulatory),
            "other" => Ok(CanonicalCategory::Other),
            _ => Err(()),
        }
    }
}

/// Availability state of a catalog source. Only `Online` sources
/// participate in search and query fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Online,
    Offline,
    Maintenance,
    RateLimited,
}

impl SourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceStatus::Online => "online",
            SourceStatus::Offline => "offline",
            SourceStatus::Maintenance => "maintenance",
            SourceStatus::RateLimited => "rate_limited",
        }
    }
}

/// Descriptor of one simulated external database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub tier: u8,
    pub category: String,
    pub url: String,
    pub status: SourceStatus,
    pub last_checked: DateTime<Utc>,
    /// Simulated latency in milliseconds.
    pub response_time: u64,
}

/// One hit returned for a query against one source.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub data: Value,
    pub relevance_score: f64,
}

/// Per-source result set inside one category group.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseResultSet {
    pub database_name: String,
    pub entries: Vec<SearchResultEntry>,
}

/// Per-source result sets grouped under one canonical category key.
/// Never emitted with an empty `databases` list.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySearchResult {
    pub category: CanonicalCategory,
    pub databases: Vec<DatabaseResultSet>,
}

/// Response body of the multi-category search endpoint.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    pub results_by_category: Vec<CategorySearchResult>,
}

/// Annotation record attached to a match.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseAnnotation {
    #[serde(rename = "type")]
    pub annotation_type: String,
    pub source: String,
    pub value: String,
    pub confidence: f64,
    pub evidence: Vec<String>,
}

/// One synthetic alignment-style match from a single source.
/// Match lists are always sorted descending by `score`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseMatch {
    pub accession: String,
    pub description: String,
    pub score: f64,
    pub organism: String,
    pub e_value: f64,
    pub identity: f64,
    pub coverage: f64,
    pub alignment_length: u32,
    pub annotations: Vec<DatabaseAnnotation>,
}

/// Per-source block in the query endpoint response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseResult {
    pub database: String,
    pub database_name: String,
    pub match_count: usize,
    pub query_time_ms: u64,
    pub matches: Vec<DatabaseMatch>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMetadata {
    pub total_databases: usize,
    pub searched_databases: usize,
    pub total_matches: usize,
    pub query_type: String,
    pub total_time_ms: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub results: Vec<DatabaseResult>,
    pub metadata: QueryMetadata,
}

/// One `{key, name, category}` tuple of the supported-databases listing.
#[derive(Debug, Clone, Serialize)]
pub struct SupportedDatabase {
    pub key: String,
    pub name: String,
    pub category: CanonicalCategory,
}

/// Aggregate view over the full catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total: usize,
    pub by_tier: BTreeMap<u8, usize>,
    pub by_status: BTreeMap<String, usize>,
    pub average_response_time: f64,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub databases: Vec<DataSource>,
    pub summary: CatalogSummary,
}

/// Health row for one source in the status snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceHealth {
    pub id: String,
    pub name: String,
    pub status: SourceStatus,
    pub response_time: u64,
    pub last_checked: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub status: &'static str,
    pub databases: Vec<SourceHealth>,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AnnotationSearchResponse {
    pub annotations: Vec<DatabaseAnnotation>,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_catalog_strings() {
        assert_eq!(
            CanonicalCategory::from_label("Genomic & Sequence"),
            CanonicalCategory::Genomic
        );
        assert_eq!(
            CanonicalCategory::from_label("Protein Structure"),
            CanonicalCategory::Protein
        );
        assert_eq!(
            CanonicalCategory::from_label("Pathogenicity & Virulence"),
            CanonicalCategory::Pathogenicity
        );
        assert_eq!(
            CanonicalCategory::from_label("Antimicrobial Resistance"),
            CanonicalCategory::Resistance
        );
        assert_eq!(
            CanonicalCategory::from_label("Immunology & Epitopes"),
            CanonicalCategory::Immunology
        );
        assert_eq!(
            CanonicalCategory::from_label("Regulatory & Compliance"),
            CanonicalCategory::Regulatory
        );
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(
            CanonicalCategory::from_label("GENOMIC"),
            CanonicalCategory::Genomic
        );
        assert_eq!(
            CanonicalCategory::from_label("pRoTeIn"),
            CanonicalCategory::Protein
        );
    }

    #[test]
    fn test_from_label_priority_order() {
        // "genomic" outranks "protein" when both substrings are present
        assert_eq!(
            CanonicalCategory::from_label("genomic protein"),
            CanonicalCategory::Genomic
        );
    }

    #[test]
    fn test_from_label_fallback() {
        assert_eq!(
            CanonicalCategory::from_label("Chemical Compounds"),
            CanonicalCategory::Other
        );
        assert_eq!(CanonicalCategory::from_label(""), CanonicalCategory::Other);
    }

    #[test]
    fn test_from_label_idempotent_on_canonical_keys() {
        for key in [
            CanonicalCategory::Genomic,
            CanonicalCategory::Protein,
            CanonicalCategory::Pathogenicity,
            CanonicalCategory::Resistance,
            CanonicalCategory::Immunology,
            CanonicalCategory::Regulatory,
            CanonicalCategory::Other,
        ] {
            assert_eq!(CanonicalCategory::from_label(key.as_str()), key);
        }
    }

    #[test]
    fn test_source_status_serialization() {
        assert_eq!(
            serde_json::to_string(&SourceStatus::RateLimited).unwrap(),
            "\"rate_limited\""
        );
        assert_eq!(
            serde_json::to_string(&SourceStatus::Online).unwrap(),
            "\"online\""
        );
    }

    #[test]
    fn test_data_source_wire_field_names() {
        let src = DataSource {
            id: "ncbi_genbank".to_string(),
            name: "NCBI GenBank".to_string(),
            tier: 1,
            category: "Genomic & Sequence".to_string(),
            url: "https://www.ncbi.nlm.nih.gov/genbank/".to_string(),
            status: SourceStatus::Online,
            last_checked: Utc::now(),
            response_time: 250,
        };
        let v = serde_json::to_value(&src).unwrap();
        assert!(v.get("lastChecked").is_some());
        assert!(v.get("responseTime").is_some());
        assert!(v.get("last_checked").is_none());
    }

    #[test]
    fn test_match_wire_field_names() {
        let m = DatabaseMatch {
            accession: "GB_ABC123".to_string(),
            description: "test".to_string(),
            score: 900.0,
            organism: "Escherichia coli".to_string(),
            e_value: 1e-10,
            identity: 98.5,
            coverage: 87.0,
            alignment_length: 450,
            annotations: vec![],
        };
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("eValue").is_some());
        assert!(v.get("alignmentLength").is_some());
    }

    #[test]
    fn test_annotation_type_field_rename() {
        let a = DatabaseAnnotation {
            annotation_type: "function".to_string(),
            source: "uniprot".to_string(),
            value: "toxin production".to_string(),
            confidence: 0.9,
            evidence: vec!["experimental".to_string()],
        };
        let v = serde_json::to_value(&a).unwrap();
        assert!(v.get("type").is_some());
    }
}
