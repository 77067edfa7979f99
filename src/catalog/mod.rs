/// In-memory catalog of simulated database sources
use crate::domain::{
    CanonicalCategory, CatalogSummary, DataSource, SourceStatus, SupportedDatabase,
};
use crate::utils::mean_ms;
use chrono::Utc;
use std::collections::BTreeMap;

/// Process-wide read-only registry of data-source descriptors.
///
/// Built once at startup from static literals and injected into request
/// handlers; no write path exists at runtime. Source ids are unique across
/// the catalog.
pub struct DatabaseRegistry {
    sources: Vec<DataSource>,
}

impl DatabaseRegistry {
    pub fn new(sources: Vec<DataSource>) -> Self {
        Self { sources }
    }

    /// Build the registry from the built-in source list.
    pub fn seeded() -> Self {
        Self::new(seed_sources())
    }

    /// Full catalog in declaration order.
    pub fn all(&self) -> &[DataSource] {
        &self.sources
    }

    /// Look up one source by id.
    pub fn get(&self, id: &str) -> Option<&DataSource> {
        self.sources.iter().find(|s| s.id == id)
    }

    /// Online sources whose normalized category equals `key`, in catalog
    /// order. Non-online sources never participate in fan-out.
    pub fn online_in_category(&self, key: CanonicalCategory) -> Vec<&DataSource> {
        self.sources
            .iter()
            .filter(|s| {
                s.status == SourceStatus::Online
                    && CanonicalCategory::from_label(&s.category) == key
            })
            .collect()
    }

    /// All online sources in catalog order.
    pub fn online(&self) -> Vec<&DataSource> {
        self.sources
            .iter()
            .filter(|s| s.status == SourceStatus::Online)
            .collect()
    }

    /// One `{key, name, category}` tuple per catalog entry, with the
    /// category already normalized to its canonical key.
    pub fn supported(&self) -> Vec<SupportedDatabase> {
        self.sources
            .iter()
            .map(|s| SupportedDatabase {
                key: s.id.clone(),
                name: s.name.clone(),
                category: CanonicalCategory::from_label(&s.category),
            })
            .collect()
    }

    /// Aggregate counts by tier and status plus mean response time.
    pub fn summary(&self) -> CatalogSummary {
        let mut by_tier: BTreeMap<u8, usize> = BTreeMap::new();
        let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
        for s in &self.sources {
            *by_tier.entry(s.tier).or_default() += 1;
            *by_status.entry(s.status.as_str().to_string()).or_default() += 1;
        }
        let times: Vec<u64> = self.sources.iter().map(|s| s.response_time).collect();
        CatalogSummary {
            total: self.sources.len(),
            by_tier,
            by_status,
            average_response_time: mean_ms(&times),
        }
    }
}

fn entry(
    id: &str,
    name: &str,
    tier: u8,
    category: &str,
    url: &str,
    status: SourceStatus,
    response_time: u64,
) -> DataSource {
    DataSource {
        id: id.to_string(),
        name: name.to_string(),
        tier,
        category: category.to_string(),
        url: url.to_string(),
        status,
        last_checked: Utc::now(),
        response_time,
    }
}

/// Built-in source descriptors. Statuses and response times are simulated.
fn seed_sources() -> Vec<DataSource> {
    use SourceStatus::*;
    vec![
        entry(
            "ncbi_genbank",
            "NCBI GenBank",
            1,
            "Genomic & Sequence",
            "https://www.ncbi.nlm.nih.gov/genbank/",
            Online,
            250,
        ),
        entry(
            "ena",
            "EMBL-EBI ENA",
            1,
            "Genomic & Sequence",
            "https://www.ebi.ac.uk/ena/browser/",
            Online,
            320,
        ),
        entry(
            "ddbj",
            "DDBJ",
            2,
            "Genomic & Sequence",
            "https://www.ddbj.nig.ac.jp/",
            Online,
            540,
        ),
        entry(
            "refseq",
            "NCBI RefSeq",
            1,
            "Genomic & Sequence",
            "https://www.ncbi.nlm.nih.gov/refseq/",
            Online,
            210,
        ),
        entry(
            "uniprot",
            "UniProt",
            1,
            "Protein & Structure",
            "https://www.uniprot.org/",
            Online,
            280,
        ),
        entry(
            "pdb",
            "RCSB PDB",
            1,
            "Protein & Structure",
            "https://www.rcsb.org/",
            Online,
            350,
        ),
        entry(
            "interpro",
            "InterPro",
            2,
            "Protein & Structure",
            "https://www.ebi.ac.uk/interpro/",
            Online,
            610,
        ),
        entry(
            "pfam",
            "Pfam",
            3,
            "Protein & Structure",
            "https://www.ebi.ac.uk/interpro/entry/pfam/",
            Maintenance,
            480,
        ),
        entry(
            "phi_base",
            "PHI-base",
            3,
            "Pathogenicity & Virulence",
            "http://www.phi-base.org/",
            Online,
            720,
        ),
        entry(
            "vfdb",
            "VFDB",
            2,
            "Pathogenicity & Virulence",
            "http://www.mgc.ac.cn/VFs/",
            Online,
            660,
        ),
        entry(
            "bv_brc",
            "BV-BRC",
            2,
            "Pathogenicity & Virulence",
            "https://www.bv-brc.org/",
            RateLimited,
            900,
        ),
        entry(
            "victors",
            "Victors",
            4,
            "Pathogenicity & Virulence",
            "http://www.phidias.us/victors/",
            Online,
            830,
        ),
        entry(
            "card",
            "CARD",
            1,
            "Antimicrobial Resistance",
            "https://card.mcmaster.ca/",
            Online,
            380,
        ),
        entry(
            "resfinder",
            "ResFinder",
            2,
            "Antimicrobial Resistance",
            "https://cge.food.dtu.dk/services/ResFinder/",
            Online,
            450,
        ),
        entry(
            "megares",
            "MEGARes",
            3,
            "Antimicrobial Resistance",
            "https://www.meglab.org/megares/",
            Online,
            520,
        ),
        entry(
            "ardb",
            "ARDB",
            5,
            "Antimicrobial Resistance",
            "https://ardb.cbcb.umd.edu/",
            Offline,
            1500,
        ),
        entry(
            "iedb",
            "IEDB",
            1,
            "Immunology & Epitopes",
            "https://www.iedb.org/",
            Online,
            430,
        ),
        entry(
            "imgt",
            "IMGT",
            2,
            "Immunology & Epitopes",
            "https://www.imgt.org/",
            Online,
            560,
        ),
        entry(
            "select_agents",
            "Federal Select Agent Program",
            4,
            "Regulatory & Compliance",
            "https://www.selectagents.gov/",
            Online,
            1100,
        ),
        entry(
            "australia_group",
            "Australia Group Common Control Lists",
            5,
            "Regulatory & Compliance",
            "https://www.dfat.gov.au/publications/minisite/theaustraliagroupnet/site/en/index.html",
            Online,
            1250,
        ),
        entry(
            "eu_dual_use",
            "EU Dual-Use Regulation Annex I",
            5,
            "Regulatory & Compliance",
            "https://eur-lex.europa.eu/eli/reg/2021/821/oj",
            Maintenance,
            1400,
        ),
        entry(
            "pubchem",
            "PubChem",
            1,
            "Chemical Compounds",
            "https://pubchem.ncbi.nlm.nih.gov/",
            Online,
            300,
        ),
        entry(
            "chembl",
            "ChEMBL",
            2,
            "Chemical Compounds",
            "https://www.ebi.ac.uk/chembl/",
            Online,
            470,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let registry = DatabaseRegistry::seeded();
        let ids: HashSet<&str> = registry.all().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), registry.all().len());
    }

    #[test]
    fn test_seed_labels_all_normalize() {
        // every catalog label must land on a canonical key, never panic
        let registry = DatabaseRegistry::seeded();
        for s in registry.all() {
            let key = CanonicalCategory::from_label(&s.category);
            assert_eq!(CanonicalCategory::from_label(key.as_str()), key);
        }
    }

    #[test]
    fn test_get_by_id() {
        let registry = DatabaseRegistry::seeded();
        assert_eq!(registry.get("card").map(|s| s.name.as_str()), Some("CARD"));
        assert!(registry.get("no_such_db").is_none());
    }

    #[test]
    fn test_online_in_category_excludes_non_online() {
        let registry = DatabaseRegistry::seeded();
        let resistance = registry.online_in_category(CanonicalCategory::Resistance);
        assert!(resistance.iter().all(|s| s.status == SourceStatus::Online));
        // ardb is offline and must not appear
        assert!(resistance.iter().all(|s| s.id != "ardb"));
        assert!(resistance.iter().any(|s| s.id == "card"));
    }

    #[test]
    fn test_online_in_category_preserves_catalog_order() {
        let registry = DatabaseRegistry::seeded();
        let genomic = registry.online_in_category(CanonicalCategory::Genomic);
        let ids: Vec<&str> = genomic.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ncbi_genbank", "ena", "ddbj", "refseq"]);
    }

    #[test]
    fn test_supported_one_tuple_per_entry() {
        let registry = DatabaseRegistry::seeded();
        let supported = registry.supported();
        assert_eq!(supported.len(), registry.all().len());
        for (s, d) in supported.iter().zip(registry.all()) {
            assert_eq!(s.key, d.id);
            // category is the canonical key, not the raw label
            assert_eq!(s.category, CanonicalCategory::from_label(&d.category));
        }
    }

    #[test]
    fn test_summary_counts() {
        let registry = DatabaseRegistry::seeded();
        let summary = registry.summary();
        assert_eq!(summary.total, registry.all().len());
        assert_eq!(
            summary.by_status.values().sum::<usize>(),
            registry.all().len()
        );
        assert_eq!(summary.by_tier.values().sum::<usize>(), registry.all().len());
        assert!(summary.average_response_time > 0.0);
    }

    #[test]
    fn test_summary_empty_catalog_guard() {
        let registry = DatabaseRegistry::new(vec![]);
        let summary = registry.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_response_time, 0.0);
    }
}
