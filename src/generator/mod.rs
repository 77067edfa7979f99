/// Mock match generation for simulated database sources
///
/// Stands in for the per-source query clients a real gateway would have.
/// All randomness comes from the caller-supplied RNG, so callers that need
/// reproducible output inject a seeded one.
use crate::domain::{CanonicalCategory, DataSource, DatabaseAnnotation, DatabaseMatch};
use rand::Rng;

const ORGANISMS: [&str; 8] = [
    "Escherichia coli",
    "Bacillus subtilis",
    "Saccharomyces cerevisiae",
    "Homo sapiens",
    "Mus musculus",
    "Arabidopsis thaliana",
    "Drosophila melanogaster",
    "Danio rerio",
];

const GENOMIC_DESCRIPTIONS: [&str; 4] = [
    "Complete genome sequence with annotated coding regions",
    "Partial CDS, hypothetical protein product",
    "16S ribosomal RNA gene, partial sequence",
    "Chromosomal region containing putative operon",
];

const PROTEIN_DESCRIPTIONS: [&str; 4] = [
    "Reviewed protein entry with experimental evidence",
    "Crystal structure of enzyme-substrate complex",
    "Conserved domain family alignment",
    "Predicted membrane transporter protein",
];

const PATHOGENICITY_DESCRIPTIONS: [&str; 4] = [
    "Characterized virulence factor with host interaction data",
    "Pathogen-host interaction phenotype record",
    "Secreted effector protein implicated in infection",
    "Toxin gene cluster with regulatory elements",
];

const RESISTANCE_DESCRIPTIONS: [&str; 4] = [
    "Antibiotic resistance gene with ontology mapping",
    "Beta-lactamase variant with resistance profile",
    "Efflux pump component conferring multidrug resistance",
    "Mobile genetic element carrying resistance cassette",
];

const IMMUNOLOGY_DESCRIPTIONS: [&str; 4] = [
    "Linear B-cell epitope with binding assay data",
    "MHC class I restricted T-cell epitope",
    "Immunoglobulin germline gene segment",
    "Antigen entry with cross-reactivity annotations",
];

const REGULATORY_DESCRIPTIONS: [&str; 4] = [
    "Listed agent entry under select agent regulations",
    "Dual-use control list item with export classification",
    "Controlled genetic element reference record",
    "Regulated toxin entry with threshold quantities",
];

const ANNOTATION_TYPES: [&str; 4] = ["function", "pathway", "domain", "phenotype"];

const ANNOTATION_VALUES: [&str; 5] = [
    "catalytic activity",
    "secondary metabolite biosynthesis",
    "ATP-binding domain",
    "increased virulence in murine model",
    "horizontal gene transfer marker",
];

const EVIDENCE_KINDS: [&str; 4] = ["experimental", "computational", "literature", "homology"];

/// Accession prefix per source id; unmapped ids get a generic prefix.
pub fn accession_prefix(source_id: &str) -> &'static str {
    match source_id {
        "ncbi_genbank" => "GB",
        "ena" => "ENA",
        "ddbj" => "DDBJ",
        "refseq" => "NM",
        "uniprot" => "UP",
        "pdb" => "PDB",
        "interpro" => "IPR",
        "pfam" => "PF",
        "phi_base" => "PHI",
        "vfdb" => "VF",
        "victors" => "VIC",
        "card" => "ARO",
        "resfinder" => "RES",
        "megares" => "MEG",
        "iedb" => "EPI",
        "imgt" => "IMGT",
        "pubchem" => "CID",
        "chembl" => "CHEMBL",
        _ => "ACC",
    }
}

fn description_pool(category: CanonicalCategory) -> &'static [&'static str] {
    match category {
        CanonicalCategory::Genomic => &GENOMIC_DESCRIPTIONS,
        CanonicalCategory::Protein => &PROTEIN_DESCRIPTIONS,
        CanonicalCategory::Pathogenicity => &PATHOGENICITY_DESCRIPTIONS,
        CanonicalCategory::Resistance => &RESISTANCE_DESCRIPTIONS,
        CanonicalCategory::Immunology => &IMMUNOLOGY_DESCRIPTIONS,
        CanonicalCategory::Regulatory => &REGULATORY_DESCRIPTIONS,
        // unrecognized categories fall back to the genomic pool
        CanonicalCategory::Other => &GENOMIC_DESCRIPTIONS,
    }
}

fn random_suffix<R: Rng>(rng: &mut R, len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..len)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Synthesize an accession for one hit against `source`.
pub fn make_accession<R: Rng>(rng: &mut R, source_id: &str) -> String {
    format!("{}_{}", accession_prefix(source_id), random_suffix(rng, 6))
}

fn make_annotation<R: Rng>(rng: &mut R, source_id: &str) -> DatabaseAnnotation {
    let evidence_count = rng.gen_range(1..=2);
    DatabaseAnnotation {
        annotation_type: pick(rng, &ANNOTATION_TYPES).to_string(),
        source: source_id.to_string(),
        value: pick(rng, &ANNOTATION_VALUES).to_string(),
        confidence: rng.gen_range(0.5..1.0),
        evidence: (0..evidence_count)
            .map(|_| pick(rng, &EVIDENCE_KINDS).to_string())
            .collect(),
    }
}

/// Produce 1..=10 synthetic matches for one source.
///
/// Postcondition: the returned list is sorted descending by `score`, so
/// callers may take the first K entries as the top K without re-sorting.
pub fn generate_matches<R: Rng>(rng: &mut R, source: &DataSource) -> Vec<DatabaseMatch> {
    let pool = description_pool(CanonicalCategory::from_label(&source.category));
    let count = rng.gen_range(1..=10);

    let mut matches: Vec<DatabaseMatch> = (0..count)
        .map(|_| {
            let annotation_count = rng.gen_range(0..=2);
            DatabaseMatch {
                accession: make_accession(rng, &source.id),
                description: pick(rng, pool).to_string(),
                score: rng.gen_range(0.0..1000.0),
                organism: pick(rng, &ORGANISMS).to_string(),
                // log-uniform over roughly 20 orders of magnitude
                e_value: 10f64.powf(-rng.gen_range(0.0..20.0)),
                identity: rng.gen_range(70.0..100.0),
                coverage: rng.gen_range(50.0..100.0),
                alignment_length: rng.gen_range(100..2000),
                annotations: (0..annotation_count)
                    .map(|_| make_annotation(rng, &source.id))
                    .collect(),
            }
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

/// Produce 1..=3 annotation records attributed to `source` for an
/// accession lookup.
pub fn generate_annotations<R: Rng>(
    rng: &mut R,
    source: &DataSource,
    accession: &str,
) -> Vec<DatabaseAnnotation> {
    let count = rng.gen_range(1..=3);
    (0..count)
        .map(|_| {
            let mut ann = make_annotation(rng, &source.id);
            ann.value = format!("{} ({})", ann.value, accession);
            ann
        })
        .collect()
}
