/// Utility functions

/// Split a comma-separated list into trimmed, non-empty tokens.
/// Order and duplicates are preserved.
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Arithmetic mean over a slice of millisecond latencies.
/// Returns 0.0 for an empty slice instead of NaN.
pub fn mean_ms(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv_basic() {
        assert_eq!(split_csv("genomic,protein"), vec!["genomic", "protein"]);
    }

    #[test]
    fn test_split_csv_trims_whitespace() {
        assert_eq!(split_csv(" genomic , protein "), vec!["genomic", "protein"]);
    }

    #[test]
    fn test_split_csv_keeps_duplicates_and_order() {
        assert_eq!(
            split_csv("protein,genomic,protein"),
            vec!["protein", "genomic", "protein"]
        );
    }

    #[test]
    fn test_split_csv_drops_empty_tokens() {
        assert_eq!(split_csv("genomic,,protein,"), vec!["genomic", "protein"]);
        assert!(split_csv("").is_empty());
        assert!(split_csv(",,,").is_empty());
    }

    #[test]
    fn test_mean_ms_empty_is_zero() {
        assert_eq!(mean_ms(&[]), 0.0);
    }

    #[test]
    fn test_mean_ms_average() {
        assert_eq!(mean_ms(&[100, 200, 300]), 200.0);
    }
}
