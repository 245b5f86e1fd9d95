// Cosine similarity between sparse term-weight vectors.

use std::collections::HashMap;

/// Cosine similarity of two sparse vectors keyed by term.
///
/// Returns 0.0 when either vector is empty or has zero magnitude.
pub fn cosine_from_weights(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    // Iterate the smaller map for the dot product
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    // fold from +0.0: an empty f64 sum is -0.0
    let dot = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .fold(0.0, |acc, x| acc + x);

    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_identical_vectors() {
        let a = weights(&[("rust", 0.6), ("python", 0.8)]);
        assert!((cosine_from_weights(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = weights(&[("rust", 1.0)]);
        let b = weights(&[("cooking", 1.0)]);
        let score = cosine_from_weights(&a, &b);
        assert_eq!(score, 0.0);
        assert!(!score.is_sign_negative());
    }

    #[test]
    fn test_empty_vector_is_zero() {
        let a = weights(&[("rust", 1.0)]);
        let empty = HashMap::new();
        assert_eq!(cosine_from_weights(&a, &empty), 0.0);
        assert_eq!(cosine_from_weights(&empty, &empty), 0.0);
    }

    #[test]
    fn test_is_symmetric() {
        let a = weights(&[("rust", 0.3), ("go", 0.5), ("sql", 0.2)]);
        let b = weights(&[("rust", 0.9), ("sql", 0.1)]);
        let ab = cosine_from_weights(&a, &b);
        let ba = cosine_from_weights(&b, &a);
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 0.0 && ab < 1.0);
    }
}
