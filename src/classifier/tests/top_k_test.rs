#[cfg(test)]
mod top_k_test {
    use crate::classifier::error::ClassifierError;
    use crate::classifier::label_catalog::LabelCatalog;
    use crate::classifier::tests::fixture::plants;
    use crate::classifier::top_k::{top_k, Classification, TopKSelector};

    fn catalog(n: usize) -> LabelCatalog {
        LabelCatalog::new((0..n).map(|i| format!("label-{}", i)).collect()).unwrap()
    }

    fn labels(ranked: &[Classification]) -> Vec<&str> {
        ranked.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_top_one() {
        let ranked = top_k(&[0.1, 0.3, 0.1], &plants(), 1).unwrap();

        assert_eq!(
            ranked,
            vec![Classification {
                label: "oak".to_string(),
                confidence: 0.3
            }]
        );
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let ranked = top_k(&[0.15, 0.45, 0.15], &plants(), 2).unwrap();
        assert_eq!(labels(&ranked), vec!["oak", "rose"]);

        let ranked = top_k(&[0.15, 0.45, 0.15], &plants(), 3).unwrap();
        assert_eq!(labels(&ranked), vec!["oak", "rose", "fern"]);

        let ranked = top_k(&[0.2, 0.2, 0.2], &plants(), 2).unwrap();
        assert_eq!(labels(&ranked), vec!["rose", "oak"]);
    }

    #[test]
    fn test_signed_zero_ties_keep_catalog_order() {
        let labels_2 = LabelCatalog::from_text("a\nb").unwrap();

        let ranked = top_k(&[-0.0, 0.0], &labels_2, 2).unwrap();
        assert_eq!(labels(&ranked), vec!["a", "b"]);

        let ranked = top_k(&[0.0, -0.0], &labels_2, 1).unwrap();
        assert_eq!(labels(&ranked), vec!["a"]);

        let ranked = top_k(&[-0.0, 0.0, 0.1], &plants(), 2).unwrap();
        assert_eq!(labels(&ranked), vec!["fern", "rose"]);
    }

    #[test]
    fn test_ties_survive_eviction() {
        // The last two entries tie with the current minimum and must be the
        // ones evicted.
        let labels_10 = catalog(10);
        let vector = [0.5, 0.1, 0.9, 0.1, 0.3, 0.1, 0.1, 0.3, 0.1, 0.1];

        let ranked = top_k(&vector, &labels_10, 4).unwrap();

        assert_eq!(labels(&ranked), vec!["label-2", "label-0", "label-4", "label-7"]);

        let ranked = top_k(&vector, &labels_10, 5).unwrap();
        assert_eq!(ranked[4].label, "label-1");
    }

    #[test]
    fn test_k_larger_than_catalog_is_clamped() {
        let ranked = top_k(&[0.1, 0.3, 0.2], &plants(), 10).unwrap();

        assert_eq!(labels(&ranked), vec!["oak", "fern", "rose"]);
    }

    #[test]
    fn test_k_zero_is_empty() {
        assert!(top_k(&[0.1, 0.3, 0.2], &plants(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_length_and_order_for_many_inputs() {
        let n = 200;
        let labels_n = catalog(n);
        // Deterministic pseudo-random scores with plenty of repeats.
        let vector: Vec<f32> = (0..n).map(|i| ((i * 37 + 11) % 23) as f32 / 23.0).collect();

        for k in [1, 2, 3, 5, 17, 200, 500] {
            let ranked = top_k(&vector, &labels_n, k).unwrap();
            assert_eq!(ranked.len(), k.min(n));
            for pair in ranked.windows(2) {
                assert!(pair[0].confidence >= pair[1].confidence);
            }

            let mut expected: Vec<(usize, f32)> = vector.iter().copied().enumerate().collect();
            expected.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
            let expected: Vec<String> = expected
                .iter()
                .take(k.min(n))
                .map(|(i, _)| format!("label-{}", i))
                .collect();
            assert_eq!(labels(&ranked), expected);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let vector = [0.4, 0.4, 0.1, 0.4, 0.7];
        let labels_5 = catalog(5);

        let first = top_k(&vector, &labels_5, 3).unwrap();
        for _ in 0..10 {
            assert_eq!(top_k(&vector, &labels_5, 3).unwrap(), first);
        }
        assert_eq!(labels(&first), vec!["label-4", "label-0", "label-1"]);
    }

    #[test]
    fn test_dimension_mismatch() {
        for vector in [vec![0.1, 0.2], vec![0.1, 0.2, 0.3, 0.4], vec![]] {
            let len = vector.len();
            assert!(matches!(
                top_k(&vector, &plants(), 1),
                Err(ClassifierError::DimensionMismatch { expected: 3, actual }) if actual == len
            ));
        }
    }

    #[test]
    fn test_selector_ceiling() {
        assert!(matches!(
            TopKSelector::new(0),
            Err(ClassifierError::InvalidConfiguration(_))
        ));

        let selector = TopKSelector::new(2).unwrap();
        let ranked = selector.select(&[0.1, 0.3, 0.2], &plants(), 3).unwrap();

        assert_eq!(labels(&ranked), vec!["oak", "fern"]);
    }
}
