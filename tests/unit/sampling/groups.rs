//! Tests for random group sampling

#[cfg(test)]
mod tests {
    use fugaco::CollageError;
    use fugaco::io::configuration::GROUP_SIZE;
    use fugaco::sampling::{FileGroup, sample_groups};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn pool(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    // Tests that every requested group is produced with sixteen members from the pool
    #[test]
    fn test_group_count_and_size() {
        let pool = pool(&["a.png", "b.jpg", "c.jpeg"]);
        let mut rng = StdRng::seed_from_u64(7);

        for count in [0, 1, 4, 9] {
            let groups = sample_groups(&pool, count, &mut rng).unwrap();

            assert_eq!(groups.len(), count);
            for group in &groups {
                assert_eq!(group.len(), GROUP_SIZE);
                assert!(!group.is_empty());
                assert!(group.paths().iter().all(|path| pool.contains(path)));
            }
        }
    }

    // Tests that a single-file pool fills every slot with that file
    #[test]
    fn test_single_file_pool() {
        let pool = pool(&["only.png"]);
        let mut rng = StdRng::seed_from_u64(0);

        let groups = sample_groups(&pool, 2, &mut rng).unwrap();

        for group in groups {
            assert!(group.iter().all(|path| path == PathBuf::from("only.png")));
        }
    }

    // Tests that sampling is with replacement and reaches every file
    #[test]
    fn test_sampling_with_replacement() {
        let pool = pool(&["a.png", "b.png"]);
        let mut rng = StdRng::seed_from_u64(99);

        let groups = sample_groups(&pool, 10, &mut rng).unwrap();
        let seen: HashSet<&PathBuf> = groups.iter().flat_map(FileGroup::paths).collect();

        assert_eq!(seen.len(), 2);
        let first = groups.first().unwrap();
        let distinct: HashSet<&PathBuf> = first.paths().iter().collect();
        assert!(distinct.len() < first.len());
    }

    // Tests that the injected generator makes sampling reproducible
    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let pool = pool(&["a", "b", "c", "d", "e", "f", "g"]);

        let first = sample_groups(&pool, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = sample_groups(&pool, 3, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(first, second);
    }

    // Tests that an empty pool is rejected rather than yielding short groups
    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);

        assert!(FileGroup::sample(&[], &mut rng).is_none());
        assert!(matches!(
            sample_groups(&[], 1, &mut rng),
            Err(CollageError::NoFilesFound { .. })
        ));
    }
}
