mod test_utils;

mod test_spatial_set {
    use planar_kernel::{core::Control, index::SpatialSet, shape::Box2};

    fn grid(n: u32) -> SpatialSet<u32> {
        let mut set = SpatialSet::new();
        for i in 0..n {
            for j in 0..n {
                let (x, y) = (i as f64, j as f64);
                assert!(set.add(i * n + j, Box2::new(x, y, x + 0.5, y + 0.5)));
            }
        }
        set
    }

    #[test]
    fn readding_keeps_size() {
        let mut set = grid(4);
        assert_eq!(set.len(), 16);
        assert!(!set.add(3, Box2::new(100.0, 100.0, 101.0, 101.0)));
        assert_eq!(set.len(), 16);
        // box of the original entry is kept
        assert_eq!(set.bbox_of(&3), Some(Box2::new(0.0, 3.0, 0.5, 3.5)));
        assert!(set.check());
    }

    #[test]
    fn delete_non_member_is_noop() {
        let mut set = grid(3);
        assert!(!set.delete(&100));
        assert_eq!(set.len(), 9);
        assert!(set.delete(&4));
        assert!(!set.delete(&4));
        assert!(!set.contains(&4));
        assert_eq!(set.len(), 8);
        assert!(set.check());
    }

    #[test]
    fn range_query() {
        let set = grid(10);
        let mut hits: Vec<u32> = set.search(&Box2::new(2.2, 2.2, 3.2, 3.2)).collect();
        hits.sort_unstable();
        // cells (2, 2), (2, 3), (3, 2), (3, 3); cell (3, _) starts at 3.0 <= 3.2
        assert_eq!(hits, vec![22, 23, 32, 33]);

        let none: Vec<u32> = set.search(&Box2::new(0.6, 0.6, 0.9, 0.9)).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn visit_search_early_exit() {
        let set = grid(10);
        let mut visited = 0;
        let result = set.visit_search(&Box2::new(-1.0, -1.0, 20.0, 20.0), |item| {
            visited += 1;
            if visited == 5 {
                Control::Break(item)
            } else {
                Control::Continue
            }
        });
        assert!(matches!(result, Control::Break(_)));
        assert_eq!(visited, 5);
    }

    #[test]
    fn iteration_in_box_order() {
        let mut set = SpatialSet::new();
        set.add('c', Box2::new(5.0, 0.0, 6.0, 1.0));
        set.add('a', Box2::new(-5.0, 0.0, 6.0, 1.0));
        set.add('b', Box2::new(0.0, -3.0, 1.0, 1.0));
        let items: Vec<char> = set.iter().map(|(item, _)| item).collect();
        assert_eq!(items, vec!['a', 'b', 'c']);
        assert_eq!(set.snapshot(), items);
        assert_eq!(set.bounds(), Box2::new(-5.0, -3.0, 6.0, 1.0));
    }

    #[test]
    fn clear_empties() {
        let mut set = grid(5);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.search(&Box2::new(0.0, 0.0, 10.0, 10.0)).count(), 0);
        assert!(set.add(1, Box2::new(0.0, 0.0, 1.0, 1.0)));
        assert!(set.check());
    }
}
