// tests/env/action_test.rs
use trellis::env::{ActionSpace, JoinAction};

#[test]
fn test_catalogue_size_is_gauss_sum() {
    for n in 2..=8 {
        let space = ActionSpace::new(n);
        assert_eq!(space.len(), n * (n - 1) / 2, "size mismatch for n={}", n);
    }
}

#[test]
fn test_row_major_upper_triangular_order() {
    let space = ActionSpace::new(4);

    let expected = vec![
        JoinAction::new(0, 1),
        JoinAction::new(0, 2),
        JoinAction::new(0, 3),
        JoinAction::new(1, 2),
        JoinAction::new(1, 3),
        JoinAction::new(2, 3),
    ];
    assert_eq!(space.actions(), expected.as_slice());
}

#[test]
fn test_every_pair_is_ordered() {
    let space = ActionSpace::new(6);
    for action in space.actions() {
        assert!(action.left < action.right);
    }
}

#[test]
fn test_flat_index_lookup() {
    let space = ActionSpace::new(4);

    assert_eq!(space.get(0), Some(JoinAction::new(0, 1)));
    assert_eq!(space.get(5), Some(JoinAction::new(2, 3)));
    assert_eq!(space.get(6), None);
}

#[test]
fn test_degenerate_sizes() {
    assert!(ActionSpace::new(0).is_empty());
    assert!(ActionSpace::new(1).is_empty());
    assert_eq!(ActionSpace::new(2).len(), 1);
}
