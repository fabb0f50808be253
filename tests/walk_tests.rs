//! Unit tests for the alternating walk representation.

use lk_tsp::walk::AlternatingWalk;

#[test]
fn test_empty_walk() {
    let walk = AlternatingWalk::new();
    assert!(walk.is_empty());
    assert_eq!(walk.len(), 0);
}

#[test]
fn test_push_and_index() {
    let mut walk = AlternatingWalk::new();
    walk.push(3);
    walk.push(1);
    walk.push(4);

    assert_eq!(walk.len(), 3);
    assert_eq!(walk[0], 3);
    assert_eq!(walk[1], 1);
    assert_eq!(walk[2], 4);
}

#[test]
fn test_truncate() {
    let mut walk = AlternatingWalk::from(vec![0, 5, 2, 7]);
    walk.truncate(2);

    assert_eq!(walk, AlternatingWalk::from(vec![0, 5]));
}

#[test]
fn test_close_appends_first_vertex() {
    let walk = AlternatingWalk::from(vec![1, 2, 3]);
    let closed = walk.close();

    // The original walk is left untouched
    assert_eq!(walk.len(), 3);
    assert_eq!(closed, AlternatingWalk::from(vec![1, 2, 3, 1]));
}

#[test]
fn test_append_and_close() {
    let walk = AlternatingWalk::from(vec![1, 2, 3]);
    let closed = walk.append_and_close(5);

    assert_eq!(walk.len(), 3);
    assert_eq!(closed, AlternatingWalk::from(vec![1, 2, 3, 5, 1]));
}

#[test]
fn test_contains_edge_is_unordered() {
    let walk = AlternatingWalk::from(vec![0, 4, 2, 6]);

    assert!(walk.contains_edge(0, 4));
    assert!(walk.contains_edge(4, 0));
    assert!(walk.contains_edge(2, 4));
    assert!(walk.contains_edge(2, 6));

    // (0, 2) skips a vertex and is not a walk edge
    assert!(!walk.contains_edge(0, 2));
    assert!(!walk.contains_edge(0, 6));
}

#[test]
fn test_edges_alternate_in_order() {
    let walk = AlternatingWalk::from(vec![0, 4, 2, 6]);
    let edges: Vec<(usize, usize)> = walk.edges().collect();

    assert_eq!(edges, vec![(0, 4), (4, 2), (2, 6)]);
}

#[test]
fn test_double_close_equals_close_then_push() {
    // Closing twice appends the first vertex twice; this pins down the
    // canonical behavior so callers never double-close by accident.
    let walk = AlternatingWalk::from(vec![1, 2, 3]);

    let double_closed = walk.close().close();
    let mut close_then_push = walk.close();
    close_then_push.push(walk[0]);

    assert_eq!(double_closed, close_then_push);
}
