//! Tests for options rebuilt with a caller-defined sibling order

use rstest::{fixture, rstest};

use nestset::domain::custom::build_node;
use nestset::domain::{
    by_id_desc, by_key, by_lft, by_name, custom_order_levels, custom_order_options,
    natural_order_levels, DomainResult, NestedSetStore, Node, NodeId, OptionEntry, RootSource,
};
use nestset::infrastructure::InMemoryStore;
use nestset::util::testing::{categories, category, init_test_setup};

fn dash_label(node: &Node, level: usize) -> String {
    format!("{} {}", "-".repeat(level), node.name)
}

fn entries(expected: &[(&str, u64)]) -> Vec<OptionEntry> {
    expected.iter().map(|&e| OptionEntry::from(e)).collect()
}

fn names(leveled: &[(Node, usize)]) -> Vec<&str> {
    leveled.iter().map(|(n, _)| n.name.as_str()).collect()
}

fn admit_all(_: &Node) -> bool {
    true
}

#[fixture]
fn store() -> InMemoryStore {
    init_test_setup();
    categories()
}

/// Three levels with siblings stored out of alphabetical order.
fn fruit_store() -> InMemoryStore {
    InMemoryStore::new(vec![
        Node::new(10, None, 1, 14, "Fruit"),
        Node::new(11, Some(10), 2, 7, "pear"),
        Node::new(12, Some(11), 3, 4, "Williams"),
        Node::new(13, Some(11), 5, 6, "Conference"),
        Node::new(14, Some(10), 8, 9, "Apple"),
        Node::new(15, Some(10), 10, 13, "banana"),
        Node::new(16, Some(15), 11, 12, "Cavendish"),
        Node::new(20, None, 15, 16, "Berries"),
    ])
    .unwrap()
}

// ============================================================
// build_node Tests
// ============================================================

#[rstest]
fn given_lft_order_when_building_node_then_matches_stored_order(store: InMemoryStore) {
    let set = store.self_and_descendants(&category(1)).unwrap();
    let actual = build_node(&set[0], &set, &by_lft, &admit_all, 0, Vec::new());

    let expected: Vec<&str> = set.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names(&actual), expected);
}

#[rstest]
fn given_descending_id_order_when_building_node_then_siblings_are_reversed(store: InMemoryStore) {
    let set = store.self_and_descendants(&category(1)).unwrap();
    let actual = build_node(&set[0], &set, &by_id_desc, &admit_all, 0, Vec::new());

    assert_eq!(
        names(&actual),
        vec!["Top Level", "Child 3", "Child 2", "Child 2.1", "Child 1"]
    );
}

#[rstest]
fn given_shuffled_set_when_building_node_then_structure_comes_from_parent_ids(
    store: InMemoryStore,
) {
    let mut set = store.self_and_descendants(&category(1)).unwrap();
    set.reverse();
    let root = category(1);

    let actual = build_node(&root, &set, &by_lft, &admit_all, 0, Vec::new());
    let levels: Vec<(u64, usize)> = actual.iter().map(|(n, l)| (n.id.0, *l)).collect();

    assert_eq!(levels, vec![(1, 0), (2, 1), (3, 1), (4, 2), (5, 1)]);
}

#[rstest]
fn given_existing_accumulator_when_building_node_then_appends(store: InMemoryStore) {
    let set = store.self_and_descendants(&category(6)).unwrap();
    let acc = vec![(category(1), 0)];

    let actual = build_node(&set[0], &set, &by_lft, &admit_all, 0, acc);

    assert_eq!(names(&actual), vec!["Top Level", "Top Level 2"]);
}

// ============================================================
// custom_order_options Tests
// ============================================================

#[rstest]
fn given_descending_id_order_when_listing_then_roots_and_siblings_are_reversed(
    store: InMemoryStore,
) {
    let actual =
        custom_order_options(&store, RootSource::AllRoots, by_id_desc, None, 0, dash_label)
            .unwrap();

    let expected = entries(&[
        (" Top Level 2", 6),
        (" Top Level", 1),
        ("- Child 3", 5),
        ("- Child 2", 3),
        ("-- Child 2.1", 4),
        ("- Child 1", 2),
    ]);
    assert_eq!(actual, expected);
}

#[rstest]
fn given_key_extractor_when_listing_then_sorts_like_comparator(store: InMemoryStore) {
    let by_neg_id = by_key(|n: &Node| std::cmp::Reverse(n.id));
    let with_key =
        custom_order_options(&store, RootSource::AllRoots, by_neg_id, None, 0, dash_label)
            .unwrap();
    let with_cmp =
        custom_order_options(&store, RootSource::AllRoots, by_id_desc, None, 0, dash_label)
            .unwrap();

    assert_eq!(with_key, with_cmp);
}

#[rstest]
fn given_mover_when_listing_then_prunes_mover_subtree(store: InMemoryStore) {
    let mover = category(3);
    let actual = custom_order_options(
        &store,
        RootSource::AllRoots,
        by_id_desc,
        Some(&mover),
        0,
        dash_label,
    )
    .unwrap();

    let expected = entries(&[
        (" Top Level 2", 6),
        (" Top Level", 1),
        ("- Child 3", 5),
        ("- Child 1", 2),
    ]);
    assert_eq!(actual, expected);
}

/// Rejects only the listed nodes, independent of where they sit in the tree.
struct HidingStore {
    inner: InMemoryStore,
    hidden: Vec<NodeId>,
}

impl NestedSetStore for HidingStore {
    fn roots(&self) -> DomainResult<Vec<Node>> {
        self.inner.roots()
    }

    fn self_and_descendants(&self, node: &Node) -> DomainResult<Vec<Node>> {
        self.inner.self_and_descendants(node)
    }

    fn is_new_entity(&self, _node: &Node) -> bool {
        false
    }

    fn move_possible(&self, candidate: &Node, _reference: &Node) -> bool {
        !self.hidden.contains(&candidate.id)
    }
}

#[rstest]
fn given_hidden_inner_node_when_listing_then_its_admissible_descendants_are_pruned_too(
    store: InMemoryStore,
) {
    let hiding = HidingStore {
        inner: store,
        hidden: vec![NodeId(3)],
    };
    let mover = category(2);

    let actual = custom_order_options(
        &hiding,
        RootSource::AllRoots,
        by_lft,
        Some(&mover),
        0,
        dash_label,
    )
    .unwrap();

    let expected = entries(&[
        (" Top Level", 1),
        ("- Child 1", 2),
        ("- Child 3", 5),
        (" Top Level 2", 6),
    ]);
    assert_eq!(actual, expected);
}

#[rstest]
fn given_new_mover_when_listing_then_excludes_nothing(store: InMemoryStore) {
    let mover = Node::new(77, None, 1, 10, "Unsaved");
    let actual =
        custom_order_levels(&store, RootSource::AllRoots, by_lft, Some(&mover), 0).unwrap();
    assert_eq!(actual.len(), 6);
}

#[rstest]
fn given_start_level_when_listing_then_levels_are_offset(store: InMemoryStore) {
    let actual =
        custom_order_options(&store, category(3), by_lft, None, 2, dash_label).unwrap();

    assert_eq!(actual, entries(&[("-- Child 2", 3), ("--- Child 2.1", 4)]));
}

#[test]
fn given_name_order_when_listing_then_every_sibling_group_is_sorted() {
    let store = fruit_store();
    let leveled = custom_order_levels(&store, RootSource::AllRoots, by_name, None, 0).unwrap();

    assert_eq!(
        names(&leveled),
        vec![
            "Berries",
            "Fruit",
            "Apple",
            "banana",
            "Cavendish",
            "pear",
            "Conference",
            "Williams"
        ]
    );
}

#[test]
fn given_explicit_roots_when_listing_then_roots_are_sorted_too() {
    let store = fruit_store();
    let roots = vec![
        store.node(NodeId(20)).unwrap().clone(),
        store.node(NodeId(11)).unwrap().clone(),
    ];
    let leveled = custom_order_levels(&store, roots, by_lft, None, 0).unwrap();
    let actual: Vec<(u64, usize)> = leveled.iter().map(|(n, l)| (n.id.0, *l)).collect();

    assert_eq!(actual, vec![(11, 0), (12, 1), (13, 1), (20, 0)]);
}

// ============================================================
// Equivalence With Natural Order
// ============================================================

#[rstest]
#[case::categories(categories())]
#[case::fruit(fruit_store())]
fn given_lft_comparator_when_listing_then_matches_natural_order(#[case] store: InMemoryStore) {
    let natural = natural_order_levels(&store, RootSource::AllRoots, None).unwrap();
    let custom = custom_order_levels(&store, RootSource::AllRoots, by_lft, None, 0).unwrap();
    assert_eq!(natural, custom);
}

#[rstest]
#[case::top(1)]
#[case::inner(3)]
#[case::leaf(2)]
fn given_any_mover_when_listing_then_no_entry_lies_within_mover(
    store: InMemoryStore,
    #[case] mover_id: u64,
) {
    let mover = category(mover_id);
    let leveled =
        custom_order_levels(&store, RootSource::AllRoots, by_id_desc, Some(&mover), 0).unwrap();

    assert!(!leveled.is_empty());
    assert!(leveled.iter().all(|(n, _)| !mover.is_or_is_ancestor_of(n)));
}
