use kin_graph::{PersonGraph, PersonId};
use kin_layout::{ConnectionKind, Layout, LayoutConfig, LayoutEngine};
use kin_test_utils::{
    cross_generation_marriage, direct_line, disconnected, random_family, three_children,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn engine() -> LayoutEngine {
    LayoutEngine::new(LayoutConfig::default())
}

#[test]
fn middle_of_three_children_sits_under_couple_midpoint() {
    let family = three_children();
    let layout = engine().layout(&family.graph);

    let father = layout.position(family.father).unwrap();
    let mother = layout.position(family.mother).unwrap();
    let [first, middle, last] = family.children.map(|c| layout.position(c).unwrap());

    let midpoint = (father.x + mother.x) / 2.0;
    assert!((middle.x - midpoint).abs() < EPSILON);
    assert!(((middle.x - first.x) - (last.x - middle.x)).abs() < EPSILON);
    assert!(first.x < middle.x && middle.x < last.x);

    let row = LayoutConfig::default().row_height();
    for child in [first, middle, last] {
        assert_eq!(child.y, father.y + row);
    }
}

#[test]
fn layout_is_deterministic() {
    let graph = random_family(3, 40);
    let a = engine().layout(&graph);
    let b = engine().layout(&graph);
    assert_eq!(a, b);
}

#[test]
fn leftmost_card_edge_sits_at_padding() {
    let config = LayoutConfig::default().with_padding(55.0);
    let layout = LayoutEngine::new(config).layout(&disconnected().graph);

    let bounds = layout.bounds(&config).unwrap();
    assert!((bounds.min_x - 55.0).abs() < EPSILON);
    assert!((bounds.min_y + config.card_height / 2.0).abs() < EPSILON);
}

#[test]
fn connections_follow_edges() {
    let family = direct_line();
    let layout = engine().layout(&family.graph);

    let spouses: Vec<_> = layout.connections_of(ConnectionKind::Spouse).collect();
    assert_eq!(spouses.len(), 1);
    assert_eq!((spouses[0].from, spouses[0].to), (family.father, family.mother));

    let descent: Vec<_> = layout
        .connections_of(ConnectionKind::ParentChild)
        .map(|c| (c.from, c.to))
        .collect();
    assert_eq!(
        descent,
        vec![
            (family.father, family.son),
            (family.father, family.daughter),
            (family.mother, family.son),
            (family.mother, family.daughter),
        ]
    );

    // Spouse connectors come first.
    assert_eq!(layout.connections[0].kind, ConnectionKind::Spouse);
}

#[test]
fn malformed_graph_yields_partial_layout() {
    // 1 lists a missing child 99; 3 has no generation; 4 points at a missing
    // spouse 77.
    let json = r#"{
        "people": {
            "1": {"id": 1, "name": "A", "generation": 0, "children": [2, 99]},
            "2": {"id": 2, "name": "B", "generation": 1, "parents": [1]},
            "3": {"id": 3, "name": "C", "parents": [1]},
            "4": {"id": 4, "name": "D", "generation": 0, "spouses": [77]}
        },
        "lastId": 4
    }"#;
    let graph: PersonGraph = serde_json::from_str(json).unwrap();
    let layout = engine().layout(&graph);

    let placed: Vec<_> = layout.positions.keys().copied().collect();
    assert_eq!(placed, vec![PersonId::new(1), PersonId::new(2), PersonId::new(4)]);
    assert!(layout.position(PersonId::new(3)).is_none());

    let descent: Vec<_> = layout
        .connections_of(ConnectionKind::ParentChild)
        .map(|c| (c.from, c.to))
        .collect();
    assert_eq!(descent, vec![(PersonId::new(1), PersonId::new(2))]);
    assert_eq!(layout.connections_of(ConnectionKind::Spouse).count(), 0);
}

#[test]
fn child_is_laid_out_below_mother_who_married_down_a_generation() {
    let family = cross_generation_marriage();
    let config = LayoutConfig::default();
    let layout = LayoutEngine::new(config).layout(&family.graph);

    let mother = layout.position(family.mother).unwrap();
    let husband = layout.position(family.husband).unwrap();
    let child = layout.position(family.child).unwrap();
    let uncle = layout.position(family.uncle).unwrap();

    assert_eq!(layout.positions.len(), family.graph.len());
    assert_eq!(husband.y, mother.y);
    assert_eq!(child.y, mother.y + config.row_height());
    assert!(uncle.y < mother.y);
    assert_no_overlap(&layout, &config).unwrap();
}

fn assert_no_overlap(layout: &Layout, config: &LayoutConfig) -> Result<(), TestCaseError> {
    let cards: Vec<_> = layout.positions.iter().collect();
    for (i, (a, pa)) in cards.iter().enumerate() {
        for (b, pb) in &cards[i + 1..] {
            if (pa.y - pb.y).abs() < EPSILON {
                prop_assert!(
                    (pa.x - pb.x).abs() >= config.card_width - EPSILON,
                    "{} and {} overlap: {:?} vs {:?}",
                    a,
                    b,
                    pa,
                    pb
                );
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cards_on_a_row_never_overlap(seed in any::<u64>(), size in 1..80usize) {
        let graph = random_family(seed, size);
        let config = LayoutConfig::default();
        let layout = LayoutEngine::new(config).layout(&graph);

        prop_assert_eq!(layout.positions.len(), graph.len());
        assert_no_overlap(&layout, &config)?;
    }

    #[test]
    fn prop_spouse_connectors_join_one_row(seed in any::<u64>(), size in 1..60usize) {
        let graph = random_family(seed, size);
        let config = LayoutConfig::default();
        let layout = LayoutEngine::new(config).layout(&graph);

        for connection in layout.connections_of(ConnectionKind::Spouse) {
            let from = layout.position(connection.from).unwrap();
            let to = layout.position(connection.to).unwrap();
            prop_assert!((from.y - to.y).abs() < EPSILON);
            prop_assert!((to.x - from.x - config.card_width - config.spouse_gap).abs() < EPSILON);
        }
    }
}
