use grapharray::functions;
use grapharray::{
    BaseGraph, DiGraph, Element, ElementKind, ElementMap, GraphArray, GraphArrayConfig, GraphError,
    Layout,
};
use std::sync::Arc;

fn sample_graph() -> Arc<BaseGraph<i32>> {
    BaseGraph::from_edges(vec![(0, 2), (0, 4), (2, 4), (2, 6), (4, 6)]).freeze_shared()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_graph_lifecycle() {
    init_tracing();
    let mut bg = BaseGraph::new();
    bg.add_edges_from(vec![(0, 2), (0, 4), (2, 4)]).unwrap();
    bg.add_edge(2, 6).unwrap();
    bg.add_edge(4, 6).unwrap();

    // Arrays and indices need a frozen graph
    assert!(matches!(bg.node_index(&0), Err(GraphError::InvalidState(_))));
    let unfrozen = Arc::new(bg.clone());
    assert!(matches!(
        GraphArray::node_array(&unfrozen, 0.0),
        Err(GraphError::InvalidState(_))
    ));

    bg.freeze();
    assert!(bg.is_frozen());
    assert!(matches!(bg.add_edge(6, 0), Err(GraphError::ImmutableGraph(_))));
    assert!(matches!(bg.add_node(8), Err(GraphError::ImmutableGraph(_))));

    // Freezing again changes nothing
    bg.freeze();
    assert_eq!(bg.node_count(), 4);
    assert_eq!(bg.edge_count(), 5);
}

#[test]
fn test_deterministic_ordering() {
    // Insertion order decides node order; edges follow their source node
    let bg = BaseGraph::from_edges(vec![(3, 1), (1, 2), (3, 2), (2, 1)]).freeze_shared();
    let nodes: Vec<i32> = bg.ordered_nodes().unwrap().iter().copied().collect();
    assert_eq!(nodes, vec![3, 1, 2]);
    let edges: Vec<(i32, i32)> = bg.ordered_edges().unwrap().iter().copied().collect();
    assert_eq!(edges, vec![(3, 1), (3, 2), (1, 2), (2, 1)]);

    for (i, e) in edges.iter().enumerate() {
        assert_eq!(bg.edge_index(&e.0, &e.1).unwrap(), i);
    }
}

#[test]
fn test_ordering_identical_across_freezes() {
    let insert = || {
        let mut bg = BaseGraph::new();
        bg.add_node(10).unwrap();
        bg.add_edges_from(vec![(5, 7), (7, 5), (10, 7), (5, 10), (7, 7)])
            .unwrap();
        bg.add_edge(10, 5).unwrap();
        bg.freeze_shared()
    };
    let first = insert();
    let second = insert();
    assert!(!BaseGraph::same_graph(&first, &second));

    let nodes_a: Vec<i32> = first.ordered_nodes().unwrap().iter().copied().collect();
    let nodes_b: Vec<i32> = second.ordered_nodes().unwrap().iter().copied().collect();
    assert_eq!(nodes_a, nodes_b);
    assert_eq!(nodes_a, vec![10, 5, 7]);
    let a: Vec<(i32, i32)> = first.ordered_edges().unwrap().iter().copied().collect();
    let b: Vec<(i32, i32)> = second.ordered_edges().unwrap().iter().copied().collect();
    assert_eq!(a, b);
    assert_eq!(a, vec![(10, 7), (10, 5), (5, 7), (5, 10), (7, 5), (7, 7)]);

    // Freezing a clone of an unfrozen graph reproduces the same positions
    let mut unfrozen = BaseGraph::from_edges(vec![(2, 1), (1, 3), (2, 3)]);
    let mut copy = unfrozen.clone();
    unfrozen.freeze();
    copy.freeze();
    for e in unfrozen.ordered_edges().unwrap() {
        assert_eq!(
            unfrozen.edge_index(&e.0, &e.1).unwrap(),
            copy.edge_index(&e.0, &e.1).unwrap()
        );
    }
}

#[test]
fn test_round_trip_in_every_layout() {
    let g = sample_graph();
    for layout in [Layout::Flat, Layout::Column] {
        for transposed in [false, true] {
            let mut a =
                GraphArray::with_layout(&g, ElementKind::Edge, vec![1.0, 2.0, 3.0, 4.0, 5.0], layout)
                    .unwrap();
            if transposed {
                a.transpose();
            }
            let rebuilt = GraphArray::with_layout(&g, ElementKind::Edge, a.to_mapping().unwrap(), layout)
                .unwrap();
            assert!(rebuilt == a, "{:?} transposed={}", layout, transposed);
        }
    }
}

#[test]
fn test_string_keyed_graph() {
    let bg = BaseGraph::from_edges(vec![
        ("home".to_string(), "work".to_string()),
        ("work".to_string(), "gym".to_string()),
    ])
    .freeze_shared();
    let a = GraphArray::edge_array(&bg, 2.5).unwrap();
    assert_eq!(
        a.get(&Element::Edge("work".to_string(), "gym".to_string()))
            .unwrap(),
        2.5
    );
    let err = a
        .get(&Element::Edge("gym".to_string(), "home".to_string()))
        .unwrap_err();
    assert!(matches!(err, GraphError::ElementNotFound { kind: ElementKind::Edge, .. }));
}

#[test]
fn test_initialisation_paths_agree() {
    let g = sample_graph();
    let from_map = GraphArray::node_array(
        &g,
        ElementMap::nodes(vec![(6, 4.0), (4, 3.0), (2, 2.0), (0, 1.0)]),
    )
    .unwrap();
    let from_vec = GraphArray::node_array(&g, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let from_array = GraphArray::node_array(&g, &from_vec).unwrap();

    assert_eq!(from_map, from_vec);
    assert_eq!(from_array, from_vec);
}

#[test]
fn test_initialisation_errors() {
    let g = sample_graph();

    let missing = ElementMap::nodes(vec![(0, 1.0), (2, 2.0), (4, 3.0)]);
    assert!(matches!(
        GraphArray::node_array(&g, missing),
        Err(GraphError::ElementNotFound { kind: ElementKind::Node, .. })
    ));

    let extra = ElementMap::nodes(vec![(0, 1.0), (2, 2.0), (4, 3.0), (6, 4.0), (8, 5.0)]);
    assert!(matches!(GraphArray::node_array(&g, extra), Err(GraphError::Shape(_))));

    let wrong_kind = ElementMap::edges(vec![((0, 2), 1.0)]);
    assert!(matches!(
        GraphArray::node_array(&g, wrong_kind),
        Err(GraphError::TypeMismatch { .. })
    ));

    assert!(matches!(
        GraphArray::edge_array(&g, vec![1.0, 2.0]),
        Err(GraphError::Shape(_))
    ));

    let nodes = GraphArray::node_array(&g, 1.0).unwrap();
    assert!(matches!(
        GraphArray::edge_array(&g, &nodes),
        Err(GraphError::TypeMismatch { .. })
    ));

    let other = sample_graph();
    assert!(matches!(
        GraphArray::node_array(&other, &nodes),
        Err(GraphError::CrossGraph)
    ));
}

#[test]
fn test_cross_graph_operations_rejected() {
    // Same structure, separately frozen: still incompatible
    let g1 = sample_graph();
    let g2 = sample_graph();
    let a = GraphArray::node_array(&g1, 1.0).unwrap();
    let b = GraphArray::node_array(&g2, 1.0).unwrap();

    assert!(matches!(a.add(&b), Err(GraphError::CrossGraph)));
    assert!(matches!(a.matmul(&b), Err(GraphError::CrossGraph)));
    assert_ne!(a, b);

    let shared = GraphArray::node_array(&g1, 1.0).unwrap();
    assert_eq!(a, shared);
}

#[test]
fn test_mixed_kinds_rejected() {
    let g = sample_graph();
    let nodes = GraphArray::node_array(&g, 1.0).unwrap();
    let edges = GraphArray::edge_array(&g, 1.0).unwrap();
    assert!(matches!(nodes.mul(&edges), Err(GraphError::TypeMismatch { .. })));
    assert!(matches!(edges.matmul(&nodes), Err(GraphError::TypeMismatch { .. })));
}

#[test]
fn test_arithmetic_matches_elementwise() {
    let g = sample_graph();
    let a = GraphArray::edge_array(&g, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let b = GraphArray::edge_array(&g, vec![2.0, 2.0, 2.0, 2.0, 2.0]).unwrap();

    assert_eq!(a.add(&b).unwrap().values(), vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    assert_eq!(a.sub(&b).unwrap().values(), vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
    assert_eq!(a.mul(&b).unwrap().values(), vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(a.div(&b).unwrap().values(), vec![0.5, 1.0, 1.5, 2.0, 2.5]);
    assert_eq!(a.pow(&b).unwrap().values(), vec![1.0, 4.0, 9.0, 16.0, 25.0]);
    assert_eq!(a.sub(1.0).unwrap().values(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

    // Operands are untouched
    assert_eq!(a.values(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_division_by_zero_is_ieee() {
    let g = sample_graph();
    let a = GraphArray::node_array(&g, vec![1.0, -1.0, 0.0, 2.0]).unwrap();
    let q = a.div(0.0).unwrap();
    let v = q.values();
    assert_eq!(v[0], f64::INFINITY);
    assert_eq!(v[1], f64::NEG_INFINITY);
    assert!(v[2].is_nan());
}

#[test]
fn test_inner_product_on_rows_and_columns() {
    let g = sample_graph();
    let w = ElementMap::edges(vec![
        ((0, 2), 6.0),
        ((0, 4), 4.0),
        ((2, 4), 3.0),
        ((2, 6), 1.0),
        ((4, 6), 2.0),
    ]);
    let flat = GraphArray::edge_array(&g, w.clone()).unwrap();
    assert_eq!(flat.matmul(&flat).unwrap(), 66.0);

    let col = GraphArray::edge_column(&g, w).unwrap();
    let mut row = col.clone();
    row.transpose();
    assert_eq!(row.shape(), &[1, 5]);
    assert_eq!(row.matmul(&col).unwrap(), 66.0);
    assert!(matches!(col.matmul(&row), Err(GraphError::Shape(_))));
}

#[test]
fn test_column_layout_round_trip() {
    let g = sample_graph();
    let mut a = GraphArray::with_layout(&g, ElementKind::Node, vec![1.0, 2.0, 3.0, 4.0], Layout::Column)
        .unwrap();
    assert!(a.is_2d());
    assert_eq!(a.shape(), &[4, 1]);

    a.transpose();
    assert_eq!(a.shape(), &[1, 4]);
    a.set(&Element::Node(4), 30.0).unwrap();
    a.transpose();
    assert_eq!(a.shape(), &[4, 1]);
    assert_eq!(a.values(), vec![1.0, 2.0, 30.0, 4.0]);

    // Flat arrays are unchanged by transpose
    let mut flat = GraphArray::node_array(&g, 1.0).unwrap();
    flat.transpose();
    assert_eq!(flat.shape(), &[4]);
}

#[test]
fn test_mapping_and_attributed_graph() {
    let g = sample_graph();
    let w = ElementMap::edges(vec![
        ((0, 2), 6.0),
        ((0, 4), 4.0),
        ((2, 4), 3.0),
        ((2, 6), 1.0),
        ((4, 6), 2.0),
    ]);
    let a = GraphArray::edge_array(&g, w.clone()).unwrap();
    assert_eq!(a.to_mapping().unwrap(), w);

    let attributed: DiGraph<i32> = a.as_graph().unwrap();
    assert_eq!(attributed.edge_attrs(&2, &4).unwrap()["value"], 3.0);
    // Base graph stays untouched
    assert!(g.graph().edge_attrs(&2, &4).unwrap().is_empty());

    let config = GraphArrayConfig::from_json_str(r#"{"value_attribute": "flow"}"#).unwrap();
    let attributed = a.to_attributed_graph_with(ElementKind::Edge, &config).unwrap();
    assert_eq!(attributed.edge_attrs(&0, &2).unwrap()["flow"], 6.0);

    assert!(matches!(
        a.to_attributed_graph(ElementKind::Node),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_display_lists_elements() {
    let g = sample_graph();
    let a = GraphArray::node_array(&g, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let text = a.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "index\tvalue");
    assert_eq!(lines[1], "0\t1");
    assert_eq!(lines[4], "6\t4");
}

#[test]
fn test_functions_over_arrays() {
    let g = sample_graph();
    let a = GraphArray::edge_array(&g, vec![0.5, 3.0, -2.0, 3.0, 1.0]).unwrap();

    assert_eq!(functions::sum(&a), 5.5);
    assert_eq!(functions::min(&a).unwrap(), -2.0);
    assert_eq!(functions::max(&a).unwrap(), 3.0);
    assert_eq!(functions::argmin(&a).unwrap(), Element::Edge(2, 4));
    assert_eq!(functions::argmax(&a).unwrap(), Element::Edge(0, 4));

    let e = functions::exp(&a);
    assert_eq!(e.kind(), ElementKind::Edge);
    assert!((e.get(&Element::Edge(0, 2)).unwrap() - 0.5f64.exp()).abs() < 1e-12);
    let back = functions::log(&e);
    for (x, y) in back.values().iter().zip(a.values()) {
        assert!((x - y).abs() < 1e-12);
    }
}
