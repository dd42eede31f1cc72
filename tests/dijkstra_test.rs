use ahash::{HashMap, HashMapExt};
use settled_paths::{
    graphs::graph_functions::{add_edge_bidirectional, path_weight, validate_path},
    shortest_path, shortest_paths, Graph, HashGraph, PathError, VecGraph, WeightedEdge,
};

fn get_small_graph() -> HashGraph<&'static str, i64> {
    HashGraph::from_edges(&[
        WeightedEdge::new("A", "B", 6),
        WeightedEdge::new("A", "D", 1),
        WeightedEdge::new("B", "A", 6),
        WeightedEdge::new("B", "C", 5),
        WeightedEdge::new("B", "D", 2),
        WeightedEdge::new("B", "E", 2),
        WeightedEdge::new("C", "B", 5),
        WeightedEdge::new("C", "E", 5),
        WeightedEdge::new("D", "A", 1),
        WeightedEdge::new("D", "B", 2),
        WeightedEdge::new("D", "E", 1),
        WeightedEdge::new("E", "B", 2),
        WeightedEdge::new("E", "C", 5),
        WeightedEdge::new("E", "D", 1),
    ])
}

#[test]
fn example_graph_distances() {
    let graph = get_small_graph();
    let data = shortest_paths(&graph, &"A").unwrap();

    for (vertex, distance) in [("A", 0), ("B", 3), ("C", 8), ("D", 1), ("E", 2)] {
        assert_eq!(data.get_distance(&vertex), Some(distance), "vertex {}", vertex);
    }
    assert_eq!(data.get_predecessor(&"A"), None);
}

#[test]
fn example_graph_path_to_c() {
    let graph = get_small_graph();
    let data = shortest_paths(&graph, &"A").unwrap();

    let path = data.get_path(&"C").unwrap();
    assert_eq!(path.weight, 8);
    assert_eq!(path.vertices.first(), Some(&"A"));
    assert_eq!(path.vertices.last(), Some(&"C"));
    validate_path(&graph, &"A", 8, &path).unwrap();
}

#[test]
fn path_to_start_is_start_only() {
    let graph = get_small_graph();
    let data = shortest_paths(&graph, &"C").unwrap();

    let path = data.get_path(&"C").unwrap();
    assert_eq!(path.vertices, vec!["C"]);
    assert_eq!(path.weight, 0);
}

#[test]
fn unknown_start_vertex() {
    let graph = get_small_graph();
    assert_eq!(
        shortest_paths(&graph, &"Z").unwrap_err(),
        PathError::UnknownVertex("Z")
    );
}

#[test]
fn negative_weight_is_rejected() {
    let mut graph = get_small_graph();
    graph.set_edge(&WeightedEdge::new("C", "E", -1));

    assert_eq!(
        shortest_paths(&graph, &"A").unwrap_err(),
        PathError::NegativeWeight {
            tail: "C",
            head: "E"
        }
    );
}

#[test]
fn negative_weight_is_rejected_even_if_unreachable() {
    let mut graph = get_small_graph();
    graph.set_edge(&WeightedEdge::new("X", "Y", -1));

    assert!(matches!(
        shortest_paths(&graph, &"A"),
        Err(PathError::NegativeWeight { .. })
    ));
}

#[test]
fn nan_weight_is_rejected() {
    let graph = HashGraph::from_edges(&[
        WeightedEdge::new(0, 1, 1.0),
        WeightedEdge::new(1, 2, f64::NAN),
    ]);

    assert!(matches!(
        shortest_paths(&graph, &0i32),
        Err(PathError::NegativeWeight { tail: 1, head: 2 })
    ));
}

#[test]
fn neighbor_missing_as_key_is_unknown() {
    let mut adjacency = HashMap::new();
    let mut out_edges = HashMap::new();
    out_edges.insert('b', 1u32);
    adjacency.insert('a', out_edges);
    let graph = HashGraph::from_adjacency(adjacency);

    assert_eq!(
        shortest_paths(&graph, &'a').unwrap_err(),
        PathError::UnknownVertex('b')
    );
}

#[test]
fn unreachable_vertices() {
    let mut graph = get_small_graph();
    graph.add_vertex("F");
    graph.set_edge(&WeightedEdge::new("G", "A", 1));

    let data = shortest_paths(&graph, &"A").unwrap();

    for vertex in ["F", "G"] {
        assert_eq!(data.get_distance(&vertex), None);
        assert!(!data.is_reachable(&vertex));
        assert_eq!(data.get_predecessor(&vertex), None);
        assert_eq!(
            data.get_path(&vertex).unwrap_err(),
            PathError::UnreachableTarget {
                start: "A",
                target: vertex
            }
        );
    }
}

#[test]
fn isolated_start() {
    let mut graph = get_small_graph();
    graph.add_vertex("F");

    let data = shortest_paths(&graph, &"F").unwrap();
    assert_eq!(data.get_distance(&"F"), Some(0));
    assert_eq!(
        data.distances.values().filter(|distance| distance.is_some()).count(),
        1
    );
}

#[test]
fn every_vertex_has_a_table_entry() {
    let graph = get_small_graph();
    let (distances, predecessors) = shortest_paths(&graph, &"B").unwrap().into_tables();

    assert_eq!(distances.len(), graph.number_of_vertices());
    assert_eq!(predecessors.len(), graph.number_of_vertices());
}

#[test]
fn zero_weight_edges_and_self_loops() {
    let graph = HashGraph::from_edges(&[
        WeightedEdge::new(0u32, 0, 0u32),
        WeightedEdge::new(0, 1, 0),
        WeightedEdge::new(1, 2, 0),
        WeightedEdge::new(2, 0, 0),
        WeightedEdge::new(2, 3, 4),
    ]);

    let data = shortest_paths(&graph, &0u32).unwrap();
    assert_eq!(data.get_distance(&0), Some(0));
    assert_eq!(data.get_predecessor(&0), None);
    assert_eq!(data.get_distance(&2), Some(0));
    assert_eq!(data.get_path(&3).unwrap().vertices, vec![0, 1, 2, 3]);
}

#[test]
fn later_edge_overwrites_earlier() {
    let graph = HashGraph::from_edges(&[
        WeightedEdge::new('a', 'b', 1u32),
        WeightedEdge::new('a', 'b', 10),
        WeightedEdge::new('a', 'c', 2),
        WeightedEdge::new('c', 'b', 3),
    ]);

    let data = shortest_paths(&graph, &'a').unwrap();
    assert_eq!(data.get_distance(&'b'), Some(5));
    assert_eq!(data.get_path(&'b').unwrap().vertices, vec!['a', 'c', 'b']);
}

#[test]
fn float_weights() {
    let graph = HashGraph::from_edges(&[
        WeightedEdge::new("x", "y", 0.5),
        WeightedEdge::new("y", "z", 0.25),
        WeightedEdge::new("x", "z", 1.0),
    ]);

    let data = shortest_paths(&graph, &"x").unwrap();
    assert_eq!(data.get_distance(&"z"), Some(0.75));
    assert_eq!(data.get_path(&"z").unwrap().vertices, vec!["x", "y", "z"]);
}

#[test]
fn idempotent_distances() {
    let graph = get_small_graph();
    let first = shortest_paths(&graph, &"E").unwrap();
    let second = shortest_paths(&graph, &"E").unwrap();

    assert_eq!(first.distances, second.distances);
}

#[test]
fn bidirectional_graph() {
    // https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
    let mut graph = HashGraph::new();
    for (tail, head, weight) in [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ] {
        add_edge_bidirectional(&mut graph, &WeightedEdge::new(tail, head, weight));
    }

    let data = shortest_paths(&graph, &0u32).unwrap();
    assert_eq!(data.get_distance(&9), Some(6));
    assert_eq!(data.get_distance(&8), Some(9));
    assert_eq!(data.get_distance(&6), Some(11));
    assert_eq!(data.get_path(&8).unwrap().vertices, vec![0, 10, 8]);

    let back = shortest_paths(&graph, &8u32).unwrap();
    assert_eq!(back.get_distance(&0), Some(9));
}

#[test]
fn single_pair_search() {
    let graph = get_small_graph();

    let path = shortest_path(&graph, &"A", &"C").unwrap();
    assert_eq!(path.weight, 8);
    validate_path(&graph, &"A", 8, &path).unwrap();

    assert_eq!(
        shortest_path(&graph, &"A", &"Q").unwrap_err(),
        PathError::UnknownVertex("Q")
    );
}

#[test]
fn single_pair_search_unreachable() {
    let mut graph = get_small_graph();
    graph.add_vertex("F");

    assert_eq!(
        shortest_path(&graph, &"A", &"F").unwrap_err(),
        PathError::UnreachableTarget {
            start: "A",
            target: "F"
        }
    );
}

#[test]
fn vec_graph_search() {
    let mut graph = VecGraph::with_vertices(5);
    graph.set_edge(&WeightedEdge::new(0, 1, 4u64));
    graph.set_edge(&WeightedEdge::new(0, 2, 1));
    graph.set_edge(&WeightedEdge::new(2, 1, 2));
    graph.set_edge(&WeightedEdge::new(1, 3, 1));

    let data = shortest_paths(&graph, &0u32).unwrap();
    assert_eq!(data.get_distance(&3), Some(4));
    assert_eq!(data.get_distance(&4), None);
    assert_eq!(data.get_path(&3).unwrap().vertices, vec![0, 2, 1, 3]);

    assert_eq!(
        shortest_paths(&graph, &5u32).unwrap_err(),
        PathError::UnknownVertex(5)
    );
}

#[test]
fn search_through_trait_object() {
    let graph = get_small_graph();
    let graph: &dyn Graph<&str, i64> = &graph;

    let data = shortest_paths(graph, &"D").unwrap();
    assert_eq!(data.get_distance(&"C"), Some(6));
}

#[test]
fn search_leaves_graph_untouched() {
    let graph = get_small_graph();
    let edges_before = graph.number_of_edges();

    shortest_paths(&graph, &"A").unwrap();
    assert_eq!(graph.number_of_edges(), edges_before);
    assert_eq!(graph.get_weight(&"A", &"B"), Some(6));
}

#[test]
fn overflowing_sum_is_not_a_distance() {
    let graph = HashGraph::from_edges(&[
        WeightedEdge::new('a', 'b', u8::MAX),
        WeightedEdge::new('b', 'c', 2),
        WeightedEdge::new('a', 'c', 10),
    ]);

    let data = shortest_paths(&graph, &'a').unwrap();
    assert_eq!(data.get_distance(&'b'), Some(u8::MAX));
    assert_eq!(data.get_distance(&'c'), Some(10));
    assert_eq!(data.get_path(&'c').unwrap().vertices, vec!['a', 'c']);
}

#[test]
fn vertex_only_reachable_by_overflow_stays_unreachable() {
    let graph = HashGraph::from_edges(&[
        WeightedEdge::new('a', 'b', u8::MAX),
        WeightedEdge::new('b', 'c', 2u8),
    ]);

    let data = shortest_paths(&graph, &'a').unwrap();
    assert_eq!(data.get_distance(&'c'), None);
    assert_eq!(
        data.get_path(&'c').unwrap_err(),
        PathError::UnreachableTarget {
            start: 'a',
            target: 'c'
        }
    );
    assert_eq!(path_weight(&graph, &['a', 'b', 'c']), None);
}
