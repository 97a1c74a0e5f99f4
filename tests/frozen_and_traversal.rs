use lazy_graph::algs::traversal::reachable_set;
use lazy_graph::prelude::*;

fn vid(raw: u32) -> VertexId {
    VertexId::new(raw)
}

fn diamond() -> LazyGraph<&'static str, u32> {
    // 0 -> {1, 2} -> 3, 5 isolated
    LazyGraph::from_edges(
        "",
        0,
        [
            (vid(0), vid(2), 2),
            (vid(0), vid(1), 1),
            (vid(1), vid(3), 13),
            (vid(2), vid(3), 23),
        ],
    )
}

#[test]
fn freeze_matches_reconciled_state() {
    let mut g = diamond();
    g.add_vertex(vid(5), "iso");
    g.reconcile();
    let f = g.freeze();

    assert_eq!(f.span(), g.span());
    assert_eq!(f.order(), g.order());
    assert_eq!(f.size(), g.size());
    assert_eq!(f.vertices().collect::<Vec<_>>(), g.vertex_list());
    for v in g.vertices() {
        assert_eq!(f.degree(v), g.degree(v));
        assert_eq!(f.in_degree(v), g.in_degree(v));
        assert!(f.out_edges(v).eq(g.out_edges(v)));
        assert!(f.in_edges(v).eq(g.in_edges(v)));
    }
    assert_eq!(f.get_edge(vid(2), vid(3)), Some(&23));
    assert_eq!(f.get_edge(vid(3), vid(2)), None);
    assert!(!f.has_vertex(vid(4)));
}

#[test]
fn snapshot_is_detached_from_later_mutation() {
    let mut g = diamond();
    let f = g.freeze();
    g.remove_vertex(vid(1));
    g.add_edge(vid(3), vid(0), 30);
    g.reconcile();

    assert!(f.has_edge(vid(0), vid(1)));
    assert!(!f.has_edge(vid(3), vid(0)));
    assert_eq!(f.size(), 4);
    assert_eq!(g.size(), 3);
}

#[test]
fn freeze_ignores_pending_mutations() {
    let mut g = diamond();
    g.add_edge(vid(3), vid(4), 34);
    let f = g.freeze();
    assert!(!f.has_edge(vid(3), vid(4)));
    assert_eq!(f.size(), 4);
}

#[test]
fn traversals_agree_on_live_and_frozen_graphs() {
    let g = diamond();
    let f = g.freeze();
    for dir in [Dir::Forward, Dir::Backward, Dir::Both] {
        for seed in 0..6 {
            assert_eq!(
                reachable_set(&g, [vid(seed)], dir),
                reachable_set(&f, [vid(seed)], dir),
                "seed {seed} {dir:?}"
            );
        }
    }
}

#[test]
fn traversal_order_is_deterministic() {
    let g = diamond();
    assert_eq!(
        reachable(&g, [vid(0)]).collect::<Vec<_>>(),
        vec![vid(0), vid(1), vid(3), vid(2)]
    );
    assert_eq!(
        co_reachable(&g, [vid(3)]).collect::<Vec<_>>(),
        vec![vid(3), vid(1), vid(0), vid(2)]
    );
    assert_eq!(
        connected_component(&g, [vid(2), vid(2)]).count(),
        4
    );
}

#[test]
fn trait_view_defaults() {
    fn total_degree<G: DirectedGraph>(g: &G, v: VertexId) -> usize {
        g.degree(v) + g.in_degree(v)
    }
    let g = diamond();
    let f = g.freeze();
    assert_eq!(total_degree(&g, vid(3)), 2);
    assert_eq!(total_degree(&f, vid(0)), 2);
    assert_eq!(
        DirectedGraph::in_neighbors(&f, vid(3)).collect::<Vec<_>>(),
        vec![vid(1), vid(2)]
    );
}

#[test]
fn options_load_from_json() {
    let opts: GraphOptions =
        serde_json::from_str(r#"{"initial_span": 8, "degree_hint": 2}"#).unwrap();
    assert_eq!(opts.shrink_policy, ShrinkPolicy::Discard);
    let mut g = LazyGraph::<(), ()>::try_with_options((), (), opts).unwrap();
    assert_eq!(g.span(), 8);
    g.add_vertex(vid(7), ());
    assert_eq!(
        g.try_resize(4),
        Err(GraphError::ShrinkBelowLiveVertex {
            span: 4,
            vertex: vid(7)
        })
    );
}
