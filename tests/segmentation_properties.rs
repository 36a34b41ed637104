//! Structural properties of the segmentation graph and the irrelevance
//! selector, exercised over real parsed sources.

use exemplar::segment::{select, selector};
use exemplar::{GraphBuilder, Span, SyntaxUnit};
use indoc::indoc;
use std::path::PathBuf;

fn parse(source: &str) -> SyntaxUnit {
    SyntaxUnit::parse(&PathBuf::from("subject.rs"), source).unwrap()
}

const LAYERED_SOURCE: &str = indoc! {r#"
    fn orchestrate() {
        prepare();
        if ready() {
            for _ in 0..3 {
                step();
            }
        }
    }

    fn prepare() {
        let _buffer = allocate();
    }

    fn ready() -> bool {
        true
    }

    fn step() {
        if deep() {
            let _x = 1;
        }
    }

    fn deep() -> bool {
        false
    }

    fn allocate() -> u32 {
        0
    }
"#};

#[test]
fn graph_stays_acyclic_across_outsider_propagation() {
    let unit = parse(LAYERED_SOURCE);
    let scope = unit.function_named("orchestrate").unwrap();
    let graph = GraphBuilder::build_scope(&unit, scope).unwrap();

    assert!(graph.node_count() > 3);
    for (a, _) in graph.segments() {
        for (b, _) in graph.segments() {
            if a != b {
                assert!(
                    !(graph.is_descendant(a, b) && graph.is_descendant(b, a)),
                    "segments {a} and {b} are mutual ancestors"
                );
            }
        }
    }
}

#[test]
fn mutual_recursion_never_closes_a_cycle() {
    let unit = parse(indoc! {r#"
        fn even(n: u32) -> bool {
            if n == 0 {
                return true;
            }
            odd(n - 1)
        }

        fn odd(n: u32) -> bool {
            if n == 0 {
                return false;
            }
            even(n - 1)
        }
    "#});
    let scope = unit.function_named("even").unwrap();
    // a cycle would surface as CycleDetected; the guard must skip it instead
    let graph = GraphBuilder::build_scope(&unit, scope).unwrap();
    for (id, _) in graph.segments() {
        assert!(!graph.is_descendant(id, id));
    }
}

#[test]
fn weight_redistributes_downward_never_grows() {
    let unit = parse(LAYERED_SOURCE);
    let graph = GraphBuilder::build_unit(&unit).unwrap();

    let original_total: usize = graph.segments().map(|(_, s)| s.span.line_count()).sum();
    let final_total: usize = graph.segments().map(|(_, s)| s.weight).sum();
    assert!(final_total <= original_total);

    for (_, segment) in graph.segments() {
        assert!(segment.weight <= segment.span.line_count());
        assert!(segment.benefit >= 0.0);
    }
}

#[test]
fn selection_partitions_all_non_root_segments() {
    let unit = parse(LAYERED_SOURCE);
    let scope = unit.function_named("orchestrate").unwrap();
    let graph = GraphBuilder::build_scope(&unit, scope).unwrap();

    let selection = select(&graph, unit.locate(scope));
    let order = graph.bfs_order();

    let mut combined: Vec<usize> = selection
        .kept
        .iter()
        .chain(selection.discarded.iter())
        .copied()
        .collect();
    combined.sort_unstable();
    let mut expected = order.clone();
    expected.sort_unstable();
    assert_eq!(combined, expected);

    for kept in &selection.kept {
        assert!(!selection.discarded.contains(kept));
    }
}

#[test]
fn single_block_scope_yields_empty_blacklist_for_any_capacity() {
    let unit = parse(indoc! {r#"
        fn flat() {
            let a = 1;
            let b = 2;
            let c = a + b;
            let d = c * 2;
            let _e = d - 1;
        }
    "#});
    let scope = unit.function_named("flat").unwrap();
    let graph = GraphBuilder::build_scope(&unit, scope).unwrap();
    assert_eq!(graph.node_count(), 1);

    for capacity_span in [Span::new(1, 2), Span::new(1, 7), Span::new(1, 500)] {
        assert!(
            selector::irrelevant_spans(&graph, capacity_span).is_empty(),
            "single-segment graph must never blacklist"
        );
    }
}

#[test]
fn tiny_capacity_yields_empty_blacklist_on_any_graph() {
    let unit = parse(LAYERED_SOURCE);
    let graph = GraphBuilder::build_unit(&unit).unwrap();
    assert!(graph.node_count() > 1);

    for span in [Span::new(1, 1), Span::new(10, 12), Span::new(5, 7)] {
        assert!(selector::irrelevant_spans(&graph, span).is_empty());
    }
}

#[test]
fn capacity_growth_keeps_previously_kept_segments() {
    let unit = parse(LAYERED_SOURCE);
    let scope = unit.function_named("orchestrate").unwrap();
    let graph = GraphBuilder::build_scope(&unit, scope).unwrap();

    let mut previous: Vec<usize> = Vec::new();
    for end in [8usize, 16, 32, 64] {
        let kept = select(&graph, Span::new(1, end)).kept;
        for id in &previous {
            assert!(kept.contains(id), "capacity {end} dropped segment {id}");
        }
        previous = kept;
    }
}
