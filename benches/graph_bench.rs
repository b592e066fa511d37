use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mutgraph::prelude::*;

fn build_grid(side: u64) -> MutableDirectedGraph<()> {
    let mut g = MutableDirectedGraph::with_capacity((side * side) as usize);
    let id = |r: u64, c: u64| NodeId::new(r * side + c);
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                g.add_edge(Edge::unit(id(r, c), id(r, c + 1)), 1.0);
                g.add_edge(Edge::unit(id(r, c + 1), id(r, c)), 1.0);
            }
            if r + 1 < side {
                g.add_edge(Edge::unit(id(r, c), id(r + 1, c)), 1.0);
            }
        }
    }
    g
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutable_directed_graph");

    for &side in &[16u64, 32u64] {
        group.bench_with_input(BenchmarkId::new("build_grid", side), &side, |b, &s| {
            b.iter(|| black_box(build_grid(s)))
        });

        let g = build_grid(side);
        group.bench_with_input(BenchmarkId::new("edge_list", side), &side, |b, _| {
            b.iter(|| black_box(g.edge_list()))
        });
        group.bench_with_input(BenchmarkId::new("neighbors_all", side), &side, |b, _| {
            b.iter(|| {
                for v in g.node_list() {
                    black_box(g.neighbors(v));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("remove_node_cascade", side), &side, |b, _| {
            b.iter(|| {
                let mut h = g.clone();
                h.remove_node(NodeId::new(side + 1));
                black_box(h)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graph);
criterion_main!(benches);
