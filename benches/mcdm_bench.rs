//! Criterion benchmarks for the decision methods.
//!
//! Uses synthetic decision matrices to measure pure algorithm overhead;
//! the pairwise methods (ELECTRE, PROMETHEE) are quadratic in the
//! alternative count, TOPSIS and AHP are linear.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mcdm_engine::matrix::{Alternative, Criterion as Crit, DecisionMatrix, Direction};
use mcdm_engine::method::{evaluate, MethodName};

/// Deterministic synthetic matrix: values spread over [0, 97), first
/// criterion minimized.
fn synthetic_matrix(n_alternatives: usize, n_criteria: usize) -> DecisionMatrix {
    let alternatives = (0..n_alternatives)
        .map(|i| Alternative::new(format!("a{i}"), format!("Alternative {i}")))
        .collect();
    let criteria = (0..n_criteria)
        .map(|j| {
            let direction = if j == 0 {
                Direction::Minimize
            } else {
                Direction::Maximize
            };
            Crit::new(format!("c{j}"), format!("Criterion {j}"), direction, 1.0 + j as f64)
        })
        .collect();
    let values = (0..n_alternatives)
        .map(|i| {
            (0..n_criteria)
                .map(|j| ((i * 31 + j * 17 + i * j * 7) % 97) as f64)
                .collect()
        })
        .collect();
    DecisionMatrix::new(alternatives, criteria, values).expect("synthetic matrix is well-formed")
}

fn bench_method(c: &mut Criterion, method: MethodName, group_name: &str) {
    let mut group = c.benchmark_group(group_name);
    group.sample_size(20);

    for &n in &[10usize, 50, 100] {
        let matrix = synthetic_matrix(n, 8);
        let params = method.default_params();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, params), |b, (m, p)| {
            b.iter(|| {
                let result = evaluate(black_box(m), black_box(p));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_topsis(c: &mut Criterion) {
    bench_method(c, MethodName::Topsis, "topsis");
}

fn bench_ahp(c: &mut Criterion) {
    bench_method(c, MethodName::Ahp, "ahp");
}

fn bench_electre_i(c: &mut Criterion) {
    bench_method(c, MethodName::ElectreI, "electre_i");
}

fn bench_electre_iii(c: &mut Criterion) {
    bench_method(c, MethodName::ElectreIii, "electre_iii");
}

fn bench_promethee(c: &mut Criterion) {
    bench_method(c, MethodName::PrometheeIi, "promethee_ii");
}

criterion_group!(
    benches,
    bench_topsis,
    bench_ahp,
    bench_electre_i,
    bench_electre_iii,
    bench_promethee
);
criterion_main!(benches);
