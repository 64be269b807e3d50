use criterion::{black_box, criterion_group, criterion_main, Criterion};

use inference::{solve, PedigreeIndex, ProbabilityTables};
use pedigree::Pedigree;

/// Three-generation, five-member pedigree: 6^5 = 7776 candidate assignments.
fn five_member_pedigree() -> Pedigree {
    let mut pedigree = Pedigree::new();
    pedigree.add_individual("grandmother", None, Some(true)).expect("Individual should be includable");
    pedigree.add_individual("grandfather", None, None).expect("Individual should be includable");
    pedigree.add_individual("mother", Some(["grandmother", "grandfather"]), None).expect("Individual should be includable");
    pedigree.add_individual("father", None, Some(false)).expect("Individual should be includable");
    pedigree.add_individual("child", Some(["mother", "father"]), None).expect("Individual should be includable");
    pedigree
}

fn bench_solve(c: &mut Criterion) {
    let pedigree = five_member_pedigree();
    let index = PedigreeIndex::new(&pedigree).expect("Index should build");
    let tables = ProbabilityTables::default();

    c.bench_function("solve_five_individuals", |b| {
        b.iter(|| solve(black_box(&index), black_box(&tables)))
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
