use budget_tracker::{
    goals::GoalTracker,
    storage::{JsonFileBackend, Store, TRANSACTIONS_KEY},
    Goal, Ledger, Transaction, TransactionType,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

const DESCRIPTIONS: [&str; 5] = [
    "Car fund deposit",
    "Monthly salary",
    "House savings",
    "Index fund",
    "Groceries",
];

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for idx in 0..txn_count {
        let kind = TransactionType::ALL[idx % TransactionType::ALL.len()];
        let description = format!("{} #{}", DESCRIPTIONS[idx % DESCRIPTIONS.len()], idx);
        let txn = Transaction::new(&description, 10.0 + (idx % 90) as f64, kind)
            .expect("valid sample transaction");
        ledger.push(txn);
    }
    ledger
}

fn build_goals(count: usize) -> GoalTracker {
    let names = ["car", "house", "fund", "trip", "a"];
    let goals = (0..count)
        .map(|idx| Goal::new(names[idx % names.len()], 10_000.0).expect("valid goal"))
        .collect();
    GoalTracker::from_goals(goals)
}

fn bench_recompute(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("totals_10k", |b| {
        b.iter(|| black_box(ledger.compute_totals()))
    });

    let mut goals = build_goals(20);
    c.bench_function("goal_progress_10k_x20", |b| {
        b.iter(|| {
            goals.recompute_progress(&ledger);
            black_box(goals.goals().len());
        })
    });
}

fn bench_store_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let backend = JsonFileBackend::new(Some(dir.path().to_path_buf())).expect("backend");
    let store = Store::new(Box::new(backend));

    c.bench_function("transactions_save_10k", |b| {
        b.iter(|| {
            store
                .save(TRANSACTIONS_KEY, ledger.transactions())
                .expect("save transactions");
        })
    });

    c.bench_function("transactions_load_10k", |b| {
        b.iter(|| {
            let loaded: Vec<Transaction> = store.load(TRANSACTIONS_KEY);
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_recompute, bench_store_io);
criterion_main!(benches);
