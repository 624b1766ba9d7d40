use armine::{mine, resolve_threshold, Strategy, TransactionDatabase};
use ndarray::Array2;
use rand::Rng;
use std::time::Instant;

fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> TransactionDatabase<usize> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    let matrix = Array2::from_shape_vec((num_transactions, num_items), data).unwrap();
    TransactionDatabase::from_dense(matrix.view())
}

fn run(db: &TransactionDatabase<usize>, min_support: f64, strategy: Strategy) {
    let min_count = resolve_threshold(min_support, db.len()).unwrap();
    let start = Instant::now();
    let output = mine(db, min_count, strategy).unwrap();

    println!(
        "  {:<10} {:>10.2?}  patterns={:<8} max_size={}",
        strategy.name(),
        start.elapsed(),
        output.itemsets.len(),
        output.itemsets.max_size()
    );
    if output.itemsets.len() > 1_000_000 {
        println!("  ⚠ Pattern explosion detected!");
    }
}

fn stress_test_scaling() {
    println!("\n=== Scaling Test ===");

    let configs = vec![
        ("10K x 50", 10_000, 50, 15),
        ("50K x 80", 50_000, 80, 20),
        ("100K x 100", 100_000, 100, 25),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);
        let start_gen = Instant::now();
        let db = generate_transactions(num_tx, num_items, avg_size, 0.7);
        println!("  Generated in {:?}", start_gen.elapsed());

        for strategy in Strategy::ALL {
            run(&db, 0.05, strategy);
        }
    }
}

fn stress_test_low_support() {
    println!("\n=== Low Support Test ===");

    let db = generate_transactions(20_000, 100, 20, 0.6);

    for &min_support in &[0.05, 0.02, 0.01] {
        println!("\nTesting min_support = {}", min_support);
        for strategy in [Strategy::PrefixTree, Strategy::Vertical, Strategy::Projection] {
            run(&db, min_support, strategy);
        }
    }
}

fn stress_test_dense_data() {
    println!("\n=== Dense Data Test (worst case) ===");

    let configs = vec![
        ("Dense 80%", 10_000, 50, 40, 0.8),
        ("Dense 90%", 10_000, 50, 45, 0.9),
    ];

    for (name, num_tx, num_items, avg_size, density) in configs {
        println!("\nTesting: {}", name);
        let db = generate_transactions(num_tx, num_items, avg_size, density);
        run(&db, 0.1, Strategy::PrefixTree);
        run(&db, 0.1, Strategy::Projection);
    }
}

fn main() {
    println!("=== Itemset Mining Stress Testing Suite ===");

    stress_test_scaling();
    stress_test_low_support();
    stress_test_dense_data();

    println!("\n=== Stress Testing Complete ===");
}
