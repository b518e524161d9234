use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::move_generation::perft::{perft, PerftPosition, REFERENCE_POSITIONS};

/// Deepest depth benchmarked per position in each suite.
const QUICK_DEPTHS: [usize; 3] = [3, 2, 3];
const STANDARD_DEPTHS: [usize; 3] = [4, 3, 5];

fn suite_name() -> &'static str {
    match std::env::var("CHESS_RULES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> impl Iterator<Item = (&'static PerftPosition, usize)> {
    let depths = if suite_name() == "standard" {
        STANDARD_DEPTHS
    } else {
        QUICK_DEPTHS
    };
    REFERENCE_POSITIONS.iter().zip(depths)
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for (case, max_depth) in selected_cases() {
        let game = case.game_state().expect("reference layout should build");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().take(max_depth).enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game.clone();
            let warmup = perft(&mut warmup_game, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut bench_game), black_box(depth));
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
