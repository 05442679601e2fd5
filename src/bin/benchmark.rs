//! Performance benchmark comparing serial and parallel generation steps

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::domain::{GridState, life};

fn seeded_grid(size: usize) -> GridState {
    let mut grid = GridState::new(size, size);
    grid.seed_random(&mut StdRng::seed_from_u64(size as u64), 0.5);
    grid
}

fn benchmark(size: usize, iterations: u32, step: fn(&mut GridState)) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Toroidal Life Benchmark ===\n");

    let sizes = [100, 256, 500, 1000, 2000, 4000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>16}", "Size", "Serial", "Parallel", "Speedup", "Cells/sec");
    println!("{:-<64}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, life::advance);
        let parallel_ms = benchmark(size, iterations, life::advance_parallel);
        let fastest = serial_ms.min(parallel_ms);
        let cells_per_sec = (size * size) as f64 / (fastest / 1000.0);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x {:>14.1}M",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            cells_per_sec / 1_000_000.0
        );
    }

    // 1920x1080 at the default 5px cells
    let mut grid = GridState::new(384, 216);
    grid.seed_random(&mut StdRng::seed_from_u64(0), 0.5);
    let start = Instant::now();
    for _ in 0..iterations {
        life::advance(&mut grid);
    }
    let per_gen_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    println!(
        "\n1080p board (384x216): {:.2} ms/gen of a {:.2} ms frame budget at 60 ticks/s",
        per_gen_ms,
        1000.0 / 60.0
    );
}
