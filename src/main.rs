//! Radix sort comparison tool
//!
//! Times the radix sort entry points against the standard library sorts on
//! random data, verifies that both agree, and optionally sweeps a range of
//! array sizes.

use std::time::{Duration, Instant};

use clap::Parser;
use rand::Rng;
use radix_sorting::is_sorted;

/// Default array size for benchmarking
const DEFAULT_ARRAY_SIZE: usize = 1 << 20; // 1 million elements

/// Compare radix sort with std sorting on random data.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of elements to sort
    #[arg(default_value_t = DEFAULT_ARRAY_SIZE)]
    size: usize,

    /// Also sweep sizes from 1K to 16M
    #[arg(long, default_value_t = false)]
    benchmark: bool,
}

#[derive(Clone)]
struct Record {
    id: u32,
    score: f64,
}

/// Timings of one data type at one size.
struct Comparison {
    label: &'static str,
    std_time: Duration,
    radix_time: Duration,
    matches: bool,
}

impl Comparison {
    fn speedup(&self) -> f64 {
        self.std_time.as_secs_f64() / self.radix_time.as_secs_f64()
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn compare_u32(size: usize) -> Comparison {
    let mut rng = rand::thread_rng();
    let data: Vec<u32> = (0..size).map(|_| rng.gen()).collect();

    let mut std_data = data.clone();
    let start = Instant::now();
    std_data.sort_unstable();
    let std_time = start.elapsed();

    let mut radix_data = data;
    let mut scratch = vec![0u32; size];
    let start = Instant::now();
    radix_sorting::strict::sort_u32(&mut radix_data, &mut scratch);
    let radix_time = start.elapsed();

    Comparison {
        label: "u32",
        std_time,
        radix_time,
        matches: radix_data == std_data,
    }
}

fn compare_i64(size: usize) -> Comparison {
    let mut rng = rand::thread_rng();
    let data: Vec<i64> = (0..size).map(|_| rng.gen()).collect();

    let mut std_data = data.clone();
    let start = Instant::now();
    std_data.sort_unstable();
    let std_time = start.elapsed();

    let mut radix_data = data;
    let mut scratch = vec![0u64; size];
    let start = Instant::now();
    radix_sorting::strict::sort_i64(&mut radix_data, &mut scratch);
    let radix_time = start.elapsed();

    Comparison {
        label: "i64",
        std_time,
        radix_time,
        matches: radix_data == std_data,
    }
}

fn compare_f64(size: usize) -> Comparison {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..size).map(|_| rng.gen_range(-1e6..1e6)).collect();

    let mut std_data = data.clone();
    let start = Instant::now();
    std_data.sort_unstable_by(f64::total_cmp);
    let std_time = start.elapsed();

    let mut radix_data = data;
    let mut scratch = vec![0u64; size];
    let start = Instant::now();
    radix_sorting::strict::sort_f64(&mut radix_data, &mut scratch);
    let radix_time = start.elapsed();

    Comparison {
        label: "f64",
        std_time,
        radix_time,
        matches: is_sorted(&radix_data) && radix_data == std_data,
    }
}

fn compare_records(size: usize) -> Comparison {
    let mut rng = rand::thread_rng();
    let data: Vec<Record> = (0..size)
        .map(|i| Record {
            id: i as u32,
            score: rng.gen_range(0.0..100.0),
        })
        .collect();

    // Both sorts are stable, so the id sequences must agree exactly.
    let mut std_data = data.clone();
    let start = Instant::now();
    std_data.sort_by(|a, b| a.score.total_cmp(&b.score));
    let std_time = start.elapsed();

    let mut radix_data = data.clone();
    let mut scratch = data;
    let start = Instant::now();
    radix_sorting::strict::sort_by_key(&mut radix_data, &mut scratch, |r| r.score);
    let radix_time = start.elapsed();

    let matches = radix_data
        .iter()
        .zip(std_data.iter())
        .all(|(a, b)| a.id == b.id);

    Comparison {
        label: "record",
        std_time,
        radix_time,
        matches,
    }
}

fn run_all(size: usize) -> Vec<Comparison> {
    vec![
        compare_u32(size),
        compare_i64(size),
        compare_f64(size),
        compare_records(size),
    ]
}

fn main() {
    let args = Args::parse();

    println!("Radix Sort Comparison");
    println!("=====================\n");
    println!("Array size: {} elements", args.size);

    for cmp in run_all(args.size) {
        println!("\n--- {} ---", cmp.label);
        println!("std sort time:   {:.3} ms", millis(cmp.std_time));
        println!("radix sort time: {:.3} ms", millis(cmp.radix_time));
        if cmp.matches {
            println!("Results match std sort: OK");
        } else {
            println!("ERROR: radix sort result differs from std sort!");
        }
        let speedup = cmp.speedup();
        if speedup > 1.0 {
            println!("Radix vs std: radix is {:.2}x faster", speedup);
        } else {
            println!("Radix vs std: std is {:.2}x faster", 1.0 / speedup);
        }
    }

    if args.benchmark {
        run_benchmark();
    }
}

/// Run comparisons across multiple array sizes
fn run_benchmark() {
    println!("\n\n====================================");
    println!("Running comprehensive benchmark...");
    println!("====================================\n");

    let sizes: Vec<usize> = vec![
        1 << 10, // 1K
        1 << 12, // 4K
        1 << 14, // 16K
        1 << 16, // 64K
        1 << 18, // 256K
        1 << 20, // 1M
        1 << 22, // 4M
        1 << 24, // 16M
    ];

    println!(
        "{:>12} | {:>8} | {:>12} | {:>12} | {:>10} | {:>6}",
        "Size", "Type", "std (ms)", "radix (ms)", "Speedup", "Match"
    );
    println!(
        "{:-<12}-+-{:-<8}-+-{:-<12}-+-{:-<12}-+-{:-<10}-+-{:-<6}",
        "", "", "", "", "", ""
    );

    for &size in &sizes {
        for cmp in run_all(size) {
            println!(
                "{:>12} | {:>8} | {:>12.3} | {:>12.3} | {:>9.2}x | {:>6}",
                size,
                cmp.label,
                millis(cmp.std_time),
                millis(cmp.radix_time),
                cmp.speedup(),
                if cmp.matches { "OK" } else { "FAIL" }
            );
        }
    }

    println!("\nNote: Speedup > 1.0x means radix sort is faster than std");
}
