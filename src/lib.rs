mod heap;

pub use heap::{MaxHeap, MinHeap, Node};

use ordered_float::OrderedFloat;
use rand::prelude::*;

fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[allow(dead_code)]
fn validate_heap() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 64 * 1024;

    let mut keys = Vec::with_capacity(N);
    for _ in 0..N {
        keys.push(OrderedFloat(rng.gen_range(-1000.0..1000.0f64)));
    }

    println!("[Validate MaxHeap]");
    let mut heap = MaxHeap::with_capacity(N);
    for (len, &key) in keys.iter().enumerate() {
        assert_eq!(heap.size(), len);
        heap.insert(key, ());
    }

    keys.sort_by(|a, b| b.cmp(a));
    for (i, &key) in keys.iter().enumerate() {
        assert_eq!(heap.size(), N - i);
        assert_eq!(heap.extract_max().map(|node| node.key), Some(key));
    }
    assert!(heap.extract_max().is_none());

    println!("MaxHeap VALIDATED");
    println!();
}

#[allow(dead_code)]
fn bench_heap() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 256 * 1024; // 256 KiB

    let mut keys: Vec<u64> = (0..N as u64).collect();
    keys.shuffle(&mut rng);

    let mut std_heap = std::collections::BinaryHeap::new();
    bench("std::collections::BinaryHeap::push", 2, || {
        for &key in keys.iter() {
            std_heap.push(key);
        }
    });
    bench("std::collections::BinaryHeap::pop", 3, || {
        for expected in (0..N as u64).rev() {
            assert_eq!(std_heap.pop(), Some(expected));
        }
    });
    println!();

    let mut heap = MaxHeap::new();
    bench("MaxHeap::insert", 5, || {
        for (len, &key) in keys.iter().enumerate() {
            assert_eq!(heap.size(), len);
            heap.insert(key, ());
        }
    });
    bench("MaxHeap::extract_max", 4, || {
        for expected in (0..N as u64).rev() {
            assert_eq!(heap.extract_max().map(|node| node.key), Some(expected));
        }
    });
}

#[test]
pub fn main() {
    validate_heap();
    bench_heap();
    println!();
}
