//! IAI-Callgrind benchmark for TreeMap mutation and traversal.
//!
//! Measures instruction counts for building, draining and walking a map.
//! Data sizes: 1000 and 10000 keys.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use rbtree_map::TreeMap;
use std::hint::black_box;

fn setup_keys_1000() -> Vec<i32> {
    (0..1000).map(|index| (index * 7919) % 1000).collect()
}

fn setup_keys_10000() -> Vec<i32> {
    (0..10000).map(|index| (index * 7919) % 10000).collect()
}

fn setup_map_1000() -> TreeMap<i32, i32> {
    (0..1000).map(|index| (index, index)).collect()
}

fn setup_map_10000() -> TreeMap<i32, i32> {
    (0..10000).map(|index| (index, index)).collect()
}

// insert benchmarks
#[library_benchmark]
#[bench::with_setup(setup_keys_1000())]
fn insert_1000(keys: Vec<i32>) -> TreeMap<i32, i32> {
    let mut map = TreeMap::new();
    for key in black_box(keys) {
        map.insert(black_box(key), key);
    }
    black_box(map)
}

#[library_benchmark]
#[bench::with_setup(setup_keys_10000())]
fn insert_10000(keys: Vec<i32>) -> TreeMap<i32, i32> {
    let mut map = TreeMap::new();
    for key in black_box(keys) {
        map.insert(black_box(key), key);
    }
    black_box(map)
}

// remove benchmarks
#[library_benchmark]
#[bench::with_setup(setup_map_1000())]
fn remove_all_1000(mut map: TreeMap<i32, i32>) -> TreeMap<i32, i32> {
    for key in 0..1000 {
        map.remove(black_box(&((key * 7919) % 1000)));
    }
    black_box(map)
}

#[library_benchmark]
#[bench::with_setup(setup_map_10000())]
fn remove_all_10000(mut map: TreeMap<i32, i32>) -> TreeMap<i32, i32> {
    for key in 0..10000 {
        map.remove(black_box(&((key * 7919) % 10000)));
    }
    black_box(map)
}

// traversal benchmarks
#[library_benchmark]
#[bench::with_setup(setup_map_1000())]
fn cursor_walk_1000(map: TreeMap<i32, i32>) -> i32 {
    let mut cursor = map.begin();
    let mut sum = 0;
    while let Some(value) = cursor.value() {
        sum += value;
        cursor.move_next();
    }
    black_box(sum)
}

#[library_benchmark]
#[bench::with_setup(setup_map_10000())]
fn cursor_walk_10000(map: TreeMap<i32, i32>) -> i32 {
    let mut cursor = map.begin();
    let mut sum = 0;
    while let Some(value) = cursor.value() {
        sum += value;
        cursor.move_next();
    }
    black_box(sum)
}

library_benchmark_group!(
    name = treemap_group;
    benchmarks =
        insert_1000, insert_10000,
        remove_all_1000, remove_all_10000,
        cursor_walk_1000, cursor_walk_10000
);

main!(library_benchmark_groups = treemap_group);
