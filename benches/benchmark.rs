use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix_trie::Trie as RadixTrie;
use std::collections::HashMap;
use wordtrie_rs::Trie;

const WORD_COUNT: usize = 10_000;

// Deterministic lowercase words so runs are comparable without a word file.
fn word_list(n: usize) -> Vec<String> {
    let mut words = Vec::with_capacity(n);
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let len = 3 + (state >> 59) as usize % 10;
        let mut bits = state;
        let mut word = String::with_capacity(len);
        for _ in 0..len {
            word.push((b'a' + (bits % 26) as u8) as char);
            bits /= 26;
        }
        words.push(word);
    }
    words
}

fn insert_word_trie(words: &[String]) {
    let mut map = Trie::new();
    for word in words {
        map.insert(word);
    }
}

fn insert_radix_trie(words: &[String]) {
    let mut map = RadixTrie::new();
    for word in words {
        map.insert(word.clone(), 1u64);
    }
}

fn insert_hash_map(words: &[String]) {
    let mut map: HashMap<String, u64> = HashMap::new();
    for word in words {
        *map.entry(word.clone()).or_insert(0) += 1;
    }
}

fn insert_benches(c: &mut Criterion) {
    let words = word_list(WORD_COUNT);
    c.bench_function("insert_word_trie", |b| {
        b.iter(|| insert_word_trie(black_box(&words)))
    });
    c.bench_function("insert_radix_trie", |b| {
        b.iter(|| insert_radix_trie(black_box(&words)))
    });
    c.bench_function("insert_hash_map", |b| {
        b.iter(|| insert_hash_map(black_box(&words)))
    });
}

fn search_benches(c: &mut Criterion) {
    let words = word_list(WORD_COUNT);
    let mut map = Trie::new();
    for word in &words {
        map.insert(word);
    }
    c.bench_function("search_word_trie", |b| {
        b.iter(|| {
            for word in &words {
                black_box(map.number_of_occurrences(word));
            }
        })
    });
}

criterion_group!(benches, insert_benches, search_benches);
criterion_main!(benches);
