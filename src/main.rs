use std::env;

use tracing::warn;
use wordtrie_rs::{read_dictionary, Trie};

static PROBES: [&str; 5] = ["notaword", "ucf", "no", "note", "corg"];

fn main() {
    tracing_subscriber::fmt::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("dictionary.txt"));
    let words = match read_dictionary(&path) {
        Ok(words) => words,
        Err(err) => {
            warn!(path = %path, error = %err, "dictionary could not be loaded, starting empty");
            Vec::new()
        }
    };

    for word in &words {
        println!("{}", word);
    }

    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word);
    }

    for probe in PROBES {
        println!("\t{} : {}", probe, trie.number_of_occurrences(probe));
    }
}
