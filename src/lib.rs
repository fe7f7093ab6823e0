/// Longest word the trie will accept; anything longer is silently ignored.
pub const MAX_WORD_LEN: usize = 200;

const ALPHABET: usize = 26;

/// Occurrence-counting trie over the lowercase ASCII alphabet.
///
/// Each edge is one letter `a`-`z`; a node's count records how many inserted
/// words terminate exactly at that node. Dropping the trie frees every node.
#[derive(Debug)]
pub struct Trie {
    root: Box<Node>,
    words: u64,
    nodes: u64,
}

#[derive(Debug)]
struct Node {
    count: u64,
    children: [Option<Box<Node>>; ALPHABET],
}

mod trie;

pub mod dictionary;

pub use dictionary::{read_dictionary, DictionaryError};
