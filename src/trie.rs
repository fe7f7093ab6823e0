use crate::{Node, Trie, MAX_WORD_LEN};

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: Box::new(Node::new()),
            words: 0,
            nodes: 1,
        }
    }

    /// Number of distinct words stored (insertions of a word already present
    /// do not change this).
    pub fn len(&self) -> u64 {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> u64 {
        self.nodes
    }

    /// Inserts one occurrence of `word`.
    ///
    /// A word longer than [`MAX_WORD_LEN`] or containing any character outside
    /// `a`-`z` is dropped without touching the trie. Callers cannot tell a
    /// dropped word apart from one that was never queried; this mirrors the
    /// lookup side, where such words always count zero. The empty word is
    /// valid and is counted at the root.
    pub fn insert(&mut self, word: &str) {
        let indices = match letter_indices(word) {
            Some(indices) => indices,
            None => return,
        };

        let Trie { root, words, nodes } = self;
        let mut current = root.as_mut();
        for idx in indices {
            current = current.children[idx].get_or_insert_with(|| {
                *nodes += 1;
                Box::new(Node::new())
            });
        }

        current.count += 1;
        if current.count == 1 {
            *words += 1;
        }
    }

    /// Returns how many times `word` was inserted.
    ///
    /// Zero for words never inserted, for prefixes that only exist on the way
    /// to longer words, and for words the trie cannot represent (overlength or
    /// non-lowercase characters).
    pub fn number_of_occurrences(&self, word: &str) -> u64 {
        if word.len() > MAX_WORD_LEN {
            return 0;
        }

        let mut current = self.root.as_ref();
        for byte in word.bytes() {
            if !byte.is_ascii_lowercase() {
                return 0;
            }
            current = match current.children[(byte - b'a') as usize] {
                Some(ref child) => child,
                None => return 0,
            };
        }
        current.count
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Node {
    fn new() -> Self {
        Node {
            count: 0,
            children: std::array::from_fn(|_| None),
        }
    }
}

/// Maps a word to child-slot indices, validating the whole word before the
/// trie is mutated. `None` means the word is unrepresentable.
fn letter_indices(word: &str) -> Option<Vec<usize>> {
    if word.len() > MAX_WORD_LEN {
        return None;
    }
    word.bytes()
        .map(|byte| {
            if byte.is_ascii_lowercase() {
                Some((byte - b'a') as usize)
            } else {
                None
            }
        })
        .collect()
}
