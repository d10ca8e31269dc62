/// Character trie answering longest-prefix queries over dictionary keys.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, usize>,
    terminal: bool,
}

/// Longest-prefix index over a set of keys.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    pub fn insert(&mut self, key: &str) {
        let mut node = 0;
        for c in key.chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(c, next);
                    next
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// The longest non-empty key that `text` starts with, as a slice of `text`.
    pub fn longest_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        let mut node = 0;
        let mut best = None;
        for (i, c) in text.char_indices() {
            match self.nodes[node].children.get(&c) {
                Some(&next) => node = next,
                None => break,
            }
            if self.nodes[node].terminal {
                best = Some(i + c.len_utf8());
            }
        }
        best.map(|end| &text[..end])
    }
}

impl<'k> FromIterator<&'k str> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = &'k str>>(iter: I) -> Self {
        let mut index = Self::new();
        for key in iter {
            index.insert(key);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_longest_key() {
        let index: PrefixIndex = ["Ac", "Aca", "Acapo"].into_iter().collect();
        assert_eq!(index.longest_prefix("Acapox"), Some("Acapo"));
        assert_eq!(index.longest_prefix("Acab"), Some("Aca"));
        assert_eq!(index.longest_prefix("Acx"), Some("Ac"));
    }

    #[test]
    fn no_match() {
        let index: PrefixIndex = ["Za"].into_iter().collect();
        assert_eq!(index.longest_prefix("Z"), None);
        assert_eq!(index.longest_prefix("Qa"), None);
        assert_eq!(index.longest_prefix(""), None);
    }

    #[test]
    fn empty_index_matches_nothing() {
        let index = PrefixIndex::default();
        assert_eq!(index.longest_prefix("anything"), None);
    }

    #[test]
    fn non_ascii_keys() {
        let index: PrefixIndex = ["#Flow", "가나"].into_iter().collect();
        assert_eq!(index.longest_prefix("가나다"), Some("가나"));
        assert_eq!(index.longest_prefix("#Flowing"), Some("#Flow"));
    }
}
