use std::collections::BTreeMap;

/// Index of a node in a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: BTreeMap<char, NodeId>,
    is_word_end: bool,
    depth: usize,
}

/// A prefix tree over dictionary words, stored as an arena of nodes.
///
/// Node 0 is the root and stands for the empty prefix. Every other node is
/// reached from its parent by exactly one letter.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        log::debug!(
            "built trie with {} nodes for {} distinct words, longest {}",
            trie.node_count(),
            trie.word_count(),
            trie.max_depth()
        );
        trie
    }

    /// Insert `word`, creating nodes along its path as needed.
    ///
    /// Inserting a word twice has no further effect. The empty word is
    /// skipped: the root never marks a complete word.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            log::warn!("ignoring empty dictionary word");
            return;
        }

        let mut current = self.root();
        for letter in word.chars() {
            current = match self.child(current, letter) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    let depth = self.nodes[current.0].depth + 1;
                    self.nodes.push(Node {
                        depth,
                        ..Node::default()
                    });
                    self.nodes[current.0].children.insert(letter, next);
                    next
                }
            };
        }

        let end = &mut self.nodes[current.0];
        if !end.is_word_end {
            end.is_word_end = true;
            self.words += 1;
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The node reached from `node` by `letter`, if any. Never creates nodes.
    pub fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        self.nodes[node.0].children.get(&letter).copied()
    }

    pub fn is_word_end(&self, node: NodeId) -> bool {
        self.nodes[node.0].is_word_end
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Length of the longest word, i.e. the depth of the deepest node.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn contains(trie: &Trie, word: &str) -> bool {
        word.chars()
            .try_fold(trie.root(), |node, letter| trie.child(node, letter))
            .is_some_and(|node| trie.is_word_end(node))
    }

    fn letters_after(trie: &Trie, node: NodeId) -> Vec<char> {
        trie.nodes[node.0].children.keys().copied().collect()
    }

    #[test]
    fn empty_trie_is_just_a_root() {
        let trie = Trie::new();
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.word_count(), 0);
        assert!(!trie.is_word_end(trie.root()));
        assert!(letters_after(&trie, trie.root()).is_empty());
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = Trie::from_words(["A", "AN", "ANT"]);
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.word_count(), 3);
        assert_eq!(trie.max_depth(), 3);

        let a = trie.child(trie.root(), 'A').unwrap();
        let an = trie.child(a, 'N').unwrap();
        let ant = trie.child(an, 'T').unwrap();
        assert!(trie.is_word_end(a));
        assert!(trie.is_word_end(an));
        assert!(trie.is_word_end(ant));
        assert!(letters_after(&trie, ant).is_empty());
    }

    #[test]
    fn prefix_is_not_a_word_until_inserted() {
        let mut trie = Trie::from_words(["ANT"]);
        assert!(!contains(&trie, "AN"));
        assert!(contains(&trie, "ANT"));
        assert!(!contains(&trie, "ANTS"));

        trie.insert("AN");
        assert!(contains(&trie, "AN"));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = Trie::from_words(["SOS"]);
        let nodes = trie.node_count();
        trie.insert("SOS");
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn lookup_does_not_create_nodes() {
        let trie = Trie::from_words(["E"]);
        assert_eq!(trie.child(trie.root(), 'T'), None);
        assert_eq!(trie.node_count(), 2);
    }

    #[test]
    fn empty_word_is_ignored() {
        let trie = Trie::from_words(["", "E"]);
        assert!(!trie.is_word_end(trie.root()));
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn children_are_all_reported() {
        let trie = Trie::from_words(["TE", "TA", "TT"]);
        let t = trie.child(trie.root(), 'T').unwrap();
        assert_eq!(letters_after(&trie, t), vec!['A', 'E', 'T']);
    }
}
