use crate::alphabet::CodeTable;
use crate::trie::{NodeId, Trie};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::HashMap;

/// Number of distinct decodings of a message. Grows exponentially with the
/// message length, so it is unbounded.
pub type Count = BigUint;

/// Errors that can occur when counting from an arbitrary state
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("Index {index} is past the end of a message of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Node {node:?} does not belong to a trie of {nodes} nodes")]
    UnknownNode { node: NodeId, nodes: usize },
}

/// Pending work for the explicit evaluation stack.
enum Frame {
    /// Schedule every successor of the state that is not yet memoized.
    Expand(NodeId, usize),
    /// All successors are memoized; sum them and memoize the state itself.
    Combine(NodeId, usize),
}

/// A single counting run over one message.
///
/// A state `(node, index)` means the letters decoded so far in the current
/// word lead to `node`, and the message is consumed up to `index`. Results
/// are memoized per trie node, keyed by message index.
pub struct Decoder<'d, T: CodeTable> {
    trie: &'d Trie,
    table: &'d T,
    message: &'d [T::S],
    memo: Vec<HashMap<usize, Count>>,
}

impl<'d, T: CodeTable> Decoder<'d, T> {
    pub fn new(trie: &'d Trie, table: &'d T, message: &'d [T::S]) -> Self {
        Decoder {
            trie,
            table,
            message,
            memo: vec![HashMap::new(); trie.node_count()],
        }
    }

    /// Count the ways the whole message decodes into dictionary words.
    pub fn count(&mut self) -> Count {
        self.evaluate(0, self.trie.root())
    }

    /// Count the ways to finish decoding from `index`, given that the word in
    /// progress has reached `node`.
    ///
    /// `node` must come from the trie this decoder was built with.
    pub fn count_from(&mut self, index: usize, node: NodeId) -> Result<Count, DecodeError> {
        self.check_state(index, node)?;
        Ok(self.evaluate(index, node))
    }

    /// The recurrence is evaluated with an explicit stack rather than by
    /// recursion, so the message length is not limited by the call stack.
    fn evaluate(&mut self, index: usize, node: NodeId) -> Count {
        if let Some(count) = self.memo[node.index()].get(&index) {
            return count.clone();
        }

        log::debug!(
            "counting decodings of {} symbols from index {index}",
            self.message.len()
        );

        let mut result = Count::zero();
        let mut stack = vec![Frame::Expand(node, index)];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Expand(n, i) => {
                    if self.memo[n.index()].contains_key(&i) {
                        continue;
                    }
                    stack.push(Frame::Combine(n, i));
                    for (next, next_index) in self.successors(n, i) {
                        if !self.memo[next.index()].contains_key(&next_index) {
                            stack.push(Frame::Expand(next, next_index));
                        }
                    }
                }
                Frame::Combine(n, i) => {
                    let mut total = self.completion(n, i);
                    for (next, next_index) in self.successors(n, i) {
                        total += &self.memo[next.index()][&next_index];
                    }
                    log::trace!("state ({n:?}, {i}) has {total} decodings");
                    if (n, i) == (node, index) {
                        result = total.clone();
                    }
                    self.memo[n.index()].insert(i, total);
                }
            }
        }

        log::debug!(
            "found {result} decodings after evaluating {} states",
            self.memoized_states()
        );
        result
    }

    /// Count decodings by plain recursion without memoization.
    ///
    /// Takes time exponential in the number of word-boundary choices and
    /// recursion depth proportional to the message length; only suitable for
    /// short messages.
    pub fn count_exhaustive(&self) -> Count {
        self.exhaustive_from(0, self.trie.root())
    }

    fn exhaustive_from(&self, index: usize, node: NodeId) -> Count {
        let mut total = self.completion(node, index);
        for (next, next_index) in self.successors(node, index) {
            total += self.exhaustive_from(next_index, next);
        }
        total
    }

    /// How many `(node, index)` states have been memoized so far.
    pub fn memoized_states(&self) -> usize {
        self.memo.iter().map(HashMap::len).sum()
    }

    /// One decoding ends here if the message is used up exactly as a word
    /// completes.
    fn completion(&self, node: NodeId, index: usize) -> Count {
        if index == self.message.len() && self.trie.is_word_end(node) {
            Count::one()
        } else {
            Count::zero()
        }
    }

    /// The states reachable in one step: continue the current word with any
    /// letter whose code starts at `index`, or close the word and start a new
    /// one from the root without consuming anything.
    fn successors(&self, node: NodeId, index: usize) -> Vec<(NodeId, usize)> {
        let mut next: Vec<(NodeId, usize)> = self
            .table
            .letters_matching_at(self.message, index)
            .filter_map(|m| {
                self.trie
                    .child(node, m.letter)
                    .map(|child| (child, index + m.consumed))
            })
            .collect();
        if self.trie.is_word_end(node) {
            next.push((self.trie.root(), index));
        }
        next
    }

    fn check_state(&self, index: usize, node: NodeId) -> Result<(), DecodeError> {
        let len = self.message.len();
        if index > len {
            return Err(DecodeError::IndexOutOfRange { index, len });
        }
        let nodes = self.memo.len();
        if node.index() >= nodes {
            return Err(DecodeError::UnknownNode { node, nodes });
        }
        Ok(())
    }
}

/// Build a trie from `words` and count the decodings of `message`.
pub fn count_decodings<T, I, W>(table: &T, words: I, message: &[T::S]) -> Count
where
    T: CodeTable,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let trie = Trie::from_words(words);
    Decoder::new(&trie, table, message).count()
}
