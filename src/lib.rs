pub mod alphabet;
pub mod decoder;
pub mod input;
pub mod morse;
pub mod trie;

pub use decoder::{Count, DecodeError, Decoder, count_decodings};
pub use trie::{NodeId, Trie};
