//! The incremental state machine shared by every hash of this crate. A Merkle-Damgård hash only differs in its
//! compression function and the layout of its padding, so the buffering of partial blocks and the finishing of the
//! hash are implemented once for any `CompressionCore`.

use std::fmt::Debug;

use crate::padding::{length_padding, LengthOrder};
use crate::HashValue;

/// The block transformation of a hash function built from a Merkle-Damgård construction. Implementors are the
/// chaining value (the registers of the hash) and update it one block at a time.
pub trait CompressionCore: HashValue + Copy + Debug {
    /// Size of one input block in bytes.
    const BLOCK_SIZE: usize;

    /// Size of the message length appended by the padding in bytes.
    const LENGTH_FIELD_SIZE: usize;

    /// Byte order of the appended message length.
    const LENGTH_ORDER: LengthOrder;

    /// Compress exactly one block of `Self::BLOCK_SIZE` bytes into the chaining value.
    fn round_function(&mut self, input_block: &[u8]);
}

/// Running state of an unfinished hash: the chaining value, the total message length and the bytes of an incomplete
/// block which are kept until enough data arrives.
#[derive(Debug, Clone)]
pub struct MerkleDamgardState<H: CompressionCore> {
    hash: H,
    message_length: u128,
    remaining_data: Vec<u8>,
}

impl<H: CompressionCore> MerkleDamgardState<H> {
    /// Start a new hash from the initial chaining value `initial`.
    pub fn new(initial: H) -> Self {
        MerkleDamgardState {
            hash: initial,
            message_length: 0,
            remaining_data: Vec::with_capacity(H::BLOCK_SIZE),
        }
    }

    /// Update the hash with more data. All complete blocks are compressed immediately, the rest is buffered.
    pub fn update(&mut self, input: &[u8]) {
        self.message_length = self.message_length.wrapping_add(input.len() as u128);

        let mut input = input;

        // complete a previously buffered block first, if the new data suffices
        if !self.remaining_data.is_empty() {
            let missing = H::BLOCK_SIZE - self.remaining_data.len();
            if input.len() < missing {
                self.remaining_data.extend_from_slice(input);
                return;
            }

            let (head, tail) = input.split_at(missing);
            self.remaining_data.extend_from_slice(head);
            self.hash.round_function(&self.remaining_data);
            self.remaining_data.clear();
            input = tail;
        }

        let mut blocks = input.chunks_exact(H::BLOCK_SIZE);
        for block in &mut blocks {
            self.hash.round_function(block);
        }

        self.remaining_data.extend_from_slice(blocks.remainder());
    }

    /// Pad the buffered data and compress the final block(s) on a copy of the chaining value. The state itself is
    /// left untouched, so it can be updated further and finished again.
    pub fn finish(&self) -> H {
        let mut hash = self.hash;

        let mut last_blocks = Vec::with_capacity(2 * H::BLOCK_SIZE);
        last_blocks.extend_from_slice(&self.remaining_data);
        last_blocks.extend_from_slice(&length_padding(
            self.message_length,
            H::BLOCK_SIZE,
            H::LENGTH_FIELD_SIZE,
            H::LENGTH_ORDER,
        ));
        debug_assert_eq!(last_blocks.len() % H::BLOCK_SIZE, 0);

        for block in last_blocks.chunks_exact(H::BLOCK_SIZE) {
            hash.round_function(block);
        }

        hash
    }

    /// Total number of message bytes digested so far.
    pub fn message_length(&self) -> u128 {
        self.message_length
    }

    /// Number of bytes waiting for a block to complete. Always less than the block size.
    pub fn buffered_len(&self) -> usize {
        self.remaining_data.len()
    }
}
