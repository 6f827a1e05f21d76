//! Message padding of the Merkle-Damgård construction as used by MD5 (RFC 1321, section 3.1 and 3.2) and the
//! SHA-2 family (FIPS 180-4, section 5.1).

/// Byte order in which the message length is appended to the padding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LengthOrder {
    /// Used by the SHA family.
    BigEndian,
    /// Used by MD5.
    LittleEndian,
}

/// Calculate the padding suffix for a message of `message_length` bytes.
///
/// # Parameters
/// - `message_length` total number of message bytes digested so far
/// - `block_size` the block length of the hash in bytes
/// - `length_field_size` how many bytes the encoded message length occupies (8 or 16)
/// - `order` byte order of the encoded message length
///
/// # Returns
/// A single `0x80` byte, followed by the minimum number of zero bytes that aligns the message to
/// `block_size - length_field_size` modulo `block_size`, followed by the message length in bits. A bit length
/// that does not fit into the length field is truncated to its low-order bytes, i.e. it wraps modulo
/// `2^(8 * length_field_size)`.
pub fn length_padding(message_length: u128, block_size: usize, length_field_size: usize, order: LengthOrder)
                      -> Vec<u8> {
    assert!(length_field_size <= 16 && length_field_size < block_size);

    let block_offset = (message_length % block_size as u128) as usize;
    let length_position = block_size - length_field_size;

    // if the 0x80 byte does not fit in front of the length field, the padding spills into a second block
    let zero_count = if block_offset < length_position {
        length_position - block_offset - 1
    } else {
        block_size + length_position - block_offset - 1
    };

    let mut padding = Vec::with_capacity(1 + zero_count + length_field_size);
    padding.push(0x80u8);
    padding.resize(1 + zero_count, 0u8);

    let message_length_bits = message_length.wrapping_mul(8);
    match order {
        LengthOrder::BigEndian =>
            padding.extend_from_slice(&message_length_bits.to_be_bytes()[16 - length_field_size..]),
        LengthOrder::LittleEndian =>
            padding.extend_from_slice(&message_length_bits.to_le_bytes()[..length_field_size]),
    }

    padding
}
