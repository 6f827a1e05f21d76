//! Word-level primitives shared by all compression functions: modular arithmetic, rotations and
//! endian-aware conversion between byte blocks and word arrays.

use num::traits::WrappingAdd;
use num::PrimInt;

/// Add two words modulo 2^n, where n is the width of the word type. Overflow wraps silently.
#[inline(always)]
pub fn add_mod<N: WrappingAdd>(a: N, b: N) -> N {
    a.wrapping_add(&b)
}

/// Rotate `x` left by `n` bits within its own width.
#[inline(always)]
pub fn rotl<N: PrimInt>(x: N, n: u32) -> N {
    x.rotate_left(n)
}

/// Rotate `x` right by `n` bits within its own width.
#[inline(always)]
pub fn rotr<N: PrimInt>(x: N, n: u32) -> N {
    x.rotate_right(n)
}

/// Copies the ``source`` array to the ``dest`` array with respect to endianness. ``source`` must be at least four
/// times bigger than ``dest``, otherwise this function panics. Data from ``source`` will be treated as little endian
/// integers
pub fn align_to_u32a_le(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (dword, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *dword = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Copies the ``source`` array to the ``dest`` array with respect to endianness. ``source`` must be at least four
/// times bigger than ``dest``, otherwise this function panics. Data from ``source`` will be treated as big endian
/// integers
pub fn align_to_u32a_be(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (dword, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *dword = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Copies the ``source`` array to the ``dest`` array with respect to endianness. ``source`` must be at least eight
/// times bigger than ``dest``, otherwise this function panics. Data from ``source`` will be treated as big endian
/// integers
pub fn align_to_u64a_be(dest: &mut [u64], source: &[u8]) {
    assert!(source.len() >= dest.len() * 8);

    for (qword, bytes) in dest.iter_mut().zip(source.chunks_exact(8)) {
        let mut buffer = [0u8; 8];
        buffer.copy_from_slice(bytes);
        *qword = u64::from_be_bytes(buffer);
    }
}

/// Serializes ``source`` into ``dest`` as consecutive little endian double words. ``dest`` must hold at least four
/// bytes per word.
pub fn write_u32a_le(dest: &mut [u8], source: &[u32]) {
    assert!(dest.len() >= source.len() * 4);

    for (bytes, dword) in dest.chunks_exact_mut(4).zip(source.iter()) {
        bytes.copy_from_slice(&dword.to_le_bytes());
    }
}

/// Serializes ``source`` into ``dest`` as consecutive big endian double words. ``dest`` must hold at least four
/// bytes per word.
pub fn write_u32a_be(dest: &mut [u8], source: &[u32]) {
    assert!(dest.len() >= source.len() * 4);

    for (bytes, dword) in dest.chunks_exact_mut(4).zip(source.iter()) {
        bytes.copy_from_slice(&dword.to_be_bytes());
    }
}

/// Serializes ``source`` into ``dest`` as consecutive big endian quad words. ``dest`` must hold at least eight
/// bytes per word.
pub fn write_u64a_be(dest: &mut [u8], source: &[u64]) {
    assert!(dest.len() >= source.len() * 8);

    for (bytes, qword) in dest.chunks_exact_mut(8).zip(source.iter()) {
        bytes.copy_from_slice(&qword.to_be_bytes());
    }
}
