#![allow(clippy::unreadable_literal)]

use hashlib_util::{align_to_u32a_be, write_u32a_be};

use crate::merkle_damgard::MerkleDamgardState;
use crate::sha2::{Sha2Hash, Sha2Word, Truncated};
use crate::HashFunction;

/// A SHA-256 (or SHA-224) hash state of eight double-words.
pub type SHA256Hash = Sha2Hash<u32>;

/// Output of SHA-224: the first seven double-words of the hash state.
pub type SHA224Hash = Truncated<SHA256Hash, 28>;

/// The initial state of SHA-256: the first 32 bits of the fractional parts of the square roots of the first eight
/// primes.
pub const INITIAL_256: SHA256Hash = Sha2Hash([
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
]);

/// The initial state of SHA-224: the second 32 bits of the fractional parts of the square roots of the 9th through
/// 16th primes.
pub const INITIAL_224: SHA256Hash = Sha2Hash([
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
]);

/// first 32 bits of the fractional parts of the cube roots of the first 64 primes
static ROUND_CONSTANTS: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

impl Sha2Word for u32 {
    const BLOCK_SIZE: usize = 64;
    const LENGTH_FIELD_SIZE: usize = 8;
    const ROUND_COUNT: usize = 64;

    const BIG_SIGMA_0: [u32; 3] = [2, 13, 22];
    const BIG_SIGMA_1: [u32; 3] = [6, 11, 25];
    const SMALL_SIGMA_0: [u32; 3] = [7, 18, 3];
    const SMALL_SIGMA_1: [u32; 3] = [17, 19, 10];

    fn round_constants() -> &'static [Self] {
        &ROUND_CONSTANTS
    }

    fn align_block(dest: &mut [Self], source: &[u8]) {
        align_to_u32a_be(dest, source)
    }

    fn write_words(dest: &mut [u8], source: &[Self]) {
        write_u32a_be(dest, source)
    }
}

/// SHA-256 of FIPS 180-4.
#[derive(Debug, Copy, Clone)]
pub struct Sha256;

/// SHA-224 of FIPS 180-4: SHA-256 with another initial value, truncated to 224 bits.
#[derive(Debug, Copy, Clone)]
pub struct Sha224;

impl HashFunction for Sha256 {
    type HashState = MerkleDamgardState<SHA256Hash>;
    type HashData = SHA256Hash;

    const NAME: &'static str = "sha256";
    const BLOCK_SIZE: usize = 64;
    const OUTPUT_SIZE: usize = 32;

    fn init_hash() -> Self::HashState {
        MerkleDamgardState::new(INITIAL_256)
    }

    fn update_hash(hash: &mut Self::HashState, input: &[u8]) {
        hash.update(input)
    }

    fn finish_hash(hash: &Self::HashState) -> Self::HashData {
        hash.finish()
    }
}

impl HashFunction for Sha224 {
    type HashState = MerkleDamgardState<SHA256Hash>;
    type HashData = SHA224Hash;

    const NAME: &'static str = "sha224";
    const BLOCK_SIZE: usize = 64;
    const OUTPUT_SIZE: usize = 28;

    fn init_hash() -> Self::HashState {
        MerkleDamgardState::new(INITIAL_224)
    }

    fn update_hash(hash: &mut Self::HashState, input: &[u8]) {
        hash.update(input)
    }

    fn finish_hash(hash: &Self::HashState) -> Self::HashData {
        Truncated(hash.finish())
    }
}
