//! The SHA-2 family of FIPS 180-4. SHA-224/SHA-256 and SHA-384/SHA-512 run the same round function over 32 and 64
//! bit words respectively, so it is implemented once, generic over a `Sha2Word`. The members of a family only
//! differ by their initial hash value and the length of their output.

use std::fmt::Debug;

use num::traits::WrappingAdd;
use num::PrimInt;

use hashlib_util::{add_mod, rotr};

use crate::merkle_damgard::CompressionCore;
use crate::padding::LengthOrder;
use crate::HashValue;

pub mod sha256;
pub mod sha512;

/// Number of rounds of the widest family member, used to size the message schedule.
const MAX_ROUND_COUNT: usize = 80;

/// Word type of a SHA-2 family, carrying the constants that differ between the 32 bit and 64 bit variants.
pub trait Sha2Word: PrimInt + WrappingAdd + Debug + 'static {
    /// Block length in bytes.
    const BLOCK_SIZE: usize;

    /// Size of the appended message length in bytes.
    const LENGTH_FIELD_SIZE: usize;

    /// Rounds applied to every block. The message schedule is extended to this many words.
    const ROUND_COUNT: usize;

    /// Rotations of the Σ0 function.
    const BIG_SIGMA_0: [u32; 3];

    /// Rotations of the Σ1 function.
    const BIG_SIGMA_1: [u32; 3];

    /// Two rotations and a shift of the σ0 function.
    const SMALL_SIGMA_0: [u32; 3];

    /// Two rotations and a shift of the σ1 function.
    const SMALL_SIGMA_1: [u32; 3];

    /// The round constant table, `ROUND_COUNT` entries.
    fn round_constants() -> &'static [Self];

    /// Read big endian words from `source` into `dest`.
    fn align_block(dest: &mut [Self], source: &[u8]);

    /// Write `source` into `dest` as big endian words.
    fn write_words(dest: &mut [u8], source: &[Self]);
}

/// A SHA-2 hash state: the eight working registers of either word width.
#[derive(Debug, Copy, Clone)]
pub struct Sha2Hash<W>(pub [W; 8]);

/// The output of a SHA-2 hash whose digest is the first `N` bytes of the final hash state.
#[derive(Debug, Copy, Clone)]
pub struct Truncated<H, const N: usize>(pub H);

#[inline(always)]
fn ch<W: Sha2Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj<W: Sha2Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma<W: Sha2Word>(x: W, rotations: [u32; 3]) -> W {
    rotr(x, rotations[0]) ^ rotr(x, rotations[1]) ^ rotr(x, rotations[2])
}

#[inline(always)]
fn small_sigma<W: Sha2Word>(x: W, rotations: [u32; 3]) -> W {
    rotr(x, rotations[0]) ^ rotr(x, rotations[1]) ^ (x >> rotations[2] as usize)
}

/// Compress one block into `state` (FIPS 180-4, sections 6.2.2 and 6.4.2).
fn compress<W: Sha2Word>(state: &mut [W; 8], input_block: &[u8]) {
    assert_eq!(input_block.len(), W::BLOCK_SIZE);

    let mut message_schedule = [W::zero(); MAX_ROUND_COUNT];
    W::align_block(&mut message_schedule[..16], input_block);

    for t in 16..W::ROUND_COUNT {
        message_schedule[t] = add_mod(
            add_mod(small_sigma(message_schedule[t - 2], W::SMALL_SIGMA_1), message_schedule[t - 7]),
            add_mod(small_sigma(message_schedule[t - 15], W::SMALL_SIGMA_0), message_schedule[t - 16]),
        );
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&round_constant, &word) in W::round_constants().iter().zip(message_schedule[..W::ROUND_COUNT].iter()) {
        let t1 = add_mod(
            add_mod(add_mod(h, big_sigma(e, W::BIG_SIGMA_1)), ch(e, f, g)),
            add_mod(round_constant, word),
        );
        let t2 = add_mod(big_sigma(a, W::BIG_SIGMA_0), maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = add_mod(d, t1);
        d = c;
        c = b;
        b = a;
        a = add_mod(t1, t2);
    }

    for (register, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
        *register = add_mod(*register, *working);
    }
}

impl<W: Sha2Word> CompressionCore for Sha2Hash<W> {
    const BLOCK_SIZE: usize = W::BLOCK_SIZE;

    const LENGTH_FIELD_SIZE: usize = W::LENGTH_FIELD_SIZE;

    const LENGTH_ORDER: LengthOrder = LengthOrder::BigEndian;

    fn round_function(&mut self, input_block: &[u8]) {
        compress(&mut self.0, input_block)
    }
}

impl<W: Sha2Word> HashValue for Sha2Hash<W> {
    /// The complete hash state as big endian words.
    fn raw(&self) -> Vec<u8> {
        let mut raw = vec![0u8; 8 * std::mem::size_of::<W>()];
        W::write_words(&mut raw, &self.0);
        raw
    }
}

impl<H: HashValue, const N: usize> HashValue for Truncated<H, N> {
    fn raw(&self) -> Vec<u8> {
        let mut raw = self.0.raw();
        raw.truncate(N);
        raw
    }
}
