//! The incremental digest object handed out by the dispatcher.

use hashlib_hashes::{HashFunction, HashValue, Md5, Sha224, Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;
use crate::error::{HashError, Result};

/// Running state of one of the supported hash functions.
#[derive(Debug, Clone)]
enum HashState {
    Md5(<Md5 as HashFunction>::HashState),
    Sha224(<Sha224 as HashFunction>::HashState),
    Sha256(<Sha256 as HashFunction>::HashState),
    Sha384(<Sha384 as HashFunction>::HashState),
    Sha512(<Sha512 as HashFunction>::HashState),
}

impl HashState {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => HashState::Md5(Md5::init_hash()),
            Algorithm::Sha224 => HashState::Sha224(Sha224::init_hash()),
            Algorithm::Sha256 => HashState::Sha256(Sha256::init_hash()),
            Algorithm::Sha384 => HashState::Sha384(Sha384::init_hash()),
            Algorithm::Sha512 => HashState::Sha512(Sha512::init_hash()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            HashState::Md5(hash) => Md5::update_hash(hash, data),
            HashState::Sha224(hash) => Sha224::update_hash(hash, data),
            HashState::Sha256(hash) => Sha256::update_hash(hash, data),
            HashState::Sha384(hash) => Sha384::update_hash(hash, data),
            HashState::Sha512(hash) => Sha512::update_hash(hash, data),
        }
    }

    fn finish(&self) -> Vec<u8> {
        match self {
            HashState::Md5(hash) => Md5::finish_hash(hash).raw(),
            HashState::Sha224(hash) => Sha224::finish_hash(hash).raw(),
            HashState::Sha256(hash) => Sha256::finish_hash(hash).raw(),
            HashState::Sha384(hash) => Sha384::finish_hash(hash).raw(),
            HashState::Sha512(hash) => Sha512::finish_hash(hash).raw(),
        }
    }

    fn message_length(&self) -> u128 {
        match self {
            HashState::Md5(hash) => hash.message_length(),
            HashState::Sha224(hash) | HashState::Sha256(hash) => hash.message_length(),
            HashState::Sha384(hash) | HashState::Sha512(hash) => hash.message_length(),
        }
    }
}

/// Data handed to a digest from a loosely typed boundary. Only raw bytes are hashed; text has to be encoded by the
/// caller first, because hashing an implicitly chosen representation would silently produce the wrong digest.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> Input<'a> {
    /// The bytes to hash, or `InvalidInputType` for text.
    pub fn as_bytes(self) -> Result<&'a [u8]> {
        match self {
            Input::Bytes(bytes) => Ok(bytes),
            Input::Text(_) => Err(HashError::InvalidInputType("text must be encoded to bytes before hashing")),
        }
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

/// An incremental message digest. Data is pushed through `update` any number of times; `digest` and `hexdigest`
/// may be requested at any point, repeatedly, without ending the computation.
#[derive(Debug, Clone)]
pub struct DigestContext {
    algorithm: Algorithm,
    state: HashState,
}

impl DigestContext {
    /// Create an empty digest for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        tracing::debug!(%algorithm, "creating digest context");
        DigestContext { algorithm, state: HashState::new(algorithm) }
    }

    /// Create a digest for `algorithm` that has already consumed `data`.
    pub fn with_data(algorithm: Algorithm, data: &[u8]) -> Self {
        let mut context = DigestContext::new(algorithm);
        context.update(data);
        context
    }

    /// Feed more bytes into the digest. Empty input is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data)
    }

    /// Feed loosely typed input into the digest. Text is rejected with `InvalidInputType` and leaves the digest
    /// unchanged.
    pub fn update_input<'a>(&mut self, input: impl Into<Input<'a>>) -> Result<()> {
        let data = input.into().as_bytes()?;
        self.update(data);
        Ok(())
    }

    /// The digest of all data passed to `update` so far. The context is not modified.
    pub fn digest(&self) -> Vec<u8> {
        tracing::trace!(algorithm = %self.algorithm, message_length = %self.state.message_length(), "finishing digest");
        self.state.finish()
    }

    /// Like `digest`, encoded as lowercase hexadecimal digits.
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// An independent copy of this digest. Updates to either one do not affect the other.
    pub fn copy(&self) -> DigestContext {
        self.clone()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn digest_size(&self) -> usize {
        self.algorithm.digest_size()
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }
}
