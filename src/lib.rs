//! A uniform incremental message-digest interface over MD5, SHA-224, SHA-256, SHA-384 and SHA-512.
//!
//! A digest is created by algorithm name, fed with bytes through `update` and can be read at any point through
//! `digest` or `hexdigest` without being consumed:
//!
//! ```
//! let mut digest = hashlib::new("sha256").unwrap();
//! digest.update(b"abc");
//! assert_eq!(digest.hexdigest(), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
//! ```

mod algorithm;
mod context;
mod error;

pub use crate::algorithm::{algorithms_available, Algorithm};
pub use crate::context::{DigestContext, Input};
pub use crate::error::{HashError, Result, Unsupported};

/// Create an empty digest for the algorithm called `name`. Fails with `UnsupportedAlgorithm` for unknown names and
/// for algorithms that are deliberately not provided (`sha1`).
pub fn new(name: &str) -> Result<DigestContext> {
    Ok(DigestContext::new(Algorithm::from_name(name)?))
}

/// Create a digest for the algorithm called `name` that has already consumed `data`.
pub fn new_with_data<'a>(name: &str, data: impl Into<Input<'a>>) -> Result<DigestContext> {
    let data = data.into().as_bytes()?;
    Ok(DigestContext::with_data(Algorithm::from_name(name)?, data))
}

/// An MD5 digest, initialized with `data`.
pub fn md5(data: &[u8]) -> DigestContext {
    DigestContext::with_data(Algorithm::Md5, data)
}

/// A SHA-224 digest, initialized with `data`.
pub fn sha224(data: &[u8]) -> DigestContext {
    DigestContext::with_data(Algorithm::Sha224, data)
}

/// A SHA-256 digest, initialized with `data`.
pub fn sha256(data: &[u8]) -> DigestContext {
    DigestContext::with_data(Algorithm::Sha256, data)
}

/// A SHA-384 digest, initialized with `data`.
pub fn sha384(data: &[u8]) -> DigestContext {
    DigestContext::with_data(Algorithm::Sha384, data)
}

/// A SHA-512 digest, initialized with `data`.
pub fn sha512(data: &[u8]) -> DigestContext {
    DigestContext::with_data(Algorithm::Sha512, data)
}
