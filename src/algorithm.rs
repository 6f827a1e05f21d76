use std::fmt;
use std::str::FromStr;

use hashlib_hashes::{HashFunction, Md5, Sha224, Sha256, Sha384, Sha512};

use crate::error::{HashError, Result, Unsupported};

/// Names of hash algorithms that are known, but not offered by this library.
const EXCLUDED_ALGORITHMS: &[&str] = &["sha1"];

/// Names of all supported algorithms, in the order of `Algorithm::ALL`.
static ALGORITHM_NAMES: [&str; 5] = [Md5::NAME, Sha224::NAME, Sha256::NAME, Sha384::NAME, Sha512::NAME];

/// A supported hash algorithm. Its sizes and name are static descriptor data of the matching `HashFunction`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Md5,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Look up an algorithm by its case-sensitive name, e.g. `"sha256"`.
    pub fn from_name(name: &str) -> Result<Algorithm> {
        if let Some(algorithm) = Algorithm::ALL.iter().find(|algorithm| algorithm.name() == name) {
            return Ok(*algorithm);
        }

        let reason = if EXCLUDED_ALGORITHMS.contains(&name) {
            Unsupported::Excluded
        } else {
            Unsupported::Unrecognized
        };
        tracing::warn!(algorithm = name, %reason, "rejected hash algorithm");

        Err(HashError::UnsupportedAlgorithm { name: name.to_owned(), reason })
    }

    /// The canonical name of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => Md5::NAME,
            Algorithm::Sha224 => Sha224::NAME,
            Algorithm::Sha256 => Sha256::NAME,
            Algorithm::Sha384 => Sha384::NAME,
            Algorithm::Sha512 => Sha512::NAME,
        }
    }

    /// Size of the resulting digest in bytes.
    pub const fn digest_size(self) -> usize {
        match self {
            Algorithm::Md5 => Md5::OUTPUT_SIZE,
            Algorithm::Sha224 => Sha224::OUTPUT_SIZE,
            Algorithm::Sha256 => Sha256::OUTPUT_SIZE,
            Algorithm::Sha384 => Sha384::OUTPUT_SIZE,
            Algorithm::Sha512 => Sha512::OUTPUT_SIZE,
        }
    }

    /// Internal block size of the hash function in bytes.
    pub const fn block_size(self) -> usize {
        match self {
            Algorithm::Md5 => Md5::BLOCK_SIZE,
            Algorithm::Sha224 => Sha224::BLOCK_SIZE,
            Algorithm::Sha256 => Sha256::BLOCK_SIZE,
            Algorithm::Sha384 => Sha384::BLOCK_SIZE,
            Algorithm::Sha512 => Sha512::BLOCK_SIZE,
        }
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(name: &str) -> Result<Self> {
        Algorithm::from_name(name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of all algorithms this library can instantiate.
pub fn algorithms_available() -> &'static [&'static str] {
    &ALGORITHM_NAMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table() {
        let table: Vec<(&str, usize, usize)> = Algorithm::ALL
            .iter()
            .map(|algorithm| (algorithm.name(), algorithm.digest_size(), algorithm.block_size()))
            .collect();

        assert_eq!(
            table,
            vec![
                ("md5", 16, 64),
                ("sha224", 28, 64),
                ("sha256", 32, 64),
                ("sha384", 48, 128),
                ("sha512", 64, 128),
            ]
        );
    }

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(*algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
        assert_eq!(algorithms_available(), &["md5", "sha224", "sha256", "sha384", "sha512"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(
            Algorithm::from_name("SHA256"),
            Err(HashError::UnsupportedAlgorithm { name: "SHA256".to_owned(), reason: Unsupported::Unrecognized })
        );
    }

    #[test]
    fn test_excluded_and_unknown_names() {
        let excluded = Algorithm::from_name("sha1").unwrap_err();
        assert!(excluded.is_excluded_algorithm());
        assert_eq!(excluded.to_string(), "Unsupported hash algorithm: sha1 (recognized but not supported)");

        let unknown = Algorithm::from_name("whirlpool").unwrap_err();
        assert!(!unknown.is_excluded_algorithm());
        assert_eq!(unknown.to_string(), "Unsupported hash algorithm: whirlpool (unrecognized)");
    }
}
