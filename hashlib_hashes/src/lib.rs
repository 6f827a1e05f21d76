//! This crate contains software implementations of MD5 and the SHA-2 family. All implementations offer granular
//! APIs: a hash is initialized, updated with data any number of times and can be finished at any point without
//! being consumed.

pub mod md5;
pub mod merkle_damgard;
pub mod padding;
pub mod sha2;

pub use crate::md5::Md5;
pub use crate::sha2::sha256::{Sha224, Sha256};
pub use crate::sha2::sha512::{Sha384, Sha512};

/// Output of a `HashFunction`.
pub trait HashValue {
    /// Obtain the hash as a raw byte array.
    fn raw(&self) -> Vec<u8>;
}

/// An implementation of a hashing algorithm. It defines two implementation dependent types, one of which is the
/// output hash type.
pub trait HashFunction {
    /// Contains the current unfinished hash value. It is constructed using `init_hash` and then used by this function
    /// as the target where all data is compressed into. Cloning it forks the computation.
    type HashState: Clone;

    /// Final hash value that is obtained through completion of the hashing function.
    type HashData: HashValue;

    /// Canonical lowercase name of the algorithm.
    const NAME: &'static str;

    /// The digestion block size of this hash function in bytes.
    const BLOCK_SIZE: usize;

    /// The size of the final hash value in bytes.
    const OUTPUT_SIZE: usize;

    /// Obtain an initial hash state (usually the IV).
    fn init_hash() -> Self::HashState;

    /// Update the hash with more data. If not all data can be consumed, the remaining bytes are stored within the
    /// hash state.
    fn update_hash(hash: &mut Self::HashState, input: &[u8]);

    /// Finish the hash using the buffered data. The resulting hash is returned. The given `hash` is not changed and
    /// may be updated and finished again afterwards.
    fn finish_hash(hash: &Self::HashState) -> Self::HashData;

    /// Convenience method to initialize a hash state and completely compress the given `input` into it. Then the
    /// final hash is returned.
    fn digest_message(input: &[u8]) -> Self::HashData {
        let mut hash_state = Self::init_hash();
        Self::update_hash(&mut hash_state, input);
        Self::finish_hash(&hash_state)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    const EMPTY_MESSAGE: &str = "";

    const SOME_TEXT: &str = "a-very-long-message-that-can-be-digested-at-once";

    const LONG_TEXT: &str = "And Ion held six fingers aloft and upon their spears did the \
soldiers impale themselves. \"For you!\" they cried before the blood drowned their tongues. \
And Ion said, \"Now do you see?\" And Nadox wept, as more did skewer themselves in Ion's name, \
for he had seen and now knew the truth of his words.";

    const STREAM_TEXT: [&str; 3] = [
        "Then Ion called the Klavigar to Him, and together they sat for a time within the heart \
of the Leviathan. They spoke of many things, of the darkness to come, and of the Fall. For the \
Ozirmok knew of what would befall them all at Kythera. ",
        "And, in turn, He bade each of them to go forth and set in motion the beginning of the \
Great Plan. To Orok and to his disciple Halyna Ieva, He bade them to create the \
beginnings of a great force, one to rival that of the halkostana, but to do so in secret. \
To Lovataar and her disciple Kalakaran, to study the root of small things, to understand \
unto even the base of life itself. To learn all there was to know of how to spread the \
Flesh. ",
        "To Saarn and her disciple Naman, He bade to study life itself, how to consume more than \
merely the flesh, but to study the vitality of the soul. And finally, onto Nadox and his \
disciple Zhizao, He laid the heaviest burden. To carry the weight of the Nalmasak, that \
which was His Holy Word. To bring forth His vision, to make it manifest in the world \
after He was gone."
    ];

    fn digest_hex<H: HashFunction>(message: &[u8]) -> String {
        hex::encode(H::digest_message(message).raw())
    }

    fn stream_hex<H: HashFunction>() -> String {
        let mut hash_state = H::init_hash();
        for part in STREAM_TEXT.iter() {
            H::update_hash(&mut hash_state, part.as_bytes());
        }
        hex::encode(H::finish_hash(&hash_state).raw())
    }

    /// Digest `message` in randomly sized pieces, which must not change the result.
    fn random_split_hex<H: HashFunction>(message: &[u8]) -> String {
        let mut rng = rand::thread_rng();
        let mut hash_state = H::init_hash();
        let mut rest = message;
        while !rest.is_empty() {
            let (piece, tail) = rest.split_at(rng.gen_range(0..=rest.len()));
            H::update_hash(&mut hash_state, piece);
            rest = tail;
        }
        hex::encode(H::finish_hash(&hash_state).raw())
    }

    #[test]
    fn test_md5() {
        assert_eq!(digest_hex::<Md5>(EMPTY_MESSAGE.as_bytes()), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(digest_hex::<Md5>(SOME_TEXT.as_bytes()), "9cf653b21b12797c80f769c8a753c360");
        assert_eq!(digest_hex::<Md5>(LONG_TEXT.as_bytes()), "fd87f4b9821fe2223f006c3495324541");
    }

    #[test]
    fn test_md5_stream() {
        assert_eq!(stream_hex::<Md5>(), "4ede84ae4c00b7c8f1683ca6bbacd3b1");
    }

    #[test]
    fn test_md5_block_boundaries() {
        assert_eq!(digest_hex::<Md5>(&[b'a'; 55]), "ef1772b6dff9a122358552954ad0df65");
        assert_eq!(digest_hex::<Md5>(&[b'a'; 56]), "3b0c8ac703f828b04c6c197006d17218");
        assert_eq!(digest_hex::<Md5>(&[b'a'; 64]), "014842d480b571495a4a0363793f7367");
    }

    #[test]
    fn test_sha224() {
        assert_eq!(
            digest_hex::<Sha224>(EMPTY_MESSAGE.as_bytes()),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
        assert_eq!(
            digest_hex::<Sha224>(b"abc"),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
        assert_eq!(
            digest_hex::<Sha224>(SOME_TEXT.as_bytes()),
            "ac08e3305fd5333ccf00f6263b90f392f3c4e3f8791bc7a86c633e34"
        );
        assert_eq!(stream_hex::<Sha224>(), "9d188dff7cc2a110ee09a11844a1d10fb82fef08e6edb8fa33a67002");
    }

    #[test]
    fn test_sha256() {
        assert_eq!(
            digest_hex::<Sha256>(EMPTY_MESSAGE.as_bytes()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest_hex::<Sha256>(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            digest_hex::<Sha256>(SOME_TEXT.as_bytes()),
            "cc77cc4784a3be36a1e0b6da76cf57dbbc3b8a8a1241f3680a796224b5ad45b0"
        );
        assert_eq!(
            digest_hex::<Sha256>(LONG_TEXT.as_bytes()),
            "c6fa6ff60b5f0d33bd802c2dc55e4f701f64ef9ce0e1e0c0441aed7921cd6fdb"
        );
    }

    #[test]
    fn test_sha256_stream() {
        assert_eq!(stream_hex::<Sha256>(), "e3c1903dc78a8770668d8064325993eb053d6f484d1ed0f22360b8f1215ade39");
    }

    #[test]
    fn test_sha256_block_boundaries() {
        assert_eq!(
            digest_hex::<Sha256>(&[b'a'; 55]),
            "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"
        );
        assert_eq!(
            digest_hex::<Sha256>(&[b'a'; 56]),
            "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"
        );
        assert_eq!(
            digest_hex::<Sha256>(&[b'a'; 64]),
            "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"
        );
    }

    #[test]
    fn test_sha384() {
        assert_eq!(
            digest_hex::<Sha384>(EMPTY_MESSAGE.as_bytes()),
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
        );
        assert_eq!(
            digest_hex::<Sha384>(b"abc"),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            digest_hex::<Sha384>(LONG_TEXT.as_bytes()),
            "cfbe6d5908ad1c97ba803987717ecfd8385dadeaa62d3002ae2563d6ee8b3eb7d3a08c085a5206fac86e599ff8e60c9c"
        );
        assert_eq!(
            stream_hex::<Sha384>(),
            "6571c909db1822cbefe38e2a3b32e2a258419c0d12ced1a0930793347b108a785564c189f8e96a16eccd60a830aad80c"
        );
    }

    #[test]
    fn test_sha512() {
        assert_eq!(
            digest_hex::<Sha512>(EMPTY_MESSAGE.as_bytes()),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
        assert_eq!(
            digest_hex::<Sha512>(b"abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
        assert_eq!(
            digest_hex::<Sha512>(SOME_TEXT.as_bytes()),
            "62edfb86ce119e8a4a25afe8269d1fd65dc8784c1b64ce4972e8d57e4a2de703\
f540e0ed46f27bed9186ada5b5a5ca23cdb605eee57bee1c183d4b62c442e4f0"
        );
        assert_eq!(
            stream_hex::<Sha512>(),
            "0bb44b698a4a86b39fff0874b05c8d44d2b92f18da69ef48de541b23ec9ef391\
ebe7c8a7f08ecb9e9a2e10da6658eab26312927f387a995c7e780ce656bafad5"
        );
    }

    #[test]
    fn test_random_splits() {
        let message = [LONG_TEXT, STREAM_TEXT[0], STREAM_TEXT[1]].concat();
        for _ in 0..20 {
            assert_eq!(random_split_hex::<Md5>(message.as_bytes()), digest_hex::<Md5>(message.as_bytes()));
            assert_eq!(random_split_hex::<Sha224>(message.as_bytes()), digest_hex::<Sha224>(message.as_bytes()));
            assert_eq!(random_split_hex::<Sha384>(message.as_bytes()), digest_hex::<Sha384>(message.as_bytes()));
        }
    }

    #[test]
    fn test_output_sizes() {
        assert_eq!(Md5::digest_message(b"").raw().len(), Md5::OUTPUT_SIZE);
        assert_eq!(Sha224::digest_message(b"").raw().len(), Sha224::OUTPUT_SIZE);
        assert_eq!(Sha256::digest_message(b"").raw().len(), Sha256::OUTPUT_SIZE);
        assert_eq!(Sha384::digest_message(b"").raw().len(), Sha384::OUTPUT_SIZE);
        assert_eq!(Sha512::digest_message(b"").raw().len(), Sha512::OUTPUT_SIZE);
    }
}
