use {
    governance_types::{Address, B256, TargetOption, U256, VoteType},
    sha3::{Digest, Keccak256},
};

pub const WORD_LENGTH: usize = 32;

/// A value that encodes to exactly one 32-byte ABI word.
pub trait Word {
    fn to_word(&self) -> [u8; WORD_LENGTH];
}

impl Word for U256 {
    fn to_word(&self) -> [u8; WORD_LENGTH] {
        self.to_be_bytes::<WORD_LENGTH>()
    }
}

impl Word for B256 {
    fn to_word(&self) -> [u8; WORD_LENGTH] {
        self.0
    }
}

impl Word for Address {
    fn to_word(&self) -> [u8; WORD_LENGTH] {
        // address: 20 bytes, left-padded with 12 zeros
        let mut word = [0; WORD_LENGTH];
        word[12..].copy_from_slice(self.as_slice());
        word
    }
}

impl Word for u8 {
    fn to_word(&self) -> [u8; WORD_LENGTH] {
        let mut word = [0; WORD_LENGTH];
        word[WORD_LENGTH - 1] = *self;
        word
    }
}

impl Word for VoteType {
    fn to_word(&self) -> [u8; WORD_LENGTH] {
        self.tag().to_word()
    }
}

impl Word for TargetOption {
    fn to_word(&self) -> [u8; WORD_LENGTH] {
        self.tag().to_word()
    }
}

/// Keccak-256 over a sequence of 32-byte words.
///
/// Words are streamed into the hasher, so hashing an array never allocates
/// the concatenated preimage.
#[derive(Clone, Default)]
pub struct WordHasher {
    inner: Keccak256,
}

impl WordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word<W>(mut self, word: &W) -> Self
    where
        W: Word + ?Sized,
    {
        self.update(word);
        self
    }

    pub fn update<W>(&mut self, word: &W)
    where
        W: Word + ?Sized,
    {
        self.inner.update(word.to_word());
    }

    pub fn finalize(self) -> B256 {
        let digest: [u8; WORD_LENGTH] = self.inner.finalize().into();
        B256::from(digest)
    }
}

/// Canonicalize an array of words to a single digest: the Keccak-256 of the
/// words' concatenation. An empty array hashes to `keccak256("")`.
pub fn hash_words<'a, W, I>(words: I) -> B256
where
    W: Word + ?Sized + 'a,
    I: IntoIterator<Item = &'a W>,
{
    words
        .into_iter()
        .fold(WordHasher::new(), |hasher, word| hasher.word(word))
        .finalize()
}

/// Represents data that can be Keccak-256 hashed.
pub trait HashExt {
    fn keccak256(&self) -> B256;
}

impl<T> HashExt for T
where
    T: AsRef<[u8]> + ?Sized,
{
    fn keccak256(&self) -> B256 {
        let mut hasher = Keccak256::new();
        hasher.update(self.as_ref());
        let digest: [u8; WORD_LENGTH] = hasher.finalize().into();
        B256::from(digest)
    }
}

/// Render a digest as `0x` followed by 64 lowercase hex digits.
pub fn to_hex_string(digest: &B256) -> String {
    format!("0x{}", hex::encode(digest))
}

// ----------------------------------- tests -----------------------------------
