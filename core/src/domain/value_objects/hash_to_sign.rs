//! Hash to sign and the verification code derived from it

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;

/// Number of random bytes hashed into a fresh authentication hash
const RANDOM_INPUT_LENGTH: usize = 64;

/// Hash algorithms accepted by Mobile-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HashType {
    #[default]
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA384")]
    Sha384,
    #[serde(rename = "SHA512")]
    Sha512,
}

impl HashType {
    /// Name used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            HashType::Sha256 => "SHA256",
            HashType::Sha384 => "SHA384",
            HashType::Sha512 => "SHA512",
        }
    }

    /// Digest length in bytes
    pub fn length_in_bytes(&self) -> usize {
        match self {
            HashType::Sha256 => 32,
            HashType::Sha384 => 48,
            HashType::Sha512 => 64,
        }
    }

    /// Compute the digest of `data` with this algorithm
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashType::Sha256 => Sha256::digest(data).to_vec(),
            HashType::Sha384 => Sha384::digest(data).to_vec(),
            HashType::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Four digit code the user compares against the one shown on the phone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Derive the code from hash bytes
    ///
    /// Takes the 6 most significant bits of the first byte followed by the
    /// 7 least significant bits of the last byte and prints the resulting
    /// 13-bit number with four digits.
    pub fn from_hash(hash: &[u8]) -> Self {
        let (first, last) = match (hash.first(), hash.last()) {
            (Some(first), Some(last)) => (*first as u16, *last as u16),
            _ => (0, 0),
        };
        let code = ((first >> 2) << 7) | (last & 0x7F);
        Self(format!("{:04}", code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The hash the user signs with the Mobile-ID key
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationHash {
    hash_type: HashType,
    #[serde(with = "base64_bytes")]
    hash: Vec<u8>,
}

impl AuthenticationHash {
    /// Wrap an existing digest
    pub fn new(hash_type: HashType, hash: Vec<u8>) -> Self {
        Self { hash_type, hash }
    }

    /// Hash fresh random bytes with the given algorithm
    pub fn generate_random(hash_type: HashType) -> Self {
        let mut input = [0u8; RANDOM_INPUT_LENGTH];
        OsRng.fill_bytes(&mut input);
        Self::new(hash_type, hash_type.digest(&input))
    }

    /// Hash fresh random bytes with the default algorithm (SHA-256)
    pub fn generate_random_of_default_type() -> Self {
        Self::generate_random(HashType::default())
    }

    pub fn hash_type(&self) -> HashType {
        self.hash_type
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Digest encoded as standard base64, the form sent to Mobile-ID
    pub fn hash_in_base64(&self) -> String {
        STANDARD.encode(&self.hash)
    }

    pub fn calculate_verification_code(&self) -> VerificationCode {
        VerificationCode::from_hash(&self.hash)
    }
}

// The digest is not secret but keeps log lines short
impl fmt::Debug for AuthenticationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationHash")
            .field("hash_type", &self.hash_type)
            .field("hash", &self.hash_in_base64())
            .finish()
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
