//! Ed25519 identities and the peer IDs derived from them.

use crate::encode::IDENTITY;
use crate::error::EncodeError;
use crate::Multihash;
use ed25519_dalek::{SigningKey, VerifyingKey};
use std::fmt;

/// Protobuf header of an encoded ed25519 public key: field 1 (key type) set
/// to 1 (Ed25519), then field 2 (data) with a 32 byte length.
const ED25519_KEY_HEADER: [u8; 4] = [0x08, 0x01, 0x12, 0x20];

/// A libp2p-style peer ID.
///
/// Ed25519 public keys are small enough to be inlined, so the ID is the
/// identity multihash of the protobuf-encoded public key. Its text form is
/// base58btc and starts with `12D3KooW`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerId(Multihash);

impl PeerId {
    /// Derive the peer ID for an ed25519 public key.
    pub fn from_public_key(key: &VerifyingKey) -> Result<Self, EncodeError> {
        let mut encoded = Vec::with_capacity(ED25519_KEY_HEADER.len() + 32);
        encoded.extend_from_slice(&ED25519_KEY_HEADER);
        encoded.extend_from_slice(key.as_bytes());
        Ok(Self(Multihash::wrap(IDENTITY, &encoded)?))
    }

    /// The multihash this ID wraps.
    pub fn as_multihash(&self) -> &Multihash {
        &self.0
    }

    /// Binary form of the ID.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0.to_bytes()).into_string())
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerId({})", self)
    }
}

/// A peer ID together with the key pair it was derived from.
#[derive(Clone, Debug)]
pub struct Identity {
    pub peer_id: PeerId,
    pub signing_key: SigningKey,
    pub verifying_key: VerifyingKey,
}

impl Identity {
    /// Build an identity around an existing signing key.
    pub fn from_signing_key(signing_key: SigningKey) -> Result<Self, EncodeError> {
        let verifying_key = signing_key.verifying_key();
        let peer_id = PeerId::from_public_key(&verifying_key)?;
        Ok(Self {
            peer_id,
            signing_key,
            verifying_key,
        })
    }
}
