//! Value generators driven by a [`SeedState`].
//!
//! Every method reserves one private random stream from the seed state and
//! draws all of its output from that stream.

use crate::block::Block;
use crate::encode;
use crate::error::{defect, EncodeError};
use crate::gen::{unique_batch, Gen};
use crate::generators::{payload, Ip4TcpAddr, SigningKeyGen};
use crate::identity::{Identity, PeerId};
use crate::seed::SeedState;
use crate::{Cid, Multihash};
use ed25519_dalek::SigningKey;
use multiaddr::{Multiaddr, Protocol};

/// Payload bytes per requested CID; grows with the batch to keep collisions
/// negligible.
const CID_PAYLOAD_FACTOR: usize = 10;
const MULTIHASH_PAYLOAD_EXTRA: usize = 16;

impl SeedState {
    /// Return `n` random bytes.
    pub fn bytes(&self, n: usize) -> Vec<u8> {
        payload(n).generate(&mut self.rng())
    }

    /// Return `n` distinct `/ip4/A.B.C.D/tcp/PORT` address strings.
    pub fn addrs(&self, n: usize) -> Vec<String> {
        unique_batch(&Ip4TcpAddr, &mut self.rng(), n)
    }

    /// Return `n` distinct multiaddrs.
    pub fn multiaddrs(&self, n: usize) -> Vec<Multiaddr> {
        self.addrs(n)
            .iter()
            .map(|addr| encode::multiaddr(addr))
            .collect::<Result<_, _>>()
            .unwrap_or_else(defect)
    }

    /// Return `n` distinct multiaddrs, each ending in `/http`.
    pub fn http_multiaddrs(&self, n: usize) -> Vec<Multiaddr> {
        self.multiaddrs(n)
            .into_iter()
            .map(|maddr| maddr.with(Protocol::Http))
            .collect()
    }

    /// Return `n` distinct CIDv1 dag-json CIDs over sha2-256.
    pub fn cids(&self, n: usize) -> Vec<Cid> {
        self.try_cids(n).unwrap_or_else(defect)
    }

    fn try_cids(&self, n: usize) -> Result<Vec<Cid>, EncodeError> {
        let payloads = unique_batch(&payload(CID_PAYLOAD_FACTOR * n), &mut self.rng(), n);
        payloads.iter().map(|p| encode::dag_json_cid(p)).collect()
    }

    /// Return `n` distinct sha2-256 multihashes.
    pub fn multihashes(&self, n: usize) -> Vec<Multihash> {
        self.try_multihashes(n).unwrap_or_else(defect)
    }

    fn try_multihashes(&self, n: usize) -> Result<Vec<Multihash>, EncodeError> {
        let len = CID_PAYLOAD_FACTOR * n + MULTIHASH_PAYLOAD_EXTRA;
        let payloads = unique_batch(&payload(len), &mut self.rng(), n);
        payloads.iter().map(|p| encode::sha256(p)).collect()
    }

    /// Return a random ed25519 identity.
    pub fn identity(&self) -> Identity {
        let signing_key = SigningKeyGen.generate(&mut self.rng());
        Identity::from_signing_key(signing_key).unwrap_or_else(defect)
    }

    /// Return `n` random peer IDs.
    ///
    /// There is no uniqueness check; ed25519 collisions are not a practical
    /// concern.
    pub fn peers(&self, n: usize) -> Vec<PeerId> {
        let gen = SigningKeyGen
            .map(|key: SigningKey| PeerId::from_public_key(&key.verifying_key()));
        let mut rng = self.rng();
        (0..n)
            .map(|_| gen.generate(&mut rng))
            .collect::<Result<_, _>>()
            .unwrap_or_else(defect)
    }

    /// Return `n` blocks, each holding `size` random bytes.
    pub fn blocks_of_size(&self, n: usize, size: usize) -> Vec<Block> {
        (0..n).map(|_| Block::new(self.bytes(size))).collect()
    }
}
