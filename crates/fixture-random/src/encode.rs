//! Fixed external encodings applied to generated payloads.

use crate::error::EncodeError;
use crate::{Cid, Multihash};
use multiaddr::Multiaddr;
use sha2::{Digest, Sha256};

/// Multicodec code for the identity hash.
pub(crate) const IDENTITY: u64 = 0x00;
/// Multicodec code for sha2-256.
pub(crate) const SHA2_256: u64 = 0x12;
/// Multicodec code for dag-json.
pub(crate) const DAG_JSON: u64 = 0x0129;

/// sha2-256 multihash of `data`.
pub(crate) fn sha256(data: &[u8]) -> Result<Multihash, EncodeError> {
    let digest = Sha256::digest(data);
    Ok(Multihash::wrap(SHA2_256, &digest)?)
}

/// CIDv1 with the dag-json codec over the sha2-256 hash of `payload`.
pub(crate) fn dag_json_cid(payload: &[u8]) -> Result<Cid, EncodeError> {
    Ok(Cid::new_v1(DAG_JSON, sha256(payload)?))
}

/// CIDv0 over the sha2-256 hash of `data`.
pub(crate) fn v0_cid(data: &[u8]) -> Result<Cid, EncodeError> {
    Ok(Cid::new_v0(sha256(data)?)?)
}

pub(crate) fn multiaddr(addr: &str) -> Result<Multiaddr, EncodeError> {
    addr.parse().map_err(|source| EncodeError::Multiaddr {
        addr: addr.to_string(),
        source,
    })
}
