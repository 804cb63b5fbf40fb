//! Content-addressed data blocks.

use crate::encode;
use crate::error::{defect, EncodeError};
use crate::Cid;

/// A block of raw data and its CIDv0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    cid: Cid,
    data: Vec<u8>,
}

impl Block {
    /// Wrap `data`, computing its CID.
    ///
    /// # Panics
    ///
    /// Panics if the CID cannot be encoded, which cannot happen for a
    /// sha2-256 digest.
    pub fn new(data: Vec<u8>) -> Self {
        Self::try_new(data).unwrap_or_else(defect)
    }

    fn try_new(data: Vec<u8>) -> Result<Self, EncodeError> {
        let cid = encode::v0_cid(&data)?;
        Ok(Self { cid, data })
    }

    pub fn cid(&self) -> &Cid {
        &self.cid
    }

    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_cid_is_stable() {
        let a = Block::new(b"same data".to_vec());
        let b = Block::new(b"same data".to_vec());
        assert_eq!(a.cid(), b.cid());
        assert_eq!(a.raw_data(), b"same data");
    }

    #[test]
    fn test_different_data_different_cid() {
        let a = Block::new(vec![1, 2, 3]);
        let b = Block::new(vec![3, 2, 1]);
        assert_ne!(a.cid(), b.cid());
    }
}
