//! Content digests for uploaded files

use md5::Md5;
use sha2::{Digest, Sha256};

/// MD5 and SHA-256 digests of an upload, hex-encoded lowercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigests {
    pub md5: String,
    pub sha256: String,
}

/// Compute both digests in a single pass over the in-memory bytes.
///
/// Hashing happens on the exact bytes that get written to disk; the
/// stored file is never re-read.
pub fn digest_bytes(data: &[u8]) -> FileDigests {
    let mut md5 = Md5::new();
    let mut sha256 = Sha256::new();

    md5.update(data);
    sha256.update(data);

    FileDigests {
        md5: hex::encode(md5.finalize()),
        sha256: hex::encode(sha256.finalize()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digests_known_vector() {
        let digests = digest_bytes(b"hello");
        assert_eq!(digests.md5, "5d41402abc4b2a76b9719d911017c592");
        assert_eq!(
            digests.sha256,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn digests_empty_input() {
        let digests = digest_bytes(b"");
        assert_eq!(digests.md5, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            digests.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_lengths() {
        let digests = digest_bytes(b"content");
        assert_eq!(digests.md5.len(), 32);
        assert_eq!(digests.sha256.len(), 64);
    }
}
