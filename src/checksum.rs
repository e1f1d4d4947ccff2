use sha2::digest::DynDigest;
use sha2::{Sha256, Sha512};
use std::io::{self, Write};

/// Checksum algorithms offered for the filtered file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// SHA-256 checksum
    Sha256,
    /// SHA-512 checksum
    Sha512,
}

impl DigestAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }

    fn hasher(&self) -> Box<dyn DynDigest> {
        match self {
            DigestAlgorithm::Sha256 => Box::new(Sha256::default()),
            DigestAlgorithm::Sha512 => Box::new(Sha512::default()),
        }
    }
}

/// Output sink that hashes and counts the bytes of the filtered file as they
/// are written, block 9 included.
pub struct ChecksumWriter<W> {
    inner: W,
    hasher: Box<dyn DynDigest>,
    bytes_written: u64,
}

impl<W: Write> ChecksumWriter<W> {
    pub fn new(inner: W, algorithm: DigestAlgorithm) -> Self {
        ChecksumWriter {
            inner,
            hasher: algorithm.hasher(),
            bytes_written: 0,
        }
    }

    /// Bytes accepted by the inner writer so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Give back the inner writer along with the hex checksum
    pub fn into_parts(self) -> (W, String) {
        (self.inner, hex::encode(self.hasher.finalize()))
    }
}

impl<W: Write> Write for ChecksumWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        // A short write leaves the rest for the next call
        if let Some(accepted) = buf.get(..written) {
            self.hasher.update(accepted);
            self.bytes_written += accepted.len() as u64;
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
