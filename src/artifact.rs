//! On-disk model artifact.
//!
//! A trained model is persisted as a single file holding the fitted
//! vectorizer and classifier, nothing else. The layout is explicit and
//! versioned so a reader can reject anything it does not understand:
//!
//! ```text
//! magic            4 bytes, b"VRDT"
//! format version   u32, little-endian
//! payload length   u64, little-endian
//! payload          bincode-serialized ModelArtifact
//! checksum         u32, little-endian, CRC32 of the payload
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::classifier::LogisticRegression;
use crate::error::{Result, VerdictError};
use crate::features::TfIdfVectorizer;

/// File magic identifying a model artifact.
const MAGIC: &[u8; 4] = b"VRDT";

/// Current artifact format version.
pub const FORMAT_VERSION: u32 = 1;

/// The complete serializable state of a trained model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// The fitted feature space.
    pub vectorizer: TfIdfVectorizer,
    /// The fitted classifier.
    pub classifier: LogisticRegression,
}

impl ModelArtifact {
    /// Write the artifact to a file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Read an artifact from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Write the artifact to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = bincode::serialize(self)
            .map_err(|e| VerdictError::artifact(format!("failed to encode model: {e}")))?;

        writer.write_all(MAGIC)?;
        writer.write_u32::<LittleEndian>(FORMAT_VERSION)?;
        writer.write_u64::<LittleEndian>(payload.len() as u64)?;
        writer.write_all(&payload)?;
        writer.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
        Ok(())
    }

    /// Read an artifact from a reader, validating magic, version, and
    /// checksum.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader
            .read_exact(&mut magic)
            .map_err(|_| VerdictError::artifact("file is not a model artifact (no header)"))?;
        if &magic != MAGIC {
            return Err(VerdictError::artifact(
                "file is not a model artifact (bad magic)",
            ));
        }

        let version = reader
            .read_u32::<LittleEndian>()
            .map_err(|_| VerdictError::artifact("truncated artifact header"))?;
        if version != FORMAT_VERSION {
            return Err(VerdictError::artifact(format!(
                "unsupported artifact version {version} (expected {FORMAT_VERSION})"
            )));
        }

        let payload_len = reader
            .read_u64::<LittleEndian>()
            .map_err(|_| VerdictError::artifact("truncated artifact header"))?;
        let mut payload = vec![0u8; payload_len as usize];
        reader
            .read_exact(&mut payload)
            .map_err(|_| VerdictError::artifact("truncated artifact payload"))?;

        let expected = reader
            .read_u32::<LittleEndian>()
            .map_err(|_| VerdictError::artifact("missing artifact checksum"))?;
        let actual = crc32fast::hash(&payload);
        if expected != actual {
            return Err(VerdictError::artifact(format!(
                "artifact checksum mismatch (expected {expected:08x}, found {actual:08x})"
            )));
        }

        bincode::deserialize(&payload)
            .map_err(|e| VerdictError::artifact(format!("failed to decode model: {e}")))
    }
}
