use std::fs::OpenOptions;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to open {} for read+write", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("wrote {written} of {expected} bytes")]
    ShortWrite {
        written: u64,
        expected: u64,
        #[source]
        source: Option<io::Error>,
    },
}

/// Overwrite `bytes` at absolute `offset` in an existing file.
///
/// The file is opened read+write without truncation and is never created.
/// Bytes outside the patched range are left untouched and the length is
/// unchanged unless the range ends past EOF, in which case the host extends
/// the file; the gap, if any, is host-defined and not zero-filled here.
///
/// A failed seek counts as a write of zero bytes. The descriptor is scoped
/// to this function and released on every return path.
pub fn patch_in_place(path: &Path, offset: u64, bytes: &[u8]) -> Result<(), PatchError> {
    let expected = bytes.len() as u64;

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| PatchError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    if let Err(source) = file.seek(SeekFrom::Start(offset)) {
        return Err(PatchError::ShortWrite {
            written: 0,
            expected,
            source: Some(source),
        });
    }

    let mut written = 0usize;
    let failure = loop {
        if written == bytes.len() {
            break None;
        }
        match file.write(&bytes[written..]) {
            Ok(0) => break None,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => break Some(e),
        }
    };

    if failure.is_some() || written < bytes.len() {
        return Err(PatchError::ShortWrite {
            written: written as u64,
            expected,
            source: failure,
        });
    }

    file.flush().map_err(|source| PatchError::ShortWrite {
        written: written as u64,
        expected,
        source: Some(source),
    })
}
