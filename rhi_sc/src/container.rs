//! Bytecode output encoding
//!
//! Two layouts:
//!
//! - **Memory**: the raw bytecode, nothing else. Handed straight to a graphics
//!   API loader.
//! - **Container**: a little-endian `u32` byte length, the bytecode, then a
//!   16-byte all-zero trailer reserved for metadata. Total size is `N + 20`.
//!
//! ```text
//! offset 0   : u32 LE   = N
//! offset 4   : N bytes  = bytecode
//! offset 4+N : 16 bytes = 0
//! ```

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Size of the length prefix
pub const HEADER_SIZE: usize = 4;

/// Size of the reserved zero trailer (four `u32` words)
pub const TRAILER_SIZE: usize = 16;

/// Bytes a container adds around the bytecode
pub const CONTAINER_OVERHEAD: usize = HEADER_SIZE + TRAILER_SIZE;

/// Output layout for buffer compiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputRepresentation {
    /// Raw bytecode
    Memory,
    /// Length-prefixed bytecode followed by a zero trailer
    Container,
}

impl OutputRepresentation {
    /// Map the `memory_repr` flag used by buffer compiles
    pub fn from_memory_flag(memory_repr: bool) -> Self {
        if memory_repr {
            OutputRepresentation::Memory
        } else {
            OutputRepresentation::Container
        }
    }

    /// Bytes added around the bytecode
    pub fn overhead(self) -> usize {
        match self {
            OutputRepresentation::Memory => 0,
            OutputRepresentation::Container => CONTAINER_OVERHEAD,
        }
    }
}

/// Byte order of the machine the encoder runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEndian {
    Little,
    Big,
}

impl HostEndian {
    /// Byte order of the current target
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            HostEndian::Big
        } else {
            HostEndian::Little
        }
    }
}

/// Little-endian bytes of `len` starting from the host's in-memory layout
///
/// A big-endian host stores the most significant byte first, so its bytes
/// are reversed before they are written.
pub fn length_prefix(len: u32, host: HostEndian) -> [u8; 4] {
    let mut bytes = match host {
        HostEndian::Little => len.to_le_bytes(),
        HostEndian::Big => len.to_be_bytes(),
    };
    if host == HostEndian::Big {
        bytes.reverse();
    }
    bytes
}

/// Encode bytecode in the requested layout
///
/// The output is allocated once at its final size.
///
/// # Errors
///
/// Returns `Error::InvalidContainer` if a container is requested for
/// bytecode longer than `u32::MAX` bytes.
pub fn encode(bytecode: &[u8], representation: OutputRepresentation) -> Result<Vec<u8>> {
    encode_for_host(bytecode, representation, HostEndian::native())
}

/// `encode` with an explicit host byte order
pub fn encode_for_host(
    bytecode: &[u8],
    representation: OutputRepresentation,
    host: HostEndian,
) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(bytecode.len() + representation.overhead());

    match representation {
        OutputRepresentation::Memory => output.extend_from_slice(bytecode),
        OutputRepresentation::Container => {
            let len = u32::try_from(bytecode.len()).map_err(|_| {
                Error::InvalidContainer(format!(
                    "bytecode of {} bytes does not fit a u32 length prefix",
                    bytecode.len()
                ))
            })?;
            output.extend_from_slice(&length_prefix(len, host));
            output.extend_from_slice(bytecode);
            output.extend_from_slice(&[0u8; TRAILER_SIZE]);
        }
    }

    debug_assert_eq!(output.len(), bytecode.len() + representation.overhead());
    Ok(output)
}

/// Parse a container and return the bytecode it frames
///
/// # Errors
///
/// Returns `Error::InvalidContainer` if the buffer is shorter than the fixed
/// overhead, its length prefix disagrees with its size, or the trailer is
/// not all zero.
pub fn decode_container(bytes: &[u8]) -> Result<&[u8]> {
    if bytes.len() < CONTAINER_OVERHEAD {
        return Err(Error::InvalidContainer(format!(
            "{} bytes is shorter than the {}-byte container overhead",
            bytes.len(),
            CONTAINER_OVERHEAD
        )));
    }

    let mut prefix = [0u8; HEADER_SIZE];
    prefix.copy_from_slice(&bytes[..HEADER_SIZE]);
    let len = u32::from_le_bytes(prefix) as usize;

    let expected = len
        .checked_add(CONTAINER_OVERHEAD)
        .ok_or_else(|| Error::InvalidContainer("length prefix overflows".to_string()))?;
    if bytes.len() != expected {
        return Err(Error::InvalidContainer(format!(
            "length prefix says {} bytes of bytecode, container holds {}",
            len,
            bytes.len() - CONTAINER_OVERHEAD
        )));
    }

    let trailer = &bytes[HEADER_SIZE + len..];
    if trailer.iter().any(|&b| b != 0) {
        return Err(Error::InvalidContainer("reserved trailer is not zero".to_string()));
    }

    Ok(&bytes[HEADER_SIZE..HEADER_SIZE + len])
}

/// Write `bytecode` to `path` as a container
///
/// The container is written to a temporary file next to `path` and renamed
/// into place, so `path` either receives the complete layout or is left
/// untouched.
pub fn write_container_file(path: &Path, bytecode: &[u8]) -> Result<()> {
    let encoded = encode(bytecode, OutputRepresentation::Container)?;
    write_atomically(path, &encoded)
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_error = |e: std::io::Error| Error::Io(format!("cannot write '{}': {}", path.display(), e));

    // Each writer gets its own uniquely named temporary, removed on drop
    // unless it is persisted.
    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    temp.write_all(bytes).map_err(io_error)?;
    temp.as_file().sync_all().map_err(io_error)?;
    temp.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
