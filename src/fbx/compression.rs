use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::fbx::{FbxError, Result};

/// Inflate a zlib stream into a buffer of exactly `expected_len` bytes.
///
/// The caller already knows the decoded size from the array header, so any
/// deviation (short stream, or a stream that keeps producing past the expected
/// size) is a decode error rather than a reason to grow the buffer.
pub fn inflate_exact(input: &[u8], expected_len: usize) -> Result<Vec<u8>> {
	let mut decoder = ZlibDecoder::new(input);
	let mut out = vec![0_u8; expected_len];
	let mut filled = 0;

	while filled < expected_len {
		let read = decoder.read(&mut out[filled..]).map_err(|err| FbxError::CompressionFailed {
			op: "inflate",
			detail: err.to_string(),
		})?;
		if read == 0 {
			return Err(FbxError::DecompressedSizeMismatch {
				expected: expected_len,
				actual: filled,
			});
		}
		filled += read;
	}

	// The stream must be exhausted once the expected bytes are out.
	let mut probe = [0_u8; 1];
	let extra = decoder.read(&mut probe).map_err(|err| FbxError::CompressionFailed {
		op: "inflate",
		detail: err.to_string(),
	})?;
	if extra != 0 {
		return Err(FbxError::DecompressedSizeMismatch {
			expected: expected_len,
			actual: expected_len + extra,
		});
	}

	Ok(out)
}

/// Deflate raw bytes into a zlib stream at the default compression level.
pub fn deflate(input: &[u8]) -> Result<Vec<u8>> {
	let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
	encoder.write_all(input).map_err(|err| FbxError::CompressionFailed {
		op: "deflate",
		detail: err.to_string(),
	})?;
	encoder.finish().map_err(|err| FbxError::CompressionFailed {
		op: "deflate",
		detail: err.to_string(),
	})
}
