use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FbxError>;

/// Errors produced while reading and writing FBX binary data.
#[derive(Debug, Error)]
pub enum FbxError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// File does not start with the Kaydara FBX binary magic.
	#[error("not an FBX binary file (bad magic)")]
	InvalidMagic,
	/// File declares a version newer than the codec supports.
	#[error("unsupported FBX version {version} (latest supported is {max})")]
	UnsupportedVersion {
		/// Parsed file version.
		version: u32,
		/// Highest version this codec accepts.
		max: u32,
	},
	/// Property tag byte is not one of the 13 recognized type codes.
	#[error("unknown property type code 0x{code:02x}")]
	UnknownPropertyType {
		/// Offending tag byte.
		code: u8,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Node record did not consume exactly the span its header declared.
	#[error("node at offset {start} consumed {consumed} bytes, header declares end offset {end_offset}")]
	NodeOffsetMismatch {
		/// File offset where the node record starts.
		start: usize,
		/// Declared absolute end offset from the record header.
		end_offset: usize,
		/// Bytes actually consumed by the decoder.
		consumed: usize,
	},
	/// Node nesting exceeded the recursion guard.
	#[error("node depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Node name does not fit the one-byte length field.
	#[error("node name too long: {len} bytes (max 255)")]
	NameTooLong {
		/// Offending name length.
		len: usize,
	},
	/// A length or offset does not fit its four-byte wire field.
	#[error("{what} too large for wire format: {len}")]
	LengthOverflow {
		/// Which field overflowed.
		what: &'static str,
		/// Offending value.
		len: u64,
	},
	/// zlib inflate or deflate failed on an array payload.
	#[error("zlib {op} failed: {detail}")]
	CompressionFailed {
		/// Operation that failed (`inflate` or `deflate`).
		op: &'static str,
		/// Underlying failure description.
		detail: String,
	},
	/// Inflated array payload did not match the declared element count.
	#[error("decompressed size mismatch: expected {expected} bytes, got {actual}")]
	DecompressedSizeMismatch {
		/// Byte length implied by the array header.
		expected: usize,
		/// Byte length actually produced by inflate.
		actual: usize,
	},
}
