use std::fs;
use std::path::Path;

use crate::fbx::bytes::Writer;
use crate::fbx::footer::{FooterTimestamp, footer_bytes};
use crate::fbx::node::{Node, write_sentinel};
use crate::fbx::{FbxError, Result};

/// Leading magic string of every FBX binary file.
pub const FBX_MAGIC: &[u8] = b"Kaydara FBX Binary  ";

/// Fixed bytes following the magic string.
const MAGIC_TAIL: [u8; 3] = [0x00, 0x1A, 0x00];

/// Byte offset of the version field (magic 20 + tail 3).
const VERSION_OFFSET: usize = 23;

/// Byte offset of the first node record (magic 20 + tail 3 + version 4).
const FIRST_NODE_OFFSET: usize = 27;

/// Highest file version this codec accepts.
pub const MAX_VERSION: u32 = 7400;

/// Write-side knobs for document serialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
	/// Deflate array property payloads instead of writing them raw.
	pub compress_arrays: bool,
	/// Timestamp folded into the footer trailer.
	pub timestamp: FooterTimestamp,
}

/// Top-level FBX container: format version plus the ordered node forest.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	/// File format version, `7400` by default.
	pub version: u32,
	/// Ordered top-level node records.
	pub nodes: Vec<Node>,
}

impl Default for Document {
	fn default() -> Self {
		Self {
			version: MAX_VERSION,
			nodes: Vec::new(),
		}
	}
}

impl Document {
	/// Create an empty document at the default version.
	pub fn new() -> Self {
		Self::default()
	}

	/// Read and parse an FBX binary file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::parse(&bytes)
	}

	/// Parse a document from raw bytes.
	///
	/// Top-level records are consumed from offset 27 until the null sentinel,
	/// which is discarded. Trailing footer bytes are not validated; the
	/// trailer carries no structural information.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		check_magic(bytes)?;

		let version_raw = bytes.get(VERSION_OFFSET..FIRST_NODE_OFFSET).ok_or(FbxError::UnexpectedEof {
			at: VERSION_OFFSET,
			need: 4,
			rem: bytes.len().saturating_sub(VERSION_OFFSET),
		})?;
		let mut version_buf = [0_u8; 4];
		version_buf.copy_from_slice(version_raw);
		let version = u32::from_le_bytes(version_buf);
		if version > MAX_VERSION {
			return Err(FbxError::UnsupportedVersion {
				version,
				max: MAX_VERSION,
			});
		}

		let mut nodes = Vec::new();
		let mut offset = FIRST_NODE_OFFSET;
		loop {
			let (node, consumed) = Node::read_at(bytes, offset)?;
			offset += consumed;
			if node.is_null() {
				break;
			}
			nodes.push(node);
		}

		Ok(Self { version, nodes })
	}

	/// Serialize the document to its wire form.
	pub fn to_bytes(&self, options: &WriteOptions) -> Result<Vec<u8>> {
		let mut writer = Writer::new();
		writer.write_bytes(FBX_MAGIC);
		writer.write_bytes(&MAGIC_TAIL);
		writer.write_u32(self.version);

		let mut offset = FIRST_NODE_OFFSET;
		for node in &self.nodes {
			offset += node.encode_into(&mut writer, offset, options.compress_arrays)?;
		}
		write_sentinel(&mut writer);
		writer.write_bytes(&footer_bytes(&options.timestamp));

		Ok(writer.into_bytes())
	}

	/// Serialize and write the document to disk.
	pub fn save(&self, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
		let bytes = self.to_bytes(options)?;
		fs::write(path, bytes)?;
		Ok(())
	}

	/// Append a top-level node.
	pub fn add_node(&mut self, node: Node) -> &mut Self {
		self.nodes.push(node);
		self
	}

	/// Append the canned scene-metadata skeleton for this document's version.
	pub fn append_basic_structure(&mut self) -> &mut Self {
		self.add_node(crate::fbx::template::basic_structure(self.version))
	}

	/// Find the first top-level node with the given name.
	pub fn find_node(&self, name: &[u8]) -> Option<&Node> {
		self.nodes.iter().find(|node| node.name == name)
	}
}

fn check_magic(bytes: &[u8]) -> Result<()> {
	let head = bytes.get(..VERSION_OFFSET).ok_or(FbxError::InvalidMagic)?;
	if &head[..FBX_MAGIC.len()] != FBX_MAGIC || head[FBX_MAGIC.len()..] != MAGIC_TAIL {
		return Err(FbxError::InvalidMagic);
	}
	Ok(())
}

#[cfg(test)]
mod tests;
