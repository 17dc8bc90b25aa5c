use crate::fbx::bytes::{Cursor, Writer};
use crate::fbx::property::Property;
use crate::fbx::{FbxError, Result};

/// Byte length of the fixed node record header, and of the null sentinel.
pub const NODE_HEADER_LEN: usize = 13;

/// Maximum node nesting depth accepted by the decoder.
pub const MAX_NODE_DEPTH: u32 = 128;

/// One named record in the FBX tree.
///
/// A node owns its subtree: an ordered property list and an ordered child
/// list. The all-empty node (no name, no properties, no children) is the
/// end-of-list sentinel on the wire and never a real data node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
	/// Record name as raw bytes.
	pub name: Vec<u8>,
	/// Ordered property values.
	pub properties: Vec<Property>,
	/// Ordered child records.
	pub children: Vec<Node>,
}

impl Node {
	/// Create an empty node with the given name.
	pub fn new(name: impl Into<Vec<u8>>) -> Self {
		Self {
			name: name.into(),
			properties: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Return `true` iff this is the null sentinel record.
	pub fn is_null(&self) -> bool {
		self.name.is_empty() && self.properties.is_empty() && self.children.is_empty()
	}

	/// Return the name as UTF-8 text, lossily for non-UTF-8 names.
	pub fn name_lossy(&self) -> String {
		String::from_utf8_lossy(&self.name).into_owned()
	}

	/// Append one property value.
	pub fn add_property(&mut self, property: Property) -> &mut Self {
		self.properties.push(property);
		self
	}

	/// Append one child node.
	pub fn add_child(&mut self, child: Node) -> &mut Self {
		self.children.push(child);
		self
	}

	/// Append a named child carrying a single property.
	pub fn add_property_node(&mut self, name: impl Into<Vec<u8>>, property: Property) -> &mut Self {
		let mut child = Node::new(name);
		child.add_property(property);
		self.add_child(child)
	}

	/// Decode one node record from `data` at absolute offset `start`.
	///
	/// Returns the node together with the number of bytes it consumed. The
	/// declared `propertyListLength` governs where children begin; the child
	/// loop is bounded by the declared `endOffset` and terminated by the null
	/// sentinel, which is consumed but not kept.
	pub fn read_at(data: &[u8], start: usize) -> Result<(Self, usize)> {
		Self::read_at_depth(data, start, 0)
	}

	fn read_at_depth(data: &[u8], start: usize, depth: u32) -> Result<(Self, usize)> {
		if depth >= MAX_NODE_DEPTH {
			return Err(FbxError::DepthExceeded { max_depth: MAX_NODE_DEPTH });
		}

		let tail = data.get(start..).ok_or(FbxError::UnexpectedEof {
			at: start,
			need: NODE_HEADER_LEN,
			rem: 0,
		})?;
		let mut cursor = Cursor::new(tail);

		let end_offset = cursor.read_u32()? as usize;
		let num_properties = cursor.read_u32()?;
		let property_list_len = cursor.read_u32()? as usize;
		let name_len = cursor.read_u8()? as usize;
		let name = cursor.read_exact(name_len)?.to_vec();

		// Every encoded property takes at least two bytes, so a count beyond
		// the remaining span is corrupt before any decode is attempted.
		if num_properties as usize > cursor.remaining() {
			return Err(FbxError::UnexpectedEof {
				at: start + cursor.pos(),
				need: num_properties as usize,
				rem: cursor.remaining(),
			});
		}

		let mut properties = Vec::with_capacity(num_properties as usize);
		for _ in 0..num_properties {
			properties.push(Property::decode(&mut cursor)?);
		}

		// The declared property list length governs offset arithmetic, not
		// the byte count the property decoder happened to consume.
		let mut consumed = NODE_HEADER_LEN + name_len + property_list_len;

		let mut node = Self {
			name,
			properties,
			children: Vec::new(),
		};

		if node.is_null() && end_offset == 0 {
			return Ok((node, consumed));
		}

		while start + consumed < end_offset {
			let (child, child_len) = Self::read_at_depth(data, start + consumed, depth + 1)?;
			consumed += child_len;
			if child.is_null() {
				break;
			}
			node.children.push(child);
		}

		if start + consumed != end_offset {
			return Err(FbxError::NodeOffsetMismatch {
				start,
				end_offset,
				consumed,
			});
		}

		Ok((node, consumed))
	}

	/// Encode this record at absolute offset `offset`, appending to `out`.
	///
	/// Property and child payloads are serialized to scratch buffers first so
	/// `endOffset` and `propertyListLength` are known before the header is
	/// written. Returns the number of bytes appended.
	pub fn encode_into(&self, out: &mut Writer, offset: usize, compress: bool) -> Result<usize> {
		if self.is_null() {
			write_sentinel(out);
			return Ok(NODE_HEADER_LEN);
		}

		let name_len = u8::try_from(self.name.len()).map_err(|_| FbxError::NameTooLong { len: self.name.len() })?;

		let mut prop_writer = Writer::new();
		for property in &self.properties {
			property.encode(&mut prop_writer, compress)?;
		}
		let prop_bytes = prop_writer.into_bytes();

		let mut total = NODE_HEADER_LEN + self.name.len() + prop_bytes.len();

		let mut child_writer = Writer::new();
		for child in &self.children {
			total += child.encode_into(&mut child_writer, offset + total, compress)?;
		}
		if !self.children.is_empty() {
			write_sentinel(&mut child_writer);
			total += NODE_HEADER_LEN;
		}

		let end_offset = checked_u32("end offset", (offset + total) as u64)?;
		let num_properties = checked_u32("property count", self.properties.len() as u64)?;
		let property_list_len = checked_u32("property list length", prop_bytes.len() as u64)?;

		out.write_u32(end_offset);
		out.write_u32(num_properties);
		out.write_u32(property_list_len);
		out.write_u8(name_len);
		out.write_bytes(&self.name);
		out.write_bytes(&prop_bytes);
		out.write_bytes(child_writer.bytes());

		Ok(total)
	}
}

/// Append the 13-zero-byte null record.
pub fn write_sentinel(out: &mut Writer) {
	out.write_bytes(&[0_u8; NODE_HEADER_LEN]);
}

fn checked_u32(what: &'static str, value: u64) -> Result<u32> {
	u32::try_from(value).map_err(|_| FbxError::LengthOverflow { what, len: value })
}
