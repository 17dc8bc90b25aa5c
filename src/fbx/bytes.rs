use crate::fbx::{FbxError, Result};

/// Bounded forward-only cursor over an immutable byte slice.
///
/// All multi-byte reads are little-endian, converted through `from_le_bytes`
/// so the host byte order never leaks into callers.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(FbxError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a single byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		let raw = self.read_exact(2)?;
		let mut buf = [0_u8; 2];
		buf.copy_from_slice(raw);
		Ok(i16::from_le_bytes(buf))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(i32::from_le_bytes(buf))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(i64::from_le_bytes(buf))
	}

	/// Read a little-endian IEEE 754 `f32`.
	pub fn read_f32(&mut self) -> Result<f32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(f32::from_le_bytes(buf))
	}

	/// Read a little-endian IEEE 754 `f64`.
	pub fn read_f64(&mut self) -> Result<f64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(f64::from_le_bytes(buf))
	}
}

/// Append-only little-endian writer over an owned byte buffer.
#[derive(Default)]
pub struct Writer {
	out: Vec<u8>,
}

impl Writer {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Return bytes written so far.
	pub fn len(&self) -> usize {
		self.out.len()
	}

	/// Return `true` when nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.out.is_empty()
	}

	/// Consume the writer and return its buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.out
	}

	/// Borrow the buffer written so far.
	pub fn bytes(&self) -> &[u8] {
		&self.out
	}

	/// Append raw bytes verbatim.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.out.extend_from_slice(bytes);
	}

	/// Append a single byte.
	pub fn write_u8(&mut self, value: u8) {
		self.out.push(value);
	}

	/// Append a little-endian `i16`.
	pub fn write_i16(&mut self, value: i16) {
		self.out.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `u32`.
	pub fn write_u32(&mut self, value: u32) {
		self.out.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `i32`.
	pub fn write_i32(&mut self, value: i32) {
		self.out.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `i64`.
	pub fn write_i64(&mut self, value: i64) {
		self.out.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian IEEE 754 `f32`.
	pub fn write_f32(&mut self, value: f32) {
		self.out.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian IEEE 754 `f64`.
	pub fn write_f64(&mut self, value: f64) {
		self.out.extend_from_slice(&value.to_le_bytes());
	}
}

#[cfg(test)]
mod tests {
	use crate::fbx::FbxError;
	use crate::fbx::bytes::{Cursor, Writer};

	#[test]
	fn reads_little_endian_primitives() {
		let mut writer = Writer::new();
		writer.write_i16(-2);
		writer.write_u32(0xDEAD_BEEF);
		writer.write_i64(-9_000_000_000);
		writer.write_f64(1.5);
		let bytes = writer.into_bytes();

		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_i16().expect("i16 reads"), -2);
		assert_eq!(cursor.read_u32().expect("u32 reads"), 0xDEAD_BEEF);
		assert_eq!(cursor.read_i64().expect("i64 reads"), -9_000_000_000);
		assert_eq!(cursor.read_f64().expect("f64 reads"), 1.5);
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn read_past_end_fails_with_eof() {
		let mut cursor = Cursor::new(&[0x01, 0x02]);
		let err = cursor.read_u32().expect_err("short read should fail");
		assert!(matches!(err, FbxError::UnexpectedEof { at: 0, need: 4, rem: 2 }));
	}

	#[test]
	fn float_bytes_match_wire_layout() {
		let mut writer = Writer::new();
		writer.write_f32(1.0);
		assert_eq!(writer.bytes(), &[0x00, 0x00, 0x80, 0x3F]);
	}
}
