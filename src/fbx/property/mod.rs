use crate::fbx::bytes::{Cursor, Writer};
use crate::fbx::compression::{deflate, inflate_exact};
use crate::fbx::{FbxError, Result};

/// Ceiling on a single decoded array payload.
const MAX_ARRAY_BYTES: usize = 512 * 1024 * 1024;

/// One typed property value attached to a node.
///
/// Each variant maps to exactly one wire type code; the enum is matched
/// exhaustively at every decode/encode/render site so a new code cannot be
/// added without the compiler pointing at every site that must handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
	/// `Y` — two-byte signed integer.
	I16(i16),
	/// `C` — boolean stored as one byte (`B` is accepted on read).
	Bool(bool),
	/// `I` — four-byte signed integer.
	I32(i32),
	/// `F` — single-precision IEEE 754 number.
	F32(f32),
	/// `D` — double-precision IEEE 754 number.
	F64(f64),
	/// `L` — eight-byte signed integer.
	I64(i64),
	/// `b` — array of one-byte booleans.
	BoolArray(Vec<bool>),
	/// `i` — array of four-byte signed integers.
	I32Array(Vec<i32>),
	/// `f` — array of single-precision numbers.
	F32Array(Vec<f32>),
	/// `d` — array of double-precision numbers.
	F64Array(Vec<f64>),
	/// `l` — array of eight-byte signed integers.
	I64Array(Vec<i64>),
	/// `S` — length-prefixed byte string.
	///
	/// FBX declares this as text but guarantees no encoding, so the payload
	/// stays raw bytes end to end.
	String(Vec<u8>),
	/// `R` — length-prefixed raw byte blob.
	Raw(Vec<u8>),
}

impl Property {
	/// Return the wire type code for this value.
	pub fn type_code(&self) -> u8 {
		match self {
			Self::I16(_) => b'Y',
			Self::Bool(_) => b'C',
			Self::I32(_) => b'I',
			Self::F32(_) => b'F',
			Self::F64(_) => b'D',
			Self::I64(_) => b'L',
			Self::BoolArray(_) => b'b',
			Self::I32Array(_) => b'i',
			Self::F32Array(_) => b'f',
			Self::F64Array(_) => b'd',
			Self::I64Array(_) => b'l',
			Self::String(_) => b'S',
			Self::Raw(_) => b'R',
		}
	}

	/// Return `true` for the five typed-array variants.
	pub fn is_array(&self) -> bool {
		matches!(
			self,
			Self::BoolArray(_) | Self::I32Array(_) | Self::F32Array(_) | Self::F64Array(_) | Self::I64Array(_)
		)
	}

	/// Build a string property from text, stored as raw bytes.
	pub fn from_text(text: &str) -> Self {
		Self::String(text.as_bytes().to_vec())
	}

	/// Decode one property from cursor position.
	pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		let code = cursor.read_u8()?;
		match code {
			b'Y' => Ok(Self::I16(cursor.read_i16()?)),
			b'C' | b'B' => Ok(Self::Bool(cursor.read_u8()? != 0)),
			b'I' => Ok(Self::I32(cursor.read_i32()?)),
			b'F' => Ok(Self::F32(cursor.read_f32()?)),
			b'D' => Ok(Self::F64(cursor.read_f64()?)),
			b'L' => Ok(Self::I64(cursor.read_i64()?)),
			b'S' => Ok(Self::String(decode_blob(cursor)?)),
			b'R' => Ok(Self::Raw(decode_blob(cursor)?)),
			b'b' => Ok(Self::BoolArray(decode_array(cursor, 1, |elems| Ok(elems.read_u8()? != 0))?)),
			b'i' => Ok(Self::I32Array(decode_array(cursor, 4, |elems| elems.read_i32())?)),
			b'f' => Ok(Self::F32Array(decode_array(cursor, 4, |elems| elems.read_f32())?)),
			b'd' => Ok(Self::F64Array(decode_array(cursor, 8, |elems| elems.read_f64())?)),
			b'l' => Ok(Self::I64Array(decode_array(cursor, 8, |elems| elems.read_i64())?)),
			code => Err(FbxError::UnknownPropertyType { code }),
		}
	}

	/// Encode this property, compressing array payloads when `compress` is set.
	pub fn encode(&self, writer: &mut Writer, compress: bool) -> Result<()> {
		writer.write_u8(self.type_code());
		match self {
			Self::I16(value) => writer.write_i16(*value),
			Self::Bool(value) => writer.write_u8(u8::from(*value)),
			Self::I32(value) => writer.write_i32(*value),
			Self::F32(value) => writer.write_f32(*value),
			Self::F64(value) => writer.write_f64(*value),
			Self::I64(value) => writer.write_i64(*value),
			Self::String(bytes) | Self::Raw(bytes) => encode_blob(writer, bytes)?,
			Self::BoolArray(values) => {
				encode_array(writer, values.len(), compress, |elems| {
					for value in values {
						elems.write_u8(u8::from(*value));
					}
				})?;
			}
			Self::I32Array(values) => {
				encode_array(writer, values.len(), compress, |elems| {
					for value in values {
						elems.write_i32(*value);
					}
				})?;
			}
			Self::F32Array(values) => {
				encode_array(writer, values.len(), compress, |elems| {
					for value in values {
						elems.write_f32(*value);
					}
				})?;
			}
			Self::F64Array(values) => {
				encode_array(writer, values.len(), compress, |elems| {
					for value in values {
						elems.write_f64(*value);
					}
				})?;
			}
			Self::I64Array(values) => {
				encode_array(writer, values.len(), compress, |elems| {
					for value in values {
						elems.write_i64(*value);
					}
				})?;
			}
		}
		Ok(())
	}
}

fn decode_blob(cursor: &mut Cursor<'_>) -> Result<Vec<u8>> {
	let len = cursor.read_u32()? as usize;
	Ok(cursor.read_exact(len)?.to_vec())
}

fn encode_blob(writer: &mut Writer, bytes: &[u8]) -> Result<()> {
	let len = u32::try_from(bytes.len()).map_err(|_| FbxError::LengthOverflow {
		what: "blob length",
		len: bytes.len() as u64,
	})?;
	writer.write_u32(len);
	writer.write_bytes(bytes);
	Ok(())
}

/// Decode one array property body: header, then either raw elements in place
/// or a zlib stream inflated into a buffer sized to exactly hold the declared
/// element count.
fn decode_array<T, F>(cursor: &mut Cursor<'_>, elem_size: usize, mut read_one: F) -> Result<Vec<T>>
where
	F: FnMut(&mut Cursor<'_>) -> Result<T>,
{
	let array_len = cursor.read_u32()? as usize;
	let encoding = cursor.read_u32()?;
	let compressed_len = cursor.read_u32()? as usize;

	let raw_len = array_len.checked_mul(elem_size).ok_or(FbxError::LengthOverflow {
		what: "array byte length",
		len: array_len as u64,
	})?;
	if raw_len > MAX_ARRAY_BYTES {
		return Err(FbxError::LengthOverflow {
			what: "array byte length",
			len: raw_len as u64,
		});
	}

	if encoding == 0 {
		// Fail before allocating when the declared span cannot fit.
		if raw_len > cursor.remaining() {
			return Err(FbxError::UnexpectedEof {
				at: cursor.pos(),
				need: raw_len,
				rem: cursor.remaining(),
			});
		}
		let mut values = Vec::with_capacity(array_len);
		for _ in 0..array_len {
			values.push(read_one(cursor)?);
		}
		return Ok(values);
	}

	let packed = cursor.read_exact(compressed_len)?;
	let raw = inflate_exact(packed, raw_len)?;

	let mut elems = Cursor::new(&raw);
	let mut values = Vec::with_capacity(array_len);
	for _ in 0..array_len {
		values.push(read_one(&mut elems)?);
	}
	Ok(values)
}

fn encode_array<F>(writer: &mut Writer, count: usize, compress: bool, fill: F) -> Result<()>
where
	F: FnOnce(&mut Writer),
{
	let array_len = u32::try_from(count).map_err(|_| FbxError::LengthOverflow {
		what: "array length",
		len: count as u64,
	})?;

	let mut elems = Writer::new();
	fill(&mut elems);
	let raw = elems.into_bytes();

	writer.write_u32(array_len);
	if compress {
		let packed = deflate(&raw)?;
		let packed_len = u32::try_from(packed.len()).map_err(|_| FbxError::LengthOverflow {
			what: "compressed length",
			len: packed.len() as u64,
		})?;
		writer.write_u32(1);
		writer.write_u32(packed_len);
		writer.write_bytes(&packed);
	} else {
		let raw_len = u32::try_from(raw.len()).map_err(|_| FbxError::LengthOverflow {
			what: "array byte length",
			len: raw.len() as u64,
		})?;
		writer.write_u32(0);
		writer.write_u32(raw_len);
		writer.write_bytes(&raw);
	}
	Ok(())
}
