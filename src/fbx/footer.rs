//! Obfuscated 16-byte trailer written after the terminating sentinel.
//!
//! The transform is the reference tool's, reproduced byte for byte: an
//! ASCII-digit timestamp buffer XOR-chained against two fixed constant
//! blocks. Nothing on the read side consumes it.

/// Fixed source block the chain transform starts from.
const FOOTER_SOURCE: [u8; 16] = [
	0x58, 0xAB, 0xA9, 0xF0, 0x6C, 0xA2, 0xD8, 0x3F, 0x4D, 0x47, 0x49, 0xA3, 0xB4, 0xB2, 0xE7, 0x3D,
];

/// Fixed key block applied between the two timestamp passes.
const FOOTER_KEY: [u8; 16] = [
	0xE2, 0x4F, 0x7B, 0x5F, 0xCD, 0xE4, 0xC8, 0x6D, 0xDB, 0xD8, 0xFB, 0xD7, 0x40, 0x58, 0xC6, 0x78,
];

/// Seed for the XOR chain state.
const CHAIN_SEED: u8 = 0x40;

/// Timestamp fields folded into the footer trailer.
///
/// All fields default to zero, matching the reference tool when no wall-clock
/// time is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FooterTimestamp {
	/// Calendar year (four digits on the wire).
	pub year: u32,
	/// Calendar month.
	pub month: u32,
	/// Day of month.
	pub day: u32,
	/// Hour of day.
	pub hour: u32,
	/// Minute.
	pub minute: u32,
	/// Second.
	pub second: u32,
	/// Millisecond (stored as centiseconds on the wire).
	pub millisecond: u32,
}

/// Produce the 16-byte footer trailer for a timestamp.
pub fn footer_bytes(timestamp: &FooterTimestamp) -> [u8; 16] {
	let time = time_digits(timestamp);
	let mut out = FOOTER_SOURCE;
	xor_chain(&mut out, &time);
	xor_chain(&mut out, &FOOTER_KEY);
	xor_chain(&mut out, &time);
	out
}

/// Build the 16-byte ASCII-digit time buffer in wire field order.
fn time_digits(timestamp: &FooterTimestamp) -> [u8; 16] {
	let mut out = [0_u8; 16];
	digits(&mut out[0..2], timestamp.second);
	digits(&mut out[2..4], timestamp.month);
	digits(&mut out[4..6], timestamp.hour);
	digits(&mut out[6..8], timestamp.day);
	digits(&mut out[8..10], timestamp.millisecond / 10);
	digits(&mut out[10..14], timestamp.year);
	digits(&mut out[14..16], timestamp.minute);
	out
}

/// Write `value` as ASCII digits, least significant digit first.
fn digits(target: &mut [u8], mut value: u32) {
	for byte in target {
		*byte = (value % 10) as u8 + b'0';
		value /= 10;
	}
}

/// One chained-XOR pass: each output byte feeds the next byte's chain state.
fn xor_chain(block: &mut [u8; 16], key: &[u8; 16]) {
	let mut chain = CHAIN_SEED;
	for (byte, key_byte) in block.iter_mut().zip(key) {
		*byte ^= chain ^ key_byte;
		chain = *byte;
	}
}

#[cfg(test)]
mod tests {
	use crate::fbx::footer::{FooterTimestamp, footer_bytes, time_digits};

	#[test]
	fn time_buffer_layout_is_least_significant_digit_first() {
		let timestamp = FooterTimestamp {
			year: 2017,
			month: 5,
			day: 2,
			hour: 14,
			minute: 11,
			second: 46,
			millisecond: 917,
		};
		assert_eq!(&time_digits(&timestamp), b"6450412019710211");
	}

	#[test]
	fn zero_timestamp_buffer_is_all_ascii_zero() {
		assert_eq!(&time_digits(&FooterTimestamp::default()), b"0000000000000000");
	}

	#[test]
	fn footer_is_deterministic_per_timestamp() {
		let default = footer_bytes(&FooterTimestamp::default());
		assert_eq!(default, footer_bytes(&FooterTimestamp::default()));

		let other = footer_bytes(&FooterTimestamp {
			year: 1999,
			..FooterTimestamp::default()
		});
		assert_ne!(default, other, "different timestamps should obfuscate differently");
	}

	#[test]
	fn chain_state_feeds_forward() {
		// Flipping an early timestamp field must perturb later output bytes,
		// not just the bytes at that field's position.
		let base = footer_bytes(&FooterTimestamp::default());
		let shifted = footer_bytes(&FooterTimestamp {
			second: 1,
			..FooterTimestamp::default()
		});
		assert_ne!(base[15], shifted[15]);
	}
}
