use crate::fbx::document::{Document, MAX_VERSION, WriteOptions};
use crate::fbx::footer::FooterTimestamp;
use crate::fbx::node::{NODE_HEADER_LEN, Node};
use crate::fbx::property::Property;
use crate::fbx::FbxError;

fn sample_document() -> Document {
	let mut geometry = Node::new("Geometry");
	geometry.add_property(Property::I64(1001));
	geometry.add_property_node("Vertices", Property::F64Array(vec![0.0, 1.0, -1.0, 2.5]));
	geometry.add_property_node("Indices", Property::I32Array(vec![0, 1, 2]));

	let mut document = Document::new();
	document.add_node(geometry);
	document.add_node(Node::new("Connections"));
	document
}

#[test]
fn default_document_targets_latest_supported_version() {
	assert_eq!(Document::new().version, 7400);
	assert!(Document::new().nodes.is_empty());
}

#[test]
fn round_trips_structure_exactly() {
	let document = sample_document();
	let bytes = document.to_bytes(&WriteOptions::default()).expect("document encodes");
	let decoded = Document::parse(&bytes).expect("document decodes");
	assert_eq!(decoded, document);
}

#[test]
fn round_trips_with_compressed_arrays() {
	let document = sample_document();
	let options = WriteOptions {
		compress_arrays: true,
		..WriteOptions::default()
	};
	let bytes = document.to_bytes(&options).expect("document encodes");
	let decoded = Document::parse(&bytes).expect("document decodes");
	assert_eq!(decoded, document);
}

#[test]
fn wire_layout_has_magic_version_sentinel_footer() {
	let document = sample_document();
	let bytes = document.to_bytes(&WriteOptions::default()).expect("document encodes");

	assert_eq!(&bytes[..20], b"Kaydara FBX Binary  ");
	assert_eq!(&bytes[20..23], &[0x00, 0x1A, 0x00]);
	assert_eq!(&bytes[23..27], &7400_u32.to_le_bytes());

	let trailer_start = bytes.len() - 16;
	let sentinel_start = trailer_start - NODE_HEADER_LEN;
	assert_eq!(&bytes[sentinel_start..trailer_start], &[0_u8; NODE_HEADER_LEN]);
}

#[test]
fn sentinel_does_not_become_a_phantom_node() {
	let document = sample_document();
	let bytes = document.to_bytes(&WriteOptions::default()).expect("document encodes");
	let decoded = Document::parse(&bytes).expect("document decodes");
	assert_eq!(decoded.nodes.len(), 2);
	assert!(decoded.nodes.iter().all(|node| !node.is_null()));
}

#[test]
fn bad_magic_fails() {
	let mut bytes = sample_document().to_bytes(&WriteOptions::default()).expect("document encodes");
	bytes[0] = b'X';
	let err = Document::parse(&bytes).expect_err("bad magic should fail");
	assert!(matches!(err, FbxError::InvalidMagic));
}

#[test]
fn short_input_fails_as_bad_magic() {
	let err = Document::parse(b"Kaydara").expect_err("short input should fail");
	assert!(matches!(err, FbxError::InvalidMagic));
}

#[test]
fn newer_version_fails() {
	let mut bytes = sample_document().to_bytes(&WriteOptions::default()).expect("document encodes");
	bytes[23..27].copy_from_slice(&7500_u32.to_le_bytes());
	let err = Document::parse(&bytes).expect_err("version 7500 should fail");
	assert!(matches!(err, FbxError::UnsupportedVersion { version: 7500, max: MAX_VERSION }));
}

#[test]
fn footer_timestamp_changes_only_the_trailer() {
	let document = sample_document();
	let plain = document.to_bytes(&WriteOptions::default()).expect("document encodes");
	let stamped = document
		.to_bytes(&WriteOptions {
			compress_arrays: false,
			timestamp: FooterTimestamp {
				year: 2017,
				month: 5,
				day: 2,
				hour: 14,
				minute: 11,
				second: 46,
				millisecond: 917,
			},
		})
		.expect("document encodes");

	assert_eq!(plain.len(), stamped.len());
	assert_eq!(&plain[..plain.len() - 16], &stamped[..stamped.len() - 16]);
	assert_ne!(&plain[plain.len() - 16..], &stamped[stamped.len() - 16..]);
}

#[test]
fn find_node_matches_by_name() {
	let document = sample_document();
	assert!(document.find_node(b"Geometry").is_some());
	assert!(document.find_node(b"Missing").is_none());
}

#[test]
fn basic_structure_round_trips() {
	let mut document = Document::new();
	document.append_basic_structure();
	let bytes = document.to_bytes(&WriteOptions::default()).expect("document encodes");
	let decoded = Document::parse(&bytes).expect("document decodes");
	assert_eq!(decoded, document);

	let header = decoded.find_node(b"FBXHeaderExtension").expect("header extension present");
	assert!(header.children.iter().any(|child| child.name == b"CreationTimeStamp"));
}
