//! Canned scene-metadata skeleton offered as a builder convenience.
//!
//! This mirrors the fixed `FBXHeaderExtension` subtree exporters emit; it
//! carries no invariants beyond what the node and property codecs already
//! guarantee.

use crate::fbx::node::Node;
use crate::fbx::property::Property;

const CREATOR: &str = "Blender (stable FBX IO) - 2.78 (sub 0) - 3.7.7";
const APPLICATION_VENDOR: &str = "Blender Foundation";
const APPLICATION_NAME: &str = "Blender (stable FBX IO)";
const EPOCH_GMT: &str = "01/01/1970 00:00:00.000";
const DOCUMENT_URL: &str = "/foobar.fbx";

/// Build the standard `FBXHeaderExtension` subtree for a document version.
pub fn basic_structure(version: u32) -> Node {
	let mut header = Node::new("FBXHeaderExtension");
	header.add_property_node("FBXHeaderVersion", Property::I32(1003));
	header.add_property_node("FBXVersion", Property::I32(version as i32));
	header.add_property_node("EncryptionType", Property::I32(0));
	header.add_child(creation_time_stamp());
	header.add_property_node("Creator", Property::from_text(CREATOR));
	header.add_child(scene_info());
	header
}

fn creation_time_stamp() -> Node {
	let mut stamp = Node::new("CreationTimeStamp");
	stamp.add_property_node("Version", Property::I32(1000));
	stamp.add_property_node("Year", Property::I32(2017));
	stamp.add_property_node("Month", Property::I32(5));
	stamp.add_property_node("Day", Property::I32(2));
	stamp.add_property_node("Hour", Property::I32(14));
	stamp.add_property_node("Minute", Property::I32(11));
	stamp.add_property_node("Second", Property::I32(46));
	stamp.add_property_node("Millisecond", Property::I32(917));
	stamp
}

fn scene_info() -> Node {
	let mut info = Node::new("SceneInfo");
	// Object name uses the `Name\x00\x01Class` convention.
	let mut object_name = b"GlobalInfo".to_vec();
	object_name.extend_from_slice(&[0x00, 0x01]);
	object_name.extend_from_slice(b"SceneInfo");
	info.add_property(Property::String(object_name));
	info.add_property(Property::from_text("UserData"));
	info.add_property_node("Type", Property::from_text("UserData"));
	info.add_property_node("Version", Property::I32(100));
	info.add_child(metadata());
	info.add_child(properties70());
	info
}

fn metadata() -> Node {
	let mut meta = Node::new("MetaData");
	meta.add_property_node("Version", Property::I32(100));
	for field in ["Title", "Subject", "Author", "Keywords", "Revision", "Comment"] {
		meta.add_property_node(field, Property::from_text(""));
	}
	meta
}

fn properties70() -> Node {
	let mut props = Node::new("Properties70");
	props.add_child(p_entry(&["DocumentUrl", "KString", "Url", "", DOCUMENT_URL]));
	props.add_child(p_entry(&["SrcDocumentUrl", "KString", "Url", "", DOCUMENT_URL]));
	props.add_child(p_entry(&["Original", "Compound", "", ""]));
	props.add_child(p_entry(&["Original|ApplicationVendor", "KString", "", "", APPLICATION_VENDOR]));
	props.add_child(p_entry(&["Original|ApplicationName", "KString", "", "", APPLICATION_NAME]));
	props.add_child(p_entry(&["Original|ApplicationVersion", "KString", "", "", "2.78 (sub 0)"]));
	props.add_child(p_entry(&["Original|DateTime_GMT", "DateTime", "", "", EPOCH_GMT]));
	props.add_child(p_entry(&["Original|FileName", "KString", "", "", DOCUMENT_URL]));
	props.add_child(p_entry(&["LastSaved", "Compound", "", ""]));
	props.add_child(p_entry(&["LastSaved|ApplicationVendor", "KString", "", "", APPLICATION_VENDOR]));
	props.add_child(p_entry(&["LastSaved|ApplicationName", "KString", "", "", APPLICATION_NAME]));
	props.add_child(p_entry(&["LastSaved|DateTime_GMT", "DateTime", "", "", EPOCH_GMT]));
	props
}

fn p_entry(values: &[&str]) -> Node {
	let mut entry = Node::new("P");
	for value in values {
		entry.add_property(Property::from_text(value));
	}
	entry
}

#[cfg(test)]
mod tests {
	use crate::fbx::property::Property;
	use crate::fbx::template::basic_structure;

	#[test]
	fn header_extension_carries_version_property() {
		let header = basic_structure(7400);
		assert_eq!(header.name, b"FBXHeaderExtension");

		let version_node = header
			.children
			.iter()
			.find(|child| child.name == b"FBXVersion")
			.expect("FBXVersion node present");
		assert_eq!(version_node.properties, vec![Property::I32(7400)]);
	}

	#[test]
	fn properties70_entries_are_p_nodes() {
		let header = basic_structure(7400);
		let scene_info = header
			.children
			.iter()
			.find(|child| child.name == b"SceneInfo")
			.expect("SceneInfo present");
		let props = scene_info
			.children
			.iter()
			.find(|child| child.name == b"Properties70")
			.expect("Properties70 present");

		assert_eq!(props.children.len(), 12);
		assert!(props.children.iter().all(|child| child.name == b"P"));
	}
}
