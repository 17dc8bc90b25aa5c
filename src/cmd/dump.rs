use std::path::PathBuf;

use fbxdoc::fbx::{Document, Node, Property, Result};
use serde_json::{Value, json};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Print the decoded node tree as JSON.
pub fn run(args: Args) -> Result<()> {
	let document = Document::open(&args.path)?;

	let payload = json!({
		"version": document.version,
		"children": document.nodes.iter().map(node_json).collect::<Vec<_>>(),
	});
	emit_json(&payload);
	Ok(())
}

fn node_json(node: &Node) -> Value {
	json!({
		"name": node.name_lossy(),
		"properties": node.properties.iter().map(property_json).collect::<Vec<_>>(),
		"children": node.children.iter().map(node_json).collect::<Vec<_>>(),
	})
}

fn property_json(property: &Property) -> Value {
	let tag = char::from(property.type_code()).to_string();
	let value = match property {
		Property::I16(value) => json!(value),
		Property::Bool(value) => json!(value),
		Property::I32(value) => json!(value),
		Property::F32(value) => json!(value),
		Property::F64(value) => json!(value),
		Property::I64(value) => json!(value),
		Property::BoolArray(values) => json!(values),
		Property::I32Array(values) => json!(values),
		Property::F32Array(values) => json!(values),
		Property::F64Array(values) => json!(values),
		Property::I64Array(values) => json!(values),
		Property::String(bytes) => json!(String::from_utf8_lossy(bytes)),
		Property::Raw(bytes) => json!(bytes),
	};
	json!({ "type": tag, "value": value })
}
