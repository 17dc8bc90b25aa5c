use std::path::PathBuf;

use fbxdoc::fbx::{Document, Node, Result};
use serde::Serialize;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct InfoJson {
	path: String,
	version: u32,
	node_count: usize,
	nodes: Vec<NodeSummaryJson>,
}

#[derive(Serialize)]
struct NodeSummaryJson {
	name: String,
	properties: usize,
	children: usize,
}

/// Print version and top-level node statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let document = Document::open(&path)?;

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			version: document.version,
			node_count: document.nodes.len(),
			nodes: document.nodes.iter().map(summarize).collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("version: {}", document.version);
	println!("nodes: {}", document.nodes.len());
	for node in &document.nodes {
		println!(
			"  {}: {} properties, {} children",
			node.name_lossy(),
			node.properties.len(),
			node.children.len()
		);
	}
	Ok(())
}

fn summarize(node: &Node) -> NodeSummaryJson {
	NodeSummaryJson {
		name: node.name_lossy(),
		properties: node.properties.len(),
		children: node.children.len(),
	}
}
