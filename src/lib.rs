//! Public library API for reading and writing Kaydara FBX binary files.

/// FBX binary container parsing, node/property codec, and document assembly.
pub mod fbx;
