/// Node tree JSON dump command.
pub mod dump;
/// File-level information command.
pub mod info;
/// Shared output helpers.
pub mod util;
