use serde::Serialize;

/// Serialize a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(rendered) => println!("{rendered}"),
		Err(err) => eprintln!("error: json render failed: {err}"),
	}
}
