//! Statusline markup understood by the host.

/// Tells the host to stretch the remaining width at this point.
pub const FLEX_GAP: &str = "%=";

/// Marker switching subsequent text to `group`.
pub fn highlight_marker(group: &str) -> String {
	format!("%#{group}#")
}

/// Appends the marker for `group` to `out`.
pub(crate) fn push_highlight(out: &mut String, group: &str) {
	out.push_str("%#");
	out.push_str(group);
	out.push('#');
}
