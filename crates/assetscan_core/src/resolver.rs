use log::trace;
use path_clean::clean;

/// Strip every leading `.` and `/` from a captured reference string.
///
/// Markup-include and data-reference captures are keyed by this stripped
/// form without further resolution, so `src="./b.js"` and a module
/// `import "./b.js"` only collide on the same key when the strings already
/// agree. Known limitation, kept on purpose: unifying the two would change
/// matching semantics downstream consumers rely on.
pub fn strip_dot_slash(raw: &str) -> &str {
    raw.trim_start_matches(['.', '/'])
}

/// Lexically resolve a relative reference against the referrer's
/// root-relative directory.
///
/// Joins, collapses `.`/`..` segments, and normalizes to forward slashes.
/// No filesystem access; a canonical input resolves to itself.
pub fn resolve(referrer_dir: &str, raw: &str) -> String {
    let joined = if referrer_dir.is_empty() {
        raw.to_string()
    } else {
        format!("{referrer_dir}/{raw}")
    };
    let resolved = clean(&joined).to_string_lossy().replace('\\', "/");
    trace!("Resolved '{}' against '{}' -> '{}'", raw, referrer_dir, resolved);
    resolved
}
