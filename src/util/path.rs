//! Path helpers.

/// Last segment of `path` after splitting on `/` or `\`.
///
/// Works the same for POSIX and Windows style paths regardless of the host.
pub fn base_name(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}
