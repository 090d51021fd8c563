//! Input file existence check.
//!
//! Every path is announced with a banner before anything is loaded, and the
//! first missing file ends the run.

use std::io::{self, Write};
use std::path::Path;

/// Rule line printed around each banner.
pub const RULE: &str = "----------------------------";

/// Announce `path` on `out` and report whether it is an existing file.
pub fn does_exist<W: Write>(path: &Path, out: &mut W) -> io::Result<bool> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Reading {}", path.display())?;

    if !path.is_file() {
        writeln!(out, "File doesn't seem to exist.")?;
        writeln!(out, "{}", RULE)?;
        tracing::warn!("Missing input file: {}", path.display());
        return Ok(false);
    }

    writeln!(out, "{}", RULE)?;
    Ok(true)
}

/// Check paths in order, stopping at the first one that does not exist.
pub fn check_all<P: AsRef<Path>, W: Write>(paths: &[P], out: &mut W) -> io::Result<bool> {
    for path in paths {
        if !does_exist(path.as_ref(), out)? {
            return Ok(false);
        }
    }
    Ok(true)
}
