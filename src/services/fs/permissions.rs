use std::fmt;
use std::fs::Metadata;

/// Owner/group/other permission bits in output column order.
const COLUMNS: [(u32, u8); 9] = [
    (0o400, b'r'),
    (0o200, b'w'),
    (0o100, b'x'),
    (0o040, b'r'),
    (0o020, b'w'),
    (0o010, b'x'),
    (0o004, b'r'),
    (0o002, b'w'),
    (0o001, b'x'),
];

/// Nine `rwx`/`-` columns decoded from mode bits.
///
/// `{}` prints the nine columns; `{:#}` prepends the `-` type placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionString([u8; 9]);

impl PermissionString {
    pub fn from_mode(mode: u32) -> Self {
        let mut buf = [b'-'; 9];
        for (slot, (bit, ch)) in buf.iter_mut().zip(COLUMNS) {
            if mode & bit != 0 {
                *slot = ch;
            }
        }
        Self(buf)
    }

    pub fn from_metadata(md: &Metadata) -> Self {
        Self::from_mode(mode_of(md))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever written.
        std::str::from_utf8(&self.0).unwrap_or("?????????")
    }
}

impl fmt::Display for PermissionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("-")?;
        }
        f.write_str(self.as_str())
    }
}

#[cfg(unix)]
pub fn mode_of(md: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    md.permissions().mode()
}

/// Synthesized from the read-only flag where no mode bits exist.
#[cfg(not(unix))]
pub fn mode_of(md: &Metadata) -> u32 {
    let mut mode = if md.permissions().readonly() { 0o444 } else { 0o666 };
    if md.is_dir() {
        mode |= 0o111;
    }
    mode
}
