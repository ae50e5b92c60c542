pub mod aggregate;
pub mod format;
pub mod fs;
