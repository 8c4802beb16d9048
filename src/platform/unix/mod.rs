//! Unix-specific platform implementations

mod filesystem;
mod paths;
mod shell;

pub use filesystem::UnixFilesystem;
pub use paths::UnixPaths;
pub use shell::UnixShell;
