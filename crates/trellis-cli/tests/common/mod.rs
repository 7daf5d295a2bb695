//! Shared helpers for the CLI test binaries.

use std::path::Path;

use assert_cmd::Command;

/// `trellis` running in `dir`, isolated from the user's configuration.
#[allow(deprecated)]
pub fn trellis(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("TRELLIS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
