//! Build script: stamps the version and the default configuration directory.

use std::process::Command;

fn main() {
    // Prefer EMU3270_VERSION if set by the release workflow, otherwise fall
    // back to git describe for local development builds.
    if let Ok(version) = std::env::var("EMU3270_VERSION") {
        println!("cargo:rustc-env=EMU3270_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=EMU3270_VERSION={version}");
    }

    // Compiled-in fallback for the confDir resource.
    let conf_dir =
        std::env::var("EMU3270_CONF_DIR").unwrap_or_else(|_| "/usr/local/etc/emu3270".to_string());
    println!("cargo:rustc-env=EMU3270_CONF_DIR={conf_dir}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=EMU3270_VERSION");
    println!("cargo:rerun-if-env-changed=EMU3270_CONF_DIR");
}
