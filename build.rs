//! Build script for the LinkedIn relay.
//!
//! Copies `.env.example` from the crate root into the platform-specific local
//! data directory, next to the `.env` file the relay reads and rewrites:
//! - Linux: `~/.local/share/linkedin-relay/.env.example`
//! - macOS: `~/Library/Application Support/linkedin-relay/.env.example`
//! - Windows: `%LOCALAPPDATA%/linkedin-relay/.env.example`
//!
//! A missing template only produces a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("linkedin-relay");

    if env_example_path.is_file() {
        // A read-only data dir must not break the build.
        let copied = fs::create_dir_all(&out_dir).and_then(|_| {
            let contents = fs::read_to_string(&env_example_path)?;
            fs::write(out_dir.join(".env.example"), contents)
        });
        if let Err(e) = copied {
            println!(
                "cargo:warning=could not copy .env.example to {}: {}",
                out_dir.display(),
                e
            );
        }
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
