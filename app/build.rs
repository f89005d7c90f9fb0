use std::{env, fs};

// Surface .env overrides (FAUCET_URL, GOOGLE_CLIENT_ID, FULLNODE_URL) to the
// option_env! lookups in utils/constants.rs.
fn main() {
    let Ok(contents) = fs::read_to_string(".env") else {
        return;
    };
    println!("cargo:rerun-if-changed=.env");

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let (key, value) = (key.trim(), value.trim());
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
