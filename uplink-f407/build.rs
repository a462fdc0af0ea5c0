use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Linker plumbing is only wanted for the bare-metal target.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
        fs::copy("memory.x", out_dir.join("memory.x")).unwrap();
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rustc-link-arg=-Tlink.x");
    }
    println!("cargo:rerun-if-changed=memory.x");
}
