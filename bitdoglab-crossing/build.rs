use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Put memory.x where the linker can find it.
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    let memory_x = fs::read_to_string("memory.x").expect("failed to read memory.x");
    fs::write(out_dir.join("memory.x"), memory_x).expect("failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
}
