fn main() {
    // rust-embed only tracks files that already exist; watch the folder so
    // added or removed assets re-run the embed derive.
    println!("cargo:rerun-if-changed=../../assets");
}
