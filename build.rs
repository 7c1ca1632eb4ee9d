use std::path::Path;

fn main() {
    // Build timestamp for --version
    println!("cargo:rustc-env=BUILD_TIME={}", chrono::Utc::now().to_rfc3339());

    let readme_path = Path::new("README.md");
    if readme_path.exists() {
        println!("cargo:rerun-if-changed=README.md");
    }
}
