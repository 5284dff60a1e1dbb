use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright year, read with env! so SSR and hydrate agree
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
