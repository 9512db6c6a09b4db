// Copies the static site (page shell, styles, generated pkg/) to `dist/`.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let options = CopyOptions::new().overwrite(true).content_only(true);
    if let Err(err) = std::fs::create_dir_all(out_dir) {
        println!("cargo:warning=could not create dist/: {err}");
        return;
    }
    if let Err(err) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=could not copy static/ to dist/: {err}");
    }
}
