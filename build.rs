use std::fs;
use std::path::{Path, PathBuf};

fn add_watch_path(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return; };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, files);
        } else {
            files.push(path);
        }
    }
}

fn main() {
    // Page fragments and the product catalog are fetched at runtime, so
    // Cargo does not track them on its own. Watch them explicitly.
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());

    let pages_root = manifest_dir.join("assets/pages");
    let catalog = manifest_dir.join("assets/products.json");

    add_watch_path(&pages_root);
    add_watch_path(&catalog);

    // Also watch individual fragments to ensure nested changes are detected reliably.
    let mut files = Vec::new();
    walk_dir(&pages_root, &mut files);
    for file in files {
        if file.extension().is_some_and(|ext| ext == "html") {
            add_watch_path(&file);
        }
    }
}
