// tests/no_direct_http_calls.rs
// Fails if runtime code outside the api module talks to reqwest directly.
// All backend traffic must go through `ApiClient` so offline mode and error
// mapping stay complete.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_whitelisted(path: &Path) -> bool {
    let p = path.to_string_lossy();
    p.contains("/api/") || p.contains("\\api\\")
}

#[test]
fn no_direct_reqwest_use_outside_api() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let src_dir = Path::new(manifest_dir).join("src");

    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);

    let mut offenders = Vec::new();
    for file in files {
        if is_whitelisted(&file) {
            continue;
        }
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        if content.contains("reqwest::") || content.contains("use reqwest") {
            offenders.push(file);
        }
    }

    assert!(
        offenders.is_empty(),
        "direct reqwest usage outside src/api: {:?}",
        offenders
    );
}
