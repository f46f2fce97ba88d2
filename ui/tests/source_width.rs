use std::fs;
use std::path::{Path, PathBuf};

/// Matches rustfmt's default `max_width`.
const MAX_WIDTH: usize = 100;

fn rust_files(root: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(root) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

#[test]
fn workspace_sources_fit_the_line_width() {
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    let mut files = Vec::new();
    for member in ["api", "ui", "web"] {
        rust_files(&workspace.join(member).join("src"), &mut files);
        rust_files(&workspace.join(member).join("tests"), &mut files);
    }
    assert!(!files.is_empty(), "no sources found under {}", workspace.display());

    let mut too_wide = Vec::new();
    for file in &files {
        let content = fs::read_to_string(file).unwrap_or_default();
        for (index, line) in content.lines().enumerate() {
            let width = line.chars().count();
            if width > MAX_WIDTH {
                too_wide.push(format!("{}:{} ({width} columns)", file.display(), index + 1));
            }
        }
    }
    assert!(too_wide.is_empty(), "lines over {MAX_WIDTH} columns:\n{}", too_wide.join("\n"));
}
