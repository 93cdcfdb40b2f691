use std::fs;
use std::path::{Path, PathBuf};

/// Render the directory tree for the report header.
///
/// Unlike the inventory walk, dotfiles are hidden here. The two policies
/// are deliberately independent: changing what the tree shows must never
/// change what the scan covers.
pub fn render_tree(root: &Path) -> Vec<String> {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let mut lines = vec![root_name];
    render_subtree(root, "│   ", &mut lines);
    lines
}

fn render_subtree(dir: &Path, prefix: &str, lines: &mut Vec<String>) {
    let mut entries: Vec<(String, PathBuf)> = match fs::read_dir(dir) {
        Ok(rd) => rd
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let name = e.file_name().to_string_lossy().to_string();
                if name.starts_with('.') { None } else { Some((name, e.path())) }
            })
            .collect(),
        // Unreadable subtree: best-effort rendering, keep going.
        Err(_) => return,
    };
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let last_index = entries.len().saturating_sub(1);
    for (i, (name, path)) in entries.iter().enumerate() {
        let connector = if i == last_index { "└──" } else { "├──" };
        lines.push(format!("{prefix}{connector} {name}"));
        if path.is_dir() {
            let extension = if i == last_index { "    " } else { "│   " };
            render_subtree(path, &format!("{prefix}{extension}"), lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
    }

    #[test]
    fn test_render_tree_sorted_with_connectors() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "b.js", "");
        create_test_file(root, "a.js", "");
        create_test_file(root, "sub/c.js", "");

        let lines = render_tree(root);
        // Root name first, then sorted entries with the last one closed off.
        assert_eq!(lines[1], "│   ├── a.js");
        assert_eq!(lines[2], "│   ├── b.js");
        assert_eq!(lines[3], "│   └── sub");
        assert_eq!(lines[4], "│       └── c.js");
    }

    #[test]
    fn test_render_tree_hides_dotfiles() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, ".hidden.js", "");
        create_test_file(root, "shown.js", "");

        let lines = render_tree(root);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("shown.js"));
    }

    #[test]
    fn test_render_tree_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "x/one.js", "");
        create_test_file(root, "y/two.js", "");

        assert_eq!(render_tree(root), render_tree(root));
    }
}
