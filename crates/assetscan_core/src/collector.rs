use anyhow::{Result, anyhow};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::Path;

use crate::types::{FileClass, FileInventory};

/// Walk the asset tree and classify every file by extension.
///
/// Standard filters are disabled so hidden entries are visited; the tree
/// renderer applies its own dotfile policy independently. Unreadable
/// subdirectories are skipped, an unreadable root is fatal.
pub fn collect_inventory(root: &Path) -> Result<FileInventory> {
    if !root.is_dir() {
        return Err(anyhow!("not a directory: {}", root.display()));
    }

    debug!("Walking asset tree from root: {}", root.display());
    let walker = WalkBuilder::new(root).standard_filters(false).build();

    let mut inventory = FileInventory::default();
    for res in walker {
        let dent = match res {
            Ok(d) => d,
            Err(e) => {
                trace!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let Some(class) = p
            .extension()
            .and_then(|e| e.to_str())
            .and_then(FileClass::from_extension)
        else {
            continue;
        };

        if let Ok(rel) = p.strip_prefix(root) {
            let rel = rel.to_string_lossy().replace('\\', "/");
            trace!("Classified {:?} as {:?}", rel, class);
            inventory.insert(class, rel);
        }
    }

    debug!(
        "Collected {} files ({} scripts, {} data, {} markup)",
        inventory.len(),
        inventory.scripts.len(),
        inventory.data.len(),
        inventory.markup.len()
    );
    Ok(inventory)
}
