use std::collections::BTreeSet;

use crate::constants::{DATA_EXTENSIONS, MARKUP_EXTENSIONS, SCRIPT_EXTENSIONS};

/// Extension class of a tracked file. A file never belongs to more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Script,
    Data,
    Markup,
}

impl FileClass {
    pub fn from_extension(ext: &str) -> Option<FileClass> {
        if SCRIPT_EXTENSIONS.contains(&ext) {
            Some(FileClass::Script)
        } else if DATA_EXTENSIONS.contains(&ext) {
            Some(FileClass::Data)
        } else if MARKUP_EXTENSIONS.contains(&ext) {
            Some(FileClass::Markup)
        } else {
            None
        }
    }
}

/// Root-relative, forward-slash paths partitioned by extension class.
/// Built once per scan and not mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct FileInventory {
    pub scripts: BTreeSet<String>,
    pub data: BTreeSet<String>,
    pub markup: BTreeSet<String>,
}

impl FileInventory {
    pub fn insert(&mut self, class: FileClass, path: String) {
        match class {
            FileClass::Script => self.scripts.insert(path),
            FileClass::Data => self.data.insert(path),
            FileClass::Markup => self.markup.insert(path),
        };
    }

    pub fn len(&self) -> usize {
        self.scripts.len() + self.data.len() + self.markup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
