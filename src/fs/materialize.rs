//! Materializer
//!
//! Pure merge of the base tree and the mutation journal into the current
//! observable tree plus the flat file list. Same inputs always give a
//! structurally equal view.

use tracing::trace;

use super::journal::MutationJournal;
use super::path::VfsPath;
use super::types::{Entity, File, FlatFile, Folder};

/// Current observable state of the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedView {
    pub root: Folder,
    pub files: Vec<FlatFile>,
}

pub fn materialize(base: &Folder, journal: &MutationJournal) -> MaterializedView {
    let mut root = filter_folder(base, &VfsPath::root(), journal);

    let mut folders: Vec<&VfsPath> = journal.created_folders().collect();
    folders.sort_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.cmp(b)));
    for path in folders {
        if journal.is_hidden(path) {
            continue;
        }
        if ensure_folder(&mut root, path.segments()).is_none() {
            trace!(path = %path, "materialize: folder blocked by a file");
        }
    }

    for created in journal.created() {
        if journal.is_hidden(&created.path) {
            continue;
        }
        let (Some(name), Some(parent)) = (created.path.file_name(), created.path.parent()) else {
            continue;
        };
        let Some(folder) = ensure_folder(&mut root, parent.segments()) else {
            trace!(path = %created.path, "materialize: parent blocked by a file");
            continue;
        };
        let content = journal.modified_content(&created.path).unwrap_or(&created.content);
        folder.insert_or_replace(Entity::File(File {
            name: name.to_string(),
            kind: created.kind.clone(),
            content: content.to_string(),
            is_open: false,
        }));
    }

    MaterializedView { root, files: flatten(base, journal) }
}

/// Flat list: surviving base files in tree order, then created files.
/// A created file that shadows a base path takes over the base slot.
pub fn flatten(base: &Folder, journal: &MutationJournal) -> Vec<FlatFile> {
    let mut files = Vec::new();
    collect_files(base, &VfsPath::root(), journal, &mut files);

    for created in journal.created() {
        if journal.is_hidden(&created.path) {
            continue;
        }
        let entry = FlatFile {
            path: created.path.clone(),
            kind: created.kind.clone(),
            content: journal
                .modified_content(&created.path)
                .unwrap_or(&created.content)
                .to_string(),
        };
        match files.iter_mut().find(|f| f.path == entry.path) {
            Some(existing) => *existing = entry,
            None => files.push(entry),
        }
    }
    files
}

fn filter_folder(folder: &Folder, path: &VfsPath, journal: &MutationJournal) -> Folder {
    let children = folder
        .children
        .iter()
        .filter_map(|child| {
            let child_path = path.join(child.name());
            if journal.is_deleted(&child_path) {
                return None;
            }
            Some(match child {
                Entity::Folder(f) => Entity::Folder(filter_folder(f, &child_path, journal)),
                Entity::File(f) => {
                    let mut file = f.clone();
                    if let Some(content) = journal.modified_content(&child_path) {
                        file.content = content.to_string();
                    }
                    Entity::File(file)
                }
            })
        })
        .collect();

    Folder { name: folder.name.clone(), is_open: folder.is_open, children }
}

fn collect_files(folder: &Folder, path: &VfsPath, journal: &MutationJournal, out: &mut Vec<FlatFile>) {
    for child in &folder.children {
        let child_path = path.join(child.name());
        if journal.is_deleted(&child_path) {
            continue;
        }
        match child {
            Entity::Folder(f) => collect_files(f, &child_path, journal, out),
            Entity::File(f) => out.push(FlatFile {
                content: journal
                    .modified_content(&child_path)
                    .unwrap_or(&f.content)
                    .to_string(),
                kind: f.kind.clone(),
                path: child_path,
            }),
        }
    }
}

/// Locate or synthesize the folder chain for `segments`. Synthesized
/// folders start open. Returns `None` if a file sits in the way.
fn ensure_folder<'a>(folder: &'a mut Folder, segments: &[String]) -> Option<&'a mut Folder> {
    let Some((first, rest)) = segments.split_first() else {
        return Some(folder);
    };
    let idx = match folder.children.iter().position(|c| c.name() == first.as_str()) {
        Some(idx) => idx,
        None => {
            let mut synthesized = Folder::new(first.clone());
            synthesized.is_open = true;
            folder.children.push(Entity::Folder(synthesized));
            folder.children.len() - 1
        }
    };
    match &mut folder.children[idx] {
        Entity::Folder(child) => ensure_folder(child, rest),
        Entity::File(_) => None,
    }
}
