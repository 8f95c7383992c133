//! Linear substring search over every stored document.

use folder_store_types::{Folder, FolderState, SearchHit};

/// Display name used when a document's folder id has no folder entry.
pub const UNKNOWN_FOLDER: &str = "Unknown";

pub fn folder_name<'a>(folders: &'a [Folder], folder_id: &str) -> &'a str {
    folders
        .iter()
        .find(|folder| folder.id == folder_id)
        .map(|folder| folder.name.as_str())
        .unwrap_or(UNKNOWN_FOLDER)
}

/// Documents whose title or content contains `query`, ignoring case.
pub fn search(state: &FolderState, query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();

    state
        .documents
        .iter()
        .flat_map(|(folder_id, docs)| docs.iter().map(move |doc| (folder_id, doc)))
        .filter(|(_, doc)| {
            doc.title.to_lowercase().contains(&needle)
                || doc
                    .content()
                    .is_some_and(|content| content.to_lowercase().contains(&needle))
        })
        .map(|(folder_id, doc)| SearchHit {
            folder_id: folder_id.clone(),
            folder_name: folder_name(&state.folders, folder_id).to_string(),
            document: doc.clone(),
        })
        .collect()
}
