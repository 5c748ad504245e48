use okved_core::OkvedEntry;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OkvedNode {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub items: Option<Vec<OkvedNode>>,
}

/// Pre-order flattening: each node, then its children.
pub fn flatten_tree(nodes: Vec<OkvedNode>) -> Vec<OkvedEntry> {
    let mut entries = Vec::new();
    collect(nodes, &mut entries);
    entries
}

fn collect(nodes: Vec<OkvedNode>, entries: &mut Vec<OkvedEntry>) {
    for node in nodes {
        entries.push(OkvedEntry::new(node.code, node.name));
        if let Some(children) = node.items {
            collect(children, entries);
        }
    }
}
