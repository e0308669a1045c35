//! Page lookup within a document tree

use crate::document::DocumentNode;
use crate::error::{ExportError, Result};

/// Find a page by id or name, searching level by level
///
/// Every node of the current level is checked before any child is visited, so
/// a match closer to the root always wins over a deeper one. Within a level
/// the first node in document order wins.
pub fn find_page<'a>(roots: &'a [DocumentNode], page: &str) -> Result<&'a DocumentNode> {
    let mut frontier: Vec<&DocumentNode> = roots.iter().collect();

    while !frontier.is_empty() {
        if let Some(found) = frontier
            .iter()
            .find(|node| node.id == page || node.name == page)
        {
            return Ok(*found);
        }

        frontier = frontier
            .into_iter()
            .flat_map(|node| node.children.iter())
            .collect();
    }

    Err(ExportError::PageNotFound(page.to_string()))
}
