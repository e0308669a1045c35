//! Component extraction from a page tree
//!
//! The extractor walks a page depth-first in document order and records every
//! `COMPONENT` node it meets. Components grouped under a `COMPONENT_SET` are
//! written into a subfolder named after the set.

use crate::document::{DocumentNode, NodeType};
use crate::error::{ExportError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// An exportable component derived from a document node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl Component {
    /// Output path relative to the export directory, without extension
    pub fn path(&self) -> String {
        match &self.folder {
            Some(folder) => format!("{}/{}", folder, self.name),
            None => self.name.clone(),
        }
    }

    /// Identifier of the generated wrapper component
    ///
    /// Nested components are prefixed with their folder so that re-exports
    /// from the index never collide.
    pub fn identifier(&self) -> String {
        match &self.folder {
            Some(folder) => format!("{}{}", folder, self.name),
            None => self.name.clone(),
        }
    }
}

/// Components keyed by id, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentMap {
    entries: Vec<Component>,
    index: HashMap<String, usize>,
}

impl ComponentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component, keeping the first entry when the id is already present
    pub fn insert(&mut self, component: Component) -> bool {
        if self.index.contains_key(&component.id) {
            return false;
        }
        self.index.insert(component.id.clone(), self.entries.len());
        self.entries.push(component);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.id.as_str())
    }
}

impl<'a> IntoIterator for &'a ComponentMap {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Output paths and wrapper identifiers already taken, mapped to the owning id
#[derive(Default)]
struct Claimed {
    paths: HashMap<String, String>,
    identifiers: HashMap<String, String>,
}

impl Claimed {
    fn claim(&mut self, component: &Component) -> Result<()> {
        let path = component.path();
        let identifier = component.identifier();

        for (taken, key) in [(&self.paths, path.clone()), (&self.identifiers, identifier.clone())] {
            if let Some(first) = taken.get(&key) {
                return Err(ExportError::DuplicateName {
                    path: key,
                    first: first.clone(),
                    second: component.id.clone(),
                });
            }
        }

        self.paths.insert(path, component.id.clone());
        self.identifiers.insert(identifier, component.id.clone());
        Ok(())
    }
}

/// Extract all components of a page in document order
///
/// Fails with [`ExportError::DuplicateName`] when two components resolve to
/// the same output path or the same wrapper identifier.
pub fn extract_components(page: &DocumentNode) -> Result<ComponentMap> {
    let mut components = ComponentMap::new();
    let mut claimed = Claimed::default();

    for child in &page.children {
        visit(child, None, &mut components, &mut claimed)?;
    }

    Ok(components)
}

fn visit(
    node: &DocumentNode,
    folder: Option<&str>,
    components: &mut ComponentMap,
    claimed: &mut Claimed,
) -> Result<()> {
    match node.node_type {
        NodeType::ComponentSet => {
            let set_folder = derive_name(&node.name);
            for child in &node.children {
                visit(child, Some(&set_folder), components, claimed)?;
            }
        }
        NodeType::Component => {
            let component = Component {
                id: node.id.clone(),
                name: derive_name(&node.name),
                folder: folder.map(str::to_string),
            };

            if components.contains_key(&component.id) {
                return Ok(());
            }

            claimed.claim(&component)?;
            components.insert(component);
        }
        _ => {
            for child in &node.children {
                visit(child, folder, components, claimed)?;
            }
        }
    }

    Ok(())
}

/// Turn a node name into a PascalCase identifier usable as a file and module name
///
/// `"arrow-left / 24px"` becomes `"ArrowLeft24px"`.
pub fn derive_name(raw: &str) -> String {
    let mut name: String = raw
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect();

    if name.is_empty() {
        name = "Component".to_string();
    } else if !name.starts_with(char::is_alphabetic) {
        name.insert_str(0, "Svg");
    }

    name
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
