use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, Slug};

/// Canonical category record in its flat, parent-referencing form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    /// Inactive categories are excluded from every tree and listing.
    pub active: bool,
    /// Parent category, `None` for a root.
    pub parent_id: Option<CategoryId>,
    /// Precomputed depth supplied by the backend; carried through, not
    /// relied upon for tree construction.
    pub level: i32,
    /// Precomputed ancestry slugs supplied by the backend.
    pub path: Vec<String>,
}

/// Hierarchical category node driving drill-down navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTreeNode {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub level: i32,
    pub path: Vec<String>,
    /// Child nodes, sorted by name ascending.
    pub children: Vec<CategoryTreeNode>,
}

impl CategoryTreeNode {
    /// A leaf has no children; selecting it finalizes a navigation choice.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
