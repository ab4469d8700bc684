//! Category tree construction for hierarchical navigation.
//!
//! Converts the flat, parent-referencing category list served by the backend
//! into the rooted forest consumed by drill-down dropdowns, sidebar trees and
//! the add-listing form.

use std::cmp::Ordering;

use crate::domain::category::{Category, CategoryTreeNode};
use crate::domain::types::{CategoryName, Slug};

/// Sibling and root ordering: case-insensitive comparison with a
/// case-sensitive tiebreak. Stands in for locale collation.
fn compare_names(a: &CategoryName, b: &CategoryName) -> Ordering {
    let folded = a
        .as_str()
        .to_lowercase()
        .cmp(&b.as_str().to_lowercase());
    if folded == Ordering::Equal {
        a.as_str().cmp(b.as_str())
    } else {
        folded
    }
}

fn to_node(category: &Category, active: &[&Category]) -> CategoryTreeNode {
    let mut children: Vec<CategoryTreeNode> = active
        .iter()
        .filter(|c| c.parent_id.as_ref() == Some(&category.id))
        .map(|c| to_node(c, active))
        .collect();
    children.sort_by(|a, b| compare_names(&a.name, &b.name));
    CategoryTreeNode {
        id: category.id.clone(),
        name: category.name.clone(),
        slug: category.slug.clone(),
        level: category.level,
        path: category.path.clone(),
        children,
    }
}

/// Builds a forest of [`CategoryTreeNode`] from a flat category list.
///
/// Only active categories take part: a category under an inactive or unknown
/// parent is absent from the output entirely, it is not promoted to root.
/// Roots are categories with no parent, and every sibling list (roots
/// included) is sorted by name ascending.
///
/// Preconditions, enforced by the upstream data source and not defended
/// here: the parent relation is acyclic and ids are unique. A cyclic parent
/// chain recurses without bound.
pub fn build_category_tree(categories: &[Category]) -> Vec<CategoryTreeNode> {
    let active: Vec<&Category> = categories.iter().filter(|c| c.active).collect();
    let mut roots: Vec<CategoryTreeNode> = active
        .iter()
        .filter(|c| c.parent_id.is_none())
        .map(|c| to_node(c, &active))
        .collect();
    roots.sort_by(|a, b| compare_names(&a.name, &b.name));
    roots
}

/// Depth-first lookup of a category name by slug, used to label the
/// currently selected category in search widgets.
pub fn find_category_name_by_slug<'a>(
    nodes: &'a [CategoryTreeNode],
    slug: &Slug,
) -> Option<&'a str> {
    for node in nodes {
        if node.slug == *slug {
            return Some(node.name.as_str());
        }
        if let Some(found) = find_category_name_by_slug(&node.children, slug) {
            return Some(found);
        }
    }
    None
}

/// True when the node or any of its descendants carries the slug. Drives
/// expansion of the tree along the path to the current selection.
pub fn subtree_contains_slug(node: &CategoryTreeNode, slug: &Slug) -> bool {
    if node.slug == *slug {
        return true;
    }
    node.children
        .iter()
        .any(|child| subtree_contains_slug(child, slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CategoryId;

    fn category(id: &str, name: &str, parent: Option<&str>, active: bool) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            slug: Slug::new(name.replace(' ', "-")).unwrap(),
            active,
            parent_id: parent.map(|p| CategoryId::new(p).unwrap()),
            level: 0,
            path: vec![],
        }
    }

    #[test]
    fn builds_forest_with_sorted_siblings() {
        let categories = vec![
            category("1", "b", None, true),
            category("2", "a", None, true),
            category("3", "c", None, true),
            category("4", "z-child", Some("2"), true),
            category("5", "a-child", Some("2"), true),
        ];
        let tree = build_category_tree(&categories);
        let roots: Vec<&str> = tree.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(roots, ["a", "b", "c"]);
        let children: Vec<&str> = tree[0].children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(children, ["a-child", "z-child"]);
        assert!(tree[0].children[0].is_leaf());
    }

    #[test]
    fn children_match_parent_ids_recursively() {
        let categories = vec![
            category("1", "root", None, true),
            category("2", "mid", Some("1"), true),
            category("3", "leaf", Some("2"), true),
        ];
        let tree = build_category_tree(&categories);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].children.len(), 1);
        assert_eq!(tree[0].children[0].children[0].name, "leaf");
    }

    #[test]
    fn inactive_categories_and_their_subtrees_are_excluded() {
        let categories = vec![
            category("1", "visible", None, true),
            category("2", "hidden", None, false),
            category("3", "orphaned", Some("2"), true),
        ];
        let tree = build_category_tree(&categories);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "visible");
        assert!(find_category_name_by_slug(&tree, &Slug::new("orphaned").unwrap()).is_none());
    }

    #[test]
    fn dangling_parent_reference_drops_the_category() {
        let categories = vec![
            category("1", "root", None, true),
            category("2", "dangling", Some("999"), true),
        ];
        let tree = build_category_tree(&categories);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "root");
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert!(build_category_tree(&[]).is_empty());
    }

    #[test]
    fn rebuilding_unchanged_input_is_deep_equal() {
        let categories = vec![
            category("1", "root", None, true),
            category("2", "child", Some("1"), true),
        ];
        assert_eq!(
            build_category_tree(&categories),
            build_category_tree(&categories)
        );
    }

    #[test]
    fn name_lookup_descends_into_children() {
        let categories = vec![
            category("1", "root", None, true),
            category("2", "nested child", Some("1"), true),
        ];
        let tree = build_category_tree(&categories);
        let slug = Slug::new("nested-child").unwrap();
        assert_eq!(find_category_name_by_slug(&tree, &slug), Some("nested child"));
        assert!(subtree_contains_slug(&tree[0], &slug));
        assert!(!subtree_contains_slug(&tree[0], &Slug::new("missing").unwrap()));
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let categories = vec![
            category("1", "Barrels", None, true),
            category("2", "amphorae", None, true),
        ];
        let tree = build_category_tree(&categories);
        let roots: Vec<&str> = tree.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(roots, ["amphorae", "Barrels"]);
    }
}
