use crate::ledger::ItemId;
use std::collections::HashMap;

/// Node of an [`FPTree`] arena; links are indices into `FPTree::nodes`.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<ItemId>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<ItemId, usize>,
    /// Next node carrying the same item, on another branch.
    pub next: Option<usize>,
}

/// First and last node of one item's cross-link chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub head: usize,
    pub tail: usize,
}

/// Prefix tree over rank-ordered transactions.
///
/// Every conditional tree gets a fresh arena, so dropping a tree releases the
/// whole branch at once.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HashMap<ItemId, HeaderEntry>,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next: None,
        }
    }

    pub fn new_item(item: ItemId, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            next: None,
        }
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
        }
    }

    /// True when the tree holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }
}
