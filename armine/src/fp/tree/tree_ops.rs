use super::tree::{FPNode, FPTree, HeaderEntry};
use crate::ledger::ItemId;

/// Walks the cross-link chain of one item.
pub struct NodeChain<'a> {
    tree: &'a FPTree,
    current: Option<usize>,
}

impl Iterator for NodeChain<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let idx = self.current?;
        self.current = self.tree.nodes[idx].next;
        Some(idx)
    }
}

impl FPTree {
    /// Insert one rank-ordered transaction with weight `count`, sharing
    /// existing prefixes and linking new nodes into their item's chain.
    pub fn insert_transaction(&mut self, transaction: &[ItemId], count: usize) {
        let mut current_index = self.root_index;

        for &item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += count;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(item, count, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                self.link_node(item, new_index);
                current_index = new_index;
            }
        }
    }

    fn link_node(&mut self, item: ItemId, index: usize) {
        match self.header_table.get_mut(&item) {
            Some(entry) => {
                self.nodes[entry.tail].next = Some(index);
                entry.tail = index;
            }
            None => {
                self.header_table.insert(
                    item,
                    HeaderEntry {
                        head: index,
                        tail: index,
                    },
                );
            }
        }
    }

    pub fn node_chain(&self, item: ItemId) -> NodeChain<'_> {
        NodeChain {
            tree: self,
            current: self.header_table.get(&item).map(|entry| entry.head),
        }
    }

    /// Support of `item` in this tree: the counts summed along its chain.
    pub fn item_support(&self, item: ItemId) -> usize {
        self.node_chain(item).map(|idx| self.nodes[idx].count).sum()
    }

    /// Conditional pattern base of `item`: for every node in its chain, the
    /// ancestor items (root side first) weighted by that node's count.
    pub fn get_prefix_paths(&self, item: ItemId) -> Vec<(Vec<ItemId>, usize)> {
        self.node_chain(item)
            .filter_map(|idx| {
                let mut path = Vec::new();
                let mut current = self.nodes[idx].parent;

                while let Some(i) = current {
                    if let Some(item) = self.nodes[i].item {
                        path.push(item);
                    }
                    current = self.nodes[i].parent;
                }

                path.reverse();
                (!path.is_empty()).then_some((path, self.nodes[idx].count))
            })
            .collect()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let current_node = &self.nodes[current_index];

            if current_node.children.len() > 1 {
                return false;
            }

            match current_node.children.values().next() {
                Some(&child_index) => current_index = child_index,
                None => return true,
            }
        }
    }

    /// `(item, count)` pairs from the root down the first branch; the whole
    /// tree when [`has_single_path`](Self::has_single_path) holds.
    pub fn get_single_path(&self) -> Vec<(ItemId, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = child_node.item {
                path.push((item, child_node.count));
            }
            current_index = child_index;
        }
        path
    }
}
