//! Prefix tree over folded game names.
//!
//! Nodes live in a flat arena and refer to their children by handle, so the
//! whole tree is released by truncating one `Vec`.

use std::collections::HashMap;

use gameshelf_foundation::fold_name;

/// Handle of a node inside the arena.
type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    children: HashMap<char, NodeId>,
    /// Store positions whose folded name ends at this node.
    positions: Vec<usize>,
}

/// Character trie mapping folded names to store positions.
#[derive(Clone, Debug)]
pub struct PrefixTree {
    nodes: Vec<Node>,
    /// Number of positions inserted since the last clear.
    entries: usize,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    /// Creates an empty tree containing only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            entries: 0,
        }
    }

    /// Inserts `position` under the folded form of `name`.
    ///
    /// Names are not unique; every position inserted under the same name is
    /// kept at the terminal node.
    pub fn insert(&mut self, name: &str, position: usize) {
        let mut current = ROOT;
        for ch in fold_name(name).chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
        }
        self.nodes[current].positions.push(position);
        self.entries += 1;
    }

    /// Returns every position whose name starts with `prefix`, ascending.
    ///
    /// The empty prefix matches everything.
    #[must_use]
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<usize> {
        let Some(landing) = self.descend(prefix) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut pending = vec![landing];
        while let Some(id) = pending.pop() {
            let node = &self.nodes[id];
            result.extend_from_slice(&node.positions);
            pending.extend(node.children.values().copied());
        }
        result.sort_unstable();
        result
    }

    /// Returns the positions stored exactly at `name`, in insertion order.
    #[must_use]
    pub fn positions_at(&self, name: &str) -> &[usize] {
        self.descend(name)
            .map_or(&[], |id| self.nodes[id].positions.as_slice())
    }

    /// Discards every node and reinstates an empty root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::default());
        self.entries = 0;
    }

    /// Returns the number of inserted positions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries
    }

    /// Returns true if nothing has been inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Returns the number of allocated nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn descend(&self, key: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for ch in fold_name(key).chars() {
            current = *self.nodes[current].children.get(&ch)?;
        }
        Some(current)
    }
}
