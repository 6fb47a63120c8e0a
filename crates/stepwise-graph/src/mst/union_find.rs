use std::collections::HashMap;

use stepwise_ir::types::GraphNode;

/// Disjoint sets over node ids with path compression.
#[derive(Debug, Clone)]
pub struct UnionFind {
    index: HashMap<String, usize>,
    parent: Vec<usize>,
}

impl UnionFind {
    pub fn new(nodes: &[GraphNode]) -> Self {
        Self {
            index: nodes
                .iter()
                .enumerate()
                .map(|(i, n)| (n.id.clone(), i))
                .collect(),
            parent: (0..nodes.len()).collect(),
        }
    }

    fn root(&mut self, mut i: usize) -> usize {
        let mut top = i;
        while self.parent[top] != top {
            top = self.parent[top];
        }
        while self.parent[i] != top {
            let next = self.parent[i];
            self.parent[i] = top;
            i = next;
        }
        top
    }

    /// Representative of `id`'s set, or `None` for an unknown id.
    pub fn find(&mut self, id: &str) -> Option<usize> {
        let i = *self.index.get(id)?;
        Some(self.root(i))
    }

    /// Merge the sets of `a` and `b`; `a`'s root is re-parented under `b`'s.
    /// Returns `false` when they already share a set.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) if ra != rb => {
                self.parent[ra] = rb;
                true
            }
            _ => false,
        }
    }
}
