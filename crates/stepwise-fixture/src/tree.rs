use rand::Rng;
use stepwise_ir::types::{Edge, Tree, TreeNode};

use crate::array::random_unique_values;
use crate::letter_id;

const MAX_TREE_NODES: usize = 15;

/// A BST-shaped tree over distinct values, ids `A`, `B`, ... in insertion order.
///
/// Edges point parent to child; coordinates are left at zero for the
/// caller's layout.
pub fn random_bst_tree<R: Rng>(rng: &mut R, count: usize) -> Tree {
    let values = random_unique_values(rng, count.clamp(1, MAX_TREE_NODES));
    let mut tree = Tree::default();
    // (left, right) child positions per node
    let mut children: Vec<(Option<usize>, Option<usize>)> = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        tree.nodes.push(TreeNode {
            id: letter_id(i),
            value,
            x: 0.0,
            y: 0.0,
        });
        children.push((None, None));
        if i == 0 {
            continue;
        }

        let mut current = 0;
        loop {
            let slot = if value < values[current] {
                &mut children[current].0
            } else {
                &mut children[current].1
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(i);
                    tree.edges.push(Edge::new(letter_id(current), letter_id(i)));
                    break;
                }
            }
        }
    }
    tree
}
