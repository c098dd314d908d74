//! Builds a fixed sample tree and prints every root-to-leaf path followed by
//! the flattened value sequence. Run with `cargo run --example sample_tree`.

use treepath::{enumerate_values, TreeNode};

// The demonstration tree:
//
// 1
// 45              700
// 40        75    300
// 10 100 20 12 60 200
//                 80
fn sample_tree() -> TreeNode<i32> {
    let node40 = TreeNode::with_children(40, [TreeNode::new(10), TreeNode::new(100), TreeNode::new(20)]);
    let node75 = TreeNode::with_children(75, [TreeNode::new(12), TreeNode::new(60)]);
    let node45 = TreeNode::with_children(45, [node40, node75]);

    let node200 = TreeNode::with_children(200, [TreeNode::new(80)]);
    let node300 = TreeNode::with_children(300, [node200]);
    let node700 = TreeNode::with_children(700, [node300]);

    TreeNode::with_children(1, [node45, node700])
}

fn main() {
    let root = sample_tree();

    // Each root-to-leaf path, one per line
    let mut paths = root.paths();
    while let Some(path) = paths.next_path() {
        println!("{path:?}");
    }

    // Each node value in each root-to-leaf path
    for value in enumerate_values(Some(&root)) {
        println!("{value}");
    }
}
