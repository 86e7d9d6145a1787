use crate::types::*;
use crate::index::*;

///////////////////////////////////////////////////////////////////////////////////////

/// Visits all nodes of the anagram index in order of ascending summary
/// (left subtree, node, right subtree).
///
/// Uses an explicit stack rather than recursion, the stack holds
/// the path of nodes whose left subtree is still being visited.
/// The tree is not balanced, so its depth may be as large as the number of nodes.
pub struct InOrderIterator<'a> {
    nodes: &'a [TreeNode],
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a> InOrderIterator<'a> {
    pub fn new(nodes: &'a [TreeNode], root: Option<NodeId>) -> InOrderIterator<'a> {
        InOrderIterator {
            nodes,
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        //dive down to the leftmost unvisited node
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.nodes[id].left;
        }
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.current = node.right;
        Some(node)
    }
}

///////////////////////////////////////////////////////////////////////////////////////

/// Yields the anagram groups of the index, in the order of the
/// underlying `InOrderIterator`. Nodes with fewer than `min_size`
/// words are passed over.
pub struct GroupIterator<'a> {
    nodes: InOrderIterator<'a>,
    min_size: usize,
}

impl<'a> GroupIterator<'a> {
    pub fn new(nodes: InOrderIterator<'a>, min_size: usize) -> GroupIterator<'a> {
        GroupIterator {
            nodes,
            min_size,
        }
    }
}

impl<'a> Iterator for GroupIterator<'a> {
    type Item = AnagramGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let min_size = self.min_size;
        self.nodes.find(|node| node.words.len() >= min_size).map(|node| node.group())
    }
}
