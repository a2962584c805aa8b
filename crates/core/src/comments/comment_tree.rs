//! Assembly of a flat comment list into a nested reply forest.

use crate::comments::comments_model::{Comment, CommentNode};
use std::collections::HashMap;

/// Builds a reply forest from a flat list ordered by `created_at` ascending.
///
/// Returns the top-level nodes plus the count of *input* comments. The count
/// deliberately includes comments dropped from the tree because their parent
/// could not be located; it mirrors what is stored, not what is rendered.
///
/// A comment whose `parent_id` references a missing id (possible only when
/// rows were manipulated outside this API) is silently dropped along with its
/// subtree. Each node is visited exactly once, so dangling or self references
/// cannot cause a loop.
pub fn build_comment_tree(comments: Vec<Comment>) -> (Vec<CommentNode>, usize) {
    let total = comments.len();

    let mut nodes: HashMap<i32, CommentNode> = comments
        .iter()
        .cloned()
        .map(|c| (c.id, CommentNode::from(c)))
        .collect();

    // Parents precede their children in the input, so walking it in reverse
    // guarantees a node's children are all attached before the node itself
    // is moved into its parent (or the root list).
    let mut roots = Vec::new();
    for comment in comments.iter().rev() {
        let Some(mut node) = nodes.remove(&comment.id) else {
            continue;
        };
        // Children were pushed newest-first; restore ascending order.
        node.children.reverse();
        match comment.parent_id {
            None => roots.push(node),
            Some(parent_id) => {
                if let Some(parent) = nodes.get_mut(&parent_id) {
                    parent.children.push(node);
                }
                // Missing parent: the node is neither a root nor attached.
            }
        }
    }
    roots.reverse();

    (roots, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn comment(id: i32, parent_id: Option<i32>) -> Comment {
        // ids double as the creation order in these fixtures
        let created_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, id as u32)
            .unwrap();
        Comment {
            id,
            goal_id: 1,
            parent_id,
            content: format!("comment {}", id),
            created_at,
        }
    }

    fn flatten_preorder(nodes: &[CommentNode], out: &mut Vec<i32>) {
        for node in nodes {
            out.push(node.id);
            flatten_preorder(&node.children, out);
        }
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        let (roots, total) = build_comment_tree(vec![]);
        assert!(roots.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn single_root_with_reply() {
        let (roots, total) = build_comment_tree(vec![comment(1, None), comment(2, Some(1))]);
        assert_eq!(total, 2);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, 1);
        assert_eq!(roots[0].children.len(), 1);
        assert_eq!(roots[0].children[0].id, 2);
        assert!(roots[0].children[0].children.is_empty());
    }

    #[test]
    fn siblings_keep_creation_order() {
        let (roots, _) = build_comment_tree(vec![
            comment(1, None),
            comment(2, None),
            comment(3, Some(1)),
            comment(4, Some(1)),
            comment(5, Some(2)),
        ]);
        assert_eq!(roots.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 2]);
        let children: Vec<i32> = roots[0].children.iter().map(|n| n.id).collect();
        assert_eq!(children, vec![3, 4]);
        assert_eq!(roots[1].children[0].id, 5);
    }

    #[test]
    fn preorder_flatten_preserves_membership_and_parent_before_child() {
        let input = vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, Some(2)),
            comment(4, None),
            comment(5, Some(2)),
            comment(6, Some(4)),
        ];
        let parents: Vec<(i32, Option<i32>)> =
            input.iter().map(|c| (c.id, c.parent_id)).collect();
        let (roots, total) = build_comment_tree(input);
        assert_eq!(total, 6);

        let mut flat = Vec::new();
        flatten_preorder(&roots, &mut flat);
        // every input comment appears exactly once
        let mut sorted = flat.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
        // parent precedes child
        for (id, parent) in parents {
            if let Some(parent) = parent {
                let parent_pos = flat.iter().position(|&x| x == parent).unwrap();
                let child_pos = flat.iter().position(|&x| x == id).unwrap();
                assert!(parent_pos < child_pos, "{} before {}", parent, id);
            }
        }
    }

    #[test]
    fn orphans_are_dropped_but_still_counted() {
        let (roots, total) = build_comment_tree(vec![
            comment(1, None),
            comment(2, Some(99)),
            comment(3, Some(2)),
        ]);
        // the orphan and its subtree vanish from the rendered forest
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, 1);
        assert!(roots[0].children.is_empty());
        // but the total reflects storage, not the rendered tree
        assert_eq!(total, 3);
    }

    #[test]
    fn self_reference_does_not_loop() {
        let (roots, total) = build_comment_tree(vec![comment(1, Some(1)), comment(2, None)]);
        assert_eq!(total, 2);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, 2);
    }

    #[test]
    fn deep_chain_nests_fully() {
        let mut input = vec![comment(1, None)];
        for id in 2..=50 {
            input.push(comment(id, Some(id - 1)));
        }
        let (roots, total) = build_comment_tree(input);
        assert_eq!(total, 50);
        let mut node = &roots[0];
        let mut depth = 1;
        while let Some(child) = node.children.first() {
            node = child;
            depth += 1;
        }
        assert_eq!(depth, 50);
    }
}
