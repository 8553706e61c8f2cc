//! Property-based tests for goscope-syntax.
//!
//! These tests verify traversal and tree-building invariants for arbitrary
//! trees using proptest.
//!
//! Run with: cargo test -p goscope-syntax --test `property_tests`

use std::ops::ControlFlow;

use goscope_syntax::walk::{transparent_children, walk};
use goscope_syntax::{Node, NodeKind, Span, TreeBuilder, TreeError};
use proptest::prelude::*;
use proptest::sample::Index;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_leaf() -> impl Strategy<Value = Node> {
    (
        prop_oneof![
            Just(NodeKind::Other),
            Just(NodeKind::FunctionDecl),
            Just(NodeKind::MethodDecl),
            Just(NodeKind::Placeholder),
        ],
        "[a-z]{1,4}",
    )
        .prop_map(|(kind, text)| Node::leaf(kind, Span::default(), text))
}

/// Trees where placeholders nest at arbitrary depth, mixed with ordinary
/// branches whose contents must not be spliced.
fn arb_tree() -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(6, 96, 5, |inner| {
        (
            prop_oneof![
                2 => Just(NodeKind::Placeholder),
                1 => Just(NodeKind::Other),
            ],
            prop::collection::vec(inner, 0..5),
        )
            .prop_map(|(kind, children)| Node::branch(kind, Span::default(), "", children))
    })
}

fn arb_file() -> impl Strategy<Value = Node> {
    prop::collection::vec(arb_tree(), 0..6)
        .prop_map(|children| Node::branch(NodeKind::File, Span::default(), "", children))
}

// ============================================================================
// Reference implementation
// ============================================================================

fn splice_recursive<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    for child in node.children() {
        if child.is_placeholder() {
            splice_recursive(child, out);
        } else {
            out.push(child);
        }
    }
}

fn spliced(node: &Node) -> Vec<&Node> {
    let mut out = Vec::new();
    splice_recursive(node, &mut out);
    out
}

// ============================================================================
// Traversal properties
// ============================================================================

proptest! {
    /// The iterator yields exactly the recursive splice, in the same order.
    #[test]
    fn prop_transparent_children_match_recursive_splice(file in arb_file()) {
        let expected = spliced(&file);
        let actual: Vec<_> = transparent_children(&file).collect();

        prop_assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(&expected) {
            prop_assert!(a.ptr_eq(e));
        }
    }

    /// No placeholder is ever yielded, however deep it sits.
    #[test]
    fn prop_never_yields_placeholder(file in arb_file()) {
        prop_assert!(transparent_children(&file).all(|node| !node.is_placeholder()));
    }

    /// A walk that runs to completion visits every spliced child once.
    #[test]
    fn prop_walk_visits_all(file in arb_file()) {
        let mut visited = 0usize;
        let flow: ControlFlow<()> = walk(&file, |_| {
            visited += 1;
            ControlFlow::Continue(())
        });

        prop_assert_eq!(flow, ControlFlow::Continue(()));
        prop_assert_eq!(visited, spliced(&file).len());
    }

    /// Breaking on the k-th child returns it and visits nothing after it.
    #[test]
    fn prop_walk_stops_early(file in arb_file(), pick in any::<Index>()) {
        let expected = spliced(&file);
        prop_assume!(!expected.is_empty());
        let target = pick.index(expected.len());

        let mut visited = 0usize;
        let flow = walk(&file, |node| {
            visited += 1;
            if visited == target + 1 {
                ControlFlow::Break(node)
            } else {
                ControlFlow::Continue(())
            }
        });

        match flow {
            ControlFlow::Break(node) => prop_assert!(node.ptr_eq(expected[target])),
            ControlFlow::Continue(()) => prop_assert!(false, "walk did not stop"),
        }
        prop_assert_eq!(visited, target + 1);
    }
}

// ============================================================================
// Builder properties
// ============================================================================

proptest! {
    /// Consecutive leaves inside one enclosing node always build, and keep
    /// their order and text.
    #[test]
    fn prop_builder_keeps_leaf_order(words in prop::collection::vec("[a-z]{1,6}", 1..12)) {
        let source = words.join(" ");
        let mut b = TreeBuilder::new(&source);
        b.start_node(NodeKind::File, 0).unwrap();
        let mut offset = 0;
        for word in &words {
            b.named_leaf(NodeKind::VarDefinition, Span::new(offset, offset + word.len()))
                .unwrap();
            offset += word.len() + 1;
        }
        b.finish_node(source.len()).unwrap();
        let root = b.finish().unwrap();

        let texts: Vec<_> = root.children().iter().map(|n| n.text().to_owned()).collect();
        prop_assert_eq!(texts, words);
    }

    /// Finishing a node before its last child ends is rejected and leaves
    /// the node open.
    #[test]
    fn prop_builder_rejects_short_parent(len in 2usize..40, cut in 1usize..40) {
        let source = "x".repeat(len);
        let cut = cut.min(len - 1);
        let mut b = TreeBuilder::new(&source);
        b.start_node(NodeKind::Other, 0).unwrap();
        b.leaf(NodeKind::Other, Span::new(0, len)).unwrap();

        prop_assert_eq!(
            b.finish_node(cut),
            Err(TreeError::ChildOutsideParent {
                child: Span::new(0, len),
                parent: Span::new(0, cut),
            })
        );
        prop_assert_eq!(b.depth(), 1);
    }
}

#[test]
fn test_deep_placeholder_chain() {
    let mut node = Node::leaf(NodeKind::FunctionDecl, Span::default(), "func f() {}");
    let leaf = node.clone();
    for _ in 0..50_000 {
        node = Node::branch(NodeKind::Placeholder, Span::default(), "", vec![node]);
    }
    let file = Node::branch(NodeKind::File, Span::default(), "", vec![node]);

    let children: Vec<_> = transparent_children(&file).collect();
    assert_eq!(children.len(), 1);
    assert!(children[0].ptr_eq(&leaf));
}
