//! Property-based tests for the declaration views.
//!
//! These tests verify invariants hold for arbitrary file shapes using proptest.
//!
//! Run with: cargo test -p goscope-file --test `property_tests`

use goscope_file::GoFile;
use goscope_syntax::{Node, NodeKind, Span, Token};
use proptest::prelude::*;

// ============================================================================
// Arbitrary generators
// ============================================================================

#[derive(Debug, Clone)]
enum Decl {
    Function,
    Method,
    Vars(Vec<usize>),
    Consts(Vec<usize>),
    Junk,
}

fn arb_definition_counts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..4, 0..4)
}

fn arb_decl() -> impl Strategy<Value = Decl> {
    prop_oneof![
        Just(Decl::Function),
        Just(Decl::Method),
        arb_definition_counts().prop_map(Decl::Vars),
        arb_definition_counts().prop_map(Decl::Consts),
        Just(Decl::Junk),
    ]
}

fn arb_file() -> impl Strategy<Value = Vec<(Decl, bool)>> {
    prop::collection::vec((arb_decl(), any::<bool>()), 0..24)
}

// ============================================================================
// Tree construction
// ============================================================================

fn named(kind: NodeKind, name: &str) -> Node {
    Node::leaf(kind, Span::default(), name).with_name(Token::new(name, Span::default()))
}

fn branch(kind: NodeKind, children: Vec<Node>) -> Node {
    Node::branch(kind, Span::default(), "", children)
}

fn group(decl: usize, counts: &[usize], kinds: [NodeKind; 3]) -> Node {
    let [group_kind, spec_kind, def_kind] = kinds;
    let specs = counts
        .iter()
        .enumerate()
        .map(|(spec, &count)| {
            let defs = (0..count)
                .map(|def| named(def_kind, &format!("d{decl}_{spec}_{def}")))
                .collect();
            branch(spec_kind, defs)
        })
        .collect();
    branch(group_kind, specs)
}

fn build_decl(index: usize, decl: &Decl) -> Node {
    match decl {
        Decl::Function => named(NodeKind::FunctionDecl, &format!("f{index}")),
        Decl::Method => named(NodeKind::MethodDecl, &format!("m{index}")),
        Decl::Vars(counts) => group(
            index,
            counts,
            [NodeKind::VarDecl, NodeKind::VarSpec, NodeKind::VarDefinition],
        ),
        Decl::Consts(counts) => group(
            index,
            counts,
            [NodeKind::ConstDecl, NodeKind::ConstSpec, NodeKind::ConstDefinition],
        ),
        Decl::Junk => named(NodeKind::Other, &format!("x{index}")),
    }
}

fn build_file(decls: &[(Decl, bool)], wrap: bool) -> Node {
    let children = decls
        .iter()
        .enumerate()
        .map(|(index, (decl, wrapped))| {
            let node = build_decl(index, decl);
            if wrap && *wrapped {
                branch(NodeKind::Placeholder, vec![node])
            } else {
                node
            }
        })
        .collect();
    if wrap {
        branch(NodeKind::File, vec![branch(NodeKind::Placeholder, children)])
    } else {
        branch(NodeKind::File, children)
    }
}

fn expected_definitions(decls: &[(Decl, bool)], consts: bool) -> Vec<String> {
    let mut names = Vec::new();
    for (index, (decl, _)) in decls.iter().enumerate() {
        let counts = match (decl, consts) {
            (Decl::Vars(counts), false) | (Decl::Consts(counts), true) => counts,
            _ => continue,
        };
        for (spec, &count) in counts.iter().enumerate() {
            names.extend((0..count).map(|def| format!("d{index}_{spec}_{def}")));
        }
    }
    names
}

#[derive(Debug, PartialEq, Eq)]
struct Summary {
    functions: Vec<String>,
    methods: Vec<String>,
    vars: Vec<String>,
    consts: Vec<String>,
}

fn summarize(file: &GoFile) -> Summary {
    fn names<'a>(items: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
        items.flatten().map(str::to_owned).collect()
    }
    Summary {
        functions: names(file.functions().iter().map(|f| f.name())),
        methods: names(file.methods().iter().map(|m| m.name())),
        vars: names(file.vars().iter().map(|v| v.name())),
        consts: names(file.consts().iter().map(|c| c.name())),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// No node is reported both as a function and as a method.
    #[test]
    fn prop_functions_and_methods_disjoint(decls in arb_file()) {
        let file = GoFile::new(build_file(&decls, false));
        let functions = file.functions();
        let methods = file.methods();

        for func in functions.iter() {
            prop_assert!(methods.iter().all(|m| !m.syntax().ptr_eq(func.syntax())));
        }
        let expected_functions = decls.iter().filter(|(d, _)| matches!(d, Decl::Function)).count();
        let expected_methods = decls.iter().filter(|(d, _)| matches!(d, Decl::Method)).count();
        prop_assert_eq!(functions.len(), expected_functions);
        prop_assert_eq!(methods.len(), expected_methods);
    }

    /// Var and const views hold every definition of every spec, in order.
    #[test]
    fn prop_definitions_flatten_in_order(decls in arb_file()) {
        let file = GoFile::new(build_file(&decls, false));
        let summary = summarize(&file);

        prop_assert_eq!(summary.vars, expected_definitions(&decls, false));
        prop_assert_eq!(summary.consts, expected_definitions(&decls, true));
    }

    /// Wrapping declarations in placeholders changes nothing.
    #[test]
    fn prop_placeholders_are_transparent(decls in arb_file()) {
        let plain = GoFile::new(build_file(&decls, false));
        let wrapped = GoFile::new(build_file(&decls, true));

        prop_assert_eq!(summarize(&plain), summarize(&wrapped));
    }

    /// Reading every view twice computes each view once.
    #[test]
    fn prop_views_computed_once(decls in arb_file()) {
        let file = GoFile::new(build_file(&decls, true));
        let first = summarize(&file);
        let computed = file.computations();
        let second = summarize(&file);

        prop_assert_eq!(computed, 4);
        prop_assert_eq!(file.computations(), computed);
        prop_assert_eq!(first, second);
    }
}
