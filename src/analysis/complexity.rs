use tree_sitter::{Node, Parser};

/// Branch-count complexity for one Python function, method or class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityEntry {
    /// Name of the enclosing unit (`def`/`async def`/`class`)
    pub unit: String,
    /// Heuristic score, always >= 1
    pub score: u32,
}

// Statement kinds that each add one point. Mirrors counting every
// conditional, loop, exception handler and assert in the unit's subtree.
// `elif_clause` is separate because the grammar does not nest it as an
// inner if_statement.
const BRANCH_KINDS: &[&str] = &[
    "if_statement",
    "elif_clause",
    "while_statement",
    "for_statement",
    "except_clause",
    "assert_statement",
];

/// Score every function/class definition in a Python source file.
///
/// Each unit starts at 1 and gains a point per branch construct anywhere
/// inside it. `boolean_operator` nodes are binary, so a short-circuit
/// chain of N operands contributes N-1 points. Nested definitions are
/// scored on their own *and* counted toward their enclosing unit; that
/// double counting is a long-standing heuristic quirk kept on purpose.
///
/// Fails soft: a file that does not parse cleanly yields no entries.
pub fn analyze_python_complexity(content: &str) -> Vec<ComplexityEntry> {
    let mut parser = Parser::new();
    if parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .is_err()
    {
        tracing::warn!("failed to load Python grammar for complexity scoring");
        return Vec::new();
    }

    let tree = match parser.parse(content, None) {
        Some(tree) => tree,
        None => return Vec::new(),
    };
    // Tree-sitter always produces a tree; treat recovery nodes as the
    // parse failure they represent and skip the file.
    if tree.root_node().has_error() {
        return Vec::new();
    }

    let mut entries = Vec::new();
    for node in preorder(tree.root_node()) {
        if node.kind() == "function_definition" || node.kind() == "class_definition" {
            let unit = node
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(content.as_bytes()).ok())
                .unwrap_or("<anonymous>")
                .to_string();
            entries.push(ComplexityEntry {
                unit,
                score: score_subtree(node),
            });
        }
    }
    entries
}

fn score_subtree(unit: Node<'_>) -> u32 {
    let mut score = 1u32;
    for node in preorder(unit) {
        let kind = node.kind();
        if BRANCH_KINDS.contains(&kind) || kind == "boolean_operator" {
            score += 1;
        }
    }
    score
}

/// Iterative preorder walk; explicit stack so deep trees cannot overflow.
fn preorder(root: Node<'_>) -> Vec<Node<'_>> {
    let mut stack = vec![root];
    let mut nodes = Vec::new();
    while let Some(node) = stack.pop() {
        nodes.push(node);
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        // Reverse so the stack pops left to right, keeping document order
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    nodes
}
