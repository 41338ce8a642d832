// src/checks/private_keys.rs
//! Hard-coded private-key detection.
//!
//! Walks the syntax tree depth-first and inspects every construct that can
//! bind a string literal to a name: variable declarators, assignments,
//! class field declarations, equality comparisons against an identifier,
//! and object properties. A literal whose normalized text contains a PEM
//! private-key header is reported at that node.
//!
//! Matching is substring-based: a flagged block is not required to be a
//! structurally valid key, and keys assembled from several literals or
//! built through concatenation/encoding are not detected. Every matching
//! node reports its own issue; there is no cross-node deduplication.

use tree_sitter::Node;

use crate::markers::contains_private_key_marker;
use crate::normalize::normalize;
use crate::rule::{RULE_KEY, RULE_MESSAGE};
use crate::types::{Issue, IssueDetails, IssueSink};

use super::CheckContext;

#[cfg(test)]
#[path = "private_keys_test.rs"]
mod tests;

/// Runs the private-key check over the whole tree, reporting into `out`.
pub fn check_private_keys(ctx: &CheckContext, out: &mut dyn IssueSink) {
    walk(ctx.root, ctx.source, out);
}

fn walk(node: Node, source: &str, out: &mut dyn IssueSink) {
    inspect(node, source, out);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, source, out);
    }
}

// Grammar note: `field_definition` is the JavaScript class-field kind,
// `public_field_definition` the TypeScript one.
fn inspect(node: Node, source: &str, out: &mut dyn IssueSink) {
    match node.kind() {
        "variable_declarator" => visit_declarator(node, source, out),
        "assignment_expression" => visit_assignment(node, source, out),
        "field_definition" | "public_field_definition" => visit_field(node, source, out),
        "binary_expression" => visit_binary(node, source, out),
        "pair" => visit_pair(node, source, out),
        _ => {}
    }
}

/// `const key = "..."` and friends.
fn visit_declarator(node: Node, source: &str, out: &mut dyn IssueSink) {
    let Some(value) = node.child_by_field_name("value") else {
        return;
    };
    if !is_string_literal(value) {
        return;
    }
    let Some(name) = node.child_by_field_name("name") else {
        return;
    };
    validate(node, text(name, source), text(value, source), out);
}

/// `target = "..."`, including member targets like `obj.secret`.
fn visit_assignment(node: Node, source: &str, out: &mut dyn IssueSink) {
    let Some(right) = node.child_by_field_name("right") else {
        return;
    };
    if !is_string_literal(right) {
        return;
    }
    let Some(left) = node.child_by_field_name("left") else {
        return;
    };
    validate(node, text(left, source), text(right, source), out);
}

/// `class C { k = "..." }`. A declaration without an initializer has no
/// `value` field; that is a valid shape, not an error, and yields no
/// candidate.
fn visit_field(node: Node, source: &str, out: &mut dyn IssueSink) {
    let Some(value) = node.child_by_field_name("value") else {
        return;
    };
    if !is_string_literal(value) {
        return;
    }
    let name = node
        .child_by_field_name("property")
        .or_else(|| node.child_by_field_name("name"));
    let Some(name) = name else {
        return;
    };
    validate(node, text(name, source), text(value, source), out);
}

/// `name == "..."` with the identifier on either side.
fn visit_binary(node: Node, source: &str, out: &mut dyn IssueSink) {
    let (Some(left), Some(right)) = (
        node.child_by_field_name("left"),
        node.child_by_field_name("right"),
    ) else {
        return;
    };

    let mut name = "";
    let mut value = "";
    if left.kind() == "identifier" && is_string_literal(right) {
        name = text(left, source);
        value = text(right, source);
    } else if right.kind() == "identifier" && is_string_literal(left) {
        name = text(right, source);
        value = text(left, source);
    }

    // Validated even when neither operand qualifies: the empty value fails
    // the non-empty gate and nothing is reported.
    validate(node, name, value, out);
}

/// `{ "key": "..." }` object properties.
fn visit_pair(node: Node, source: &str, out: &mut dyn IssueSink) {
    let Some(value) = node.child_by_field_name("value") else {
        return;
    };
    if !is_string_literal(value) {
        return;
    }
    let Some(key) = node.child_by_field_name("key") else {
        return;
    };
    validate(node, text(key, source), text(value, source), out);
}

/// Shared gate: normalize both halves, then test the value against the
/// marker set. The name is case-folded and carried only as reporting
/// detail; the match itself is on the value alone and case-sensitive.
fn validate(node: Node, name: &str, value: &str, out: &mut dyn IssueSink) {
    let name = normalize(name, true);
    let value = normalize(value, false);

    if value.is_empty() || !contains_private_key_marker(&value) {
        return;
    }

    let pos = node.start_position();
    let details = IssueDetails {
        binding_name: if name.is_empty() { None } else { Some(name) },
    };
    out.report(Issue::with_details(
        pos.row + 1,
        pos.column + 1,
        RULE_MESSAGE.to_string(),
        RULE_KEY,
        details,
    ));
}

fn is_string_literal(node: Node) -> bool {
    matches!(node.kind(), "string" | "template_string")
}

fn text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}
