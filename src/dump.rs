//! Diagnostic tree dump.
//!
//! Debugging aid only; the output format is not part of the crate's
//! contract and may change.

use std::io::{self, Write};

use crate::node::Node;
use crate::set::StringSet;

impl StringSet {
    /// Writes the tree's shape to `w`: one line per edge, indented two
    /// spaces per level of depth, with an `(end)` annotation on edges that
    /// complete a stored string. Children appear in code-point order.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the sink.
    pub fn dump<W: Write>(&self, w: &mut W) -> io::Result<()> {
        if self.contains_empty {
            writeln!(w, "(empty string)")?;
        }
        dump_node(&self.root, 0, w)
    }
}

fn dump_node<W: Write>(node: &Node, depth: usize, w: &mut W) -> io::Result<()> {
    for (c, child) in &node.children {
        write!(w, "{:indent$}", "", indent = depth * 2)?;
        if child.terminal {
            writeln!(w, "{c} (end)")?;
        } else {
            writeln!(w, "{c}")?;
        }
        dump_node(child, depth + 1, w)?;
    }
    Ok(())
}
