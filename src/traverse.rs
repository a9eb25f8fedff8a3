//! Order-defined traversal over the document tree.
//!
//! [`precedings`] walks in reverse document order starting immediately
//! before a node: preceding siblings (each preceded by its own subtree in
//! reverse order), then the parent, then the parent's precedings, and so on.
//! This is the workhorse for scanning backwards from a content paragraph
//! toward earlier siblings and ancestors.
//!
//! [`depth_first`] is plain pre-order traversal with optional subtree
//! pruning, used to scan every element while skipping regions such as
//! comment sections.
//!
//! Both iterators use an explicit work stack rather than recursion.

use crate::tree::{Document, NodeId};

type Predicate<'a> = Box<dyn FnMut(NodeId) -> bool + 'a>;

enum Frame {
    Visit(NodeId),
    RevSubtree(NodeId),
    Precede(NodeId),
}

/// Lazy reverse-document-order traversal starting before `node`.
///
/// The start node itself is not yielded. Install predicates with
/// [`Precedings::stop_at`] and [`Precedings::skip`] before iterating.
pub fn precedings(doc: &Document, node: NodeId) -> Precedings<'_> {
    Precedings {
        doc,
        start: node,
        stack: Vec::new(),
        stop: None,
        skip: None,
        started: false,
    }
}

pub struct Precedings<'a> {
    doc: &'a Document,
    start: NodeId,
    stack: Vec<Frame>,
    stop: Option<Predicate<'a>>,
    skip: Option<Predicate<'a>>,
    started: bool,
}

impl<'a> Precedings<'a> {
    /// Halt the sequence permanently the first time `pred` holds; the
    /// matching node is not yielded.
    #[must_use]
    pub fn stop_at(mut self, pred: impl FnMut(NodeId) -> bool + 'a) -> Self {
        self.stop = Some(Box::new(pred));
        self
    }

    /// Omit nodes for which `pred` holds, together with their subtrees.
    /// A skipped parent ends the upward walk entirely.
    #[must_use]
    pub fn skip(mut self, pred: impl FnMut(NodeId) -> bool + 'a) -> Self {
        self.skip = Some(Box::new(pred));
        self
    }

    fn skipped(&mut self, node: NodeId) -> bool {
        self.skip.as_mut().is_some_and(|pred| pred(node))
    }

    fn push_ordered(&mut self, frames: Vec<Frame>) {
        for frame in frames.into_iter().rev() {
            self.stack.push(frame);
        }
    }
}

impl Iterator for Precedings<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.started {
            self.started = true;
            self.stack.push(Frame::Precede(self.start));
        }
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Visit(node) => {
                    if self.stop.as_mut().is_some_and(|pred| pred(node)) {
                        self.stack.clear();
                        return None;
                    }
                    return Some(node);
                }
                Frame::RevSubtree(node) => {
                    let children: Vec<NodeId> =
                        self.doc.children(node).iter().rev().copied().collect();
                    let mut frames = Vec::new();
                    for child in children {
                        if self.skipped(child) {
                            continue;
                        }
                        frames.push(Frame::RevSubtree(child));
                        frames.push(Frame::Visit(child));
                    }
                    self.push_ordered(frames);
                }
                Frame::Precede(node) => {
                    let mut frames = Vec::new();
                    for sibling in self.doc.preceding_siblings(node) {
                        if self.skipped(sibling) {
                            continue;
                        }
                        frames.push(Frame::RevSubtree(sibling));
                        frames.push(Frame::Visit(sibling));
                    }
                    if let Some(parent) = self.doc.parent(node) {
                        if !self.skipped(parent) {
                            frames.push(Frame::Visit(parent));
                            frames.push(Frame::Precede(parent));
                        }
                    }
                    self.push_ordered(frames);
                }
            }
        }
        None
    }
}

/// Pre-order traversal yielding `node` first, then each child's subtree.
///
/// Install a pruning predicate with [`DepthFirst::skip`]: a matching node is
/// omitted along with its entire subtree.
pub fn depth_first(doc: &Document, node: NodeId) -> DepthFirst<'_> {
    DepthFirst {
        doc,
        stack: vec![node],
        skip: None,
    }
}

pub struct DepthFirst<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
    skip: Option<Predicate<'a>>,
}

impl<'a> DepthFirst<'a> {
    #[must_use]
    pub fn skip(mut self, pred: impl FnMut(NodeId) -> bool + 'a) -> Self {
        self.skip = Some(Box::new(pred));
        self
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(node) = self.stack.pop() {
            if self.skip.as_mut().is_some_and(|pred| pred(node)) {
                continue;
            }
            for &child in self.doc.children(node).iter().rev() {
                self.stack.push(child);
            }
            return Some(node);
        }
        None
    }
}
