//! Arena-based document tree with text/tail model support.
//!
//! Elements are stored in a flat arena and addressed by stable [`NodeId`]
//! indices; each node keeps a parent index for cheap upward traversal, so the
//! tree stays acyclic in ownership terms while still being navigable in both
//! directions.
//!
//! ## Text vs Tail
//!
//! Text placement follows the lxml-style model:
//! - **Text**: text content BEFORE the first child element
//! - **Tail**: text content AFTER the element's closing tag
//!
//! ```html
//! <div>
//!   TEXT HERE          <!-- This is div's "text" -->
//!   <span>inner</span>
//!   TAIL HERE          <!-- This is span's "tail" -->
//! </div>
//! ```

/// Stable handle to a node inside a [`Document`] arena.
///
/// Handles stay valid for the lifetime of the document; removing a subtree
/// detaches it but never invalidates indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: Option<String>,
    tail: Option<String>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attrs: Vec::new(),
            parent: None,
            children: Vec::new(),
            text: None,
            tail: None,
        }
    }
}

/// Void elements are serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// A mutable document tree owned by the caller.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create a document consisting of a single root element.
    #[must_use]
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![Node::new(root_tag)],
            root: NodeId(0),
        }
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a new, detached element.
    pub fn push_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Lowercased tag name.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Preceding siblings, nearest first.
    #[must_use]
    pub fn preceding_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.nodes[id.0].parent else {
            return Vec::new();
        };
        let siblings = &self.nodes[parent.0].children;
        let Some(pos) = siblings.iter().position(|&c| c == id) else {
            return Vec::new();
        };
        siblings[..pos].iter().rev().copied().collect()
    }

    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0]
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any previous value (keys stay unique).
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let attrs = &mut self.nodes[id.0].attrs;
        if let Some(entry) = attrs.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
        } else {
            attrs.push((name.to_string(), value.to_string()));
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        self.nodes[id.0].attrs.retain(|(k, _)| k != name);
    }

    #[must_use]
    pub fn attrs(&self, id: NodeId) -> &[(String, String)] {
        &self.nodes[id.0].attrs
    }

    #[must_use]
    pub fn attr_names(&self, id: NodeId) -> Vec<String> {
        self.nodes[id.0].attrs.iter().map(|(k, _)| k.clone()).collect()
    }

    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].text.as_deref()
    }

    #[must_use]
    pub fn tail(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].tail.as_deref()
    }

    pub fn set_text(&mut self, id: NodeId, text: Option<String>) {
        self.nodes[id.0].text = text;
    }

    pub fn set_tail(&mut self, id: NodeId, tail: Option<String>) {
        self.nodes[id.0].tail = tail;
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Remove the subtree rooted at `id` from the tree.
    ///
    /// The removed node's tail text is preserved in the surrounding text
    /// flow: it is appended to the previous sibling's tail, or to the
    /// parent's text when the node was the first child. No-op on the root
    /// or on already-detached nodes.
    pub fn drop_tree(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.0].parent else {
            return;
        };
        if let Some(tail) = self.nodes[id.0].tail.take() {
            let siblings = &self.nodes[parent.0].children;
            let prev = siblings
                .iter()
                .position(|&c| c == id)
                .and_then(|pos| pos.checked_sub(1).map(|p| siblings[p]));
            match prev {
                Some(prev) => {
                    let merged = self.nodes[prev.0].tail.take().unwrap_or_default() + &tail;
                    self.nodes[prev.0].tail = Some(merged);
                }
                None => {
                    let merged = self.nodes[parent.0].text.take().unwrap_or_default() + &tail;
                    self.nodes[parent.0].text = Some(merged);
                }
            }
        }
        self.detach(id);
    }

    /// Path-like locator for `id`, e.g. `/html[1]/body[1]/div[2]/p[1]`.
    ///
    /// Indices are 1-based positions among same-tag siblings. A locator
    /// produced here resolves back to the node via [`Document::resolve`] as
    /// long as the tree shape above the node is unchanged.
    #[must_use]
    pub fn locator(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            let position = match self.nodes[node.0].parent {
                Some(parent) => {
                    self.nodes[parent.0]
                        .children
                        .iter()
                        .take_while(|&&c| c != node)
                        .filter(|&&c| self.nodes[c.0].tag == self.nodes[node.0].tag)
                        .count()
                        + 1
                }
                None => 1,
            };
            segments.push(format!("{}[{}]", self.nodes[node.0].tag, position));
            current = self.nodes[node.0].parent;
        }
        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    /// Resolve a locator back into the tree.
    ///
    /// Returns an empty sequence when the locator is stale or malformed;
    /// staleness is an expected, non-fatal condition.
    #[must_use]
    pub fn resolve(&self, locator: &str) -> Vec<NodeId> {
        let mut segments = locator.split('/').filter(|s| !s.is_empty());
        let Some(first) = segments.next() else {
            return Vec::new();
        };
        let Some((tag, position)) = parse_segment(first) else {
            return Vec::new();
        };
        if self.nodes[self.root.0].tag != tag || position != 1 {
            return Vec::new();
        }
        let mut current = self.root;
        for segment in segments {
            let Some((tag, position)) = parse_segment(segment) else {
                return Vec::new();
            };
            let mut seen = 0;
            let mut next = None;
            for &child in &self.nodes[current.0].children {
                if self.nodes[child.0].tag == tag {
                    seen += 1;
                    if seen == position {
                        next = Some(child);
                        break;
                    }
                }
            }
            match next {
                Some(child) => current = child,
                None => return Vec::new(),
            }
        }
        vec![current]
    }

    /// Serialize the subtree rooted at `id` to pretty-printed markup.
    ///
    /// Elements carrying inline text (own text or child tails) are written
    /// on a single line so no whitespace is injected into the text flow;
    /// purely structural elements are indented. Driven by an explicit work
    /// stack, so nesting depth never grows the call stack.
    #[must_use]
    pub fn serialize(&self, id: NodeId) -> String {
        enum Render {
            Block(NodeId, usize),
            Inline(NodeId),
            // close tag followed by the node's tail text
            InlineEnd(NodeId),
            // close tag and newline, no indentation (after inline content)
            LineEnd(NodeId),
            // indentation, close tag, newline (after block children)
            BlockEnd(NodeId, usize),
        }

        let mut out = String::new();
        let mut stack = vec![Render::Block(id, 0)];
        while let Some(step) = stack.pop() {
            match step {
                Render::Block(id, depth) => {
                    let node = &self.nodes[id.0];
                    out.push_str(&"  ".repeat(depth));
                    self.write_open_tag(id, &mut out);
                    if VOID_ELEMENTS.contains(&node.tag.as_str()) {
                        out.push('\n');
                    } else if self.has_inline_content(id) {
                        if let Some(text) = &node.text {
                            push_escaped_text(text, &mut out);
                        }
                        stack.push(Render::LineEnd(id));
                        for &child in node.children.iter().rev() {
                            stack.push(Render::Inline(child));
                        }
                    } else if node.children.is_empty() {
                        self.write_close_tag(id, &mut out);
                        out.push('\n');
                    } else {
                        out.push('\n');
                        stack.push(Render::BlockEnd(id, depth));
                        for &child in node.children.iter().rev() {
                            stack.push(Render::Block(child, depth + 1));
                        }
                    }
                }
                Render::Inline(id) => {
                    let node = &self.nodes[id.0];
                    self.write_open_tag(id, &mut out);
                    if VOID_ELEMENTS.contains(&node.tag.as_str()) {
                        if let Some(tail) = &node.tail {
                            push_escaped_text(tail, &mut out);
                        }
                    } else {
                        if let Some(text) = &node.text {
                            push_escaped_text(text, &mut out);
                        }
                        stack.push(Render::InlineEnd(id));
                        for &child in node.children.iter().rev() {
                            stack.push(Render::Inline(child));
                        }
                    }
                }
                Render::InlineEnd(id) => {
                    self.write_close_tag(id, &mut out);
                    if let Some(tail) = &self.nodes[id.0].tail {
                        push_escaped_text(tail, &mut out);
                    }
                }
                Render::LineEnd(id) => {
                    self.write_close_tag(id, &mut out);
                    out.push('\n');
                }
                Render::BlockEnd(id, depth) => {
                    out.push_str(&"  ".repeat(depth));
                    self.write_close_tag(id, &mut out);
                    out.push('\n');
                }
            }
        }
        out
    }

    fn has_inline_content(&self, id: NodeId) -> bool {
        self.nodes[id.0].text.is_some()
            || self.nodes[id.0]
                .children
                .iter()
                .any(|&c| self.nodes[c.0].tail.is_some())
    }

    fn write_open_tag(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        out.push('<');
        out.push_str(&node.tag);
        for (name, value) in &node.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            push_escaped_attr(value, out);
            out.push('"');
        }
        out.push('>');
    }

    fn write_close_tag(&self, id: NodeId, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.nodes[id.0].tag);
        out.push('>');
    }
}

fn parse_segment(segment: &str) -> Option<(&str, usize)> {
    match segment.find('[') {
        Some(open) => {
            let close = segment.rfind(']')?;
            let position = segment.get(open + 1..close)?.parse().ok()?;
            Some((&segment[..open], position))
        }
        None => Some((segment, 1)),
    }
}

fn push_escaped_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn push_escaped_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
