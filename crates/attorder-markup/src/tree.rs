//! Lossless syntax tree.
//!
//! The tree is a flat sequence of nodes: tags are not matched with their
//! closing tags, and nothing is nested. Rendering every node with
//! [`Display`](fmt::Display) and concatenating the results reproduces the
//! source, apart from the attribute order inside opening tags.

use core::fmt;

use strum_macros::{Display, EnumIter};

/// How an attribute name is wrapped in the source.
///
/// Component templating dialects bind attributes with punctuation around or
/// in front of the name. The wrapper is kept so it renders back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum AttributeKind {
    /// `name`
    Plain,
    /// `[name]`
    Bracket,
    /// `(name)`
    Paren,
    /// `#name`
    Hash,
    /// `@name`
    At,
    /// `*name`
    Star,
    /// `[(name)]`
    TwoWay,
}

impl AttributeKind {
    /// The text rendered before and after the attribute name.
    #[must_use]
    pub const fn wrapper(self) -> (&'static str, &'static str) {
        match self {
            Self::Plain => ("", ""),
            Self::Bracket => ("[", "]"),
            Self::Paren => ("(", ")"),
            Self::Hash => ("#", ""),
            Self::At => ("@", ""),
            Self::Star => ("*", ""),
            Self::TwoWay => ("[(", ")]"),
        }
    }
}

/// A single attribute of an opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    kind: AttributeKind,
    value: Option<String>,
}

impl Attribute {
    /// Create a new attribute.
    ///
    /// A quoted `value` must include its quote characters.
    #[must_use]
    pub const fn new(name: String, kind: AttributeKind, value: Option<String>) -> Self {
        Self { name, kind, value }
    }

    /// The attribute name without its wrapper. This is what order patterns
    /// are matched against.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the name is wrapped.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// The value exactly as written after `=`, quotes included.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the attribute was written with `=`.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.kind.wrapper();
        write!(f, "{open}{}{close}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}

/// An opening tag, `<name ...>`.
///
/// Whitespace is stored per slot, not per attribute: `slot_whitespace()[i]`
/// is rendered before whichever attribute sits at index `i`. Reordering moves
/// attributes between slots and leaves the whitespace where it was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpeningTag {
    name: String,
    attributes: Vec<Attribute>,
    slot_whitespace: Vec<String>,
    trailing_whitespace: String,
    self_closing: bool,
}

impl OpeningTag {
    /// Create an opening tag with no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append an attribute together with the whitespace written before it.
    pub fn push_attribute(&mut self, whitespace: impl Into<String>, attribute: Attribute) {
        self.slot_whitespace.push(whitespace.into());
        self.attributes.push(attribute);
    }

    /// Record the whitespace after the last attribute and whether the tag
    /// ends with `/>`.
    pub fn finish(&mut self, trailing_whitespace: impl Into<String>, self_closing: bool) {
        self.trailing_whitespace = trailing_whitespace.into();
        self.self_closing = self_closing;
    }

    /// The tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes in render order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The attributes, for permuting in place. The slice cannot change
    /// length, so every attribute keeps a whitespace slot.
    pub fn attributes_mut(&mut self) -> &mut [Attribute] {
        &mut self.attributes
    }

    /// The whitespace rendered before each attribute slot.
    #[must_use]
    pub fn slot_whitespace(&self) -> &[String] {
        &self.slot_whitespace
    }

    /// The whitespace between the last attribute and `/` or `>`.
    #[must_use]
    pub fn trailing_whitespace(&self) -> &str {
        &self.trailing_whitespace
    }

    /// Whether the tag was written as `<name ... />`.
    #[must_use]
    pub const fn is_self_closing(&self) -> bool {
        self.self_closing
    }
}

impl fmt::Display for OpeningTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (whitespace, attribute) in self.slot_whitespace.iter().zip(&self.attributes) {
            write!(f, "{whitespace}{attribute}")?;
        }
        f.write_str(&self.trailing_whitespace)?;
        if self.self_closing {
            f.write_str("/")?;
        }
        f.write_str(">")
    }
}

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Any run of source that is not a tag, comment or bang-tag.
    Text(String),
    /// `<name ...>`
    OpeningTag(OpeningTag),
    /// `</name>`
    ClosingTag(String),
    /// `<!--...-->`, holding the text between the markers.
    Comment(String),
    /// `<!...>`, holding the text between the markers.
    BangTag(String),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(content) => f.write_str(content),
            Self::OpeningTag(tag) => fmt::Display::fmt(tag, f),
            Self::ClosingTag(name) => write!(f, "</{name}>"),
            Self::Comment(content) => write!(f, "<!--{content}-->"),
            Self::BangTag(content) => write!(f, "<!{content}>"),
        }
    }
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl SyntaxTree {
    /// Create a tree from its nodes.
    #[must_use]
    pub const fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// The nodes in source order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Take the nodes out of the tree.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.nodes.iter().try_for_each(|node| fmt::Display::fmt(node, f))
    }
}

/// Print a debug outline of the tree, one node per line.
///
/// Opening tags indent the lines after them and closing tags dedent, which
/// gives a rough picture of the nesting without the parser knowing about it.
pub fn print_tree(tree: &SyntaxTree) {
    let mut depth = 0usize;
    for node in tree.nodes() {
        if matches!(node, Node::ClosingTag(_)) {
            depth = depth.saturating_sub(1);
        }
        let prefix = "  ".repeat(depth);
        match node {
            Node::Text(content) => {
                let display = content.replace('\n', "\\n").replace(' ', "\u{00B7}");
                println!("{prefix}\"{display}\"");
            }
            Node::OpeningTag(tag) => {
                let attrs: Vec<String> = tag.attributes().iter().map(ToString::to_string).collect();
                if attrs.is_empty() {
                    println!("{prefix}<{}>", tag.name());
                } else {
                    println!("{prefix}<{} {}>", tag.name(), attrs.join(" "));
                }
                if !tag.is_self_closing() {
                    depth += 1;
                }
            }
            Node::ClosingTag(name) => println!("{prefix}</{name}>"),
            Node::Comment(content) => println!("{prefix}<!--{content}-->"),
            Node::BangTag(content) => println!("{prefix}<!{content}>"),
        }
    }
}
