//! Parser adapter: flattens a `syn` file into an arena of located nodes.
//!
//! The segmentation core never walks `syn` types directly. A single visitor
//! pass reduces the parsed file to the handful of node kinds the builder
//! cares about (blocks, declarations, calls, references), each with a line
//! span, a parent link and a stable identity (its arena index). Binding
//! resolution is a per-unit name index over local declarations.

use crate::core::{Error, Result, Span};
use quote::ToTokens;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use syn::spanned::Spanned;
use syn::visit::Visit;

/// Stable identity of a node within one `SyntaxUnit`
pub type NodeId = usize;

const LABEL_MAX_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The compilation unit itself (arena root)
    Unit,
    /// A `fn` item or impl method declaration
    Function,
    /// A braced block
    Block,
    /// A free or path-qualified call expression
    Call,
    /// A method call expression
    MethodCall,
    /// A field access expression
    Field,
    /// A locally declared struct or enum
    TypeDecl,
    /// A type path in type position
    TypeRef,
    /// A plain path identifier in expression position
    Name,
}

impl NodeKind {
    /// Kinds that reference some declaration by name
    pub fn is_name_like(&self) -> bool {
        matches!(
            self,
            NodeKind::Call
                | NodeKind::MethodCall
                | NodeKind::Field
                | NodeKind::TypeRef
                | NodeKind::Name
        )
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self, NodeKind::Function | NodeKind::TypeDecl)
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Declared or referenced identifier, when the kind carries one
    pub name: Option<String>,
    /// Canonical textual form, truncated for display and dedup
    pub label: String,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// One parsed, located source file
#[derive(Debug)]
pub struct SyntaxUnit {
    path: PathBuf,
    nodes: Vec<SyntaxNode>,
    declarations: HashMap<String, NodeId>,
    /// Declaration -> every location referring to it, declaration site included
    references: HashMap<NodeId, Vec<NodeId>>,
}

impl SyntaxUnit {
    /// Parse source text into a located unit.
    ///
    /// Units with no locatable program element (e.g. an import-only file)
    /// are rejected with `MalformedUnit` so callers can skip them.
    pub fn parse(path: &Path, source: &str) -> Result<SyntaxUnit> {
        let file = syn::parse_str::<syn::File>(source).map_err(|e| Error::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let unit_span = Span::new(1, source.lines().count().max(1));
        let mut builder = UnitBuilder::new(unit_span);
        builder.visit_file(&file);

        let mut unit = SyntaxUnit {
            path: path.to_path_buf(),
            nodes: builder.nodes,
            declarations: builder.declarations,
            references: HashMap::new(),
        };

        if unit.nodes[unit.root()].children.is_empty() {
            return Err(Error::MalformedUnit(path.to_path_buf()));
        }

        unit.index_references();
        Ok(unit)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Source span of a node
    pub fn locate(&self, id: NodeId) -> Span {
        self.nodes[id].span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Parent-hops from the arena root; the root has depth 0
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Whether `ancestor` lies on `id`'s parent chain (or is `id` itself)
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == ancestor {
                return true;
            }
            match self.nodes[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Resolve a name-like node to its local declaration, if any
    pub fn resolve_declaration(&self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id];
        if !node.kind.is_name_like() {
            return None;
        }
        let name = node.name.as_deref()?;
        self.declarations.get(name).copied().filter(|decl| *decl != id)
    }

    /// Number of locations referring to a declaration, the declaration site
    /// included. Returns 0 for non-declaration nodes.
    pub fn reference_count(&self, decl: NodeId) -> usize {
        self.references.get(&decl).map(|refs| refs.len()).unwrap_or(0)
    }

    /// All function declarations in the unit, in source order
    pub fn functions(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind == NodeKind::Function)
            .map(|(id, _)| id)
    }

    /// Find a function declaration by name
    pub fn function_named(&self, name: &str) -> Option<NodeId> {
        self.declarations
            .get(name)
            .copied()
            .filter(|id| self.nodes[*id].kind == NodeKind::Function)
    }

    /// First block in document order within the subtree rooted at `id`
    pub fn first_block_within(&self, id: NodeId) -> Option<NodeId> {
        for &child in &self.nodes[id].children {
            if self.nodes[child].kind == NodeKind::Block {
                return Some(child);
            }
            if let Some(block) = self.first_block_within(child) {
                return Some(block);
            }
        }
        None
    }

    /// Nearest descendant blocks of `id` with no intervening block:
    /// the direct, non-recursive child scan the graph builder walks.
    pub fn nested_blocks(&self, id: NodeId) -> Vec<NodeId> {
        let mut blocks = Vec::new();
        self.collect_nested_blocks(id, &mut blocks);
        blocks
    }

    fn collect_nested_blocks(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[id].children {
            if self.nodes[child].kind == NodeKind::Block {
                out.push(child);
            } else {
                self.collect_nested_blocks(child, out);
            }
        }
    }

    /// Call expressions belonging to `id`'s own body, not crossing into
    /// nested blocks (those are scanned when their block is expanded)
    pub fn calls_within(&self, id: NodeId) -> Vec<NodeId> {
        let mut calls = Vec::new();
        self.collect_kinds(id, &[NodeKind::Call, NodeKind::MethodCall], &mut calls);
        calls
    }

    /// Type references belonging to `id`'s own body, same boundary rule
    pub fn type_refs_within(&self, id: NodeId) -> Vec<NodeId> {
        let mut refs = Vec::new();
        self.collect_kinds(id, &[NodeKind::TypeRef], &mut refs);
        refs
    }

    fn collect_kinds(&self, id: NodeId, kinds: &[NodeKind], out: &mut Vec<NodeId>) {
        for &child in &self.nodes[id].children {
            let kind = self.nodes[child].kind;
            if kind == NodeKind::Block {
                continue;
            }
            if kinds.contains(&kind) {
                out.push(child);
            }
            self.collect_kinds(child, kinds, out);
        }
    }

    /// Top-most name-like elements inside the subtree of `id`: descent stops
    /// at the first name-like node hit, so identifiers nested inside an
    /// already-counted element are not counted again.
    pub fn name_elements(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_name_elements(id, &mut out);
        out
    }

    fn collect_name_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[id].children {
            let kind = self.nodes[child].kind;
            if kind.is_name_like() {
                out.push(child);
            } else if kind != NodeKind::Block {
                self.collect_name_elements(child, out);
            }
        }
    }

    /// Smallest block on the parent chain of `id`, excluding `id` itself
    pub fn enclosing_block(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.nodes[id].parent?;
        loop {
            if self.nodes[current].kind == NodeKind::Block {
                return Some(current);
            }
            current = self.nodes[current].parent?;
        }
    }

    fn index_references(&mut self) {
        for (id, node) in self.nodes.iter().enumerate() {
            if node.kind.is_declaration() {
                if let Some(name) = &node.name {
                    if self.declarations.get(name) == Some(&id) {
                        self.references.entry(id).or_default().push(id);
                    }
                }
            }
        }
        for id in 0..self.nodes.len() {
            if let Some(decl) = self.resolve_declaration(id) {
                self.references.entry(decl).or_default().push(id);
            }
        }
    }
}

fn canonical_label(tokens: impl ToTokens) -> String {
    let rendered = tokens.to_token_stream().to_string();
    let mut label: String = rendered.chars().take(LABEL_MAX_CHARS).collect();
    if rendered.chars().count() > LABEL_MAX_CHARS {
        label.push('…');
    }
    label
}

fn line_span(spanned: &impl Spanned) -> Span {
    let span = spanned.span();
    Span::new(span.start().line, span.end().line)
}

struct UnitBuilder {
    nodes: Vec<SyntaxNode>,
    declarations: HashMap<String, NodeId>,
    stack: Vec<NodeId>,
}

impl UnitBuilder {
    fn new(unit_span: Span) -> Self {
        let root = SyntaxNode {
            kind: NodeKind::Unit,
            name: None,
            label: "<unit>".to_string(),
            span: unit_span,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            declarations: HashMap::new(),
            stack: vec![0],
        }
    }

    fn push(&mut self, kind: NodeKind, name: Option<String>, label: String, span: Span) -> NodeId {
        let parent = *self.stack.last().expect("builder stack never empty");
        let id = self.nodes.len();
        self.nodes.push(SyntaxNode {
            kind,
            name: name.clone(),
            label,
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        if kind.is_declaration() {
            if let Some(name) = name {
                self.declarations.entry(name).or_insert(id);
            }
        }
        id
    }

    fn within<F: FnOnce(&mut Self)>(&mut self, id: NodeId, f: F) {
        self.stack.push(id);
        f(self);
        self.stack.pop();
    }
}

impl<'ast> Visit<'ast> for UnitBuilder {
    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        let name = node.sig.ident.to_string();
        let id = self.push(
            NodeKind::Function,
            Some(name),
            canonical_label(&node.sig),
            line_span(node),
        );
        self.within(id, |b| syn::visit::visit_item_fn(b, node));
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        let name = node.sig.ident.to_string();
        let id = self.push(
            NodeKind::Function,
            Some(name),
            canonical_label(&node.sig),
            line_span(node),
        );
        self.within(id, |b| syn::visit::visit_impl_item_fn(b, node));
    }

    fn visit_block(&mut self, node: &'ast syn::Block) {
        let id = self.push(
            NodeKind::Block,
            None,
            canonical_label(node),
            line_span(node),
        );
        self.within(id, |b| syn::visit::visit_block(b, node));
    }

    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        let name = node.ident.to_string();
        let id = self.push(
            NodeKind::TypeDecl,
            Some(name),
            canonical_label(&node.ident),
            line_span(node),
        );
        self.within(id, |b| syn::visit::visit_item_struct(b, node));
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        let name = node.ident.to_string();
        let id = self.push(
            NodeKind::TypeDecl,
            Some(name),
            canonical_label(&node.ident),
            line_span(node),
        );
        self.within(id, |b| syn::visit::visit_item_enum(b, node));
    }

    fn visit_expr_call(&mut self, node: &'ast syn::ExprCall) {
        let name = callee_name(&node.func);
        let id = self.push(
            NodeKind::Call,
            name,
            canonical_label(node),
            line_span(node),
        );
        // The callee path is part of this node, not a separate reference;
        // only the arguments are walked.
        self.within(id, |b| {
            for arg in &node.args {
                b.visit_expr(arg);
            }
        });
    }

    fn visit_expr_method_call(&mut self, node: &'ast syn::ExprMethodCall) {
        let id = self.push(
            NodeKind::MethodCall,
            Some(node.method.to_string()),
            canonical_label(node),
            line_span(node),
        );
        self.within(id, |b| {
            b.visit_expr(&node.receiver);
            for arg in &node.args {
                b.visit_expr(arg);
            }
        });
    }

    fn visit_expr_field(&mut self, node: &'ast syn::ExprField) {
        let name = match &node.member {
            syn::Member::Named(ident) => Some(ident.to_string()),
            syn::Member::Unnamed(_) => None,
        };
        let id = self.push(
            NodeKind::Field,
            name,
            canonical_label(node),
            line_span(node),
        );
        self.within(id, |b| b.visit_expr(&node.base));
    }

    fn visit_expr_path(&mut self, node: &'ast syn::ExprPath) {
        let name = node.path.segments.last().map(|s| s.ident.to_string());
        self.push(
            NodeKind::Name,
            name,
            canonical_label(node),
            line_span(node),
        );
    }

    fn visit_type_path(&mut self, node: &'ast syn::TypePath) {
        let name = node.path.segments.last().map(|s| s.ident.to_string());
        let id = self.push(
            NodeKind::TypeRef,
            name,
            canonical_label(node),
            line_span(node),
        );
        // Generic arguments may carry further type paths
        self.within(id, |b| syn::visit::visit_type_path(b, node));
    }
}

fn callee_name(func: &syn::Expr) -> Option<String> {
    match func {
        syn::Expr::Path(path) => path.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}
