//! Doc-comment extraction from parsed source files.
//!
//! Rules do not walk the AST themselves; the analyzer extracts every doc
//! comment up front and hands them to rules one at a time. Extraction
//! normalizes `#[doc = "..."]` attribute values the way rustdoc renders
//! them: one leading space stripped per line, lines joined with `\n`.

use syn::spanned::Spanned;
use syn::visit::Visit;
use syn::{Attribute, Fields};

/// Where a doc comment is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// Outer `///` docs on an item (function, struct, enum, trait, module,
    /// type alias).
    ItemOuter,
    /// Docs on a struct field or enum variant.
    Label,
    /// Inner `//!` docs on a file or inline module.
    ModuleInner,
}

/// A single extracted doc comment.
#[derive(Debug, Clone)]
pub struct DocComment {
    /// Normalized comment body.
    pub text: String,
    /// Where the comment is attached.
    pub kind: CommentKind,
    /// Name of the documented item, qualified for fields and variants
    /// (e.g. `Config::root`).
    pub target: String,
    /// Human-readable kind of the documented item.
    pub item_kind: &'static str,
    /// Line of the first doc attribute (1-indexed).
    pub line: usize,
    /// Column of the first doc attribute (1-indexed).
    pub column: usize,
}

impl DocComment {
    /// Returns true when the comment carries no prose at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Extracts every doc comment from a parsed file.
#[must_use]
pub fn extract_comments(file: &syn::File) -> Vec<DocComment> {
    let mut visitor = CommentVisitor {
        comments: Vec::new(),
        owner: Vec::new(),
    };

    if let Some((text, line, column)) = doc_text(&file.attrs, true) {
        visitor.comments.push(DocComment {
            text,
            kind: CommentKind::ModuleInner,
            target: "crate".to_string(),
            item_kind: "file",
            line,
            column,
        });
    }

    visitor.visit_file(file);
    visitor.comments
}

/// Collects and normalizes doc-attribute text.
///
/// Returns the joined body and the position of the first doc attribute, or
/// `None` when no doc attribute of the requested style is present.
fn doc_text(attrs: &[Attribute], inner: bool) -> Option<(String, usize, usize)> {
    let mut lines: Vec<String> = Vec::new();
    let mut position = None;

    for attr in attrs {
        let is_inner = matches!(attr.style, syn::AttrStyle::Inner(_));
        if is_inner != inner || !attr.path().is_ident("doc") {
            continue;
        }
        let syn::Meta::NameValue(name_value) = &attr.meta else {
            continue;
        };
        let syn::Expr::Lit(expr_lit) = &name_value.value else {
            continue;
        };
        let syn::Lit::Str(lit) = &expr_lit.lit else {
            continue;
        };

        if position.is_none() {
            let start = attr.span().start();
            position = Some((start.line, start.column + 1));
        }
        // Block comments arrive as one multi-line literal; line comments as
        // one literal per line. Either way, strip the conventional single
        // leading space.
        for raw in lit.value().split('\n') {
            lines.push(raw.strip_prefix(' ').unwrap_or(raw).to_string());
        }
    }

    let (line, column) = position?;
    Some((lines.join("\n"), line, column))
}

struct CommentVisitor {
    comments: Vec<DocComment>,
    owner: Vec<String>,
}

impl CommentVisitor {
    fn record_outer(&mut self, attrs: &[Attribute], item_kind: &'static str, name: &str) {
        if let Some((text, line, column)) = doc_text(attrs, false) {
            self.comments.push(DocComment {
                text,
                kind: CommentKind::ItemOuter,
                target: name.to_string(),
                item_kind,
                line,
                column,
            });
        }
    }

    fn record_label(&mut self, attrs: &[Attribute], item_kind: &'static str, name: &str) {
        if let Some((text, line, column)) = doc_text(attrs, false) {
            let target = match self.owner.last() {
                Some(owner) => format!("{owner}::{name}"),
                None => name.to_string(),
            };
            self.comments.push(DocComment {
                text,
                kind: CommentKind::Label,
                target,
                item_kind,
                line,
                column,
            });
        }
    }
}

impl<'ast> Visit<'ast> for CommentVisitor {
    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.record_outer(&node.attrs, "function", &node.sig.ident.to_string());
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.record_outer(&node.attrs, "function", &node.sig.ident.to_string());
        syn::visit::visit_impl_item_fn(self, node);
    }

    fn visit_trait_item_fn(&mut self, node: &'ast syn::TraitItemFn) {
        self.record_outer(&node.attrs, "function", &node.sig.ident.to_string());
        syn::visit::visit_trait_item_fn(self, node);
    }

    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        let name = node.ident.to_string();
        self.record_outer(&node.attrs, "struct", &name);

        self.owner.push(name);
        if let Fields::Named(fields) = &node.fields {
            for field in &fields.named {
                if let Some(ident) = &field.ident {
                    self.record_label(&field.attrs, "field", &ident.to_string());
                }
            }
        }
        self.owner.pop();
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        let name = node.ident.to_string();
        self.record_outer(&node.attrs, "enum", &name);

        self.owner.push(name);
        for variant in &node.variants {
            self.record_label(&variant.attrs, "variant", &variant.ident.to_string());
        }
        self.owner.pop();
    }

    fn visit_item_trait(&mut self, node: &'ast syn::ItemTrait) {
        self.record_outer(&node.attrs, "trait", &node.ident.to_string());
        syn::visit::visit_item_trait(self, node);
    }

    fn visit_item_type(&mut self, node: &'ast syn::ItemType) {
        self.record_outer(&node.attrs, "type alias", &node.ident.to_string());
        syn::visit::visit_item_type(self, node);
    }

    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        let name = node.ident.to_string();
        self.record_outer(&node.attrs, "module", &name);
        if let Some((text, line, column)) = doc_text(&node.attrs, true) {
            self.comments.push(DocComment {
                text,
                kind: CommentKind::ModuleInner,
                target: name,
                item_kind: "module",
                line,
                column,
            });
        }
        syn::visit::visit_item_mod(self, node);
    }
}
