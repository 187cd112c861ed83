//! The concrete syntax tree the engine builds. Every grammar rule produces
//! a [`CstNode`], and every matched token produces a leaf one.

use crate::token::{SourceLocation, TokenKind};

/// The name carried by a [`CstNode`]: either a grammar rule, a matched
/// terminal, or the synthetic error marker emitted by
/// [`crate::engine::Engine::fault_tolerance_many`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Rule(RuleKind),
    Token(TokenKind),
    /// A skipped-token marker inserted by fault-tolerant top-level
    /// recovery. Not an exception: a regular (if sentinel) tree node.
    Error,
    /// The synthetic frame `Engine::parse` wraps the entry rule in. Never
    /// observed outside `engine.rs`; the returned tree is always rooted at
    /// the entry rule itself.
    Root,
}

impl From<RuleKind> for NodeKind {
    fn from(rule: RuleKind) -> Self {
        NodeKind::Rule(rule)
    }
}

impl From<TokenKind> for NodeKind {
    fn from(token: TokenKind) -> Self {
        NodeKind::Token(token)
    }
}

/// The rule names of the ECMAScript-subset grammar that exercises the
/// engine. The engine itself has no notion of what a "rule" means beyond
/// this enum, or any stand-in an embedder supplies for their own grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Program,
    ModuleItemList,
    StatementListItem,
    Statement,
    BlockStatement,
    ExpressionStatement,

    VariableDeclaration,
    VariableLetOrConst,
    VariableDeclarationList,
    VariableDeclarator,
    BindingIdentifier,
    Initializer,

    AssignmentExpression,
    ConditionalExpression,
    LogicalOrExpression,
    LogicalAndExpression,
    EqualityExpression,
    RelationalExpression,
    AdditiveExpression,
    MultiplicativeExpression,
    UnaryExpression,
    PostfixExpression,
    LeftHandSideExpression,
    CallExpression,
    MemberExpression,
    PrimaryExpression,
    Arguments,
    BracketExpression,
    ParenthesizedExpression,
    ArrowParameters,

    ObjectLiteral,
    PropertyDefinition,
    MethodDefinition,
    IdentifierReference,
}

/// A node of the concrete syntax tree.
///
/// Invariants (see `SPEC_FULL.md` §3): a non-terminal's `loc` spans its
/// first descendant leaf's start to its last descendant leaf's end, or is
/// `None` if it has no descendants; children are in non-decreasing token
/// order; a terminal's `value`/`loc` come straight from its token.
#[derive(Debug, Clone, PartialEq)]
pub struct CstNode {
    pub name: NodeKind,
    pub value: Option<String>,
    pub loc: Option<SourceLocation>,
    pub children: Vec<CstNode>,
    pub is_terminal: bool,
}

impl CstNode {
    pub(crate) fn new_rule(name: RuleKind) -> Self {
        Self {
            name: NodeKind::Rule(name),
            value: None,
            loc: None,
            children: Vec::new(),
            is_terminal: false,
        }
    }

    pub(crate) fn new_terminal(kind: TokenKind, value: String, loc: SourceLocation) -> Self {
        Self {
            name: NodeKind::Token(kind),
            value: Some(value),
            loc: Some(loc),
            children: Vec::new(),
            is_terminal: true,
        }
    }

    pub(crate) fn new_error(loc: Option<SourceLocation>, skipped: Option<String>) -> Self {
        Self {
            name: NodeKind::Error,
            value: skipped,
            loc,
            children: Vec::new(),
            is_terminal: true,
        }
    }

    /// Recompute `loc` from the first and last descendant leaves. Called
    /// once when a rule node is popped off the node stack; never touched
    /// again afterward.
    pub(crate) fn recompute_loc(&mut self) {
        let first = self.children.iter().find_map(|c| c.loc);
        let last = self.children.iter().rev().find_map(|c| c.loc);
        self.loc = match (first, last) {
            (Some(first), Some(last)) => Some(SourceLocation::merge(first, last)),
            _ => None,
        };
    }

    pub fn name(&self) -> NodeKind {
        self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn loc(&self) -> Option<SourceLocation> {
        self.loc
    }

    pub fn children(&self) -> &[CstNode] {
        &self.children
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// First child with the given name, in source order. The primary hook
    /// AST lowering uses to pull typed children out of a CST node.
    pub fn find_child_by_name(&self, name: impl Into<NodeKind>) -> Option<&CstNode> {
        let name = name.into();
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given name, in source order.
    pub fn find_children_by_name(
        &self,
        name: impl Into<NodeKind>,
    ) -> impl Iterator<Item = &CstNode> {
        let name = name.into();
        self.children.iter().filter(move |c| c.name == name)
    }
}
