//! Ancestor paths handed to rules.
//!
//! A [`Path`] is a chain of stack frames, one per level of the walk: each
//! frame names the node it reached and the edge it came through. Rules read
//! ancestors through it and reach the sibling list of the visited node, but
//! never modify the chain itself.

use cb_ast::{Ast, Field, Kind, NodeId, Slot};

/// How a node was reached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Through a single-child field.
    Field(Field),
    /// Through element `index` of a sequence field.
    Index(Field, usize),
}

#[derive(Debug, Clone, Copy)]
pub struct Path<'a> {
    node: NodeId,
    link: Option<(Edge, &'a Path<'a>)>,
}

impl<'a> Path<'a> {
    pub fn root(node: NodeId) -> Self {
        Self { node, link: None }
    }

    /// Extend the path by one level.
    pub fn child(&self, edge: Edge, node: NodeId) -> Path<'_> {
        Path {
            node,
            link: Some((edge, self)),
        }
    }

    /// The node being visited.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn edge(&self) -> Option<Edge> {
        self.link.map(|(edge, _)| edge)
    }

    pub fn parent(&self) -> Option<&'a Path<'a>> {
        self.link.map(|(_, parent)| parent)
    }

    /// Proper ancestors, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a Path<'a>> {
        std::iter::successors(self.parent(), |path| path.parent())
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Innermost ancestor whose kind satisfies `pred`.
    pub fn enclosing(&self, ast: &Ast, pred: impl Fn(&Kind) -> bool) -> Option<NodeId> {
        self.ancestors()
            .map(Path::node)
            .find(|&id| pred(ast.kind(id)))
    }

    pub fn in_sequence(&self) -> bool {
        matches!(self.edge(), Some(Edge::Index(..)))
    }

    /// The sequence holding the visited node, and the node's index in it.
    pub fn siblings_mut<'t>(&self, ast: &'t mut Ast) -> Option<(&'t mut Vec<NodeId>, usize)> {
        let Some(Edge::Index(field, index)) = self.edge() else {
            return None;
        };
        let parent = self.parent()?.node();
        let siblings = ast.kind_mut(parent).seq_mut(field)?;
        debug_assert_eq!(siblings.get(index), Some(&self.node));
        Some((siblings, index))
    }

    /// Whether the parent still holds the visited node where the walk found it.
    pub fn is_attached(&self, ast: &Ast) -> bool {
        let (Some(edge), Some(parent)) = (self.edge(), self.parent()) else {
            return true;
        };
        let parent = ast.kind(parent.node());
        match edge {
            Edge::Field(field) => parent.slot(field) == Some(Slot::One(Some(self.node))),
            Edge::Index(field, index) => match parent.slot(field) {
                Some(Slot::Many(ids)) => ids.get(index) == Some(&self.node),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use cb_ast::{LitValue, Loc};

    use super::*;

    fn fixture() -> (Ast, NodeId, NodeId, NodeId) {
        let mut ast = Ast::new();
        let one = ast.alloc(
            Kind::Literal {
                value: LitValue::Number(1.0),
            },
            Loc::default(),
        );
        let stmt = ast.alloc(Kind::ExpressionStatement { expression: one }, Loc::default());
        let program = ast.alloc(Kind::Program { body: vec![stmt] }, Loc::default());
        ast.set_root(program);
        (ast, program, stmt, one)
    }

    #[test]
    fn ancestors_are_innermost_first() {
        let (ast, program, stmt, one) = fixture();
        let root = Path::root(program);
        let mid = root.child(Edge::Index(Field::Body, 0), stmt);
        let leaf = mid.child(Edge::Field(Field::Expression), one);

        let chain: Vec<NodeId> = leaf.ancestors().map(Path::node).collect();
        assert_eq!(chain, vec![stmt, program]);
        assert_eq!(leaf.depth(), 2);
        assert_eq!(
            leaf.enclosing(&ast, |k| matches!(k, Kind::Program { .. })),
            Some(program)
        );
    }

    #[test]
    fn splicing_out_detaches_the_visited_node() {
        let (mut ast, program, stmt, one) = fixture();
        let root = Path::root(program);
        let mid = root.child(Edge::Index(Field::Body, 0), stmt);
        let leaf = mid.child(Edge::Field(Field::Expression), one);
        assert!(mid.is_attached(&ast));
        assert!(leaf.siblings_mut(&mut ast).is_none());

        let (siblings, index) = mid.siblings_mut(&mut ast).unwrap();
        siblings.remove(index);
        assert!(!mid.is_attached(&ast));
        assert!(root.is_attached(&ast));
    }
}
