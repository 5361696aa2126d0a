//! Arena → SWC ECMAScript AST.

use cb_ast::{Ast, BindingKind, Kind, LitValue, NodeId};
use swc_common::{SyntaxContext, DUMMY_SP};
use swc_ecma_ast as ast;

use crate::precedence::{self, ACCESS, ASSIGN, CONDITIONAL, EXPONENT, POSTFIX, PREFIX};
use crate::EmitError;

type Result<T> = std::result::Result<T, EmitError>;

pub(crate) struct Converter<'a> {
    tree: &'a Ast,
}

impl<'a> Converter<'a> {
    pub(crate) fn new(tree: &'a Ast) -> Self {
        Self { tree }
    }

    pub(crate) fn script(&self) -> Result<ast::Script> {
        let root = self.tree.root().ok_or(EmitError::EmptyTree)?;
        let Kind::Program { body } = self.kind(root)? else {
            return Err(EmitError::NotAProgram {
                found: self.tree.kind(root).name(),
            });
        };
        Ok(ast::Script {
            span: DUMMY_SP,
            body: self.stmts(body)?,
            shebang: None,
        })
    }

    /// The node's kind, provided it belongs to the target grammar.
    fn kind(&self, id: NodeId) -> Result<&'a Kind> {
        let kind = self.tree.kind(id);
        if kind.is_surface() {
            return Err(EmitError::Surface {
                kind: kind.name(),
                at: self.tree.loc(id),
            });
        }
        Ok(kind)
    }

    fn misplaced(&self, id: NodeId, expected: &'static str) -> EmitError {
        EmitError::Misplaced {
            kind: self.tree.kind(id).name(),
            expected,
            at: self.tree.loc(id),
        }
    }

    // statements

    fn stmts(&self, ids: &[NodeId]) -> Result<Vec<ast::Stmt>> {
        ids.iter().map(|&id| self.stmt(id)).collect()
    }

    fn stmt(&self, id: NodeId) -> Result<ast::Stmt> {
        let stmt = match self.kind(id)? {
            Kind::BlockStatement { .. } => ast::Stmt::Block(self.block(id)?),
            &Kind::ExpressionStatement { expression } => self.expr_stmt(expression)?,
            &Kind::IfStatement {
                test,
                consequent,
                alternate,
            } => ast::Stmt::If(ast::IfStmt {
                span: DUMMY_SP,
                test: self.operand(test, ASSIGN)?,
                cons: Box::new(self.stmt(consequent)?),
                alt: alternate
                    .map(|alt| self.stmt(alt).map(Box::new))
                    .transpose()?,
            }),
            &Kind::WhileStatement { test, body } => ast::Stmt::While(ast::WhileStmt {
                span: DUMMY_SP,
                test: self.operand(test, ASSIGN)?,
                body: Box::new(self.stmt(body)?),
            }),
            &Kind::TryStatement { block, handler } => ast::Stmt::Try(Box::new(ast::TryStmt {
                span: DUMMY_SP,
                block: self.block(block)?,
                handler: Some(self.catch(handler)?),
                finalizer: None,
            })),
            Kind::SwitchStatement {
                discriminant,
                cases,
            } => ast::Stmt::Switch(ast::SwitchStmt {
                span: DUMMY_SP,
                discriminant: self.operand(*discriminant, ASSIGN)?,
                cases: cases
                    .iter()
                    .map(|&case| self.switch_case(case))
                    .collect::<Result<_>>()?,
            }),
            &Kind::ReturnStatement { argument } => ast::Stmt::Return(ast::ReturnStmt {
                span: DUMMY_SP,
                arg: self.opt_operand(argument)?,
            }),
            &Kind::BreakStatement { label } => ast::Stmt::Break(ast::BreakStmt {
                span: DUMMY_SP,
                label: self.label(label)?,
            }),
            &Kind::ContinueStatement { label } => ast::Stmt::Continue(ast::ContinueStmt {
                span: DUMMY_SP,
                label: self.label(label)?,
            }),
            &Kind::ThrowStatement { argument } => ast::Stmt::Throw(ast::ThrowStmt {
                span: DUMMY_SP,
                arg: self.operand(argument, ASSIGN)?,
            }),
            Kind::VariableDeclaration { kind, declarations } => {
                ast::Stmt::Decl(ast::Decl::Var(Box::new(self.var_decl(*kind, declarations)?)))
            }
            Kind::Program { .. }
            | Kind::VariableDeclarator { .. }
            | Kind::CatchClause { .. }
            | Kind::SwitchCase { .. }
            | Kind::Property { .. }
            | Kind::ObjectPattern { .. }
            | Kind::AssignmentPattern { .. }
            | Kind::TemplateElement { .. }
            | Kind::Spread { .. } => return Err(self.misplaced(id, "a statement")),
            // A bare expression in a statement list.
            _ => self.expr_stmt(id)?,
        };
        Ok(stmt)
    }

    /// An expression statement may not start with `{`.
    fn expr_stmt(&self, expression: NodeId) -> Result<ast::Stmt> {
        let expr = self.operand(expression, ASSIGN)?;
        Ok(ast::Stmt::Expr(ast::ExprStmt {
            span: DUMMY_SP,
            expr: guard_leading_brace(expr),
        }))
    }

    fn block(&self, id: NodeId) -> Result<ast::BlockStmt> {
        let Kind::BlockStatement { body } = self.kind(id)? else {
            return Err(self.misplaced(id, "a block"));
        };
        Ok(ast::BlockStmt {
            span: DUMMY_SP,
            ctxt: SyntaxContext::empty(),
            stmts: self.stmts(body)?,
        })
    }

    fn catch(&self, id: NodeId) -> Result<ast::CatchClause> {
        let &Kind::CatchClause { param, body } = self.kind(id)? else {
            return Err(self.misplaced(id, "a catch clause"));
        };
        Ok(ast::CatchClause {
            span: DUMMY_SP,
            param: Some(self.pat(param)?),
            body: self.block(body)?,
        })
    }

    fn switch_case(&self, id: NodeId) -> Result<ast::SwitchCase> {
        let Kind::SwitchCase { test, consequent } = self.kind(id)? else {
            return Err(self.misplaced(id, "a switch case"));
        };
        Ok(ast::SwitchCase {
            span: DUMMY_SP,
            test: self.opt_operand(*test)?,
            cons: self.stmts(consequent)?,
        })
    }

    fn label(&self, label: Option<NodeId>) -> Result<Option<ast::Ident>> {
        let Some(id) = label else {
            return Ok(None);
        };
        match self.kind(id)? {
            Kind::Identifier { name } => Ok(Some(ident(name))),
            _ => Err(self.misplaced(id, "a label")),
        }
    }

    fn var_decl(&self, kind: BindingKind, declarations: &[NodeId]) -> Result<ast::VarDecl> {
        let decls = declarations
            .iter()
            .map(|&id| {
                let &Kind::VariableDeclarator { id: name, init } = self.kind(id)? else {
                    return Err(self.misplaced(id, "a declarator"));
                };
                Ok(ast::VarDeclarator {
                    span: DUMMY_SP,
                    name: self.pat(name)?,
                    init: self.opt_operand(init)?,
                    definite: false,
                })
            })
            .collect::<Result<_>>()?;
        Ok(ast::VarDecl {
            span: DUMMY_SP,
            ctxt: SyntaxContext::empty(),
            kind: match kind {
                BindingKind::Let => ast::VarDeclKind::Let,
                BindingKind::Const => ast::VarDeclKind::Const,
            },
            declare: false,
            decls,
        })
    }

    // expressions

    /// Convert `id`, parenthesised if it binds looser than `min`.
    fn operand(&self, id: NodeId, min: u8) -> Result<Box<ast::Expr>> {
        let expr = self.expr(id)?;
        if precedence::of(self.tree.kind(id)) < min {
            return Ok(paren(expr));
        }
        Ok(Box::new(expr))
    }

    fn opt_operand(&self, id: Option<NodeId>) -> Result<Option<Box<ast::Expr>>> {
        id.map(|id| self.operand(id, ASSIGN)).transpose()
    }

    fn args(&self, ids: &[NodeId]) -> Result<Vec<ast::ExprOrSpread>> {
        ids.iter().map(|&id| self.arg(id)).collect()
    }

    fn arg(&self, id: NodeId) -> Result<ast::ExprOrSpread> {
        if let &Kind::Spread { argument } = self.kind(id)? {
            return Ok(ast::ExprOrSpread {
                spread: Some(DUMMY_SP),
                expr: self.operand(argument, ASSIGN)?,
            });
        }
        Ok(ast::ExprOrSpread {
            spread: None,
            expr: self.operand(id, ASSIGN)?,
        })
    }

    fn expr(&self, id: NodeId) -> Result<ast::Expr> {
        let expr = match self.kind(id)? {
            Kind::Identifier { name } => ast::Expr::Ident(ident(name)),
            Kind::Literal { value } => ast::Expr::Lit(literal(value)),
            Kind::RegexLiteral { pattern, flags } => ast::Expr::Lit(ast::Lit::Regex(ast::Regex {
                span: DUMMY_SP,
                exp: pattern.as_str().into(),
                flags: flags.as_str().into(),
            })),
            Kind::ArrayExpression { elements } => ast::Expr::Array(ast::ArrayLit {
                span: DUMMY_SP,
                elems: self.args(elements)?.into_iter().map(Some).collect(),
            }),
            Kind::ObjectExpression { properties } => ast::Expr::Object(ast::ObjectLit {
                span: DUMMY_SP,
                props: properties
                    .iter()
                    .map(|&prop| self.prop(prop))
                    .collect::<Result<_>>()?,
            }),
            Kind::ArrowFunction { params, body } => ast::Expr::Arrow(self.arrow(params, *body)?),
            Kind::Unary { operator, argument } => ast::Expr::Unary(ast::UnaryExpr {
                span: DUMMY_SP,
                op: unary_op(operator)?,
                arg: self.operand(*argument, PREFIX)?,
            }),
            Kind::Update {
                operator,
                argument,
                prefix,
            } => ast::Expr::Update(ast::UpdateExpr {
                span: DUMMY_SP,
                op: update_op(operator)?,
                prefix: *prefix,
                arg: self.operand(*argument, ACCESS)?,
            }),
            Kind::Binary {
                operator,
                left,
                right,
            }
            | Kind::Logical {
                operator,
                left,
                right,
            } => ast::Expr::Bin(self.binary(operator, *left, *right)?),
            Kind::Assignment {
                operator,
                left,
                right,
            } => ast::Expr::Assign(ast::AssignExpr {
                span: DUMMY_SP,
                op: assign_op(operator)?,
                left: self.assign_target(*left)?,
                right: self.operand(*right, ASSIGN)?,
            }),
            &Kind::Member {
                object,
                property,
                computed,
            } => ast::Expr::Member(self.member(object, property, computed)?),
            &Kind::Conditional {
                test,
                consequent,
                alternate,
            } => ast::Expr::Cond(ast::CondExpr {
                span: DUMMY_SP,
                test: self.operand(test, CONDITIONAL + 1)?,
                cons: self.operand(consequent, ASSIGN)?,
                alt: self.operand(alternate, ASSIGN)?,
            }),
            Kind::Call { callee, arguments } => ast::Expr::Call(ast::CallExpr {
                span: DUMMY_SP,
                callee: ast::Callee::Expr(self.operand(*callee, ACCESS)?),
                args: self.args(arguments)?,
                type_args: None,
                ..Default::default()
            }),
            Kind::New { callee, arguments } => {
                let mut callee_expr = self.operand(*callee, ACCESS)?;
                if self.calls_on_spine(*callee) && !matches!(*callee_expr, ast::Expr::Paren(_)) {
                    callee_expr = paren(*callee_expr);
                }
                ast::Expr::New(ast::NewExpr {
                    span: DUMMY_SP,
                    ctxt: SyntaxContext::empty(),
                    callee: callee_expr,
                    args: Some(self.args(arguments)?),
                    type_args: None,
                })
            }
            Kind::TemplateLiteral { quasis, expressions } => ast::Expr::Tpl(ast::Tpl {
                span: DUMMY_SP,
                exprs: expressions
                    .iter()
                    .map(|&expr| self.operand(expr, ASSIGN))
                    .collect::<Result<_>>()?,
                quasis: quasis
                    .iter()
                    .map(|&quasi| self.template_element(quasi))
                    .collect::<Result<_>>()?,
            }),
            _ => return Err(self.misplaced(id, "an expression")),
        };
        Ok(expr)
    }

    fn binary(&self, operator: &str, left: NodeId, right: NodeId) -> Result<ast::BinExpr> {
        let level = precedence::binary(operator).ok_or_else(|| EmitError::Operator {
            operator: operator.to_string(),
            position: "binary",
        })?;
        // `**` is right-associative and rejects a bare unary operand on its left.
        let (left_min, right_min) = if level == EXPONENT {
            (POSTFIX, EXPONENT)
        } else {
            (level, level + 1)
        };
        let side = |id: NodeId, min: u8| -> Result<Box<ast::Expr>> {
            let expr = self.operand(id, min)?;
            if precedence::mixes_nullish(operator, self.tree.kind(id))
                && !matches!(*expr, ast::Expr::Paren(_))
            {
                return Ok(paren(*expr));
            }
            Ok(expr)
        };
        Ok(ast::BinExpr {
            span: DUMMY_SP,
            op: binary_op(operator)?,
            left: side(left, left_min)?,
            right: side(right, right_min)?,
        })
    }

    fn member(&self, object: NodeId, property: NodeId, computed: bool) -> Result<ast::MemberExpr> {
        let mut obj = self.operand(object, ACCESS)?;
        // `1.toString` would lex as a malformed number.
        if matches!(*obj, ast::Expr::Lit(ast::Lit::Num(_))) {
            obj = paren(*obj);
        }
        let prop = if computed {
            ast::MemberProp::Computed(ast::ComputedPropName {
                span: DUMMY_SP,
                expr: self.operand(property, ASSIGN)?,
            })
        } else {
            match self.kind(property)? {
                Kind::Identifier { name } => {
                    ast::MemberProp::Ident(ast::IdentName::new(name.as_str().into(), DUMMY_SP))
                }
                _ => return Err(self.misplaced(property, "a property name")),
            }
        };
        Ok(ast::MemberExpr {
            span: DUMMY_SP,
            obj,
            prop,
        })
    }

    fn arrow(&self, params: &[NodeId], body: NodeId) -> Result<ast::ArrowExpr> {
        let body = match self.kind(body)? {
            Kind::BlockStatement { .. } => ast::BlockStmtOrExpr::BlockStmt(self.block(body)?),
            _ => ast::BlockStmtOrExpr::Expr(guard_leading_brace(self.operand(body, ASSIGN)?)),
        };
        Ok(ast::ArrowExpr {
            span: DUMMY_SP,
            ctxt: SyntaxContext::empty(),
            params: params
                .iter()
                .map(|&param| self.pat(param))
                .collect::<Result<_>>()?,
            body: Box::new(body),
            is_async: false,
            is_generator: false,
            type_params: None,
            return_type: None,
        })
    }

    /// Whether a call sits on the callee chain, as in `new (f().g)()`.
    fn calls_on_spine(&self, id: NodeId) -> bool {
        match self.tree.kind(id) {
            Kind::Call { .. } => true,
            &Kind::Member { object, .. } => self.calls_on_spine(object),
            _ => false,
        }
    }

    fn template_element(&self, id: NodeId) -> Result<ast::TplElement> {
        let Kind::TemplateElement { raw, tail } = self.kind(id)? else {
            return Err(self.misplaced(id, "a template segment"));
        };
        Ok(ast::TplElement {
            span: DUMMY_SP,
            tail: *tail,
            cooked: Some(raw.as_str().into()),
            raw: raw.as_str().into(),
        })
    }

    fn prop(&self, id: NodeId) -> Result<ast::PropOrSpread> {
        let (key, value, shorthand) = match self.kind(id)? {
            &Kind::Property {
                key,
                value,
                shorthand,
            } => (key, value, shorthand),
            &Kind::Spread { argument } => {
                return Ok(ast::PropOrSpread::Spread(ast::SpreadElement {
                    dot3_token: DUMMY_SP,
                    expr: self.operand(argument, ASSIGN)?,
                }))
            }
            _ => return Err(self.misplaced(id, "an object property")),
        };
        let prop = match self.same_name(key, value) {
            Some(name) if shorthand => ast::Prop::Shorthand(ident(name)),
            _ => ast::Prop::KeyValue(ast::KeyValueProp {
                key: self.prop_name(key)?,
                value: self.operand(value, ASSIGN)?,
            }),
        };
        Ok(ast::PropOrSpread::Prop(Box::new(prop)))
    }

    fn prop_name(&self, id: NodeId) -> Result<ast::PropName> {
        let name = match self.kind(id)? {
            Kind::Identifier { name } => {
                ast::PropName::Ident(ast::IdentName::new(name.as_str().into(), DUMMY_SP))
            }
            Kind::Literal {
                value: LitValue::String(s),
            } => ast::PropName::Str(string(s)),
            &Kind::Literal {
                value: LitValue::Number(value),
            } if value >= 0.0 => ast::PropName::Num(ast::Number {
                span: DUMMY_SP,
                value,
                raw: None,
            }),
            _ => ast::PropName::Computed(ast::ComputedPropName {
                span: DUMMY_SP,
                expr: self.operand(id, ASSIGN)?,
            }),
        };
        Ok(name)
    }

    /// The shared name when `key` and `value` are the same identifier.
    fn same_name(&self, key: NodeId, value: NodeId) -> Option<&'a str> {
        match (self.tree.kind(key), self.tree.kind(value)) {
            (Kind::Identifier { name: k }, Kind::Identifier { name: v }) if k == v => Some(k),
            _ => None,
        }
    }

    // patterns

    fn pat(&self, id: NodeId) -> Result<ast::Pat> {
        let pat = match self.kind(id)? {
            Kind::Identifier { name } => ast::Pat::Ident(ident(name).into()),
            Kind::ObjectPattern { properties } => ast::Pat::Object(self.object_pat(properties)?),
            &Kind::AssignmentPattern { left, right } => ast::Pat::Assign(ast::AssignPat {
                span: DUMMY_SP,
                left: Box::new(self.pat(left)?),
                right: self.operand(right, ASSIGN)?,
            }),
            _ => return Err(self.misplaced(id, "a binding pattern")),
        };
        Ok(pat)
    }

    fn object_pat(&self, properties: &[NodeId]) -> Result<ast::ObjectPat> {
        let props = properties
            .iter()
            .map(|&id| self.pat_prop(id))
            .collect::<Result<_>>()?;
        Ok(ast::ObjectPat {
            span: DUMMY_SP,
            props,
            optional: false,
            type_ann: None,
        })
    }

    /// `{ x }`, `{ x = d }`, or `{ key: pattern }`.
    fn pat_prop(&self, id: NodeId) -> Result<ast::ObjectPatProp> {
        let &Kind::Property { key, value, .. } = self.kind(id)? else {
            return Err(self.misplaced(id, "a pattern property"));
        };
        if let Some(name) = self.same_name(key, value) {
            return Ok(ast::ObjectPatProp::Assign(ast::AssignPatProp {
                span: DUMMY_SP,
                key: ident(name).into(),
                value: None,
            }));
        }
        if let &Kind::AssignmentPattern { left, right } = self.kind(value)? {
            if let Some(name) = self.same_name(key, left) {
                return Ok(ast::ObjectPatProp::Assign(ast::AssignPatProp {
                    span: DUMMY_SP,
                    key: ident(name).into(),
                    value: Some(self.operand(right, ASSIGN)?),
                }));
            }
        }
        Ok(ast::ObjectPatProp::KeyValue(ast::KeyValuePatProp {
            key: self.prop_name(key)?,
            value: Box::new(self.pat(value)?),
        }))
    }

    fn assign_target(&self, id: NodeId) -> Result<ast::AssignTarget> {
        let target = match self.kind(id)? {
            Kind::Identifier { name } => {
                ast::AssignTarget::Simple(ast::SimpleAssignTarget::Ident(ident(name).into()))
            }
            &Kind::Member {
                object,
                property,
                computed,
            } => ast::AssignTarget::Simple(ast::SimpleAssignTarget::Member(
                self.member(object, property, computed)?,
            )),
            Kind::ObjectPattern { properties } => {
                ast::AssignTarget::Pat(ast::AssignTargetPat::Object(self.object_pat(properties)?))
            }
            _ => return Err(self.misplaced(id, "an assignment target")),
        };
        Ok(target)
    }
}

fn ident(name: &str) -> ast::Ident {
    ast::Ident::new_no_ctxt(name.into(), DUMMY_SP)
}

fn string(value: &str) -> ast::Str {
    ast::Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }
}

fn literal(value: &LitValue) -> ast::Lit {
    match value {
        LitValue::Null => ast::Lit::Null(ast::Null { span: DUMMY_SP }),
        LitValue::Bool(value) => ast::Lit::Bool(ast::Bool {
            span: DUMMY_SP,
            value: *value,
        }),
        LitValue::Number(value) => ast::Lit::Num(ast::Number {
            span: DUMMY_SP,
            value: *value,
            raw: None,
        }),
        LitValue::String(value) => ast::Lit::Str(string(value)),
    }
}

fn paren(expr: ast::Expr) -> Box<ast::Expr> {
    Box::new(ast::Expr::Paren(ast::ParenExpr {
        span: DUMMY_SP,
        expr: Box::new(expr),
    }))
}

/// Parenthesise `expr` if its leftmost token would be `{`.
fn guard_leading_brace(expr: Box<ast::Expr>) -> Box<ast::Expr> {
    if starts_with_brace(&expr) {
        return paren(*expr);
    }
    expr
}

fn starts_with_brace(expr: &ast::Expr) -> bool {
    match expr {
        ast::Expr::Object(_) => true,
        ast::Expr::Member(member) => starts_with_brace(&member.obj),
        ast::Expr::Call(call) => match &call.callee {
            ast::Callee::Expr(callee) => starts_with_brace(callee),
            _ => false,
        },
        ast::Expr::Bin(bin) => starts_with_brace(&bin.left),
        ast::Expr::Cond(cond) => starts_with_brace(&cond.test),
        ast::Expr::Update(update) => !update.prefix && starts_with_brace(&update.arg),
        ast::Expr::Assign(assign) => matches!(
            assign.left,
            ast::AssignTarget::Pat(ast::AssignTargetPat::Object(_))
        ) || matches!(
            &assign.left,
            ast::AssignTarget::Simple(ast::SimpleAssignTarget::Member(member))
                if starts_with_brace(&member.obj)
        ),
        _ => false,
    }
}

fn unary_op(operator: &str) -> Result<ast::UnaryOp> {
    let op = match operator {
        "-" => ast::UnaryOp::Minus,
        "+" => ast::UnaryOp::Plus,
        "!" => ast::UnaryOp::Bang,
        "~" => ast::UnaryOp::Tilde,
        "typeof" => ast::UnaryOp::TypeOf,
        "void" => ast::UnaryOp::Void,
        "delete" => ast::UnaryOp::Delete,
        _ => return Err(unknown(operator, "unary")),
    };
    Ok(op)
}

fn update_op(operator: &str) -> Result<ast::UpdateOp> {
    match operator {
        "++" => Ok(ast::UpdateOp::PlusPlus),
        "--" => Ok(ast::UpdateOp::MinusMinus),
        _ => Err(unknown(operator, "update")),
    }
}

fn binary_op(operator: &str) -> Result<ast::BinaryOp> {
    use ast::BinaryOp::*;

    let op = match operator {
        "==" => EqEq,
        "!=" => NotEq,
        "===" => EqEqEq,
        "!==" => NotEqEq,
        "<" => Lt,
        "<=" => LtEq,
        ">" => Gt,
        ">=" => GtEq,
        "<<" => LShift,
        ">>" => RShift,
        ">>>" => ZeroFillRShift,
        "+" => Add,
        "-" => Sub,
        "*" => Mul,
        "/" => Div,
        "%" => Mod,
        "|" => BitOr,
        "^" => BitXor,
        "&" => BitAnd,
        "||" => LogicalOr,
        "&&" => LogicalAnd,
        "in" => In,
        "instanceof" => InstanceOf,
        "**" => Exp,
        "??" => NullishCoalescing,
        _ => return Err(unknown(operator, "binary")),
    };
    Ok(op)
}

fn assign_op(operator: &str) -> Result<ast::AssignOp> {
    use ast::AssignOp::*;

    let op = match operator {
        "=" => Assign,
        "+=" => AddAssign,
        "-=" => SubAssign,
        "*=" => MulAssign,
        "/=" => DivAssign,
        "%=" => ModAssign,
        "<<=" => LShiftAssign,
        ">>=" => RShiftAssign,
        ">>>=" => ZeroFillRShiftAssign,
        "|=" => BitOrAssign,
        "^=" => BitXorAssign,
        "&=" => BitAndAssign,
        "**=" => ExpAssign,
        "&&=" => AndAssign,
        "||=" => OrAssign,
        "??=" => NullishAssign,
        _ => return Err(unknown(operator, "assignment")),
    };
    Ok(op)
}

fn unknown(operator: &str, position: &'static str) -> EmitError {
    EmitError::Operator {
        operator: operator.to_string(),
        position,
    }
}
