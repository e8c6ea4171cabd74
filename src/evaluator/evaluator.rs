use crate::{
    ast::{
        ast::{BodyItem, Stylerule, Stylesheet, TopLevel},
        expressions::{Expression, Literal, LiteralExpr, Operator},
        statements::{Declaration, IfClause, VariableAssignment},
    },
    errors::errors::{Error, ErrorImpl},
    scope::scope_stack::ScopeStack,
};

/// Applies `operator` to two folded operands.
///
/// Only the combinations the checker accepts are defined; anything else is
/// an internal consistency fault. Arithmetic is checked, overflow is an
/// error rather than a wrapped value.
pub fn apply_operator(operator: Operator, left: &Literal, right: &Literal) -> Result<Literal, ErrorImpl> {
    let fault = || ErrorImpl::InternalConsistencyFault {
        message: format!(
            "cannot apply `{}` to {} and {}",
            operator,
            left.get_type(),
            right.get_type()
        ),
    };
    let overflow = || ErrorImpl::ArithmeticOverflow {
        operator: operator.to_string(),
    };

    match operator {
        Operator::Add | Operator::Subtract => {
            let combine = |a: i64, b: i64| match operator {
                Operator::Add => a.checked_add(b),
                _ => a.checked_sub(b),
            };

            let result = match (left, right) {
                (Literal::Pixel(a), Literal::Pixel(b)) => combine(*a, *b).map(Literal::Pixel),
                (Literal::Percentage(a), Literal::Percentage(b)) => {
                    combine(*a, *b).map(Literal::Percentage)
                }
                (Literal::Scalar(a), Literal::Scalar(b)) => combine(*a, *b).map(Literal::Scalar),
                _ => return Err(fault()),
            };
            result.ok_or_else(overflow)
        }
        Operator::Multiply => {
            let result = match (left, right) {
                (Literal::Scalar(a), Literal::Scalar(b)) => a.checked_mul(*b).map(Literal::Scalar),
                (Literal::Scalar(s), Literal::Pixel(v)) | (Literal::Pixel(v), Literal::Scalar(s)) => {
                    s.checked_mul(*v).map(Literal::Pixel)
                }
                (Literal::Scalar(s), Literal::Percentage(v))
                | (Literal::Percentage(v), Literal::Scalar(s)) => {
                    s.checked_mul(*v).map(Literal::Percentage)
                }
                _ => return Err(fault()),
            };
            result.ok_or_else(overflow)
        }
    }
}

/// Folds expressions and resolves if-clauses, producing a new stylesheet of
/// stylerules holding only literal declarations.
///
/// Assignments always bind in the innermost scope: a variable assigned
/// inside an if-body or stylerule shadows the outer one until that body
/// closes.
#[derive(Debug, Default)]
pub struct Evaluator {
    scopes: ScopeStack<Literal>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            scopes: ScopeStack::new(),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn evaluate_stylesheet(&mut self, stylesheet: &Stylesheet) -> Result<Stylesheet, Error> {
        let members = self.with_scope(|evaluator| {
            let mut members = vec![];
            for member in &stylesheet.members {
                match member {
                    TopLevel::Assignment(assignment) => evaluator.evaluate_assignment(assignment)?,
                    TopLevel::Rule(rule) => {
                        members.push(TopLevel::Rule(evaluator.evaluate_stylerule(rule)?))
                    }
                }
            }
            Ok(members)
        })?;

        Ok(Stylesheet {
            members,
            span: stylesheet.span.clone(),
        })
    }

    /// Runs `f` inside a fresh scope. The scope is popped whether or not `f`
    /// succeeds.
    fn with_scope<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, Error>,
    ) -> Result<R, Error> {
        self.scopes.push_scope();
        let result = f(self);
        self.scopes.pop_scope()?;
        result
    }

    fn evaluate_stylerule(&mut self, rule: &Stylerule) -> Result<Stylerule, Error> {
        let body = self.with_scope(|evaluator| {
            let mut body = vec![];
            evaluator.evaluate_body(&rule.body, &mut body)?;
            Ok(body)
        })?;

        Ok(Stylerule {
            id: rule.id,
            selectors: rule.selectors.clone(),
            body,
            span: rule.span.clone(),
        })
    }

    /// Appends the resolved declarations of `body` to `out`, in order.
    fn evaluate_body(&mut self, body: &[BodyItem], out: &mut Vec<BodyItem>) -> Result<(), Error> {
        for item in body {
            match item {
                BodyItem::Declaration(declaration) => {
                    out.push(BodyItem::Declaration(Declaration {
                        id: declaration.id,
                        property: declaration.property.clone(),
                        value: self.fold(&declaration.value)?,
                        span: declaration.span.clone(),
                    }));
                }
                BodyItem::Assignment(assignment) => self.evaluate_assignment(assignment)?,
                BodyItem::If(clause) => self.evaluate_if_clause(clause, out)?,
            }
        }

        Ok(())
    }

    fn evaluate_assignment(&mut self, assignment: &VariableAssignment) -> Result<(), Error> {
        let value = self.evaluate_expr(&assignment.value)?;
        tracing::trace!(name = %assignment.name, %value, "bound variable");
        self.scopes.define(assignment.name.clone(), value)
    }

    fn evaluate_if_clause(&mut self, clause: &IfClause, out: &mut Vec<BodyItem>) -> Result<(), Error> {
        let condition = match self.evaluate_expr(&clause.condition)? {
            Literal::Bool(condition) => condition,
            other => {
                return Err(Error::new(
                    ErrorImpl::ConditionNotBoolean {
                        received: other.get_type().to_string(),
                    },
                    clause.span.start.clone(),
                ))
            }
        };
        tracing::debug!(node = %clause.id, condition, "resolved if-clause");

        if condition {
            self.with_scope(|evaluator| evaluator.evaluate_body(&clause.body, out))
        } else if let Some(else_clause) = &clause.else_clause {
            self.with_scope(|evaluator| evaluator.evaluate_body(&else_clause.body, out))
        } else {
            Ok(())
        }
    }

    /// Replaces `expr` with a single literal node. The node keeps the id
    /// and span of the expression it stands for.
    fn fold(&self, expr: &Expression) -> Result<Expression, Error> {
        if let Expression::Literal(literal) = expr {
            return Ok(Expression::Literal(literal.clone()));
        }

        Ok(Expression::Literal(LiteralExpr {
            id: expr.id(),
            value: self.evaluate_expr(expr)?,
            span: expr.get_span().clone(),
        }))
    }

    pub fn evaluate_expr(&self, expr: &Expression) -> Result<Literal, Error> {
        match expr {
            Expression::Literal(literal) => Ok(literal.value.clone()),
            Expression::Reference(reference) => {
                self.scopes.lookup(&reference.name).cloned().ok_or_else(|| {
                    Error::new(
                        ErrorImpl::VariableNotDeclared {
                            variable: reference.name.clone(),
                        },
                        reference.span.start.clone(),
                    )
                })
            }
            Expression::Operation(operation) => {
                let left = self.evaluate_expr(&operation.left)?;
                let right = self.evaluate_expr(&operation.right)?;

                apply_operator(operation.operator, &left, &right)
                    .map_err(|error| Error::new(error, operation.span.start.clone()))
            }
        }
    }
}

/// Evaluates a checked stylesheet into its flattened form.
///
/// Undefined variables and non-boolean conditions are reported as ordinary
/// errors, so unchecked input fails cleanly; operand combinations the
/// checker rejects come back as `InternalConsistencyFault`.
pub fn evaluate(stylesheet: &Stylesheet) -> Result<Stylesheet, Error> {
    Evaluator::new().evaluate_stylesheet(stylesheet)
}
