use crate::{
    ast::{
        ast::{BodyItem, ExpressionType, NodeId, Stylerule, Stylesheet, TopLevel},
        expressions::{Expression, Operation, Operator},
        statements::{Declaration, IfClause, VariableAssignment},
    },
    errors::errors::{Diagnostic, Error, ErrorImpl},
    scope::scope_stack::ScopeStack,
    Span,
};

/// The value types a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRequirement {
    Color,
    Size,
}

impl PropertyRequirement {
    /// Looks up the constraint for a property. Unknown properties are
    /// unconstrained.
    pub fn for_property(property: &str) -> Option<Self> {
        match property.to_ascii_lowercase().as_str() {
            "color" | "background-color" => Some(PropertyRequirement::Color),
            "width" | "height" | "margin" | "padding" | "top" | "left" => {
                Some(PropertyRequirement::Size)
            }
            _ => None,
        }
    }

    pub fn accepts(self, ty: ExpressionType) -> bool {
        match self {
            PropertyRequirement::Color => ty == ExpressionType::Color,
            PropertyRequirement::Size => {
                matches!(ty, ExpressionType::Pixel | ExpressionType::Percentage)
            }
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            PropertyRequirement::Color => "a COLOR",
            PropertyRequirement::Size => "a PIXEL or PERCENTAGE",
        }
    }
}

/// Result type of `left <operator> right`, or `Undefined` when the operands
/// do not combine.
pub fn infer_operation_type(
    operator: Operator,
    left: ExpressionType,
    right: ExpressionType,
) -> ExpressionType {
    match operator {
        Operator::Add | Operator::Subtract if left == right => left,
        Operator::Add | Operator::Subtract => ExpressionType::Undefined,
        Operator::Multiply => match (left, right) {
            (ExpressionType::Scalar, other) | (other, ExpressionType::Scalar) => other,
            _ => ExpressionType::Undefined,
        },
    }
}

/// The first rule `left <operator> right` breaks, if any.
///
/// Colors and booleans are rejected on their own; the remaining rules need
/// both operand types, so an undefined side skips them.
fn operation_error(
    operator: Operator,
    left: ExpressionType,
    right: ExpressionType,
) -> Option<ErrorImpl> {
    for operand in [left, right] {
        if matches!(operand, ExpressionType::Color | ExpressionType::Bool) {
            return Some(ErrorImpl::NonNumericOperand {
                operand: operand.to_string(),
            });
        }
    }

    if left == ExpressionType::Undefined || right == ExpressionType::Undefined {
        return None;
    }

    match operator {
        Operator::Add | Operator::Subtract if left != right => {
            Some(ErrorImpl::OperandTypeMismatch {
                operator: operator.to_string(),
                left: left.to_string(),
                right: right.to_string(),
            })
        }
        Operator::Multiply
            if left != ExpressionType::Scalar && right != ExpressionType::Scalar =>
        {
            Some(ErrorImpl::MissingScalarOperand {
                left: left.to_string(),
                right: right.to_string(),
            })
        }
        _ => None,
    }
}

/// Validates a stylesheet without changing it.
///
/// Every rule violation becomes a diagnostic; the traversal always runs to
/// the end so one pass reports everything.
#[derive(Debug, Default)]
pub struct TypeChecker {
    scopes: ScopeStack<ExpressionType>,
    diagnostics: Vec<Diagnostic>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            scopes: ScopeStack::new(),
            diagnostics: vec![],
        }
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    #[tracing::instrument(skip_all)]
    pub fn check_stylesheet(&mut self, stylesheet: &Stylesheet) {
        self.with_scope(|checker| {
            for member in &stylesheet.members {
                match member {
                    TopLevel::Assignment(assignment) => checker.check_assignment(assignment),
                    TopLevel::Rule(rule) => checker.check_stylerule(rule),
                }
            }
        });
    }

    /// Runs `f` inside a fresh scope and pops it afterwards.
    fn with_scope(&mut self, f: impl FnOnce(&mut Self)) {
        self.scopes.push_scope();
        f(self);
        if let Err(error) = self.scopes.pop_scope() {
            tracing::error!(%error, "scope stack out of balance");
        }
    }

    fn report(&mut self, node: NodeId, span: &Span, error: ErrorImpl) {
        let error = Error::new(error, span.start.clone());
        tracing::debug!(node = %node, %error, "diagnostic");
        self.diagnostics.push(Diagnostic::new(node, error));
    }

    fn check_stylerule(&mut self, rule: &Stylerule) {
        self.with_scope(|checker| checker.check_body(&rule.body));
    }

    fn check_body(&mut self, body: &[BodyItem]) {
        for item in body {
            match item {
                BodyItem::Declaration(declaration) => self.check_declaration(declaration),
                BodyItem::Assignment(assignment) => self.check_assignment(assignment),
                BodyItem::If(clause) => self.check_if_clause(clause),
            }
        }
    }

    /// The value is checked before the name is bound, so `X := X;` still
    /// reports an undefined `X`.
    fn check_assignment(&mut self, assignment: &VariableAssignment) {
        self.check_expr(&assignment.value);

        let ty = self.infer(&assignment.value);
        if let Err(error) = self.scopes.define(assignment.name.clone(), ty) {
            self.diagnostics.push(Diagnostic::new(assignment.id, error));
        }
    }

    fn check_declaration(&mut self, declaration: &Declaration) {
        let ty = self.infer(&declaration.value);

        if let Some(requirement) = PropertyRequirement::for_property(&declaration.property) {
            // Undefined values were already reported where they arose
            if ty != ExpressionType::Undefined && !requirement.accepts(ty) {
                self.report(
                    declaration.id,
                    &declaration.span,
                    ErrorImpl::PropertyTypeMismatch {
                        property: declaration.property.clone(),
                        expected: requirement.describe().to_string(),
                        received: ty.to_string(),
                    },
                );
            }
        }

        self.check_expr(&declaration.value);
    }

    fn check_if_clause(&mut self, clause: &IfClause) {
        let ty = self.infer(&clause.condition);
        if ty != ExpressionType::Bool && ty != ExpressionType::Undefined {
            self.report(
                clause.id,
                &clause.span,
                ErrorImpl::ConditionNotBoolean {
                    received: ty.to_string(),
                },
            );
        }
        self.check_expr(&clause.condition);

        self.with_scope(|checker| checker.check_body(&clause.body));

        if let Some(else_clause) = &clause.else_clause {
            self.with_scope(|checker| checker.check_body(&else_clause.body));
        }
    }

    fn check_expr(&mut self, expr: &Expression) {
        match expr {
            Expression::Literal(_) => {}
            Expression::Reference(reference) => {
                if !self.scopes.is_defined(&reference.name) {
                    self.report(
                        reference.id,
                        &reference.span,
                        ErrorImpl::VariableNotDeclared {
                            variable: reference.name.clone(),
                        },
                    );
                }
            }
            Expression::Operation(operation) => self.check_operation(operation),
        }
    }

    fn check_operation(&mut self, operation: &Operation) {
        let left = self.infer(&operation.left);
        let right = self.infer(&operation.right);

        if let Some(error) = operation_error(operation.operator, left, right) {
            self.report(operation.id, &operation.span, error);
        }

        self.check_expr(&operation.left);
        self.check_expr(&operation.right);
    }

    /// Static type of `expr` in the current scopes.
    pub fn infer(&self, expr: &Expression) -> ExpressionType {
        match expr {
            Expression::Literal(literal) => literal.value.get_type(),
            Expression::Reference(reference) => self
                .scopes
                .lookup(&reference.name)
                .copied()
                .unwrap_or(ExpressionType::Undefined),
            Expression::Operation(operation) => infer_operation_type(
                operation.operator,
                self.infer(&operation.left),
                self.infer(&operation.right),
            ),
        }
    }
}

/// Checks `stylesheet` and returns every diagnostic found, in traversal
/// order. An empty result means the stylesheet can be evaluated.
pub fn check(stylesheet: &Stylesheet) -> Vec<Diagnostic> {
    let mut checker = TypeChecker::new();
    checker.check_stylesheet(stylesheet);
    checker.into_diagnostics()
}
