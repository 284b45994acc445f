use ordered_float::OrderedFloat;

/// An abstract syntax tree (AST) node representing one arithmetic expression.
///
/// A tree is built once per input line by the parser and is never mutated
/// afterwards. Every node owns its children exclusively, so a tree has no
/// sharing and no cycles.
///
/// Numbers are wrapped in [`OrderedFloat`] so that two trees holding the same
/// NaN "last answer" still compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal, including the values substituted for `ans`, `pi`
    /// and `e`.
    Number {
        /// The constant value.
        value: OrderedFloat<f64>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sqrt(16)`).
    FunctionCall {
        /// Name of the function being called, letters only.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::Number`] node from a plain `f64`.
    ///
    /// # Example
    /// ```
    /// use anscalc::ast::Expr;
    ///
    /// let node = Expr::number(f64::NAN);
    /// assert_eq!(node, Expr::number(f64::NAN));
    /// ```
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value: OrderedFloat(value) }
    }

    /// Builds a [`Expr::BinaryOp`] node, boxing both operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// The four arithmetic operators a [`Expr::BinaryOp`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Applies the operator with IEEE-754 double precision semantics.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use anscalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(7.0, 2.0), 5.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }

    /// Returns `true` for the additive tier (`+`, `-`).
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for the multiplicative tier (`*`, `/`).
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}
