use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::Expr,
    config::Config,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name of the variable that always holds the most recent result.
pub const LAST_VALUE: &str = "_";

/// Stores the runtime evaluation context.
///
/// This struct holds the session state: the read-only configuration and the
/// variable environment. It lives for the whole session, so variables assigned
/// on one line are visible on every later line.
#[derive(Debug, Default)]
pub struct Context {
    config:    Config,
    variables: HashMap<String, Value>,
}

impl Context {
    /// Creates a context with the default configuration and no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with the given configuration and no variables.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config,
               variables: HashMap::new() }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Looks up a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        debug!(name, %value, "assign");
        self.variables.insert(name.to_string(), value);
    }

    /// Evaluates an expression tree.
    ///
    /// The left operand of a binary node is evaluated before the right one.
    ///
    /// # Example
    /// ```
    /// use vecalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let expr = Expr::Binary { op:    BinaryOperator::Pow,
    ///                           left:  Box::new(Expr::Value(Value::SmallInt(2))),
    ///                           right: Box::new(Expr::Value(Value::SmallInt(10))), };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::SmallInt(1024));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Value(value) => Ok(value.clone()),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                self.eval_unary(*op, &value)
            },
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, &left, &right)
            },
        }
    }
}
