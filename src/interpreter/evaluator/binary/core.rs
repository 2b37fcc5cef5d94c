use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Rank, Value},
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// The operator's table picks a result rank from the operand ranks. Both
    /// operands are promoted to that rank and the implementation registered
    /// for it is called. Vector rank broadcasts the operator over the
    /// elements instead, and indexing is handed to [`Context::eval_index`].
    /// The result is always shrunk to its smallest exact form.
    ///
    /// # Errors
    /// - `RuntimeError::UnsupportedOperation` if the operator has no
    ///   implementation at the chosen rank.
    /// - Any error raised by the implementation itself, such as
    ///   `RuntimeError::DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use vecalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let left = Value::SmallInt(3);
    /// let right = Value::SmallInt(4);
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, &left, &right);
    /// assert_eq!(result.unwrap(), Value::SmallInt(7));
    ///
    /// let result = context.eval_binary(BinaryOperator::Mod, &left, &Value::SmallInt(0));
    /// assert!(result.is_err());
    /// ```
    pub fn eval_binary(&self, op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let Some(table) = op.table() else {
            return self.eval_index(left, right);
        };

        let rank = (table.which_type)(left.rank(), right.rank());
        trace!(%op, left = %left.rank(), right = %right.rank(), %rank, "binary dispatch");

        if rank == Rank::Vector {
            return self.eval_vector_binary(op, left, right);
        }

        let left = left.convert(rank)?;
        let right = right.convert(rank)?;

        let result = match (&left, &right) {
            (Value::SmallInt(a), Value::SmallInt(b)) => table.small.map(|f| f(*a, *b)),
            (Value::BigInt(a), Value::BigInt(b)) => table.big.map(|f| f(a, b)),
            (Value::BigRational(a), Value::BigRational(b)) => table.rational.map(|f| f(a, b)),
            _ => None,
        };

        let value = result.ok_or_else(|| RuntimeError::UnsupportedOperation { op: op.to_string(),
                                                                              rank })??;

        Ok(value.shrink())
    }
}
