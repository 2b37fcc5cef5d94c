use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Rank, Value},
    },
};

impl Context {
    /// Applies a binary operator elementwise over two vectors.
    ///
    /// Scalars are treated as vectors of length one. A length-one operand is
    /// paired with every element of the other; otherwise both operands must
    /// have the same length. Elements are combined in order and the first
    /// failing element aborts the whole operation.
    ///
    /// # Errors
    /// - `RuntimeError::LengthMismatch` if the lengths differ and neither is
    ///   one.
    /// - Any error raised while combining a pair of elements.
    ///
    /// # Example
    /// ```
    /// use vecalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let v = Value::from(vec![Value::SmallInt(1), Value::SmallInt(2), Value::SmallInt(3)]);
    ///
    /// let sum = context.eval_vector_binary(BinaryOperator::Add, &v, &Value::SmallInt(10))
    ///                  .unwrap();
    /// assert_eq!(sum.to_string(), "11 12 13");
    /// ```
    pub fn eval_vector_binary(&self,
                              op: BinaryOperator,
                              left: &Value,
                              right: &Value)
                              -> EvalResult<Value> {
        let (Value::Vector(a), Value::Vector(b)) =
            (left.convert(Rank::Vector)?, right.convert(Rank::Vector)?)
        else {
            return Err(RuntimeError::BadConversion { from: left.rank().min(right.rank()),
                                                     to:   Rank::Vector, });
        };

        let elements = match (a.len(), b.len()) {
            (1, _) => b.iter()
                       .map(|y| self.eval_binary(op, &a[0], y))
                       .collect::<EvalResult<Vec<_>>>()?,
            (_, 1) => a.iter()
                       .map(|x| self.eval_binary(op, x, &b[0]))
                       .collect::<EvalResult<Vec<_>>>()?,
            (n, m) if n == m => a.iter()
                                 .zip(b.iter())
                                 .map(|(x, y)| self.eval_binary(op, x, y))
                                 .collect::<EvalResult<Vec<_>>>()?,
            (n, m) => return Err(RuntimeError::LengthMismatch { left: n, right: m }),
        };

        Ok(Value::from(elements))
    }
}
