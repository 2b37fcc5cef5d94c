use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Rank, Value},
    },
};

impl Context {
    /// Evaluates `left[right]`.
    ///
    /// Positions count from the configured origin. A scalar index selects one
    /// element; a vector index selects a sub-vector with the elements in the
    /// order listed. A scalar on the left behaves as a vector of length one.
    ///
    /// # Errors
    /// - `RuntimeError::IndexOutOfRange` if a position lies before the origin
    ///   or past the end.
    /// - `RuntimeError::BadConversion` if an index is not an integer.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let context = Context::new();
    /// let v = Value::from(vec![Value::SmallInt(5), Value::SmallInt(6), Value::SmallInt(7)]);
    ///
    /// assert_eq!(context.eval_index(&v, &Value::SmallInt(1)).unwrap(), Value::SmallInt(6));
    /// assert!(context.eval_index(&v, &Value::SmallInt(3)).is_err());
    /// ```
    pub fn eval_index(&self, left: &Value, right: &Value) -> EvalResult<Value> {
        let Value::Vector(elements) = left.convert(Rank::Vector)? else {
            return Err(RuntimeError::BadConversion { from: left.rank(),
                                                     to:   Rank::Vector, });
        };

        match right {
            Value::Vector(indexes) => {
                let selected = indexes.iter()
                                      .map(|index| self.select(&elements, index))
                                      .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(selected))
            },
            index => self.select(&elements, index),
        }
    }

    fn select(&self, elements: &[Value], index: &Value) -> EvalResult<Value> {
        let out_of_range = || RuntimeError::IndexOutOfRange { index: index.to_string(),
                                                              len:   elements.len(), };

        match index {
            Value::SmallInt(i) => {
                let origin = i64::try_from(self.config().origin()).map_err(|_| out_of_range())?;
                let position = i.checked_sub(origin)
                                .and_then(|p| usize::try_from(p).ok())
                                .ok_or_else(out_of_range)?;

                elements.get(position).cloned().ok_or_else(out_of_range)
            },
            // Shrunk big integers never fit an `i64`, so no vector is that long.
            Value::BigInt(_) => Err(out_of_range()),
            other => Err(RuntimeError::BadConversion { from: other.rank(),
                                                       to:   Rank::SmallInt, }),
        }
    }
}
