use num_bigint::BigInt;

use crate::{
    config::{Config, apply_format},
    interpreter::value::core::Value,
};

impl Value {
    /// Renders the value with the number and rational formats of `config`.
    ///
    /// With the default formats this is identical to the `Display` rendering.
    ///
    /// # Example
    /// ```
    /// use vecalc::{config::Config, interpreter::value::core::Value};
    ///
    /// let mut config = Config::new();
    /// config.set_format("%x");
    ///
    /// let v = Value::from(vec![Value::SmallInt(255), Value::SmallInt(16)]);
    /// assert_eq!(v.render(&config), "ff 10");
    /// ```
    #[must_use]
    pub fn render(&self, config: &Config) -> String {
        match self {
            Self::SmallInt(n) => apply_format(config.format(), &[&BigInt::from(*n)]),
            Self::BigInt(n) => apply_format(config.format(), &[n]),
            Self::BigRational(r) => apply_format(config.rat_format(), &[r.numer(), r.denom()]),
            Self::Vector(v) => v.iter()
                                .map(|elem| elem.render(config))
                                .collect::<Vec<_>>()
                                .join(" "),
        }
    }
}
