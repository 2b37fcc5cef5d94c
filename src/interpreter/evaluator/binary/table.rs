use num_bigint::BigInt;
use num_rational::BigRational;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{arith, bitwise, comparison, division, power},
            core::EvalResult,
        },
        value::core::{Rank, Value},
    },
};

/// Implementation of an operator on two native integers.
pub type SmallFn = fn(i64, i64) -> EvalResult<Value>;
/// Implementation of an operator on two big integers.
pub type BigFn = fn(&BigInt, &BigInt) -> EvalResult<Value>;
/// Implementation of an operator on two rationals.
pub type RationalFn = fn(&BigRational, &BigRational) -> EvalResult<Value>;

/// A binary operator's type-selection rule and per-rank implementations.
///
/// A missing implementation means the operator is undefined at that rank.
/// Vector rank needs no entry: vectors are always broadcast elementwise.
pub struct BinaryOp {
    /// Picks the rank both operands are promoted to.
    pub which_type: fn(Rank, Rank) -> Rank,
    /// `SmallInt` implementation.
    pub small:      Option<SmallFn>,
    /// `BigInt` implementation.
    pub big:        Option<BigFn>,
    /// `BigRational` implementation.
    pub rational:   Option<RationalFn>,
}

/// Standard promotion: the larger of the two ranks.
#[must_use]
pub fn arith_type(left: Rank, right: Rank) -> Rank {
    left.max(right)
}

/// Like [`arith_type`] but never below `BigInt`, because exponentiation and
/// shifts are only implemented on big integers.
#[must_use]
pub fn div_type(left: Rank, right: Rank) -> Rank {
    Rank::BigInt.max(left).max(right)
}

/// Never below `BigRational`, so `/` is always exact.
#[must_use]
pub fn rational_type(left: Rank, right: Rank) -> Rank {
    Rank::BigRational.max(left).max(right)
}

macro_rules! binary_op {
    ($name:ident, $which:expr, $small:expr, $big:expr, $rational:expr $(,)?) => {
        static $name: BinaryOp = BinaryOp { which_type: $which,
                                            small:      $small,
                                            big:        $big,
                                            rational:   $rational, };
    };
}

binary_op!(ADD, arith_type, Some(arith::add_small), Some(arith::add_big), Some(arith::add_rational));
binary_op!(SUB, arith_type, Some(arith::sub_small), Some(arith::sub_big), Some(arith::sub_rational));
binary_op!(MUL, arith_type, Some(arith::mul_small), Some(arith::mul_big), Some(arith::mul_rational));
binary_op!(QUO, rational_type, None, None, Some(arith::quo_rational));
// Truncating division keeps a native fast path; overflow is recomputed on
// big integers, so the results match the big-integer rank.
binary_op!(IDIV, arith_type, Some(division::idiv_small), Some(division::idiv_big), None);
binary_op!(IMOD, arith_type, Some(division::imod_small), Some(division::imod_big), None);
binary_op!(DIV, div_type, None, Some(division::div_big), None);
binary_op!(MOD, div_type, None, Some(division::mod_big), None);
binary_op!(POW, div_type, None, Some(power::pow_big), Some(power::pow_rational));
binary_op!(AND, arith_type, Some(bitwise::and_small), Some(bitwise::and_big), None);
binary_op!(OR, arith_type, Some(bitwise::or_small), Some(bitwise::or_big), None);
binary_op!(XOR, arith_type, Some(bitwise::xor_small), Some(bitwise::xor_big), None);
binary_op!(LSH, div_type, None, Some(bitwise::lsh_big), None);
binary_op!(RSH, div_type, None, Some(bitwise::rsh_big), None);
binary_op!(EQ,
           arith_type,
           Some(comparison::eq_small),
           Some(comparison::eq_big),
           Some(comparison::eq_rational));
binary_op!(NE,
           arith_type,
           Some(comparison::ne_small),
           Some(comparison::ne_big),
           Some(comparison::ne_rational));
binary_op!(LT,
           arith_type,
           Some(comparison::lt_small),
           Some(comparison::lt_big),
           Some(comparison::lt_rational));
binary_op!(LE,
           arith_type,
           Some(comparison::le_small),
           Some(comparison::le_big),
           Some(comparison::le_rational));
binary_op!(GT,
           arith_type,
           Some(comparison::gt_small),
           Some(comparison::gt_big),
           Some(comparison::gt_rational));
binary_op!(GE,
           arith_type,
           Some(comparison::ge_small),
           Some(comparison::ge_big),
           Some(comparison::ge_rational));
binary_op!(MIN,
           arith_type,
           Some(comparison::min_small),
           Some(comparison::min_big),
           Some(comparison::min_rational));
binary_op!(MAX,
           arith_type,
           Some(comparison::max_small),
           Some(comparison::max_big),
           Some(comparison::max_rational));

impl BinaryOperator {
    /// Returns the operator's table entry.
    ///
    /// `Index` has none: selection depends on the index origin and is handled
    /// by the context directly.
    #[must_use]
    pub fn table(self) -> Option<&'static BinaryOp> {
        Some(match self {
                 Self::Add => &ADD,
                 Self::Sub => &SUB,
                 Self::Mul => &MUL,
                 Self::Quo => &QUO,
                 Self::Idiv => &IDIV,
                 Self::Imod => &IMOD,
                 Self::Div => &DIV,
                 Self::Mod => &MOD,
                 Self::Pow => &POW,
                 Self::And => &AND,
                 Self::Or => &OR,
                 Self::Xor => &XOR,
                 Self::Lsh => &LSH,
                 Self::Rsh => &RSH,
                 Self::Equal => &EQ,
                 Self::NotEqual => &NE,
                 Self::Less => &LT,
                 Self::LessEqual => &LE,
                 Self::Greater => &GT,
                 Self::GreaterEqual => &GE,
                 Self::Min => &MIN,
                 Self::Max => &MAX,
                 Self::Index => return None,
             })
    }
}
