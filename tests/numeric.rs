use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use vecalc::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Context,
        value::{
            core::{Rank, Value},
            parse::parse_value,
        },
    },
};

const SAMPLES: [i64; 12] = [0, 1, -1, 2, -3, 7, -7, 10, 13, -100, i64::MAX, i64::MIN];

fn binary(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    Context::new().eval_binary(op, left, right)
}

fn big(value: &Value) -> BigInt {
    match value.convert(Rank::BigInt) {
        Ok(Value::BigInt(n)) => n,
        other => panic!("expected an integer, got {other:?}"),
    }
}

#[test]
fn small_addition_stays_native() {
    for a in [0, 1, -1, 40, -1000, 1 << 40] {
        for b in [0, 2, -2, 99, 1 << 20] {
            let sum = binary(BinaryOperator::Add, &Value::SmallInt(a), &Value::SmallInt(b)).unwrap();
            assert_eq!(sum, Value::SmallInt(a + b));
        }
    }
}

#[test]
fn overflowing_addition_is_exact() {
    for a in SAMPLES {
        for b in SAMPLES {
            let sum = binary(BinaryOperator::Add, &Value::SmallInt(a), &Value::SmallInt(b)).unwrap();
            assert_eq!(big(&sum), BigInt::from(a) + BigInt::from(b), "{a} + {b}");
            assert_eq!(sum.rank() == Rank::SmallInt, a.checked_add(b).is_some(), "{a} + {b}");
        }
    }
}

#[test]
fn overflowing_multiplication_is_exact() {
    for a in SAMPLES {
        for b in SAMPLES {
            let product =
                binary(BinaryOperator::Mul, &Value::SmallInt(a), &Value::SmallInt(b)).unwrap();
            assert_eq!(big(&product), BigInt::from(a) * BigInt::from(b), "{a} * {b}");
        }
    }
}

#[test]
fn euclidean_division_identity() {
    for a in SAMPLES {
        for b in SAMPLES.into_iter().filter(|&b| b != 0) {
            let (a, b) = (Value::SmallInt(a), Value::SmallInt(b));
            let q = big(&binary(BinaryOperator::Div, &a, &b).unwrap());
            let r = big(&binary(BinaryOperator::Mod, &a, &b).unwrap());

            assert_eq!(&q * big(&b) + &r, big(&a), "{a} div {b}");
            assert!(r >= BigInt::from(0), "{a} mod {b} = {r}");
            assert!(r < big(&b).abs(), "{a} mod {b} = {r}");
        }
    }
}

#[test]
fn truncating_division_identity() {
    for a in SAMPLES {
        for b in SAMPLES.into_iter().filter(|&b| b != 0) {
            let (a, b) = (Value::SmallInt(a), Value::SmallInt(b));
            let q = big(&binary(BinaryOperator::Idiv, &a, &b).unwrap());
            let r = big(&binary(BinaryOperator::Imod, &a, &b).unwrap());

            assert_eq!(&q * big(&b) + &r, big(&a), "{a} idiv {b}");
            assert!(r == BigInt::from(0) || r.sign() == big(&a).sign(), "{a} imod {b} = {r}");
        }
    }
}

#[test]
fn min_idiv_minus_one_promotes() {
    let q = binary(BinaryOperator::Idiv, &Value::SmallInt(i64::MIN), &Value::SmallInt(-1)).unwrap();
    assert_eq!(big(&q), -BigInt::from(i64::MIN));

    let r = binary(BinaryOperator::Imod, &Value::SmallInt(i64::MIN), &Value::SmallInt(-1)).unwrap();
    assert_eq!(r, Value::SmallInt(0));
}

#[test]
fn shrink_is_idempotent_and_never_raises_rank() {
    let values = [Value::SmallInt(5),
                  Value::BigInt(BigInt::from(5)),
                  Value::BigInt(BigInt::from(i64::MAX) * 4),
                  Value::BigRational(BigRational::from_integer(BigInt::from(9))),
                  Value::BigRational(BigRational::new(BigInt::from(1), BigInt::from(3))),
                  Value::from(vec![Value::BigInt(BigInt::from(2)),
                                   Value::BigRational(BigRational::new(BigInt::from(4),
                                                                       BigInt::from(2)))])];

    for value in values {
        let once = value.clone().shrink();
        assert!(once.rank() <= value.rank(), "{value:?} grew to {once:?}");
        assert_eq!(once.clone().shrink(), once);
    }
}

#[test]
fn rationals_round_trip_through_their_rendering() {
    for (n, d) in [(1, 3), (-2, 7), (22, 7), (5, 1_000_000_007)] {
        let r = Value::BigRational(BigRational::new(BigInt::from(n), BigInt::from(d)));
        assert_eq!(parse_value(&r.to_string()).unwrap(), r);
    }

    let huge = BigRational::new(BigInt::from(i64::MAX) * 3, BigInt::from(i64::MAX) - 1);
    let value = Value::BigRational(huge);
    assert_eq!(parse_value(&value.to_string()).unwrap(), value);
}

#[test]
fn broadcasting_a_single_element_matches_scalar_application() {
    let context = Context::new();
    let v = Value::from(vec![Value::SmallInt(3), Value::SmallInt(-4), Value::SmallInt(10)]);
    let Value::Vector(elements) = &v else { unreachable!() };

    for x in [Value::SmallInt(2), parse_value("1/2").unwrap()] {
        for op in [BinaryOperator::Add, BinaryOperator::Sub, BinaryOperator::Mul, BinaryOperator::Quo] {
            let single = Value::from(vec![x.clone()]);
            let broadcast = context.eval_binary(op, &single, &v).unwrap();
            let expected: Vec<Value> =
                elements.iter().map(|e| context.eval_binary(op, &x, e).unwrap()).collect();

            assert_eq!(broadcast, Value::from(expected), "{x} {op} {v}");
        }
    }
}

#[test]
fn mismatched_lengths_never_truncate() {
    let context = Context::new();
    let a = Value::from(vec![Value::SmallInt(1), Value::SmallInt(2)]);
    let b = Value::from(vec![Value::SmallInt(1), Value::SmallInt(2), Value::SmallInt(3)]);

    assert_eq!(context.eval_binary(BinaryOperator::Add, &a, &b),
               Err(RuntimeError::LengthMismatch { left: 2, right: 3 }));
}

#[test]
fn first_failing_element_aborts_the_vector() {
    let context = Context::new();
    let v = Value::from(vec![Value::SmallInt(1), Value::SmallInt(0), Value::SmallInt(2)]);

    assert_eq!(context.eval_binary(BinaryOperator::Imod, &Value::SmallInt(5), &v),
               Err(RuntimeError::ModuloByZero));
}

#[test]
fn narrowing_conversions_are_rejected() {
    let half = parse_value("1/2").unwrap();
    assert_eq!(half.convert(Rank::SmallInt),
               Err(RuntimeError::BadConversion { from: Rank::BigRational,
                                                 to:   Rank::SmallInt, }));

    let v = Value::from(vec![Value::SmallInt(1)]);
    assert!(v.convert(Rank::BigInt).is_err());
}

#[test]
fn nested_vectors_broadcast_recursively() {
    let context = Context::new();
    let inner = Value::from(vec![Value::SmallInt(1), Value::SmallInt(2)]);
    let nested = Value::from(vec![inner.clone(), Value::SmallInt(10)]);

    let result = context.eval_binary(BinaryOperator::Mul, &nested, &Value::SmallInt(3)).unwrap();
    assert_eq!(result,
               Value::from(vec![Value::from(vec![Value::SmallInt(3), Value::SmallInt(6)]),
                                Value::SmallInt(30)]));
}
