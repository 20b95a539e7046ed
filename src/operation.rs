// operation.rs

use crate::error::CalcError;
use crate::util::format_number;

/// One arithmetic request, holding exactly the operands its kind needs.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Operation {
    Add(f64, f64),
    Subtract(f64, f64),
    Multiply(f64, f64),
    Divide(f64, f64),
    Power { base: f64, exponent: i32 },
    SquareRoot(f64),
}

/// The operation families offered by the menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
}

impl OperationKind {
    pub fn symbol(self) -> &'static str {
        match self {
            OperationKind::Add => "+",
            OperationKind::Subtract => "-",
            OperationKind::Multiply => "*",
            OperationKind::Divide => "/",
            OperationKind::Power => "^",
            OperationKind::SquareRoot => "√",
        }
    }
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Add(..) => OperationKind::Add,
            Operation::Subtract(..) => OperationKind::Subtract,
            Operation::Multiply(..) => OperationKind::Multiply,
            Operation::Divide(..) => OperationKind::Divide,
            Operation::Power { .. } => OperationKind::Power,
            Operation::SquareRoot(_) => OperationKind::SquareRoot,
        }
    }

    pub fn compute(&self) -> Result<f64, CalcError> {
        match *self {
            Operation::Add(a, b) => Ok(a + b),
            Operation::Subtract(a, b) => Ok(a - b),
            Operation::Multiply(a, b) => Ok(a * b),
            Operation::Divide(_, b) if b == 0.0 => Err(CalcError::DivisionByZero),
            Operation::Divide(a, b) => Ok(a / b),
            Operation::Power { base, exponent } => Ok(power(base, exponent)),
            Operation::SquareRoot(x) if x < 0.0 => Err(CalcError::NegativeRadicand(x)),
            Operation::SquareRoot(x) => Ok(x.sqrt()),
        }
    }

    /// `"<a> <op> <b> = <result>"`; recomputes on every call.
    pub fn describe(&self) -> Result<String, CalcError> {
        let result = format_number(self.compute()?);
        let symbol = self.kind().symbol();
        Ok(match *self {
            Operation::Add(a, b)
            | Operation::Subtract(a, b)
            | Operation::Multiply(a, b)
            | Operation::Divide(a, b) => {
                format!("{} {} {} = {}", format_number(a), symbol, format_number(b), result)
            }
            Operation::Power { base, exponent } => {
                format!("{} {} {} = {}", format_number(base), symbol, exponent, result)
            }
            Operation::SquareRoot(x) => format!("{}{} = {}", symbol, format_number(x), result),
        })
    }
}

// Repeated multiplication; a zero exponent gives 1 even for base 0.
fn power(base: f64, exponent: i32) -> f64 {
    let mut acc = 1.0;
    for _ in 0..exponent.unsigned_abs() {
        acc *= base;
    }
    if exponent < 0 {
        1.0 / acc
    } else {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_describes_with_fraction_digits() {
        assert_eq!(Operation::Add(3.0, 4.0).describe().unwrap(), "3.0 + 4.0 = 7.0");
    }

    #[test]
    fn describe_formats_each_kind() {
        assert_eq!(Operation::Subtract(10.0, 2.5).describe().unwrap(), "10.0 - 2.5 = 7.5");
        assert_eq!(Operation::Multiply(-2.0, 3.0).describe().unwrap(), "-2.0 * 3.0 = -6.0");
        assert_eq!(Operation::Divide(1.0, 4.0).describe().unwrap(), "1.0 / 4.0 = 0.25");
        assert_eq!(
            Operation::Power { base: 2.0, exponent: 3 }.describe().unwrap(),
            "2.0 ^ 3 = 8.0"
        );
        assert_eq!(
            Operation::Power { base: 2.0, exponent: -2 }.describe().unwrap(),
            "2.0 ^ -2 = 0.25"
        );
        assert_eq!(Operation::SquareRoot(9.0).describe().unwrap(), "√9.0 = 3.0");
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(Operation::Divide(5.0, 0.0).compute(), Err(CalcError::DivisionByZero));
        assert_eq!(Operation::Divide(5.0, -0.0).compute(), Err(CalcError::DivisionByZero));
        assert_eq!(Operation::Divide(5.0, 0.0).describe(), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn negative_radicand_fails() {
        assert_eq!(
            Operation::SquareRoot(-4.0).compute(),
            Err(CalcError::NegativeRadicand(-4.0))
        );
        assert!(Operation::SquareRoot(-4.0).describe().is_err());
    }

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Operation::Divide(1.0, 2.0).kind(), OperationKind::Divide);
        assert_eq!(Operation::Power { base: 1.0, exponent: 2 }.kind().symbol(), "^");
    }

    #[test]
    fn zero_to_the_zero_is_one() {
        assert_eq!(Operation::Power { base: 0.0, exponent: 0 }.compute(), Ok(1.0));
    }

    #[test]
    fn power_handles_extreme_exponents() {
        assert_eq!(Operation::Power { base: 1.0, exponent: i32::MIN }.compute(), Ok(1.0));
        assert_eq!(
            Operation::Power { base: 0.0, exponent: -1 }.compute(),
            Ok(f64::INFINITY)
        );
    }

    #[test]
    fn square_root_of_negative_zero() {
        assert_eq!(Operation::SquareRoot(-0.0).describe().unwrap(), "√-0.0 = -0.0");
    }

    proptest! {
        #[test]
        fn binary_ops_match_native(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(Operation::Add(a, b).compute(), Ok(a + b));
            prop_assert_eq!(Operation::Subtract(a, b).compute(), Ok(a - b));
            prop_assert_eq!(Operation::Multiply(a, b).compute(), Ok(a * b));
        }

        #[test]
        fn divide_matches_native(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assume!(b != 0.0);
            prop_assert_eq!(Operation::Divide(a, b).compute(), Ok(a / b));
        }

        #[test]
        fn power_is_repeated_multiplication(base in -10f64..10.0, n in 0i32..20) {
            let mut expected = 1.0;
            for _ in 0..n {
                expected *= base;
            }
            prop_assert_eq!(Operation::Power { base, exponent: n }.compute(), Ok(expected));
            prop_assert_eq!(Operation::Power { base, exponent: 0 }.compute(), Ok(1.0));
        }

        #[test]
        fn negative_power_is_reciprocal(base in -10f64..10.0, n in 1i32..20) {
            prop_assume!(base != 0.0);
            let positive = Operation::Power { base, exponent: n }.compute().unwrap();
            prop_assert_eq!(Operation::Power { base, exponent: -n }.compute(), Ok(1.0 / positive));
        }

        #[test]
        fn square_root_is_principal(x in 0f64..1e12) {
            let root = Operation::SquareRoot(x).compute().unwrap();
            prop_assert!(root >= 0.0);
            prop_assert_eq!(root, x.sqrt());
        }

        #[test]
        fn square_root_rejects_negatives(x in -1e12f64..-1e-9) {
            prop_assert_eq!(Operation::SquareRoot(x).compute(), Err(CalcError::NegativeRadicand(x)));
        }
    }
}
