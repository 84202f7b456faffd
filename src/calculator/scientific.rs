//! Unary scientific functions.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use super::CalcError;

/// Largest argument whose factorial is still a finite `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// Scientific functions applied to the current operand.
///
/// Trigonometric functions work in degrees; the hyperbolic ones in radians.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Log,
    Ln,
    Sqrt,
    Square,
    Exp,
    Pow10,
    Factorial,
    Abs,
    Floor,
    Ceil,
    Pi,
    E,
}

impl ScientificFunction {
    pub const ALL: [ScientificFunction; 21] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Log,
        Self::Ln,
        Self::Sqrt,
        Self::Square,
        Self::Exp,
        Self::Pow10,
        Self::Factorial,
        Self::Abs,
        Self::Floor,
        Self::Ceil,
        Self::Pi,
        Self::E,
    ];

    /// Name used in history expressions, e.g. `sqrt(16)`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Square => "pow",
            Self::Exp => "exp",
            Self::Pow10 => "pow10",
            Self::Factorial => "factorial",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Apply the function to `value`.
    ///
    /// Any NaN or infinite result is reported as [`CalcError::DomainError`];
    /// factorial has its own argument checks.
    pub fn apply(&self, value: f64) -> Result<f64, CalcError> {
        let result = match self {
            Self::Sin => value.to_radians().sin(),
            Self::Cos => value.to_radians().cos(),
            Self::Tan => value.to_radians().tan(),
            Self::Asin => value.asin().to_degrees(),
            Self::Acos => value.acos().to_degrees(),
            Self::Atan => value.atan().to_degrees(),
            Self::Sinh => value.sinh(),
            Self::Cosh => value.cosh(),
            Self::Tanh => value.tanh(),
            Self::Log => value.log10(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
            Self::Square => value.powi(2),
            Self::Exp => value.exp(),
            Self::Pow10 => 10f64.powf(value),
            Self::Factorial => factorial(value)?,
            Self::Abs => value.abs(),
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
            Self::Pi => PI,
            Self::E => E,
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::DomainError)
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if let Some(func) = Self::ALL.iter().find(|f| f.name() == lower) {
            return Ok(*func);
        }

        match lower.as_str() {
            "square" | "sqr" => Ok(Self::Square),
            "fact" | "!" => Ok(Self::Factorial),
            "log10" => Ok(Self::Log),
            "ceiling" => Ok(Self::Ceil),
            _ => Err(format!("Unknown function '{}'", s)),
        }
    }
}

/// Factorial of a non-negative integer, computed iteratively.
pub fn factorial(n: f64) -> Result<f64, CalcError> {
    // Checked first so an infinite argument reports overflow.
    if n > MAX_FACTORIAL {
        return Err(CalcError::Overflow);
    }
    if n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::InvalidInput);
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}
