// crates/domain/src/value_objects.rs
use std::fmt;

use sales_report_shared_kernel::{DomainError, DomainResult};

/// A single loosely typed value as handed out by the data source.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Cell {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerce the cell to a number, keeping "absent" and "not a number" apart.
    pub fn to_numeric(&self) -> Coerced {
        match self {
            Self::Null => Coerced::Absent,
            Self::Integer(v) => Coerced::Number(Numeric::Int(*v)),
            Self::Real(v) if v.is_nan() => Coerced::Absent,
            Self::Real(v) => Coerced::Number(Numeric::Real(*v)),
            Self::Text(raw) => parse_numeric(raw),
            Self::Blob(_) => Coerced::NonNumeric,
        }
    }

    /// The exact integer held by this cell, if any.
    ///
    /// Reals qualify only when they carry no fractional part.
    pub fn as_integer(&self) -> Option<i64> {
        match self.to_numeric() {
            Coerced::Number(n) => n.as_exact_integer(),
            Coerced::Absent | Coerced::NonNumeric => None,
        }
    }

    /// Render the cell as text. NULL renders as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Integer(v) => v.to_string(),
            Self::Real(v) => v.to_string(),
            Self::Text(s) => s.clone(),
            Self::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            other => f.write_str(&other.to_text()),
        }
    }
}

fn parse_numeric(raw: &str) -> Coerced {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Coerced::Number(Numeric::Int(v));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Coerced::Number(Numeric::Real(v)),
        _ => Coerced::NonNumeric,
    }
}

/// Result of coercing a [`Cell`] to a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    /// NULL, or a NaN real.
    Absent,
    /// Present but not parseable as a number.
    NonNumeric,
    Number(Numeric),
}

/// Integer-or-real value, as stored by SQLite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Real(f64),
}

impl Numeric {
    #[inline]
    pub fn is_positive(self) -> bool {
        match self {
            Self::Int(v) => v > 0,
            Self::Real(v) => v > 0.0,
        }
    }

    /// Cast to an integer the way `CAST(x AS INTEGER)` does: truncate toward zero.
    #[inline]
    pub fn truncate(self) -> i64 {
        match self {
            Self::Int(v) => v,
            Self::Real(v) => v.trunc() as i64,
        }
    }

    pub fn as_exact_integer(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Real(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => Some(v as i64),
            Self::Real(_) => None,
        }
    }
}

/// Running `SUM` with SQLite's arithmetic.
///
/// Integers accumulate exactly. The first real operand, or an integer
/// overflow, switches to a double carried with a Kahan-Babuska-Neumaier
/// compensation term. An overflow stays fatal unless a later real operand
/// makes the total approximate anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantitySum {
    state: SumState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SumState {
    Exact(i64),
    Approx { total: Compensated, overflowed: bool },
}

impl QuantitySum {
    pub fn add(&mut self, value: Numeric) {
        self.state = match (self.state, value) {
            (SumState::Exact(sum), Numeric::Int(v)) => match sum.checked_add(v) {
                Some(next) => SumState::Exact(next),
                None => {
                    let mut total = Compensated::from_int(sum);
                    total.step_int(v);
                    SumState::Approx { total, overflowed: true }
                }
            },
            (SumState::Exact(sum), Numeric::Real(v)) => {
                let mut total = Compensated::from_int(sum);
                total.step(v);
                SumState::Approx { total, overflowed: false }
            }
            (SumState::Approx { mut total, overflowed }, Numeric::Int(v)) => {
                total.step_int(v);
                SumState::Approx { total, overflowed }
            }
            (SumState::Approx { mut total, .. }, Numeric::Real(v)) => {
                total.step(v);
                SumState::Approx { total, overflowed: false }
            }
        };
    }

    /// The final value, or `None` when integer arithmetic overflowed.
    pub fn total(&self) -> Option<Numeric> {
        match self.state {
            SumState::Exact(v) => Some(Numeric::Int(v)),
            SumState::Approx { overflowed: true, .. } => None,
            SumState::Approx { total, .. } => Some(Numeric::Real(total.value())),
        }
    }
}

impl Default for QuantitySum {
    fn default() -> Self {
        Self { state: SumState::Exact(0) }
    }
}

/// Integers at or beyond 2^52 are split so no bits are lost on conversion.
const SPLIT_THRESHOLD: i64 = 1 << 52;
const SPLIT_MODULUS: i64 = 16384;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Compensated {
    sum: f64,
    err: f64,
}

impl Compensated {
    fn from_int(v: i64) -> Self {
        if v <= -SPLIT_THRESHOLD || v >= SPLIT_THRESHOLD {
            let small = v % SPLIT_MODULUS;
            Self { sum: (v - small) as f64, err: small as f64 }
        } else {
            Self { sum: v as f64, err: 0.0 }
        }
    }

    fn step(&mut self, r: f64) {
        let s = self.sum;
        let t = s + r;
        if s.abs() > r.abs() {
            self.err += (s - t) + r;
        } else {
            self.err += (r - t) + s;
        }
        self.sum = t;
    }

    fn step_int(&mut self, v: i64) {
        if v <= -SPLIT_THRESHOLD || v >= SPLIT_THRESHOLD {
            let small = v % SPLIT_MODULUS;
            self.step((v - small) as f64);
            self.step(small as f64);
        } else {
            self.step(v as f64);
        }
    }

    fn value(self) -> f64 {
        if self.err.is_finite() { self.sum + self.err } else { self.sum }
    }
}

/// Inclusive age range a customer must fall into to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBand {
    min: i64,
    max: i64,
}

impl AgeBand {
    pub const YOUTH: Self = Self { min: 18, max: 35 };

    pub fn new(min: i64, max: i64) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::InvalidAgeBand { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    #[inline]
    pub fn contains(&self, age: i64) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for AgeBand {
    fn default() -> Self {
        Self::YOUTH
    }
}
