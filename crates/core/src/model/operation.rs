use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

/// Inclusive operand bounds for addition questions.
pub const ADDITION_RANGE: RangeInclusive<i64> = 1..=99;

/// Inclusive operand bounds for multiplication questions.
pub const MULTIPLICATION_RANGE: RangeInclusive<i64> = 2..=9;

//
// ─── OPERATION ────────────────────────────────────────────────────────────────
//

/// An arithmetic rule that produces operand pairs and their result.
///
/// Implementations are stateless descriptors. The trait is object safe so a
/// catalog can hold heterogeneous operations behind `Arc<dyn Operation>`.
pub trait Operation: fmt::Debug + Send + Sync {
    /// Symbol displayed between the two operands.
    fn operator(&self) -> &'static str;

    /// Inclusive range both operands are drawn from.
    fn operand_range(&self) -> RangeInclusive<i64>;

    /// Draws two independent operands from [`Operation::operand_range`].
    ///
    /// Uses the thread-local RNG; results are not reproducible.
    fn generate_operands(&self) -> (i64, i64) {
        let range = self.operand_range();
        let mut rng = rand::rng();
        (
            rng.random_range(range.clone()),
            rng.random_range(range),
        )
    }

    /// Deterministic result for the given operands.
    fn compute_result(&self, left: i64, right: i64) -> i64;
}

//
// ─── VARIANTS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Addition;

impl Operation for Addition {
    fn operator(&self) -> &'static str {
        "+"
    }

    fn operand_range(&self) -> RangeInclusive<i64> {
        ADDITION_RANGE
    }

    fn compute_result(&self, left: i64, right: i64) -> i64 {
        left + right
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiplication;

impl Operation for Multiplication {
    fn operator(&self) -> &'static str {
        "X"
    }

    fn operand_range(&self) -> RangeInclusive<i64> {
        MULTIPLICATION_RANGE
    }

    fn compute_result(&self, left: i64, right: i64) -> i64 {
        left * right
    }
}
