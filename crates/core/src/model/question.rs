use std::fmt;

use crate::model::operation::Operation;

/// Pending question data: the operands shown to the user and the expected result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    operator: &'static str,
    left: i64,
    right: i64,
    expected: i64,
}

impl Question {
    /// Draw fresh operands from `operation` and compute the expected result.
    #[must_use]
    pub fn issue(operation: &dyn Operation) -> Self {
        let (left, right) = operation.generate_operands();
        Self::new(operation, left, right)
    }

    /// Build a question from explicit operands.
    #[must_use]
    pub fn new(operation: &dyn Operation, left: i64, right: i64) -> Self {
        Self {
            operator: operation.operator(),
            left,
            right,
            expected: operation.compute_result(left, right),
        }
    }

    #[must_use]
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    #[must_use]
    pub fn left(&self) -> i64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> i64 {
        self.right
    }

    #[must_use]
    pub fn expected(&self) -> i64 {
        self.expected
    }

    #[must_use]
    pub fn is_correct(&self, answer: i64) -> bool {
        answer == self.expected
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ?", self.left, self.operator, self.right)
    }
}
