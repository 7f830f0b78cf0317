use std::fmt;

/// Final tally of a question set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub answered: u32,
}

impl Score {
    #[must_use]
    pub fn new(correct: u32, answered: u32) -> Self {
        Self { correct, answered }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_fraction() {
        assert_eq!(Score::new(1, 1).to_string(), "1 / 1");
        assert_eq!(Score::default().to_string(), "0 / 0");
    }
}
