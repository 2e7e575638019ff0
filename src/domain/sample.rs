use tracing::debug;

use crate::domain::{AppError, SampleConfig};
use crate::ports::Processable;

/// Number of times an over-long item's head is repeated by [`Sample::process_data`].
const HEAD_REPEAT: usize = 3;
/// Items longer than this many characters are abbreviated.
const LONG_ITEM_THRESHOLD: usize = 10;
/// Characters kept from an abbreviated item.
const HEAD_LEN: usize = 5;

/// A value type carrying a label prefix and a read-only counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    prefix: String,
    counter: i64,
}

impl Sample {
    /// Create a sample with the given prefix. The counter starts at zero.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), counter: 0 }
    }

    /// Create a sample from loaded configuration.
    pub fn from_config(config: &SampleConfig) -> Self {
        Self::new(config.prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Current counter value.
    ///
    /// Nothing mutates the counter, so this is always zero.
    pub fn counter(&self) -> i64 {
        self.counter
    }

    /// Compute `c * (a + b) + d + e` with explicit loops.
    ///
    /// Returns the sentinel `0` when `a` or `b` is negative. A non-positive
    /// `c` or `d` contributes nothing.
    pub fn calculate(&self, a: i64, b: i64, c: i64, d: i64, e: i64) -> i64 {
        if a < 0 || b < 0 {
            debug!(a, b, "Rejected negative operand");
            return 0;
        }

        let step = a.wrapping_add(b);
        let mut sum: i64 = 0;
        for _ in 0..c {
            sum = sum.wrapping_add(step);
        }

        let mut remaining = d;
        while remaining > 0 {
            sum = sum.wrapping_add(1);
            remaining -= 1;
        }

        sum.wrapping_add(e)
    }

    /// Concatenate items into a summary string.
    ///
    /// Empty items render as `"empty"`, items longer than ten characters
    /// render as their first five characters repeated three times, and
    /// everything else is copied verbatim. The result ends with `" total: "`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] when `items` is empty.
    pub fn process_data<S: AsRef<str>>(&self, items: &[S]) -> Result<String, AppError> {
        let mut result = String::new();
        let mut count = 0usize;

        for item in items {
            let item = item.as_ref();
            if item.is_empty() {
                result.push_str("empty");
            } else if item.chars().count() > LONG_ITEM_THRESHOLD {
                let head: String = item.chars().take(HEAD_LEN).collect();
                for _ in 0..HEAD_REPEAT {
                    result.push_str(&head);
                }
            } else {
                result.push_str(item);
            }
            count += 1;
        }

        if count == 0 {
            debug!("Rejected empty item list");
            return Err(AppError::EmptyInput);
        }

        result.push_str(" total: ");
        Ok(result)
    }

    /// Replace `A` with `X` and `B` with `Y`, then trim and uppercase.
    pub fn chained_call(&self, input: &str) -> String {
        input.replace('A', "X").replace('B', "Y").trim().to_uppercase()
    }

    /// Prefix followed by the English word for `type_id` (1..=3), or `"unknown"`.
    pub fn format_by_type(&self, type_id: i64) -> String {
        let label = match type_id {
            1 => "one",
            2 => "two",
            3 => "three",
            _ => "unknown",
        };
        format!("{}{}", self.prefix, label)
    }
}

impl Processable for Sample {
    fn process(&self) -> String {
        "processed".to_string()
    }
}
