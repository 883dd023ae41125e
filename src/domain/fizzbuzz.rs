//! The fizzbuzz transform and its validated parameter tuple.

/// Validated parameters driving one fizzbuzz rendering.
///
/// ## Invariants
/// Established by [`RawParameters::validate`](crate::domain::RawParameters::validate):
/// `limit`, `int1`, and `int2` are at least 1; `str1` and `str2` are
/// non-empty ASCII-alphanumeric strings of at most 64 characters. The tuple
/// doubles as the deduplication key for statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterSet {
    /// Inclusive upper bound of the rendered sequence.
    pub limit: i64,
    /// First divisor; its multiples are replaced by `str1`.
    pub int1: i64,
    /// Second divisor; its multiples are replaced by `str2`.
    pub int2: i64,
    /// Substitution string for multiples of `int1`.
    pub str1: String,
    /// Substitution string for multiples of `int2`.
    pub str2: String,
}

impl ParameterSet {
    /// Render the substituted sequence as a comma-space separated line.
    ///
    /// For every `i` from 1 to `limit` inclusive: multiples of both
    /// divisors take `str1` followed by `str2`, multiples of a single
    /// divisor take that divisor's string, and anything else is the decimal
    /// number itself. Pure and deterministic.
    pub fn render(&self) -> String {
        let both = format!("{}{}", self.str1, self.str2);
        let mut out = String::new();

        for i in 1..=self.limit {
            if i != 1 {
                out.push_str(", ");
            }

            if i % self.int1 == 0 && i % self.int2 == 0 {
                out.push_str(&both);
            } else if i % self.int2 == 0 {
                out.push_str(&self.str2);
            } else if i % self.int1 == 0 {
                out.push_str(&self.str1);
            } else {
                out.push_str(&i.to_string());
            }
        }
        out
    }
}
