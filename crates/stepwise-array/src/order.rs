use serde::{Deserialize, Serialize};

/// Requested sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Order::Ascending
        } else {
            Order::Descending
        }
    }

    /// `a` belongs strictly before `b`.
    pub fn precedes(self, a: i64, b: i64) -> bool {
        match self {
            Order::Ascending => a < b,
            Order::Descending => a > b,
        }
    }

    /// `a` may stay before `b` (ties keep their place).
    pub fn keeps(self, a: i64, b: i64) -> bool {
        !self.precedes(b, a)
    }

    pub fn is_sorted(self, values: &[i64]) -> bool {
        values.windows(2).all(|w| self.keeps(w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedes_flips_with_order() {
        assert!(Order::Ascending.precedes(1, 2));
        assert!(!Order::Ascending.precedes(2, 2));
        assert!(Order::Descending.precedes(2, 1));
        assert!(Order::Descending.keeps(2, 2));
    }

    #[test]
    fn test_is_sorted() {
        assert!(Order::Ascending.is_sorted(&[1, 1, 3]));
        assert!(!Order::Ascending.is_sorted(&[3, 1]));
        assert!(Order::Descending.is_sorted(&[3, 3, 1]));
        assert!(Order::from_ascending(false).is_sorted(&[]));
    }
}
