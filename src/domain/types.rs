// ==========================================
// Domain type definitions
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Stock level (derived classification)
// ==========================================
// Bucketed from Available, never persisted; thresholds are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StockLevel {
    Depleted, // Available <= 0
    Low,      // 0 < Available <= 10
    Medium,   // 10 < Available <= 50
    High,     // Available > 50
}

impl StockLevel {
    /// Classify an Available quantity into its stock level bucket.
    pub fn from_available(available: f64) -> Self {
        if available <= 0.0 {
            StockLevel::Depleted
        } else if available <= 10.0 {
            StockLevel::Low
        } else if available <= 50.0 {
            StockLevel::Medium
        } else {
            StockLevel::High
        }
    }

    /// All buckets in ascending severity-of-stock order.
    pub const ALL: [StockLevel; 4] = [
        StockLevel::Depleted,
        StockLevel::Low,
        StockLevel::Medium,
        StockLevel::High,
    ];
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::Depleted => write!(f, "Depleted"),
            StockLevel::Low => write!(f, "Low"),
            StockLevel::Medium => write!(f, "Medium"),
            StockLevel::High => write!(f, "High"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_available_thresholds() {
        assert_eq!(StockLevel::from_available(0.0), StockLevel::Depleted);
        assert_eq!(StockLevel::from_available(-3.0), StockLevel::Depleted);
        assert_eq!(StockLevel::from_available(5.0), StockLevel::Low);
        assert_eq!(StockLevel::from_available(10.0), StockLevel::Low);
        assert_eq!(StockLevel::from_available(11.0), StockLevel::Medium);
        assert_eq!(StockLevel::from_available(30.0), StockLevel::Medium);
        assert_eq!(StockLevel::from_available(50.0), StockLevel::Medium);
        assert_eq!(StockLevel::from_available(100.0), StockLevel::High);
    }

    #[test]
    fn test_display() {
        assert_eq!(StockLevel::Depleted.to_string(), "Depleted");
        assert_eq!(StockLevel::High.to_string(), "High");
    }
}
