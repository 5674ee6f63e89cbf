use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// A perishable food item held in the storage bin.
///
/// Items are immutable once built; the placed time is captured at construction
/// and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    name: String,
    weight: u32,
    best_before: NaiveDate,
    placed_time: NaiveDateTime,
}

impl FoodItem {
    /// Create an item stamped with the current local time.
    pub fn new(name: impl Into<String>, weight: u32, best_before: NaiveDate) -> Self {
        Self::placed_at(name, weight, best_before, Local::now().naive_local())
    }

    /// Create an item with an explicit placed time.
    pub fn placed_at(
        name: impl Into<String>,
        weight: u32,
        best_before: NaiveDate,
        placed_time: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            best_before,
            placed_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in grams.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn best_before(&self) -> NaiveDate {
        self.best_before
    }

    pub fn placed_time(&self) -> NaiveDateTime {
        self.placed_time
    }

    /// Case-insensitive name comparison.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }

    /// Basic validation: a non-blank name and a positive weight.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.weight > 0
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}g) - BestBefore: {} - Placed: {}",
            self.name,
            self.weight,
            self.best_before.format("%Y-%m-%d"),
            self.placed_time.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        let best_before = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let placed = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        FoodItem::placed_at("Pizza", 300, best_before, placed)
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let item = sample_item();
        assert!(item.matches_name("pizza"));
        assert!(item.matches_name("PIZZA"));
        assert!(!item.matches_name("Fries"));
        assert!(!item.matches_name("Pizz"));
        assert!(!item.matches_name("Pizzas"));
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_item().is_valid());

        let best_before = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert!(!FoodItem::new("Pizza", 0, best_before).is_valid());
        assert!(!FoodItem::new("   ", 100, best_before).is_valid());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            sample_item().to_string(),
            "Pizza (300g) - BestBefore: 2026-03-14 - Placed: 2026-03-01 12:30:00"
        );
    }

    #[test]
    fn test_new_captures_placed_time() {
        let before = Local::now().naive_local();
        let item = FoodItem::new("Fries", 150, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        let after = Local::now().naive_local();
        assert!(item.placed_time() >= before && item.placed_time() <= after);
    }
}
