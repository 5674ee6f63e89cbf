use chrono::{Days, NaiveDate};
use strsim::jaro_winkler;

use crate::error::{Result, StorageAppError};

/// Minimum similarity for a rejected name to get a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Match a name against the allowed vocabulary (case-insensitive).
///
/// Returns the vocabulary's spelling of the name.
pub fn canonical_food_name(input: &str, allowed: &[String]) -> Result<String> {
    let input = input.trim();
    allowed
        .iter()
        .find(|food| food.to_lowercase() == input.to_lowercase())
        .cloned()
        .ok_or_else(|| StorageAppError::InvalidFoodName(input.to_string()))
}

/// Closest allowed name for a rejected input, if any is similar enough.
pub fn suggest_food_name<'a>(input: &str, allowed: &'a [String]) -> Option<&'a str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    allowed
        .iter()
        .map(|food| (food, jaro_winkler(&food.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(food, _)| food.as_str())
}

/// Parse a weight in grams; must be a positive integer.
pub fn parse_weight(input: &str) -> Result<u32> {
    let weight: u32 = input
        .trim()
        .parse()
        .map_err(|_| {
            StorageAppError::InvalidInput(format!("'{}' is not a whole number", input.trim()))
        })?;

    if weight == 0 {
        return Err(StorageAppError::InvalidInput(
            "Weight must be a positive number of grams".to_string(),
        ));
    }
    Ok(weight)
}

/// Parse a numbered menu choice within `min..=max`.
pub fn parse_menu_choice(input: &str, min: usize, max: usize) -> Result<usize> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| {
            StorageAppError::InvalidInput(format!("'{}' is not a number", input.trim()))
        })?;

    if choice < min || choice > max {
        return Err(StorageAppError::InvalidInput(format!(
            "Please enter a number between {} and {}",
            min, max
        )));
    }
    Ok(choice)
}

/// Latest best-before date accepted on `today`.
pub fn latest_best_before(today: NaiveDate, max_shelf_days: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(max_shelf_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Parse a best-before date.
///
/// Blank input means the longest allowed shelf life. Dates before today or past
/// the shelf-life window are rejected.
pub fn parse_best_before(input: &str, today: NaiveDate, max_shelf_days: u32) -> Result<NaiveDate> {
    let input = input.trim();
    let latest = latest_best_before(today, max_shelf_days);
    if input.is_empty() {
        return Ok(latest);
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| StorageAppError::InvalidDate(input.to_string()))?;

    if date < today || date > latest {
        return Err(StorageAppError::DateOutOfRange {
            date,
            earliest: today,
            latest,
        });
    }
    Ok(date)
}
