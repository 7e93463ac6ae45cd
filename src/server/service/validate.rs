//! Input checks shared by the write paths of the services.

use chrono::NaiveDate;

use crate::server::error::fleet::FleetError;

/// Trims `value` and rejects it when nothing is left
pub fn required_text(field: &str, value: &str) -> Result<String, FleetError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FleetError::validation(format!("{} must not be empty", field)));
    }

    Ok(trimmed.to_string())
}

pub fn non_negative(field: &str, value: i32) -> Result<(), FleetError> {
    if value < 0 {
        return Err(FleetError::validation(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }

    Ok(())
}

/// Devices under repair are part of the fleet, so they cannot outnumber it
pub fn fleet_counts(total_fleet: i32, under_repair: i32) -> Result<(), FleetError> {
    non_negative("total_fleet", total_fleet)?;
    non_negative("under_repair", under_repair)?;

    if under_repair > total_fleet {
        return Err(FleetError::validation(format!(
            "under_repair ({}) must not exceed total_fleet ({})",
            under_repair, total_fleet
        )));
    }

    Ok(())
}

pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<(), FleetError> {
    if start > end {
        return Err(FleetError::validation(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("name", "  iPad ").unwrap(), "iPad");
        assert!(required_text("name", "   ").is_err());
    }

    #[test]
    fn test_fleet_counts() {
        assert!(fleet_counts(10, 0).is_ok());
        assert!(fleet_counts(10, 10).is_ok());
        assert!(fleet_counts(10, 11).is_err());
        assert!(fleet_counts(-1, 0).is_err());
        assert!(fleet_counts(5, -1).is_err());
    }

    #[test]
    fn test_date_range() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let next = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();

        assert!(date_range(day, day).is_ok());
        assert!(date_range(day, next).is_ok());
        assert!(date_range(next, day).is_err());
    }
}
