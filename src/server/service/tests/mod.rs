use chrono::NaiveDate;
use fleet_test_utils::prelude::*;

use crate::server::error::{fleet::FleetError, Error};


fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn is_validation(result: &Result<impl std::fmt::Debug, Error>) -> bool {
    matches!(result, Err(Error::FleetError(FleetError::Validation(_))))
}
