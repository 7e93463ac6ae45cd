use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    model::fleet::{
        DashboardDto, DeviceTypeSummaryDto, FleetUsageDto, ForecastWeekDto, LowStockWarningDto,
        ShortageAlertDto, UsageLevel,
    },
    server::{
        data::{
            device_type::DeviceTypeRepository,
            usage::{FleetUsageRow, UsageRepository},
        },
        error::{fleet::FleetError, Error},
        service::{retry::RetryContext, validate},
        util::time::{from_db_date, monday_of, to_db_date},
    },
};

/// Weeks after the current one scanned for shortages and low stock
pub const ALERT_WEEKS: u64 = 12;
/// Weeks after the current one shown in the dashboard usage table
pub const UPCOMING_WEEKS: u64 = 3;
pub const DEFAULT_FORECAST_WEEKS: u32 = 12;
pub const MIN_FORECAST_WEEKS: u32 = 4;
pub const MAX_FORECAST_WEEKS: u32 = 52;

impl TryFrom<FleetUsageRow> for FleetUsageDto {
    type Error = Error;

    fn try_from(row: FleetUsageRow) -> Result<Self, Self::Error> {
        let available =
            i64::from(row.total_fleet) - i64::from(row.under_repair) - row.total_in_use;

        Ok(Self {
            week_start: from_db_date(&row.week_start)?,
            device_type_id: row.device_type_id,
            device_type_name: row.device_type_name,
            total_fleet: row.total_fleet,
            under_repair: row.under_repair,
            total_in_use: row.total_in_use,
            available,
        })
    }
}

/// Weekly usage rows for weeks starting within `start..=end`
pub(crate) async fn usage_rows(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
    device_type_id: Option<i32>,
) -> Result<Vec<FleetUsageDto>, Error> {
    let (start, end) = (to_db_date(start), to_db_date(end));
    let (start, end) = (start.as_str(), end.as_str());

    let rows = RetryContext::new()
        .execute_with_retry("fleet usage", move || async move {
            UsageRepository::new(db)
                .usage_by_week(start, end, device_type_id)
                .await
                .map_err(Error::from)
        })
        .await?;

    rows.into_iter().map(FleetUsageDto::try_from).collect()
}

/// Rows allocating more devices than the fleet can supply
pub fn shortages(rows: &[FleetUsageDto]) -> Vec<ShortageAlertDto> {
    rows.iter()
        .filter(|row| row.level() == UsageLevel::Shortage)
        .map(|row| ShortageAlertDto {
            week_start: row.week_start,
            device_type_id: row.device_type_id,
            device_type_name: row.device_type_name.clone(),
            needed: row.total_in_use,
            capacity: row.capacity(),
            deficit: -row.available,
        })
        .collect()
}

/// Rows with less than a tenth of the fleet still available
pub fn low_stock(rows: &[FleetUsageDto]) -> Vec<LowStockWarningDto> {
    rows.iter()
        .filter(|row| row.level() == UsageLevel::Low)
        .map(|row| LowStockWarningDto {
            week_start: row.week_start,
            device_type_id: row.device_type_id,
            device_type_name: row.device_type_name.clone(),
            remaining: row.available,
            in_use: row.total_in_use,
        })
        .collect()
}

/// Clamp a requested forecast horizon, defaulting when absent
pub fn forecast_weeks(weeks: Option<u32>) -> u32 {
    weeks
        .unwrap_or(DEFAULT_FORECAST_WEEKS)
        .clamp(MIN_FORECAST_WEEKS, MAX_FORECAST_WEEKS)
}

fn weeks_after(monday: NaiveDate, weeks: u64) -> NaiveDate {
    monday + Days::new(weeks * 7)
}

pub struct FleetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FleetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Usage per week and device type, ordered by week then device type name
    pub async fn usage(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        device_type_id: Option<i32>,
    ) -> Result<Vec<FleetUsageDto>, Error> {
        validate::date_range(start, end)?;

        usage_rows(self.db, start, end, device_type_id).await
    }

    /// Status of every device type for the week containing `today`
    pub async fn current_week(&self, today: NaiveDate) -> Result<Vec<DeviceTypeSummaryDto>, Error> {
        let monday = monday_of(today);

        let db = self.db;
        let device_types = RetryContext::new()
            .execute_with_retry("device type list", move || async move {
                DeviceTypeRepository::new(db)
                    .get_all()
                    .await
                    .map_err(Error::from)
            })
            .await?;

        let in_use: HashMap<i32, i64> = usage_rows(self.db, monday, monday, None)
            .await?
            .into_iter()
            .map(|row| (row.device_type_id, row.total_in_use))
            .collect();

        Ok(device_types
            .into_iter()
            .map(|device_type| {
                let in_use = in_use.get(&device_type.id).copied().unwrap_or(0);

                DeviceTypeSummaryDto {
                    device_type_id: device_type.id,
                    available: i64::from(device_type.total_fleet)
                        - i64::from(device_type.under_repair)
                        - in_use,
                    name: device_type.name,
                    total_fleet: device_type.total_fleet,
                    under_repair: device_type.under_repair,
                    in_use,
                }
            })
            .collect())
    }

    /// Current week summary, alerts for the coming weeks and the short term usage table
    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardDto, Error> {
        let monday = monday_of(today);

        let current_week = self.current_week(today).await?;
        let alert_rows =
            usage_rows(self.db, monday, weeks_after(monday, ALERT_WEEKS), None).await?;
        let upcoming = alert_rows
            .iter()
            .filter(|row| row.week_start <= weeks_after(monday, UPCOMING_WEEKS))
            .cloned()
            .collect();

        Ok(DashboardDto {
            week_start: monday,
            current_week,
            shortages: shortages(&alert_rows),
            warnings: low_stock(&alert_rows),
            upcoming,
        })
    }

    /// Weekly usage of one device type from the current week, classified by stock level
    pub async fn forecast(
        &self,
        device_type_id: i32,
        weeks: Option<u32>,
        today: NaiveDate,
    ) -> Result<Vec<ForecastWeekDto>, Error> {
        if DeviceTypeRepository::new(self.db)
            .get_by_id(device_type_id)
            .await?
            .is_none()
        {
            return Err(FleetError::DeviceTypeNotFound(device_type_id).into());
        }

        let monday = monday_of(today);
        let end = weeks_after(monday, u64::from(forecast_weeks(weeks)));

        Ok(usage_rows(self.db, monday, end, Some(device_type_id))
            .await?
            .into_iter()
            .map(|row| ForecastWeekDto {
                level: row.level(),
                week_start: row.week_start,
                total_in_use: row.total_in_use,
                total_fleet: row.total_fleet,
                under_repair: row.under_repair,
                available: row.available,
            })
            .collect())
    }
}
