use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        deployment::DeploymentDto,
        fleet::FleetUsageDto,
        project::ProjectStatus,
        timeline::{CapacityPointDto, CapacitySeriesDto, TimelineDto, TimelinePeriod, TimelineRowDto},
    },
    server::{
        data::deployment::DeploymentRepository,
        error::Error,
        service::{deployment::to_dtos, fleet::usage_rows, validate},
        util::time::{monday_of, to_db_date},
    },
};

/// Days shown by a custom range when no end date is given
const DEFAULT_CUSTOM_DAYS: u64 = 180;

#[derive(Clone, Debug, Default)]
pub struct TimelineQuery {
    pub period: TimelinePeriod,
    /// Only read for [`TimelinePeriod::Custom`], defaults to today
    pub start: Option<NaiveDate>,
    /// Only read for [`TimelinePeriod::Custom`], defaults to 180 days after start
    pub end: Option<NaiveDate>,
    pub device_type_id: Option<i32>,
    /// Accepted project statuses, empty accepts all
    pub statuses: Vec<ProjectStatus>,
    /// Case-insensitive text matched against project name and venue
    pub search: Option<String>,
}

impl TimelineQuery {
    /// Inclusive date range covered by the query
    pub fn range(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), Error> {
        let (start, end) = match self.period.days() {
            Some(days) => (today, today + Days::new(days.unsigned_abs())),
            None => {
                let start = self.start.unwrap_or(today);
                let end = self
                    .end
                    .unwrap_or_else(|| start + Days::new(DEFAULT_CUSTOM_DAYS));

                (start, end)
            }
        };
        validate::date_range(start, end)?;

        Ok((start, end))
    }

    fn matches(&self, deployment: &DeploymentDto) -> bool {
        if self
            .device_type_id
            .is_some_and(|id| id != deployment.device_type_id)
        {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&deployment.project_status) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(search) if !search.is_empty() => {
                let needle = search.to_lowercase();

                deployment.project_name.to_lowercase().contains(&needle)
                    || deployment.venue.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

/// Merge deployments sharing a project and device type into one row
///
/// Rows span the earliest start to the latest end of their deployments and sum the default
/// device counts. Sorted by start date, then project name.
pub fn aggregate(deployments: Vec<DeploymentDto>) -> Vec<TimelineRowDto> {
    let mut rows: Vec<TimelineRowDto> = Vec::new();
    let mut index: HashMap<(i32, i32), usize> = HashMap::new();

    for deployment in deployments {
        let key = (deployment.project_id, deployment.device_type_id);

        match index.get(&key) {
            Some(&i) => {
                let row = &mut rows[i];
                row.start_date = row.start_date.min(deployment.start_date);
                row.end_date = row.end_date.max(deployment.end_date);
                row.total_count += deployment.default_device_count;
                row.deployments.push(deployment);
            }
            None => {
                index.insert(key, rows.len());
                rows.push(TimelineRowDto {
                    project_id: deployment.project_id,
                    project_name: deployment.project_name.clone(),
                    device_type_id: deployment.device_type_id,
                    device_type_name: deployment.device_type_name.clone(),
                    status: deployment.project_status,
                    client: deployment.client.clone(),
                    start_date: deployment.start_date,
                    end_date: deployment.end_date,
                    total_count: deployment.default_device_count,
                    deployments: vec![deployment],
                });
            }
        }
    }

    rows.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| a.project_name.cmp(&b.project_name))
    });

    rows
}

/// Group weekly usage rows into one in-use series per device type, ordered by name
///
/// Device types without allocations in the range get no series.
pub fn capacity_series(rows: Vec<FleetUsageDto>) -> Vec<CapacitySeriesDto> {
    let mut series: Vec<CapacitySeriesDto> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let point = CapacityPointDto {
            week_start: row.week_start,
            in_use: row.total_in_use,
        };

        match index.get(&row.device_type_id) {
            Some(&i) => series[i].points.push(point),
            None => {
                index.insert(row.device_type_id, series.len());
                series.push(CapacitySeriesDto {
                    device_type_id: row.device_type_id,
                    capacity: row.capacity(),
                    device_type_name: row.device_type_name,
                    points: vec![point],
                });
            }
        }
    }

    series.sort_by(|a, b| a.device_type_name.cmp(&b.device_type_name));
    for s in &mut series {
        s.points.sort_by_key(|p| p.week_start);
    }

    series
}

pub struct TimelineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimelineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn timeline(&self, query: TimelineQuery, today: NaiveDate) -> Result<TimelineDto, Error> {
        let (start, end) = query.range(today)?;

        let details = DeploymentRepository::new(self.db)
            .get_details_overlapping(&to_db_date(start), &to_db_date(end))
            .await?;
        let deployments = to_dtos(details)?
            .into_iter()
            .filter(|deployment| query.matches(deployment))
            .collect();

        let usage = usage_rows(self.db, monday_of(start), end, query.device_type_id).await?;

        Ok(TimelineDto {
            start,
            end,
            rows: aggregate(deployments),
            capacity: capacity_series(usage),
        })
    }
}
