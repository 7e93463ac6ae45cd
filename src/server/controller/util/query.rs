use crate::{
    model::project::ProjectStatus,
    server::error::{fleet::FleetError, Error},
};

/// Parse a comma separated status list such as `confirmed,must_win` or `◎,★`
///
/// Blank entries are skipped; an absent or blank list yields an empty vec.
pub fn parse_statuses(value: Option<&str>) -> Result<Vec<ProjectStatus>, Error> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<ProjectStatus>()
                .map_err(|e| Error::from(FleetError::Validation(e)))
        })
        .collect()
}
