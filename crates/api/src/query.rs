//! Shared query parameter types for API handlers.

use roster_core::command::IdList;
use roster_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// Optional id filter for list endpoints (`?ids=1,2,3`).
#[derive(Debug, Default, Deserialize)]
pub struct IdsParams {
    pub ids: Option<String>,
}

impl IdsParams {
    /// Parse the filter, if present.
    ///
    /// Non-numeric entries are a [`AppError::BadRequest`]. Range checks
    /// (empty list, ids below 1) are left to the core's [`IdList`]
    /// validation so they report like any other field error.
    pub fn id_list(&self) -> Result<Option<IdList>, AppError> {
        self.ids.as_deref().map(parse_ids).transpose()
    }
}

fn parse_ids(raw: &str) -> Result<IdList, AppError> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<DbId>()
                .map_err(|_| AppError::BadRequest(format!("Invalid id '{s}' in ids parameter")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(IdList::from(ids))
}
