//! Location Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::LocationRepositoryPort;
use crate::application::queries::{GetLocation, ListLocations};
use crate::domain::location::{Location, LocationId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 位置点视图
#[derive(Debug, Clone, PartialEq)]
pub struct LocationView {
    pub id: LocationId,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

impl From<Location> for LocationView {
    fn from(location: Location) -> Self {
        Self {
            id: location.id(),
            title: location.title().to_string(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            description: location.description().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetLocation Handler
pub struct GetLocationHandler {
    location_repo: Arc<dyn LocationRepositoryPort>,
}

impl GetLocationHandler {
    pub fn new(location_repo: Arc<dyn LocationRepositoryPort>) -> Self {
        Self { location_repo }
    }

    pub async fn handle(&self, query: GetLocation) -> Result<LocationView, ApplicationError> {
        let location = self
            .location_repo
            .find_by_id(query.location_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Location", query.location_id))?;

        Ok(LocationView::from(location))
    }
}

/// ListLocations Handler
pub struct ListLocationsHandler {
    location_repo: Arc<dyn LocationRepositoryPort>,
}

impl ListLocationsHandler {
    pub fn new(location_repo: Arc<dyn LocationRepositoryPort>) -> Self {
        Self { location_repo }
    }

    pub async fn handle(&self, _query: ListLocations) -> Result<Vec<LocationView>, ApplicationError> {
        let locations = self.location_repo.find_all().await?;
        tracing::debug!(count = locations.len(), "Locations listed");
        Ok(locations.into_iter().map(LocationView::from).collect())
    }
}
