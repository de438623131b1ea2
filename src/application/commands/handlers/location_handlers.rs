//! Location Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateLocation, DeleteLocation};
use crate::application::error::ApplicationError;
use crate::application::ports::LocationRepositoryPort;
use crate::application::queries::handlers::LocationView;

// ============================================================================
// CreateLocation
// ============================================================================

/// CreateLocation Handler
pub struct CreateLocationHandler {
    location_repo: Arc<dyn LocationRepositoryPort>,
}

impl CreateLocationHandler {
    pub fn new(location_repo: Arc<dyn LocationRepositoryPort>) -> Self {
        Self { location_repo }
    }

    pub async fn handle(&self, command: CreateLocation) -> Result<LocationView, ApplicationError> {
        let location = self.location_repo.create(command.draft).await?;

        tracing::info!(
            location_id = %location.id(),
            title = %location.title(),
            "Location created"
        );

        Ok(LocationView::from(location))
    }
}

// ============================================================================
// DeleteLocation
// ============================================================================

/// DeleteLocation Handler
pub struct DeleteLocationHandler {
    location_repo: Arc<dyn LocationRepositoryPort>,
}

impl DeleteLocationHandler {
    pub fn new(location_repo: Arc<dyn LocationRepositoryPort>) -> Self {
        Self { location_repo }
    }

    /// 不区分"从未存在"和"已被删除"，两者都是 NotFound
    pub async fn handle(&self, command: DeleteLocation) -> Result<(), ApplicationError> {
        let location_id = command.location_id;

        if !self.location_repo.delete(location_id).await? {
            return Err(ApplicationError::not_found("Location", location_id));
        }

        tracing::info!(location_id = %location_id, "Location deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::{LocationDraft, LocationId};
    use crate::infrastructure::memory::InMemoryLocationRepository;

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let repo = Arc::new(InMemoryLocationRepository::with_samples());
        let handler = CreateLocationHandler::new(repo);

        let view = handler
            .handle(CreateLocation {
                draft: LocationDraft::new("Test", 1.0, 2.0, "d"),
            })
            .await
            .unwrap();

        assert_eq!(view.id, LocationId::new(4));
        assert_eq!(view.title, "Test");
        assert_eq!(view.description, "d");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = Arc::new(InMemoryLocationRepository::with_samples());
        let handler = DeleteLocationHandler::new(repo);
        let command = DeleteLocation {
            location_id: LocationId::new(1),
        };

        assert!(handler.handle(command.clone()).await.is_ok());
        assert!(matches!(
            handler.handle(command).await,
            Err(ApplicationError::NotFound { .. })
        ));
    }
}
