//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateLocationHandler, DeleteLocationHandler,
    // Query handlers
    GetLocationHandler, ListLocationsHandler,
    // Ports
    LocationRepositoryPort,
};

/// 应用状态
///
/// 仓储由启动代码显式构造后传入，生命周期与进程一致
pub struct AppState {
    // ========== Ports ==========
    pub location_repo: Arc<dyn LocationRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_location_handler: CreateLocationHandler,
    pub delete_location_handler: DeleteLocationHandler,

    // ========== Query Handlers ==========
    pub get_location_handler: GetLocationHandler,
    pub list_locations_handler: ListLocationsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(location_repo: Arc<dyn LocationRepositoryPort>) -> Self {
        Self {
            // Ports
            location_repo: location_repo.clone(),

            // Command handlers
            create_location_handler: CreateLocationHandler::new(location_repo.clone()),
            delete_location_handler: DeleteLocationHandler::new(location_repo.clone()),

            // Query handlers
            get_location_handler: GetLocationHandler::new(location_repo.clone()),
            list_locations_handler: ListLocationsHandler::new(location_repo),
        }
    }
}
