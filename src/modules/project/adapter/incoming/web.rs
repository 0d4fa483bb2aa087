use std::sync::Arc;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::resource::adapter::incoming::web::{BulkEndpoint, ResourceEndpoint};
use crate::modules::resource::application::ports::incoming::use_cases::{
    BulkCreateUseCase, ResourceUseCase,
};
use crate::AppState;

impl ResourceEndpoint for Project {
    fn use_case(state: &AppState) -> &Arc<dyn ResourceUseCase<Self> + Send + Sync> {
        &state.projects
    }
}

impl BulkEndpoint for Project {
    fn bulk_use_case(state: &AppState) -> &Arc<dyn BulkCreateUseCase<Self> + Send + Sync> {
        &state.bulk_projects
    }
}
