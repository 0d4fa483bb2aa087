use std::sync::Arc;

use crate::modules::resource::adapter::incoming::web::ResourceEndpoint;
use crate::modules::resource::application::ports::incoming::use_cases::ResourceUseCase;
use crate::modules::technology::application::domain::entities::Technology;
use crate::AppState;

impl ResourceEndpoint for Technology {
    fn use_case(state: &AppState) -> &Arc<dyn ResourceUseCase<Self> + Send + Sync> {
        &state.technologies
    }
}
