use std::sync::Arc;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::resource::adapter::incoming::web::ResourceEndpoint;
use crate::modules::resource::application::ports::incoming::use_cases::ResourceUseCase;
use crate::AppState;

impl ResourceEndpoint for Experience {
    fn use_case(state: &AppState) -> &Arc<dyn ResourceUseCase<Self> + Send + Sync> {
        &state.experiences
    }
}
