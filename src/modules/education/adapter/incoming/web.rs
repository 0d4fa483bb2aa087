use std::sync::Arc;

use crate::modules::education::application::domain::entities::Education;
use crate::modules::resource::adapter::incoming::web::ResourceEndpoint;
use crate::modules::resource::application::ports::incoming::use_cases::ResourceUseCase;
use crate::AppState;

impl ResourceEndpoint for Education {
    fn use_case(state: &AppState) -> &Arc<dyn ResourceUseCase<Self> + Send + Sync> {
        &state.education
    }
}
