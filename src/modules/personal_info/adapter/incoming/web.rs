use std::sync::Arc;

use crate::modules::personal_info::application::domain::entities::PersonalInfo;
use crate::modules::resource::adapter::incoming::web::ResourceEndpoint;
use crate::modules::resource::application::ports::incoming::use_cases::ResourceUseCase;
use crate::AppState;

impl ResourceEndpoint for PersonalInfo {
    fn use_case(state: &AppState) -> &Arc<dyn ResourceUseCase<Self> + Send + Sync> {
        &state.personal_info
    }
}
