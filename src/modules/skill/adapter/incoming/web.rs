use std::sync::Arc;

use crate::modules::resource::adapter::incoming::web::{BulkEndpoint, ResourceEndpoint};
use crate::modules::resource::application::ports::incoming::use_cases::{
    BulkCreateUseCase, ResourceUseCase,
};
use crate::modules::skill::application::domain::entities::Skill;
use crate::AppState;

impl ResourceEndpoint for Skill {
    fn use_case(state: &AppState) -> &Arc<dyn ResourceUseCase<Self> + Send + Sync> {
        &state.skills
    }
}

impl BulkEndpoint for Skill {
    fn bulk_use_case(state: &AppState) -> &Arc<dyn BulkCreateUseCase<Self> + Send + Sync> {
        &state.bulk_skills
    }
}
