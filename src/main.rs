pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::AppConfig;
use crate::modules::achievement::adapter::outgoing::AchievementRepositoryPostgres;
use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::certification::adapter::outgoing::CertificationRepositoryPostgres;
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::education::adapter::outgoing::EducationRepositoryPostgres;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::personal_info::adapter::outgoing::PersonalInfoRepositoryPostgres;
use crate::modules::personal_info::application::domain::entities::PersonalInfo;
use crate::modules::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::resource::adapter::incoming::web::{configure_bulk, configure_resource};
use crate::modules::resource::application::ports::incoming::use_cases::{
    BulkCreateUseCase, ResourceUseCase,
};
use crate::modules::resource::application::service::{BulkCreateService, ResourceService};
use crate::modules::skill::adapter::outgoing::SkillRepositoryPostgres;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::summary::application::ports::incoming::use_cases::GetSummaryUseCase;
use crate::modules::summary::application::service::{GetSummaryService, SummarySources};
use crate::modules::technology::adapter::outgoing::TechnologyRepositoryPostgres;
use crate::modules::technology::application::domain::entities::Technology;
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub personal_info: Arc<dyn ResourceUseCase<PersonalInfo> + Send + Sync>,
    pub skills: Arc<dyn ResourceUseCase<Skill> + Send + Sync>,
    pub bulk_skills: Arc<dyn BulkCreateUseCase<Skill> + Send + Sync>,
    pub technologies: Arc<dyn ResourceUseCase<Technology> + Send + Sync>,
    pub experiences: Arc<dyn ResourceUseCase<Experience> + Send + Sync>,
    pub education: Arc<dyn ResourceUseCase<Education> + Send + Sync>,
    pub projects: Arc<dyn ResourceUseCase<Project> + Send + Sync>,
    pub bulk_projects: Arc<dyn BulkCreateUseCase<Project> + Send + Sync>,
    pub certifications: Arc<dyn ResourceUseCase<Certification> + Send + Sync>,
    pub achievements: Arc<dyn ResourceUseCase<Achievement> + Send + Sync>,
    pub summary: Arc<dyn GetSummaryUseCase + Send + Sync>,
}

impl AppState {
    /// Wires every use case to its Postgres adapter over one shared pool.
    pub fn postgres(db: Arc<DatabaseConnection>) -> Self {
        let personal_info_repo = PersonalInfoRepositoryPostgres::new(Arc::clone(&db));
        let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db));
        let technology_repo = TechnologyRepositoryPostgres::new(Arc::clone(&db));
        let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db));
        let education_repo = EducationRepositoryPostgres::new(Arc::clone(&db));
        let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let certification_repo = CertificationRepositoryPostgres::new(Arc::clone(&db));
        let achievement_repo = AchievementRepositoryPostgres::new(Arc::clone(&db));

        let summary = GetSummaryService::new(SummarySources {
            personal_info: Arc::new(personal_info_repo.clone()),
            skills: Arc::new(skill_repo.clone()),
            experiences: Arc::new(experience_repo.clone()),
            education: Arc::new(education_repo.clone()),
            featured_projects: Arc::new(project_repo.clone()),
            certifications: Arc::new(certification_repo.clone()),
            achievements: Arc::new(achievement_repo.clone()),
        });

        Self {
            personal_info: Arc::new(ResourceService::new(personal_info_repo)),
            skills: Arc::new(ResourceService::new(skill_repo.clone())),
            bulk_skills: Arc::new(BulkCreateService::new(skill_repo)),
            technologies: Arc::new(ResourceService::new(technology_repo)),
            experiences: Arc::new(ResourceService::new(experience_repo)),
            education: Arc::new(ResourceService::new(education_repo)),
            projects: Arc::new(ResourceService::new(project_repo.clone())),
            bulk_projects: Arc::new(BulkCreateService::new(project_repo)),
            certifications: Arc::new(ResourceService::new(certification_repo)),
            achievements: Arc::new(ResourceService::new(achievement_repo)),
            summary: Arc::new(summary),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let server_url = config.server_url();
    info!(
        "Server will listen on {} with API prefix '{}'",
        server_url, config.api_prefix
    );

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    if config.run_migrations {
        Migrator::up(&conn, None).await.map_err(|e| {
            error!("Migrations failed: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = AppState::postgres(Arc::clone(&db_arc));
    let api_prefix = config.api_prefix.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .service(crate::health::health)
            .service(crate::health::readiness)
            .service(web::scope(&api_prefix).configure(init_routes))
    })
    .bind(server_url)?
    .run()
    .await
}

/// API routes, mounted under the configured prefix. Bulk routes are registered
/// before their collection so `bulk` is not matched as an id.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    configure_resource::<PersonalInfo>(cfg, "personal-info");
    configure_bulk::<Skill>(cfg, "skills");
    configure_resource::<Skill>(cfg, "skills");
    configure_resource::<Technology>(cfg, "technologies");
    configure_resource::<Experience>(cfg, "experiences");
    configure_resource::<Education>(cfg, "education");
    configure_bulk::<Project>(cfg, "projects");
    configure_resource::<Project>(cfg, "projects");
    configure_resource::<Certification>(cfg, "certifications");
    configure_resource::<Achievement>(cfg, "achievements");
    // Summary
    cfg.service(crate::modules::summary::adapter::incoming::web::get_summary_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
