use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::summary::application::ports::incoming::use_cases::GetSummaryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Storage details stay in the log; callers only learn that the read failed.
pub const SUMMARY_UNAVAILABLE: &str = "Failed to build portfolio summary.";

#[get("/summary/")]
pub async fn get_summary_handler(data: web::Data<AppState>) -> impl Responder {
    match data.summary.execute().await {
        Ok(summary) => ApiResponse::success(summary),

        Err(GetSummaryError::QueryFailed(msg)) => {
            error!("Failed to build portfolio summary: {}", msg);
            ApiResponse::aggregate_error(SUMMARY_UNAVAILABLE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::summary::application::domain::entities::PortfolioSummary;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::project;
    use crate::tests::support::stubs::StubSummaryUseCase;

    fn empty_summary() -> PortfolioSummary {
        PortfolioSummary {
            personal_info: None,
            skills: vec![],
            experiences: vec![],
            education: vec![],
            featured_projects: vec![],
            certifications: vec![],
            achievements: vec![],
        }
    }

    #[actix_web::test]
    async fn test_summary_empty() {
        let state = TestAppStateBuilder::default()
            .with_summary(StubSummaryUseCase::new(Ok(empty_summary())))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_summary_handler)).await;

        let req = test::TestRequest::get().uri("/summary/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "personal_info": null,
                "skills": [],
                "experiences": [],
                "education": [],
                "featured_projects": [],
                "certifications": [],
                "achievements": []
            })
        );
    }

    #[actix_web::test]
    async fn test_summary_lists_featured_projects() {
        let mut summary = empty_summary();
        summary.featured_projects = vec![project("Portfolio", true)];

        let state = TestAppStateBuilder::default()
            .with_summary(StubSummaryUseCase::new(Ok(summary)))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_summary_handler)).await;

        let req = test::TestRequest::get().uri("/summary/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["featured_projects"][0]["title"], "Portfolio");
        assert_eq!(body["featured_projects"][0]["featured"], true);
    }

    #[actix_web::test]
    async fn test_summary_failure_hides_storage_details() {
        let state = TestAppStateBuilder::default()
            .with_summary(StubSummaryUseCase::new(Err(GetSummaryError::QueryFailed(
                "connection refused".to_string(),
            ))))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_summary_handler)).await;

        let req = test::TestRequest::get().uri("/summary/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": SUMMARY_UNAVAILABLE }));
        assert!(!body.to_string().contains("connection refused"));
    }

    #[actix_web::test]
    async fn test_summary_service_over_empty_sources() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(App::new().app_data(state).service(get_summary_handler)).await;

        let req = test::TestRequest::get().uri("/summary/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["personal_info"].is_null());
        assert_eq!(body["skills"], json!([]));
    }
}
