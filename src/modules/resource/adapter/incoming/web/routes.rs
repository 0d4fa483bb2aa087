use actix_web::{web, HttpResponse};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::{
    BulkCreateUseCase, ResourceError, ResourceUseCase, ValidationErrors,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::validator::NON_FIELD_ERRORS;
use crate::shared::validation::{json_type_name, FieldErrors, WriteMode};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Endpoint wiring
// ──────────────────────────────────────────────────────────
//

/// A resource that is served as a collection; picks its use case out of the app state.
pub trait ResourceEndpoint: Resource {
    fn use_case(state: &AppState) -> &Arc<dyn ResourceUseCase<Self> + Send + Sync>;
}

/// A collection that also accepts all-or-nothing batch creation.
pub trait BulkEndpoint: ResourceEndpoint {
    fn bulk_use_case(state: &AppState) -> &Arc<dyn BulkCreateUseCase<Self> + Send + Sync>;
}

/// Mounts `/{collection}/` (list, create) and `/{collection}/{id}/`
/// (retrieve, replace, patch, delete).
pub fn configure_resource<R: ResourceEndpoint>(cfg: &mut web::ServiceConfig, collection: &str) {
    cfg.service(
        web::resource(format!("/{collection}/"))
            .route(web::get().to(list_handler::<R>))
            .route(web::post().to(create_handler::<R>)),
    )
    .service(
        web::resource(format!("/{collection}/{{id}}/"))
            .route(web::get().to(get_handler::<R>))
            .route(web::put().to(replace_handler::<R>))
            .route(web::patch().to(patch_handler::<R>))
            .route(web::delete().to(delete_handler::<R>)),
    );
}

/// Mounts `/{collection}/bulk/`. Must run before [`configure_resource`] for the
/// same collection, otherwise `bulk` is captured as an `{id}`.
pub fn configure_bulk<R: BulkEndpoint>(cfg: &mut web::ServiceConfig, collection: &str) {
    cfg.service(
        web::resource(format!("/{collection}/bulk/"))
            .route(web::post().to(bulk_create_handler::<R>)),
    );
}

fn error_response<R: Resource>(err: ResourceError) -> HttpResponse {
    match err {
        ResourceError::Validation(errors) => ApiResponse::validation_error(errors),
        ResourceError::NotFound => ApiResponse::not_found(),
        ResourceError::RepositoryError(e) => {
            error!("Repository error on {}: {}", R::NAME, e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

pub async fn list_handler<R: ResourceEndpoint>(data: web::Data<AppState>) -> HttpResponse {
    match R::use_case(&data).list().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => error_response::<R>(e),
    }
}

pub async fn create_handler<R: ResourceEndpoint>(
    req: web::Json<R::Payload>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_case(&data).create(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response::<R>(e),
    }
}

pub async fn get_handler<R: ResourceEndpoint>(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_case(&data).get(path.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => error_response::<R>(e),
    }
}

pub async fn replace_handler<R: ResourceEndpoint>(
    path: web::Path<Uuid>,
    req: web::Json<R::Payload>,
    data: web::Data<AppState>,
) -> HttpResponse {
    update::<R>(path.into_inner(), req.into_inner(), WriteMode::Replace, &data).await
}

pub async fn patch_handler<R: ResourceEndpoint>(
    path: web::Path<Uuid>,
    req: web::Json<R::Payload>,
    data: web::Data<AppState>,
) -> HttpResponse {
    update::<R>(path.into_inner(), req.into_inner(), WriteMode::Partial, &data).await
}

async fn update<R: ResourceEndpoint>(
    id: Uuid,
    payload: R::Payload,
    mode: WriteMode,
    state: &AppState,
) -> HttpResponse {
    match R::use_case(state).update(id, payload, mode).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => error_response::<R>(e),
    }
}

pub async fn delete_handler<R: ResourceEndpoint>(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_case(&data).delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => error_response::<R>(e),
    }
}

pub async fn bulk_create_handler<R: BulkEndpoint>(
    req: web::Json<Value>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let payloads = match decode_batch::<R>(req.into_inner()) {
        Ok(payloads) => payloads,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match R::bulk_use_case(&data).execute(payloads).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => error_response::<R>(e),
    }
}

/// Decodes batch items one by one. When any item is not an object, every item
/// gets its own error map so positions line up with the request.
fn decode_batch<R: Resource>(body: Value) -> Result<Vec<R::Payload>, ValidationErrors> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(ValidationErrors::Fields(FieldErrors::single(
                NON_FIELD_ERRORS,
                format!(
                    "Expected a list of items but got type \"{}\".",
                    json_type_name(&other)
                ),
            )))
        }
    };

    let mut decoded = Vec::with_capacity(items.len());
    for item in items {
        let type_name = json_type_name(&item);
        decoded.push(serde_json::from_value::<R::Payload>(item).map_err(|_| {
            FieldErrors::single(
                NON_FIELD_ERRORS,
                format!("Invalid data. Expected a dictionary, but got {type_name}."),
            )
        }));
    }

    if decoded.iter().all(Result::is_ok) {
        return Ok(decoded.into_iter().flatten().collect());
    }

    let errors = decoded
        .into_iter()
        .map(|item| match item {
            Ok(payload) => R::validate(payload, WriteMode::Create).err().unwrap_or_default(),
            Err(errors) => errors,
        })
        .collect();

    Err(ValidationErrors::Batch(errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::resource::application::ports::outgoing::RepositoryError;
    use crate::modules::skill::application::domain::entities::{Skill, SkillCategory};
    use crate::shared::api::{custom_json_config, custom_path_config};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::skill;
    use crate::tests::support::in_memory::InMemoryRepository;

    fn skill_routes(cfg: &mut web::ServiceConfig) {
        configure_bulk::<Skill>(cfg, "skills");
        configure_resource::<Skill>(cfg, "skills");
    }

    macro_rules! skill_app {
        ($repo:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_skills($repo).build())
                    .app_data(custom_json_config())
                    .app_data(custom_path_config())
                    .configure(skill_routes),
            )
            .await
        };
    }

    // =====================================================
    // Create / read
    // =====================================================

    #[actix_web::test]
    async fn test_create_returns_stored_skill() {
        let repo = InMemoryRepository::<Skill>::default();
        let app = skill_app!(repo.clone());

        let req = test::TestRequest::post()
            .uri("/skills/")
            .set_json(json!({"name": "Rust", "category": "languages", "proficiency": 90}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "Rust");
        assert_eq!(body["category"], "languages");
        assert_eq!(body["proficiency"], 90);
        assert_eq!(body["icon"], "");
        assert_eq!(repo.records().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_applies_default_proficiency() {
        let app = skill_app!(InMemoryRepository::<Skill>::default());

        let req = test::TestRequest::post()
            .uri("/skills/")
            .set_json(json!({"name": "Docker", "category": "devops"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["proficiency"], 80);
    }

    #[actix_web::test]
    async fn test_create_rejects_unknown_category() {
        let repo = InMemoryRepository::<Skill>::default();
        let app = skill_app!(repo.clone());

        let req = test::TestRequest::post()
            .uri("/skills/")
            .set_json(json!({"name": "Rust", "category": "misc"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"category": ["\"misc\" is not a valid choice."]}));
        assert!(repo.records().is_empty());
    }

    #[actix_web::test]
    async fn test_wrongly_typed_field_is_reported_on_that_field() {
        let repo = InMemoryRepository::<Skill>::default();
        let app = skill_app!(repo.clone());

        let req = test::TestRequest::post()
            .uri("/skills/")
            .set_json(json!({"name": "X", "category": "languages", "proficiency": "high"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"proficiency": ["A valid integer is required."]}));
        assert!(repo.records().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = skill_app!(InMemoryRepository::<Skill>::default());

        let req = test::TestRequest::post()
            .uri("/skills/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    async fn test_list_and_get() {
        let stored = skill("Go", SkillCategory::Languages);
        let app = skill_app!(InMemoryRepository::with_records(vec![stored.clone()]));

        let req = test::TestRequest::get().uri("/skills/").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri(&format!("/skills/{}/", stored.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["id"], stored.id.to_string());
        assert_eq!(body["name"], "Go");
    }

    #[actix_web::test]
    async fn test_get_unknown_id_is_not_found() {
        let app = skill_app!(InMemoryRepository::<Skill>::default());

        let req = test::TestRequest::get()
            .uri(&format!("/skills/{}/", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"detail": "Not found."}));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_not_found() {
        let app = skill_app!(InMemoryRepository::<Skill>::default());

        let req = test::TestRequest::get().uri("/skills/42/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    // =====================================================
    // Update / delete
    // =====================================================

    #[actix_web::test]
    async fn test_patch_changes_only_supplied_fields() {
        let stored = skill("Go", SkillCategory::Languages);
        let app = skill_app!(InMemoryRepository::with_records(vec![stored.clone()]));

        let req = test::TestRequest::patch()
            .uri(&format!("/skills/{}/", stored.id))
            .set_json(json!({"proficiency": 55}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["name"], "Go");
        assert_eq!(body["category"], "languages");
        assert_eq!(body["proficiency"], 55);
    }

    #[actix_web::test]
    async fn test_put_requires_required_fields() {
        let stored = skill("Go", SkillCategory::Languages);
        let app = skill_app!(InMemoryRepository::with_records(vec![stored.clone()]));

        let req = test::TestRequest::put()
            .uri(&format!("/skills/{}/", stored.id))
            .set_json(json!({"proficiency": 55}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("name").is_some());
        assert!(body.get("category").is_some());
    }

    #[actix_web::test]
    async fn test_delete_then_delete_again() {
        let stored = skill("Go", SkillCategory::Languages);
        let repo = InMemoryRepository::with_records(vec![stored.clone()]);
        let app = skill_app!(repo.clone());
        let uri = format!("/skills/{}/", stored.id);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(repo.records().is_empty());

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_repository_failure_is_internal_error() {
        let app = skill_app!(InMemoryRepository::<Skill>::failing(
            RepositoryError::DatabaseError("connection refused".to_string())
        ));

        let req = test::TestRequest::get().uri("/skills/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"detail": "An unexpected error occurred"}));
    }

    // =====================================================
    // Bulk
    // =====================================================

    #[actix_web::test]
    async fn test_bulk_create_is_not_captured_as_id() {
        let repo = InMemoryRepository::<Skill>::default();
        let app = skill_app!(repo.clone());

        let req = test::TestRequest::post()
            .uri("/skills/bulk/")
            .set_json(json!([
                {"name": "Rust", "category": "languages"},
                {"name": "Postgres", "category": "databases"}
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["name"], "Rust");
        assert_eq!(body[1]["name"], "Postgres");
        assert_eq!(repo.records().len(), 2);
    }

    #[actix_web::test]
    async fn test_bulk_with_one_invalid_item_persists_nothing() {
        let repo = InMemoryRepository::<Skill>::default();
        let app = skill_app!(repo.clone());

        let req = test::TestRequest::post()
            .uri("/skills/bulk/")
            .set_json(json!([
                {"name": "Rust", "category": "languages"},
                {"name": "Go", "category": "languages", "proficiency": 150}
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0], json!({}));
        assert!(body[1].get("proficiency").is_some());
        assert!(repo.records().is_empty());
    }

    #[actix_web::test]
    async fn test_bulk_wrongly_typed_field_is_reported_at_its_index() {
        let repo = InMemoryRepository::<Skill>::default();
        let app = skill_app!(repo.clone());

        let req = test::TestRequest::post()
            .uri("/skills/bulk/")
            .set_json(json!([
                {"name": "Go", "category": "languages"},
                {"name": "X", "category": "languages", "proficiency": "high"}
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([{}, {"proficiency": ["A valid integer is required."]}])
        );
        assert!(repo.records().is_empty());
    }

    #[actix_web::test]
    async fn test_bulk_non_object_item_is_reported_at_its_index() {
        let repo = InMemoryRepository::<Skill>::default();
        let app = skill_app!(repo.clone());

        let req = test::TestRequest::post()
            .uri("/skills/bulk/")
            .set_json(json!([
                "Rust",
                {"name": "Go", "category": "languages"},
                {"name": "", "category": "languages"}
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body[0],
            json!({"non_field_errors": ["Invalid data. Expected a dictionary, but got str."]})
        );
        assert_eq!(body[1], json!({}));
        assert!(body[2].get("name").is_some());
        assert!(repo.records().is_empty());
    }

    #[actix_web::test]
    async fn test_bulk_body_must_be_a_list() {
        let app = skill_app!(InMemoryRepository::<Skill>::default());

        let req = test::TestRequest::post()
            .uri("/skills/bulk/")
            .set_json(json!({"name": "Go", "category": "languages"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"non_field_errors": ["Expected a list of items but got type \"dict\"."]})
        );
    }

    #[actix_web::test]
    async fn test_bulk_empty_batch() {
        let app = skill_app!(InMemoryRepository::<Skill>::default());

        let req = test::TestRequest::post()
            .uri("/skills/bulk/")
            .set_json(json!([]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }
}
