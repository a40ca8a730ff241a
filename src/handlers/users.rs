//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트 다섯 개의 핸들러 구현입니다. 각 핸들러는
//! DTO 추출 → 서비스 호출 → 상태 코드 번역의 세 단계만 수행합니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created | 400, 409 |
//! | `GET` | `/api/v1/users` | 전체 사용자 목록 | 200 OK | - |
//! | `GET` | `/api/v1/users/{id}` | 사용자 단건 조회 | 200 OK | 400, 404 |
//! | `PUT` | `/api/v1/users/{id}` | 사용자 전체 수정 | 200 OK | 400, 404 |
//! | `DELETE` | `/api/v1/users/{id}` | 사용자 삭제 | 204 No Content | 400, 404 |
//!
//! 서비스는 `web::Data<UserService>` 익스트랙터로 받습니다. 기동
//! 시점에 등록된 공유 인스턴스이므로, 테스트에서는 원하는 저장소로
//! 만든 서비스를 `App::new().app_data(...)`에 직접 넣어 같은 핸들러를
//! 그대로 구동합니다 (이 파일 하단의 테스트 모듈이 그 방식입니다).
//!
//! ## 입력 검증
//!
//! 핸들러는 검증 규칙을 전혀 알지 못합니다. 요청 DTO의 `Option` 필드를
//! 그대로 서비스에 넘기면 도메인 엔티티가 정의된 순서대로 검증하고,
//! 첫 번째 위반이 `AppError`로 돌아와 HTTP 상태 코드로 번역됩니다.
//!
//! ## 에러 처리 패턴
//!
//! `AppError`의 `ResponseError` 구현이 상태 코드를 결정하므로
//! 핸들러는 `?` 연산자로 에러를 흘려보내기만 하면 됩니다:
//!
//! | 에러 | HTTP 상태 |
//! |------|-----------|
//! | `MissingFieldError` | 400 Bad Request |
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `DatabaseError`, `InternalError` | 500 Internal Server Error |
//!
//! 모든 에러 응답은 같은 형태를 가집니다:
//! ```json
//! {
//!   "error": "Not found: 사용자를 찾을 수 없습니다"
//! }
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::errors::errors::AppError;
use crate::services::users::user_service::UserService;

/// 경로 파라미터의 사용자 ID를 UUID로 파싱
///
/// UUID 형식이 아니면 404가 아니라 400으로 답해야 하므로
/// `web::Path<Uuid>` 대신 문자열로 받아 직접 파싱합니다.
fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// 사용자 생성 핸들러
///
/// 새로운 사용자를 생성합니다. 입력 검증은 도메인 엔티티가,
/// 이메일 중복 검사는 서비스가 수행합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "firstName": "Matti",
///   "lastName": "Meikäläinen",
///   "email": "matti@example.com"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "firstName": "Matti",
///   "lastName": "Meikäläinen",
///   "email": "matti@example.com",
///   "createdAt": "2024-01-01T00:00:00Z",
///   "updatedAt": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 필수 필드 누락 (400 Bad Request)
/// ```json
/// {
///   "error": "Missing field error: firstName 필드가 누락되었습니다"
/// }
/// ```
///
/// ### 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "Validation error: firstName은(는) 최소 3자 이상이어야 합니다"
/// }
/// ```
///
/// ### 중복 이메일 (409 Conflict)
/// ```json
/// {
///   "error": "Conflict error: 이미 사용 중인 이메일입니다"
/// }
/// ```
///
/// # 비즈니스 규칙
///
/// - 이름과 성은 3~100자, 이메일은 255자 이하에 `'@'` 포함
/// - 이메일은 대소문자를 무시하고 시스템 전체에서 고유해야 함
/// - 위반이 여러 개여도 정의된 순서의 첫 번째 하나만 보고됨
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{
///     "firstName": "Matti",
///     "lastName": "Meikäläinen",
///     "email": "matti@example.com"
///   }'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 전체 사용자 목록 조회 핸들러
///
/// 저장된 모든 사용자를 생성 시각 오름차순으로 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/users`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// [
///   {
///     "id": "11111111-1111-1111-1111-111111111111",
///     "firstName": "Matti",
///     "lastName": "Meikäläinen",
///     "email": "matti.meikalainen@example.com",
///     "createdAt": "2024-01-01T00:00:00Z",
///     "updatedAt": "2024-01-01T00:00:00Z"
///   }
/// ]
/// ```
///
/// 사용자가 없으면 빈 배열 `[]`을 반환합니다.
///
/// # 사용 예제
///
/// ```bash
/// curl http://localhost:8080/api/v1/users
/// ```
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.get_all_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회 핸들러
///
/// 지정된 ID의 사용자 정보를 조회합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/users/{user_id}`
///
/// # 경로 파라미터
///
/// - `user_id`: 조회할 사용자의 UUID
///
/// # 응답
///
/// ## 성공 (200 OK)
///
/// [`create_user`]의 성공 응답과 같은 형태입니다.
///
/// ## 실패 사례
///
/// ### 사용자 없음 (404 Not Found)
/// ```json
/// {
///   "error": "Not found: 사용자를 찾을 수 없습니다"
/// }
/// ```
///
/// ### 잘못된 ID 형식 (400 Bad Request)
/// ```json
/// {
///   "error": "Validation error: 유효하지 않은 ID 형식입니다"
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl http://localhost:8080/api/v1/users/11111111-1111-1111-1111-111111111111
/// ```
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;

    let user = service
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 수정 핸들러
///
/// 지정된 ID의 사용자를 요청 본문의 값으로 전체 교체합니다.
/// PATCH가 아니므로 세 필드를 모두 보내야 하며, 빠진 필드는
/// 필수값 누락 에러가 됩니다.
///
/// # 엔드포인트
///
/// `PUT /api/v1/users/{user_id}`
///
/// # 요청 본문
///
/// ```json
/// {
///   "firstName": "Maija",
///   "lastName": "Virtanen",
///   "email": "maija@example.com"
/// }
/// ```
///
/// # 응답
///
/// - **200 OK**: 수정된 사용자 정보 (`updatedAt` 갱신됨)
/// - **400 Bad Request**: 잘못된 ID 형식 또는 검증 실패
/// - **404 Not Found**: 해당 ID의 사용자가 없음
///
/// 검증이 실패하면 저장소에는 아무것도 쓰이지 않습니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/users/11111111-1111-1111-1111-111111111111 \
///   -H "Content-Type: application/json" \
///   -d '{"firstName": "Maija", "lastName": "Virtanen", "email": "maija@example.com"}'
/// ```
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;

    let updated = service
        .update_user(id, payload.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 사용자 삭제 핸들러
///
/// 지정된 ID의 사용자를 영구적으로 삭제합니다. 물리적 삭제이며
/// 복구할 수 없습니다.
///
/// # 엔드포인트
///
/// `DELETE /api/v1/users/{user_id}`
///
/// # 응답
///
/// - **204 No Content**: 삭제 성공 (본문 없음)
/// - **400 Bad Request**: 잘못된 ID 형식
/// - **404 Not Found**: 해당 ID의 사용자가 없음
///
/// 이미 삭제된 사용자를 다시 삭제하면 404가 반환됩니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/v1/users/11111111-1111-1111-1111-111111111111
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&user_id)?;

    let deleted = service.delete_user(id).await?;
    if !deleted {
        return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::json;

    use crate::repositories::users::memory_repo::InMemoryUserRepository;
    use crate::routes::configure_all_routes;
    use crate::services::users::user_service::UserService;

    fn app_state(repo: InMemoryUserRepository) -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(repo)))
    }

    #[actix_web::test]
    async fn test_post_creates_user_with_201() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "firstName": "Matti",
                "lastName": "Meikäläinen",
                "email": "matti@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["id"].is_string());
        assert_eq!(body["firstName"], "Matti");
        assert_eq!(body["lastName"], "Meikäläinen");
        assert_eq!(body["email"], "matti@example.com");
        assert!(body["createdAt"].is_string());
        assert!(body["updatedAt"].is_string());
    }

    #[actix_web::test]
    async fn test_post_missing_first_name_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "lastName": "Meikäläinen",
                "email": "matti@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing field error: firstName 필드가 누락되었습니다");
    }

    #[actix_web::test]
    async fn test_post_blank_first_name_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "firstName": "   ",
                "lastName": "Meikäläinen",
                "email": "matti@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation error: firstName은(는) 필수입니다");
    }

    #[actix_web::test]
    async fn test_post_duplicate_email_returns_409() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let payload = json!({
            "firstName": "Matti",
            "lastName": "Meikäläinen",
            "email": "matti@example.com"
        });
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // 같은 이메일로 한 번 더
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "firstName": "Maija",
                "lastName": "Virtanen",
                "email": "MATTI@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Conflict error: 이미 사용 중인 이메일입니다");
    }

    #[actix_web::test]
    async fn test_get_list_returns_seeded_users() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::with_sample_data()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0]["firstName"], "Matti");
        assert_eq!(users[2]["firstName"], "Teppo");
    }

    #[actix_web::test]
    async fn test_get_list_empty_store_returns_empty_array() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_get_by_fixed_seed_id_returns_200() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::with_sample_data()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/users/11111111-1111-1111-1111-111111111111")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "matti.meikalainen@example.com");
    }

    #[actix_web::test]
    async fn test_get_unknown_id_returns_404() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/users/550e8400-e29b-41d4-a716-446655440000")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not found: 사용자를 찾을 수 없습니다");
    }

    #[actix_web::test]
    async fn test_get_malformed_id_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::with_sample_data()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/users/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation error: 유효하지 않은 ID 형식입니다");
    }

    #[actix_web::test]
    async fn test_put_updates_user_and_returns_200() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::with_sample_data()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/users/11111111-1111-1111-1111-111111111111")
            .set_json(json!({
                "firstName": "Maija",
                "lastName": "Virtanen",
                "email": "maija.uusi@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], "11111111-1111-1111-1111-111111111111");
        assert_eq!(body["firstName"], "Maija");
        assert_eq!(body["email"], "maija.uusi@example.com");

        // 수정 결과가 실제로 저장되었는지 재조회로 확인
        let req = test::TestRequest::get()
            .uri("/api/v1/users/11111111-1111-1111-1111-111111111111")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["firstName"], "Maija");
    }

    #[actix_web::test]
    async fn test_put_unknown_id_returns_404() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/users/550e8400-e29b-41d4-a716-446655440000")
            .set_json(json!({
                "firstName": "Maija",
                "lastName": "Virtanen",
                "email": "maija@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_put_invalid_email_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::with_sample_data()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/users/11111111-1111-1111-1111-111111111111")
            .set_json(json!({
                "firstName": "Maija",
                "lastName": "Virtanen",
                "email": "ei-sahkopostia"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation error: email에는 '@' 문자가 포함되어야 합니다");
    }

    #[actix_web::test]
    async fn test_delete_returns_204_then_get_returns_404() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::with_sample_data()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/users/22222222-2222-2222-2222-222222222222")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri("/api/v1/users/22222222-2222-2222-2222-222222222222")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_returns_404() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/users/550e8400-e29b-41d4-a716-446655440000")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_malformed_id_returns_400() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/v1/users/12345")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_endpoint_returns_200() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(InMemoryUserRepository::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_service");
    }
}
