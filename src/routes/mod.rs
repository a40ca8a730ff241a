//! API 라우트 설정 모듈
//!
//! 핸들러 함수를 실제 URL 경로에 붙이는 곳입니다. 사용자 CRUD는
//! `/api/v1/users` 스코프 아래에, 헬스체크는 루트 `/health`에
//! 등록합니다.
//!
//! 핸들러 정의([`crate::handlers`])와 경로 구성을 분리해 두면
//! 버전 프리픽스 변경이나 스코프 재배치가 이 파일 수정만으로
//! 끝납니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::config::StorageConfig;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 헬스체크를 먼저 등록하고, 기능별 라우트 그룹을 이어서 등록합니다.
/// `App::new().configure(...)`와 테스트의 `init_service` 양쪽에서
/// 같은 함수를 사용하므로 테스트가 실제 라우팅 구성을 그대로 탑니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/users` - 사용자 생성
/// - `GET /api/v1/users` - 전체 사용자 목록 조회
/// - `GET /api/v1/users/{id}` - 사용자 단건 조회
/// - `PUT /api/v1/users/{id}` - 사용자 전체 수정
/// - `DELETE /api/v1/users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"Matti","lastName":"Meikäläinen","email":"matti@example.com"}'
///
/// curl http://localhost:8080/api/v1/users
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서/모니터링용. 별도 인증이나 속도 제한 예외 없이
/// 일반 라우트와 같은 체인을 타며, 현재 기동 설정이 가리키는
/// 저장소 백엔드를 `features.storage`에 그대로 노출합니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "framework": "Actix-web",
///     "storage": "In-Memory",
///     "dependency_injection": "Constructor Injection"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    let storage = if StorageConfig::use_in_memory() {
        "In-Memory"
    } else {
        "PostgreSQL"
    };

    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "framework": "Actix-web",
            "storage": storage,
            "dependency_injection": "Constructor Injection"
        }
    }))
}
