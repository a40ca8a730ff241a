//! # 사용자 생성 요청 DTO
//!
//! 이 모듈은 새로운 사용자 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! Spring Boot의 `@RequestBody` 패턴에 해당하며, 필드 규칙 검증은
//! 의도적으로 수행하지 않습니다. 규칙 검증은 도메인 엔티티(`User::new`)가
//! 고정된 순서로 수행하므로, DTO는 입력을 있는 그대로 전달하는 역할만
//! 맡습니다.
//!
//! ## null 구분
//!
//! 모든 필드가 `Option<String>`인 이유는 "필드 누락/null"과
//! "빈 문자열"을 구분하기 위해서입니다. 전자는 `MissingFieldError`,
//! 후자는 `ValidationError`로 서로 다른 에러 종류가 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::domain::dto::users::request::create_user::CreateUserRequest;
//!
//! #[actix_web::post("")]
//! async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let response = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```

use serde::{Deserialize, Serialize};

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// 클라이언트로부터 받은 사용자 생성 데이터를 표현합니다.
/// JSON 키는 camelCase이며, 누락된 필드는 `None`으로 역직렬화됩니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "firstName": "Matti",
///   "lastName": "Meikäläinen",
///   "email": "matti@example.com"
/// }
/// ```
///
/// # 에러 응답 예제
///
/// 검증 실패 시 (엔티티가 판정):
/// ```json
/// {
///   "error": "Validation error: firstName은(는) 최소 3자 이상이어야 합니다"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 이름 (3~100자)
    ///
    /// - null/누락이면 `MissingFieldError`
    /// - 공백만 있으면 `ValidationError`
    pub first_name: Option<String>,

    /// 성 (3~100자)
    ///
    /// - 이름과 동일한 규칙이 적용되며, 검증 순서는 이름 다음입니다
    pub last_name: Option<String>,

    /// 이메일 주소 (최대 255자, '@' 포함)
    ///
    /// - 형식 검사는 '@' 포함 여부만 확인합니다
    /// - 중복 여부는 서비스 계층에서 별도 검증
    pub email: Option<String>,
}
