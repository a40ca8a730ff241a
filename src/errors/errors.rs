//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 관리 서비스의 모든 계층(엔티티 검증, 서비스, 저장소, 핸들러)이
//! 공유하는 단일 에러 열거형을 정의합니다. `thiserror`로 메시지를 붙이고
//! `actix_web::ResponseError`로 HTTP 응답 변환까지 한 곳에서 처리하므로,
//! 핸들러는 `Result<HttpResponse, AppError>`만 반환하면 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! fn parse_user_id(raw: &str) -> AppResult<Uuid> {
//!     Uuid::parse_str(raw)
//!         .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
//! }
//! ```
//!
//! 클라이언트는 항상 `{"error": "<메시지>"}` 형태의 JSON 본문을 받습니다.
//! 메시지는 `Display` 구현 전체(접두사 포함)입니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 발생 지점과 무관하게 모든 실패를 이 열거형 하나로 표현합니다.
///
/// `MissingFieldError`와 `ValidationError`는 둘 다 400으로 응답하지만
/// 의도적으로 구분된 종류입니다: 전자는 필드 자체가 누락(null)된 경우,
/// 후자는 존재하는 값이 규칙을 위반한 경우입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필수 필드 누락 에러 (400 Bad Request)
    #[error("Missing field error: {0}")]
    MissingFieldError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// 에러 종류별 HTTP 상태 코드
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MissingFieldError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 상태 코드와 `{"error": ...}` JSON 본문으로 응답을 만듭니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리의 에러에 문맥을 붙여 `AppError`로 바꾸는 확장 trait
///
/// 풀 생성, 연결 확인처럼 저수준 에러가 그대로는 의미가 없는 자리에서
/// `"무엇을 하다가: 원인"` 형태의 메시지를 만드는 데 씁니다.
pub trait ErrorContext<T> {
    /// 고정 문자열 문맥을 붙입니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 성공 경로에서는 비용이 없도록, 문맥 문자열을 클로저로 지연 생성합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
