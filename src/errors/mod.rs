//! 애플리케이션 에러 처리 모듈
//!
//! `AppError` 열거형과 `AppResult` 별칭, 외부 에러 변환용
//! `ErrorContext` trait를 제공합니다. 모든 계층(핸들러, 서비스,
//! 리포지토리, 도메인 엔티티)이 이 모듈의 에러 타입 하나를 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! fn parse_user_id(raw: &str) -> AppResult<Uuid> {
//!     Uuid::parse_str(raw)
//!         .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
//! }
//! ```

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
