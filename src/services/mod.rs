//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인 엔티티와 저장소 계층을 조합해 유스케이스를 구현합니다.
//! 서비스는 생성자에서 저장소 트레이트를 주입받아 `web::Data`로
//! 핸들러에 공유됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 이메일 중복 등 비즈니스 규칙 적용
//! - 엔티티 검증 결과를 HTTP 계층으로 전달할 수 있는 에러로 보고
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::memory_repo::InMemoryUserRepository;
//! use crate::services::users::user_service::UserService;
//!
//! let repo = Arc::new(InMemoryUserRepository::with_sample_data());
//! let user_service = UserService::new(repo);
//! ```

pub mod users;
