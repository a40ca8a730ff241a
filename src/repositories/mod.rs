//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층이 의존하는 저장소 트레이트와 그 구현체들을 제공합니다.
//! 트레이트 객체(`Arc<dyn UserRepository>`)로 주입되므로 저장소 구현은
//! 환경 변수 하나로 교체할 수 있습니다.
//!
//! # Features
//!
//! - 트레이트 기반 저장소 추상화를 통한 구현 교체
//! - 인메모리(`HashMap`)와 PostgreSQL(Diesel) 두 가지 구현 제공
//! - 조회 실패와 저장소 장애를 구분하는 일관된 에러 계약
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::memory_repo::InMemoryUserRepository;
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::with_sample_data());
//! let user = repo.find_by_email("matti.meikalainen@example.com").await?;
//! ```

pub mod users;
