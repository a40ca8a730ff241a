//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 트레이트가 계약을 정의하고,
//! [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository)와
//! [`PgUserRepository`](pg_repo::PgUserRepository)가 이를 구현합니다.
//! 어느 구현을 쓸지는 기동 시점에 `USE_IN_MEMORY_STORE`로 결정됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::memory_repo::InMemoryUserRepository;
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let created = repo.create(user).await?;
//! ```

pub mod memory_repo;
pub mod pg_repo;
pub mod user_repo;
