//! 사용자 관리 서비스 백엔드
//!
//! Rust 기반의 사용자 관리 REST 서비스입니다.
//! 계층형 아키텍처와 생성자 주입 기반 의존성 주입을 사용하며,
//! 인메모리 저장소와 PostgreSQL 중 선택 가능한 저장소 추상화를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 사용자 생성, 조회, 수정, 삭제 (CRUD)
//! - **입력 검증**: 이름/이메일 필수값, 길이, 형식 검증
//! - **이메일 중복 방지**: 대소문자 구분 없는 유일성 검사
//! - **생성자 DI**: 트레이트 객체 기반 저장소 주입
//! - **PostgreSQL**: Diesel 기반 영구 저장 (운영 환경)
//! - **인메모리 저장소**: 외부 의존성 없는 실행 (개발/테스트 환경)
//!
//! # Architecture
//!
//! ```text
//! routes ──▶ handlers ──▶ services ──▶ UserRepository (trait)
//!                                        ├─ InMemoryUserRepository
//!                                        └─ PgUserRepository (diesel-async)
//! ```
//!
//! 위쪽 계층은 아래쪽 계층의 트레이트만 알고, 구체 저장소는 기동
//! 시점(main.rs)에 한 번 선택되어 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::repositories::users::memory_repo::InMemoryUserRepository;
//! use user_service_backend::services::users::user_service::UserService;
//!
//! // 저장소를 주입받는 서비스 생성
//! let repo = Arc::new(InMemoryUserRepository::with_sample_data());
//! let user_service = UserService::new(repo);
//!
//! // 사용자 생성
//! let user = user_service.create_user(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
