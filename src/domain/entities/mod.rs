//! # Domain Entities Module
//!
//! 도메인의 유일한 엔티티인 `User`가 사는 곳입니다. JPA Entity와
//! 비슷한 자리이지만 저장소 매핑이 아니라 비즈니스 규칙의 캡슐화가
//! 중심입니다. 저장소별 매핑(인메모리 맵, PostgreSQL 행 구조체)은
//! 리포지토리 계층이 담당합니다.
//!
//! ## 주요 역할
//!
//! - 필드 규칙(길이, 형식, 누락 여부)을 엔티티가 직접, 고정된 순서로 수행
//! - 생성자를 통과한 값은 항상 유효한 상태임을 타입으로 보장
//!
//! ## 설계 규칙
//!
//! ### 1. 비공개 필드 + 검증 메서드
//!
//! 필드를 공개하면 검증을 우회한 변경이 가능해지므로, 모든 필드는
//! 비공개이고 접근자와 검증하는 변경 메서드만 공개합니다:
//!
//! ```rust,ignore
//! let mut user = User::new(Some("Matti"), Some("Meikäläinen"), Some("matti@example.com"))?;
//!
//! // 변경은 검증 메서드를 통해서만 가능합니다
//! user.update_basic_info(Some("Maija"), Some("Virtanen"))?;
//! user.update_email(Some("maija@example.com"))?;
//! ```
//!
//! ### 2. 원자적 변경 (Atomic Mutation)
//!
//! 여러 필드를 함께 바꾸는 메서드는 전부 검증한 뒤에만 할당합니다.
//! 하나라도 실패하면 아무 필드도 변경되지 않습니다.
//!
//! ### 3. 식별자와 생성 시간의 불변성
//!
//! `id`와 `created_at`은 변경 메서드가 건드리지 않습니다. `id`는
//! 리포지토리가 저장 시점에 부여하며, 그 전에는 `None`입니다.
//!
//! ## JPA와의 대응 관계
//!
//! | 이 시스템 | Spring JPA 대응물 |
//! |-----------|-------------------|
//! | `pub struct User` (비공개 필드) | `@Entity` |
//! | `id: Option<Uuid>` (리포지토리가 부여) | `@Id @GeneratedValue` |
//! | `created_at` (생성 시 1회 기록) | `@CreatedDate` |
//! | `updated_at` (변경 메서드가 갱신) | `@LastModifiedDate` |
//! | 생성자/변경 메서드의 순서 있는 검증 | Bean Validation |
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일
//! └── users/          ← 사용자 엔티티
//!     ├── mod.rs
//!     └── user.rs     ← User 엔티티
//! ```
//!
//! ## 전체 흐름 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::domain::entities::users::user::User;
//! use crate::repositories::users::memory_repo::InMemoryUserRepository;
//! use crate::services::users::user_service::UserService;
//!
//! // 1. 엔티티 생성 (검증 수행)
//! let user = User::new(Some("Matti"), Some("Meikäläinen"), Some("matti@example.com"))?;
//!
//! // 2. 리포지토리를 통한 저장 (id와 타임스탬프 부여)
//! let repo = Arc::new(InMemoryUserRepository::new());
//! let saved = repo.create(user).await?;
//! assert!(saved.id().is_some());
//!
//! // 3. 서비스에서 DTO로 변환하여 반환
//! let service = UserService::new(repo);
//! let response = service.get_user_by_id(saved.id().unwrap()).await?;
//! ```

pub mod users;
