//! # Domain Layer Module
//!
//! 사용자 도메인의 규칙이 모두 모이는 계층입니다. 엔티티가 검증을
//! 소유하고 DTO가 API 표현을 소유하며, 다른 어느 계층도 이 규칙을
//! 복제하지 않습니다. Spring으로 치면 `@Entity`와 Request/Response
//! DTO가 놓이는 자리입니다.
//!
//! ## 구성
//!
//! ```text
//! domain/
//! ├── entities/   User 엔티티 — 검증 규칙의 단일 소유자
//! └── dto/        CreateUserRequest, UpdateUserRequest, UserResponse
//!
//! (services와 repositories가 이 모듈을 사용하는 방향으로만 의존)
//! ```
//!
//! ## Spring과의 대응 관계
//!
//! | 이 시스템 | Spring 대응물 | 비고 |
//! |-----------|---------------|------|
//! | `entities::users::user::User` | `@Entity` + Bean Validation | 검증이 애너테이션이 아니라 생성자/세터 코드 |
//! | `dto::users::request` | `@RequestBody` DTO | 모든 필드 `Option` — null 감지 |
//! | `dto::users::response` | `@ResponseBody` DTO | `From<User>` 변환 |
//!
//! ## [`entities`] - 핵심 도메인 엔티티
//!
//! - 필드 규칙을 엔티티가 직접, 고정된 순서로 검사합니다
//! - 필드가 비공개이므로 검증을 우회하는 변경이 불가능합니다
//! - id는 리포지토리가 저장 시점에 부여합니다
//!
//! 예제:
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! // 생성자가 검증을 수행하므로 User 값은 항상 유효합니다
//! let mut user = User::new(
//!     Some("Matti"),
//!     Some("Meikäläinen"),
//!     Some("matti@example.com"),
//! )?;
//!
//! // 변경도 검증 메서드를 통해서만 가능합니다
//! user.update_basic_info(Some("Maija"), Some("Virtanen"))?;
//! ```
//!
//! ## [`dto`] - 데이터 전송 객체
//!
//! HTTP 경계의 camelCase JSON 계약을 정의합니다. 요청 DTO는 모든
//! 필드가 `Option<String>`이라 누락과 빈 값이 구분되고, 필드 규칙
//! 검증은 전부 엔티티에 위임합니다.
//!
//! ## 불변식의 타입 표현
//!
//! - 생성자/변경 메서드가 `Result`를 반환하므로 검증 실패는 값이
//!   되어 호출자에게 전달됩니다
//! - 누락(null)은 `Option<&str>` 매개변수의 `None`으로, 빈 문자열과
//!   다른 시그널로 들어옵니다
//! - 저장 전 엔티티의 id는 `Option<Uuid>::None` — "아직 식별자가
//!   없음"이 타입에 드러납니다
//!
//! ## 실제 사용 예제
//!
//! ### 사용자 등록 플로우
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//! use crate::domain::dto::users::response::user_response::UserResponse;
//!
//! // 1. DTO로 입력 받기 (모든 필드 Option)
//! let request: CreateUserRequest = payload.into_inner();
//!
//! // 2. 도메인 엔티티 생성 (검증 수행, 첫 위반 규칙에서 중단)
//! let user = User::new(
//!     request.first_name.as_deref(),
//!     request.last_name.as_deref(),
//!     request.email.as_deref(),
//! )?;
//!
//! // 3. 리포지토리를 통한 영속화 (id/타임스탬프 부여)
//! let saved_user = user_repository.create(user).await?;
//!
//! // 4. 응답 DTO로 변환
//! let response = UserResponse::from(saved_user);
//! ```

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
