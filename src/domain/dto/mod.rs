//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계를 넘나드는 JSON의 모양을 정의합니다. Spring이라면
//! `@RequestBody`/`@ResponseBody`로 주석 처리된 클래스들이 놓일
//! 자리이고, 여기서는 serde 파생 구조체가 그 계약을 집니다.
//!
//! ## Spring과의 대응 관계
//!
//! | 이 시스템 | Spring 대응물 |
//! |-----------|---------------|
//! | `request` 모듈의 구조체 | `@RequestBody` DTO |
//! | `response` 모듈의 구조체 | `@ResponseBody` DTO |
//! | `#[serde(rename_all = "camelCase")]` | `@JsonProperty` / Jackson 전략 |
//! | `Result<HttpResponse, AppError>` | `ResponseEntity<T>` |
//!
//! ## 설계 원칙
//!
//! 1. **camelCase 계약** — 모든 JSON 키는 `rename_all = "camelCase"`로
//!    통일합니다. Rust 쪽 필드는 snake_case 그대로 둡니다.
//! 2. **검증은 도메인의 몫** — DTO는 구문 단계(JSON ↔ 타입)까지만
//!    책임집니다. 필드 규칙은 엔티티가 고정된 순서로 검증하므로 DTO에
//!    검증 어노테이션을 중복으로 두지 않습니다. 요청 필드가 전부
//!    `Option<String>`인 것도 같은 이유입니다 — 누락을 엔티티까지
//!    전달해야 `MissingFieldError`와 `ValidationError`를 구분할 수
//!    있습니다.
//! 3. **내부 표현과 분리** — 엔티티 구조가 바뀌어도 `From<User>`
//!    구현만 따라가면 API 계약은 유지됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/              # 사용자 관련 DTO
//!     ├── request/        # 요청 DTO (클라이언트 → 서버)
//!     │   ├── create_user.rs
//!     │   └── update_user.rs
//!     └── response/       # 응답 DTO (서버 → 클라이언트)
//!         └── user_response.rs
//! ```
//!
//! ## 변환 패턴
//!
//! ```rust,ignore
//! use crate::domain::dto::users::response::user_response::UserResponse;
//! use crate::domain::entities::users::user::User;
//!
//! // Request → Entity: 엔티티 생성자가 Option을 받아 검증까지 수행
//! let user = User::new(
//!     req.first_name.as_deref(),
//!     req.last_name.as_deref(),
//!     req.email.as_deref(),
//! )?;
//!
//! // Entity → Response: From 구현으로 변환
//! let response = UserResponse::from(stored_user);
//! ```
//!
//! 날짜/시간 필드는 chrono의 serde 지원을 통해 RFC 3339 문자열로
//! 직렬화됩니다. 이름은 요청이 `{동작}{엔티티}Request`, 응답이
//! `{엔티티}Response` 꼴을 따릅니다.

pub mod users;

pub use users::*;
