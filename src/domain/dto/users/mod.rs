//! # User Data Transfer Objects Module
//!
//! 사용자 API가 주고받는 JSON의 구체적인 모양 세 가지를 정의합니다:
//! 생성 요청, 수정 요청, 그리고 응답. Spring 프로젝트의 User DTO
//! 패키지에 해당합니다.
//!
//! | 타입 | Spring 대응물 | 용도 |
//! |------|---------------|------|
//! | `CreateUserRequest` | `@RequestBody CreateUserDto` | `POST /api/v1/users` 본문 |
//! | `UpdateUserRequest` | `@RequestBody UpdateUserDto` | `PUT /api/v1/users/{id}` 본문 |
//! | `UserResponse` | `@ResponseBody UserDto` | 모든 성공 응답 본문 |
//!
//! `ModelMapper.map(entity, dto)` 자리는 `UserResponse::from(user)`가
//! 대신합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/    create_user.rs, update_user.rs
//! └── response/   user_response.rs
//! ```
//!
//! ## 핸들러에서 보는 모습
//!
//! ### Spring Boot라면
//! ```java
//! @RestController
//! @RequestMapping("/api/v1/users")
//! public class UserController {
//!
//!     @PostMapping
//!     public ResponseEntity<UserDto> create(
//!         @RequestBody CreateUserDto request
//!     ) {
//!         UserDto user = userService.createUser(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(user);
//!     }
//!
//!     @GetMapping("/{id}")
//!     public ResponseEntity<UserDto> getById(@PathVariable UUID id) {
//!         return userService.getUserById(id)
//!             .map(ResponseEntity::ok)
//!             .orElse(ResponseEntity.notFound().build());
//!     }
//! }
//! ```
//!
//! ### 이 시스템에서는
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::domain::dto::users::request::create_user::CreateUserRequest;
//! use crate::errors::AppError;
//!
//! #[actix_web::post("")]
//! pub async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,  // @RequestBody와 동일
//! ) -> Result<HttpResponse, AppError> {
//!     let response = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 요청 DTO (Request DTOs)
//!
//! ### CreateUserRequest / UpdateUserRequest
//!
//! 두 DTO 모두 `{firstName, lastName, email}` 형태이며, 모든 필드가
//! `Option<String>`입니다. 이는 다음 구분을 위한 의도적 설계입니다:
//!
//! - 필드 누락 또는 `null` → `MissingFieldError` (400)
//! - 빈 문자열/공백 → `ValidationError` (400)
//!
//! 필드 규칙 검증(길이, '@' 포함)은 DTO가 아니라 도메인 엔티티가
//! 고정된 순서로 수행합니다. 중복 이메일 확인은 서비스 계층의 몫입니다.
//!
//! #### 요청 예제:
//! ```json
//! {
//!   "firstName": "Matti",
//!   "lastName": "Meikäläinen",
//!   "email": "matti@example.com"
//! }
//! ```
//!
//! ## 응답 DTO (Response DTOs)
//!
//! ### UserResponse - 기본 사용자 정보
//!
//! 저장된 엔티티의 전송용 표현입니다. 내부 표현(비공개 필드를 가진
//! 엔티티)과 분리되어 있어 API 계약이 엔티티 구조 변경에 끌려가지
//! 않습니다.
//!
//! #### JSON 응답 예제:
//! ```json
//! {
//!   "id": "11111111-1111-1111-1111-111111111111",
//!   "firstName": "Matti",
//!   "lastName": "Meikäläinen",
//!   "email": "matti@example.com",
//!   "createdAt": "2025-07-26T10:00:00Z",
//!   "updatedAt": "2025-08-10T12:00:00Z"
//! }
//! ```
//!
//! ## 실제 API 플로우 예제
//!
//! ```text
//! // 1. 클라이언트 요청
//! POST /api/v1/users
//! Content-Type: application/json
//!
//! {"firstName": "Matti", "lastName": "Meikäläinen", "email": "matti@example.com"}
//!
//! // 2. 서버 응답 (성공)
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! {
//!   "id": "5f3c0a9e-...",
//!   "firstName": "Matti",
//!   "lastName": "Meikäläinen",
//!   "email": "matti@example.com",
//!   "createdAt": "2025-08-25T09:00:00Z",
//!   "updatedAt": "2025-08-25T09:00:00Z"
//! }
//!
//! // 3. 중복 이메일로 재요청 시
//! HTTP/1.1 409 Conflict
//!
//! {"error": "Conflict error: 이미 사용 중인 이메일입니다"}
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
