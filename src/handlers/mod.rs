//! # HTTP Request Handlers Module
//!
//! REST 엔드포인트 하나당 핸들러 함수 하나를 정의하는 모듈입니다.
//! Spring MVC라면 Controller 클래스가 맡을 자리이며, 여기서는
//! Actix-web의 라우트 매크로가 붙은 자유 함수들로 구성됩니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP 요청
//!    │
//!    ▼
//! ┌──────────────────────────────┐
//! │ handlers (이 모듈)            │  경로/본문 추출, 상태 코드 결정
//! ├──────────────────────────────┤
//! │ services                     │  비즈니스 규칙 (중복 이메일 등)
//! ├──────────────────────────────┤
//! │ repositories                 │  저장소 계약 (인메모리/PostgreSQL)
//! ├──────────────────────────────┤
//! │ domain (entities + DTOs)     │  검증과 표현
//! └──────────────────────────────┘
//! ```
//!
//! 핸들러의 책임은 얇게 유지합니다: 요청을 DTO로 받고, 서비스를
//! 호출하고, 서비스가 돌려준 `Option`/`bool`을 HTTP 상태 코드로
//! 번역하는 것까지입니다. 검증 규칙은 전부 도메인 엔티티 소유입니다.
//!
//! ## Spring Framework와의 비교
//!
//! ### Spring MVC Controller
//! ```java
//! @PutMapping("/{userId}")
//! public ResponseEntity<UserResponse> updateUser(
//!         @PathVariable UUID userId,
//!         @RequestBody UpdateUserRequest request) {
//!     return userService.updateUser(userId, request)
//!             .map(ResponseEntity::ok)
//!             .orElseGet(() -> ResponseEntity.notFound().build());
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! #[put("/{user_id}")]
//! pub async fn update_user(
//!     service: web::Data<UserService>,   // 기동 시 등록한 공유 상태
//!     user_id: web::Path<String>,
//!     payload: web::Json<UpdateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let id = parse_user_id(&user_id)?;
//!     let updated = service
//!         .update_user(id, payload.into_inner())
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//!     Ok(HttpResponse::Ok().json(updated))
//! }
//! ```
//!
//! Spring의 `Optional` → `ResponseEntity` 매핑이 여기서는
//! `Option` → `ok_or_else(NotFound)` 한 줄입니다. `@Autowired` 필드
//! 주입 대신 `web::Data` 익스트랙터로 공유 서비스를 받으므로,
//! 테스트에서는 원하는 저장소를 담은 서비스를 직접 등록하면 됩니다.
//!
//! ## 에러 흐름
//!
//! 핸들러는 상태 코드를 직접 만들지 않습니다. `AppError`를 `?`로
//! 흘려보내면 `ResponseError` 구현이 400/404/409/500과
//! `{"error": "..."}` 본문을 일관되게 생성합니다. 잘못된 UUID 경로
//! 변수만 핸들러 계층에서 `ValidationError`로 바꿉니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 엔드포인트 5종
//!   - `POST /api/v1/users` — 생성 (201)
//!   - `GET /api/v1/users` — 목록 (200)
//!   - `GET /api/v1/users/{id}` — 단건 조회 (200/404)
//!   - `PUT /api/v1/users/{id}` — 전체 수정 (200/404)
//!   - `DELETE /api/v1/users/{id}` — 삭제 (204/404)
//!
//! 라우트 등록은 [`crate::routes`]가 담당합니다.

pub mod users;
