//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트 → 서버 방향의 본문 두 가지(생성, 수정)를 담습니다.
//! 핸들러에서 `web::Json<T>` 익스트랙터가 JSON을 이 타입으로
//! 역직렬화하며, 구조가 맞지 않는 본문은 핸들러에 도달하기 전에
//! 거부됩니다.
//!
//! 두 DTO 모두 필드가 `Option<String>`입니다 — JSON `null`과 키 누락을
//! 값 차원에서 보존해 엔티티의 `MissingFieldError` 판정까지 전달하기
//! 위해서입니다.
//!
//! ## 검증 계층
//!
//! 요청 DTO는 구문 검증(JSON 구조와 타입 일치성)까지만 담당합니다.
//! 필드 규칙(길이, '@' 포함 등)은 도메인 엔티티가 고정된 순서로
//! 검증하고, 중복 확인 같은 비즈니스 검증은 서비스 계층이 수행합니다.
//!
//! ## 에러 핸들링
//!
//! 엔티티 검증 실패는 `AppError::ValidationError` 또는
//! `AppError::MissingFieldError`가 되어 HTTP 400 Bad Request 응답으로
//! 변환됩니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
