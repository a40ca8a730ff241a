//! # 사용자 관련 응답 DTO 모듈
//!
//! 서버 → 클라이언트 방향의 사용자 표현을 담습니다. 성공 응답의
//! 본문은 항상 `UserResponse` 하나(또는 그 배열)이며, 별도의 래퍼
//! 객체 없이 DTO가 곧 본문입니다.
//!
//! 엔티티의 비공개 필드를 그대로 노출하는 대신 `From<User>` 변환을
//! 거치므로, 내부 구조가 바뀌어도 JSON 계약(camelCase 키,
//! RFC 3339 타임스탬프)은 이 모듈이 지킵니다.
//!
//! ## JSON 응답 예제
//!
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

pub mod user_response;

pub use user_response::UserResponse;
