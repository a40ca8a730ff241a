//! # 사용자 수정 요청 DTO
//!
//! 기존 사용자의 이름/성/이메일 전체 교체를 위한 요청 구조입니다.
//! 생성 요청과 같은 형태이지만, 수정 경로는 엔티티의 검증 메서드
//! (`update_basic_info`, `update_email`)를 통해 적용됩니다.

use serde::{Deserialize, Serialize};

/// 사용자 수정을 위한 요청 DTO
///
/// PUT 요청의 본문으로 세 필드를 모두 받아 기존 값을 교체합니다.
/// 부분 수정(PATCH) 의미는 없습니다: 누락된 필드는 null과 동일하게
/// `MissingFieldError`가 됩니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "firstName": "Maija",
///   "lastName": "Virtanen",
///   "email": "maija@example.com"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// 이름 (3~100자)
    pub first_name: Option<String>,

    /// 성 (3~100자)
    pub last_name: Option<String>,

    /// 이메일 주소 (최대 255자, '@' 포함)
    pub email: Option<String>,
}
