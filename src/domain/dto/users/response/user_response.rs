use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 저장된 사용자 한 명을 클라이언트에 반환할 때 사용하는 표현입니다.
/// JSON 키는 camelCase이며, 타임스탬프는 RFC 3339 문자열로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            // 저장을 거치지 않은 엔티티는 id가 없으므로 nil UUID로 표기
            id: user.id().unwrap_or_default(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}
