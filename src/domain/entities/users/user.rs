//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 모든 필드 검증을 엔티티가 직접 소유하므로, 생성자와 변경 메서드를
//! 통과한 User는 항상 유효한 상태임이 보장됩니다.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::{char_count, is_blank};

/// 누락(null) 검사를 통과시키고 값을 꺼냅니다.
///
/// 필드 자체가 없는 경우는 빈 값과 구분되는 `MissingFieldError`입니다.
fn require_present<'a>(value: Option<&'a str>, field_name: &str) -> AppResult<&'a str> {
    value.ok_or_else(|| {
        AppError::MissingFieldError(format!("{} 필드가 누락되었습니다", field_name))
    })
}

fn require_not_blank(value: &str, field_name: &str) -> AppResult<()> {
    if is_blank(value) {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(())
}

fn require_min_length(value: &str, min: usize, field_name: &str) -> AppResult<()> {
    if char_count(value) < min {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 최소 {}자 이상이어야 합니다",
            field_name, min
        )));
    }
    Ok(())
}

fn require_max_length(value: &str, max: usize, field_name: &str) -> AppResult<()> {
    if char_count(value) > max {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 최대 {}자까지 가능합니다",
            field_name, max
        )));
    }
    Ok(())
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 필드는 전부 비공개이며, 생성과 변경은 검증을 수행하는 메서드를
/// 통해서만 가능합니다. 저장되지 않은 엔티티는 `id`가 없는 상태로
/// 시작하고, 리포지토리가 저장 시점에 id와 타임스탬프를 부여합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 리포지토리가 부여하는 식별자 (저장 전에는 None)
    id: Option<Uuid>,
    /// 이름 (3~100자)
    first_name: String,
    /// 성 (3~100자)
    last_name: String,
    /// 이메일 (최대 255자, '@' 포함)
    email: String,
    /// 생성 시간 (생성 후 불변)
    created_at: DateTime<Utc>,
    /// 수정 시간 (변경 성공 시마다 갱신)
    updated_at: DateTime<Utc>,
}

impl User {
    /// 이름 필드의 최소 길이 (문자 수 기준)
    pub const MIN_NAME_LENGTH: usize = 3;
    /// 이름 필드의 최대 길이 (문자 수 기준)
    pub const MAX_NAME_LENGTH: usize = 100;
    /// 이메일 필드의 최대 길이 (문자 수 기준)
    pub const MAX_EMAIL_LENGTH: usize = 255;

    /// 새 사용자 생성
    ///
    /// 세 필드를 한 번에 검증하고, 하나라도 실패하면 아무것도 생성하지
    /// 않습니다. 입력은 `Option`으로 받아 누락(null)과 빈 값을 구분합니다.
    ///
    /// 검증은 고정된 순서로 첫 번째 위반 규칙에서 중단됩니다:
    /// 이름 쌍(누락 → 빈 값 → 최소 길이 → 최대 길이, 각 규칙마다
    /// firstName 먼저) 다음에 이메일(누락 → 빈 값 → 최대 길이 → '@' 포함).
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let user = User::new(Some("Matti"), Some("Meikäläinen"), Some("matti@example.com"))?;
    /// assert!(user.id().is_none());
    /// ```
    pub fn new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Self> {
        let (first_name, last_name) = Self::validate_name_pair(first_name, last_name)?;
        let email = Self::validate_email_value(email)?;
        let now = Utc::now();

        Ok(Self {
            id: None,
            first_name,
            last_name,
            email,
            created_at: now,
            updated_at: now,
        })
    }

    /// 저장된 데이터로부터 엔티티 복원
    ///
    /// 리포지토리 전용 생성자입니다. 저장 시점에 이미 검증된 값을
    /// 다루므로 재검증 없이 조립합니다.
    pub(crate) fn from_parts(
        id: Uuid,
        first_name: String,
        last_name: String,
        email: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            email,
            created_at,
            updated_at,
        }
    }

    /// 이름과 성을 함께 변경
    ///
    /// 두 값을 모두 검증한 뒤에만 할당합니다. 검증 실패 시 기존 값은
    /// 하나도 변경되지 않습니다. 성공하면 `updated_at`이 갱신됩니다.
    pub fn update_basic_info(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> AppResult<()> {
        let (first_name, last_name) = Self::validate_name_pair(first_name, last_name)?;
        self.first_name = first_name;
        self.last_name = last_name;
        self.touch();
        Ok(())
    }

    /// 이메일 변경
    ///
    /// 검증 실패 시 기존 값이 유지됩니다. 성공하면 `updated_at`이 갱신됩니다.
    pub fn update_email(&mut self, email: Option<&str>) -> AppResult<()> {
        let email = Self::validate_email_value(email)?;
        self.email = email;
        self.touch();
        Ok(())
    }

    /// 리포지토리가 부여한 식별자
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// 이름
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// 성
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// 이메일
    pub fn email(&self) -> &str {
        &self.email
    }

    /// 생성 시간
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 마지막 수정 시간
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// 이름 쌍 검증 (규칙 단위로 firstName → lastName 순서)
    fn validate_name_pair(
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> AppResult<(String, String)> {
        let first = require_present(first_name, "firstName")?;
        let last = require_present(last_name, "lastName")?;
        require_not_blank(first, "firstName")?;
        require_not_blank(last, "lastName")?;
        require_min_length(first, Self::MIN_NAME_LENGTH, "firstName")?;
        require_min_length(last, Self::MIN_NAME_LENGTH, "lastName")?;
        require_max_length(first, Self::MAX_NAME_LENGTH, "firstName")?;
        require_max_length(last, Self::MAX_NAME_LENGTH, "lastName")?;
        Ok((first.to_string(), last.to_string()))
    }

    /// 이메일 검증 (누락 → 빈 값 → 최대 길이 → '@' 포함)
    fn validate_email_value(email: Option<&str>) -> AppResult<String> {
        let email = require_present(email, "email")?;
        require_not_blank(email, "email")?;
        require_max_length(email, Self::MAX_EMAIL_LENGTH, "email")?;
        if !email.contains('@') {
            return Err(AppError::ValidationError(
                "email에는 '@' 문자가 포함되어야 합니다".to_string(),
            ));
        }
        Ok(email.to_string())
    }
}
