//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 `@Service` 계층을 참고하여 설계되었으며, 엔티티 검증과
//! 저장소 호출을 조합해 생성, 조회, 수정, 삭제의 유스케이스를 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │    Creation     │  │   User Query    │  │  Modification   │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Entity Valid  │  │ • By ID         │  │ • Fetch First   │  │
//! │  │ • Duplicate Chk │  │ • All Users     │  │ • Valid Setters │  │
//! │  │ • Repo Create   │  │ • Entity to DTO │  │ • Atomic Update │  │
//! │  │ • DTO Response  │  │ • Ok(None) Miss │  │ • Delete Check  │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  dyn UserRepository                             │
//! │ • InMemoryUserRepository (개발/테스트)                          │
//! │ • PgUserRepository (운영, Diesel + PostgreSQL)                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 계층 간 책임 분리
//!
//! - **검증은 엔티티가**: 필수값, 길이, 형식 검사는 [`User`]의 생성자와
//!   세터가 수행합니다. 서비스는 검증 규칙을 직접 알지 못합니다.
//! - **존재 판정은 서비스가**: 저장소의 `Ok(None)`을 받아 404로 이어질
//!   `Ok(None)`/`Ok(false)`로 번역하는 것은 서비스의 몫입니다.
//! - **중복 검사는 서비스가**: 이메일 유니크 규칙은 생성 경로에서
//!   서비스가 저장소 조회로 확인합니다.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 이 서비스는 사용자 레코드의 전체 생명주기를 관리합니다.
/// Spring Framework의 `@Service` 어노테이션이 적용된 UserService와
/// 유사한 역할을 수행하며, HTTP 계층과 저장소 계층 사이에서
/// 도메인 규칙을 조율합니다.
///
/// ## 주요 책임 (Responsibilities)
///
/// 1. **사용자 생성 (User Creation)**
///    - 엔티티 생성자를 통한 입력값 검증 위임
///    - 이메일 중복 검사 및 유니크 규칙 적용
///    - 저장 후 응답 DTO 변환
///
/// 2. **사용자 조회 (User Retrieval)**
///    - ID 기반 단건 조회와 전체 목록 조회
///    - 엔티티에서 DTO로의 변환
///    - 없는 사용자는 에러가 아닌 `Ok(None)`으로 보고
///
/// 3. **사용자 수정 (User Modification)**
///    - 저장된 엔티티를 먼저 조회한 후 검증된 세터로 변경
///    - 검증 실패 시 저장소에 아무것도 쓰지 않음
///
/// 4. **사용자 삭제 (User Deletion)**
///    - 존재 확인 후 삭제, 결과를 `bool`로 보고
///
/// ## 의존성 주입
///
/// 저장소는 생성자에서 트레이트 객체로 주입받습니다. 같은 서비스
/// 코드가 인메모리 저장소와 PostgreSQL 저장소 위에서 동일하게
/// 동작합니다:
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::memory_repo::InMemoryUserRepository;
/// use crate::services::users::user_service::UserService;
///
/// let repo = Arc::new(InMemoryUserRepository::with_sample_data());
/// let user_service = UserService::new(repo);
/// ```
///
/// ## 에러 처리 전략
///
/// 모든 메서드는 [`AppResult`] 타입을 반환하며, 다음과 같은 일관된
/// 에러 처리를 제공합니다:
///
/// - **MissingFieldError**: 요청 본문에서 필수 필드가 빠짐
/// - **ValidationError**: 입력값이 형식/길이 규칙 위반
/// - **ConflictError**: 이메일 중복 등 비즈니스 규칙 위반
/// - **DatabaseError**: 저장소 수준의 장애
///
/// "찾는 사용자가 없음"은 에러가 아니라 `Ok(None)` 또는 `Ok(false)`로
/// 표현되며, HTTP 404로의 번역은 핸들러가 담당합니다.
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    ///
    /// 트레이트 객체로 주입되므로 저장소 구현(인메모리/PostgreSQL)을
    /// 서비스 코드 수정 없이 교체할 수 있습니다.
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// 주어진 저장소 구현으로 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 생성
    ///
    /// 클라이언트 요청을 받아 새로운 사용자를 생성합니다.
    /// 검증 규칙은 [`User::new`]가 정의된 순서대로 적용하며, 첫 번째
    /// 위반 하나만 에러로 보고됩니다.
    ///
    /// # 인자
    ///
    /// * `request` - 사용자 생성 요청 데이터 (이름, 성, 이메일)
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자 정보 (ID, 타임스탬프 포함)
    /// * `Err(AppError::MissingFieldError)` - 필수 필드 누락
    /// * `Err(AppError::ValidationError)` - 길이/형식 규칙 위반
    /// * `Err(AppError::ConflictError)` - 이미 사용 중인 이메일
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    ///
    /// # 처리 과정
    ///
    /// 1. **엔티티 생성**: `User::new`가 모든 필드를 정의된 순서로 검증
    /// 2. **중복 검사**: 검증된 이메일로 기존 사용자 조회 (대소문자 무시)
    /// 3. **영구 저장**: 저장소가 ID와 타임스탬프를 발급
    /// 4. **응답 변환**: 엔티티를 `UserResponse` DTO로 변환
    ///
    /// # 비즈니스 규칙
    ///
    /// - **이메일 유니크성**: 대소문자만 다른 이메일도 중복으로 간주
    /// - **검증 우선**: 중복 검사는 입력이 형식 검증을 통과한 뒤에만 수행
    ///
    /// # 사용 예제
    ///
    /// ```rust,ignore
    /// let request = CreateUserRequest {
    ///     first_name: Some("Matti".to_string()),
    ///     last_name: Some("Meikäläinen".to_string()),
    ///     email: Some("matti@example.com".to_string()),
    /// };
    ///
    /// match user_service.create_user(request).await {
    ///     Ok(response) => println!("사용자 생성: {}", response.id),
    ///     Err(AppError::ConflictError(msg)) => println!("중복: {}", msg),
    ///     Err(e) => println!("검증 실패: {}", e),
    /// }
    /// ```
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        // 엔티티 생성 시점에 모든 검증이 정의된 순서로 수행된다
        let user = User::new(
            request.first_name.as_deref(),
            request.last_name.as_deref(),
            request.email.as_deref(),
        )?;

        // 이메일 중복 검사 (대소문자 무시)
        if self.user_repo.find_by_email(user.email()).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        // 저장 (ID와 타임스탬프는 저장소가 발급)
        let created_user = self.user_repo.create(user).await?;

        let total_duration = start_time.elapsed();
        log::info!("Total user creation took: {:?}", total_duration);

        Ok(UserResponse::from(created_user))
    }

    /// ID로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `id` - 조회할 사용자의 UUID
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(UserResponse))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우 (핸들러가 404로 번역)
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    pub async fn get_user_by_id(&self, id: Uuid) -> AppResult<Option<UserResponse>> {
        let user = self.user_repo.find_by_id(id).await?;
        Ok(user.map(UserResponse::from))
    }

    /// 전체 사용자 목록 조회
    ///
    /// 저장된 모든 사용자를 생성 시각 오름차순으로 반환합니다.
    /// 사용자가 없으면 빈 벡터를 반환하며, 이는 에러가 아닙니다.
    pub async fn get_all_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 정보 수정
    ///
    /// 저장된 엔티티를 먼저 조회한 뒤, 검증된 세터로 이름과 이메일을
    /// 교체하고 다시 저장합니다. 요청 본문은 전체 교체(full replace)
    /// 의미이므로 빠진 필드는 부분 수정이 아니라 필수값 누락 에러가
    /// 됩니다.
    ///
    /// # 인자
    ///
    /// * `id` - 수정할 사용자의 UUID
    /// * `request` - 새 필드 값 (이름, 성, 이메일 모두 필수)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(UserResponse))` - 수정된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::MissingFieldError)` - 필수 필드 누락
    /// * `Err(AppError::ValidationError)` - 길이/형식 규칙 위반
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    ///
    /// # 처리 과정
    ///
    /// 1. **조회**: 대상 엔티티를 저장소에서 가져옴 (없으면 `Ok(None)`)
    /// 2. **이름 수정**: `update_basic_info`가 두 이름을 함께 검증 후 교체
    /// 3. **이메일 수정**: `update_email`이 이메일을 검증 후 교체
    /// 4. **저장**: 변경된 엔티티를 저장소에 반영
    ///
    /// 검증이 한 단계라도 실패하면 이후 단계는 수행되지 않고 저장소에는
    /// 아무것도 쓰이지 않습니다. `id`와 `created_at`은 수정 대상이
    /// 아니며, 이메일 중복 검사는 생성 경로에서만 수행됩니다.
    pub async fn update_user(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> AppResult<Option<UserResponse>> {
        let mut user = match self.user_repo.find_by_id(id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        // 이름 쌍 먼저, 그 다음 이메일. 생성 경로와 같은 검증 순서
        user.update_basic_info(request.first_name.as_deref(), request.last_name.as_deref())?;
        user.update_email(request.email.as_deref())?;

        let updated_user = self.user_repo.update(user).await?;
        Ok(Some(UserResponse::from(updated_user)))
    }

    /// 사용자 삭제
    ///
    /// 존재 여부를 먼저 확인한 뒤 삭제합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 사용자가 존재했고 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 없음 (핸들러가 404로 번역)
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    pub async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        if !self.user_repo.exists_by_id(id).await? {
            return Ok(false);
        }

        self.user_repo.delete(id).await?;
        Ok(true)
    }
}
