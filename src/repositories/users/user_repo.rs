//! # 사용자 리포지토리 포트
//!
//! 사용자 엔티티의 데이터 액세스 계약을 정의하는 트레이트입니다.
//! 서비스 계층은 이 트레이트에만 의존하며, 실제 저장소가 메모리인지
//! PostgreSQL인지 알지 못합니다.
//!
//! ## 구현체
//!
//! - [`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository):
//!   `HashMap` 기반 인메모리 저장소 (개발/테스트용)
//! - [`PgUserRepository`](super::pg_repo::PgUserRepository):
//!   Diesel 기반 PostgreSQL 저장소 (운영용)
//!
//! ## 계약 규칙
//!
//! 모든 구현체는 다음 규칙을 동일하게 지켜야 합니다:
//!
//! 1. **조회 실패는 에러가 아님**: 없는 ID/이메일 조회는 `Ok(None)` 반환
//! 2. **ID는 저장소가 발급**: `create`는 호출자가 넣은 ID와 타임스탬프를
//!    무시하고 새 UUID와 현재 시각을 할당
//! 3. **없는 대상 삭제는 no-op**: `delete`는 대상이 없어도 `Ok(())` 반환
//! 4. **이메일 조회는 대소문자 무시**: `find_by_email("A@B.com")`과
//!    `find_by_email("a@b.com")`은 같은 사용자를 찾음

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;

/// 사용자 데이터 액세스 트레이트
///
/// 사용자 엔티티의 CRUD 연산을 추상화합니다. 서비스 계층은
/// `Arc<dyn UserRepository>`로 이 트레이트를 주입받아 사용하므로,
/// 환경 변수 하나로 저장소 구현을 교체할 수 있습니다.
///
/// ## 에러 처리
///
/// 모든 메서드는 [`AppResult`] 타입을 반환합니다. 저장소 수준의
/// 장애(연결 끊김, 쿼리 실패)만 `Err(AppError::DatabaseError)`가 되며,
/// "찾는 데이터가 없음"은 정상 결과(`Ok(None)`, `Ok(false)`)입니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::memory_repo::InMemoryUserRepository;
/// use crate::repositories::users::user_repo::UserRepository;
///
/// async fn list_emails(repo: Arc<dyn UserRepository>) -> AppResult<Vec<String>> {
///     let users = repo.find_all().await?;
///     Ok(users.iter().map(|u| u.email().to_string()).collect())
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `id` - 조회할 사용자의 UUID
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError)` - 저장소 오류
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// 전체 사용자 목록 조회
    ///
    /// 저장된 모든 사용자를 생성 시각 오름차순으로 반환합니다.
    /// 사용자가 없으면 빈 벡터를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 새 사용자 저장
    ///
    /// 전달받은 엔티티의 필드 값으로 새 레코드를 만듭니다.
    /// ID와 생성/수정 시각은 호출자가 무엇을 넣었든 저장소가 새로
    /// 발급합니다. 검증은 엔티티 생성 시점에 이미 끝났다고 가정합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - ID가 할당된 저장 완료 엔티티
    /// * `Err(AppError)` - 저장소 오류
    async fn create(&self, user: User) -> AppResult<User>;

    /// 기존 사용자 갱신
    ///
    /// 엔티티의 ID와 일치하는 레코드에 이름/이메일 필드를 덮어쓰고
    /// `updated_at`을 현재 시각으로 갱신합니다. `created_at`은 저장된
    /// 값이 유지되며, 반환되는 엔티티는 병합이 끝난 저장소 기준의 최종
    /// 상태입니다. 일치하는 레코드가 없으면(ID가 `None`이거나 저장소에
    /// 없으면) 아무것도 쓰지 않고 입력을 그대로 돌려줍니다. 존재 여부
    /// 판정은 서비스 계층의 몫입니다.
    async fn update(&self, user: User) -> AppResult<User>;

    /// 사용자 삭제
    ///
    /// 해당 ID의 레코드를 제거합니다. 레코드가 없어도 에러가 아니며
    /// 조용히 `Ok(())`를 반환합니다.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// ID 존재 여부 확인
    ///
    /// 엔티티 전체를 역직렬화하지 않고 존재 여부만 확인합니다.
    /// 삭제 전 존재 확인처럼 데이터 본문이 필요 없는 경로에서 사용합니다.
    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool>;

    /// 이메일로 사용자 조회
    ///
    /// 대소문자를 무시하고 일치하는 사용자를 찾습니다. 이메일은
    /// 시스템 전체에서 유일하므로 최대 1명만 반환됩니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// // 가입 전 중복 확인
    /// if repo.find_by_email("new@example.com").await?.is_some() {
    ///     return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
    /// }
    /// ```
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}
