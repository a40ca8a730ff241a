//! # 인메모리 사용자 리포지토리
//!
//! `HashMap` 기반의 [`UserRepository`] 구현체입니다. 외부 프로세스 없이
//! 동작하므로 로컬 개발과 테스트에서 기본 저장소로 사용됩니다.
//! 프로세스가 종료되면 데이터는 사라집니다.
//!
//! ## 동시성
//!
//! 저장소 전체를 하나의 [`Mutex`]로 보호합니다. 각 연산은 락을 잡은 채
//! 완료되므로 연산 단위의 원자성이 보장되고, 조회는 엔티티를 복제해
//! 반환하므로 락 해제 후의 변경이 호출자에게 새어 나가지 않습니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::{uuid, Uuid};

use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;
use crate::utils::string_utils::eq_ignore_case;

use super::user_repo::UserRepository;

/// `HashMap` 기반 인메모리 사용자 저장소
///
/// ## 저장 구조
///
/// - **키**: 사용자 UUID
/// - **값**: [`User`] 엔티티 (조회 시 복제 반환)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::users::memory_repo::InMemoryUserRepository;
///
/// // 빈 저장소 (테스트용)
/// let repo = InMemoryUserRepository::new();
///
/// // 샘플 사용자 3명이 미리 들어 있는 저장소 (개발 서버용)
/// let repo = InMemoryUserRepository::with_sample_data();
/// ```
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// 빈 저장소 생성
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    /// 샘플 데이터가 채워진 저장소 생성
    ///
    /// 개발 서버 기동 시 바로 조회해 볼 수 있도록 사용자 3명을
    /// 고정 UUID로 시드합니다. 생성/수정 시각은 현재 시각 기준으로
    /// 며칠 전으로 역산해 실제 운영 데이터처럼 보이게 합니다.
    ///
    /// | ID 앞자리 | 이름 | 이메일 |
    /// |-----------|------|--------|
    /// | `1111...` | Matti Meikäläinen | matti.meikalainen@example.com |
    /// | `2222...` | Maija Virtanen | maija.virtanen@example.com |
    /// | `3333...` | Teppo Testaaja | teppo.testaaja@example.com |
    pub fn with_sample_data() -> Self {
        let repo = Self::new();
        let now = Utc::now();

        let samples = [
            (
                uuid!("11111111-1111-1111-1111-111111111111"),
                "Matti",
                "Meikäläinen",
                "matti.meikalainen@example.com",
                30,
                30,
            ),
            (
                uuid!("22222222-2222-2222-2222-222222222222"),
                "Maija",
                "Virtanen",
                "maija.virtanen@example.com",
                15,
                5,
            ),
            (
                uuid!("33333333-3333-3333-3333-333333333333"),
                "Teppo",
                "Testaaja",
                "teppo.testaaja@example.com",
                7,
                1,
            ),
        ];

        {
            let mut store = repo.store();
            for (id, first_name, last_name, email, created_days_ago, updated_days_ago) in samples {
                let user = User::from_parts(
                    id,
                    first_name.to_string(),
                    last_name.to_string(),
                    email.to_string(),
                    now - Duration::days(created_days_ago),
                    now - Duration::days(updated_days_ago),
                );
                store.insert(id, user);
            }
        }

        repo
    }

    /// 내부 저장소 락 획득
    ///
    /// 락을 잡은 스레드가 패닉해도 저장소는 계속 쓸 수 있어야 하므로
    /// poison 상태면 내부 데이터를 꺼내 그대로 사용합니다.
    fn store(&self) -> MutexGuard<'_, HashMap<Uuid, User>> {
        self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let store = self.store();
        Ok(store.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let store = self.store();
        let mut users: Vec<User> = store.values().cloned().collect();
        // HashMap 순회 순서는 매번 달라지므로 생성 시각으로 정렬해
        // PostgreSQL 구현과 같은 순서를 보장한다
        users.sort_by_key(|user| user.created_at());
        Ok(users)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        // ID와 타임스탬프는 저장소가 발급한다. 호출자가 넣은 값은 무시
        let id = Uuid::new_v4();
        let now = Utc::now();
        let stored = User::from_parts(
            id,
            user.first_name().to_string(),
            user.last_name().to_string(),
            user.email().to_string(),
            now,
            now,
        );

        let mut store = self.store();
        store.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = match user.id() {
            Some(id) => id,
            // ID가 없는 엔티티는 저장소에 대응되는 행이 없다
            None => return Ok(user),
        };

        let mut store = self.store();
        let created_at = match store.get(&id) {
            Some(existing) => existing.created_at(),
            // 없는 사용자는 저장하지 않고 입력을 그대로 돌려준다
            None => return Ok(user),
        };

        // 이름/이메일은 입력 값으로 덮어쓰되 created_at은 저장된 값을
        // 유지한다. updated_at 갱신은 저장소 책임
        let merged = User::from_parts(
            id,
            user.first_name().to_string(),
            user.last_name().to_string(),
            user.email().to_string(),
            created_at,
            Utc::now(),
        );
        store.insert(id, merged.clone());
        Ok(merged)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut store = self.store();
        store.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        let store = self.store();
        Ok(store.contains_key(&id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let store = self.store();
        let found = store
            .values()
            .find(|user| eq_ignore_case(user.email(), email))
            .cloned();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> User {
        User::new(Some("Matti"), Some("Meikäläinen"), Some("matti@example.com"))
            .expect("유효한 사용자 생성 실패")
    }

    #[actix_web::test]
    async fn test_create_assigns_fresh_id_and_timestamps() {
        let repo = InMemoryUserRepository::new();
        let before = Utc::now();

        let created = repo.create(valid_user()).await.unwrap();

        assert!(created.id().is_some());
        assert!(created.created_at() >= before);
        assert_eq!(created.created_at(), created.updated_at());
        assert_eq!(created.first_name(), "Matti");
        assert_eq!(created.email(), "matti@example.com");
    }

    #[actix_web::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(valid_user()).await.unwrap();
        let second = repo
            .create(
                User::new(Some("Maija"), Some("Virtanen"), Some("maija@example.com")).unwrap(),
            )
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_find_by_id_returns_none_for_unknown_id() {
        let repo = InMemoryUserRepository::new();

        let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();

        assert!(found.is_none());
    }

    #[actix_web::test]
    async fn test_find_by_id_returns_stored_user() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(valid_user()).await.unwrap();
        let id = created.id().unwrap();

        let found = repo.find_by_id(id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[actix_web::test]
    async fn test_find_all_sorted_by_creation_time() {
        let repo = InMemoryUserRepository::with_sample_data();

        let users = repo.find_all().await.unwrap();

        assert_eq!(users.len(), 3);
        // 시드 순서: Matti(-30일), Maija(-15일), Teppo(-7일)
        assert_eq!(users[0].first_name(), "Matti");
        assert_eq!(users[1].first_name(), "Maija");
        assert_eq!(users[2].first_name(), "Teppo");
    }

    #[actix_web::test]
    async fn test_sample_data_uses_fixed_ids() {
        let repo = InMemoryUserRepository::with_sample_data();

        let matti = repo
            .find_by_id(uuid!("11111111-1111-1111-1111-111111111111"))
            .await
            .unwrap();

        assert_eq!(matti.unwrap().email(), "matti.meikalainen@example.com");
    }

    #[actix_web::test]
    async fn test_update_overwrites_existing_row() {
        let repo = InMemoryUserRepository::new();
        let mut created = repo.create(valid_user()).await.unwrap();
        created.update_basic_info(Some("Maija"), Some("Virtanen")).unwrap();

        let updated = repo.update(created.clone()).await.unwrap();

        assert_eq!(updated.first_name(), "Maija");
        let reloaded = repo.find_by_id(created.id().unwrap()).await.unwrap().unwrap();
        assert_eq!(reloaded.first_name(), "Maija");
        assert_eq!(reloaded.last_name(), "Virtanen");
    }

    #[actix_web::test]
    async fn test_update_keeps_stored_created_at_and_refreshes_updated_at() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(valid_user()).await.unwrap();
        let id = created.id().unwrap();

        // 입력 엔티티의 타임스탬프는 무시되고 저장된 행 기준으로 병합된다
        let tampered = User::from_parts(
            id,
            "Maija".to_string(),
            "Virtanen".to_string(),
            "maija@example.com".to_string(),
            Utc::now() - Duration::days(99),
            Utc::now() - Duration::days(99),
        );
        let updated = repo.update(tampered).await.unwrap();

        assert_eq!(updated.created_at(), created.created_at());
        assert!(updated.updated_at() >= created.updated_at());
        assert_eq!(updated.email(), "maija@example.com");
        let reloaded = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(reloaded.created_at(), created.created_at());
    }

    #[actix_web::test]
    async fn test_update_unknown_id_returns_input_without_storing() {
        let repo = InMemoryUserRepository::new();
        let ghost = User::from_parts(
            Uuid::new_v4(),
            "Matti".to_string(),
            "Meikäläinen".to_string(),
            "matti@example.com".to_string(),
            Utc::now(),
            Utc::now(),
        );

        let returned = repo.update(ghost.clone()).await.unwrap();

        assert_eq!(returned, ghost);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_removes_user() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(valid_user()).await.unwrap();
        let id = created.id().unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(!repo.exists_by_id(id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_noop() {
        let repo = InMemoryUserRepository::with_sample_data();

        let result = repo.delete(Uuid::new_v4()).await;

        assert!(result.is_ok());
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_exists_by_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(valid_user()).await.unwrap();

        assert!(repo.exists_by_id(created.id().unwrap()).await.unwrap());
        assert!(!repo.exists_by_id(Uuid::new_v4()).await.unwrap());
    }

    #[actix_web::test]
    async fn test_find_by_email_ignores_case() {
        let repo = InMemoryUserRepository::new();
        repo.create(valid_user()).await.unwrap();

        let found = repo.find_by_email("MATTI@EXAMPLE.COM").await.unwrap();

        assert!(found.is_some());
        // 저장된 원본 표기는 그대로 유지된다
        assert_eq!(found.unwrap().email(), "matti@example.com");
    }

    #[actix_web::test]
    async fn test_find_by_email_returns_none_for_unknown_email() {
        let repo = InMemoryUserRepository::with_sample_data();

        let found = repo.find_by_email("nobody@example.com").await.unwrap();

        assert!(found.is_none());
    }
}
