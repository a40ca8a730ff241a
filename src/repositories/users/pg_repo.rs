//! # PostgreSQL 사용자 리포지토리
//!
//! Diesel 기반의 [`UserRepository`] 구현체입니다. `diesel-async`의
//! 네이티브 비동기 쿼리 실행을 사용하므로 `spawn_blocking` 없이
//! actix 런타임 위에서 바로 동작합니다.
//!
//! ## 저장 구조
//!
//! - **테이블**: `users` ([`crate::db::schema`] 참고)
//! - **행 구조체**: 이 모듈 내부의 `UserRow` / `NewUserRow` / `UserChangeset`.
//!   Diesel의 타입 요구사항을 채우기 위한 영속 계층 내부 구현이며
//!   도메인으로 노출되지 않습니다.
//!
//! ## 에러 처리
//!
//! - **DatabaseError**: 연결 획득 실패, 쿼리 실행 오류
//! - **ConflictError**: `lower(email)` 유니크 인덱스 위반. 서비스 계층이
//!   중복을 먼저 걸러내지만, 동시 요청이 검사를 통과한 경우 인덱스가
//!   마지막 방어선이 됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use diesel_async::pooled_connection::bb8::PooledConnection;
use diesel_async::AsyncPgConnection;
use log::debug;
use uuid::Uuid;

use crate::db::Database;
use crate::db::schema::users;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};

use super::user_repo::UserRepository;

diesel::define_sql_function! {
    /// PostgreSQL `lower()` 함수. 대소문자 무시 이메일 조회에 사용
    fn lower(value: Text) -> Text;
}

/// `users` 테이블에서 읽어오는 행 구조체
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::from_parts(
            row.id,
            row.first_name,
            row.last_name,
            row.email,
            row.created_at,
            row.updated_at,
        )
    }
}

/// 새 사용자 레코드 삽입용 구조체
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
struct NewUserRow<'a> {
    id: Uuid,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// 기존 사용자 레코드 갱신용 changeset
///
/// `id`와 `created_at`은 불변이므로 포함하지 않습니다.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
struct UserChangeset<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    updated_at: DateTime<Utc>,
}

/// Diesel 에러를 애플리케이션 에러로 변환
///
/// 유니크 제약 위반만 `ConflictError`로 구분하고 나머지는
/// `DatabaseError`로 감쌉니다. `users` 테이블의 유니크 제약은
/// `lower(email)` 인덱스 하나뿐입니다.
fn map_diesel_error(error: diesel::result::Error) -> AppError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            debug!("유니크 제약 위반: {}", info.message());
            AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
        }
        other => AppError::DatabaseError(other.to_string()),
    }
}

/// Diesel 기반 PostgreSQL 사용자 저장소
///
/// [`Database`]의 커넥션 풀에서 연결을 빌려 쿼리를 실행합니다.
/// 운영 환경(`USE_IN_MEMORY_STORE=false`)에서 사용되는 구현체입니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::db::Database;
/// use crate::repositories::users::pg_repo::PgUserRepository;
///
/// let database = Arc::new(Database::new().await?);
/// let repo = PgUserRepository::new(database);
/// let users = repo.find_all().await?;
/// ```
pub struct PgUserRepository {
    /// PostgreSQL 커넥션 풀을 관리하는 데이터베이스 컴포넌트
    db: Arc<Database>,
}

impl PgUserRepository {
    /// 주어진 데이터베이스 연결로 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 풀에서 연결 하나를 빌려옵니다.
    async fn connection(&self) -> AppResult<PooledConnection<'_, AsyncPgConnection>> {
        self.db.pool().get().await.map_err(|e| {
            AppError::DatabaseError(format!("데이터베이스 연결을 가져오지 못했습니다: {}", e))
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let mut conn = self.connection().await?;

        let row: Option<UserRow> = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut conn = self.connection().await?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::created_at.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut conn = self.connection().await?;

        // ID와 타임스탬프는 저장소가 발급한다. 호출자가 넣은 값은 무시
        let id = Uuid::new_v4();
        let now = Utc::now();
        let new_row = NewUserRow {
            id,
            first_name: user.first_name(),
            last_name: user.last_name(),
            email: user.email(),
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(User::from_parts(
            id,
            user.first_name().to_string(),
            user.last_name().to_string(),
            user.email().to_string(),
            now,
            now,
        ))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = match user.id() {
            Some(id) => id,
            // ID가 없는 엔티티는 저장소에 대응되는 행이 없다
            None => return Ok(user),
        };

        let mut conn = self.connection().await?;

        // updated_at은 저장소가 갱신한다. created_at은 건드리지 않는다
        let changeset = UserChangeset {
            first_name: user.first_name(),
            last_name: user.last_name(),
            email: user.email(),
            updated_at: Utc::now(),
        };

        let affected = diesel::update(users::table.find(id))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            // 대응되는 행이 없으면 아무것도 쓰지 않고 입력을 돌려준다
            return Ok(user);
        }

        // 갱신된 행을 다시 읽어 저장소 기준의 최종 상태를 돌려준다
        let row: Option<UserRow> = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        match row {
            Some(row) => Ok(User::from(row)),
            // 갱신 직후 다른 요청이 행을 지운 경우
            None => Ok(user),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut conn = self.connection().await?;

        // 없는 ID면 0건 삭제로 끝난다. 에러가 아니다
        diesel::delete(users::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        let mut conn = self.connection().await?;

        let found = diesel::select(diesel::dsl::exists(users::table.find(id)))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(found)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let mut conn = self.connection().await?;

        let row: Option<UserRow> = users::table
            .filter(lower(users::email).eq(email.to_lowercase()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_string()),
        );

        let mapped = map_diesel_error(error);

        assert!(matches!(mapped, AppError::ConflictError(_)));
        assert_eq!(mapped.to_string(), "Conflict error: 이미 사용 중인 이메일입니다");
    }

    #[test]
    fn test_other_diesel_errors_map_to_database_error() {
        let mapped = map_diesel_error(DieselError::NotFound);

        assert!(matches!(mapped, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_closed_connection_maps_to_database_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection unexpectedly".to_string()),
        );

        let mapped = map_diesel_error(error);

        assert!(matches!(mapped, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_user_row_converts_to_entity() {
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let updated_at = created_at + chrono::Duration::hours(1);
        let row = UserRow {
            id,
            first_name: "Matti".to_string(),
            last_name: "Meikäläinen".to_string(),
            email: "matti@example.com".to_string(),
            created_at,
            updated_at,
        };

        let user = User::from(row);

        assert_eq!(user.id(), Some(id));
        assert_eq!(user.first_name(), "Matti");
        assert_eq!(user.last_name(), "Meikäläinen");
        assert_eq!(user.email(), "matti@example.com");
        assert_eq!(user.created_at(), created_at);
        assert_eq!(user.updated_at(), updated_at);
    }
}
