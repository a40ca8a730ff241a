//! PostgreSQL 스키마에 대한 Diesel 테이블 정의
//!
//! 이 정의는 `migrations/` 아래의 마이그레이션과 정확히 일치해야 합니다.
//! Diesel이 컴파일 타임 쿼리 검증과 타입 안전한 SQL 생성에 사용합니다.
//! 스키마가 바뀌면 `diesel print-schema`로 재생성하거나 직접 갱신하세요.

diesel::table! {
    /// 사용자 계정 테이블
    ///
    /// 이름/이메일 검증이 끝난 사용자 레코드를 저장합니다.
    /// 이메일 유일성은 `lower(email)` 유니크 인덱스가 보장합니다.
    users (id) {
        /// 기본 키 (UUID v4, 저장소가 발급)
        id -> Uuid,
        /// 이름 (최대 100자)
        #[max_length = 100]
        first_name -> Varchar,
        /// 성 (최대 100자)
        #[max_length = 100]
        last_name -> Varchar,
        /// 이메일 주소 (최대 255자, 대소문자 무시 유니크)
        #[max_length = 255]
        email -> Varchar,
        /// 레코드 생성 시각
        created_at -> Timestamptz,
        /// 마지막 수정 시각
        updated_at -> Timestamptz,
    }
}
