//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 필드 검증을 스스로 수행하는 User 엔티티를 포함합니다.
//!
//! # 주요 구성 요소
//!
//! ### User Entity
//! - **순서 있는 검증**: 이름 쌍(firstName → lastName) 다음 이메일 순으로
//!   첫 번째 위반 규칙에서 중단
//! - **누락/빈 값 구분**: `Option` 입력으로 null과 빈 문자열을 구분
//! - **원자적 변경**: 검증 실패 시 기존 값 유지
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(
//!     Some("Matti"),
//!     Some("Meikäläinen"),
//!     Some("matti@example.com"),
//! )?;
//!
//! assert_eq!(user.first_name(), "Matti");
//! assert!(user.id().is_none()); // id는 리포지토리가 부여
//! ```

pub mod user;
