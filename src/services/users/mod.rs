//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//! 검증은 도메인 엔티티에 위임하고, 서비스는 저장소 호출과 비즈니스
//! 규칙(이메일 중복 등)의 조율에 집중합니다.
//!
//! # Features
//!
//! - 사용자 생성 및 이메일 중복 방지
//! - ID 단건 조회와 전체 목록 조회
//! - 전체 교체 의미의 사용자 수정
//! - 존재 확인 후 삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let response = user_service.create_user(request).await?;
//! println!("사용자 생성: {}", response.id);
//! ```

pub mod user_service;
