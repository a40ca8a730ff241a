//! # Configuration Module
//!
//! 환경 변수를 읽는 코드를 한곳에 모아 둔 모듈입니다. 나머지 계층은
//! `env::var`를 직접 호출하지 않고 [`data_config`]의 타입들을 거칩니다.
//! Spring의 `@Configuration` + Profile 조합이 맡는 역할입니다.
//!
//! 설정값 해석에는 두 가지 규칙이 있습니다:
//!
//! - 모든 값에 기본값이 있습니다. 파싱에 실패해도 기동은 계속됩니다.
//! - 환경(Profile)별 기본값이 다릅니다 — 개발/테스트는 외부 의존성
//!   없이 바로 실행되도록 인메모리 저장소가 기본이고,
//!   스테이징/프로덕션은 PostgreSQL이 기본입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, StorageConfig};
//!
//! // 현재 환경 확인
//! let env = Environment::current();
//! println!("Current environment: {:?}", env);
//!
//! // 서버 설정
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//! println!("Server will bind to {}:{}", host, port);
//!
//! // 저장소 백엔드 선택
//! if StorageConfig::use_in_memory() {
//!     println!("인메모리 저장소 사용");
//! }
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"   # development, test, staging, production
//!
//! # 저장소 설정
//! export USE_IN_MEMORY_STORE="false"
//! export DATABASE_URL="postgres://localhost:5432/user_service_dev"
//! export DATABASE_POOL_SIZE="8"
//! ```
//!
//! ## Spring과의 대응 관계
//!
//! | 이 시스템 | Spring 대응물 |
//! |-----------|---------------|
//! | `ServerConfig` / `StorageConfig` | `@ConfigurationProperties` 클래스 |
//! | `Environment::current()` | 활성 `@Profile` 조회 |
//! | `.env.dev` / `.env.prod` (dotenv) | `application-{profile}.yml` |

pub mod data_config;

pub use data_config::*;
