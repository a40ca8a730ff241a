//! 저장소 및 서버 설정 관리 모듈
//!
//! 환경 변수 기반 설정을 세 묶음으로 나눠 제공합니다:
//! 실행 환경 감지(`Environment`), 저장소 백엔드 선택(`StorageConfig`),
//! 서버 바인딩(`ServerConfig`).

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 자동화된 테스트 환경
    Test,
    /// 프로덕션 유사 검증 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT`를 먼저 보고, 없으면 `NODE_ENV`를 봅니다.
    /// 둘 다 없거나 알 수 없는 값이면 안전한 쪽인 `Production`으로
    /// 간주합니다 (프로덕션 기본값이 실수로 인메모리 저장소를 켜는
    /// 것보다 낫습니다).
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&raw)
    }

    /// 환경 이름 문자열(대소문자 무관)을 `Environment`로 해석합니다.
    ///
    /// 축약형(`dev`, `stage` 등)도 허용하며, 해석할 수 없는 값은
    /// `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 저장소 백엔드 선택 설정
///
/// 서비스 기동 시 인메모리 저장소와 PostgreSQL 중 하나를 선택합니다.
/// 두 백엔드는 동일한 리포지토리 계약을 구현하므로 상위 계층은
/// 어느 쪽이 선택되었는지 알지 못합니다.
pub struct StorageConfig;

impl StorageConfig {
    /// 인메모리 저장소 사용 여부를 반환합니다.
    ///
    /// `USE_IN_MEMORY_STORE`가 "true"/"false"로 설정돼 있으면 그 값을
    /// 그대로 따르고, 없거나 해석 불가능하면 실행 환경별 기본값으로
    /// 넘어갑니다:
    ///
    /// - Development/Test → 인메모리 (외부 의존성 없이 바로 실행)
    /// - Staging/Production → PostgreSQL
    pub fn use_in_memory() -> bool {
        if let Ok(flag_str) = env::var("USE_IN_MEMORY_STORE") {
            if let Ok(flag) = flag_str.to_lowercase().parse::<bool>() {
                return flag;
            }
        }

        Self::use_in_memory_for_env(&Environment::current())
    }

    /// 특정 환경의 기본 저장소 백엔드를 반환합니다.
    ///
    /// `true`면 해당 환경의 기본값이 인메모리 저장소입니다.
    pub fn use_in_memory_for_env(env: &Environment) -> bool {
        match env {
            Environment::Development => true,
            Environment::Test => true,
            Environment::Staging => false,
            Environment::Production => false,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. `PORT` 환경 변수, 기본값 8080.
    ///
    /// 숫자로 해석되지 않는 값도 기본값으로 처리합니다.
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트. `HOST` 환경 변수, 기본값 "0.0.0.0".
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("Development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("testing"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("무엇인가-이상한-값"), Environment::Production);
    }

    #[test]
    fn test_storage_backend_for_each_environment() {
        assert!(StorageConfig::use_in_memory_for_env(&Environment::Development));
        assert!(StorageConfig::use_in_memory_for_env(&Environment::Test));
        assert!(!StorageConfig::use_in_memory_for_env(&Environment::Staging));
        assert!(!StorageConfig::use_in_memory_for_env(&Environment::Production));
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
