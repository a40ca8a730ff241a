//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 환경 설정에 따라 인메모리 저장소 또는 PostgreSQL 연결을 선택하고
//! 사용자 CRUD REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::{dotenv};
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::{ServerConfig, StorageConfig};
use user_service_backend::db::Database;
use user_service_backend::repositories::users::memory_repo::InMemoryUserRepository;
use user_service_backend::repositories::users::pg_repo::PgUserRepository;
use user_service_backend::repositories::users::user_repo::UserRepository;
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::user_service::UserService;
use user_service_backend::utils::display_terminal::print_startup_summary;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 관리 서비스 시작중...");

    // 저장소 백엔드 선택 및 서비스 초기화
    let (user_service, storage_label) = initialize_user_service().await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service, storage_label).await
}

/// 저장소 백엔드를 선택하고 사용자 서비스를 초기화합니다
///
/// 환경 설정에 따라 인메모리 저장소 또는 PostgreSQL 리포지토리를 생성하고,
/// 이를 주입받은 [`UserService`]를 `web::Data`로 래핑하여 반환합니다.
/// 상위 계층은 어느 백엔드가 선택되었는지 알지 못합니다.
///
/// # Returns
///
/// * `(web::Data<UserService>, &'static str)` - 공유 사용자 서비스와 선택된 저장소 라벨
///
/// # Panics
///
/// * PostgreSQL 백엔드 선택 시 데이터베이스 연결 실패하면 종료됩니다
///
/// # Examples
///
/// ```bash
/// # 인메모리 저장소로 실행 (외부 의존성 없음)
/// USE_IN_MEMORY_STORE=true cargo run
///
/// # PostgreSQL로 실행
/// USE_IN_MEMORY_STORE=false DATABASE_URL=postgres://localhost/user_service_dev cargo run
/// ```
async fn initialize_user_service() -> (web::Data<UserService>, &'static str) {
    let (user_repo, storage_label): (Arc<dyn UserRepository>, &'static str) =
        if StorageConfig::use_in_memory() {
            info!("📦 인메모리 저장소 사용 (샘플 사용자 3명 포함)");

            (Arc::new(InMemoryUserRepository::with_sample_data()), "In-Memory")
        } else {
            info!("📡 PostgreSQL 연결 중...");

            let database = Arc::new(
                Database::new()
                    .await
                    .expect("데이터베이스 연결 실패")
            );

            (Arc::new(PgUserRepository::new(database)), "PostgreSQL")
        };

    (web::Data::new(UserService::new(user_repo)), storage_label)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting → CORS → 요청 로깅 → 경로 정규화 순서로 미들웨어를
/// 쌓고, 공유 사용자 서비스를 앱 상태로 등록한 뒤 바인딩합니다.
///
/// # Arguments
///
/// * `user_service` - 모든 워커가 공유할 사용자 서비스
/// * `storage_label` - 기동 요약에 표시할 저장소 백엔드 라벨
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    storage_label: &str,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    print_startup_summary(storage_label, &bind_address);

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 루트: http://{}/api/v1/users", bind_address);

    let rate_limit = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // 한도 초과 요청은 미들웨어 체인 맨 앞에서 잘라낸다
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 공유 애플리케이션 상태
            .app_data(user_service.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수로 프로필을 정하고 대응하는 .env 파일을 읽습니다:
/// `dev`(기본값) → `.env.dev`, `prod` → `.env.prod`, 그 외 → 기본 `.env`.
/// 파일이 없어도 치명적이지 않습니다 — 이미 설정된 환경 변수만으로
/// 계속 진행합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("실행 프로필: {}", profile);

    let env_file = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
            return;
        }
    };

    match dotenv::from_filename(env_file) {
        Ok(_) => info!("{} 파일 로드 됨", env_file),
        Err(e) => error!("{} 파일 로드 실패: {}", env_file, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 "info,actix_web=debug"를 기본 필터로 씁니다.
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=user_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 개발용 Origin(프론트엔드 개발 서버 3000번, 자체 서버 8080번)
/// 간 통신을 허용합니다. 자격 증명을 지원하고 Preflight 응답은
/// 3600초 동안 캐시됩니다.
fn configure_cors() -> Cors {
    let dev_origins = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in dev_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

/// 환경변수 값을 파싱하고, 없거나 잘못된 값이면 기본값으로 돌아갑니다
fn env_parse<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
///
/// # Examples
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
///
/// # .env.prod (운영 환경)
/// RATE_LIMIT_PER_SECOND=500
/// RATE_LIMIT_BURST_SIZE=1000
/// ```
fn load_rate_limit_config() -> RateLimitConfig {
    let config = RateLimitConfig {
        per_second: env_parse("RATE_LIMIT_PER_SECOND", 100),
        burst_size: env_parse("RATE_LIMIT_BURST_SIZE", 200),
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
