//! 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 회원가입 컨트롤러를 조립합니다.

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;
use log::{error, info};

use signup_service_backend::config::{
    CorsConfig, Environment, ProfileConfig, RateLimitConfig, ServerConfig,
};
use signup_service_backend::controllers::SignUpController;
use signup_service_backend::core::errors::{AppError, AppResult, ErrorContext};
use signup_service_backend::domain::dto::users::{SignUpRequest, SignUpResponse};
use signup_service_backend::protocols::Controller;
use signup_service_backend::routes::configure_all_routes;
use signup_service_backend::utils::display_terminal;
use signup_service_backend::utils::email_validator_adapter::EmailValidatorAdapter;

#[actix_web::main]
async fn main() -> AppResult<()> {
    // 환경 파일 로드 → 로깅 초기화 → 로드 결과 기록
    let env_file = load_env_file();
    init_logging();
    env_file.log();

    display_terminal::print_boxed_title("🚀 회원가입 서비스 시작");
    info!("🚀 회원가입 서비스 시작중... (환경: {:?})", Environment::current());

    display_terminal::print_step_start(1, "컨트롤러 조립");
    let controller = build_signup_controller();
    display_terminal::print_sub_task("SignUpController", "✅");

    info!("✅ 회원가입 컨트롤러가 준비되었습니다!");

    // HTTP 서버 시작
    display_terminal::print_step_start(2, "HTTP 서버 시작");
    start_http_server(controller).await
}

/// 회원가입 컨트롤러를 조립합니다
///
/// 운영 환경에서는 `validator` 크레이트 기반의 [`EmailValidatorAdapter`]를 주입합니다.
fn build_signup_controller() -> Arc<dyn Controller<SignUpRequest, SignUpResponse>> {
    let email_validator = Arc::new(EmailValidatorAdapter::new());

    Arc::new(SignUpController::new(email_validator))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    controller: Arc<dyn Controller<SignUpRequest, SignUpResponse>>,
) -> AppResult<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| AppError::InternalError("Rate Limiting 설정 생성 실패".to_string()))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    let controller_data = web::Data::from(controller);

    let server = HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(controller_data.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)
    .with_context(|| format!("{} 바인딩 실패", bind_address))?
    .workers(workers);

    display_terminal::print_startup_summary(
        &bind_address,
        &[("GET", "/health"), ("POST", "/api/v1/signup")],
    );
    info!("🌐 서버가 http://{} 에서 실행중입니다 (워커 {}개)", bind_address, workers);

    server.run().await.context("HTTP 서버 실행 오류")
}

/// 환경 파일 로드 결과
///
/// 로거 초기화 전에 만들어지므로 결과는 [`EnvFileLoad::log`]로 나중에 기록합니다.
struct EnvFileLoad {
    profile: String,
    file: &'static str,
    result: dotenv::Result<PathBuf>,
}

impl EnvFileLoad {
    fn log(&self) {
        info!("Current profile: {}", self.profile);

        match &self.result {
            Ok(path) => info!("{} 파일 로드 됨 ({})", self.file, path.display()),
            Err(e) => error!("{} 파일 로드 실패: {}", self.file, e),
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> EnvFileLoad {
    let profile = ProfileConfig::current();
    let file = ProfileConfig::env_file(&profile);
    let result = dotenv::from_filename(file);

    EnvFileLoad {
        profile,
        file,
        result,
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=signup_service_backend::controllers=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다 ([`CorsConfig`] 참고).
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
