//! 서버 및 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, CORS, Rate Limiting 관련 설정을 관리합니다.

use std::convert::Infallible;
use std::env;
use std::str::FromStr;

use log::{error, info};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        raw.parse().unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값인 경우 `Production`을 반환합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        })
    }
}

/// `.env` 프로필 설정
pub struct ProfileConfig;

impl ProfileConfig {
    /// 현재 프로필 이름
    ///
    /// # Environment Variables
    ///
    /// - `PROFILE`: `dev` | `prod` | 기타 (기본값: "dev")
    pub fn current() -> String {
        env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    }

    /// 프로필에 대응하는 환경 파일 이름을 반환합니다.
    ///
    /// 알 수 없는 프로필은 기본 `.env` 파일을 사용합니다.
    pub fn env_file(profile: &str) -> &'static str {
        match profile {
            "prod" => ".env.prod",
            "dev" => ".env.dev",
            _ => ".env",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// actix 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: &'static str =
        "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080";

    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    ///   (기본값: 로컬 개발 서버 3000/8080 포트)
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| Self::DEFAULT_ORIGINS.to_string());

        Self::parse_origins(&raw)
    }

    /// 쉼표로 구분된 Origin 문자열을 파싱합니다. 빈 항목은 버립니다.
    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    const DEFAULT_PER_SECOND: u64 = 100;
    const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        let config = Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        );

        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }

    /// 문자열 값에서 설정을 만듭니다. 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = match per_second.map(str::parse::<u64>) {
            Some(Ok(v)) if v > 0 => v,
            Some(_) => {
                error!(
                    "RATE_LIMIT_PER_SECOND 파싱 실패. 기본값 {} 사용",
                    Self::DEFAULT_PER_SECOND
                );
                Self::DEFAULT_PER_SECOND
            }
            None => Self::DEFAULT_PER_SECOND,
        };

        let burst_size = match burst_size.map(str::parse::<u32>) {
            Some(Ok(v)) if v > 0 => v,
            Some(_) => {
                error!(
                    "RATE_LIMIT_BURST_SIZE 파싱 실패. 기본값 {} 사용",
                    Self::DEFAULT_BURST_SIZE
                );
                Self::DEFAULT_BURST_SIZE
            }
            None => Self::DEFAULT_BURST_SIZE,
        };

        Self {
            per_second,
            burst_size,
        }
    }
}
