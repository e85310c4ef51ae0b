//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 부트스트랩 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 라우트 요약 등을 시각적으로 표현합니다.

const BOX_CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// 텍스트는 테두리와 같은 너비 안에서 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Signup Service                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_CONTENT_WIDTH);

    format!(
        "╔{}╗\n║{:^width$}║\n╚{}╝",
        border,
        title,
        border,
        width = BOX_CONTENT_WIDTH
    )
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Loading configuration
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ Email validator: validator::ValidateEmail
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 기동 완료 요약을 출력합니다
///
/// # Arguments
///
/// * `bind_address` - 서버가 바인딩한 주소
/// * `routes` - `(메서드, 경로)` 목록
pub fn print_startup_summary(bind_address: &str, routes: &[(&str, &str)]) {
    println!();
    print_boxed_title("🚀 SIGNUP SERVICE READY");
    println!("   🌐 Listening: http://{}", bind_address);
    for (method, path) in routes {
        println!("   📍 {:<6} {}", method, path);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_lines_have_equal_width() {
        let boxed = format_boxed_title("Signup Service");
        let widths: Vec<usize> = boxed.lines().map(|line| line.chars().count()).collect();

        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(boxed.contains("Signup Service"));
    }
}
