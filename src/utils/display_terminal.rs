//! 기동 배너용 터미널 출력 유틸리티
//!
//! 로그 스트림과 별개로, 서버가 어떤 구성으로 떠올랐는지를 사람이
//! 한눈에 읽을 수 있게 stdout에 박스 배너를 그립니다. 출력 형식만
//! 담당하며 내용(저장소 라벨, 바인드 주소)은 호출자가 정합니다.

/// 박스 안에 제목을 넣어 출력합니다
///
/// # Arguments
///
/// * `title` - 출력할 제목 문자열
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("System Started");
/// ```
///
/// Output:
/// ```text
/// ╔════════════════════════════════════════════════════╗
/// ║                   System Started                   ║
/// ╚════════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 내부 너비 52칸. 중앙 정렬은 한 칸 줄여서 이모지(터미널에서
    // 두 칸 차지)가 섞인 제목의 우측 테두리가 밀리지 않게 한다.
    const INNER_WIDTH: usize = 52;

    println!("╔{}╗", "═".repeat(INNER_WIDTH));
    println!("║{:^width$}║", title, width = INNER_WIDTH - 1);
    println!("╚{}╝", "═".repeat(INNER_WIDTH));
}

/// 트리 가지 모양으로 항목 하나를 출력합니다
///
/// # Arguments
///
/// * `name` - 항목 이름
/// * `status` - 항목 값 또는 상태
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_sub_task;
///
/// print_sub_task("Storage", "In-Memory");
/// print_sub_task("Bind", "127.0.0.1:8080");
/// ```
///
/// Output:
/// ```text
///    ├─ Storage: In-Memory
///    ├─ Bind: 127.0.0.1:8080
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서비스 기동 완료 요약을 출력합니다
///
/// 선택된 저장소 백엔드와 바인드 주소를 배너 아래에 붙여 출력합니다.
/// 서버가 요청을 받기 직전, 기동 경로에서 한 번만 호출됩니다.
///
/// # Arguments
///
/// * `storage` - 선택된 저장소 백엔드 (예: "In-Memory", "PostgreSQL")
/// * `bind_address` - HTTP 서버 바인드 주소
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_startup_summary;
///
/// print_startup_summary("In-Memory", "127.0.0.1:8080");
/// ```
///
/// Output:
/// ```text
/// ╔════════════════════════════════════════════════════╗
/// ║             🎉 USER SERVICE INITIALIZED             ║
/// ╚════════════════════════════════════════════════════╝
///    ├─ Storage: In-Memory
///    ├─ Bind: 127.0.0.1:8080
/// ```
pub fn print_startup_summary(storage: &str, bind_address: &str) {
    println!();
    print_boxed_title("🎉 USER SERVICE INITIALIZED");
    print_sub_task("Storage", storage);
    print_sub_task("Bind", bind_address);
    println!();
}
