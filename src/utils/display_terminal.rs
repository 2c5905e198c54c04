//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 상태 등을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// # Examples
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🔄 INITIALIZING SERVICE REGISTRY        ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// # Arguments
///
/// * `step` - 단계 번호 (1부터 시작)
/// * `description` - 단계 설명
pub fn print_step_start(step: u8, description: &str) {
    println!();
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// # Arguments
///
/// * `step` - 단계 번호
/// * `description` - 완료된 작업 설명
/// * `count` - 처리된 항목 수
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✔ Step {} 완료: {} ({}개)", step, description, count);
}

/// 하위 작업의 진행 상태를 출력합니다
///
/// # Arguments
///
/// * `name` - 작업 대상 이름 (서비스/리포지토리 이름)
/// * `status` - 현재 상태 문자열
pub fn print_sub_task(name: &str, status: &str) {
    println!("   • {:<24} {}", name, status);
}

/// 초기화 최종 요약을 출력합니다
///
/// 레지스트리 초기화가 끝난 뒤 생성된 컴포넌트 수를 요약합니다.
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    println!("┌──────────────────────────────────────┐");
    println!("│  Registry initialization complete    │");
    println!("│    Repositories : {:<4}               │", repos);
    println!("│    Services     : {:<4}               │", services);
    println!("└──────────────────────────────────────┘");
    println!();
}

/// 이름 캐시 초기화 완료를 출력합니다
///
/// # Arguments
///
/// * `cache_type` - 캐시 종류 ("Service" / "Repository")
/// * `count` - 등록된 항목 수
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("📋 {} name cache initialized: {}개 등록", cache_type, count);
}
