//! 터미널 출력 포맷팅 유틸리티
//!
//! 초기화 절차 진행 상황을 터미널에 출력하는 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 상태 등을 시각적으로 표현합니다.

/// 박스 내부 콘텐츠 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 생성합니다
///
/// # Examples
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             STARTER KIT DATABASE INIT            ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    format!(
        "╔{}╗\n║{:^width$}║\n╚{}╝",
        border,
        title,
        border,
        width = CONTENT_WIDTH
    )
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 2: Create application user
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 4: Create indexes (2 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 진행 단계 실패를 표시합니다
///
/// ```text
/// ✗ Step 2: Create application user
///    └─ Duplicate entity: User "app_user@starter_kit" already exists
/// ```
pub fn print_step_failed(step: u8, description: &str, error: &str) {
    println!("✗ Step {}: {}", step, description);
    println!("   └─ {}", error);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ email_1: unique
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 최종 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║            🎉 DATABASE INITIALIZED               ║
/// ╚══════════════════════════════════════════════════╝
///    🗄️ Database: starter_kit
///    👤 User: app_user (2 roles)
///    📁 Collection: users
///    🔑 Indexes: email_1, is_active_1
/// ```
pub fn print_final_summary(database: &str, user: &str, roles: usize, collection: &str, indexes: &[String]) {
    println!();
    print_boxed_title("🎉 DATABASE INITIALIZED");
    println!("   🗄️ Database: {}", database);
    println!("   👤 User: {} ({} roles)", user, roles);
    println!("   📁 Collection: {}", collection);
    println!("   🔑 Indexes: {}", indexes.join(", "));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let title = boxed_title("INIT");
        let lines: Vec<&str> = title.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert!(lines[1].contains(" INIT "));
    }
}
