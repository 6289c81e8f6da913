//! List rules command implementation.

use prose_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - PL001, PL003 (default)");
    println!("  strict       - All rules, PL001/PL003 at error severity");
    println!("  minimal      - PL001 only (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  prose-lint check --rules doc-paragraph-shape,doc-label-shape");
    println!("  prose-lint check --rules PL001,PL002");
}
