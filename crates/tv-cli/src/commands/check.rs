use colored::Colorize;

pub fn run() -> Result<(), String> {
    let mut failed = 0;
    for quiz in tv_quiz::catalog() {
        match quiz.check() {
            Ok(()) => println!("  {} {}", "ok".green(), quiz.name),
            Err(e) => {
                println!("  {} {e}", "FAIL".red().bold());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        Err(format!(
            "{failed} quiz{} failed the check",
            if failed == 1 { "" } else { "zes" }
        ))
    } else {
        Ok(())
    }
}
