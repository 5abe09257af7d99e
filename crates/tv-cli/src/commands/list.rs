use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let quizzes = tv_quiz::catalog();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Description", "Generators"]);

    for quiz in quizzes {
        table.add_row(vec![
            quiz.name.to_string(),
            quiz.description.to_string(),
            quiz.generators.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} quizzes", quizzes.len());

    Ok(())
}
