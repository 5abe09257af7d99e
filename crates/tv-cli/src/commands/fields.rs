use comfy_table::{ContentArrangement, Table};

use tv_core::Role;

pub fn run(quiz: &str, role: Option<Role>) -> Result<(), String> {
    let quiz = tv_quiz::find(quiz).map_err(|e| e.to_string())?;
    let fields: Vec<_> = (quiz.describe)()
        .into_iter()
        .filter(|f| role.is_none_or(|r| f.role() == r))
        .collect();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Shown as", "Role", "Kind"]);

    for field in &fields {
        table.add_row(vec![
            field.name().to_string(),
            field.display_name().to_string(),
            field.role().to_string(),
            field.value().kind().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} fields in {}", fields.len(), quiz.name);

    Ok(())
}
