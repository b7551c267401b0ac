//! The `quizdesk init` command.

use std::path::Path;

use anyhow::{Context, Result};

use quizdesk_core::store::QuizStore;

/// Write the starter config to `config_path` and the sample quizzes to the
/// store's quiz file.
pub fn execute(store: &QuizStore, config_path: &Path) -> Result<()> {
    write_if_missing(config_path, SAMPLE_CONFIG)?;
    write_if_missing(store.quizzes_path(), SAMPLE_QUIZZES)?;

    println!("\nNext steps:");
    println!("  1. Edit {} to add your own categories", store.quizzes_path().display());
    println!("  2. Run: quizdesk validate");
    println!("  3. Run: quizdesk play");

    Ok(())
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdesk configuration

data_dir = "."
users_file = "users.txt"
quizzes_file = "quizzes.txt"
results_file = "results.txt"
"#;

const SAMPLE_QUIZZES: &str = "\
Math
2+2|4|3|5|22
3*3|9|6|12|33
10/2|5|2|20|8
7-4|3|4|11|2

Science
H2O is commonly called|water|salt|hydrogen|air
The closest star to Earth|The Sun|Proxima Centauri|Sirius|Polaris
Plants take in|carbon dioxide|oxygen|nitrogen|helium

Geography
Capital of France|Paris|Lyon|Marseille|Nice
Longest river in Africa|Nile|Congo|Niger|Zambezi
";
