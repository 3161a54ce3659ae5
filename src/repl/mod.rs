//! Interactive question loop
//!
//! Minimal rustyline session: each line is answered through the advisor,
//! `exit`/`quit` or Ctrl-D leaves. History lives only in the session.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::advisor::PhoneAdvisor;

const PROMPT: &str = "phonesage> ";

/// Run the interactive loop until the user leaves
pub async fn run(advisor: &PhoneAdvisor) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!(
        "{}",
        "Ask about Samsung phones: specs, comparisons, recommendations.".bold()
    );
    println!("{}", "Type 'exit' to leave.\n".dimmed());

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let question = line.trim();
                if question.is_empty() {
                    continue;
                }
                if question == "exit" || question == "quit" {
                    break;
                }
                let _ = editor.add_history_entry(question);

                let answer = advisor.answer(question).await;
                println!("\n{answer}\n");
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Input error: {err}").red());
                break;
            }
        }
    }

    Ok(())
}
