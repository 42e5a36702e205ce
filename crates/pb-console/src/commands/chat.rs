//! Interactive session loop: the button-driven UI rendered as numbered
//! menus over stdin/stdout.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use pb_protocol::{ChatMessage, ChatRole};
use pb_session::{AnswerSource, Session};

/// Run an interactive chat session until EOF or `quit`.
pub async fn run(source: &dyn AnswerSource) -> anyhow::Result<()> {
    let mut session = Session::new();
    for message in session.transcript() {
        print_message(message);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print_prompt(&session, source).await?;

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        match session.select(source, input).await {
            Ok(messages) => {
                for message in &messages {
                    print_message(message);
                }
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Show the current menu (or the free-text hint) and the input prompt.
async fn print_prompt(session: &Session, source: &dyn AnswerSource) -> anyhow::Result<()> {
    if session.state().expects_free_text() {
        println!();
        println!("(type a plot number, or 'quit' to leave)");
    } else {
        let options = session.options(source).await?;
        println!();
        println!("Choose an option:");
        for option in &options {
            println!("  [{}] {}", option.key, option.label);
        }
    }
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn print_message(message: &ChatMessage) {
    match message.role {
        ChatRole::User => println!("You: {}", message.content),
        ChatRole::Assistant => println!("PlotBot: {}", message.content),
    }
}
