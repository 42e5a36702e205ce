use anyhow::bail;

use pb_session::AnswerSource;

/// Print the ordered questions for one subject.
pub async fn run(source: &dyn AnswerSource, subject: &str) -> anyhow::Result<()> {
    let Some(questions) = source.questions(subject).await? else {
        bail!("subject '{subject}' not found");
    };
    for (i, question) in questions.iter().enumerate() {
        println!("{}. {question}", i + 1);
    }
    Ok(())
}
