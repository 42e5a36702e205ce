use pb_session::AnswerSource;

/// Print the ordered subject menu.
pub async fn run(source: &dyn AnswerSource) -> anyhow::Result<()> {
    let subjects = source.subjects().await?;
    if subjects.is_empty() {
        println!("(no subjects loaded)");
        return Ok(());
    }
    for (i, subject) in subjects.iter().enumerate() {
        println!("{}. {subject}", i + 1);
    }
    Ok(())
}
