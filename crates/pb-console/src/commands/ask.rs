use pb_knowledge::FALLBACK_ANSWER;
use pb_session::AnswerSource;

/// Print the answer for one question, verbatim-matched against the
/// catalog. Unknown questions get the fixed fallback text.
pub async fn run(source: &dyn AnswerSource, question: &str) -> anyhow::Result<()> {
    let answer = source
        .answer(question)
        .await?
        .unwrap_or_else(|| FALLBACK_ANSWER.to_string());
    println!("{answer}");
    Ok(())
}
