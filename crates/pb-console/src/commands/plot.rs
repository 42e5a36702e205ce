use pb_knowledge::{plot_details, plot_not_found};
use pb_session::AnswerSource;

/// Print status/size/price for one plot number.
pub async fn run(source: &dyn AnswerSource, number: &str) -> anyhow::Result<()> {
    match source.plot(number).await? {
        Some(plot) => println!("{}", plot_details(&plot)),
        None => println!("{}", plot_not_found(number)),
    }
    Ok(())
}
