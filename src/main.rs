use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sentiment_dashboard::app::run()
        .await
        .context("sentiment dashboard exited with an error")
}
