use log::{debug, info};
use pantry_finder::{FinderConfig, RecipeFinder};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = FinderConfig::load()?;
    debug!("{:#?}", config);

    let mut session = RecipeFinder::builder().config(config).build().await?;
    info!("Session ready");

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    stdout
        .write_all(b"Food Scanner - type 'help' for commands\n> ")
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
            continue;
        }
        match session.handle_line(&line).await {
            Some(output) => {
                stdout.write_all(output.trim_end().as_bytes()).await?;
                stdout.write_all(b"\n> ").await?;
                stdout.flush().await?;
            }
            None => break,
        }
    }

    Ok(())
}
