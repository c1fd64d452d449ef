use crate::{Result, hub::Hub};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

const BANNER: &str = "Welcome to GovInfoHub!\n\
You can ask questions in any language, and GovInfoHub will respond in the same language.\n\
Type 'quit' or 'exit' to end the conversation.\n\n";

/// Interactive console loop: one question per line until `quit`, `exit`
/// or end of input.
pub async fn run<R, W>(hub: &Hub, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(BANNER.as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"You: ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed, leaving chat");
            break;
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            output.write_all(b"Exiting...\n").await?;
            break;
        }

        let reply = hub.reply(line).await?;
        output
            .write_all(format!("GovInfoHub ({}): {}\n", reply.language, reply.text).as_bytes())
            .await?;
    }

    output.flush().await?;
    Ok(())
}
