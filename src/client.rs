//! Mini Cache client
//!
//! Sends one command line to the server and prints the reply.

use anyhow::{bail, Context};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use mini_cache::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("Usage: mini_cache_client <COMMAND> [ARG] [REMAINDER...]");
    }
    let request = args.join(" ");

    let address = Config::from_env().address();
    let stream = TcpStream::connect(&address)
        .await
        .with_context(|| format!("failed to connect to {}", address))?;
    let (reader, mut writer) = stream.into_split();

    writer.write_all(format!("{}\n", request).as_bytes()).await?;
    writer.flush().await?;

    let mut response = String::new();
    BufReader::new(reader).read_line(&mut response).await?;
    if response.is_empty() {
        bail!("server closed the connection without replying");
    }
    print!("{}", response);

    Ok(())
}
