use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use finny_chat::app::{App, Phase};
use finny_chat::config::ClientConfig;
use finny_chat::session::SessionId;
use finny_chat::surface::{Surface, TerminalSurface};
use finny_chat::transport::ApiClient;
use finny_chat::wizard::default_steps;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;

    eprintln!("🏠 Finny chat v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", config.api_base);
    eprintln!("   Wizard: answer by number, n = next, p = previous.");
    eprintln!("   Chat: type a message; a bare number picks a suggestion. /quit to exit.\n");

    let backend = Arc::new(ApiClient::new(&config)?);
    let mut surface = TerminalSurface::new();
    let mut app = App::new(SessionId::generate(), default_steps(), backend);

    app.start(&mut surface);

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" {
            break;
        }

        match app.phase() {
            Phase::Asking => match line.as_str() {
                "n" | "next" => app.next(&mut surface).await,
                "p" | "prev" | "previous" => app.previous(&mut surface),
                other => match other.parse::<usize>() {
                    Ok(n) if n >= 1 => app.select_option(&mut surface, n - 1),
                    _ => surface.notice("Pick an option number, n for next, p for previous."),
                },
            },
            // Transient; the loop never observes it.
            Phase::Priming => {}
            Phase::Chatting => {
                if let Ok(n) = line.parse::<usize>() {
                    if n >= 1 && n <= app.chips().len() {
                        app.submit_chip(&mut surface, n - 1).await;
                        continue;
                    }
                }
                app.submit_text(&mut surface, &line).await;
            }
        }
    }

    Ok(())
}
