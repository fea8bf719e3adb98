use std::io::{self, BufRead, Write};

use anyhow::Result;

use balcao_agent::{is_exit, AgentRuntime};
use balcao_core::config::AppConfig;
use balcao_core::sessions::SessionId;

/// Interactive loop. Exit keywords are recognized here, at the transport,
/// before the engine ever sees the message.
pub fn run(config: &AppConfig, session: &str) -> Result<()> {
    let mut runtime = AgentRuntime::new(config.reply.style);
    let session = SessionId(session.to_owned());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Assistente de compras iniciado! Digite 'sair' para encerrar.\n")?;

    let mut line = String::new();
    loop {
        write!(stdout, "Você: ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if is_exit(message) {
            writeln!(stdout, "Obrigado por usar nosso assistente! Até logo!")?;
            break;
        }

        let reply = runtime.handle_message(&session, message);
        writeln!(stdout, "Assistente: {reply}\n")?;
    }
    Ok(())
}
