use anyhow::Result;

use balcao_core::config::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("logging.level  = {}", config.logging.level);
    println!("logging.format = {:?}", config.logging.format);
    println!("reply.style    = {:?}", config.reply.style);
    Ok(())
}
