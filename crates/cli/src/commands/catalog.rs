use anyhow::Result;

use balcao_agent::Formatter;
use balcao_core::catalog;
use balcao_core::config::AppConfig;

pub fn run(config: &AppConfig, plans: bool) -> Result<()> {
    let catalog = catalog::seed();
    let formatter = Formatter::new(config.reply.style);

    if plans {
        println!("{}", formatter.plan_catalog(&catalog));
    } else {
        println!("{}", formatter.product_catalog(&catalog));
    }
    Ok(())
}
