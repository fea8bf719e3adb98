use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;

use balcao_agent::AgentRuntime;
use balcao_core::config::AppConfig;
use balcao_core::domain::payment::PaymentMethod;
use balcao_core::payment::PaymentRequest;

pub fn run(config: &AppConfig, method: &str, amount: &str, card_number: Option<&str>) -> Result<()> {
    let method = parse_method(method)?;
    let amount: Decimal =
        amount.parse().with_context(|| format!("invalid amount `{amount}`"))?;
    if amount <= Decimal::ZERO {
        return Err(anyhow!("amount must be positive"));
    }

    let request = PaymentRequest {
        method,
        amount,
        card_number: card_number.map(str::to_owned),
    };

    let runtime = AgentRuntime::new(config.reply.style);
    let attempt = runtime
        .simulate_payment(&request, &mut rand::thread_rng())
        .context("payment simulation refused the request")?;

    println!("{}", runtime.render_payment(&attempt));
    Ok(())
}

fn parse_method(raw: &str) -> Result<PaymentMethod> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pix" | "instant-transfer" => Ok(PaymentMethod::InstantTransfer),
        "card" | "cartao" => Ok(PaymentMethod::Card),
        "voucher" | "boleto" => Ok(PaymentMethod::Voucher),
        "wallet" | "carteira" => Ok(PaymentMethod::RedirectWallet),
        other => Err(anyhow!("unknown payment method `{other}` (expected pix|card|voucher|wallet)")),
    }
}
