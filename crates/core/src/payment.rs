//! Four-branch payment simulation. No branch touches shared state; every
//! draw comes from the injected generator so outcomes can be forced in
//! tests (spec: approval odds, generated codes).

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::domain::payment::{
    CardBrand, PaymentAttempt, PaymentMethod, PaymentPayload, PaymentStatus,
};
use crate::errors::{EngineError, EngineResult};

/// Flat discount applied to instant transfers.
const INSTANT_TRANSFER_FACTOR: Decimal = Decimal::from_parts(95, 0, 0, false, 2);
/// Issuer approval odds for the card branch.
const CARD_APPROVAL_ODDS: f64 = 0.90;

const WALLET_CHECKOUT_BASE: &str = "https://wallet.example.com/checkout";

/// Caller-facing payment request (spec §6).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub card_number: Option<String>,
}

/// Dispatches to the branch named by the request. `InvalidInput` only when
/// the card branch is selected without a card number; business declines are
/// reported inside the returned attempt, as the processor would.
pub fn simulate(
    request: &PaymentRequest,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> EngineResult<PaymentAttempt> {
    match request.method {
        PaymentMethod::InstantTransfer => Ok(instant_transfer(request.amount, now, rng)),
        PaymentMethod::Card => {
            let number = request
                .card_number
                .as_deref()
                .ok_or(EngineError::InvalidInput("o número do cartão"))?;
            Ok(card(request.amount, number, rng))
        }
        PaymentMethod::Voucher => Ok(voucher(request.amount, now, rng)),
        PaymentMethod::RedirectWallet => Ok(redirect_wallet(request.amount, rng)),
    }
}

/// PIX-style transfer: always approved, 5% discount, pay within 30 minutes.
pub fn instant_transfer(
    amount: Decimal,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> PaymentAttempt {
    let reference = format!("PIX{}", digit_run(rng, 6));
    let qr_code = format!("00020126580014BR.GOV.BCB.PIX{reference}");

    PaymentAttempt {
        method: PaymentMethod::InstantTransfer,
        status: PaymentStatus::Approved,
        requested_amount: amount,
        final_amount: amount * INSTANT_TRANSFER_FACTOR,
        reference: Some(reference),
        expires_at: Some(now + Duration::minutes(30)),
        payload: PaymentPayload::InstantTransfer { qr_code },
        instructions: "Pague em até 30 minutos para garantir o desconto".to_owned(),
    }
}

/// Card charge: local length validation first, then a simulated issuer
/// decision at 90% approval. The amount is never discounted.
pub fn card(amount: Decimal, card_number: &str, rng: &mut impl Rng) -> PaymentAttempt {
    let number: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if number.len() < 16 {
        return declined(PaymentMethod::Card, amount, "Número do cartão inválido");
    }

    if rng.gen::<f64>() < CARD_APPROVAL_ODDS {
        let transaction_id = format!("TXN{}", alnum_run(rng, 8));
        let authorization = format!("AUTH{}", digit_run(rng, 6));
        PaymentAttempt {
            method: PaymentMethod::Card,
            status: PaymentStatus::Approved,
            requested_amount: amount,
            final_amount: amount,
            reference: Some(transaction_id),
            expires_at: None,
            payload: PaymentPayload::Card { authorization, brand: CardBrand::detect(&number) },
            instructions: "Pagamento aprovado no cartão".to_owned(),
        }
    } else {
        declined(PaymentMethod::Card, amount, "Transação não autorizada pelo emissor")
    }
}

/// Deferred voucher (boleto): always pending until paid, due in 3 days.
pub fn voucher(amount: Decimal, now: DateTime<Utc>, rng: &mut impl Rng) -> PaymentAttempt {
    let barcode = digit_run(rng, 47);
    PaymentAttempt {
        method: PaymentMethod::Voucher,
        status: PaymentStatus::Pending,
        requested_amount: amount,
        final_amount: amount,
        reference: Some(barcode.clone()),
        expires_at: Some(now + Duration::days(3)),
        payload: PaymentPayload::Voucher { typeable_line: typeable_line(&barcode) },
        instructions: "Pague em qualquer banco ou lotérica".to_owned(),
    }
}

/// Hosted-wallet redirect: approved immediately, settlement happens on the
/// wallet side behind the returned URL.
pub fn redirect_wallet(amount: Decimal, rng: &mut impl Rng) -> PaymentAttempt {
    let external_id = format!("PP{}", alnum_run(rng, 10));
    let redirect_url = format!("{WALLET_CHECKOUT_BASE}/{external_id}");

    PaymentAttempt {
        method: PaymentMethod::RedirectWallet,
        status: PaymentStatus::Approved,
        requested_amount: amount,
        final_amount: amount,
        reference: Some(external_id),
        expires_at: None,
        payload: PaymentPayload::RedirectWallet { redirect_url },
        instructions: "Conclua o pagamento na página da carteira digital".to_owned(),
    }
}

fn declined(method: PaymentMethod, amount: Decimal, reason: &str) -> PaymentAttempt {
    PaymentAttempt {
        method,
        status: PaymentStatus::Declined,
        requested_amount: amount,
        final_amount: amount,
        reference: None,
        expires_at: None,
        payload: PaymentPayload::Declined { reason: reason.to_owned() },
        instructions: "Verifique os dados e tente novamente".to_owned(),
    }
}

/// Fixed-width grouping of the 47-digit barcode into the typeable form:
/// 5.5 5.6 5.6 1 14.
fn typeable_line(barcode: &str) -> String {
    debug_assert_eq!(barcode.len(), 47);
    format!(
        "{}.{} {}.{} {}.{} {} {}",
        &barcode[..5],
        &barcode[5..10],
        &barcode[10..15],
        &barcode[15..21],
        &barcode[21..26],
        &barcode[26..32],
        &barcode[32..33],
        &barcode[33..],
    )
}

fn digit_run(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
}

fn alnum_run(rng: &mut impl Rng, len: usize) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..len).map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())])).collect()
}
