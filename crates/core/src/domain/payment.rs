use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    InstantTransfer,
    Card,
    Voucher,
    RedirectWallet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Approved,
    Pending,
    Declined,
}

/// Card brand detected from the leading digit of the (space-stripped) number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Unknown,
}

impl CardBrand {
    pub fn detect(number: &str) -> Self {
        match number.as_bytes().first() {
            Some(b'4') => Self::Visa,
            Some(b'5') | Some(b'2') => Self::Mastercard,
            Some(b'3') => Self::Amex,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Unknown => "Desconhecida",
        }
    }
}

/// Method-specific artifacts of a simulated payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentPayload {
    InstantTransfer { qr_code: String },
    Card { authorization: String, brand: CardBrand },
    Voucher { typeable_line: String },
    RedirectWallet { redirect_url: String },
    Declined { reason: String },
}

/// Outcome of one simulated payment request. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAttempt {
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub requested_amount: Decimal,
    pub final_amount: Decimal,
    /// Absent only on declined attempts, which never reach the processor.
    pub reference: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub payload: PaymentPayload,
    pub instructions: String,
}
