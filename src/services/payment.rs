//! payment.rs
//!
//! Сервисный слой оплаты. Реального платёжного шлюза у проекта нет:
//! форма оплаты — витрина, и единственная реализация `PaymentGateway`
//! безусловно подтверждает списание. Шов оставлен явным, чтобы живой
//! шлюз можно было подставить, не трогая мастер бронирования и
//! контроллеры.

use futures::future::BoxFuture;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::config::PaymentConfig;

/// Карточные поля формы оплаты. Проверяется только заполненность;
/// номер карты никуда не отправляется и нигде не сохраняется.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub cardholder: String,
}

#[derive(Debug, Clone)]
pub struct ChargeRequest {
    pub user_id: Uuid,
    pub amount: i64,
    pub currency: String,
    pub description: String,
    pub card: CardDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChargeOutcome {
    pub payment_id: String,
    pub amount: i64,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment was declined: {0}")]
    Declined(String),
    #[error("Payment gateway is unavailable")]
    Unavailable,
}

pub trait PaymentGateway: Send + Sync {
    fn charge(&self, request: ChargeRequest) -> BoxFuture<'_, Result<ChargeOutcome, PaymentError>>;
}

/// Шлюз-симулятор: одобряет любой платёж и выдаёт ссылку на операцию.
pub struct SimulatedGateway {
    merchant_id: String,
}

impl SimulatedGateway {
    pub fn from_config(config: &PaymentConfig) -> Self {
        Self {
            merchant_id: config.merchant_id.clone(),
        }
    }

    // Ссылка на платёж в духе подписи запроса к шлюзу: sha256 от полей
    // операции плюс случайная составляющая
    fn payment_reference(&self, user_id: Uuid, amount: i64) -> String {
        let token_string = format!("{}{}{}{}", self.merchant_id, user_id, amount, Uuid::new_v4());
        let mut hasher = Sha256::new();
        hasher.update(token_string.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        format!("pay-{}", &digest[..24])
    }
}

impl PaymentGateway for SimulatedGateway {
    fn charge(&self, request: ChargeRequest) -> BoxFuture<'_, Result<ChargeOutcome, PaymentError>> {
        let payment_id = self.payment_reference(request.user_id, request.amount);
        Box::pin(async move {
            info!(
                "Simulated charge approved: payment_id={}, amount={} {}",
                payment_id, request.amount, request.currency
            );
            Ok(ChargeOutcome {
                payment_id,
                amount: request.amount,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> SimulatedGateway {
        SimulatedGateway {
            merchant_id: "pallet-pass-test".to_string(),
        }
    }

    fn request(amount: i64) -> ChargeRequest {
        ChargeRequest {
            user_id: Uuid::new_v4(),
            amount,
            currency: "INR".to_string(),
            description: "Museum visit".to_string(),
            card: CardDetails {
                number: "4111 1111 1111 1111".to_string(),
                expiry: "12/30".to_string(),
                cvv: "123".to_string(),
                cardholder: "A Visitor".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn simulated_charge_always_succeeds() {
        let outcome = gateway().charge(request(5000)).await.unwrap();
        assert_eq!(outcome.amount, 5000);
        assert!(outcome.payment_id.starts_with("pay-"));
    }

    #[tokio::test]
    async fn payment_references_are_unique_per_charge() {
        let gateway = gateway();
        let first = gateway.charge(request(2000)).await.unwrap();
        let second = gateway.charge(request(2000)).await.unwrap();
        assert_ne!(first.payment_id, second.payment_id);
    }
}
