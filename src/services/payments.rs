//! Payment charge service

use super::client::{payload, Client};
use super::dispatch::Operation;
use super::transport::RequestOptions;
use crate::models::payments::*;
use crate::schema::Item;
use crate::utils::error::ClientResult;

const CREATE_CHARGE: Operation = Operation::post("payments.create_charge", "payments/v1/charges");
const LIST_CHARGES: Operation = Operation::get("payments.list_charges", "payments/v1/charges");
const RETRIEVE_CHARGE: Operation = Operation::get("payments.retrieve_charge", "payments/v1/charges/{id}");
const REFUND_CHARGE: Operation = Operation::post("payments.refund_charge", "payments/v1/charges/{id}/refund");

/// `payments/v1`
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    client: &'a Client,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a charge.
    ///
    /// Pass an idempotency key in `options` to make retries safe.
    pub async fn create_charge(
        &self,
        params: impl Into<Item<ChargeCreateParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Charge> {
        let body = payload::<ChargeCreateParams>(params.into())?;
        self.client.request(&CREATE_CHARGE, &[], Some(body), options).await
    }

    /// List charges
    pub async fn list_charges(
        &self,
        params: impl Into<Item<ChargeListParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<ChargeListResponse> {
        let query = payload::<ChargeListParams>(params.into())?;
        self.client.request(&LIST_CHARGES, &[], Some(query), options).await
    }

    /// Fetch a charge
    pub async fn retrieve_charge(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<Charge> {
        self.client.request(&RETRIEVE_CHARGE, &[id], None, options).await
    }

    /// Refund a charge fully or partially
    pub async fn refund_charge(
        &self,
        id: &str,
        params: impl Into<Item<RefundParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Charge> {
        let body = payload::<RefundParams>(params.into())?;
        self.client.request(&REFUND_CHARGE, &[id], Some(body), options).await
    }
}
