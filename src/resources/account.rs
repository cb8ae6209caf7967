//! 账户余额与交易记录

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::http::Client;
use crate::resources::NO_PARAMS;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub balance: String,
    pub account_type: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub time: Option<DateTime<Utc>>,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub units: Option<u64>,
    pub product_type: Option<String>,
    pub number: Option<String>,
}

/// 交易记录查询条件
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// GET /users/{userId}/account
pub async fn get(client: &Client) -> Result<Account> {
    client
        .get_user_resource(&["account"], NO_PARAMS)
        .await?
        .json()
}

/// GET /users/{userId}/account/transactions
pub async fn transactions<P: Serialize + ?Sized>(
    client: &Client,
    params: &P,
) -> Result<Vec<Transaction>> {
    client
        .get_user_resource(&["account", "transactions"], params)
        .await?
        .json_list()
}
