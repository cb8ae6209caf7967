//! 可用号码的查询与订购
//!
//! 这两个接口不在 `/users/{userId}` 下，订购参数通过查询字符串传递。

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::http::Client;
use crate::http::response::id_from_location;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableNumber {
    pub number: String,
    pub national_number: Option<String>,
    pub city: Option<String>,
    pub rate_center: Option<String>,
    pub state: Option<String>,
    pub price: Option<String>,
}

/// 订购成功的号码，`location` 指向账户下的号码资源
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderedNumber {
    pub number: String,
    pub national_number: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
}

impl OrderedNumber {
    pub fn id(&self) -> Option<String> {
        self.location.as_deref().and_then(id_from_location)
    }
}

/// 查询/订购条件，本地号码与免费号码共用
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_local_calling_area: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

async fn search_in<P: Serialize + ?Sized>(
    client: &Client,
    kind: &str,
    params: &P,
) -> Result<Vec<AvailableNumber>> {
    client
        .get_resource(&["availableNumbers", kind], params)
        .await?
        .json_list()
}

async fn order_in<P: Serialize + ?Sized>(
    client: &Client,
    kind: &str,
    params: &P,
) -> Result<Vec<OrderedNumber>> {
    client
        .post_resource_with_query(&["availableNumbers", kind], params)
        .await?
        .json_list()
}

pub mod local {
    use super::*;

    /// GET /availableNumbers/local
    pub async fn search<P: Serialize + ?Sized>(
        client: &Client,
        params: &P,
    ) -> Result<Vec<AvailableNumber>> {
        search_in(client, "local", params).await
    }

    /// POST /availableNumbers/local?{params}
    pub async fn order<P: Serialize + ?Sized>(
        client: &Client,
        params: &P,
    ) -> Result<Vec<OrderedNumber>> {
        order_in(client, "local", params).await
    }
}

pub mod toll_free {
    use super::*;

    /// GET /availableNumbers/tollFree
    pub async fn search<P: Serialize + ?Sized>(
        client: &Client,
        params: &P,
    ) -> Result<Vec<AvailableNumber>> {
        search_in(client, "tollFree", params).await
    }

    /// POST /availableNumbers/tollFree?{params}
    pub async fn order<P: Serialize + ?Sized>(
        client: &Client,
        params: &P,
    ) -> Result<Vec<OrderedNumber>> {
        order_in(client, "tollFree", params).await
    }
}
