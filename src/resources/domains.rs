//! SIP 域名与终端

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::http::Client;
use crate::resources::NO_PARAMS;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomain {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// POST /users/{userId}/domains，返回新域名的 ID
pub async fn create<P: Serialize + ?Sized>(client: &Client, params: &P) -> Result<String> {
    client
        .post_user_resource(&["domains"], params)
        .await?
        .location_id()
}

pub async fn delete(client: &Client, id: &str) -> Result<()> {
    client.delete_user_resource(&["domains", id]).await?;
    Ok(())
}

pub async fn list(client: &Client) -> Result<Vec<Domain>> {
    client
        .get_user_resource(&["domains"], NO_PARAMS)
        .await?
        .json_list()
}

pub mod endpoints {
    use super::*;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Endpoint {
        pub id: String,
        pub name: String,
        pub domain_id: Option<String>,
        pub application_id: Option<String>,
        pub enabled: Option<bool>,
        pub sip_uri: Option<String>,
        pub description: Option<String>,
        pub credentials: Option<EndpointCredentials>,
    }

    /// 返回时只包含 username 和 realm，password 只在创建时提交
    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct EndpointCredentials {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub username: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub password: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub realm: Option<String>,
    }

    #[derive(Debug, Clone, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateEndpoint {
        pub name: String,
        pub application_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub enabled: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub credentials: Option<EndpointCredentials>,
    }

    /// POST /users/{userId}/domains/{domainId}/endpoints，返回终端 ID
    pub async fn create<P: Serialize + ?Sized>(
        client: &Client,
        domain_id: &str,
        params: &P,
    ) -> Result<String> {
        client
            .post_user_resource(&["domains", domain_id, "endpoints"], params)
            .await?
            .location_id()
    }

    pub async fn delete(client: &Client, domain_id: &str, endpoint_id: &str) -> Result<()> {
        client
            .delete_user_resource(&["domains", domain_id, "endpoints", endpoint_id])
            .await?;
        Ok(())
    }

    pub async fn find(client: &Client, domain_id: &str, endpoint_id: &str) -> Result<Endpoint> {
        client
            .get_user_resource(&["domains", domain_id, "endpoints", endpoint_id], NO_PARAMS)
            .await?
            .json()
    }

    pub async fn list(client: &Client, domain_id: &str) -> Result<Vec<Endpoint>> {
        client
            .get_user_resource(&["domains", domain_id, "endpoints"], NO_PARAMS)
            .await?
            .json_list()
    }
}
