use bandwidth::Client;
use bandwidth::resources::account::{self, TransactionQuery};
use bandwidth::resources::applications::{self, CreateApplication};
use bandwidth::resources::available_numbers::{NumberSearch, local, toll_free};
use bandwidth::resources::bridges::{self, CreateBridge, UpdateBridge};
use bandwidth::resources::conferences::members::{self, AddMember, UpdateMember};
use bandwidth::resources::conferences::{self, CreateConference, UpdateConference};
use bandwidth::resources::domains::endpoints::{self, CreateEndpoint};
use bandwidth::resources::domains::{self, CreateDomain};
use bandwidth::resources::messages::{self, CreateMessage, ListMessages};
use bandwidth::resources::PlayAudio;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new("u-1", "t-1", "s-1")
        .unwrap()
        .with_base_url(&format!("{}/v1", server.uri()))
        .unwrap()
}

fn created(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(201).insert_header("Location", location)
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200)
}

#[tokio::test]
async fn test_account() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/account"))
        .respond_with(ok().set_body_json(json!({"balance": "538.37250", "accountType": "pre-pay"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/account/transactions"))
        .and(query_param("maxItems", "1"))
        .and(query_param("type", "charge"))
        .respond_with(ok().set_body_json(json!([{
            "id": "pptx-wqfnmmjxhvxeslqlqwxo5ha",
            "time": "2013-02-21T13:39:09.122Z",
            "amount": "0.00750",
            "type": "charge",
            "units": 1,
            "productType": "sms-out",
            "number": "+13475334005"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let info = account::get(&client).await.unwrap();
    assert_eq!(info.balance, "538.37250");
    assert_eq!(info.account_type, "pre-pay");

    let query = TransactionQuery {
        max_items: Some(1),
        kind: Some("charge".to_string()),
        ..TransactionQuery::default()
    };
    let txs = account::transactions(&client, &query).await.unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].kind, "charge");
    assert_eq!(txs[0].product_type.as_deref(), Some("sms-out"));
}

#[tokio::test]
async fn test_applications_crud() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/applications"))
        .and(body_json(json!({"name": "ivr", "incomingCallUrl": "https://example.com/calls"})))
        .respond_with(created("/v1/users/u-1/applications/a-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/applications/a-1"))
        .respond_with(ok().set_body_json(json!({
            "id": "a-1",
            "name": "ivr",
            "incomingCallUrl": "https://example.com/calls",
            "autoAnswer": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/applications"))
        .and(query_param("size", "5"))
        .respond_with(ok().set_body_json(json!([{"id": "a-1", "name": "ivr"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/applications/a-1"))
        .and(body_json(json!({"autoAnswer": false})))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/users/u-1/applications/a-1"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let params = CreateApplication {
        name: Some("ivr".to_string()),
        incoming_call_url: Some("https://example.com/calls".to_string()),
        ..CreateApplication::default()
    };
    let id = applications::create(&client, &params).await.unwrap();
    assert_eq!(id, "a-1");

    let app = applications::find(&client, &id).await.unwrap();
    assert_eq!(app.auto_answer, Some(true));

    let apps = applications::list(&client, &json!({"size": 5})).await.unwrap();
    assert_eq!(apps.len(), 1);

    let update = CreateApplication {
        auto_answer: Some(false),
        ..CreateApplication::default()
    };
    applications::update(&client, &id, &update).await.unwrap();
    applications::delete(&client, &id).await.unwrap();
}

#[tokio::test]
async fn test_available_numbers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/availableNumbers/local"))
        .and(query_param("areaCode", "919"))
        .respond_with(ok().set_body_json(json!([{
            "number": "+19195551212",
            "nationalNumber": "(919) 555-1212",
            "city": "CARY",
            "rateCenter": "CARY",
            "state": "NC",
            "price": "0.60"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/availableNumbers/local"))
        .and(query_param("areaCode", "919"))
        .and(query_param("quantity", "1"))
        .respond_with(ok().set_body_json(json!([{
            "number": "+19195551212",
            "nationalNumber": "(919) 555-1212",
            "price": "0.60",
            "location": "https://api.catapult.inetwork.com/v1/users/u-1/phoneNumbers/n-1"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/availableNumbers/tollFree"))
        .and(query_param("pattern", "*456"))
        .respond_with(ok().set_body_json(json!([{"number": "+18445557456"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/availableNumbers/tollFree"))
        .and(query_param("quantity", "1"))
        .respond_with(ok().set_body_json(json!([{
            "number": "+18445557456",
            "location": "https://api.catapult.inetwork.com/v1/users/u-1/phoneNumbers/n-2"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let search = NumberSearch {
        area_code: Some("919".to_string()),
        ..NumberSearch::default()
    };
    let found = local::search(&client, &search).await.unwrap();
    assert_eq!(found[0].state.as_deref(), Some("NC"));

    let order = NumberSearch {
        quantity: Some(1),
        ..search
    };
    let ordered = local::order(&client, &order).await.unwrap();
    assert_eq!(ordered[0].id().as_deref(), Some("n-1"));

    let free = toll_free::search(&client, &json!({"pattern": "*456"}))
        .await
        .unwrap();
    assert_eq!(free[0].number, "+18445557456");

    let ordered = toll_free::order(&client, &json!({"quantity": 1}))
        .await
        .unwrap();
    assert_eq!(ordered[0].id().as_deref(), Some("n-2"));
}

#[tokio::test]
async fn test_bridges() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/bridges"))
        .and(body_json(json!({"bridgeAudio": true, "callIds": ["c-1", "c-2"]})))
        .respond_with(created("/v1/users/u-1/bridges/brg-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/bridges/brg-1"))
        .respond_with(ok().set_body_json(json!({"id": "brg-1", "state": "active", "bridgeAudio": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/bridges"))
        .respond_with(ok().set_body_json(json!([{"id": "brg-1"}, {"id": "brg-2"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/bridges/brg-1"))
        .and(body_json(json!({"callIds": []})))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/bridges/brg-1/audio"))
        .and(body_json(json!({"fileUrl": "https://example.com/beep.mp3"})))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/bridges/brg-1/calls"))
        .respond_with(ok().set_body_json(json!([
            {"id": "c-1", "from": "+19195551212", "to": "+13125556666"},
            {"id": "c-2", "from": "+19195551212", "to": "+13125557777"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let params = CreateBridge {
        bridge_audio: Some(true),
        call_ids: vec!["c-1".to_string(), "c-2".to_string()],
    };
    let id = bridges::create(&client, &params).await.unwrap();
    assert_eq!(id, "brg-1");

    let bridge = bridges::find(&client, &id).await.unwrap();
    assert_eq!(bridge.state.as_deref(), Some("active"));

    assert_eq!(bridges::list(&client).await.unwrap().len(), 2);

    bridges::update(&client, &id, &UpdateBridge::default())
        .await
        .unwrap();

    bridges::audio::play(&client, &id, &PlayAudio::file("https://example.com/beep.mp3"))
        .await
        .unwrap();

    let bridged = bridges::calls::list(&client, &id).await.unwrap();
    assert_eq!(bridged[1].to, "+13125557777");
}

#[tokio::test]
async fn test_conferences_and_members() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/conferences"))
        .and(body_json(json!({"from": "+19195551212"})))
        .respond_with(created("/v1/users/u-1/conferences/conf-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/conferences/conf-1"))
        .respond_with(ok().set_body_json(json!({
            "id": "conf-1",
            "state": "created",
            "from": "+19195551212",
            "activeMembers": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/conferences/conf-1"))
        .and(body_json(json!({"mute": true})))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/conferences/conf-1/audio"))
        .and(body_json(json!({"sentence": "Welcome"})))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/conferences/conf-1/members"))
        .and(body_json(json!({"callId": "c-1", "joinTone": true})))
        .respond_with(created("/v1/users/u-1/conferences/conf-1/members/member-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/conferences/conf-1/members/member-1"))
        .respond_with(ok().set_body_json(json!({
            "id": "member-1",
            "state": "active",
            "addedTime": "2013-07-12T15:22:47.517Z",
            "hold": false,
            "mute": false,
            "joinTone": true,
            "leavingTone": false,
            "call": "https://api.catapult.inetwork.com/v1/users/u-1/calls/c-1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/conferences/conf-1/members"))
        .respond_with(ok().set_body_json(json!([{"id": "member-1"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/conferences/conf-1/members/member-1"))
        .and(body_json(json!({"state": "completed"})))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/conferences/conf-1/members/member-1/audio"))
        .and(body_json(json!({"sentence": "You are muted"})))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let params = CreateConference {
        from: "+19195551212".to_string(),
        ..CreateConference::default()
    };
    let conf_id = conferences::create(&client, &params).await.unwrap();
    assert_eq!(conf_id, "conf-1");

    let conf = conferences::find(&client, &conf_id).await.unwrap();
    assert_eq!(conf.active_members, Some(0));

    let mute = UpdateConference {
        mute: Some(true),
        ..UpdateConference::default()
    };
    conferences::update(&client, &conf_id, &mute).await.unwrap();
    conferences::audio::play(&client, &conf_id, &PlayAudio::sentence("Welcome"))
        .await
        .unwrap();

    let add = AddMember {
        join_tone: Some(true),
        ..AddMember::new("c-1")
    };
    let member_id = members::add(&client, &conf_id, &add).await.unwrap();
    assert_eq!(member_id, "member-1");

    let member = members::find(&client, &conf_id, &member_id).await.unwrap();
    assert_eq!(member.join_tone, Some(true));
    assert!(member.added_time.is_some());

    assert_eq!(members::list(&client, &conf_id).await.unwrap().len(), 1);

    let remove = UpdateMember {
        state: Some("completed".to_string()),
        ..UpdateMember::default()
    };
    members::update(&client, &conf_id, &member_id, &remove)
        .await
        .unwrap();

    members::audio::play(
        &client,
        &conf_id,
        &member_id,
        &PlayAudio::sentence("You are muted"),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_domains_and_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/domains"))
        .and(body_json(json!({"name": "office", "description": "HQ phones"})))
        .respond_with(created("/v1/users/u-1/domains/rd-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/domains"))
        .respond_with(ok().set_body_json(json!([{"id": "rd-1", "name": "office"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/domains/rd-1/endpoints"))
        .and(body_json(json!({"name": "desk", "applicationId": "a-1", "enabled": true})))
        .respond_with(created("/v1/users/u-1/domains/rd-1/endpoints/re-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/domains/rd-1/endpoints/re-1"))
        .respond_with(ok().set_body_json(json!({
            "id": "re-1",
            "name": "desk",
            "domainId": "rd-1",
            "applicationId": "a-1",
            "enabled": true,
            "sipUri": "sip:desk@office.bwapp.bwsip.io",
            "credentials": {"realm": "office.bwapp.bwsip.io", "username": "desk"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/domains/rd-1/endpoints"))
        .respond_with(ok().set_body_json(json!([{"id": "re-1", "name": "desk"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/users/u-1/domains/rd-1/endpoints/re-1"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/users/u-1/domains/rd-1"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let params = CreateDomain {
        name: "office".to_string(),
        description: Some("HQ phones".to_string()),
    };
    let domain_id = domains::create(&client, &params).await.unwrap();
    assert_eq!(domain_id, "rd-1");
    assert_eq!(domains::list(&client).await.unwrap()[0].name, "office");

    let endpoint = CreateEndpoint {
        name: "desk".to_string(),
        application_id: "a-1".to_string(),
        enabled: Some(true),
        ..CreateEndpoint::default()
    };
    let endpoint_id = endpoints::create(&client, &domain_id, &endpoint)
        .await
        .unwrap();
    assert_eq!(endpoint_id, "re-1");

    let found = endpoints::find(&client, &domain_id, &endpoint_id)
        .await
        .unwrap();
    assert_eq!(found.sip_uri.as_deref(), Some("sip:desk@office.bwapp.bwsip.io"));
    assert_eq!(
        found.credentials.and_then(|c| c.username).as_deref(),
        Some("desk")
    );

    assert_eq!(endpoints::list(&client, &domain_id).await.unwrap().len(), 1);

    endpoints::delete(&client, &domain_id, &endpoint_id)
        .await
        .unwrap();
    domains::delete(&client, &domain_id).await.unwrap();
}

#[tokio::test]
async fn test_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u-1/messages"))
        .and(body_json(json!({"from": "+19195551212", "to": "+13125556666", "text": "hi"})))
        .respond_with(created("/v1/users/u-1/messages/m-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let message = json!({
        "id": "m-1",
        "from": "+19195551212",
        "to": "+13125556666",
        "text": "hi",
        "direction": "out",
        "state": "sent",
        "time": "2012-10-05T20:37:38.048Z"
    });

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/messages/m-1"))
        .respond_with(ok().set_body_json(message.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/u-1/messages"))
        .and(query_param("from", "+19195551212"))
        .and(query_param("direction", "out"))
        .respond_with(ok().set_body_json(json!([message])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let id = messages::create(
        &client,
        &CreateMessage::text("+19195551212", "+13125556666", "hi"),
    )
    .await
    .unwrap();
    assert_eq!(id, "m-1");

    let found = messages::find(&client, &id).await.unwrap();
    assert_eq!(found.state.as_deref(), Some("sent"));
    assert!(found.media.is_empty());

    let query = ListMessages {
        from: Some("+19195551212".to_string()),
        direction: Some("out".to_string()),
        ..ListMessages::default()
    };
    let listed = messages::list(&client, &query).await.unwrap();
    assert_eq!(listed, vec![found]);
}
