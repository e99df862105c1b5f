//! Source chains against a mock HTTP server

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use civic_client::{
    CivicClient, ClientConfig, DataSource, PopulationService, PradhanService, SourceUrls,
    VillageRef, VillageService,
};
use shared::models::PRADHAN_UNKNOWN_NAME;
use shared::store::MemoryStore;

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_urls(SourceUrls::all(server.uri()))
        .with_timeout(Duration::from_millis(500))
        .without_cache()
}

#[tokio::test]
async fn test_villages_from_first_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/villages"))
        .and(query_param("block", "Pindra"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "villages": [
                { "name": "Pindra", "population": 2600, "wards": 12 },
                { "village_name": "Babatpur", "population": "1900" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/api/3/action/datastore_search_sql"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config(&server);
    let http = config.build_http_client().unwrap();
    let resolved = VillageService::new(&config, &http).villages().await;

    assert_eq!(
        resolved.source,
        DataSource::Api {
            provider: "OpenDataStack"
        }
    );
    assert_eq!(resolved.data.len(), 2);
    assert_eq!(resolved.data[1].name, "Babatpur");
    assert_eq!(resolved.data[1].population, 1900);
}

#[tokio::test]
async fn test_villages_fall_through_to_data_gov() {
    let server = MockServer::start().await;
    Mock::given(path("/api/villages"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(path("/api/3/action/datastore_search_sql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": { "records": [ { "villageNameEnglish": "Khalispur" } ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let http = config.build_http_client().unwrap();
    let resolved = VillageService::new(&config, &http).villages().await;

    assert_eq!(
        resolved.source,
        DataSource::Api {
            provider: "data.gov.in"
        }
    );
    assert_eq!(resolved.data[0].name, "Khalispur");
}

#[tokio::test]
async fn test_villages_all_down_uses_seed() {
    let server = MockServer::start().await;
    // Empty list and malformed body both count as failures
    Mock::given(path("/api/villages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "villages": [] })))
        .mount(&server)
        .await;
    Mock::given(path("/api/3/action/datastore_search_sql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    Mock::given(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "query": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let http = config.build_http_client().unwrap();
    let resolved = VillageService::new(&config, &http).villages().await;

    assert_eq!(resolved.source, DataSource::Local { seeded: true });
    assert_eq!(resolved.data.len(), 10);
}

#[tokio::test]
async fn test_population_from_census() {
    let server = MockServer::start().await;
    Mock::given(path("/api/3/action/datastore_search"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": { "records": [ { "population": "2710", "males": "1400", "females": "1310" } ] }
        })))
        .mount(&server)
        .await;
    Mock::given(path("/v2/country/IND/indicator/SP.POP.TOTL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let config = config(&server);
    let http = config.build_http_client().unwrap();
    let resolved = PopulationService::new(&config, &http)
        .population(&VillageRef::new(1, "Pindra"))
        .await;

    assert!(resolved.source.is_api());
    assert_eq!(resolved.data.population, 2710);
    assert_eq!(resolved.data.males, 1400);
    assert_eq!(resolved.data.village_id, 1);
}

#[tokio::test]
async fn test_population_world_bank_never_answers_for_villages() {
    let server = MockServer::start().await;
    Mock::given(path("/api/3/action/datastore_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;
    Mock::given(path("/v2/country/IND/indicator/SP.POP.TOTL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "page": 1 }, []])))
        .expect(2)
        .mount(&server)
        .await;

    let config = config(&server);
    let http = config.build_http_client().unwrap();
    let service = PopulationService::new(&config, &http);

    let results = service
        .population_batch(&[VillageRef::new(2, "Babatpur"), VillageRef::new(77, "Nowhere")])
        .await;
    assert_eq!(results[0].source, DataSource::Local { seeded: true });
    assert_eq!(results[0].data.population, 1800);
    assert_eq!(results[1].source, DataSource::Local { seeded: false });
    assert_eq!(results[1].data.population, 0);
}

#[tokio::test]
async fn test_pradhan_second_source() {
    let server = MockServer::start().await;
    Mock::given(path("/api/villages/3"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/api/villages/Khalispur"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sarpanch": { "name": "Kamal Kishor", "email": "kk@example.org" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let http = config.build_http_client().unwrap();
    let resolved = PradhanService::new(&config, &http)
        .pradhan(&VillageRef::new(3, "Khalispur"))
        .await;

    assert_eq!(
        resolved.source,
        DataSource::Api {
            provider: "localbodydata.com"
        }
    );
    assert_eq!(resolved.data.name, "Kamal Kishor");
    assert_eq!(resolved.data.email.as_deref(), Some("kk@example.org"));
}

#[tokio::test]
async fn test_slow_source_times_out_then_sentinel() {
    let server = MockServer::start().await;
    Mock::given(path("/api/villages/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "pradhan": { "name": "Too Late" } }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = config(&server).with_timeout(Duration::from_millis(200));
    let http = config.build_http_client().unwrap();
    let resolved = PradhanService::new(&config, &http)
        .pradhan(&VillageRef::new(42, "Nowhere"))
        .await;

    assert_eq!(resolved.source, DataSource::Local { seeded: false });
    assert_eq!(resolved.data.name, PRADHAN_UNKNOWN_NAME);
}

#[tokio::test]
async fn test_cache_reuses_resolution() {
    let server = MockServer::start().await;
    Mock::given(path("/api/villages/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "pradhan": { "name": "Rajesh Singh" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server).with_cache_ttl(Duration::from_secs(300));
    let http = config.build_http_client().unwrap();
    let service = PradhanService::new(&config, &http);
    let key = VillageRef::new(1, "Pindra");

    let first = service.pradhan(&key).await;
    let second = service.pradhan(&key).await;
    assert_eq!(first, second);
    assert!(second.source.is_api());
}

#[tokio::test]
async fn test_village_profile_offline() {
    let server = MockServer::start().await;
    let client = CivicClient::new(&config(&server), Arc::new(MemoryStore::new())).unwrap();

    let profile = client.village_profile(1).await.unwrap().unwrap();
    assert_eq!(profile.village.id, 1);
    assert_eq!(profile.population.data.population, 2500);
    assert_eq!(profile.pradhan.data.name, "राजेश सिंह");
    assert_eq!(profile.complaints.len(), 1);

    assert!(client.village_profile(404).await.unwrap().is_none());

    let stats = client.block_population_stats().await;
    assert_eq!(stats.total_population, 15100);
    assert_eq!(stats.max_population, 2500);
    assert_eq!(stats.min_population, 800);
    assert_eq!(stats.average_population, 1510);
}

#[tokio::test]
async fn test_village_members_offline() {
    let server = MockServer::start().await;
    let client = CivicClient::new(&config(&server), Arc::new(MemoryStore::new())).unwrap();

    let members = client.village_members(Some(1)).await.unwrap();
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["डॉ. अवधेश सिंह", "श्याम प्रजापति", "विजय यादव", "संजय मौर्या", "कमलेश पटेल"]
    );

    let all = client.village_members(None).await.unwrap();
    assert_eq!(all.len(), 41);
    assert!(client.village_members(Some(404)).await.is_none());
}
