//! Integration tests for the OSRM client (wiremock-based)

use domain::value_objects::GeoLocation;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_routing::{OsrmClient, OsrmConfig, RoutingClient, RoutingError};

fn config_for_mock(base_url: &str) -> OsrmConfig {
    OsrmConfig {
        base_url: base_url.to_string(),
        ..OsrmConfig::for_testing()
    }
}

fn loc(lat: f64, lon: f64) -> GeoLocation {
    GeoLocation::new(lat, lon).unwrap()
}

const fn sample_route_json() -> &'static str {
    r#"{
        "code": "Ok",
        "routes": [{
            "geometry": {
                "type": "LineString",
                "coordinates": [
                    [13.411267, 52.521508],
                    [13.377704, 52.516275],
                    [13.332711, 52.506891]
                ]
            },
            "distance": 6120.3,
            "duration": 740.1
        }],
        "waypoints": [
            {"name": "Alexanderstrasse", "location": [13.411267, 52.521508]},
            {"name": "Hardenbergplatz", "location": [13.332711, 52.506891]}
        ]
    }"#
}

#[tokio::test]
async fn test_route_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/route/v1/driving/13.411267,52.521508;13.332711,52.506891",
        ))
        .and(query_param("overview", "full"))
        .and(query_param("geometries", "geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OsrmClient::new(&config).unwrap();

    let plan = client
        .route(
            loc(52.521508, 13.411267),
            loc(52.506891, 13.332711),
            "driving",
        )
        .await
        .unwrap();

    assert_eq!(plan.waypoints.len(), 3);
    assert!((plan.waypoints[0].latitude() - 52.521_508).abs() < 1e-9);
    assert!((plan.waypoints[2].longitude() - 13.332_711).abs() < 1e-9);
    assert!((plan.distance_meters - 6120.3).abs() < f64::EPSILON);
    assert!((plan.distance_km() - 6.1203).abs() < 1e-9);
}

#[tokio::test]
async fn test_route_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
        ))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OsrmClient::new(&config).unwrap();

    let result = client
        .route(loc(52.52, 13.41), loc(-33.86, 151.21), "driving")
        .await;

    assert!(matches!(result, Err(RoutingError::NoRouteFound(_))));
}

#[tokio::test]
async fn test_route_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OsrmClient::new(&config).unwrap();

    let result = client
        .route(loc(52.52, 13.41), loc(52.50, 13.33), "driving")
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().is_retryable());
}

#[tokio::test]
async fn test_route_profile_selects_url_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/walking/13.41,52.52;13.33,52.5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OsrmClient::new(&config).unwrap();

    client
        .route(loc(52.52, 13.41), loc(52.50, 13.33), "walking")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_route_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = OsrmClient::new(&config).unwrap();

    let result = client
        .route(loc(52.52, 13.41), loc(52.50, 13.33), "driving")
        .await;

    assert!(matches!(result, Err(RoutingError::ParseError(_))));
}
