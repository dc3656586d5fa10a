//! Gateway route tests: access-token guard, JSON shapes and error
//! translation, driven through the router with `tower::ServiceExt`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use ccr_gateway::prelude::*;
use common::{MockTransport, soap_result, token_manager};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

const ACCESS_TOKEN: &str = "gateway-secret";

async fn test_router(transport: Arc<MockTransport>) -> (axum::Router, mockito::ServerGuard) {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/Token/authenticate")
        .with_status(200)
        .with_body("tok-1")
        .create_async()
        .await;

    let client = Arc::new(CcrClient::from_parts(
        token_manager(&server.url()),
        transport,
    ));
    let state = AppState {
        client,
        access_token: ACCESS_TOKEN.to_string(),
    };

    (router(state), server)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_route_needs_no_token() {
    let transport = MockTransport::returning(json!({}));
    let (app, _server) = test_router(transport).await;

    let response = app
        .oneshot(Request::get("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_access_token_is_unauthorized() {
    let transport = MockTransport::returning(json!({}));
    let (app, _server) = test_router(transport.clone()).await;

    let response = app
        .oneshot(Request::get("/cantones/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn wrong_access_token_is_unauthorized() {
    let transport = MockTransport::returning(json!({}));
    let (app, _server) = test_router(transport).await;

    let response = app
        .oneshot(
            Request::get("/cantones/1")
                .header(header::AUTHORIZATION, "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn truncated_or_extended_access_token_is_unauthorized() {
    let transport = MockTransport::returning(json!({}));
    let (app, _server) = test_router(transport).await;

    for presented in [&ACCESS_TOKEN[..ACCESS_TOKEN.len() - 1], "gateway-secret-extra"] {
        let response = app
            .clone()
            .oneshot(
                Request::get("/cantones/1")
                    .header(header::AUTHORIZATION, presented)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn cantons_route_returns_code_description_pairs() {
    let transport = MockTransport::returning(soap_result(
        CcrMethod::CodCanton,
        json!({
            "CodRespuesta": "00",
            "MensajeRespuesta": "OK",
            "Cantones": {
                "ccrItemGeografico": [
                    {"Codigo": "01", "Descripcion": "San Jose"}
                ]
            }
        }),
    ));
    let (app, _server) = test_router(transport).await;

    let response = app
        .oneshot(
            Request::get("/cantones/1")
                .header(header::AUTHORIZATION, ACCESS_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"code": "01", "description": "San Jose"}])
    );
}

#[tokio::test]
async fn neighborhoods_route_uses_camel_case_fields() {
    let transport = MockTransport::returning(soap_result(
        CcrMethod::CodBarrio,
        json!({
            "CodRespuesta": "00",
            "MensajeRespuesta": "OK",
            "Barrios": {
                "ccrBarrio": [
                    {"CodBarrio": "A1", "CodSucursal": "S1", "Nombre": "Centro"}
                ]
            }
        }),
    ));
    let (app, _server) = test_router(transport).await;

    let response = app
        .oneshot(
            Request::get("/neighborhoods/1/2/3")
                .header(header::AUTHORIZATION, ACCESS_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"neighborhoodCode": "A1", "branchCode": "S1", "name": "Centro"}])
    );
}

#[tokio::test]
async fn postal_code_route_returns_a_plain_string() {
    let transport = MockTransport::returning(soap_result(
        CcrMethod::CodPostal,
        json!({"CodRespuesta": "00", "MensajeRespuesta": "OK", "CodPostal": "10302"}),
    ));
    let (app, _server) = test_router(transport).await;

    let response = app
        .oneshot(
            Request::get("/postalCode/1/3/2")
                .header(header::AUTHORIZATION, ACCESS_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"10302");
}

#[tokio::test]
async fn domain_failure_translates_to_bad_request_with_the_message() {
    let transport = MockTransport::returning(soap_result(
        CcrMethod::CodCanton,
        json!({"CodRespuesta": "01", "MensajeRespuesta": "invalid province"}),
    ));
    let (app, _server) = test_router(transport).await;

    let response = app
        .oneshot(
            Request::get("/cantones/9")
                .header(header::AUTHORIZATION, ACCESS_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "invalid province"}));
}

#[tokio::test]
async fn transport_failure_translates_to_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/Token/authenticate")
        .with_status(200)
        .with_body("tok-1")
        .create_async()
        .await;

    let client = Arc::new(CcrClient::from_parts(
        token_manager(&server.url()),
        Arc::new(common::FailingTransport),
    ));
    let app = router(AppState {
        client,
        access_token: ACCESS_TOKEN.to_string(),
    });

    let response = app
        .oneshot(
            Request::get("/districts/1/2")
                .header(header::AUTHORIZATION, ACCESS_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
