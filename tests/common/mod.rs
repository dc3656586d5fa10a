//! Shared test doubles: canned credentials, a mockito-backed token
//! endpoint and a counting in-memory SOAP transport.

#![allow(dead_code)]

use async_trait::async_trait;
use ccr_gateway::prelude::*;
use chrono::Duration;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn test_credentials() -> Credentials {
    Credentials {
        username: "user".to_string(),
        password: "pass".to_string(),
        user_id: "U1".to_string(),
        service_id: "S1".to_string(),
        client_code: "C1".to_string(),
        system: "SYS".to_string(),
    }
}

/// Token manager pointed at a mockito server, default validity window
pub fn token_manager(server_url: &str) -> TokenManager {
    TokenManager::new(test_credentials(), format!("{server_url}/Token/authenticate"))
}

/// Token manager with an explicit validity window
pub fn token_manager_with_validity(server_url: &str, validity: Duration) -> TokenManager {
    TokenManager::with_validity(
        test_credentials(),
        format!("{server_url}/Token/authenticate"),
        validity,
    )
}

/// Wraps a payload the way the wire does: inside `<method>Result`
pub fn soap_result(method: CcrMethod, payload: Value) -> Value {
    json!({ method.result_field(): payload })
}

/// Record of one transport invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub method: CcrMethod,
    pub args: BTreeMap<String, String>,
    pub token: String,
}

/// In-memory transport returning a canned response and recording calls
pub struct MockTransport {
    response: Mutex<Value>,
    calls: AtomicUsize,
    invocations: Mutex<Vec<Invocation>>,
}

impl MockTransport {
    pub fn returning(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(response),
            calls: AtomicUsize::new(0),
            invocations: Mutex::new(Vec::new()),
        })
    }

    pub fn set_response(&self, response: Value) {
        *self.response.lock().unwrap() = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl SoapTransport for MockTransport {
    async fn invoke(
        &self,
        method: CcrMethod,
        args: &BTreeMap<String, String>,
        token: &str,
    ) -> Result<Value, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.invocations.lock().unwrap().push(Invocation {
            method,
            args: args.clone(),
            token: token.to_string(),
        });
        Ok(self.response.lock().unwrap().clone())
    }
}

/// Transport that always fails the way a dead network does
pub struct FailingTransport;

#[async_trait]
impl SoapTransport for FailingTransport {
    async fn invoke(
        &self,
        _method: CcrMethod,
        _args: &BTreeMap<String, String>,
        _token: &str,
    ) -> Result<Value, AppError> {
        Err(AppError::RemoteCall("connection refused".to_string()))
    }
}
