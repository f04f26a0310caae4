//! Shared builders for integration tests.

use orbital::types::{Credential, User, UserContext};
use serde_json::{json, Value};

/// A fully populated context as a fake-provider fixture.
pub fn sample_context() -> UserContext {
    UserContext {
        user: User {
            id: "u-1".to_string(),
            name: "Rita".to_string(),
            namespace: "rita".to_string(),
            email: "rita@example.com".to_string(),
            external_id: "github|rita".to_string(),
            token: "tok-1".to_string(),
            new: false,
            registry: "registry.orbital.example".to_string(),
            builder: "tcp://builder.orbital.example:1234".to_string(),
            certificate: "cert-data".to_string(),
            global_namespace: "shared".to_string(),
            analytics: true,
        },
        secrets: Vec::new(),
        credentials: Credential {
            server: "https://kube.orbital.example".to_string(),
            certificate: "kube-cert".to_string(),
            token: "kube-token".to_string(),
            namespace: "rita".to_string(),
        },
    }
}

/// Wire payload for the current-schema user context query.
pub fn current_payload() -> Value {
    json!({
        "user": {
            "id": "u-1",
            "name": "Rita",
            "namespace": "rita",
            "email": "rita@example.com",
            "externalID": "github|rita",
            "token": "tok-1",
            "new": false,
            "registry": "registry.orbital.example",
            "builder": "tcp://builder.orbital.example:1234",
            "certificate": "cert-data",
            "globalNamespace": "shared",
            "telemetryEnabled": false,
        },
        "getDeploySecrets": [
            {"name": "TOKEN", "value": "x"},
            {"name": "db.password", "value": "y"},
            {"name": "API_KEY", "value": "z"},
        ],
        "credentials": {
            "server": "https://kube.orbital.example",
            "certificate": "kube-cert",
            "token": "kube-token",
            "namespace": "rita",
        },
    })
}

/// Wire payload for the legacy-schema user context query.
pub fn legacy_payload() -> Value {
    let mut payload = current_payload();
    let user = payload["user"].as_object_mut().unwrap();
    user.remove("globalNamespace");
    user.remove("telemetryEnabled");
    payload
}
