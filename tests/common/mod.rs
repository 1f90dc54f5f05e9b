//! Shared utilities for integration testing: an in-process JSON-RPC node.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TOKEN_ADDRESS: &str = "0x345ca3e014aaf5dca488057592ee47305d9b3e10";
pub const MARKETPLACE_ADDRESS: &str = "0xf12b5dd4ead5f743c6baa640b0216200e89b60da";
pub const DEV_NETWORK_ID: u64 = 5777;

pub const SUBMITTED_TX_HASH: &str =
    "0x1111111111111111111111111111111111111111111111111111111111111111";

const DEPLOYED_CODE: &str = "0x6080604052348015600f57600080fd5b50";

/// What the mock node answers.
#[derive(Debug, Clone)]
pub struct NodeState {
    pub network_id: u64,
    pub chain_id: u64,
    pub block_number: u64,
    pub accounts: Vec<String>,
    /// Lowercase address → runtime code. Missing addresses have no code.
    pub code: HashMap<String, String>,
    /// Lowercase address → raw `eth_call` return data.
    pub call_results: HashMap<String, String>,
}

impl NodeState {
    /// A development node with both contracts deployed.
    pub fn with_both_deployed() -> Self {
        let mut code = HashMap::new();
        code.insert(TOKEN_ADDRESS.to_string(), DEPLOYED_CODE.to_string());
        code.insert(MARKETPLACE_ADDRESS.to_string(), DEPLOYED_CODE.to_string());

        let mut call_results = HashMap::new();
        call_results.insert(TOKEN_ADDRESS.to_string(), word(1_000_000));
        call_results.insert(MARKETPLACE_ADDRESS.to_string(), word(3));

        Self {
            network_id: DEV_NETWORK_ID,
            chain_id: 1337,
            block_number: 16,
            accounts: vec![
                "0x627306090abab3a6e1400e9345bc60c78a8bef57".to_string(),
                "0xf17f52151ebef6c7334fad080c5704d77216b732".to_string(),
            ],
            code,
            call_results,
        }
    }
}

/// ABI-encode a `uint256` return value.
pub fn word(value: u64) -> String {
    format!("0x{:064x}", value)
}

type CallLog = Arc<Mutex<Vec<(String, Value)>>>;

/// A running mock node.
pub struct MockNode {
    pub url: String,
    calls: CallLog,
}

impl MockNode {
    /// Number of requests received for an RPC method.
    pub fn count(&self, method: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|(m, _)| m == method).count()
    }

    /// Params of every request received for an RPC method, in order.
    pub fn params(&self, method: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

#[derive(Clone)]
struct AppState {
    node: Arc<NodeState>,
    calls: CallLog,
}

/// Start a mock node on an ephemeral port.
pub async fn start_mock_node(node: NodeState) -> MockNode {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let state = AppState {
        node: Arc::new(node),
        calls: calls.clone(),
    };
    let app = Router::new().route("/", post(handle_rpc)).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockNode {
        url: format!("http://{}", addr),
        calls,
    }
}

async fn handle_rpc(State(state): State<AppState>, Json(request): Json<Value>) -> Json<Value> {
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request
        .get("method")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let params = request.get("params").cloned().unwrap_or(Value::Null);

    state.calls.lock().unwrap().push((method.clone(), params.clone()));
    let node = &state.node;

    let result = match method.as_str() {
        "net_version" => json!(node.network_id.to_string()),
        "eth_chainId" => json!(format!("0x{:x}", node.chain_id)),
        "eth_blockNumber" => json!(format!("0x{:x}", node.block_number)),
        "eth_accounts" => json!(node.accounts),
        "eth_getCode" => {
            let address = param_str(&params[0]);
            json!(node.code.get(&address).cloned().unwrap_or_else(|| "0x".to_string()))
        }
        "eth_getTransactionCount" => json!("0x0"),
        "eth_gasPrice" => json!("0x1"),
        "eth_estimateGas" => json!("0x5208"),
        "eth_sendTransaction" => json!(SUBMITTED_TX_HASH),
        "eth_call" => {
            let to = param_str(&params[0]["to"]);
            json!(node.call_results.get(&to).cloned().unwrap_or_else(|| "0x".to_string()))
        }
        _ => {
            return Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": format!("Method {} not found", method) }
            }));
        }
    };

    Json(json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}

fn param_str(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_lowercase()
}

/// Path to a fixture artifact.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
