//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const TEST_VAULT: &str = "0x0987654321098765432109876543210987654321";
pub const TEST_WALLET: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
/// Asset address without the `0x` prefix, lowercase.
pub const TEST_ASSET_HEX: &str = "1234567890123456789012345678901234567890";

// Function selectors as they appear in hex call data
pub const ASSET_SELECTOR: &str = "38d52e0f";
pub const BALANCE_OF_SELECTOR: &str = "70a08231";
pub const ALLOWANCE_SELECTOR: &str = "dd62ed3e";
pub const MAX_DEPOSIT_SELECTOR: &str = "402d267d";
pub const DECIMALS_SELECTOR: &str = "313ce567";

/// Chain state served by [`MockNode`].
#[derive(Clone, Debug)]
pub struct MockNode {
    pub balance: u128,
    pub allowance: u128,
    pub max_deposit: u128,
    pub decimals: u8,
    /// `None` makes `eth_estimateGas` answer with an execution revert.
    pub gas: Option<u64>,
}

impl MockNode {
    pub fn new(balance: u128, allowance: u128, max_deposit: u128) -> Self {
        Self {
            balance,
            allowance,
            max_deposit,
            decimals: 6,
            gas: Some(21_000),
        }
    }

    fn eth_call(&self, params: &Value) -> Option<Value> {
        let tx = &params[0];
        let data = tx["input"].as_str().or_else(|| tx["data"].as_str())?;
        let selector = data.strip_prefix("0x").unwrap_or(data).get(..8)?;

        let word = match selector {
            ASSET_SELECTOR => format!("0x{:0>64}", TEST_ASSET_HEX),
            BALANCE_OF_SELECTOR => format!("0x{:064x}", self.balance),
            ALLOWANCE_SELECTOR => format!("0x{:064x}", self.allowance),
            MAX_DEPOSIT_SELECTOR => format!("0x{:064x}", self.max_deposit),
            DECIMALS_SELECTOR => format!("0x{:064x}", self.decimals),
            _ => return None,
        };
        Some(json!(word))
    }
}

/// Answers JSON-RPC requests the way a node holding [`MockNode`] state would.
impl Respond for MockNode {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let id = body["id"].clone();

        let result = match body["method"].as_str() {
            Some("eth_call") => self.eth_call(&body["params"]),
            Some("eth_estimateGas") => self.gas.map(|gas| json!(format!("0x{:x}", gas))),
            Some("eth_chainId") => Some(json!("0x1")),
            _ => None,
        };

        let response = match result {
            Some(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            None => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": 3, "message": "execution reverted" }
            }),
        };

        ResponseTemplate::new(200).set_body_json(response)
    }
}

/// Start a mock JSON-RPC node.
pub async fn start_mock_node(node: MockNode) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(node)
        .mount(&server)
        .await;
    server
}

/// Returns true if any request received by the server carried `selector`.
pub async fn received_selector(server: &MockServer, selector: &str) -> bool {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .any(|request| String::from_utf8_lossy(&request.body).contains(selector))
}

/// Create a CLI command without mock node (for validation tests).
pub fn deposit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vault-deposit").unwrap();
    cmd.env_remove("ETH_RPC_URL");
    cmd.env_remove("WALLET_ADDRESS");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a CLI command pointing to a mock node.
pub fn deposit_cmd_with_node(server: &MockServer) -> Command {
    let mut cmd = deposit_cmd();
    cmd.env("ETH_RPC_URL", server.uri());
    cmd.env("WALLET_ADDRESS", TEST_WALLET);
    cmd
}
