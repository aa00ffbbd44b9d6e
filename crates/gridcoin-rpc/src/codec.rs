//! JSON-RPC request construction and response interpretation.
//!
//! Shared by the async and blocking clients; neither adds protocol logic of
//! its own.

use crate::error::{Error, WalletRpcError};

#[derive(serde::Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Vec<serde_json::Value>,
}

/// Serialize one call into the request body handed to the transport.
///
/// Param order is significant and mirrors the caller's positional arguments.
pub(crate) fn build_request(
    id: u64,
    method: &str,
    params: Vec<serde_json::Value>,
) -> serde_json::Value {
    let request = JsonRpcRequest {
        jsonrpc: "2.0",
        id,
        method,
        params,
    };
    serde_json::to_value(&request).expect("request shape serializes to a JSON value")
}

/// Interpret a raw JSON-RPC response body.
///
/// A non-null `error` field resolves through the wallet taxonomy; otherwise
/// a present `result` key wins, even when its value is JSON `null` (the
/// wallet populates both keys on every response). A body that is not an
/// object, or that carries neither field, is a protocol violation rather
/// than a wallet-reported failure.
pub(crate) fn interpret_response(body: serde_json::Value) -> Result<serde_json::Value, Error> {
    let serde_json::Value::Object(mut fields) = body else {
        return Err(Error::Protocol(format!(
            "expected a response object, got: {body}"
        )));
    };

    match fields.remove("error") {
        Some(raw) if !raw.is_null() => Err(wallet_error(raw)),
        _ => fields.remove("result").ok_or_else(|| {
            Error::Protocol("response carries neither `result` nor `error`".to_owned())
        }),
    }
}

/// Resolve a JSON-RPC error value against the wallet taxonomy.
///
/// The wire shape is `{"code": <int>, "message": <string>}`; anything else
/// is reported as a protocol violation.
fn wallet_error(raw: serde_json::Value) -> Error {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(raw.clone()) {
        Ok(parsed) => Error::Wallet(WalletRpcError::resolve(parsed.code, parsed.message)),
        Err(_) => Error::Protocol(format!("non-standard JSON-RPC error: {raw}")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error_codes::RpcErrorKind;

    #[test]
    fn build_request_carries_method_and_ordered_params() {
        let body = build_request(7, "getblockhash", vec![json!(5), json!(true)]);
        assert_eq!(
            body,
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "getblockhash",
                "params": [5, true],
            })
        );
    }

    #[test]
    fn params_round_trip_mixed_json_types() {
        let params = vec![
            json!("addr"),
            json!(42),
            json!(0.125),
            json!(true),
            json!(null),
            json!({"nested": ["a", 1]}),
        ];
        let body = build_request(1, "sendmany", params.clone());
        assert_eq!(body["params"], serde_json::Value::Array(params));
    }

    #[test]
    fn interpret_success_returns_result_verbatim() {
        let result =
            interpret_response(json!({"result": {"blocks": 3}, "error": null, "id": 1})).unwrap();
        assert_eq!(result, json!({"blocks": 3}));
    }

    #[test]
    fn interpret_null_result_is_success() {
        let result = interpret_response(json!({"result": null, "error": null, "id": 1})).unwrap();
        assert_eq!(result, serde_json::Value::Null);
    }

    #[test]
    fn interpret_known_error_resolves_narrowly() {
        let err = interpret_response(json!({
            "result": null,
            "error": {"code": -32601, "message": "Method not found"},
            "id": 1,
        }))
        .unwrap_err();
        match err {
            Error::Wallet(wallet) => {
                assert_eq!(wallet.kind, RpcErrorKind::MethodNotFound);
                assert_eq!(wallet.code, -32601);
                assert_eq!(wallet.message, "Method not found");
            }
            other => panic!("expected wallet error, got {other:?}"),
        }
    }

    #[test]
    fn interpret_unknown_error_code_stays_a_wallet_error() {
        let err = interpret_response(json!({
            "error": {"code": -9999, "message": "m"},
            "id": 1,
        }))
        .unwrap_err();
        match err {
            Error::Wallet(wallet) => {
                assert_eq!(wallet.kind, RpcErrorKind::Unrecognized);
                assert_eq!(wallet.code, -9999);
            }
            other => panic!("expected wallet error, got {other:?}"),
        }
    }

    #[test]
    fn interpret_missing_both_fields_is_a_protocol_violation() {
        let err = interpret_response(json!({"id": 1})).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn interpret_non_object_body_is_a_protocol_violation() {
        let err = interpret_response(json!("ok")).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn interpret_non_standard_error_shape_is_a_protocol_violation() {
        let err = interpret_response(json!({"error": "it broke", "id": 1})).unwrap_err();
        match err {
            Error::Protocol(message) => assert!(message.contains("it broke")),
            other => panic!("expected protocol violation, got {other:?}"),
        }
    }
}
