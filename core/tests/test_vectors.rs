//! Verify the request serializer and response parser against the JSON test
//! vectors stored in `test-vectors/`.

use httpclient_core::{
    parse_response, resolve, ClientError, FormContentType, HttpMethod, HttpRequest,
};

fn pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let url = resolve(case["url"].as_str().unwrap()).unwrap();
        let owned = pairs(&case["args"]);
        let args: Vec<(&str, &str)> = owned.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();

        let req = match HttpMethod::from_verb(case["method"].as_str().unwrap()) {
            HttpMethod::Get => HttpRequest::get(&url, &args),
            HttpMethod::Post => HttpRequest::post(&url, &args, FormContentType::UrlEncoded),
        };

        assert_eq!(req.port as u64, case["expected_port"].as_u64().unwrap(), "{name}: port");
        assert_eq!(req.to_wire(), case["expected_wire"].as_str().unwrap(), "{name}: wire text");
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = parse_response(case["raw"].as_str().unwrap());

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "MissingHeaderTerminator" => assert!(
                    matches!(err, ClientError::MissingHeaderTerminator),
                    "{name}: expected MissingHeaderTerminator, got {err:?}"
                ),
                "MalformedStatusLine" => assert!(
                    matches!(err, ClientError::MalformedStatusLine(_)),
                    "{name}: expected MalformedStatusLine, got {err:?}"
                ),
                "MalformedHeader" => assert!(
                    matches!(err, ClientError::MalformedHeader(_)),
                    "{name}: expected MalformedHeader, got {err:?}"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let parsed = result.unwrap();
            let expected = &case["expected"];
            assert_eq!(parsed.code as u64, expected["code"].as_u64().unwrap(), "{name}: code");

            let headers: Vec<(String, String)> = parsed
                .headers
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect();
            assert_eq!(headers, pairs(&expected["headers"]), "{name}: headers");
            assert_eq!(parsed.body, expected["body"].as_str().unwrap(), "{name}: body");
        }
    }
}
