//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use serde_json::Value;
use todo_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoId, TodoItem,
    UpdateTodo,
};

const ORIGIN: &str = "http://localhost:8000";

fn client() -> TodoClient {
    TodoClient::new(&format!("{ORIGIN}/api/todos/"))
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{ORIGIN}{}", expected["path"].as_str().unwrap()), "{name}: url");

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let actual: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&actual, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn assert_expected_error(name: &str, err: ApiError, expected: &Value) {
    match expected.as_str().unwrap() {
        "NotFound" => assert_eq!(err, ApiError::NotFound, "{name}"),
        "HttpError" => assert!(matches!(err, ApiError::HttpError { .. }), "{name}: {err}"),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

fn input_id(case: &Value) -> TodoId {
    serde_json::from_value(case["input_id"].clone()).unwrap()
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_list_todos(), &case["expected_request"]);

        let result = c.parse_list_todos(simulated_response(&case));
        match case.get("expected_error") {
            Some(expected) => assert_expected_error(name, result.unwrap_err(), expected),
            None => {
                let expected: Vec<TodoItem> = serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        assert_request(name, &c.build_create_todo(&input).unwrap(), &case["expected_request"]);

        let result = c.parse_create_todo(simulated_response(&case));
        match case.get("expected_error") {
            Some(expected) => assert_expected_error(name, result.unwrap_err(), expected),
            None => {
                let expected: TodoItem = serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_todo(&input_id(&case), &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_todo(simulated_response(&case));
        match case.get("expected_error") {
            Some(expected) => assert_expected_error(name, result.unwrap_err(), expected),
            None => {
                let expected: TodoItem = serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_delete_todo(&input_id(&case)), &case["expected_request"]);

        let result = c.parse_delete_todo(simulated_response(&case));
        match case.get("expected_error") {
            Some(expected) => assert_expected_error(name, result.unwrap_err(), expected),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}
