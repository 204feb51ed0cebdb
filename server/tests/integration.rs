//! Full CRUD lifecycle over real HTTP.
//!
//! Starts the server on a random port with an in-memory store, then drives
//! it with ureq so routing, auth, CORS and JSON encoding are exercised
//! through an actual socket.

use todo_core::{MemoryStore, Todo, TodoId};
use todo_server::{AppState, ErrorBody, DEFAULT_API_KEY};

struct Reply {
    status: u16,
    body: String,
}

fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, AppState::new(MemoryStore::new(), DEFAULT_API_KEY)).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Disables ureq's status-as-error behavior so 4xx/5xx come back as data.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn send(method: &str, url: &str, key: Option<&str>, body: Option<&str>) -> Reply {
    let agent = agent();
    let mut response = match (method, body) {
        ("GET", _) => {
            let req = agent.get(url);
            match key {
                Some(key) => req.header("X-API-KEY", key).call(),
                None => req.call(),
            }
        }
        ("DELETE", _) => {
            let req = agent.delete(url);
            match key {
                Some(key) => req.header("X-API-KEY", key).call(),
                None => req.call(),
            }
        }
        ("POST", body) => {
            let req = agent.post(url).content_type("application/json");
            let req = match key {
                Some(key) => req.header("X-API-KEY", key),
                None => req,
            };
            req.send(body.unwrap_or_default().as_bytes())
        }
        _ => panic!("unsupported method {method}"),
    }
    .expect("HTTP transport error");

    Reply {
        status: response.status().as_u16(),
        body: response.body_mut().read_to_string().unwrap_or_default(),
    }
}

#[test]
fn crud_lifecycle() {
    let base = spawn_server();
    let key = Some(DEFAULT_API_KEY);

    // Step 1: list is empty.
    let reply = send("GET", &format!("{base}/todos"), key, None);
    assert_eq!(reply.status, 200);
    let todos: Vec<Todo> = serde_json::from_str(&reply.body).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 2: create.
    let reply = send(
        "POST",
        &format!("{base}/todos"),
        key,
        Some(r#"{"title":"buy milk","done":false}"#),
    );
    assert_eq!(reply.status, 201);
    let created: Todo = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(created.title, "buy milk");
    assert!(!created.done);
    let id = created.id;

    // Step 3: fetch it back.
    let reply = send("GET", &format!("{base}/todos/{id}"), key, None);
    assert_eq!(reply.status, 200);
    let fetched: Todo = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(fetched, created);

    // Step 4: list has one item.
    let reply = send("GET", &format!("{base}/todos"), key, None);
    let todos: Vec<Todo> = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(todos.len(), 1);

    // Step 5: delete.
    let reply = send("DELETE", &format!("{base}/todos/{id}"), key, None);
    assert_eq!(reply.status, 200);
    assert!(reply.body.is_empty());

    // Step 6: fetch after delete fails.
    let reply = send("GET", &format!("{base}/todos/{id}"), key, None);
    assert_eq!(reply.status, 500);

    // Step 7: list is empty again.
    let reply = send("GET", &format!("{base}/todos"), key, None);
    let todos: Vec<Todo> = serde_json::from_str(&reply.body).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}

#[test]
fn rejections_over_the_wire() {
    let base = spawn_server();

    let reply = send("GET", &format!("{base}/todos"), None, None);
    assert_eq!(reply.status, 401);
    let err: ErrorBody = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(err.error, "invalid API key");

    let reply = send(
        "DELETE",
        &format!("{base}/todos/{}", TodoId::new()),
        Some("wrong"),
        None,
    );
    assert_eq!(reply.status, 401);

    let reply = send("POST", &format!("{base}/todos"), Some(DEFAULT_API_KEY), Some("{"));
    assert_eq!(reply.status, 400);

    let reply = send(
        "GET",
        &format!("{base}/todos/not-an-id"),
        Some(DEFAULT_API_KEY),
        None,
    );
    assert_eq!(reply.status, 500);
    let err: ErrorBody = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(err.error, "Not an Object ID");
}
