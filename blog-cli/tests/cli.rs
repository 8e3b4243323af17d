//! Runs the `blog-cli` binary against a mock posts API and checks what a
//! calling script observes: exit status and output.

use std::io::Write;
use std::net::{SocketAddr, TcpListener};
use std::process::{Command, Output, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

struct Api {
    posts: Vec<Value>,
    deletes: Arc<AtomicU32>,
}

async fn list(api: web::Data<Api>) -> HttpResponse {
    HttpResponse::Ok().json(&api.posts)
}

async fn get(api: web::Data<Api>, id: web::Path<String>) -> HttpResponse {
    match api.posts.iter().find(|p| p["_id"] == id.as_str()) {
        Some(post) => HttpResponse::Ok().json(post),
        None => HttpResponse::NotFound().json(json!({ "message": "Post not found" })),
    }
}

async fn delete(api: web::Data<Api>) -> HttpResponse {
    api.deletes.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok().json(json!({ "message": "Post deleted successfully" }))
}

/// Serves `posts` on a random port from a dedicated thread, returning its
/// address and a counter of DELETE requests.
fn spawn_mock_api(posts: Vec<Value>) -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock api");
    let addr = listener.local_addr().unwrap();
    let deletes = Arc::new(AtomicU32::new(0));

    let api = web::Data::new(Api {
        posts,
        deletes: deletes.clone(),
    });
    thread::spawn(move || {
        actix_web::rt::System::new().block_on(async move {
            HttpServer::new(move || {
                App::new()
                    .app_data(api.clone())
                    .route("/posts", web::get().to(list))
                    .route("/posts/{id}", web::get().to(get))
                    .route("/posts/{id}", web::delete().to(delete))
            })
            .workers(1)
            .listen(listener)
            .expect("listen mock api")
            .run()
            .await
        })
    });

    (addr, deletes)
}

fn blog_cli(server: &str, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_blog-cli"))
        .arg("--server")
        .arg(server)
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn blog-cli");

    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn sample_post() -> Value {
    json!({ "_id": "65f1", "title": "Hello", "content": "First\nSecond", "author": "" })
}

#[test]
fn list_against_unreachable_server_fails() {
    let output = blog_cli("http://127.0.0.1:9", &["list"], "");

    assert!(!output.status.success());
    assert!(!stdout(&output).contains("No posts found"));

    let errors = stderr(&output);
    assert!(errors.contains("Failed to load posts. Please try again later."));
    assert!(!errors.contains("Error: Error:"));
}

#[test]
fn empty_list_succeeds() {
    let (addr, _) = spawn_mock_api(Vec::new());

    let output = blog_cli(&format!("http://{addr}"), &["list"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains("No posts found"));
}

#[test]
fn list_prints_one_line_per_post() {
    let (addr, _) = spawn_mock_api(vec![sample_post()]);

    let output = blog_cli(&format!("http://{addr}"), &["list"], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "[65f1] Hello — by Anonymous");
}

#[test]
fn missing_post_reports_a_single_error() {
    let (addr, _) = spawn_mock_api(Vec::new());

    let output = blog_cli(&format!("http://{addr}"), &["get", "nope"], "");

    assert!(!output.status.success());
    let errors = stderr(&output);
    assert_eq!(errors.matches("Failed to load post").count(), 1);
}

#[test]
fn unconfirmed_delete_sends_nothing() {
    let (addr, deletes) = spawn_mock_api(vec![sample_post()]);

    let output = blog_cli(&format!("http://{addr}"), &["delete", "65f1"], "n\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Cancelled"));
    assert_eq!(deletes.load(Ordering::SeqCst), 0);
}

#[test]
fn confirmed_delete_reaches_the_server() {
    let (addr, deletes) = spawn_mock_api(vec![sample_post()]);

    let output = blog_cli(&format!("http://{addr}"), &["delete", "65f1", "--yes"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Post has been deleted"));
    assert_eq!(deletes.load(Ordering::SeqCst), 1);
}
