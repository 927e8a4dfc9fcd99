/*
[INPUT]:  Built binary, mock chat API, environment variables
[OUTPUT]: Exit code and startup wiring verification
[POS]:    Integration test layer - process behaviour
[UPDATE]: When changing startup flow or exit codes
*/

use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::time::{sleep, timeout};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PK: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn bot_command(envs: &[(&str, &str)]) -> Command {
    let binary_path = env!("CARGO_BIN_EXE_quills-chat-bot");

    let mut command = Command::new(binary_path);
    command
        .env_clear()
        // keep any developer .env out of the picture
        .current_dir(std::env::temp_dir())
        .env("RUST_LOG", "info")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    for (key, value) in envs {
        command.env(key, value);
    }
    command
}

async fn run_to_exit(envs: &[(&str, &str)]) -> Output {
    let child = bot_command(envs).spawn().expect("Failed to start quills-chat-bot binary");
    timeout(Duration::from_secs(20), child.wait_with_output())
        .await
        .expect("process did not exit")
        .expect("wait for process")
}

async fn send_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording")
        .iter()
        .filter(|request| request.url.path() == "/send")
        .count()
}

async fn mount_send_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn nonce_error_exits_with_code_one_without_broadcasting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nonce"))
        .respond_with(ResponseTemplate::new(500).set_body_string("nonce service down"))
        .mount(&server)
        .await;
    mount_send_ok(&server).await;

    let uri = server.uri();
    let output = run_to_exit(&[
        ("PRIVATE_KEY", PK),
        ("CHAT_API_URL", uri.as_str()),
        ("MESSAGE_INTERVAL_MS", "50"),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1), "{output:?}");

    // give a wrongly started loop time to fire before checking
    sleep(Duration::from_millis(200)).await;
    assert_eq!(send_count(&server).await, 0);

    let logs = String::from_utf8_lossy(&output.stdout);
    assert!(logs.contains("nonce service down"), "{logs}");
}

#[tokio::test]
async fn login_without_token_exits_with_code_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"nonce": "abc123"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "welcome"})))
        .mount(&server)
        .await;
    mount_send_ok(&server).await;

    let uri = server.uri();
    let output = run_to_exit(&[
        ("PRIVATE_KEY", PK),
        ("CHAT_API_URL", uri.as_str()),
        ("MESSAGE_INTERVAL_MS", "50"),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert_eq!(send_count(&server).await, 0);
}

#[tokio::test]
async fn missing_private_key_exits_with_code_one() {
    let output = run_to_exit(&[("CHAT_API_URL", "http://127.0.0.1:1")]).await;

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let logs = String::from_utf8_lossy(&output.stdout);
    assert!(logs.contains("PRIVATE_KEY"), "{logs}");
}

#[tokio::test]
async fn authenticated_bot_keeps_broadcasting_until_killed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"nonce": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "jwt-token"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_send_ok(&server).await;

    let uri = server.uri();
    let mut child: Child = bot_command(&[
        ("PRIVATE_KEY", PK),
        ("CHAT_API_URL", uri.as_str()),
        ("MESSAGE_INTERVAL_MS", "100"),
        ("MESSAGE_TEXT", "integration hello"),
    ])
    .spawn()
    .expect("Failed to start quills-chat-bot binary");

    let mut sends = 0;
    for _ in 0..100 {
        sends = send_count(&server).await;
        if sends >= 3 {
            break;
        }
        sleep(Duration::from_millis(100)).await;
    }

    assert!(child.try_wait().expect("poll child").is_none(), "bot exited early");
    child.kill().await.expect("kill bot");
    assert!(sends >= 3, "expected repeated sends, got {sends}");
}
