//! Full workflow against a real listener.

use std::time::Duration;

use emergency_note::lifecycle::Shutdown;
use emergency_note::session::keys;
use emergency_note::session::SessionId;

mod common;
use common::*;

fn session_cookie(response: &reqwest::Response) -> String {
    let value = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie");
    value.split(';').next().unwrap().to_string()
}

fn session_id(cookie: &str) -> SessionId {
    let (_, id) = cookie.split_once('=').unwrap();
    SessionId::parse(id).unwrap()
}

/// What a user types into the start page, leaving the date untouched.
fn typed() -> Vec<(&'static str, String)> {
    vec![
        ("subject", "Test".to_string()),
        ("note", "Body".to_string()),
        ("primary_email", "a@x.com".to_string()),
        ("inactivity_time", "10".to_string()),
    ]
}

#[tokio::test]
async fn test_browser_walks_entry_start_review_done() {
    let server = server();
    let store = server.sessions();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.clone();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap();
    let base = format!("http://{}", addr);

    let entry = client.get(format!("{base}/")).send().await.expect("server unreachable");
    assert_eq!(entry.status(), 200);
    let cookie = session_cookie(&entry);
    let id = session_id(&cookie);

    let start = client
        .get(format!("{base}/start"))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(start.status(), 200);
    let start_html = start.text().await.unwrap();
    let token = extract_token(&start_html).expect("token in form");

    let script = client.get(format!("{base}/assets/start.js")).send().await.unwrap();
    assert_eq!(script.status(), 200);
    assert!(script.text().await.unwrap().contains("set_expiration"));

    let fields = fill_form(&start_html, &typed());
    assert!(fields.iter().all(|(name, _)| name != "expiration_date"));
    let review = client
        .post(format!("{base}/review"))
        .header("cookie", &cookie)
        .form(&fields)
        .send()
        .await
        .unwrap();
    assert_eq!(review.status(), 200);
    assert_eq!(store.get(&id, keys::EXPIRATION_DATE).as_deref(), Some("none"));
    assert_eq!(store.get(&id, keys::SECONDARY_EMAIL).as_deref(), Some("none"));
    let review_html = review.text().await.unwrap();
    assert_eq!(extract_token(&review_html).as_deref(), Some(token.as_str()));

    let done = client
        .post(format!("{base}/done"))
        .header("cookie", &cookie)
        .form(&fill_form(&review_html, &[]))
        .send()
        .await
        .unwrap();
    assert_eq!(done.status(), 200);
    assert!(!store.exists(&id));

    // The session is gone: replaying the review lands back on the entry page.
    let replay = client
        .post(format!("{base}/review"))
        .header("cookie", &cookie)
        .form(&fields)
        .send()
        .await
        .unwrap();
    assert_eq!(replay.status(), 303);
    assert_eq!(replay.headers().get("location").unwrap(), "/");

    shutdown.trigger();
}
