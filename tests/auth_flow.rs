mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};

#[tokio::test]
async fn test_register_flow_success() {
    println!("\n\n[+] Running test: test_register_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let (mrsu, google) = TestClient::default_clients();
    let app = test::init_service(client.create_app(mrsu, google)).await;
    println!("[+] Actix web app initialized.");

    let body = test_data::sample_register();
    println!("[>] Sending request to register: {}", body.email);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::CREATED);

    let out: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", out);
    assert_eq!(out["email"], "student@example.com");
    assert_eq!(out["is_active"], true);
    assert!(out.get("password").is_none());
    assert!(out.get("password_hash").is_none());

    // Verify persisted state: hashed password only, nothing linked yet
    let user = ctx
        .db
        .get_user_by_email("student@example.com")
        .await
        .expect("User should exist");
    assert_ne!(user.password_hash, body.password);
    assert!(user.password_hash.starts_with("$argon2"));
    assert!(!user.is_mrsu_verified);
    assert!(!user.is_google_verified);
    println!("[/] Test passed: register flow successful.");
}

#[tokio::test]
async fn test_register_duplicate_email_conflict() {
    println!("\n\n[+] Running test: test_register_duplicate_email_conflict");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let (mrsu, google) = TestClient::default_clients();
    let app = test::init_service(client.create_app(mrsu, google)).await;

    let body = test_data::sample_register_with_email("dup@example.com");
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(&body)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    println!("[>] Registering the same email again.");
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let out: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(out["error"], "ALREADY_EXISTS");
    println!("[/] Test passed: duplicate registration rejected.");
}

#[tokio::test]
async fn test_register_validation() {
    println!("\n\n[+] Running test: test_register_validation");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let (mrsu, google) = TestClient::default_clients();
    let app = test::init_service(client.create_app(mrsu, google)).await;

    // bad email shape
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({"email": "not-an-email", "password": "sup3r-secret"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // short password
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({"email": "short@example.com", "password": "12345"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(ctx.db.get_user_by_email("short@example.com").await.is_err());
    println!("[/] Test passed: invalid registrations rejected.");
}

#[tokio::test]
async fn test_login_flow() {
    println!("\n\n[+] Running test: test_login_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let (mrsu, google) = TestClient::default_clients();
    let app = test::init_service(client.create_app(mrsu, google)).await;

    let body = test_data::sample_register_with_email("login@example.com");
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(&body)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    println!("[>] Logging in with the registered credentials.");
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form([("username", "login@example.com"), ("password", "sup3r-secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let out: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(out["token_type"], "bearer");
    let token = out["access_token"].as_str().expect("token missing");
    assert!(!token.is_empty());

    // The issued token opens a protected route
    println!("[>] Calling /users/me with the fresh token.");
    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(me["email"], "login@example.com");
    assert_eq!(me["mrsu_linked"], false);
    assert_eq!(me["google_linked"], false);
    println!("[/] Test passed: login issues a working bearer token.");
}

#[tokio::test]
async fn test_login_wrong_password() {
    println!("\n\n[+] Running test: test_login_wrong_password");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let (mrsu, google) = TestClient::default_clients();
    let app = test::init_service(client.create_app(mrsu, google)).await;

    client
        .create_test_user("victim@example.com", "right-password")
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form([("username", "victim@example.com"), ("password", "wrong-password")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // unknown account answers the same way
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form([("username", "ghost@example.com"), ("password", "whatever-pw")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: bad credentials rejected uniformly.");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    println!("\n\n[+] Running test: test_protected_routes_require_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let (mrsu, google) = TestClient::default_clients();
    let app = test::init_service(client.create_app(mrsu, google)).await;

    let req = test::TestRequest::get().uri("/users/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header(("Authorization", "Bearer garbage.token.here"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: protected route refuses missing/garbage tokens.");
}
