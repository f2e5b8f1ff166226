use actix_web::{test, web, App};
use serde_json::{json, Value};

use api::config::Config;
use api::handlers::{auth, posts, users};
use api::middleware::auth::AuthMiddleware;
use application::content::create::CreateContentUseCase;
use infrastructure::store::Store;
use vybe_core::entities::content::ContentKind;

fn test_config() -> Config {
    Config {
        jwt_secret: "test-secret".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        cors_origin: "http://localhost:5173".to_string(),
        media_dir: "./media".to_string(),
        media_public_base: "http://localhost/media".to_string(),
        cookie_secure: false,
    }
}

macro_rules! init_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .wrap(AuthMiddleware)
                .app_data(web::Data::new($store.clone()))
                .app_data(web::Data::new(test_config()))
                .service(auth::signup)
                .service(auth::signin)
                .service(auth::signout)
                .service(users::current_user)
                .service(users::toggle_follow)
                .service(posts::toggle_like_post)
                .service(posts::add_comment_to_post),
        )
        .await
    };
}

macro_rules! sign_up {
    ($app:expr, $user_name:expr) => {{
        let user_name = $user_name;
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({
                "name": format!("{} example", user_name),
                "userName": user_name,
                "email": format!("{}@example.com", user_name),
                "password": "secret1",
            }))
            .to_request();

        let resp = test::call_service($app, req).await;
        assert!(resp.status().is_success());

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "token")
            .expect("signup must set the session cookie")
            .into_owned();

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        (body, cookie)
    }};
}

#[actix_web::test]
async fn test_signup_sets_cookie_and_returns_user() {
    let store = Store::in_memory();
    let app = init_app!(store);

    let (body, cookie) = sign_up!(&app, "alice");
    assert_eq!(body["user"]["userName"], json!("alice"));
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
    assert!(!cookie.value().is_empty());

    // The cookie authenticates follow-up requests
    let req = test::TestRequest::get()
        .uri("/api/user/current")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["userName"], json!("alice"));
}

#[actix_web::test]
async fn test_signin_wrong_password_is_200_with_failure_body() {
    let store = Store::in_memory();
    let app = init_app!(store);
    sign_up!(&app, "alice");

    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .set_json(json!({ "userName": "alice", "password": "wrong" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Incorrect password. Please try again."));
}

#[actix_web::test]
async fn test_protected_route_without_cookie() {
    let store = Store::in_memory();
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/api/user/current").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Token is not found"));
}

#[actix_web::test]
async fn test_tampered_cookie_rejected() {
    let store = Store::in_memory();
    let app = init_app!(store);
    sign_up!(&app, "alice");

    let req = test::TestRequest::get()
        .uri("/api/user/current")
        .cookie(actix_web::cookie::Cookie::new("token", "not-a-real-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid or expired token"));
}

#[actix_web::test]
async fn test_stale_cookie_does_not_block_open_routes() {
    let store = Store::in_memory();
    let app = init_app!(store);
    sign_up!(&app, "alice");

    // A browser still holding a dead token must be able to sign in again
    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .cookie(actix_web::cookie::Cookie::new("token", "stale-garbage"))
        .set_json(json!({ "userName": "alice", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let fresh = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .expect("signin must reissue the session cookie")
        .into_owned();
    assert!(!fresh.value().is_empty());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Login successful! Welcome back."));

    // Same for signing out
    let req = test::TestRequest::get()
        .uri("/api/auth/signout")
        .cookie(actix_web::cookie::Cookie::new("token", "stale-garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
}

#[actix_web::test]
async fn test_follow_flow_over_http() {
    let store = Store::in_memory();
    let app = init_app!(store);

    let (_, alice_cookie) = sign_up!(&app, "alice");
    let (bob_body, _) = sign_up!(&app, "bob");
    let bob_id = bob_body["user"]["id"].as_str().expect("bob id").to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/user/follow/{}", bob_id))
        .cookie(alice_cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["following"], json!(true));
    assert_eq!(body["message"], json!("Followed successfully"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/user/follow/{}", bob_id))
        .cookie(alice_cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["following"], json!(false));
    assert_eq!(body["message"], json!("Unfollowed successfully"));
}

#[actix_web::test]
async fn test_like_and_comment_flow_over_http() {
    let store = Store::in_memory();
    let app = init_app!(store);

    let (alice_body, alice_cookie) = sign_up!(&app, "alice");
    let alice_id = alice_body["user"]["id"]
        .as_str()
        .expect("alice id")
        .parse()
        .expect("alice id is a uuid");

    let post = CreateContentUseCase::execute(
        &store,
        alice_id,
        ContentKind::Post,
        Some("http://media/p.jpg".to_string()),
        Some("first post".to_string()),
        Some("image"),
    )
    .await
    .expect("seeding post failed");

    let req = test::TestRequest::get()
        .uri(&format!("/api/post/like/{}", post.id))
        .cookie(alice_cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Post liked successfully."));
    assert_eq!(body["data"]["likes"].as_array().map(|l| l.len()), Some(1));

    let req = test::TestRequest::post()
        .uri(&format!("/api/post/comment/{}", post.id))
        .cookie(alice_cookie)
        .set_json(json!({ "message": "nice one" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Comment added successfully."));
    assert_eq!(
        body["data"]["comments"][0]["message"],
        json!("nice one")
    );
}
