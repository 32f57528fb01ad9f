//! Integration tests for the admin and visitor bearer middleware

mod common;

use actix_web::test;
use chrono::Duration;
use resume_api::create_app;

use common::{bearer, test_context};

#[actix_web::test]
async fn test_profile_requires_visitor_token() {
    let ctx = test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "authorization required");

    let req = test::TestRequest::get()
        .uri("/api/profile")
        .insert_header(bearer(&ctx.visitor_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Ada Lovelace");
    assert_eq!(body["data"]["years_of_exp"], 7);
}

#[actix_web::test]
async fn test_malformed_authorization_header() {
    let ctx = test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for value in ["Basic YWRtaW46YWRtaW4xMjM=".to_string(), ctx.visitor_token()] {
        let req = test::TestRequest::get()
            .uri("/api/profile")
            .insert_header(("Authorization", value))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "invalid authorization header");
    }

    let req = test::TestRequest::get()
        .uri("/api/profile")
        .insert_header(bearer("not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_schemes_are_isolated() {
    let ctx = test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/profile")
        .insert_header(bearer(&ctx.admin_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/admin/profile")
        .insert_header(bearer(&ctx.visitor_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/admin/profile")
        .insert_header(bearer(&ctx.admin_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_token_expiry_boundary() {
    let ctx = test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let admin_token = ctx.admin_token();
    let visitor_token = ctx.visitor_token();

    ctx.clock.advance(Duration::hours(23) + Duration::minutes(59));

    let req = test::TestRequest::get()
        .uri("/api/admin/projects")
        .insert_header(bearer(&admin_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/projects")
        .insert_header(bearer(&visitor_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    ctx.clock.advance(Duration::minutes(2));

    let req = test::TestRequest::get()
        .uri("/api/admin/projects")
        .insert_header(bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "token expired");

    let req = test::TestRequest::get()
        .uri("/api/projects")
        .insert_header(bearer(&visitor_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}

#[actix_web::test]
async fn test_visitor_access_requires_admin_role() {
    let ctx = test_context().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let editor = ctx.editor_token();

    let req = test::TestRequest::get()
        .uri("/api/admin/visitor/access")
        .insert_header(bearer(&editor))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "insufficient permissions");

    let req = test::TestRequest::delete()
        .uri("/api/admin/visitor/access/1")
        .insert_header(bearer(&editor))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    // Other admin endpoints only need a valid admin token.
    let req = test::TestRequest::get()
        .uri("/api/admin/profile")
        .insert_header(bearer(&editor))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/admin/visitor/access")
        .insert_header(bearer(&ctx.admin_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"][0]["access_type"], "password");
    assert_eq!(body["data"][0]["access_key"], "visitor_key");
}
