//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! The storage backend defaults to local disk, which is what the
//! upload round-trip tests assume.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, provision_admin, TestServer,
};
use reqwest::StatusCode;

/// Provision an admin account and log in through the API
async fn admin_token(server: &TestServer) -> String {
    let (email, password) = provision_admin()
        .await
        .expect("Failed to provision admin");

    let response = server
        .post("/admin/auth/login", &LoginRequest::new(email, password))
        .await
        .expect("Login request failed");
    let body: ApiEnvelope<AuthResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    body.data.expect("Login returned no data").token
}

/// Create a banner and return its response body
async fn create_banner(server: &TestServer, token: &str, page_slug: &str) -> BannerResponse {
    let response = server
        .post_multipart_auth("/admin/banners", token, banner_form(page_slug))
        .await
        .expect("Create request failed");
    let body: ApiEnvelope<BannerResponse> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    body.data.expect("Create returned no data")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_admin_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (email, password) = provision_admin().await.unwrap();

    let response = server
        .post(
            "/admin/auth/login",
            &LoginRequest::new(email.clone(), password),
        )
        .await
        .unwrap();
    let body: ApiEnvelope<AuthResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    let auth = body.data.unwrap();
    assert!(!auth.token.is_empty());
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert_eq!(auth.admin.email, email);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (email, _) = provision_admin().await.unwrap();

    let response = server
        .post("/admin/auth/login", &LoginRequest::new(email, "WrongPass1!"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/admin/auth/login",
            &LoginRequest::new("nobody@example.com", "whatever"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_rejects_malformed_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/admin/auth/login",
            &LoginRequest::new("not-an-email", "whatever"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Banner Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_banner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let slug = unique_page_slug();

    let response = server
        .post_multipart_auth("/admin/banners", &token, banner_form(&slug))
        .await
        .unwrap();
    let body: ApiEnvelope<BannerResponse> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(body.success);
    assert_eq!(body.message.as_deref(), Some("Banner created successfully"));

    let banner = body.data.unwrap();
    assert_eq!(banner.page_slug, slug);
    assert_eq!(banner.status, "active");
    assert!(!banner.image.is_empty());
}

#[tokio::test]
async fn test_create_banner_with_inactive_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let slug = unique_page_slug();

    let response = server
        .post_multipart_auth(
            "/admin/banners",
            &token,
            banner_form_with_status(&slug, "inactive"),
        )
        .await
        .unwrap();
    let body: ApiEnvelope<BannerResponse> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.data.unwrap().status, "inactive");
}

#[tokio::test]
async fn test_create_banner_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_multipart("/admin/banners", banner_form(&unique_page_slug()))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert!(!body.success);
    assert_eq!(body.message, "Authorization header required");
}

#[tokio::test]
async fn test_create_banner_rejects_invalid_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_multipart_auth(
            "/admin/banners",
            "garbage-token",
            banner_form(&unique_page_slug()),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(body.message, "Invalid or expired token");
}

#[tokio::test]
async fn test_create_banner_missing_file() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server
        .post_multipart_auth("/admin/banners", &token, form_without_file(&unique_page_slug()))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.message, "Missing required fields");
}

#[tokio::test]
async fn test_create_banner_missing_page_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server
        .post_multipart_auth("/admin/banners", &token, form_without_slug())
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.message, "Missing required fields");
}

#[tokio::test]
async fn test_uploaded_image_is_served() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let banner = create_banner(&server, &token, &unique_page_slug()).await;
    assert!(banner.image.starts_with('/'));

    let response = server.get(&banner.image).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let served = response.bytes().await.unwrap();
    assert_eq!(served.as_ref(), png_bytes().as_slice());
}

// ============================================================================
// Banner Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_banners_hides_inactive_from_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let slug = unique_page_slug();

    create_banner(&server, &token, &slug).await;
    server
        .post_multipart_auth(
            "/admin/banners",
            &token,
            banner_form_with_status(&slug, "inactive"),
        )
        .await
        .unwrap();

    // Anonymous callers only see the active banner
    let response = server.get(&format!("/banners?pageSlug={slug}")).await.unwrap();
    let body: ApiEnvelope<Vec<BannerResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let banners = body.data.unwrap();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].status, "active");

    // An authenticated admin sees both
    let response = server
        .get_auth(&format!("/banners?pageSlug={slug}"), &token)
        .await
        .unwrap();
    let body: ApiEnvelope<Vec<BannerResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_banners_ignores_invalid_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let slug = unique_page_slug();

    create_banner(&server, &token, &slug).await;
    server
        .post_multipart_auth(
            "/admin/banners",
            &token,
            banner_form_with_status(&slug, "inactive"),
        )
        .await
        .unwrap();

    // A bad token falls back to the public view instead of failing
    let response = server
        .get_auth(&format!("/banners?pageSlug={slug}"), "garbage-token")
        .await
        .unwrap();
    let body: ApiEnvelope<Vec<BannerResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let banners = body.data.unwrap();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].status, "active");
}

#[tokio::test]
async fn test_public_banner_endpoint() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;
    let slug = unique_page_slug();

    create_banner(&server, &token, &slug).await;
    server
        .post_multipart_auth(
            "/admin/banners",
            &token,
            banner_form_with_status(&slug, "inactive"),
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/public/banner?pageSlug={slug}"))
        .await
        .unwrap();
    let body: ApiEnvelope<Vec<BannerResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let banners = body.data.unwrap();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].status, "active");
}

// ============================================================================
// Banner Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_get_banner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let created = create_banner(&server, &token, &unique_page_slug()).await;

    let response = server.get(&format!("/banners/{}", created.id)).await.unwrap();
    let body: ApiEnvelope<BannerResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let banner = body.data.unwrap();
    assert_eq!(banner.id, created.id);
    assert_eq!(banner.page_slug, created.page_slug);
}

#[tokio::test]
async fn test_get_banner_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/banners/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_banner_malformed_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/banners/not-a-uuid").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Banner Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_banner_without_file_keeps_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let created = create_banner(&server, &token, &unique_page_slug()).await;
    let new_slug = unique_page_slug();

    let response = server
        .put_multipart_auth(
            &format!("/admin/banners/{}", created.id),
            &token,
            form_without_file(&new_slug),
        )
        .await
        .unwrap();
    let body: ApiEnvelope<BannerResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message.as_deref(), Some("Banner updated successfully"));
    let banner = body.data.unwrap();
    assert_eq!(banner.page_slug, new_slug);
    assert_eq!(banner.image, created.image);
}

#[tokio::test]
async fn test_update_banner_with_file_replaces_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let created = create_banner(&server, &token, &unique_page_slug()).await;

    let response = server
        .put_multipart_auth(
            &format!("/admin/banners/{}", created.id),
            &token,
            banner_form(&created.page_slug),
        )
        .await
        .unwrap();
    let body: ApiEnvelope<BannerResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let updated = body.data.unwrap();
    assert_ne!(updated.image, created.image);

    // New image is served, replaced one is gone
    let response = server.get(&updated.image).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = server.get(&created.image).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_banner_requires_page_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let created = create_banner(&server, &token, &unique_page_slug()).await;

    let response = server
        .put_multipart_auth(
            &format!("/admin/banners/{}", created.id),
            &token,
            form_without_slug(),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.message, "pageSlug is required");
}

#[tokio::test]
async fn test_update_banner_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server
        .put_multipart_auth(
            &format!("/admin/banners/{}", uuid::Uuid::new_v4()),
            &token,
            form_without_file(&unique_page_slug()),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert!(body.message.starts_with("Banner not found"));
}

#[tokio::test]
async fn test_update_banner_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let created = create_banner(&server, &token, &unique_page_slug()).await;

    let response = server
        .put_multipart(
            &format!("/admin/banners/{}", created.id),
            form_without_file(&created.page_slug),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Banner Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_delete_banner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let created = create_banner(&server, &token, &unique_page_slug()).await;

    let response = server
        .delete_auth(&format!("/admin/banners/{}", created.id), &token)
        .await
        .unwrap();
    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.message.as_deref(), Some("Banner deleted successfully"));

    // Deleted banner no longer resolves
    let response = server.get(&format!("/banners/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_banner_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let created = create_banner(&server, &token, &unique_page_slug()).await;
    let path = format!("/admin/banners/{}", created.id);

    server.delete_auth(&path, &token).await.unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message.as_deref(), Some("Banner deleted successfully"));
}

#[tokio::test]
async fn test_delete_banner_malformed_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server
        .delete_auth("/admin/banners/not-a-uuid", &token)
        .await
        .unwrap();
    let body: ApiEnvelope<serde_json::Value> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message.as_deref(), Some("Banner deleted successfully"));
}

#[tokio::test]
async fn test_delete_banner_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let created = create_banner(&server, &token, &unique_page_slug()).await;

    let response = server
        .delete(&format!("/admin/banners/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
