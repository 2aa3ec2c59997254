//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TestUser,
};
use reqwest::StatusCode;

/// Create a comment on a fresh post as `author`
async fn create_comment(server: &TestServer, author: &TestUser) -> CommentResponse {
    let post_id = server.seed_user().await.unwrap().id;
    let response = server
        .post_auth(
            &format!("/posts/{post_id}/comments"),
            &author.token,
            &CreateCommentRequest::unique(),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn set_status(server: &TestServer, user: &TestUser, comment_id: &str, status: &str) {
    let response = server
        .put_auth(
            &format!("/comments/{comment_id}/like-status"),
            &user.token,
            &LikeStatusRequest::new(status),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

async fn view(server: &TestServer, viewer: Option<&TestUser>, comment_id: &str) -> CommentResponse {
    let path = format!("/comments/{comment_id}");
    let response = match viewer {
        Some(user) => server.get_auth(&path, &user.token).await.unwrap(),
        None => server.get(&path).await.unwrap(),
    };
    assert_json(response, StatusCode::OK).await.unwrap()
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
    let response = server.get_raw("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_raw("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user().await.unwrap();

    let response = server.get_auth("/users/@me", &user.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, user.id);
    assert_eq!(me.login, user.login);
}

#[tokio::test]
async fn test_unauthorized_access() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_delete_user_recounts_their_reactions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let fan = server.seed_user().await.unwrap();
    let critic = server.seed_user().await.unwrap();
    let comment = create_comment(&server, &author).await;

    set_status(&server, &fan, &comment.id, "Like").await;
    set_status(&server, &critic, &comment.id, "Dislike").await;

    let response = server.delete_auth("/users/@me", &fan.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let seen = view(&server, Some(&critic), &comment.id).await;
    assert_eq!(seen.likes_info.likes_count, 0);
    assert_eq!(seen.likes_info.dislikes_count, 1);
    assert_eq!(seen.likes_info.my_status, "Dislike");
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let created = create_comment(&server, &author).await;

    assert_eq!(created.commentator_info.user_id, author.id);
    assert_eq!(created.commentator_info.user_login, author.login);
    assert_eq!(created.likes_info.likes_count, 0);
    assert_eq!(created.likes_info.my_status, "None");

    let fetched = view(&server, None, &created.id).await;
    assert_eq!(fetched.content, created.content);
    assert_eq!(fetched.post_id, created.post_id);
}

#[tokio::test]
async fn test_create_comment_too_short() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let response = server
        .post_auth(
            "/posts/1/comments",
            &author.token,
            &CreateCommentRequest {
                content: "too short".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/comments/1").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!body.error.code.is_empty());
}

#[tokio::test]
async fn test_delete_comment_only_by_author() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let other = server.seed_user().await.unwrap();
    let comment = create_comment(&server, &author).await;
    let path = format!("/comments/{}", comment.id);

    let response = server.delete_auth(&path, &other.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &author.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Like Status Tests
// ============================================================================

#[tokio::test]
async fn test_like_dislike_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let a = server.seed_user().await.unwrap();
    let b = server.seed_user().await.unwrap();
    let comment = create_comment(&server, &author).await;

    set_status(&server, &a, &comment.id, "Like").await;
    set_status(&server, &b, &comment.id, "Like").await;
    let seen = view(&server, Some(&a), &comment.id).await;
    assert_eq!(seen.likes_info.likes_count, 2);
    assert_eq!(seen.likes_info.dislikes_count, 0);
    assert_eq!(seen.likes_info.my_status, "Like");

    // Switching moves the count rather than adding to it
    set_status(&server, &a, &comment.id, "Dislike").await;
    let seen = view(&server, Some(&a), &comment.id).await;
    assert_eq!(seen.likes_info.likes_count, 1);
    assert_eq!(seen.likes_info.dislikes_count, 1);
    assert_eq!(seen.likes_info.my_status, "Dislike");

    set_status(&server, &b, &comment.id, "None").await;
    let seen = view(&server, None, &comment.id).await;
    assert_eq!(seen.likes_info.likes_count, 0);
    assert_eq!(seen.likes_info.dislikes_count, 1);
    assert_eq!(seen.likes_info.my_status, "None");
}

#[tokio::test]
async fn test_repeated_like_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let user = server.seed_user().await.unwrap();
    let comment = create_comment(&server, &author).await;

    set_status(&server, &user, &comment.id, "Like").await;
    set_status(&server, &user, &comment.id, "Like").await;
    set_status(&server, &user, &comment.id, "Like").await;

    let seen = view(&server, Some(&user), &comment.id).await;
    assert_eq!(seen.likes_info.likes_count, 1);
}

#[tokio::test]
async fn test_none_without_reaction_is_accepted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let user = server.seed_user().await.unwrap();
    let comment = create_comment(&server, &author).await;

    set_status(&server, &user, &comment.id, "None").await;
    let seen = view(&server, Some(&user), &comment.id).await;
    assert_eq!(seen.likes_info.likes_count, 0);
    assert_eq!(seen.likes_info.dislikes_count, 0);
}

#[tokio::test]
async fn test_like_status_rejections() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let user = server.seed_user().await.unwrap();
    let comment = create_comment(&server, &author).await;
    let path = format!("/comments/{}/like-status", comment.id);

    let response = server.put(&path, &LikeStatusRequest::new("Like")).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .put_auth(&path, &user.token, &LikeStatusRequest::new("Love"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put_auth("/comments/1/like-status", &user.token, &LikeStatusRequest::new("Like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put_auth("/comments/abc/like-status", &user.token, &LikeStatusRequest::new("Like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_like_on_deleted_comment_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user().await.unwrap();
    let user = server.seed_user().await.unwrap();
    let comment = create_comment(&server, &author).await;

    let response = server
        .delete_auth(&format!("/comments/{}", comment.id), &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .put_auth(
            &format!("/comments/{}/like-status", comment.id),
            &user.token,
            &LikeStatusRequest::new("Like"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
