//! Runs against a real Postgres: `#[sqlx::test]` creates a fresh database per
//! test from `DATABASE_URL` and applies `migrations/`.

mod common;

use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::json;
use sportsapp_backend::{
    messaging::{UNREAD_COUNT_SQL, ordered_pair, unread_count},
    models::{Conversation, Message},
    points::{record_points, update_user_ranks},
};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use common::{admin_token, app_with_pool, authed, json_body, test_config, user_token};

async fn insert_user(pool: &PgPool, username: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO users (id, username, email, password_hash, full_name) \
         VALUES ($1, $2, $3, 'unused', $2)",
    )
    .bind(id)
    .bind(username)
    .bind(format!("{username}@club.org"))
    .execute(pool)
    .await
    .unwrap();
    id
}

async fn grant(pool: &PgPool, user_id: Uuid, amount: i32) {
    let mut conn = pool.acquire().await.unwrap();
    record_points(&mut conn, user_id, amount, "starting balance")
        .await
        .unwrap();
}

async fn balance(pool: &PgPool, user_id: Uuid) -> i32 {
    sqlx::query_scalar("SELECT points FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn ledger_total(pool: &PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar(
        "SELECT COALESCE(SUM(amount), 0)::BIGINT FROM point_transactions WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn count(pool: &PgPool, sql: &str) -> i64 {
    sqlx::query_scalar(sql).fetch_one(pool).await.unwrap()
}

async fn insert_reward(pool: &PgPool, cost: i32, stock: Option<i32>) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO rewards (title, description, cost, stock) \
         VALUES ('Club kit', 'Training shirt', $1, $2) RETURNING id",
    )
    .bind(cost)
    .bind(stock)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn reward_stock(pool: &PgPool, reward_id: i32) -> Option<i32> {
    sqlx::query_scalar("SELECT stock FROM rewards WHERE id = $1")
        .bind(reward_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn insert_drill(pool: &PgPool, points: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO drills (title, description, sport, points) \
         VALUES ('Cover drive', 'Front foot, high elbow', 'cricket', $1) RETURNING id",
    )
    .bind(points)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_submission(pool: &PgPool, user_id: Uuid, drill_id: i32, status: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO drill_submissions (user_id, drill_id, video_url, status) \
         VALUES ($1, $2, '/uploads/drills/clip.mp4', $3) RETURNING id",
    )
    .bind(user_id)
    .bind(drill_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_conversation(pool: &PgPool, a: Uuid, b: Uuid) -> i32 {
    let (user1_id, user2_id) = ordered_pair(a, b);
    sqlx::query_scalar(
        "INSERT INTO conversations (user1_id, user2_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(user1_id)
    .bind(user2_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a message stamped `age_secs` seconds in the past.
async fn insert_message(pool: &PgPool, conversation_id: i32, sender_id: Uuid, age_secs: f64) {
    sqlx::query(
        "INSERT INTO messages (conversation_id, sender_id, content, created_at) \
         VALUES ($1, $2, 'nets at six?', NOW() - make_interval(secs => $3))",
    )
    .bind(conversation_id)
    .bind(sender_id)
    .bind(age_secs)
    .execute(pool)
    .await
    .unwrap();
}

fn multipart_video(file_name: &str) -> (String, Body) {
    let boundary = "sportsapp-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"video\"; filename=\"{file_name}\"\r\n\
         Content-Type: video/mp4\r\n\r\n\
         fake-video-bytes\r\n\
         --{boundary}--\r\n"
    );
    (format!("multipart/form-data; boundary={boundary}"), Body::from(body))
}

async fn stored_files(dir: &str) -> usize {
    let Ok(mut entries) = tokio::fs::read_dir(dir).await else {
        return 0;
    };
    let mut n = 0;
    while entries.next_entry().await.unwrap().is_some() {
        n += 1;
    }
    n
}

#[sqlx::test]
async fn drill_acceptance_credits_points_once(pool: PgPool) {
    let config = test_config();
    let admin = admin_token(&config);
    let app = app_with_pool(pool.clone(), config);

    let athlete = insert_user(&pool, "spin_king").await;
    let drill = insert_drill(&pool, 30).await;
    let submission = insert_submission(&pool, athlete, drill, "under_review").await;
    let review_uri = format!("/api/admin/drill-submissions/{submission}/review");

    let response = app
        .clone()
        .oneshot(authed(
            Method::POST,
            &review_uri,
            &admin,
            Some(json!({ "decision": "accepted", "feedback": "tidy footwork" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item = &json_body(response).await["item"];
    assert_eq!(item["status"], "accepted");
    assert_eq!(item["pointsAwarded"], 30);
    assert_eq!(balance(&pool, athlete).await, 30);

    // Accepted is terminal.
    let response = app
        .clone()
        .oneshot(authed(
            Method::POST,
            &review_uri,
            &admin,
            Some(json!({ "decision": "accepted" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Even if the row is pushed back into review, the credit is not repeated.
    sqlx::query("UPDATE drill_submissions SET status = 'under_review' WHERE id = $1")
        .bind(submission)
        .execute(&pool)
        .await
        .unwrap();

    let response = app
        .oneshot(authed(
            Method::POST,
            &review_uri,
            &admin,
            Some(json!({ "decision": "accepted" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(balance(&pool, athlete).await, 30);
    assert_eq!(ledger_total(&pool, athlete).await, 30);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM point_transactions").await, 1);
}

#[sqlx::test]
async fn rejected_drill_review_awards_nothing(pool: PgPool) {
    let config = test_config();
    let admin = admin_token(&config);
    let app = app_with_pool(pool.clone(), config);

    let athlete = insert_user(&pool, "keeper").await;
    let drill = insert_drill(&pool, 15).await;
    let submission = insert_submission(&pool, athlete, drill, "under_review").await;

    let response = app
        .oneshot(authed(
            Method::POST,
            &format!("/api/admin/drill-submissions/{submission}/review"),
            &admin,
            Some(json!({ "decision": "rejected", "feedback": "camera too far" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item = &json_body(response).await["item"];
    assert_eq!(item["status"], "rejected");
    assert_eq!(item["pointsAwarded"], 0);
    assert_eq!(balance(&pool, athlete).await, 0);
    assert_eq!(ledger_total(&pool, athlete).await, 0);
}

#[sqlx::test]
async fn rejected_redemption_refunds_and_restocks(pool: PgPool) {
    let config = test_config();
    let admin = admin_token(&config);
    let athlete = insert_user(&pool, "opener").await;
    let token = user_token(&config, athlete);
    let app = app_with_pool(pool.clone(), config);

    grant(&pool, athlete, 100).await;
    let reward = insert_reward(&pool, 40, Some(2)).await;

    let response = app
        .clone()
        .oneshot(authed(
            Method::POST,
            &format!("/api/rewards/{reward}/redeem"),
            &token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["balance"], 60);
    assert_eq!(body["redemption"]["status"], "pending");
    let redemption_id = body["redemption"]["id"].as_str().unwrap().to_string();
    assert_eq!(reward_stock(&pool, reward).await, Some(1));

    let resolve_uri = format!("/api/admin/redemptions/{redemption_id}/resolve");
    let response = app
        .clone()
        .oneshot(authed(
            Method::POST,
            &resolve_uri,
            &admin,
            Some(json!({ "decision": "rejected", "note": "size out of range" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["item"]["status"], "rejected");
    assert_eq!(balance(&pool, athlete).await, 100);
    assert_eq!(ledger_total(&pool, athlete).await, 100);
    assert_eq!(reward_stock(&pool, reward).await, Some(2));

    // Terminal states stay put.
    let response = app
        .oneshot(authed(
            Method::POST,
            &resolve_uri,
            &admin,
            Some(json!({ "decision": "fulfilled" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(balance(&pool, athlete).await, 100);
}

#[sqlx::test]
async fn redeeming_without_enough_points_writes_nothing(pool: PgPool) {
    let config = test_config();
    let athlete = insert_user(&pool, "tailender").await;
    let token = user_token(&config, athlete);
    let app = app_with_pool(pool.clone(), config);

    grant(&pool, athlete, 10).await;
    let reward = insert_reward(&pool, 40, Some(3)).await;

    let response = app
        .oneshot(authed(
            Method::POST,
            &format!("/api/rewards/{reward}/redeem"),
            &token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Insufficient points");
    assert_eq!(reward_stock(&pool, reward).await, Some(3));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM redemptions").await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM point_transactions").await, 1);
    assert_eq!(balance(&pool, athlete).await, 10);
    assert_eq!(ledger_total(&pool, athlete).await, 10);
}

#[sqlx::test]
async fn admin_reward_edit_keeps_concurrent_stock_decrement(pool: PgPool) {
    let config = test_config();
    let admin = admin_token(&config);
    let app = app_with_pool(pool.clone(), config);

    let reward = insert_reward(&pool, 25, Some(5)).await;

    // A redemption in flight: stock decremented, not yet committed.
    let mut tx = pool.begin().await.unwrap();
    sqlx::query("SELECT id FROM rewards WHERE id = $1 FOR UPDATE")
        .bind(reward)
        .execute(&mut *tx)
        .await
        .unwrap();
    sqlx::query("UPDATE rewards SET stock = stock - 1 WHERE id = $1")
        .bind(reward)
        .execute(&mut *tx)
        .await
        .unwrap();

    let edit = tokio::spawn(app.oneshot(authed(
        Method::PUT,
        &format!("/api/admin/rewards/{reward}"),
        &admin,
        Some(json!({ "title": "Club kit (2026)" })),
    )));

    tokio::time::sleep(Duration::from_millis(300)).await;
    tx.commit().await.unwrap();

    let response = edit.await.unwrap().unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let item = &json_body(response).await["item"];
    assert_eq!(item["title"], "Club kit (2026)");
    assert_eq!(item["stock"], 4);
    assert_eq!(reward_stock(&pool, reward).await, Some(4));
}

#[sqlx::test]
async fn tryout_deadline_can_be_cleared(pool: PgPool) {
    let config = test_config();
    let admin = admin_token(&config);
    let app = app_with_pool(pool.clone(), config);

    let response = app
        .clone()
        .oneshot(authed(
            Method::POST,
            "/api/admin/tryouts",
            &admin,
            Some(json!({
                "title": "U19 trials",
                "sport": "cricket",
                "location": "Main oval",
                "description": "Bring whites",
                "eventDate": "2030-03-10",
                "applicationDeadline": "2030-03-01"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let item = json_body(response).await["item"].clone();
    assert!(item["applicationDeadline"].is_string());
    let id = item["id"].as_i64().unwrap();

    let response = app
        .oneshot(authed(
            Method::PUT,
            &format!("/api/admin/tryouts/{id}"),
            &admin,
            Some(json!({ "clearApplicationDeadline": true })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item = &json_body(response).await["item"];
    assert!(item["applicationDeadline"].is_null());
    assert_eq!(item["title"], "U19 trials");
}

#[sqlx::test]
async fn starting_a_conversation_twice_reuses_it(pool: PgPool) {
    let config = test_config();
    let alice = insert_user(&pool, "alice").await;
    let bob = insert_user(&pool, "bob").await;
    let alice_token = user_token(&config, alice);
    let bob_token = user_token(&config, bob);
    let app = app_with_pool(pool.clone(), config);

    let response = app
        .clone()
        .oneshot(authed(
            Method::POST,
            "/api/conversations",
            &alice_token,
            Some(json!({ "userId": bob })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = json_body(response).await;

    let response = app
        .oneshot(authed(
            Method::POST,
            "/api/conversations",
            &bob_token,
            Some(json!({ "userId": alice })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let second = json_body(response).await;

    assert_eq!(first["id"], second["id"]);
    assert_eq!(second["partner"]["username"], "alice");
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM conversations").await, 1);
}

#[sqlx::test]
async fn unread_sql_agrees_with_unread_rule(pool: PgPool) {
    let alice = insert_user(&pool, "alice").await;
    let bob = insert_user(&pool, "bob").await;
    let conversation_id = insert_conversation(&pool, alice, bob).await;

    insert_message(&pool, conversation_id, alice, 60.0).await;
    insert_message(&pool, conversation_id, bob, 50.0).await;
    insert_message(&pool, conversation_id, alice, 40.0).await;
    insert_message(&pool, conversation_id, alice, 10.0).await;

    let side = if ordered_pair(alice, bob).0 == bob {
        "user1_last_seen_at"
    } else {
        "user2_last_seen_at"
    };

    for seen in [None, Some(45.0), Some(5.0)] {
        match seen {
            Some(age) => sqlx::query(&format!(
                "UPDATE conversations SET {side} = NOW() - make_interval(secs => $1) WHERE id = $2"
            ))
            .bind(age)
            .bind(conversation_id)
            .execute(&pool)
            .await
            .unwrap(),
            None => sqlx::query(&format!("UPDATE conversations SET {side} = NULL WHERE id = $1"))
                .bind(conversation_id)
                .execute(&pool)
                .await
                .unwrap(),
        };

        let conversation: Conversation = sqlx::query_as("SELECT * FROM conversations WHERE id = $1")
            .bind(conversation_id)
            .fetch_one(&pool)
            .await
            .unwrap();
        let messages: Vec<Message> =
            sqlx::query_as("SELECT * FROM messages WHERE conversation_id = $1")
                .bind(conversation_id)
                .fetch_all(&pool)
                .await
                .unwrap();
        let bob_side = conversation.side_of(bob).unwrap();
        let expected = unread_count(&messages, bob, conversation.last_seen_by(bob_side));

        let from_sql: i64 = sqlx::query_scalar(&format!(
            "SELECT ({UNREAD_COUNT_SQL}) FROM conversations c WHERE c.id = $2"
        ))
        .bind(bob)
        .bind(conversation_id)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(from_sql, expected, "last seen {seen:?}");
    }
}

#[sqlx::test]
async fn message_committed_after_a_read_stays_unread(pool: PgPool) {
    let config = test_config();
    let alice = insert_user(&pool, "alice").await;
    let bob = insert_user(&pool, "bob").await;
    let bob_token = user_token(&config, bob);
    let app = app_with_pool(pool.clone(), config);

    let conversation_id = insert_conversation(&pool, alice, bob).await;
    insert_message(&pool, conversation_id, alice, 10.0).await;

    let response = app
        .clone()
        .oneshot(authed(
            Method::GET,
            &format!("/api/conversations/{conversation_id}/messages"),
            &bob_token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

    // Stamped before Bob's read, but only visible after it.
    insert_message(&pool, conversation_id, alice, 5.0).await;

    let response = app
        .oneshot(authed(Method::GET, "/api/messages/unread-count", &bob_token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["unreadCount"], 1);
}

#[sqlx::test]
async fn leaderboard_skips_banned_users_without_gaps(pool: PgPool) {
    let config = test_config();
    let admin = admin_token(&config);
    let app = app_with_pool(pool.clone(), config);

    let star = insert_user(&pool, "star").await;
    let steady = insert_user(&pool, "steady").await;
    let rookie = insert_user(&pool, "rookie").await;
    grant(&pool, star, 50).await;
    grant(&pool, steady, 30).await;
    grant(&pool, rookie, 10).await;
    update_user_ranks(&pool).await.unwrap();

    let response = app
        .clone()
        .oneshot(authed(
            Method::PATCH,
            &format!("/api/admin/users/{star}/ban"),
            &admin,
            Some(json!({ "banned": true })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["item"]["rank"], 0);

    let response = app
        .oneshot(Request::get("/api/leaderboards").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let entries = json_body(response).await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["username"], "steady");
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[1]["username"], "rookie");
    assert_eq!(entries[1]["rank"], 2);
}

#[sqlx::test]
async fn drill_video_is_removed_when_submission_loses_a_race(pool: PgPool) {
    let config = test_config();
    let upload_dir = config.upload_dir.clone();
    let athlete = insert_user(&pool, "all_rounder").await;
    let token = user_token(&config, athlete);
    let app = app_with_pool(pool.clone(), config);

    let drill = insert_drill(&pool, 20).await;
    let submission = insert_submission(&pool, athlete, drill, "rejected").await;

    // Another upload moves the row back into review and has not committed yet.
    let mut tx = pool.begin().await.unwrap();
    sqlx::query("UPDATE drill_submissions SET status = 'under_review' WHERE id = $1")
        .bind(submission)
        .execute(&mut *tx)
        .await
        .unwrap();

    let (content_type, body) = multipart_video("retake.mp4");
    let request = Request::post(format!("/api/drills/{drill}/submission"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, content_type)
        .body(body)
        .unwrap();
    let upload = tokio::spawn(app.oneshot(request));

    tokio::time::sleep(Duration::from_millis(300)).await;
    tx.commit().await.unwrap();

    let response = upload.await.unwrap().unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(stored_files(&format!("{upload_dir}/drills")).await, 0);

    let _ = tokio::fs::remove_dir_all(&upload_dir).await;
}

#[sqlx::test]
async fn drill_submission_stores_the_video(pool: PgPool) {
    let config = test_config();
    let upload_dir = config.upload_dir.clone();
    let athlete = insert_user(&pool, "pacer").await;
    let token = user_token(&config, athlete);
    let app = app_with_pool(pool.clone(), config);

    let drill = insert_drill(&pool, 20).await;

    let (content_type, body) = multipart_video("yorker.mp4");
    let response = app
        .oneshot(
            Request::post(format!("/api/drills/{drill}/submission"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, content_type)
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["status"], "under_review");
    assert!(body["videoUrl"].as_str().unwrap().ends_with("_yorker.mp4"));
    assert_eq!(stored_files(&format!("{upload_dir}/drills")).await, 1);

    let _ = tokio::fs::remove_dir_all(&upload_dir).await;
}
