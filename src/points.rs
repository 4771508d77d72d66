//! Points ledger. Every balance change is a `point_transactions` row, and
//! `users.points` is the running total kept in step inside the same
//! database transaction.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::AppError;

/// Appends a ledger entry and applies it to the cached balance. Returns the
/// new balance. Fails without writing anything if the balance would go
/// negative.
pub async fn record_points(
    conn: &mut PgConnection,
    user_id: Uuid,
    amount: i32,
    reason: &str,
) -> Result<i32, AppError> {
    if amount == 0 {
        return Err(AppError::BadRequest("amount must not be zero".to_string()));
    }

    let balance: Option<i32> = sqlx::query_scalar(
        "UPDATE users SET points = points + $1, updated_at = NOW() \
         WHERE id = $2 AND points + $1 >= 0 RETURNING points",
    )
    .bind(amount)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(balance) = balance else {
        let exists: Option<i32> = sqlx::query_scalar("SELECT points FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await?;

        return match exists {
            Some(_) => Err(AppError::BadRequest("Insufficient points".to_string())),
            None => Err(AppError::NotFound),
        };
    };

    sqlx::query("INSERT INTO point_transactions (user_id, amount, reason) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(amount)
        .bind(reason)
        .execute(&mut *conn)
        .await?;

    tracing::info!(%user_id, amount, balance, reason, "points recorded");

    Ok(balance)
}

/// Ranks active users 1..n by points. Banned users are unranked (0), so the
/// leaderboard has no gaps.
pub async fn update_user_ranks(pool: &sqlx::PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        UPDATE users SET rank = ranked.new_rank
        FROM (
            SELECT
                id,
                CASE
                    WHEN is_banned THEN 0
                    ELSE ROW_NUMBER() OVER (
                        PARTITION BY is_banned ORDER BY points DESC, created_at ASC
                    )
                END AS new_rank
            FROM users
        ) AS ranked
        WHERE users.id = ranked.id AND users.rank IS DISTINCT FROM ranked.new_rank
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub fn drill_reason(drill_title: &str) -> String {
    format!("Drill accepted: {drill_title}")
}

pub fn redemption_reason(reward_title: &str) -> String {
    format!("Redeemed: {reward_title}")
}

pub fn refund_reason(reward_title: &str) -> String {
    format!("Refund: {reward_title}")
}
