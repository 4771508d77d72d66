pub mod create_comment;
pub mod create_post;
pub mod delete_post;
pub mod get_feed;
pub mod get_post_comments;
pub mod like_post;

/// Feed row projection. `$1` is the viewer.
pub(crate) const POST_SELECT: &str = r#"
    SELECT
        p.id, p.content, p.image_url, p.created_at,
        u.id AS author_id,
        u.username AS author_username,
        u.full_name AS author_full_name,
        u.image AS author_image,
        (SELECT COUNT(*) FROM post_likes l WHERE l.post_id = p.id) AS like_count,
        (SELECT COUNT(*) FROM post_comments c WHERE c.post_id = p.id) AS comment_count,
        EXISTS (
            SELECT 1 FROM post_likes l WHERE l.post_id = p.id AND l.user_id = $1
        ) AS liked_by_me
    FROM posts p
    JOIN users u ON u.id = p.user_id
"#;

pub(crate) const COMMENT_SELECT: &str = r#"
    SELECT
        c.id, c.post_id, c.content, c.created_at,
        u.id AS author_id,
        u.username AS author_username,
        u.full_name AS author_full_name,
        u.image AS author_image
    FROM post_comments c
    JOIN users u ON u.id = c.user_id
"#;

pub(crate) const MAX_POST_LEN: usize = 2000;
pub(crate) const MAX_COMMENT_LEN: usize = 500;
