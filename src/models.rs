use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

// Accepts either a date-only string (YYYY-MM-DD, taken as UTC midnight) or a
// full ISO 8601 datetime.
pub(crate) mod date_format {
    use serde::{self, Deserialize, Deserializer};
    use time::{Date, OffsetDateTime, Time, UtcOffset};
    use time::format_description::well_known::Iso8601;

    pub fn parse(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
        match Date::parse(s, &Iso8601::DEFAULT) {
            Ok(date) => Ok(date.with_time(Time::MIDNIGHT).assume_offset(UtcOffset::UTC)),
            Err(_) => OffsetDateTime::parse(s, &Iso8601::DEFAULT),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(s) if !s.trim().is_empty() => {
                    parse(&s).map(Some).map_err(serde::de::Error::custom)
                }
                _ => Ok(None),
            }
        }
    }
}

// ============================================
// Users
// ============================================

#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub bio: Option<String>,
    pub sport: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub points: i32,
    pub rank: i32,
    pub is_banned: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub sport: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address or username.
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub image: Option<String>,
    pub points: i32,
    pub rank: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            image: user.image,
            points: user.points,
            rank: user.rank,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub sport: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub points: i32,
    pub rank: i32,
    pub followers: i64,
    pub following: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub bio: Option<String>,
    pub sport: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub points: i32,
    pub rank: i32,
    pub followers: i64,
    pub following: i64,
    pub is_following: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub sport: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAvatarResponse {
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub following: bool,
    pub followers: i64,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub image: Option<String>,
    pub points: i32,
    pub rank: i32,
}

// ============================================
// Feed
// ============================================

#[derive(Debug, FromRow)]
pub struct FeedPostRow {
    pub id: i32,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
    pub author_id: Uuid,
    pub author_username: String,
    pub author_full_name: String,
    pub author_image: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub liked_by_me: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub content: String,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub author: UserSummary,
    pub like_count: i64,
    pub comment_count: i64,
    pub liked_by_me: bool,
}

impl From<FeedPostRow> for PostResponse {
    fn from(row: FeedPostRow) -> Self {
        PostResponse {
            id: row.id,
            content: row.content,
            image_url: row.image_url,
            created_at: row.created_at,
            author: UserSummary {
                id: row.author_id,
                username: row.author_username,
                full_name: row.author_full_name,
                image: row.author_image,
            },
            like_count: row.like_count,
            comment_count: row.comment_count,
            liked_by_me: row.liked_by_me,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Debug, FromRow)]
pub struct CommentRow {
    pub id: i32,
    pub post_id: i32,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub author_id: Uuid,
    pub author_username: String,
    pub author_full_name: String,
    pub author_image: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i32,
    pub post_id: i32,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub author: UserSummary,
}

impl From<CommentRow> for CommentResponse {
    fn from(row: CommentRow) -> Self {
        CommentResponse {
            id: row.id,
            post_id: row.post_id,
            content: row.content,
            created_at: row.created_at,
            author: UserSummary {
                id: row.author_id,
                username: row.author_username,
                full_name: row.author_full_name,
                image: row.author_image,
            },
        }
    }
}

// ============================================
// Messaging
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct Conversation {
    pub id: i32,
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub user1_last_seen_at: Option<OffsetDateTime>,
    pub user2_last_seen_at: Option<OffsetDateTime>,
    pub last_message_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i32,
    pub conversation_id: i32,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartConversationRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i32,
    pub conversation_id: i32,
    pub sender_id: Uuid,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub is_mine: bool,
}

impl MessageResponse {
    pub fn for_viewer(message: Message, viewer: Uuid) -> Self {
        MessageResponse {
            id: message.id,
            conversation_id: message.conversation_id,
            sender_id: message.sender_id,
            is_mine: message.sender_id == viewer,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub id: i32,
    pub partner: UserSummary,
    pub last_message: Option<MessageResponse>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_message_at: Option<OffsetDateTime>,
    pub unread_count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

// ============================================
// Points economy
// ============================================

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PointTransaction {
    pub id: i32,
    pub user_id: Uuid,
    pub amount: i32,
    pub reason: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub balance: i32,
    pub rank: i32,
    pub transactions: Vec<PointTransaction>,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub cost: i32,
    /// `None` means unlimited stock.
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub visible: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reward_id: i32,
    pub cost: i32,
    pub status: String,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub resolved_at: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub reward_id: i32,
    pub reward_title: String,
    pub cost: i32,
    pub status: String,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub resolved_at: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
pub struct RedeemResponse {
    pub redemption: Redemption,
    pub balance: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionStatus {
    Pending,
    Fulfilled,
    Rejected,
}

impl RedemptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedemptionStatus::Pending => "pending",
            RedemptionStatus::Fulfilled => "fulfilled",
            RedemptionStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(RedemptionStatus::Pending),
            "fulfilled" => Some(RedemptionStatus::Fulfilled),
            "rejected" => Some(RedemptionStatus::Rejected),
            _ => None,
        }
    }

    /// Only pending redemptions can be resolved, and only to a terminal state.
    pub fn can_transition_to(&self, next: RedemptionStatus) -> bool {
        matches!(
            (self, next),
            (
                RedemptionStatus::Pending,
                RedemptionStatus::Fulfilled | RedemptionStatus::Rejected
            )
        )
    }

    /// Whether moving into this state hands the points back to the user.
    pub fn refunds(&self) -> bool {
        matches!(self, RedemptionStatus::Rejected)
    }
}

// ============================================
// Drills
// ============================================

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Drill {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub sport: String,
    pub difficulty: String,
    pub demo_video_url: Option<String>,
    pub points: i32,
    pub visible: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DrillWithStatus {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub sport: String,
    pub difficulty: String,
    pub demo_video_url: Option<String>,
    pub points: i32,
    pub status: String,
    pub submission_id: Option<Uuid>,
    pub feedback: Option<String>,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DrillSubmission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub drill_id: i32,
    pub video_url: String,
    pub notes: Option<String>,
    pub status: String,
    pub feedback: Option<String>,
    pub points_awarded: i32,
    pub points_credited: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub reviewed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DrillSubmissionDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub drill_id: i32,
    pub drill_title: String,
    pub video_url: String,
    pub notes: Option<String>,
    pub status: String,
    pub feedback: Option<String>,
    pub points_awarded: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub reviewed_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillStatus {
    NotSubmitted,
    UnderReview,
    Accepted,
    Rejected,
}

impl DrillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrillStatus::NotSubmitted => "not_submitted",
            DrillStatus::UnderReview => "under_review",
            DrillStatus::Accepted => "accepted",
            DrillStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "not_submitted" => Some(DrillStatus::NotSubmitted),
            "under_review" => Some(DrillStatus::UnderReview),
            "accepted" => Some(DrillStatus::Accepted),
            "rejected" => Some(DrillStatus::Rejected),
            _ => None,
        }
    }

    /// A video may be (re)submitted when nothing is pending and nothing was accepted.
    pub fn can_submit(&self) -> bool {
        matches!(self, DrillStatus::NotSubmitted | DrillStatus::Rejected)
    }

    pub fn can_transition_to(&self, next: DrillStatus) -> bool {
        match (self, next) {
            (DrillStatus::NotSubmitted | DrillStatus::Rejected, DrillStatus::UnderReview) => true,
            (DrillStatus::UnderReview, DrillStatus::Accepted | DrillStatus::Rejected) => true,
            _ => false,
        }
    }
}

// ============================================
// Tryouts
// ============================================

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tryout {
    pub id: i32,
    pub title: String,
    pub sport: String,
    pub location: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub application_deadline: Option<OffsetDateTime>,
    pub visible: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Tryout {
    pub fn accepting_applications(&self, now: OffsetDateTime) -> bool {
        self.application_deadline.is_none_or(|deadline| now <= deadline)
    }
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TryoutListing {
    pub id: i32,
    pub title: String,
    pub sport: String,
    pub location: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub application_deadline: Option<OffsetDateTime>,
    pub has_applied: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyTryoutRequest {
    pub position: String,
    pub experience: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TryoutApplication {
    pub id: i32,
    pub tryout_id: i32,
    pub user_id: Uuid,
    pub position: String,
    pub experience: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub admin_note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MyApplication {
    pub id: i32,
    pub tryout_id: i32,
    pub tryout_title: String,
    pub sport: String,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub position: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminApplicationRow {
    pub id: i32,
    pub tryout_id: i32,
    pub user_id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub experience: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub admin_note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ApplicationStatus::Pending),
            "shortlisted" => Some(ApplicationStatus::Shortlisted),
            "accepted" => Some(ApplicationStatus::Accepted),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, next),
            (Pending, Shortlisted | Accepted | Rejected) | (Shortlisted, Accepted | Rejected)
        )
    }
}

// ============================================
// Admin
// ============================================

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminSessionResponse {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct AdminItemResponse<T> {
    pub item: T,
}

#[derive(Debug, Serialize)]
pub struct AdminItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct AdminSuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub points: i32,
    pub rank: i32,
    pub is_banned: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct AdminBanRequest {
    pub banned: bool,
}

#[derive(Debug, Deserialize)]
pub struct AdminAdjustPointsRequest {
    pub amount: i32,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct AdminAdjustPointsResponse {
    pub balance: i32,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResponse {
    pub users: i64,
    pub banned_users: i64,
    pub posts: i64,
    pub messages: i64,
    pub drill_submissions_under_review: i64,
    pub pending_redemptions: i64,
    pub pending_applications: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateDrillRequest {
    pub title: String,
    pub description: String,
    pub sport: String,
    pub difficulty: Option<String>,
    pub demo_video_url: Option<String>,
    pub points: i32,
    pub visible: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateDrillRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub sport: Option<String>,
    pub difficulty: Option<String>,
    pub demo_video_url: Option<String>,
    pub points: Option<i32>,
    pub visible: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct AdminReviewDrillRequest {
    pub decision: DrillStatus,
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateRewardRequest {
    pub title: String,
    pub description: String,
    pub cost: i32,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub visible: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateRewardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cost: Option<i32>,
    pub stock: Option<i32>,
    /// Clears the stock limit when true.
    pub unlimited_stock: Option<bool>,
    pub image_url: Option<String>,
    pub visible: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct AdminResolveRedemptionRequest {
    pub decision: RedemptionStatus,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateTryoutRequest {
    pub title: String,
    pub sport: String,
    pub location: String,
    pub description: String,
    #[serde(deserialize_with = "date_format::deserialize")]
    pub event_date: OffsetDateTime,
    #[serde(default, deserialize_with = "date_format::option::deserialize")]
    pub application_deadline: Option<OffsetDateTime>,
    pub visible: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateTryoutRequest {
    pub title: Option<String>,
    pub sport: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "date_format::option::deserialize")]
    pub event_date: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "date_format::option::deserialize")]
    pub application_deadline: Option<OffsetDateTime>,
    /// Removes the deadline when true.
    pub clear_application_deadline: Option<bool>,
    pub visible: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateApplicationRequest {
    pub status: ApplicationStatus,
    pub admin_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn drill_workflow_follows_review_cycle() {
        use DrillStatus::*;

        assert!(NotSubmitted.can_transition_to(UnderReview));
        assert!(UnderReview.can_transition_to(Accepted));
        assert!(UnderReview.can_transition_to(Rejected));
        assert!(Rejected.can_transition_to(UnderReview));

        assert!(!NotSubmitted.can_transition_to(Accepted));
        assert!(!Accepted.can_transition_to(UnderReview));
        assert!(!Accepted.can_transition_to(Rejected));
        assert!(!UnderReview.can_transition_to(UnderReview));
    }

    #[test]
    fn only_fresh_or_rejected_drills_accept_videos() {
        assert!(DrillStatus::NotSubmitted.can_submit());
        assert!(DrillStatus::Rejected.can_submit());
        assert!(!DrillStatus::UnderReview.can_submit());
        assert!(!DrillStatus::Accepted.can_submit());
    }

    #[test]
    fn drill_status_strings_match_storage() {
        for status in [
            DrillStatus::NotSubmitted,
            DrillStatus::UnderReview,
            DrillStatus::Accepted,
            DrillStatus::Rejected,
        ] {
            assert_eq!(DrillStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(DrillStatus::parse("approved"), None);
    }

    #[test]
    fn review_decision_deserializes_from_snake_case() {
        let req: AdminReviewDrillRequest =
            serde_json::from_str(r#"{"decision":"accepted","feedback":"clean technique"}"#)
                .unwrap();
        assert_eq!(req.decision, DrillStatus::Accepted);
    }

    #[test]
    fn redemptions_resolve_once() {
        use RedemptionStatus::*;

        assert!(Pending.can_transition_to(Fulfilled));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Fulfilled.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Fulfilled));
        assert!(!Pending.can_transition_to(Pending));

        assert!(Rejected.refunds());
        assert!(!Fulfilled.refunds());
    }

    #[test]
    fn application_final_states_are_terminal() {
        use ApplicationStatus::*;

        assert!(Pending.can_transition_to(Shortlisted));
        assert!(Shortlisted.can_transition_to(Accepted));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Shortlisted.can_transition_to(Pending));
        assert!(!Accepted.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Shortlisted));
    }

    #[test]
    fn tryout_deadline_is_inclusive() {
        let deadline = datetime!(2026-03-01 12:00 UTC);
        let tryout = Tryout {
            id: 1,
            title: "U19 trials".into(),
            sport: "cricket".into(),
            location: "Oval".into(),
            description: String::new(),
            event_date: datetime!(2026-03-10 09:00 UTC),
            application_deadline: Some(deadline),
            visible: true,
            created_at: deadline,
            updated_at: deadline,
        };

        assert!(tryout.accepting_applications(deadline));
        assert!(!tryout.accepting_applications(datetime!(2026-03-01 12:00:01 UTC)));

        let open = Tryout {
            application_deadline: None,
            ..tryout
        };
        assert!(open.accepting_applications(datetime!(2030-01-01 0:00 UTC)));
    }

    #[test]
    fn dates_accept_plain_days_and_datetimes() {
        assert_eq!(
            date_format::parse("2026-05-04").unwrap(),
            datetime!(2026-05-04 0:00 UTC)
        );
        assert_eq!(
            date_format::parse("2026-05-04T10:30:00Z").unwrap(),
            datetime!(2026-05-04 10:30 UTC)
        );
        assert!(date_format::parse("next tuesday").is_err());
    }

    #[test]
    fn tryout_request_allows_missing_deadline() {
        let req: AdminCreateTryoutRequest = serde_json::from_str(
            r#"{"title":"Trials","sport":"football","location":"Field 2","description":"Open","eventDate":"2026-07-01"}"#,
        )
        .unwrap();
        assert!(req.application_deadline.is_none());
        assert_eq!(req.event_date, datetime!(2026-07-01 0:00 UTC));
    }

    #[test]
    fn tryout_update_can_clear_the_deadline() {
        let req: AdminUpdateTryoutRequest =
            serde_json::from_str(r#"{"clearApplicationDeadline":true}"#).unwrap();
        assert_eq!(req.clear_application_deadline, Some(true));
        assert!(req.application_deadline.is_none());
        assert!(req.event_date.is_none());
    }
}
