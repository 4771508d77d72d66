//! Conversation bookkeeping shared by the messaging handlers.
//!
//! A conversation row stores its two participants in ascending id order, which
//! is what the `(user1_id, user2_id)` unique constraint deduplicates on. Each
//! side keeps its own last-seen timestamp; unread counts are derived from it.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::{Conversation, Message};

pub const MAX_MESSAGE_LEN: usize = 2000;

/// Orders two user ids so the same pair always maps to the same row.
pub fn ordered_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b { (a, b) } else { (b, a) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Column holding this side's last-seen timestamp.
    pub fn last_seen_column(self) -> &'static str {
        match self {
            Side::First => "user1_last_seen_at",
            Side::Second => "user2_last_seen_at",
        }
    }
}

impl Conversation {
    pub fn side_of(&self, user_id: Uuid) -> Option<Side> {
        if user_id == self.user1_id {
            Some(Side::First)
        } else if user_id == self.user2_id {
            Some(Side::Second)
        } else {
            None
        }
    }

    pub fn partner_of(&self, user_id: Uuid) -> Option<Uuid> {
        match self.side_of(user_id)? {
            Side::First => Some(self.user2_id),
            Side::Second => Some(self.user1_id),
        }
    }

    pub fn last_seen_by(&self, side: Side) -> Option<OffsetDateTime> {
        match side {
            Side::First => self.user1_last_seen_at,
            Side::Second => self.user2_last_seen_at,
        }
    }
}

/// A message is unread for `viewer` when someone else sent it after the
/// viewer last opened the conversation. Never opened means everything counts.
pub fn is_unread(message: &Message, viewer: Uuid, last_seen: Option<OffsetDateTime>) -> bool {
    message.sender_id != viewer && last_seen.is_none_or(|seen| message.created_at > seen)
}

pub fn unread_count<'a, I>(messages: I, viewer: Uuid, last_seen: Option<OffsetDateTime>) -> i64
where
    I: IntoIterator<Item = &'a Message>,
{
    messages
        .into_iter()
        .filter(|m| is_unread(m, viewer, last_seen))
        .count() as i64
}

/// SQL counting unread messages per conversation for the viewer bound as `$1`.
/// Mirrors [`is_unread`].
pub const UNREAD_COUNT_SQL: &str = r#"
    SELECT COUNT(*) FROM messages m
    WHERE m.conversation_id = c.id
      AND m.sender_id <> $1
      AND m.created_at > COALESCE(
          CASE WHEN c.user1_id = $1 THEN c.user1_last_seen_at ELSE c.user2_last_seen_at END,
          '-infinity'::timestamptz
      )
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn conversation(a: Uuid, b: Uuid) -> Conversation {
        let (user1_id, user2_id) = ordered_pair(a, b);
        Conversation {
            id: 7,
            user1_id,
            user2_id,
            user1_last_seen_at: None,
            user2_last_seen_at: Some(datetime!(2026-01-01 10:00 UTC)),
            last_message_at: None,
            created_at: datetime!(2026-01-01 9:00 UTC),
        }
    }

    fn message(sender: Uuid, at: OffsetDateTime) -> Message {
        Message {
            id: 1,
            conversation_id: 7,
            sender_id: sender,
            content: "hi".into(),
            created_at: at,
        }
    }

    #[test]
    fn pair_order_is_independent_of_argument_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(ordered_pair(a, b), ordered_pair(b, a));

        let (first, second) = ordered_pair(a, b);
        assert!(first <= second);
    }

    #[test]
    fn sides_and_partners_resolve_for_participants_only() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = conversation(a, b);

        assert_eq!(c.partner_of(a), Some(b));
        assert_eq!(c.partner_of(b), Some(a));
        assert_eq!(c.partner_of(Uuid::new_v4()), None);
        assert_ne!(c.side_of(a), c.side_of(b));
    }

    #[test]
    fn own_messages_are_never_unread() {
        let me = Uuid::new_v4();
        let m = message(me, datetime!(2026-01-02 0:00 UTC));
        assert!(!is_unread(&m, me, None));
    }

    #[test]
    fn unseen_conversation_counts_every_incoming_message() {
        let me = Uuid::new_v4();
        let them = Uuid::new_v4();
        let msgs = vec![
            message(them, datetime!(2026-01-01 8:00 UTC)),
            message(me, datetime!(2026-01-01 8:05 UTC)),
            message(them, datetime!(2026-01-01 8:10 UTC)),
        ];
        assert_eq!(unread_count(&msgs, me, None), 2);
    }

    #[test]
    fn last_seen_hides_older_messages() {
        let me = Uuid::new_v4();
        let them = Uuid::new_v4();
        let seen = datetime!(2026-01-01 10:00 UTC);
        let msgs = vec![
            message(them, datetime!(2026-01-01 9:59 UTC)),
            message(them, seen),
            message(them, datetime!(2026-01-01 10:01 UTC)),
        ];
        assert_eq!(unread_count(&msgs, me, Some(seen)), 1);
    }

    #[test]
    fn last_seen_is_tracked_per_side() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = conversation(a, b);
        let second = c.side_of(c.user2_id).unwrap();

        assert_eq!(c.last_seen_by(second), Some(datetime!(2026-01-01 10:00 UTC)));
        assert_eq!(c.last_seen_by(Side::First), None);
        assert_eq!(Side::First.last_seen_column(), "user1_last_seen_at");
    }
}
