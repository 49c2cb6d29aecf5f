//! Admin page components for route-based navigation.

mod moderation_page;

pub use moderation_page::AdminModerationPage;
