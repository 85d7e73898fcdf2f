//! Presentation sink trait.
//!
//! The rendering target is abstracted behind a capability interface so the
//! directory, repository, and aggregation logic stay testable without any
//! concrete surface. Implementations receive fully computed values and
//! perform no filtering, sorting, or arithmetic of their own.

use crate::aggregate::{OverallSummary, Summary, UserSummary};
use crate::score::Score;
use crate::user::User;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
    Info,
}

/// A rendering target for computed user, score, and summary data.
///
/// Every renderer must produce an explicit "no data" indicator for empty
/// input rather than a blank region.
pub trait Presenter {
    /// Renders the user directory listing (already sorted by name).
    fn render_user_list(&mut self, users: &[User]);

    /// Renders the score table (already sorted, most recent first).
    fn render_score_table(&mut self, scores: &[Score]);

    /// Renders the overall summary block; `None` means no data.
    fn render_summary(&mut self, summary: Option<&Summary>);

    /// Renders per-user stat cards in the given order, preceded by the
    /// overall card when one is supplied.
    fn render_user_cards(&mut self, cards: &[UserSummary], overall: Option<&OverallSummary>);

    /// Shows a one-line notification.
    fn notify(&mut self, notice: Notice, message: &str);
}
