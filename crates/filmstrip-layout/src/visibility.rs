//! Whether the remote-thumbnail strip should render at all.

use serde::{Deserialize, Serialize};

/// Everything the visibility decision looks at, already resolved by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityContext {
    /// Conference size, synthetic participants (shared video, ...) included.
    pub participant_count: u32,
    /// The callee-info (invite) overlay is up.
    pub callee_info_visible: bool,
    /// `None` when the 1-on-1 setting is not configured at all.
    pub disable_1on1_mode: Option<bool>,
    pub toolbox_visible: bool,
    pub pinned_participant_is_local: bool,
}

/// Decide whether remote thumbnails are shown.
///
/// The callee-info overlay always hides them. Otherwise they show for more
/// than two participants, when 1-on-1 mode is explicitly disabled, or in a
/// two-person call whose 1-on-1 setting is configured while the toolbox is
/// up or the local participant is pinned.
pub fn should_show_remote_thumbnails(ctx: &VisibilityContext) -> bool {
    if ctx.callee_info_visible {
        return false;
    }

    let count = ctx.participant_count;
    count > 2
        || (count > 1
            && ctx.disable_1on1_mode.is_some()
            && (ctx.toolbox_visible || ctx.pinned_participant_is_local))
        || ctx.disable_1on1_mode == Some(true)
}
