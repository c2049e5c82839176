//! Id tokens and display helpers.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

// Last issued token, so ids stay unique even when two are minted on the same
// millisecond.
static LAST_TOKEN: Mutex<i64> = Mutex::new(0);

/// Time-derived token, strictly increasing across the process.
pub fn next_token() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_TOKEN.lock().expect("token clock mutex poisoned");
    let token = now.max(*last + 1);
    *last = token;
    token
}

/// Comment id in the client's `c<millis>` shape.
pub fn comment_id() -> String {
    format!("c{}", next_token())
}

/// Post id in the client's `post-<millis>` shape.
pub fn post_id() -> String {
    format!("post-{}", next_token())
}

/// Relative timestamp in the app's locale, e.g. "há 5 min".
pub fn format_distance_to_now(moment: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(moment);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        "agora mesmo".to_string()
    } else if seconds < 3_600 {
        format!("há {} min", elapsed.num_minutes())
    } else if seconds < 86_400 {
        format!("há {} h", elapsed.num_hours())
    } else if seconds < 604_800 {
        format!("há {} d", elapsed.num_days())
    } else {
        format!("há {} sem", elapsed.num_days() / 7)
    }
}
