use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Returns a spinner character for `time_ms`, cycling every 300ms.
pub fn spinner_char(time_ms: u128) -> &'static str {
    SPINNER_FRAMES[(time_ms / 300) as usize % SPINNER_FRAMES.len()]
}

/// Wall clock in milliseconds, used when a render has no fixed time.
pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_advance_every_300ms() {
        assert_eq!(spinner_char(0), "◐");
        assert_eq!(spinner_char(299), "◐");
        assert_eq!(spinner_char(300), "◓");
        assert_eq!(spinner_char(1200), "◐");
    }
}
