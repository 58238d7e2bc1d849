//! Time and timestamp utilities

use chrono::Local;

/// Format used for game creation dates
pub const GAME_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used in backup file names
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Current local time formatted as a game date
pub fn game_timestamp() -> String {
    Local::now().format(GAME_DATE_FORMAT).to_string()
}

/// Current local time for a backup file name, e.g. `20240512-181530`
pub fn backup_timestamp() -> String {
    Local::now().format(BACKUP_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_timestamp_shape() {
        let ts = game_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, GAME_DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_backup_timestamp_is_file_name_safe() {
        let ts = backup_timestamp();
        assert_eq!(ts.len(), 15);
        assert!(ts.chars().all(|c| c.is_ascii_digit() || c == '-'));
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, BACKUP_STAMP_FORMAT).is_ok());
    }
}
