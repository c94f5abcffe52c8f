//! # Session Flow
//!
//! A session token is issued, the clock moves, and the expiry service decides
//! when re-authentication is required.

#[cfg(test)]
mod tests {
    use av_02_expiry::{is_expired, ExpiryApi, ExpiryError, ExpiryService, ValidityWindow};

    use crate::fixtures::{init_test_logging, ManualClock, JAN_1_2026, MINUTE_MS};

    fn session_service(window_minutes: u32) -> ExpiryService<ManualClock> {
        init_test_logging();
        ExpiryService::new(
            ValidityWindow::from_minutes(window_minutes),
            ManualClock::new(JAN_1_2026),
        )
        .expect("window is valid")
    }

    #[test]
    fn test_spec_scenarios_against_one_hour_window() {
        let now = JAN_1_2026;
        assert!(!is_expired(now - 30 * MINUTE_MS, 60.0, now));
        assert!(is_expired(now - 90 * MINUTE_MS, 60.0, now));
        assert!(!is_expired(now - 60 * MINUTE_MS, 60.0, now));
    }

    #[test]
    fn test_token_lifecycle() {
        let service = session_service(60);
        let issued_at = JAN_1_2026;

        assert!(!service.is_expired(issued_at));
        assert_eq!(service.remaining_minutes(issued_at), 60.0);

        service.time_source().advance_minutes(45);
        assert!(!service.is_expired(issued_at));
        assert_eq!(service.remaining_minutes(issued_at), 15.0);

        service.time_source().advance_minutes(15);
        assert!(!service.is_expired(issued_at), "window end is inclusive");

        service.time_source().advance_ms(1);
        assert!(service.is_expired(issued_at), "one millisecond later forces re-auth");
    }

    #[test]
    fn test_token_issued_by_skewed_server_clock() {
        // Server clock runs ahead: token appears to be issued in the future.
        let service = session_service(5);
        let issued_at = JAN_1_2026 + 2 * MINUTE_MS;

        assert!(!service.is_expired(issued_at));
        assert!(service.remaining_minutes(issued_at) > 5.0);
    }

    #[test]
    fn test_missing_issue_time_is_expired() {
        let service = session_service(24 * 60);
        assert!(service.is_expired(0));
    }

    #[test]
    fn test_window_from_configuration() {
        let window: ValidityWindow = serde_json::from_str(r#"{ "minutes": 0.5 }"#).unwrap();
        let service = ExpiryService::new(window, ManualClock::new(JAN_1_2026)).unwrap();

        assert!(!service.is_expired_at(JAN_1_2026 - 30_000, JAN_1_2026));
        assert!(service.is_expired_at(JAN_1_2026 - 30_001, JAN_1_2026));

        let bad: ValidityWindow = serde_json::from_str(r#"{ "minutes": -3.0 }"#).unwrap();
        assert!(matches!(
            ExpiryService::new(bad, ManualClock::new(0)),
            Err(ExpiryError::InvalidWindow { .. })
        ));
    }
}
