//! # Check-In Flow
//!
//! Acquire a position through `LocationProvider`, validate it against a
//! registry loaded from JSON, and confirm that acquisition failures never
//! reach the validator.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use av_01_geofencing::{
        CheckInApi, CheckInError, CheckInService, GeofenceApi, GeofenceConfig, GeofenceError,
        GeofenceMetrics,
    };
    use shared_types::{AcquisitionError, Locale};

    use crate::fixtures::{east_of, init_test_logging, load_campus, north_of, ScriptedLocation};

    const FATEC: shared_types::Coordinate =
        av_01_geofencing::domain::FATEC_VOTORANTIM_CENTER;

    fn campus_service(
        location: Arc<ScriptedLocation>,
    ) -> (CheckInService<ScriptedLocation>, Arc<GeofenceMetrics>) {
        init_test_logging();
        let metrics = Arc::new(GeofenceMetrics::new());
        let validator = load_campus().expect("campus config is valid");
        let service = CheckInService::with_metrics(location, validator, metrics.clone());
        (service, metrics)
    }

    // =============================================================================
    // CAMPUS SCENARIOS: single Fatec site
    // =============================================================================

    #[tokio::test]
    async fn test_default_registry_500m_inside() {
        init_test_logging();
        let location = Arc::new(ScriptedLocation::at(north_of(FATEC, 500.0)));
        let validator = GeofenceConfig::default().into_validator().unwrap();
        let service = CheckInService::new(location, validator);

        let result = service.check_in().await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.matched_site_name.as_deref(), Some("Fatec Votorantim"));
        assert_eq!(result.distance_meters, 500);
    }

    #[tokio::test]
    async fn test_default_registry_1500m_outside() {
        init_test_logging();
        let location = Arc::new(ScriptedLocation::at(north_of(FATEC, 1500.0)));
        let validator = GeofenceConfig::default().into_validator().unwrap();
        let service = CheckInService::new(location, validator);

        let result = service.check_in().await.unwrap();
        assert!(!result.is_valid);
        assert!(result.matched_site_name.is_none());
        assert_eq!(result.nearest_site_name.as_deref(), Some("Fatec Votorantim"));
        assert_eq!(result.distance_meters, 1500);
    }

    // =============================================================================
    // OVERLAPPING SITES: Fatec (1000 m) listed before Annex (300 m, ~1010 m north)
    // =============================================================================

    #[tokio::test]
    async fn test_overlap_first_registered_site_wins() {
        // 850 m north: inside Fatec (850 m) and inside Annex (~160 m).
        let (service, _) = campus_service(Arc::new(ScriptedLocation::at(north_of(FATEC, 850.0))));

        let result = service.check_in().await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.matched_site_name.as_deref(), Some("Fatec Votorantim"));
        assert_eq!(result.distance_meters, 850);
    }

    #[tokio::test]
    async fn test_second_site_admits_when_first_does_not() {
        let (service, _) = campus_service(Arc::new(ScriptedLocation::at(north_of(FATEC, 1200.0))));

        let result = service.check_in().await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.matched_site_name.as_deref(), Some("Annex"));
        assert_eq!(result.distance_meters, 190);
    }

    #[tokio::test]
    async fn test_nearest_reported_regardless_of_order() {
        let location = Arc::new(ScriptedLocation::at(north_of(FATEC, 2000.0)));
        let (service, metrics) = campus_service(location.clone());

        let north = service.check_in().await.unwrap();
        assert!(!north.is_valid);
        assert_eq!(north.nearest_site_name.as_deref(), Some("Annex"));
        assert_eq!(north.distance_meters, 990);

        location.move_to(north_of(FATEC, -1500.0));
        let south = service.check_in().await.unwrap();
        assert_eq!(south.nearest_site_name.as_deref(), Some("Fatec Votorantim"));
        assert_eq!(south.distance_meters, 1500);

        assert_eq!(metrics.snapshot().rejected, 2);
        assert_eq!(metrics.snapshot().avg_rejected_distance_m, 1245);
    }

    #[tokio::test]
    async fn test_east_offset_inside_campus() {
        let (service, _) = campus_service(Arc::new(ScriptedLocation::at(east_of(FATEC, 400.0))));

        let result = service.check_in().await.unwrap();
        assert!(result.is_valid);
        assert_eq!(result.distance_meters, 400);
    }

    // =============================================================================
    // ACQUISITION FAILURES
    // =============================================================================

    #[tokio::test]
    async fn test_permission_denied_is_distinct_from_invalid_location() {
        let location = Arc::new(ScriptedLocation::failing(AcquisitionError::PermissionDenied));
        let (service, metrics) = campus_service(location.clone());

        let err = service.check_in().await.unwrap_err();
        assert_eq!(err, CheckInError::Acquisition(AcquisitionError::PermissionDenied));
        assert_eq!(location.calls(), 1);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.checks, 0, "validator must not run without a coordinate");
        assert_eq!(snapshot.acquisition_failures, 1);

        location.move_to(north_of(FATEC, 5000.0));
        let outside = service.check_in().await.unwrap();
        assert_ne!(err.user_message(Locale::En), outside.message);
    }

    #[tokio::test]
    async fn test_sensor_recovery() {
        let location = Arc::new(ScriptedLocation::failing(AcquisitionError::Timeout));
        let (service, metrics) = campus_service(location.clone());

        assert!(service.check_in().await.is_err());

        location.move_to(north_of(FATEC, 10.0));
        assert!(service.check_in().await.unwrap().is_valid);

        location.fail_with(AcquisitionError::SensorUnavailable("provider disabled".into()));
        assert!(matches!(
            service.check_in().await,
            Err(CheckInError::Acquisition(AcquisitionError::SensorUnavailable(_)))
        ));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.acquisition_failures, 2);
        assert_eq!(snapshot.admitted, 1);
    }

    // =============================================================================
    // CONFIGURATION
    // =============================================================================

    #[test]
    fn test_empty_registry_is_configuration_error() {
        let config = GeofenceConfig::from_json_str(r#"{ "sites": [] }"#).unwrap();
        assert_eq!(config.into_validator().unwrap_err(), GeofenceError::EmptyRegistry);
        assert_eq!(
            av_01_geofencing::validate(FATEC, &[]),
            Err(GeofenceError::EmptyRegistry)
        );
    }

    #[test]
    fn test_service_exposes_configured_registry() {
        let (service, _) = campus_service(Arc::new(ScriptedLocation::at(FATEC)));
        let names: Vec<&str> = GeofenceApi::registry(&service)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Fatec Votorantim", "Annex"]);
        assert_eq!(service.locale(), Locale::En);
    }
}
