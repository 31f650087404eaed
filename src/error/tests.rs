//! Unit tests for error handling

use super::*;
use std::io;

mod analytics_error_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = AnalyticsError::from(io_error);

        match error {
            AnalyticsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = AnalyticsError::from(json_error);

        match error {
            AnalyticsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_dataset_unavailable_message() {
        let error = AnalyticsError::DatasetUnavailable {
            dataset: "target_depth".to_string(),
        };

        assert_eq!(error.to_string(), "Dataset not available: target_depth");
        assert!(!error.is_record_not_found());
        assert!(!error.is_caller_bug());
    }

    #[test]
    fn test_dataset_corrupt_message() {
        let error = AnalyticsError::DatasetCorrupt {
            dataset: "game_script".to_string(),
            path: "nfl_data/game_script.csv".to_string(),
            reason: "missing column total_plays".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("game_script"));
        assert!(message.contains("nfl_data/game_script.csv"));
        assert!(message.contains("missing column total_plays"));
    }

    #[test]
    fn test_record_not_found_classification() {
        let player = AnalyticsError::PlayerNotFound {
            name: "Nonexistent Player".to_string(),
        };
        let team = AnalyticsError::TeamNotFound {
            team: "XYZ".to_string(),
        };

        assert!(player.is_record_not_found());
        assert!(team.is_record_not_found());
        assert!(!player.is_caller_bug());
    }

    #[test]
    fn test_caller_bug_classification() {
        let unknown_team = AnalyticsError::UnknownTeam {
            abbreviation: "XXX".to_string(),
        };
        let unknown_capability = AnalyticsError::UnknownCapability {
            capability: "scores".to_string(),
        };

        assert!(unknown_team.is_caller_bug());
        assert!(unknown_capability.is_caller_bug());
        assert!(!unknown_team.is_record_not_found());
        assert_eq!(
            unknown_capability.to_string(),
            "Unknown ESPN capability: scores"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = AnalyticsError::InvalidPosition {
            position: "XX".to_string(),
        };

        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidPosition"));
        assert!(debug_string.contains("XX"));
    }
}
