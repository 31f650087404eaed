//! Unit tests for the endpoint catalogue and fetch outcomes

use super::*;
use crate::config::{ESPN_CORE_BASE_URL, ESPN_SITE_BASE_URL};

mod catalogue_tests {
    use super::*;

    #[test]
    fn test_default_templates() {
        let catalogue = EndpointCatalogue::default();

        assert_eq!(
            catalogue.template(Capability::Injuries),
            format!("{ESPN_CORE_BASE_URL}/teams/{{team_id}}/injuries")
        );
        assert_eq!(
            catalogue.template(Capability::DepthChart),
            format!("{ESPN_CORE_BASE_URL}/seasons/2024/teams/{{team_id}}/depthcharts")
        );
        assert_eq!(
            catalogue.template(Capability::Roster),
            format!("{ESPN_SITE_BASE_URL}/teams/{{team_id}}/roster")
        );
        assert_eq!(
            catalogue.template(Capability::Teams),
            format!("{ESPN_SITE_BASE_URL}/teams")
        );
    }

    #[test]
    fn test_url_for_substitutes_team_id() {
        let catalogue = EndpointCatalogue::default();

        let url = catalogue
            .url_for(Capability::Injuries, Some(TeamId::new(12)))
            .unwrap();
        assert_eq!(
            url,
            "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl/teams/12/injuries"
        );
    }

    #[test]
    fn test_url_for_requires_team_id_where_templated() {
        let catalogue = EndpointCatalogue::default();

        for capability in Capability::ALL {
            let result = catalogue.url_for(capability, None);
            if capability.requires_team() {
                assert!(matches!(result, Err(AnalyticsError::MissingTeamId { .. })));
            } else {
                assert!(!result.unwrap().contains(TEAM_ID_PLACEHOLDER));
            }
        }
    }

    #[test]
    fn test_url_for_ignores_team_id_without_placeholder() {
        let catalogue = EndpointCatalogue::default();
        let url = catalogue
            .url_for(Capability::Transactions, Some(TeamId::new(5)))
            .unwrap();
        assert!(url.ends_with("/transactions"));
    }

    #[test]
    fn test_custom_season_in_depth_chart() {
        let config = EspnConfig {
            depth_chart_season: crate::cli::types::Season::new(2025),
            ..EspnConfig::default()
        };
        let catalogue = EndpointCatalogue::from_config(&config);
        assert!(catalogue
            .template(Capability::DepthChart)
            .contains("/seasons/2025/"));
    }
}

mod capability_tests {
    use super::*;

    #[test]
    fn test_capability_names_round_trip() {
        for capability in Capability::ALL {
            assert_eq!(capability.name().parse::<Capability>().unwrap(), capability);
        }
    }

    #[test]
    fn test_unknown_capability() {
        let err = "scores".parse::<Capability>().unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownCapability { ref capability } if capability == "scores"));
        assert!(err.is_caller_bug());
    }

    #[tokio::test]
    async fn test_fetch_by_name_unknown_capability_fails_fast() {
        // Unroutable host: reaching the network would produce Unavailable, not Err
        let client = EspnClient::new(&EspnConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        let err = client.fetch_by_name("odds", None).await.unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownCapability { .. }));
    }

    #[test]
    fn test_fetch_outcome_helpers() {
        let available: FetchOutcome<u32> = FetchOutcome::Available(3);
        assert!(available.is_available());
        assert_eq!(available.clone().map(|v| v * 2), FetchOutcome::Available(6));
        assert_eq!(available.into_option(), Some(3));

        let missing: FetchOutcome<u32> = FetchOutcome::Unavailable(UnavailableReason::Status(404));
        assert!(!missing.is_available());
        assert_eq!(missing.into_option(), None);
    }

    #[test]
    fn test_unavailable_reason_display() {
        assert_eq!(UnavailableReason::Status(503).to_string(), "HTTP status 503");
        assert_eq!(UnavailableReason::Timeout.to_string(), "request timed out");
    }
}
