//! Route resolution and page fallback behavior.

use medboard::{AppState, DashboardId, HealthRecord, resolve_slug};

fn sample_records() -> Vec<HealthRecord> {
    vec![
        HealthRecord {
            state: "California".to_string(),
            general_health: "Good".to_string(),
            mental_health_days: Some(2),
            physical_health_days: Some(1),
            race_ethnicity: "White".to_string(),
            age_category: "Age 25 to 29".to_string(),
            sex: "Female".to_string(),
            bmi: Some(24.0),
            year: Some(2020),
            month: Some(6),
            covid_pos: "Yes".to_string(),
            had_depressive_disorder: "No".to_string(),
            had_diabetes: "No".to_string(),
            physical_activities: "Yes".to_string(),
            ..Default::default()
        }
        .with_derived(),
        HealthRecord {
            state: "Texas".to_string(),
            general_health: "Poor".to_string(),
            mental_health_days: Some(20),
            physical_health_days: Some(15),
            race_ethnicity: "Hispanic".to_string(),
            age_category: "Age 60 to 64".to_string(),
            sex: "Male".to_string(),
            bmi: Some(33.0),
            year: Some(2020),
            month: Some(7),
            covid_pos: "No".to_string(),
            had_depressive_disorder: "Yes".to_string(),
            had_diabetes: "Yes".to_string(),
            physical_activities: "No".to_string(),
            ..Default::default()
        }
        .with_derived(),
    ]
}

#[test]
fn test_each_dashboard_renders_its_page() {
    let state = AppState::new(&sample_records());

    assert!(
        state
            .page(resolve_slug("/dashboard3"))
            .contains("COVID-19 Dashboard")
    );
    assert!(
        state
            .page(resolve_slug("/dashboard2"))
            .contains("Demographics Dashboard")
    );
    assert!(
        state
            .page(resolve_slug("/dashboard4"))
            .contains("Obesity and Health Dashboard")
    );
}

#[test]
fn test_unknown_paths_serve_the_default_dashboard() {
    let state = AppState::new(&sample_records());

    let default_page = state.page(resolve_slug("/"));
    assert!(default_page.contains("General Health Dashboard"));
    assert_eq!(state.page(resolve_slug("/nope")), default_page);
    assert_eq!(state.page(resolve_slug("/dashboard1")), default_page);
}

#[test]
fn test_pages_embed_all_four_panels() {
    let state = AppState::new(&sample_records());
    for id in [
        DashboardId::General,
        DashboardId::Demographics,
        DashboardId::Covid,
        DashboardId::Obesity,
    ] {
        let page = state.page(id);
        for panel in 0..4 {
            assert!(page.contains(&format!("id=\"panel-{panel}\"")));
        }
    }
}
