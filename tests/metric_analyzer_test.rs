// ABOUTME: Integration tests for per-metric scoring of daily health logs
// ABOUTME: Covers tier boundaries, status labels, recommendations and BMI-based weight scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, healthy_log};
use vitalog_core::models::{BloodPressure, HealthLog};
use vitalog_intelligence::{
    calculate_bmi, BmiCategory, HealthMetric, MetricAnalyzer, ScoringConfig,
};

#[test]
fn test_step_tiers_are_inclusive_at_lower_bound() {
    let cases = [
        (10_000, 100, "Excellent"),
        (9_999, 80, "Good"),
        (7_500, 80, "Good"),
        (7_499, 60, "Fair"),
        (5_000, 60, "Fair"),
        (4_999, 30, "Poor"),
        (0, 30, "Poor"),
    ];
    for (steps, score, status) in cases {
        let assessment = MetricAnalyzer::score_steps(steps);
        assert_eq!(assessment.score, score, "steps {steps}");
        assert_eq!(assessment.status, status, "steps {steps}");
    }
}

#[test]
fn test_water_tiers() {
    assert_eq!(MetricAnalyzer::score_water(2.5).score, 100);
    assert_eq!(MetricAnalyzer::score_water(2.0).score, 80);
    assert_eq!(MetricAnalyzer::score_water(1.5).score, 60);
    assert_eq!(MetricAnalyzer::score_water(1.49).score, 30);
    assert_eq!(
        MetricAnalyzer::score_water(0.0).recommendation,
        "Drink more water! Start with a glass every hour."
    );
}

#[test]
fn test_sleep_bands_on_both_sides() {
    for hours in [7.0, 8.0, 9.0] {
        assert_eq!(MetricAnalyzer::score_sleep(hours).score, 100, "{hours}h");
    }
    for hours in [6.0, 6.5, 6.99, 9.5, 10.0] {
        assert_eq!(MetricAnalyzer::score_sleep(hours).score, 80, "{hours}h");
    }
    for hours in [5.0, 10.5, 11.0] {
        assert_eq!(MetricAnalyzer::score_sleep(hours).score, 60, "{hours}h");
    }
    for hours in [0.0, 4.9, 11.5, 24.0] {
        let assessment = MetricAnalyzer::score_sleep(hours);
        assert_eq!(assessment.score, 30, "{hours}h");
        assert_eq!(
            assessment.recommendation,
            "Poor sleep pattern. Consult a sleep specialist."
        );
    }
}

#[test]
fn test_heart_rate_statuses() {
    assert_eq!(MetricAnalyzer::score_heart_rate(60).status, "Normal");
    assert_eq!(MetricAnalyzer::score_heart_rate(100).status, "Normal");
    assert_eq!(MetricAnalyzer::score_heart_rate(50).status, "Acceptable");
    assert_eq!(MetricAnalyzer::score_heart_rate(110).status, "Acceptable");
    assert_eq!(MetricAnalyzer::score_heart_rate(111).score, 30);
    assert_eq!(MetricAnalyzer::score_heart_rate(49).status, "Concerning");
}

#[test]
fn test_unrecorded_heart_rate_scores_concerning() {
    let assessment = MetricAnalyzer::score_heart_rate(0);
    assert_eq!(assessment.score, 30);
    assert_eq!(assessment.status, "Concerning");
    assert_eq!(
        assessment.recommendation,
        "Consult your doctor about heart rate."
    );
}

#[test]
fn test_blood_pressure_requires_both_readings_within_band() {
    let score = |s, d| MetricAnalyzer::score_blood_pressure(BloodPressure::new(s, d));

    assert_eq!(score(120, 80).status, "Normal");
    assert_eq!(score(121, 70).status, "Elevated");
    assert_eq!(score(110, 81).status, "Elevated");
    assert_eq!(score(130, 85).status, "Elevated");
    assert_eq!(score(131, 80).status, "High");
    assert_eq!(score(120, 86).score, 40);
    assert_eq!(score(0, 0).score, 100);
}

#[test]
fn test_weight_scored_through_bmi_at_assumed_height() {
    let analyzer = MetricAnalyzer::new();

    let healthy = analyzer.score_weight(68.0);
    assert_eq!((healthy.score, healthy.status.as_str()), (100, "Healthy"));

    let overweight = analyzer.score_weight(80.0);
    assert_eq!((overweight.score, overweight.status.as_str()), (70, "Overweight"));

    let obese = analyzer.score_weight(100.0);
    assert_eq!((obese.score, obese.status.as_str()), (50, "Obese"));

    let underweight = analyzer.score_weight(50.0);
    assert_eq!((underweight.score, underweight.status.as_str()), (50, "Underweight"));

    let unrecorded = analyzer.score_weight(0.0);
    assert_eq!(unrecorded.status, "Underweight");
}

#[test]
fn test_bmi_category_boundaries() {
    assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    assert!((calculate_bmi(70.0, 1.75) - 22.857).abs() < 0.001);
}

#[test]
fn test_configured_height_changes_weight_score() {
    let tall = MetricAnalyzer::with_config(&ScoringConfig {
        assumed_height_m: 1.95,
        ..ScoringConfig::default()
    });
    // BMI 21.0 at 1.95 m, 26.1 at the default height
    assert_eq!(tall.score_weight(80.0).status, "Healthy");
    assert_eq!(MetricAnalyzer::new().score_weight(80.0).status, "Overweight");
}

#[test]
fn test_analysis_covers_every_metric_in_order() {
    let analysis = MetricAnalyzer::new().analyze(&healthy_log(day(0)));

    let metrics: Vec<HealthMetric> = analysis.iter().map(|(metric, _)| metric).collect();
    assert_eq!(metrics, HealthMetric::ALL.to_vec());
    assert!(analysis.iter().all(|(_, a)| a.score == 100));
}

#[test]
fn test_analysis_is_pure() {
    let log = HealthLog {
        steps: 6_200,
        sleep_duration: 5.5,
        ..healthy_log(day(3))
    };
    let analyzer = MetricAnalyzer::new();
    assert_eq!(analyzer.analyze(&log), analyzer.analyze(&log));
}

#[test]
fn test_analysis_serializes_with_camel_case_keys() {
    let analysis = MetricAnalyzer::new().analyze(&healthy_log(day(0)));
    let json = serde_json::to_value(&analysis).unwrap();

    for key in ["steps", "water", "sleep", "heartRate", "bloodPressure", "weight"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["heartRate"]["status"], "Normal");
}
