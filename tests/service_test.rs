// ABOUTME: Integration tests for the health data service facade
// ABOUTME: Covers upsert of today's log, cache invalidation on write, and the dashboard read model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{daily_logs, day, healthy_draft, healthy_log, memory_service, memory_service_with};
use tempfile::TempDir;
use vitalog::cache::{CacheConfig, CacheProvider, QueryCache, QueryKey};
use vitalog::errors::ErrorCode;
use vitalog::service::HealthDataService;
use vitalog::store::{HealthLogRepository, InMemoryHealthLogStore, JsonFileHealthLogStore};
use vitalog::validation::HealthLogDraft;
use vitalog_core::models::{FieldUpdate, HealthLog, HealthLogPatch, LogField};
use vitalog_intelligence::{HealthCategory, ScoringConfig, TrendDirection, TrendMetric};

#[tokio::test]
async fn test_save_today_creates_then_updates_same_day() {
    let service = memory_service();

    let mut draft = healthy_draft();
    let created = service.save_today(day(0), &mut draft).await.unwrap();

    draft.apply(FieldUpdate::Steps(4_200));
    let updated = service.save_today(day(0), &mut draft).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.steps, 4_200);
    assert_eq!(service.all_logs().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_draft_is_rejected_and_not_stored() {
    let service = memory_service();
    let mut draft = healthy_draft();
    draft.apply(FieldUpdate::HeartRate(350));

    let error = service.save_today(day(0), &mut draft).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(draft.errors().get(LogField::HeartRate).is_some());
    assert!(service.all_logs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reads_after_write_see_the_write() {
    let service = memory_service();

    // Prime every cached query
    assert!(service.todays_log(day(0)).await.unwrap().is_none());
    assert!(service.weekly_logs(day(0)).await.unwrap().is_empty());
    assert!(service.all_logs().await.unwrap().is_empty());

    service.save_today(day(0), &mut healthy_draft()).await.unwrap();

    assert!(service.todays_log(day(0)).await.unwrap().is_some());
    assert_eq!(service.weekly_logs(day(0)).await.unwrap().len(), 1);
    assert_eq!(service.all_logs().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_and_delete_invalidate_queries() {
    let service = memory_service();
    let log = service.save_today(day(0), &mut healthy_draft()).await.unwrap();
    assert!(service.todays_log(day(0)).await.unwrap().is_some());

    let patch = HealthLogPatch {
        mood: Some(1),
        ..HealthLogPatch::default()
    };
    service.update_log(&log.id, &patch).await.unwrap();
    assert_eq!(service.todays_log(day(0)).await.unwrap().unwrap().mood, 1);

    service.delete_log(&log.id).await.unwrap();
    assert!(service.todays_log(day(0)).await.unwrap().is_none());

    let missing = service.delete_log(&log.id).await.unwrap_err();
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_reads_are_served_from_cache() {
    let service = memory_service_with(vec![healthy_log(day(0))]);
    assert_eq!(service.all_logs().await.unwrap().len(), 1);

    // A write that bypasses the service is not seen until invalidation
    service
        .repository()
        .create(healthy_draft().to_new_log(day(1)).unwrap())
        .await
        .unwrap();
    assert_eq!(service.all_logs().await.unwrap().len(), 1);

    service.cache().invalidate(&QueryKey::AllLogs).await.unwrap();
    assert_eq!(service.all_logs().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_weekly_logs_cover_seven_days_ending_today() {
    let service = memory_service_with(daily_logs(10, |_| 8_000));

    let week = service.weekly_logs(day(9)).await.unwrap();
    let dates: Vec<_> = week.iter().map(|log| log.date).collect();

    assert_eq!(dates, (3..=9).map(day).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_health_score_tracks_latest_log() {
    let service = memory_service();
    let empty = service.health_score().await.unwrap();
    assert_eq!(empty.overall, 0);

    service.save_today(day(0), &mut healthy_draft()).await.unwrap();
    let score = service.health_score().await.unwrap();
    assert_eq!(score.overall, 100);
    assert_eq!(score.category, HealthCategory::Excellent);
}

#[tokio::test]
async fn test_trends_need_eight_logs() {
    let service = memory_service_with(daily_logs(7, |_| 8_000));
    assert!(service.trends().await.unwrap().is_none());

    let mut draft = healthy_draft();
    draft.apply(FieldUpdate::Steps(20_000));
    service.save_today(day(7), &mut draft).await.unwrap();

    let trends = service.trends().await.unwrap().unwrap();
    assert_eq!(trends.get(TrendMetric::Steps).trend, TrendDirection::Up);
}

#[tokio::test]
async fn test_history_is_zero_filled() {
    let service = memory_service_with(vec![healthy_log(day(4))]);

    let points = service.history(day(6), 7).await.unwrap();

    assert_eq!(points.len(), 7);
    assert_eq!(points[4].steps, 10_000);
    assert_eq!(points[5].steps, 0);
}

#[tokio::test]
async fn test_dashboard_without_todays_log() {
    let service = memory_service_with(vec![healthy_log(day(0))]);

    let dashboard = service.dashboard(day(3)).await.unwrap();

    assert_eq!(dashboard.date, day(3));
    assert!(dashboard.todays_log.is_none());
    assert!(dashboard.metrics.is_none());
    assert!(dashboard.progress.is_none());
    assert!(dashboard.trends.is_none());
    assert_eq!(dashboard.health_score.overall, 100);
}

#[tokio::test]
async fn test_dashboard_with_todays_log() {
    let service = memory_service_with(daily_logs(13, |_| 5_000));
    let mut draft = HealthLogDraft::from_log(&healthy_log(day(13)));
    draft.apply(FieldUpdate::WaterIntake(1.0));
    service.save_today(day(13), &mut draft).await.unwrap();

    let dashboard = service.dashboard(day(13)).await.unwrap();

    let metrics = dashboard.metrics.unwrap();
    assert_eq!(metrics.water.status, "Poor");
    assert!((dashboard.progress.unwrap().water - 40.0).abs() < 1e-9);
    assert!(dashboard.trends.is_some());
    assert!(dashboard.health_score.overall < 100);

    let json = serde_json::to_value(service.dashboard(day(13)).await.unwrap()).unwrap();
    assert!(json.get("healthScore").is_some());
    assert!(json.get("todaysLog").is_some());
}

#[tokio::test]
async fn test_file_backed_service_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let build = || {
        HealthDataService::new(
            JsonFileHealthLogStore::in_dir(dir.path()),
            QueryCache::with_config(&CacheConfig::default()),
            &ScoringConfig::default(),
        )
    };

    let first = build();
    first.save_today(day(0), &mut healthy_draft()).await.unwrap();
    drop(first);

    let second = build();
    let log = second.todays_log(day(0)).await.unwrap().unwrap();
    assert_eq!(log.steps, 10_000);
    assert!(second.cache().exists(&QueryKey::TodaysLog { date: day(0) }).await.unwrap());
}

#[tokio::test]
async fn test_analysis_uses_configured_height() {
    let log = HealthLog {
        weight: 80.0,
        ..healthy_log(day(0))
    };
    let service = HealthDataService::new(
        InMemoryHealthLogStore::with_logs(vec![log.clone()]),
        QueryCache::with_config(&CacheConfig::default()),
        &ScoringConfig {
            assumed_height_m: 1.95,
            ..ScoringConfig::default()
        },
    );

    assert_eq!(service.analyze(&log).weight.status, "Healthy");
    let dashboard = service.dashboard(day(0)).await.unwrap();
    assert_eq!(dashboard.metrics.unwrap(), service.analyze(&log));
    assert_eq!(memory_service().analyze(&log).weight.status, "Overweight");
}

#[tokio::test]
async fn test_update_log_rejects_nan_and_keeps_history() {
    let service = memory_service_with(daily_logs(3, |_| 8_000));
    let logs = service.all_logs().await.unwrap();
    let patch = HealthLogPatch {
        weight: Some(f64::NAN),
        ..HealthLogPatch::default()
    };

    let error = service.update_log(&logs[0].id, &patch).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(service.all_logs().await.unwrap(), logs);
}
