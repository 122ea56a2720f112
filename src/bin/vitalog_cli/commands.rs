// ABOUTME: Command implementations for vitalog-cli
// ABOUTME: Each command calls the health data service and prints a JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::LogFields;
use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use vitalog::service::HealthDataService;
use vitalog::store::HealthLogRepository;
use vitalog::validation::{mood_emoji, mood_label, HealthLogDraft};
use vitalog_core::models::FieldUpdate;
use vitalog_intelligence::history::average;
use vitalog_intelligence::{status_color, ChartMetric, HealthMetric};

/// Calendar day used when no --date is given
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{text}");
    Ok(())
}

impl LogFields {
    fn into_updates(self) -> Vec<FieldUpdate> {
        let Self {
            steps,
            water,
            sleep,
            heart_rate,
            weight,
            systolic,
            diastolic,
            mood,
            calories,
            exercise,
            notes,
        } = self;

        [
            steps.map(FieldUpdate::Steps),
            water.map(FieldUpdate::WaterIntake),
            sleep.map(FieldUpdate::SleepDuration),
            heart_rate.map(FieldUpdate::HeartRate),
            weight.map(FieldUpdate::Weight),
            systolic.map(FieldUpdate::Systolic),
            diastolic.map(FieldUpdate::Diastolic),
            mood.map(FieldUpdate::Mood),
            calories.map(FieldUpdate::Calories),
            exercise.map(FieldUpdate::Exercise),
            notes.map(FieldUpdate::Notes),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Upsert the log for `date`, starting from the stored values if any
pub async fn log<R: HealthLogRepository>(
    service: &HealthDataService<R>,
    date: NaiveDate,
    fields: LogFields,
) -> Result<()> {
    let mut draft = service
        .todays_log(date)
        .await?
        .map_or_else(HealthLogDraft::default, |log| HealthLogDraft::from_log(&log));
    for update in fields.into_updates() {
        draft.apply(update);
    }

    let saved = service.save_today(date, &mut draft).await?;
    print_json(&saved)
}

/// Print the log for `date` with its per-metric analysis
pub async fn show<R: HealthLogRepository>(
    service: &HealthDataService<R>,
    date: NaiveDate,
) -> Result<()> {
    let Some(log) = service.todays_log(date).await? else {
        return print_json(&json!({ "date": date, "log": null }));
    };

    let analysis = service.analyze(&log);
    let metrics: Vec<_> = HealthMetric::ALL
        .into_iter()
        .map(|metric| {
            let assessment = analysis.get(metric);
            json!({
                "metric": metric.as_str(),
                "score": assessment.score,
                "status": assessment.status,
                "color": status_color(assessment.score),
                "recommendation": assessment.recommendation,
            })
        })
        .collect();

    print_json(&json!({
        "date": date,
        "log": log,
        "mood": { "label": mood_label(log.mood), "emoji": mood_emoji(log.mood) },
        "metrics": metrics,
    }))
}

/// Print the overall health score
pub async fn score<R: HealthLogRepository>(service: &HealthDataService<R>) -> Result<()> {
    print_json(&service.health_score().await?)
}

/// Print week-over-week trends, or `null` with too little history
pub async fn trend<R: HealthLogRepository>(service: &HealthDataService<R>) -> Result<()> {
    print_json(&service.trends().await?)
}

/// Print a chart series for one metric or all of them
pub async fn history<R: HealthLogRepository>(
    service: &HealthDataService<R>,
    end: NaiveDate,
    days: u32,
    metric: Option<ChartMetric>,
) -> Result<()> {
    let points = service.history(end, days).await?;

    if let Some(metric) = metric {
        let series: Vec<_> = points
            .iter()
            .map(|point| json!({ "date": point.date, "value": metric.value_of(point) }))
            .collect();
        return print_json(&json!({
            "metric": metric.as_str(),
            "title": metric.title(),
            "unit": metric.unit(),
            "average": average(&points, metric),
            "points": series,
        }));
    }

    let averages: serde_json::Map<String, serde_json::Value> = ChartMetric::ALL
        .into_iter()
        .map(|metric| (metric.as_str().to_owned(), json!(average(&points, metric))))
        .collect();

    print_json(&json!({ "days": days, "averages": averages, "points": points }))
}

/// Print the dashboard for `date`
pub async fn dashboard<R: HealthLogRepository>(
    service: &HealthDataService<R>,
    date: NaiveDate,
) -> Result<()> {
    print_json(&service.dashboard(date).await?)
}

/// Delete one log
pub async fn delete<R: HealthLogRepository>(service: &HealthDataService<R>, id: &str) -> Result<()> {
    service.delete_log(id).await?;
    print_json(&json!({ "deleted": id }))
}

/// Write `days` logs of plausible data ending on `today`
pub async fn seed_demo<R: HealthLogRepository>(
    service: &HealthDataService<R>,
    today: NaiveDate,
    days: u32,
    seed: u64,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut written = 0_u32;

    for back in (0..days).rev() {
        let Some(date) = today.checked_sub_days(Days::new(u64::from(back))) else {
            continue;
        };
        let mut draft = demo_draft(&mut rng);
        service
            .save_today(date, &mut draft)
            .await
            .with_context(|| format!("Failed to seed log for {date}"))?;
        written += 1;
    }

    info!(written, "Seeded demo health logs");
    print_json(&json!({ "seeded": written, "through": today }))
}

fn demo_draft(rng: &mut StdRng) -> HealthLogDraft {
    let mut draft = HealthLogDraft::default();
    let updates = [
        FieldUpdate::Steps(rng.gen_range(3_000..=14_000)),
        FieldUpdate::WaterIntake(round_tenth(rng.gen_range(1.0..=3.5))),
        FieldUpdate::SleepDuration(round_tenth(rng.gen_range(5.0..=9.5))),
        FieldUpdate::HeartRate(rng.gen_range(55..=98)),
        FieldUpdate::Weight(round_tenth(rng.gen_range(66.0..=74.0))),
        FieldUpdate::Systolic(rng.gen_range(105..=135)),
        FieldUpdate::Diastolic(rng.gen_range(65..=88)),
        FieldUpdate::Mood(rng.gen_range(2..=5)),
        FieldUpdate::Calories(rng.gen_range(1_600..=2_800)),
    ];
    for update in updates {
        draft.apply(update);
    }
    if rng.gen_bool(0.4) {
        draft.apply(FieldUpdate::Exercise("30 min walk".to_owned()));
    }
    draft
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
