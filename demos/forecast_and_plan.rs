//! End-to-end walkthrough: aggregate raw monthly records, forecast every
//! metric, then spread the revenue forecast across the days of the next
//! month.
//!
//! Run with: cargo run --example forecast_and_plan

use table_trend::{
    plan_next_month, summarize, ForecastEngine, Metric, MonthlySeries, Period, RawRecord,
    WeekdayWeights,
};

fn main() -> table_trend::Result<()> {
    // A year of monthly figures for one store
    let revenues = [
        1_150_000.0,
        1_080_000.0,
        1_210_000.0,
        1_260_000.0,
        1_330_000.0,
        1_390_000.0,
        1_420_000.0,
        1_380_000.0,
        1_450_000.0,
        1_510_000.0,
        1_560_000.0,
        1_640_000.0,
    ];
    let raw: Vec<RawRecord> = revenues
        .iter()
        .enumerate()
        .map(|(i, &revenue)| {
            Ok(RawRecord {
                period: Period::new(2025, 1)?.nth_after(i),
                revenue,
                guests: 1_300 + 40 * i as u64,
                avg_check: revenue / (1_300.0 + 40.0 * i as f64),
            })
        })
        .collect::<table_trend::Result<_>>()?;

    let series = MonthlySeries::aggregate(&raw)?;
    println!("{}\n", summarize(&series));

    let engine = ForecastEngine::new();
    for (_, forecast) in engine.forecast_all(&series, &Metric::ALL)? {
        println!("{}\n", forecast);
    }

    let plan = plan_next_month(&series, &WeekdayWeights::default())?;
    println!("{}", plan);

    Ok(())
}
