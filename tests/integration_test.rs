use table_trend::{
    plan_next_month, summarize, ForecastEngine, Metric, MonthlySeries, Period, RawRecord, Trend,
    WeekdayWeights,
};

/// Eight months of history with a duplicate entry for March that must be
/// merged during aggregation
fn raw_history() -> Vec<RawRecord> {
    let mut raw: Vec<RawRecord> = (0..8)
        .map(|i| RawRecord {
            period: Period::new(2024, 1).unwrap().nth_after(i),
            revenue: 1_000_000.0 + 40_000.0 * i as f64,
            guests: 1_200 + 60 * i as u64,
            avg_check: 830.0 + 5.0 * i as f64,
        })
        .collect();
    raw.push(RawRecord {
        period: Period::new(2024, 3).unwrap(),
        revenue: 20_000.0,
        guests: 25,
        avg_check: 840.0,
    });
    raw
}

#[test]
fn test_full_forecast_workflow() {
    // 1. Aggregate raw records into a monthly series
    let series = MonthlySeries::aggregate(&raw_history()).unwrap();
    assert_eq!(series.len(), 8);

    // March carries the merged duplicate
    let march = &series.records()[2];
    assert_eq!(march.period, Period::new(2024, 3).unwrap());
    assert_eq!(march.revenue, 1_100_000.0);
    assert_eq!(march.guests, 1_345);

    // 2. Forecast every metric
    let engine = ForecastEngine::new();
    let forecasts = engine.forecast_all(&series, &Metric::ALL).unwrap();
    assert_eq!(forecasts.len(), 3);

    let revenue = &forecasts[&Metric::Revenue];
    assert!(revenue.point_estimate.is_finite());
    assert!(revenue.lower_bound <= revenue.point_estimate);
    assert!(revenue.point_estimate <= revenue.upper_bound);
    assert_eq!(revenue.trend, Trend::Up); // steadily growing history

    // 3. Build the day plan for the following month
    let plan = plan_next_month(&series, &WeekdayWeights::default()).unwrap();
    assert_eq!(plan.month, Period::new(2024, 9).unwrap());
    assert_eq!(plan.entries.len(), 30);
    assert_eq!(
        plan.entries.iter().map(|e| e.amount).sum::<i64>(),
        plan.total
    );

    // Saturdays outweigh Mondays in the default profile
    let saturday = plan.entries.iter().find(|e| e.weekday == 5).unwrap();
    let monday = plan.entries.iter().find(|e| e.weekday == 0).unwrap();
    assert!(saturday.amount > monday.amount);

    // 4. Analytics over the same series
    let summary = summarize(&series);
    assert_eq!(summary.worst_month, Period::new(2024, 1).unwrap());
    assert!(summary.average_revenue > 1_000_000.0);

    // 5. Value objects serialize for external consumers
    assert!(revenue.to_json().unwrap().contains("Revenue"));
    assert!(plan.to_json().unwrap().contains("entries"));

    // Text rendering stays pure formatting
    let rendered = plan.to_string();
    assert!(rendered.contains("Plan for 2024-09"));
}
