use tradier_data::MarketService;

/// Integration test that calls the live Tradier calendar endpoint.
///
/// Ignored by default to avoid CI failures. Run manually with:
/// `cargo test -- --ignored fetches_confirmed_earnings_dates`.
#[tokio::test]
#[ignore = "requires external network access and TRADIER_TOKEN"]
async fn fetches_confirmed_earnings_dates() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt().try_init();
    let service = MarketService::from_env()?;

    let events = service.get_earning_dates("AAPL").await?;

    println!("{}", serde_json::to_string_pretty(&events)?);
    assert!(
        !events.is_empty(),
        "expected at least one confirmed earnings event for AAPL"
    );
    assert!(
        events
            .windows(2)
            .all(|pair| pair[0].begin_date_time <= pair[1].begin_date_time),
        "events should be sorted by start time"
    );

    Ok(())
}
