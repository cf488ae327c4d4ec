use chrono::NaiveDate;
use openmeteo_archive::{ArchiveError, HistoricalWeatherRequest, LatLon};
use std::env;

#[tokio::main]
async fn main() -> Result<(), ArchiveError> {
    configure_polars_display();

    let tables = HistoricalWeatherRequest::builder()
        .location(LatLon(52.52, 13.41))
        .variables(&["temperature_2m", "weather_code", "sunrise", "sunset"])
        .start_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap())
        .timezone("Europe/Berlin")
        .build()?
        .to_tables()
        .await?;

    for table in tables.iter() {
        println!("{} ({} rows):\n{}", table.frequency(), table.height(), table.frame);
    }

    if let Some(hourly) = tables.hourly() {
        let codes = hourly.weather_codes()?;
        let wet_hours = codes.iter().flatten().filter(|c| c.is_precipitation()).count();
        println!("Hours with precipitation: {}", wet_hours);
    }

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 50 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "50");
}
