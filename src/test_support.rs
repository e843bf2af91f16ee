use crate::{
    app::pipeline::{WeatherReport, WeatherService},
    data::{forecast::ForecastClient, geocode::GeocodeClient, geoip::GeoIpClient},
    domain::{
        novelty::{Extras, NoveltyContent, WeatherTwin},
        trend::predict_trend,
        weather::{
            ConditionCategory, Coordinate, CurrentConditions, HourlySample, Location,
            classify_current,
        },
    },
};

const UNREACHABLE: &str = "http://127.0.0.1:9";

pub(crate) fn unreachable_service(content: NoveltyContent) -> WeatherService {
    WeatherService::new(
        GeocodeClient::with_base_url(format!("{UNREACHABLE}/v1/search")).expect("geocode client"),
        GeoIpClient::with_base_url(format!("{UNREACHABLE}/json/")).expect("geoip client"),
        ForecastClient::with_base_url(format!("{UNREACHABLE}/v1/forecast"))
            .expect("forecast client"),
        content,
    )
}

pub(crate) fn sample_window() -> Vec<HourlySample> {
    (0..24)
        .map(|idx| HourlySample {
            time: format!("2026-02-{:02}T{:02}:00", 12 + (10 + idx) / 24, (10 + idx) % 24),
            temperature_c: Some(10.0 + idx as f32 * 0.5),
            apparent_temperature_c: Some(8.0 + idx as f32 * 0.5),
            precipitation_probability: Some(if idx == 6 { 75 } else { 30 }),
            wind_speed_kmh: Some(14.0),
        })
        .collect()
}

pub(crate) fn sample_report() -> WeatherReport {
    let current = CurrentConditions {
        temperature_c: Some(12.3),
        apparent_temperature_c: Some(10.1),
        wind_speed_kmh: Some(14.0),
    };
    let window = sample_window();
    let classification = classify_current(&current, &window);

    WeatherReport {
        location: Location::from_geocode(
            Coordinate::new(51.5085, -0.1257),
            "London",
            Some("England"),
            Some("United Kingdom"),
        ),
        timezone: Some("Europe/London".to_string()),
        trend: Some(predict_trend(12.3, &window)),
        current,
        window,
        classification,
        extras: Extras {
            joke: Some("What falls but never gets hurt? Rain.".to_string()),
            mood: "Mellow and easy-going, like a Sunday afternoon.".to_string(),
            twin: Some(WeatherTwin {
                city: "Amsterdam".to_string(),
                country: "Netherlands".to_string(),
                category: ConditionCategory::PartlyCloudy,
                fact: "Amsterdam's skies change often.".to_string(),
            }),
            footer: Some("Data provided by Open-Meteo.com. No API key required.".to_string()),
        },
    }
}
