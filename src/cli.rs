#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

use crate::data::{forecast::FORECAST_URL, geocode::GEOCODE_URL, geoip::GEOIP_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,
    Ascii,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-predictor",
    version,
    about = "Current weather, a 24-hour chart and a trend prediction for any city"
)]
pub struct Cli {
    /// City to look up on start, e.g. "Portland, Oregon"
    pub city: Option<String>,

    /// Start with an IP-based location lookup
    #[arg(long, conflicts_with = "city")]
    pub here: bool,

    /// Print a plain-text report to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Use ASCII tokens instead of emoji icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Disable colors (also honored via NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// JSON file replacing jokes, moods, twin cities or footers
    #[arg(long, env = "WEATHER_PREDICTOR_CONTENT")]
    pub content: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, env = "WEATHER_PREDICTOR_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Geocoding endpoint override
    #[arg(long, env = "WEATHER_PREDICTOR_GEOCODE_URL", default_value = GEOCODE_URL)]
    pub geocode_url: String,

    /// IP geolocation endpoint override
    #[arg(long, env = "WEATHER_PREDICTOR_GEOIP_URL", default_value = GEOIP_URL)]
    pub geoip_url: String,

    /// Forecast endpoint override
    #[arg(long, env = "WEATHER_PREDICTOR_FORECAST_URL", default_value = FORECAST_URL)]
    pub forecast_url: String,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.one_shot && self.initial_city().is_none() && !self.here {
            anyhow::bail!("--one-shot needs a CITY or --here");
        }
        Ok(())
    }

    /// The positional city, ignoring a blank argument.
    #[must_use]
    pub fn initial_city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else {
            IconMode::Emoji
        }
    }

    #[must_use]
    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, IconMode};
    use crate::data::forecast::FORECAST_URL;

    #[test]
    fn parses_city_and_defaults() {
        let cli = Cli::parse_from(["weather-predictor", "Paris, France"]);
        assert_eq!(cli.initial_city(), Some("Paris, France"));
        assert!(!cli.here);
        assert_eq!(cli.forecast_url, FORECAST_URL);
        assert_eq!(cli.icon_mode(), IconMode::Emoji);
    }

    #[test]
    fn rejects_city_together_with_here() {
        let err = Cli::try_parse_from(["weather-predictor", "Oslo", "--here"])
            .expect_err("expected conflict");
        assert!(err.to_string().contains("--here"));
    }

    #[test]
    fn one_shot_needs_a_location_source() {
        let cli = Cli::parse_from(["weather-predictor", "--one-shot"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["weather-predictor", "--one-shot", "   "]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["weather-predictor", "--one-shot", "--here"]);
        assert!(cli.validate().is_ok());

        let cli = Cli::parse_from(["weather-predictor", "--one-shot", "Lima"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn ascii_flag_switches_icons() {
        let cli = Cli::parse_from(["weather-predictor", "--ascii-icons"]);
        assert_eq!(cli.icon_mode(), IconMode::Ascii);
    }

    #[test]
    fn endpoint_overrides_parse() {
        let cli = Cli::parse_from([
            "weather-predictor",
            "--geocode-url",
            "http://127.0.0.1:9/search",
            "--forecast-url",
            "http://127.0.0.1:9/forecast",
        ]);
        assert_eq!(cli.geocode_url, "http://127.0.0.1:9/search");
        assert_eq!(cli.forecast_url, "http://127.0.0.1:9/forecast");
    }
}
