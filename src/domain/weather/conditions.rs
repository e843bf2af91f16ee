use serde::{Deserialize, Serialize};

use super::{CurrentConditions, HourlySample};
use crate::cli::IconMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionCategory {
    Rainy,
    Cloudy,
    PartlyCloudyWindy,
    PartlyCloudy,
    SunnyWindy,
    Sunny,
}

impl ConditionCategory {
    pub const ALL: [Self; 6] = [
        Self::Rainy,
        Self::Cloudy,
        Self::PartlyCloudyWindy,
        Self::PartlyCloudy,
        Self::SunnyWindy,
        Self::Sunny,
    ];

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Rainy => "Rain is on the way",
            Self::Cloudy => "Mostly cloudy skies",
            Self::PartlyCloudyWindy => "Partly cloudy and breezy",
            Self::PartlyCloudy => "Partly cloudy",
            Self::SunnyWindy => "Sunny but windy",
            Self::Sunny => "Clear and sunny",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Cold,
    Cool,
    Warm,
    Hot,
}

#[must_use]
pub fn temperature_band(celsius: f32) -> TemperatureBand {
    if celsius < 10.0 {
        TemperatureBand::Cold
    } else if celsius < 20.0 {
        TemperatureBand::Cool
    } else if celsius < 30.0 {
        TemperatureBand::Warm
    } else {
        TemperatureBand::Hot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: ConditionCategory,
    pub band: Option<TemperatureBand>,
    pub description: &'static str,
    pub tip: &'static str,
}

/// Absent precipitation and wind count as zero. Temperature only picks the tip.
#[must_use]
pub fn classify(
    precipitation_probability: Option<u8>,
    wind_speed_kmh: Option<f32>,
    temperature_c: Option<f32>,
) -> Classification {
    let category = category_for(
        precipitation_probability.unwrap_or(0),
        wind_speed_kmh.unwrap_or(0.0),
    );
    let band = temperature_c.map(temperature_band);
    Classification {
        category,
        band,
        description: category.description(),
        tip: tip_for(category, band),
    }
}

/// The current block has no precipitation probability, so the soonest hour
/// stands in for it; wind falls back to that hour too.
#[must_use]
pub fn classify_current(current: &CurrentConditions, window: &[HourlySample]) -> Classification {
    let first = window.first();
    classify(
        first.and_then(|h| h.precipitation_probability),
        current
            .wind_speed_kmh
            .or_else(|| first.and_then(|h| h.wind_speed_kmh)),
        current.temperature_c,
    )
}

fn category_for(precipitation: u8, wind: f32) -> ConditionCategory {
    if precipitation > 70 {
        ConditionCategory::Rainy
    } else if precipitation > 40 {
        ConditionCategory::Cloudy
    } else if precipitation > 20 {
        if wind > 20.0 {
            ConditionCategory::PartlyCloudyWindy
        } else {
            ConditionCategory::PartlyCloudy
        }
    } else if wind > 25.0 {
        ConditionCategory::SunnyWindy
    } else {
        ConditionCategory::Sunny
    }
}

fn tip_for(category: ConditionCategory, band: Option<TemperatureBand>) -> &'static str {
    use ConditionCategory as C;
    use TemperatureBand as B;

    match (category, band) {
        (C::Rainy, Some(B::Cold)) => "Waterproof coat and warm layers today.",
        (C::Rainy, Some(B::Hot)) => "Warm rain incoming. A light rain jacket will do.",
        (C::Rainy, _) => "Take an umbrella before heading out.",
        (C::Cloudy, Some(B::Cold)) => "Grey and chilly. Grab a jacket.",
        (C::Cloudy, Some(B::Hot)) => "Muggy under the clouds. Stay hydrated.",
        (C::Cloudy, _) => "Keep an umbrella handy just in case.",
        (C::PartlyCloudyWindy, Some(B::Cold)) => "The wind makes it feel colder. Wear a hat.",
        (C::PartlyCloudyWindy, _) => "A windbreaker will come in handy.",
        (C::PartlyCloudy, Some(B::Cold)) => "Mixed skies and cold air. Layer up.",
        (C::PartlyCloudy, Some(B::Hot)) => "Sunny spells can be strong. Use sunscreen.",
        (C::PartlyCloudy, _) => "A light jacket should be enough.",
        (C::SunnyWindy, Some(B::Cold)) => "Bright but biting wind. Bundle up.",
        (C::SunnyWindy, Some(B::Hot)) => "Hot and gusty. Secure loose items outside.",
        (C::SunnyWindy, _) => "Good kite weather. Hold on to your hat.",
        (C::Sunny, Some(B::Cold)) => "Sunny but cold. Gloves and sunglasses.",
        (C::Sunny, Some(B::Cool)) => "Crisp and clear. Perfect for a walk.",
        (C::Sunny, Some(B::Warm)) => "Lovely day. Sunscreen recommended.",
        (C::Sunny, Some(B::Hot)) => "Very hot. Seek shade and drink water.",
        (C::Sunny, None) => "Enjoy the sunshine.",
    }
}

#[must_use]
pub fn category_icon(category: ConditionCategory, mode: IconMode) -> &'static str {
    let (ascii, emoji) = icon_tokens(category);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
    }
}

fn icon_tokens(category: ConditionCategory) -> (&'static str, &'static str) {
    match category {
        ConditionCategory::Rainy => ("RAN", "🌧️"),
        ConditionCategory::Cloudy => ("CLD", "☁️"),
        ConditionCategory::PartlyCloudyWindy => ("PCW", "🌥️"),
        ConditionCategory::PartlyCloudy => ("PCL", "⛅"),
        ConditionCategory::SunnyWindy => ("WND", "🌬️"),
        ConditionCategory::Sunny => ("SUN", "☀️"),
    }
}
