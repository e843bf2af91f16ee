//! Decorative content shown alongside a report: jokes, mood lines,
//! "weather twin" cities and footer captions.
//!
//! The built-in tables can be replaced section by section from a JSON file.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::Context;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::weather::ConditionCategory;

const FALLBACK_MOOD: &str = "Whatever the sky does, you've got this.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherTwin {
    pub city: String,
    pub country: String,
    pub category: ConditionCategory,
    pub fact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoveltyContent {
    pub jokes: Vec<String>,
    pub moods: BTreeMap<ConditionCategory, String>,
    pub twins: Vec<WeatherTwin>,
    pub footers: Vec<String>,
}

/// Content picked for a single report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extras {
    pub joke: Option<String>,
    pub mood: String,
    pub twin: Option<WeatherTwin>,
    pub footer: Option<String>,
}

impl NoveltyContent {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading content file {} failed", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing content file {} failed", path.display()))
    }

    pub fn pick<R: Rng>(&self, category: ConditionCategory, rng: &mut R) -> Extras {
        let twins = self
            .twins
            .iter()
            .filter(|twin| twin.category == category)
            .collect::<Vec<_>>();

        Extras {
            joke: pick_one(&self.jokes, rng).cloned(),
            mood: self
                .moods
                .get(&category)
                .cloned()
                .unwrap_or_else(|| FALLBACK_MOOD.to_string()),
            twin: pick_one(&twins, rng).map(|twin| (*twin).clone()),
            footer: pick_one(&self.footers, rng).cloned(),
        }
    }
}

fn pick_one<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

impl Default for NoveltyContent {
    fn default() -> Self {
        Self {
            jokes: JOKES.iter().map(|j| (*j).to_string()).collect(),
            moods: MOODS
                .iter()
                .map(|(category, mood)| (*category, (*mood).to_string()))
                .collect(),
            twins: TWINS
                .iter()
                .map(|(city, country, category, fact)| WeatherTwin {
                    city: (*city).to_string(),
                    country: (*country).to_string(),
                    category: *category,
                    fact: (*fact).to_string(),
                })
                .collect(),
            footers: FOOTERS.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

const JOKES: &[&str] = &[
    "What does a cloud wear under its raincoat? Thunderwear.",
    "Why did the weather forecaster bring a bar of soap? They were predicting showers.",
    "What's a tornado's favourite game? Twister.",
    "How do hurricanes see? With their one eye.",
    "What did the lightning bolt say to the other? You're shocking!",
    "Why do suns never go to school? They already have a million degrees.",
    "What falls but never gets hurt? Rain.",
    "Whether the weather is cold or whether the weather is hot, we'll weather the weather whether we like it or not.",
];

const MOODS: &[(ConditionCategory, &str)] = &[
    (
        ConditionCategory::Rainy,
        "Cozy blanket and hot tea kind of day.",
    ),
    (
        ConditionCategory::Cloudy,
        "A soft grey sky, good for focused work.",
    ),
    (
        ConditionCategory::PartlyCloudyWindy,
        "Restless skies, a good day for a brisk walk.",
    ),
    (
        ConditionCategory::PartlyCloudy,
        "Mellow and easy-going, like a Sunday afternoon.",
    ),
    (
        ConditionCategory::SunnyWindy,
        "Bright and breezy, full of energy.",
    ),
    (
        ConditionCategory::Sunny,
        "Sunglasses on, spirits up.",
    ),
];

const TWINS: &[(&str, &str, ConditionCategory, &str)] = &[
    (
        "Bergen",
        "Norway",
        ConditionCategory::Rainy,
        "Bergen sees rain on more than 200 days a year and locals joke that umbrellas are sold from vending machines.",
    ),
    (
        "Mawsynram",
        "India",
        ConditionCategory::Rainy,
        "Mawsynram is often called the wettest inhabited place on Earth.",
    ),
    (
        "London",
        "United Kingdom",
        ConditionCategory::Cloudy,
        "London averages fewer sunshine hours per year than most European capitals.",
    ),
    (
        "Lima",
        "Peru",
        ConditionCategory::Cloudy,
        "Lima sits under a coastal fog blanket, locally called garúa, for months at a time.",
    ),
    (
        "Wellington",
        "New Zealand",
        ConditionCategory::PartlyCloudyWindy,
        "Wellington is one of the windiest cities in the world thanks to the Cook Strait.",
    ),
    (
        "Chicago",
        "United States",
        ConditionCategory::PartlyCloudyWindy,
        "Chicago's 'Windy City' nickname may come from its politicians as much as its weather.",
    ),
    (
        "Amsterdam",
        "Netherlands",
        ConditionCategory::PartlyCloudy,
        "Amsterdam's skies change so often that Dutch painters made a genre out of its clouds.",
    ),
    (
        "Vancouver",
        "Canada",
        ConditionCategory::PartlyCloudy,
        "Vancouver has some of the mildest winters in Canada.",
    ),
    (
        "Punta Arenas",
        "Chile",
        ConditionCategory::SunnyWindy,
        "Punta Arenas has ropes along some sidewalks so pedestrians can hold on in strong gusts.",
    ),
    (
        "Cape Town",
        "South Africa",
        ConditionCategory::SunnyWindy,
        "Cape Town's summer wind is nicknamed the Cape Doctor for clearing the air.",
    ),
    (
        "Yuma",
        "United States",
        ConditionCategory::Sunny,
        "Yuma, Arizona is often listed as the sunniest place on Earth.",
    ),
    (
        "Aswan",
        "Egypt",
        ConditionCategory::Sunny,
        "Aswan can go years without measurable rainfall.",
    ),
];

const FOOTERS: &[&str] = &[
    "Data provided by Open-Meteo.com. No API key required.",
    "Forecasts by Open-Meteo.com. Jokes by nobody in particular.",
    "Weather data from Open-Meteo.com. Predictions are for fun, not flight plans.",
];
