use crate::trees::feature::Feature;

/// A record that can be fed to the tree builder.
///
/// Labels are expected to be exactly `0.0` or `1.0`. Any other value is
/// ignored by the impurity counts, and `None` marks an unlabeled sample
/// used only for inference.
pub trait Sample: Clone + Send + Sync {
    fn label(&self) -> Option<f64>;

    fn is_positive(&self) -> bool {
        self.label() == Some(1.0)
    }

    fn is_negative(&self) -> bool {
        self.label() == Some(0.0)
    }
}

/// One weather observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherItem {
    pub rain: f64,
    pub lightning: f64,
    pub cloudy: f64,
    pub temperature: f64,
    pub good_weather: Option<f64>,
}

impl WeatherItem {
    pub fn new(rain: f64, lightning: f64, cloudy: f64, temperature: f64) -> Self {
        Self {
            rain,
            lightning,
            cloudy,
            temperature,
            good_weather: None,
        }
    }

    pub fn labeled(rain: f64, lightning: f64, cloudy: f64, temperature: f64, good: f64) -> Self {
        Self {
            good_weather: Some(good),
            ..Self::new(rain, lightning, cloudy, temperature)
        }
    }

    /// Rain, Lightning, Cloudy and Temperature, in that order.
    pub fn features() -> Vec<Feature<WeatherItem>> {
        vec![
            Feature::new("Rain", |item: &WeatherItem| item.rain),
            Feature::new("Lightning", |item: &WeatherItem| item.lightning),
            Feature::new("Cloudy", |item: &WeatherItem| item.cloudy),
            Feature::new("Temperature", |item: &WeatherItem| item.temperature),
        ]
    }
}

impl Sample for WeatherItem {
    fn label(&self) -> Option<f64> {
        self.good_weather
    }
}
