use gini_tree::data::dataset::Dataset;
use gini_tree::data::reader::read_weather_file;
use gini_tree::data::sample::WeatherItem;
use gini_tree::forests::classifier::RandomForestClassifier;
use gini_tree::metrics::confusion::ClassificationMetrics;
use gini_tree::trees::classifier::DecisionTreeClassifier;
use std::env;
use std::error::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATASET: &str = "datasets/good_weather_classification.csv";

fn decision_tree(samples: &Dataset<WeatherItem>) -> Result<(), Box<dyn Error>> {
    let mut tree = DecisionTreeClassifier::new(WeatherItem::features())?;
    tree.fit(samples)?;
    print!("{}", tree.render());

    let prediction = tree.predict(&WeatherItem::new(0.0, 0.0, 1.0, 76.0))?;
    if prediction >= 0.5 {
        println!("Weather is good: {}% confident", prediction * 100.0);
    } else {
        println!("Weather is bad: {}% chance of it being good", prediction * 100.0);
    }

    let predictions = tree.predict_many(samples)?.map(|p| u8::from(p >= 0.5));
    let accuracy = tree.accuracy(&samples.labels(), &predictions)?;
    println!("Training accuracy: {}%", accuracy * 100.0);
    Ok(())
}

fn random_forest(samples: &[WeatherItem], seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let mut forest = RandomForestClassifier::new(WeatherItem::features());
    forest.fit(samples, seed)?;

    let input = WeatherItem::new(0.0, 0.0, 1.0, 81.0);
    let votes = forest.votes(&input)?;
    let num_trees = forest.params().num_trees();

    if forest.predict(&input)? {
        println!("Weather is good: {}/{} votes", votes, num_trees);
    } else {
        println!("Weather is bad:  {}/{} votes", votes, num_trees);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_DATASET.to_string());
    let seed = args.next().map(|seed| seed.parse::<u64>()).transpose()?;

    let dataset = read_weather_file(&path)?;
    decision_tree(&dataset)?;
    random_forest(&dataset, seed)?;
    Ok(())
}
