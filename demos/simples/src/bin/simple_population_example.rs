use onemap_client::prelude::*;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple population example");

    let client = Client::default();

    let area = client.find_planning_area(1.3, 103.8, None).await?;
    info!("Planning area at 1.3,103.8: {}", area);

    for data_type in PopulationDataType::all() {
        match client.get_population_data(*data_type, 2020, "Bedok").await {
            Ok(data) => info!("{}: {}", data_type, data),
            Err(e) => warn!("{} failed: {}", data_type, e),
        }
    }

    let by_gender = client
        .get_population_by_gender(PopulationDataType::Marital, 2020, "Bedok", Some(Gender::Female))
        .await?;
    info!("Marital status, female: {}", by_gender);

    Ok(())
}
