use chrono::Local;
use onemap_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple routing example");

    let client = Client::default();

    let walk = RouteRequest::new((1.320981, 103.84415), (1.326762, 103.8559), RouteType::Walk);
    let route = client.route(&walk).await?;
    info!("Walking summary: {}", route["route_summary"]);

    let now = Local::now();
    let transit = TransitOptions::new(now.date_naive(), now.time(), TransitMode::Transit)
        .with_max_walk_distance(1000)
        .with_num_itineraries(2);
    let route = client
        .route_from_postal("238880", "018956", RouteType::PublicTransport, Some(transit))
        .await?;
    let itineraries = route["plan"]["itineraries"]
        .as_array()
        .map(Vec::len)
        .unwrap_or(0);
    info!("Public transport itineraries: {}", itineraries);

    Ok(())
}
