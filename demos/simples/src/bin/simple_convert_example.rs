use onemap_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple conversion example");

    let client = Client::default();

    let svy21 = ConvertRequest::from_xy(Crs::Svy21, Crs::Wgs84, Xy::new(28983.788, 33554.5));
    let wgs84 = client.convert_coordinates(&svy21).await?;
    info!("SVY21 -> WGS84: {}", wgs84);

    let point = LatLng::new(1.319728, 103.8421);
    let mercator = ConvertRequest::from_latlng(Crs::Epsg3857, point);
    info!("WGS84 -> EPSG3857: {}", client.convert_coordinates(&mercator).await?);

    let nearby = client
        .reverse_geocode(&ReverseGeocodeRequest::from_latlng(point).with_buffer(50))
        .await?;
    info!("Buildings near {}: {}", point.to_param(), nearby);

    Ok(())
}
