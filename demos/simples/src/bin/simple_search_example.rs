use onemap_client::prelude::*;
use prettytable::{Cell, Row, Table, format};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple search example");

    // Authentication happens on the first request
    let client = Client::default();

    let query = std::env::args().nth(1).unwrap_or_else(|| "revenue house".to_string());
    let response = client.search(&SearchRequest::new(query.as_str())).await?;
    let response = SearchResponse::from_value(response)?;
    info!("Found {} matches over {} pages", response.found, response.total_num_pages);

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(vec![
        Cell::new("NAME"),
        Cell::new("ADDRESS"),
        Cell::new("POSTAL"),
        Cell::new("LAT,LNG"),
    ]));
    for result in &response.results {
        let location = result
            .lat_lng()
            .map(|point| point.to_param())
            .unwrap_or_else(|_| "-".to_string());
        table.add_row(Row::new(vec![
            Cell::new(result.search_val.as_deref().unwrap_or("-")),
            Cell::new(result.address.as_deref().unwrap_or("-")),
            Cell::new(result.postal.as_deref().unwrap_or("-")),
            Cell::new(&location),
        ]));
    }
    table.printstd();

    Ok(())
}
