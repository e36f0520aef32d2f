use onemap_client::prelude::*;
use prettytable::{Cell, Row, Table, format};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple themes example");

    let client = Client::default();

    let info = client.get_all_themes_info(true).await?;
    let themes = ThemesInfoResponse::from_value(info)?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(vec![
        Cell::new("THEME"),
        Cell::new("QUERY NAME"),
        Cell::new("CATEGORY"),
        Cell::new("OWNER"),
    ]));
    for theme in &themes.theme_names {
        table.add_row(Row::new(vec![
            Cell::new(theme.theme_name.as_deref().unwrap_or("-")),
            Cell::new(&theme.query_name),
            Cell::new(theme.category.as_deref().unwrap_or("-")),
            Cell::new(theme.theme_owner.as_deref().unwrap_or("-")),
        ]));
    }
    table.printstd();

    let bbox = BoundingBox::new((1.291789, 103.7796), (1.3290461, 103.82));
    let kindergartens = client.retrieve_theme("kindergartens", Some(bbox)).await?;
    info!(
        "{} kindergartens within {}",
        kindergartens.results().len(),
        bbox.extents()
    );

    Ok(())
}
