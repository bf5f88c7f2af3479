//! Interactive table pipeline example.
//!
//! Run with: cargo run --example table_browser
//!
//! Walks a small row collection through the filter → sort → paginate
//! pipeline, then shows the same view restored from a shared URL.

use std::time::Duration;

use gridstate::config::Column;
use gridstate::config::TableConfig;
use gridstate::model::Row;
use gridstate::table::TableState;
use gridstate::urlstate::TableQuery;
use url::Url;

fn sample_rows() -> Vec<Row> {
    vec![
        Row::new().set("name", "Alice").set("age", 34i64).set("joined", "2022-03-14"),
        Row::new().set("name", "Bob").set("age", 41i64).set("joined", "2019-11-02"),
        Row::new().set("name", "Carol").set("age", 29i64).set("joined", "2023-06-30"),
        Row::new().set("name", "Dan").set("age", 34i64).set("joined", "2021-01-20"),
        Row::new().set("name", "Alva").set("age", 25i64).set("joined", "2024-02-05"),
    ]
}

fn print_window(label: &str, table: &mut TableState, rows: &[Row]) {
    let visible = table.visible(rows);
    println!("{label}");
    for row in &visible {
        println!(
            "  {:<8} {:>3}  {}",
            row.display_text("name"),
            row.display_text("age"),
            row.display_text("joined"),
        );
    }
    println!(
        "  page {}/{} ({} items)\n",
        table.pager().current_page(),
        table.pager().total_pages(),
        table.pager().total_items(),
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TableConfig::new()
        .column(Column::new("name", "Name"))
        .column(Column::new("age", "Age"))
        .column(Column::new("joined", "Joined"))
        .sortable("name")
        .sortable("age")
        .sortable("joined")
        .searchable("name")
        .date_field("joined");

    let rows = sample_rows();
    let mut table = TableState::new(config.clone());

    print_window("Initial view:", &mut table, &rows);

    table.handle_page_size_change(2);
    table.handle_sort("joined");
    table.handle_sort("joined"); // second click flips to descending
    print_window("Newest joiners first, two per page:", &mut table, &rows);

    table.set_search("al");
    tokio::time::sleep(Duration::from_millis(600)).await; // let the query settle
    print_window("Search \"al\":", &mut table, &rows);

    let mut url = Url::parse("https://example.com/people")?;
    table.query().apply_to_url(&mut url);
    println!("Shareable link: {url}\n");

    let restored_query = TableQuery::from_url(&url);
    let mut restored = TableState::from_query(config, &restored_query);
    print_window("Restored from the link:", &mut restored, &rows);

    Ok(())
}
