//! countries list コマンド
//!
//! 1 ページ分の国一覧を非対話で表示する。TUI と同じ Model/update を通すため、
//! フィルタはページ分割後のスライスに適用される。

use crate::browser::{update, FilterKind, Model, Msg};
use crate::config::AppConfig;
use crate::country::Country;
use crate::loader;
use crate::output::PageSummary;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::num::NonZeroUsize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    pub page: NonZeroUsize,

    /// Filter applied to the selected page
    #[arg(long, value_enum)]
    pub filter: Option<FilterKind>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, config: &AppConfig) -> Result<(), String> {
    // 1. 国一覧を取得
    let client = config.http.build_client();
    let countries = loader::load_countries_with_spinner(&client, &config.endpoint)
        .await
        .map_err(|e| e.to_string())?;

    // 2. ページ選択・フィルタ適用
    let model = build_model(countries, &args);
    if !model.is_loaded() {
        println!("No countries loaded");
        return Ok(());
    }

    // 3. 出力
    let items = model.visible_items();
    if args.json {
        print_json(&items)
    } else {
        print_table(&model, &items, args.filter);
        Ok(())
    }
}

/// 読み込み → ページ選択 → フィルタ の順にメッセージを適用
fn build_model(countries: Vec<Country>, args: &Args) -> Model {
    let mut model = Model::new();
    update(&mut model, Msg::Loaded(countries));
    update(&mut model, Msg::PageChange(args.page.get() - 1));
    if let Some(kind) = args.filter {
        update(&mut model, Msg::SelectFilter(kind));
    }
    model
}

fn build_table(items: &[&Country]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Region", "Area", "Independent"]);

    for country in items {
        table.add_row(vec![
            country.name_str().to_string(),
            country.region_str().to_string(),
            country.area_label(),
            country.independent_label().to_string(),
        ]);
    }

    table
}

fn print_table(model: &Model, items: &[&Country], filter: Option<FilterKind>) {
    if !items.is_empty() {
        println!("{}", build_table(items));
    }

    let summary = PageSummary::format(
        model.page.selected() + 1,
        model.page.page_count,
        items.len(),
        filter.map(|kind| kind.label()),
    );
    println!("{} {}", summary.prefix, summary.message);
}

fn print_json(items: &[&Country]) -> Result<(), String> {
    serde_json::to_string_pretty(items)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize countries: {}", e))
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
