// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar chart demo.
//!
//! Usage: `radar_chart_demo [data.json [options.json]]`
//!
//! Draws the dataset (or a built-in sample), then drives the chart through a
//! fixed sequence of interactions, writing `radar_chart_demo_<step>.svg` after
//! each one. Set `RUST_LOG=radar_chart=debug` to trace the mutations.

mod svg;

use std::error::Error;
use std::fs;

use radar_chart::{
    ChartEvent, Entity, LegendConfig, Margin, RadarChart, RadarConfig, RadarError, RadarOptions,
    RetainedSurface,
};
use tracing_subscriber::EnvFilter;

const SAMPLE_AXES: [&str; 7] = [
    "Battery Life",
    "Brand",
    "Contract Cost",
    "Design And Quality",
    "Have Internet Connectivity",
    "Large Screen",
    "Price Of Device",
];

fn sample() -> Vec<Entity> {
    vec![
        Entity::new(
            "Samsung",
            SAMPLE_AXES
                .into_iter()
                .zip([22.0, 28.0, 29.0, 17.0, 22.0, 2.0, 21.0]),
        ),
        Entity::new(
            "iPhone",
            SAMPLE_AXES
                .into_iter()
                .zip([27.0, 16.0, 35.0, 13.0, 20.0, 13.0, 35.0]),
        ),
    ]
}

fn default_config() -> Result<RadarConfig, RadarError> {
    Ok(RadarConfig::new()
        .with_size(300.0, 300.0)
        .with_margin(Margin {
            top: 100.0,
            right: 100.0,
            bottom: 100.0,
            left: 150.0,
        })
        .with_max_value(50.0)
        .with_levels(5)
        .with_format(".0f".parse()?)
        .with_unit("%")
        .with_legend(
            LegendConfig::new()
                .with_title("Smartphones")
                .with_translate(100.0, 40.0),
        )
        .with_inverse_data(true))
}

fn write_step(chart: &RadarChart<RetainedSurface>, step: &str) -> Result<(), Box<dyn Error>> {
    let path = format!("radar_chart_demo_{step}.svg");
    fs::write(&path, svg::to_svg_string(chart.surface()))?;
    tracing::info!(%path, marks = chart.surface().len(), "wrote step");
    println!("wrote {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let entities: Vec<Entity> = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => sample(),
    };
    let mut config = default_config()?;
    if let Some(path) = args.next() {
        let options: RadarOptions = serde_json::from_str(&fs::read_to_string(path)?)?;
        config = config.with_options(options)?;
    }

    let mut chart = RadarChart::new(entities, RetainedSurface::new(), config)?;
    chart.on_change(|change| tracing::info!(?change, "chart changed"));
    write_step(&chart, "initial")?;

    chart.dispatch(ChartEvent::LabelClick { axis: 0 })?;
    write_step(&chart, "reordered")?;

    let first_axis = chart.all_axis()[0].clone();
    chart.invert_values(Some(&first_axis))?;
    write_step(&chart, "inverted")?;

    chart.set_round_strokes(true);
    write_step(&chart, "rounded")?;

    let extra = Entity::new(
        "Nokia",
        chart
            .all_axis()
            .iter()
            .cloned()
            .zip([26.0, 10.0, 30.0, 14.0, 22.0, 4.0, 41.0].into_iter().cycle()),
    );
    chart.append_entity(extra)?;
    chart.update();
    write_step(&chart, "appended")?;

    chart.rotate_entities();
    write_step(&chart, "rotated")?;

    chart.dispatch(ChartEvent::BlobEnter { entity: 0 })?;
    chart.dispatch(ChartEvent::PointEnter { entity: 0, axis: 1 })?;
    write_step(&chart, "hover")?;

    let surface = chart.detach();
    tracing::info!(batches = surface.batches().len(), "done");
    Ok(())
}
