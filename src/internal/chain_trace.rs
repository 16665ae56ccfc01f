#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

use std::{cell::RefCell, rc::Rc};

use chained_map::{ChainedHashMap, ResizeEvent};
use plotters::prelude::*;
use rand::Rng;
use tracing::{Level, info};

// Random workload size
const INSERTS: usize = 5_000;
// Keys are drawn from this range so that some inserts are updates
const KEY_SPACE: i64 = 20_000;
const OUTPUT: &str = "load_factor_trace.png";

/// One observation taken after every `set`
struct Sample {
    load_factor: f64,
    longest_chain: usize,
}

// Colliding keys under three buckets, printed in iteration order
fn demo() {
    let mut map = ChainedHashMap::with_capacity(3);
    map.set(1_i64, 2);
    map.set(5, 3);
    map.set(11, 3);
    map.set(15, 2);

    for (key, value) in map.items() {
        println!("{key}: {value}");
    }
    info!(size = map.len(), capacity = map.capacity(), "demo map built");
}

fn trace_random_inserts() -> (Vec<Sample>, Vec<ResizeEvent>, f64) {
    let mut rng = rand::rng();
    let mut map = ChainedHashMap::new();

    let resizes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&resizes);
    map.on_resize(move |event| sink.borrow_mut().push(event));

    let mut samples = Vec::with_capacity(INSERTS);
    for _ in 0..INSERTS {
        let key = rng.random_range(-KEY_SPACE..KEY_SPACE);
        map.set(key, key);
        samples.push(Sample {
            load_factor: map.load_factor(),
            longest_chain: map.bucket_lens().max().unwrap_or(0),
        });
    }

    info!(
        size = map.len(),
        capacity = map.capacity(),
        resizes = resizes.borrow().len(),
        "random workload finished"
    );
    let events = resizes.borrow().clone();
    (samples, events, map.load_threshold())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    demo();

    let (samples, resizes, threshold) = trace_random_inserts();

    let root = BitMapBackend::new(OUTPUT, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));

    let font_family = "sans-serif";
    let title_size = 30;
    let line_width = 2;

    // Plot 1: load factor against the growth threshold
    let mut load_chart = ChartBuilder::on(&areas[0])
        .caption("Load Factor After Each Insert", (font_family, title_size))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..samples.len(), 0.0..1.0)?;

    load_chart
        .configure_mesh()
        .x_desc("Insert")
        .y_desc("size / capacity")
        .draw()?;

    let threshold_style = ShapeStyle::from(&RED.mix(0.5)).stroke_width(1);
    load_chart
        .draw_series(LineSeries::new(
            vec![(0, threshold), (samples.len(), threshold)],
            threshold_style,
        ))?
        .label("Load threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    let load_style = ShapeStyle::from(&BLUE).stroke_width(line_width);
    load_chart
        .draw_series(LineSeries::new(
            samples.iter().enumerate().map(|(i, sample)| (i, sample.load_factor)),
            load_style,
        ))?
        .label("Load factor")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], load_style));

    load_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    // Plot 2: longest chain, which drops back after every resize
    let max_chain = samples.iter().map(|sample| sample.longest_chain).max().unwrap_or(0) + 1;
    let mut chain_chart = ChartBuilder::on(&areas[1])
        .caption("Longest Chain After Each Insert", (font_family, title_size))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..samples.len(), 0..max_chain)?;

    chain_chart
        .configure_mesh()
        .x_desc("Insert")
        .y_desc("Entries in longest bucket")
        .draw()?;

    chain_chart.draw_series(LineSeries::new(
        samples.iter().enumerate().map(|(i, sample)| (i, sample.longest_chain)),
        ShapeStyle::from(&GREEN).stroke_width(line_width),
    ))?;

    root.present()?;

    for event in &resizes {
        println!(
            "resize {} -> {} buckets with {} entries",
            event.old_capacity, event.new_capacity, event.size
        );
    }
    println!("Generated plot image: {OUTPUT}");

    Ok(())
}
