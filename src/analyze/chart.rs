// src/analyze/chart.rs
// Horizontal bar charts rendered to PNG.

use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

fn chart_err<E: Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// One bar per `(label, count)`; the first entry is drawn on top.
/// `counts` is expected in descending order and must not be empty.
pub fn bar_chart(path: &Path, title: &str, counts: &[(String, usize)]) -> Result<()> {
    if counts.is_empty() {
        return Err(Error::Chart(format!("nothing to plot for \"{title}\"")));
    }
    let n = counts.len() as u32;
    let max = counts.iter().map(|(_, c)| *c as u32).max().unwrap_or(0);

    // One band per value of 0..=n-1; band 0 is at the bottom, so rank r sits at n - 1 - r.
    let label_at = |seg: u32| -> String {
        (n - 1)
            .checked_sub(seg)
            .and_then(|rank| counts.get(rank as usize))
            .map(|(label, _)| label.clone())
            .unwrap_or_default()
    };

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 26))
        .x_label_area_size(45)
        .y_label_area_size(150)
        .build_cartesian_2d(0u32..max + 1, (0u32..n - 1).into_segmented())
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n as usize)
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(seg) => label_at(*seg),
            _ => s!(),
        })
        .x_desc("Count")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(rank, (_, count))| {
            let y = n - 1 - rank as u32;
            let top = if y + 1 == n { SegmentValue::Last } else { SegmentValue::Exact(y + 1) };
            let mut bar = Rectangle::new(
                [(0, SegmentValue::Exact(y)), (*count as u32, top)],
                BLUE.mix(0.75).filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
