// src/plot/mod.rs

//! Static figure rendering for both pipelines.
//!
//! Everything here draws to a PNG through `plotters`' bitmap backend and
//! overwrites any existing file at the target path.

use crate::collider::EventSample;
use crate::simulation::OutcomeTally;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;
use tracing::info;

const NAVY: RGBColor = RGBColor(25, 25, 112);
const CRIMSON: RGBColor = RGBColor(220, 20, 60);
const DARK_GREEN: RGBColor = RGBColor(0, 100, 0);

/// Renders an outcome tally as a bar chart, one bar per observed
/// bitstring in sorted order.
pub fn render_outcome_tally(
    path: &Path,
    tally: &OutcomeTally,
    title: &str,
) -> Result<(), Box<dyn Error>> {
    let counts = tally.sorted_counts();
    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let y_max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);

    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0usize..labels.len().max(1)).into_segmented(),
            0u64..y_max + y_max / 5 + 1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Outcome")
        .y_desc("Counts")
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(NAVY.mix(0.8).filled())
            .margin(30)
            .data(counts.iter().enumerate().map(|(i, (_, c))| (i, *c))),
    )?;

    root.present()?;
    info!(path = %path.display(), "outcome tally figure rendered");
    Ok(())
}

/// Renders the three-panel summary of an event sample: log-scale jet pT
/// spectrum, multiplicity distribution, and MET histogram.
pub fn render_event_sample(
    path: &Path,
    sample: &EventSample,
    title: &str,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 26))?;
    let panels = root.split_evenly((1, 3));

    render_pt_spectrum(&panels[0], &sample.jet_pts)?;
    render_multiplicity(&panels[1], &sample.multiplicities)?;
    render_met(&panels[2], &sample.mets)?;

    root.present()?;
    info!(path = %path.display(), "event sample figure rendered");
    Ok(())
}

fn render_pt_spectrum<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    jet_pts: &[f64],
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    const PT_MAX: f64 = 1200.0;
    const PT_BINS: usize = 80;

    let counts = histogram_counts(jet_pts, 0.0, PT_MAX, PT_BINS);
    let bin_width = PT_MAX / PT_BINS as f64;
    let y_max = counts.iter().max().copied().unwrap_or(0).max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Jet pT spectrum", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..PT_MAX, (0.8f64..y_max * 2.0).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Jet pT [GeV]")
        .y_desc("Jets / bin")
        .draw()?;

    // Bars start at the log-scale baseline; empty bins are skipped.
    chart.draw_series(
        counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(i, count)| {
                let x0 = i as f64 * bin_width;
                Rectangle::new(
                    [(x0, 0.8), (x0 + bin_width, *count as f64)],
                    NAVY.mix(0.8).filled(),
                )
            }),
    )?;
    Ok(())
}

fn render_multiplicity<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    multiplicities: &[usize],
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    const MULT_RANGE: usize = 12;

    let mut counts = vec![0u64; MULT_RANGE];
    for &m in multiplicities {
        if m < MULT_RANGE {
            counts[m] += 1;
        }
    }
    let y_max = counts.iter().max().copied().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Multiplicity distribution", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0usize..MULT_RANGE).into_segmented(),
            0u64..y_max + y_max / 5 + 1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Jet multiplicity")
        .y_desc("Events")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(CRIMSON.mix(0.9).filled())
            .margin(5)
            .data(counts.iter().enumerate().map(|(m, c)| (m, *c))),
    )?;
    Ok(())
}

fn render_met<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    mets: &[f64],
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    const MET_MAX: f64 = 300.0;
    const MET_BINS: usize = 50;

    let counts = histogram_counts(mets, 0.0, MET_MAX, MET_BINS);
    let bin_width = MET_MAX / MET_BINS as f64;
    let y_max = counts.iter().max().copied().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Missing transverse energy", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..MET_MAX, 0u64..y_max + y_max / 5 + 1)?;

    chart
        .configure_mesh()
        .x_desc("Missing ET [GeV]")
        .y_desc("Events")
        .draw()?;

    chart.draw_series(counts.iter().enumerate().filter(|(_, c)| **c > 0).map(
        |(i, count)| {
            let x0 = i as f64 * bin_width;
            Rectangle::new(
                [(x0, 0), (x0 + bin_width, *count)],
                DARK_GREEN.mix(0.8).filled(),
            )
        },
    ))?;
    Ok(())
}

/// Fixed-width binning over [min, max); samples outside the range are
/// dropped, matching the plotted axis windows.
fn histogram_counts(samples: &[f64], min: f64, max: f64, n_bins: usize) -> Vec<u64> {
    let mut counts = vec![0u64; n_bins];
    if n_bins == 0 || max <= min {
        return counts;
    }
    let width = (max - min) / n_bins as f64;
    for &x in samples {
        if x < min || x >= max {
            continue;
        }
        let idx = (((x - min) / width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::histogram_counts;

    #[test]
    fn bins_cover_range_and_drop_outliers() {
        let samples = [0.0, 0.5, 1.5, 9.99, 10.0, -0.1, 25.0];
        let counts = histogram_counts(&samples, 0.0, 10.0, 10);
        assert_eq!(counts.len(), 10);
        assert_eq!(counts[0], 2); // 0.0 and 0.5
        assert_eq!(counts[1], 1); // 1.5
        assert_eq!(counts[9], 1); // 9.99
        assert_eq!(counts.iter().sum::<u64>(), 4); // 10.0, -0.1, 25.0 dropped
    }

    #[test]
    fn degenerate_parameters_yield_empty_histogram() {
        assert!(histogram_counts(&[1.0], 0.0, 10.0, 0).is_empty());
        assert_eq!(histogram_counts(&[1.0], 5.0, 5.0, 4), vec![0, 0, 0, 0]);
    }
}
