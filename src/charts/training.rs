use std::path::Path;

use anyhow::{Context, Result};
use plotters::{
    prelude::{BitMapBackend, Circle, EmptyElement, IntoDrawingArea, SeriesLabelPosition},
    series::{LineSeries, PointSeries},
    style::{Color, ShapeStyle, BLUE, GREEN, RED, WHITE},
};

use super::utils::{episode_range, padded_y_range, CHART_DIMS};

/// Per-episode score as a 1px line with small circle markers. A nonzero
/// `ma_window` overlays a windowed moving average with a legend; zero
/// renders the plain chart.
pub fn score_chart(path: &Path, series: &[(u32, f64)], ma_window: usize) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_DIMS).into_drawing_area();
    root.fill(&WHITE)?;

    let points: Vec<(u32, f64)> = series
        .iter()
        .copied()
        .filter(|(_, value)| value.is_finite())
        .collect();
    let values: Vec<f64> = points.iter().map(|(_, value)| *value).collect();
    let (y_min, y_max) = padded_y_range(&values);

    let mut chart = plotters::chart::ChartBuilder::on(&root)
        .caption("Score per Episode", ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(episode_range(&points), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Episode")
        .y_desc("Score")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            ShapeStyle::from(&BLUE).stroke_width(1),
        ))?
        .label("Score")
        .legend(|(x, y)| {
            plotters::element::Rectangle::new([(x, y - 5), (x + 20, y + 5)], BLUE.mix(0.8).filled())
        });

    chart.draw_series(PointSeries::of_element(
        points.iter().copied(),
        3,
        BLUE.filled(),
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
    ))?;

    if ma_window > 0 {
        let scores: Vec<f64> = series.iter().map(|(_, value)| *value).collect();
        let ma = compute_moving_avg(&scores, ma_window);
        chart
            .draw_series(LineSeries::new(
                series
                    .iter()
                    .zip(&ma)
                    .filter(|(_, value)| value.is_finite())
                    .map(|(&(episode, _), &value)| (episode, value)),
                ShapeStyle::from(&RED).stroke_width(1),
            ))?
            .label(format!("MA({ma_window})"))
            .legend(|(x, y)| {
                plotters::element::Rectangle::new(
                    [(x, y - 5), (x + 20, y + 5)],
                    RED.mix(0.8).filled(),
                )
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLUE)
            .draw()?;
    }

    root.present()
        .with_context(|| format!("failed to write chart to {}", path.display()))?;

    Ok(())
}

/// Cumulative win rate as a green 1px line. Non-finite rates (an
/// episode-zero divisor) are skipped rather than failing the render.
pub fn win_rate_chart(path: &Path, series: &[(u32, f64)]) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_DIMS).into_drawing_area();
    root.fill(&WHITE)?;

    let points: Vec<(u32, f64)> = series
        .iter()
        .copied()
        .filter(|(_, value)| value.is_finite())
        .collect();
    let values: Vec<f64> = points.iter().map(|(_, value)| *value).collect();
    let (y_min, y_max) = padded_y_range(&values);

    let mut chart = plotters::chart::ChartBuilder::on(&root)
        .caption("Cumulative Win Rate", ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(episode_range(&points), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Episode")
        .y_desc("Win Rate")
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        ShapeStyle::from(&GREEN).stroke_width(1),
    ))?;

    root.present()
        .with_context(|| format!("failed to write chart to {}", path.display()))?;

    Ok(())
}

pub(crate) fn compute_moving_avg(data: &[f64], window: usize) -> Vec<f64> {
    if data.len() < window {
        return data.to_vec();
    }
    let mut result = Vec::with_capacity(data.len());
    let mut sum: f64 = data[..window].iter().sum();
    for _ in 0..window - 1 {
        result.push(f64::NAN);
    }
    result.push(sum / window as f64);
    for i in window..data.len() {
        sum += data[i] - data[i - window];
        result.push(sum / window as f64);
    }
    result
}
