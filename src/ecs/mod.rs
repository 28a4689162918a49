pub use hecs::{Entity, World};

pub mod components;
pub mod systems;

use components::{ChartComponent, SeriesComponent};
use crate::domain::chart::Chart;
use crate::domain::series::SampleSeries;

/// Spawn a chart entity.
pub fn spawn_chart(world: &mut World, chart: Chart) -> Entity {
    world.spawn((ChartComponent(chart),))
}

/// Queue a regenerated series for the next `apply_series` pass.
pub fn queue_series(world: &mut World, series: SampleSeries) -> Entity {
    world.spawn((SeriesComponent(series),))
}
