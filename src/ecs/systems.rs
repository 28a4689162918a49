use hecs::World;

use super::components::{ChartComponent, SeriesComponent};

/// Swap regenerated series into all charts and remove the carrier entities.
///
/// Each chart gets its own clone, so per-viewport state stays serialized
/// even with several chart entities in the world.
pub fn apply_series(world: &mut World) {
    let carriers: Vec<(hecs::Entity, SeriesComponent)> =
        world.query::<&SeriesComponent>().iter().map(|(e, s)| (e, s.clone())).collect();

    if carriers.is_empty() {
        return;
    }

    for (_, series) in &carriers {
        for (_, chart) in world.query::<&mut ChartComponent>().iter() {
            chart.0.set_series(series.0.clone());
        }
    }

    for (entity, _) in carriers {
        let _ = world.despawn(entity);
    }
}
