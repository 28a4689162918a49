use series_chart_wasm::domain::chart::{Chart, ChartConfig};
use series_chart_wasm::domain::series::{MagnitudeBounds, SeriesGenerator, SplitMix64};
use series_chart_wasm::ecs::components::{ChartComponent, SeriesComponent};
use series_chart_wasm::ecs::{World, queue_series, spawn_chart, systems::apply_series};

fn generator() -> SeriesGenerator {
    SeriesGenerator::new(64, MagnitudeBounds::default()).unwrap()
}

#[test]
fn queued_series_reaches_every_chart() {
    let mut world = World::new();
    spawn_chart(&mut world, Chart::new("a".to_string(), ChartConfig::default()));
    spawn_chart(&mut world, Chart::new("b".to_string(), ChartConfig::default()));

    let series = generator().generate(&mut SplitMix64::new(11));
    queue_series(&mut world, series.clone());
    apply_series(&mut world);

    for (_, chart) in world.query::<&ChartComponent>().iter() {
        assert_eq!(chart.0.series(), &series);
    }
}

#[test]
fn carrier_entities_are_despawned_after_the_pass() {
    let mut world = World::new();
    spawn_chart(&mut world, Chart::new("a".to_string(), ChartConfig::default()));
    queue_series(&mut world, generator().generate(&mut SplitMix64::new(12)));

    apply_series(&mut world);
    assert_eq!(world.query::<&SeriesComponent>().iter().count(), 0);

    // A second pass with no carriers leaves charts untouched
    let snapshot: Vec<_> =
        world.query::<&ChartComponent>().iter().map(|(_, c)| c.0.series().clone()).collect();
    apply_series(&mut world);
    let after: Vec<_> =
        world.query::<&ChartComponent>().iter().map(|(_, c)| c.0.series().clone()).collect();
    assert_eq!(snapshot, after);
}

#[test]
fn later_carriers_win_within_one_pass() {
    let mut world = World::new();
    spawn_chart(&mut world, Chart::new("a".to_string(), ChartConfig::default()));

    let first = generator().generate(&mut SplitMix64::new(13));
    let second = generator().generate(&mut SplitMix64::new(14));
    queue_series(&mut world, first);
    queue_series(&mut world, second.clone());
    apply_series(&mut world);

    for (_, chart) in world.query::<&ChartComponent>().iter() {
        assert_eq!(chart.0.series(), &second);
    }
}
