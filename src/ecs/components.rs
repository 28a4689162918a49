use crate::domain::chart::Chart;
use crate::domain::series::SampleSeries;

/// ECS component containing a complete chart (series + viewport).
#[derive(Debug, Clone)]
pub struct ChartComponent(pub Chart);

/// ECS component carrying a freshly generated series to the charts.
#[derive(Debug, Clone)]
pub struct SeriesComponent(pub SampleSeries);
