use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Events related to the backing series
#[derive(Debug, Clone)]
pub enum SeriesEvent {
    SeriesRegenerated {
        len: usize,
    },
    GenerationFailed {
        reason: String,
    },
}

impl DomainEvent for SeriesEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SeriesEvent::SeriesRegenerated { .. } => "SeriesRegenerated",
            SeriesEvent::GenerationFailed { .. } => "GenerationFailed",
        }
    }
}

/// Events related to viewport interaction
#[derive(Debug, Clone)]
pub enum ViewEvent {
    DetailChanged {
        chart_id: String,
        old_detail: f32,
        new_detail: f32,
    },
    WindowScrolled {
        chart_id: String,
        start_from: usize,
    },
    PanStateChanged {
        chart_id: String,
        is_panning: bool,
    },
}

impl DomainEvent for ViewEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ViewEvent::DetailChanged { .. } => "DetailChanged",
            ViewEvent::WindowScrolled { .. } => "WindowScrolled",
            ViewEvent::PanStateChanged { .. } => "PanStateChanged",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_series_event(&self, event: SeriesEvent);
    fn publish_view_event(&self, event: ViewEvent);
}

/// Simple in-memory event dispatcher
pub struct InMemoryEventDispatcher {
    series_handlers: Vec<Box<dyn Fn(&SeriesEvent)>>,
    view_handlers: Vec<Box<dyn Fn(&ViewEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self { series_handlers: Vec::new(), view_handlers: Vec::new() }
    }

    pub fn subscribe_to_series_events<F>(&mut self, handler: F)
    where
        F: Fn(&SeriesEvent) + 'static,
    {
        self.series_handlers.push(Box::new(handler));
    }

    pub fn subscribe_to_view_events<F>(&mut self, handler: F)
    where
        F: Fn(&ViewEvent) + 'static,
    {
        self.view_handlers.push(Box::new(handler));
    }
}

impl Default for InMemoryEventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_series_event(&self, event: SeriesEvent) {
        for handler in &self.series_handlers {
            handler(&event);
        }
    }

    fn publish_view_event(&self, event: ViewEvent) {
        for handler in &self.view_handlers {
            handler(&event);
        }
    }
}
