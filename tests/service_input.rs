use std::cell::RefCell;
use std::rc::Rc;

use series_chart_wasm::application::ChartApplicationService;
use series_chart_wasm::domain::chart::ChartConfig;
use series_chart_wasm::domain::events::{SeriesEvent, ViewEvent};
use series_chart_wasm::domain::series::SplitMix64;

fn service() -> ChartApplicationService {
    ChartApplicationService::new("test".to_string(), ChartConfig::default()).unwrap()
}

#[test]
fn wheel_down_widens_the_window() {
    let mut svc = service();
    svc.handle_wheel(3.0);
    assert!((svc.stats().detail - 31.5).abs() < 1e-4);
}

#[test]
fn wheel_up_narrows_the_window() {
    let mut svc = service();
    svc.handle_wheel(-3.0);
    assert!((svc.stats().detail - 28.5).abs() < 1e-4);
}

#[test]
fn pointer_moves_only_pan_during_the_gesture() {
    let mut svc = service();
    svc.handle_pointer_move(-4.0);
    assert_eq!(svc.stats().start_from, 0);

    svc.begin_pan();
    svc.handle_pointer_move(-4.0);
    svc.handle_pointer_move(-4.0);
    assert_eq!(svc.stats().start_from, 2);

    svc.end_pan();
    svc.handle_pointer_move(-4.0);
    assert_eq!(svc.stats().start_from, 2);
}

#[test]
fn transitions_publish_domain_events() {
    let mut svc = service();

    let view_events: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let series_events: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&view_events);
    svc.dispatcher_mut().subscribe_to_view_events(move |event| {
        let line = match event {
            ViewEvent::DetailChanged { new_detail, .. } => format!("detail:{new_detail}"),
            ViewEvent::WindowScrolled { start_from, .. } => format!("scroll:{start_from}"),
            ViewEvent::PanStateChanged { is_panning, .. } => format!("pan:{is_panning}"),
        };
        sink.borrow_mut().push(line);
    });

    let sink = Rc::clone(&series_events);
    svc.dispatcher_mut().subscribe_to_series_events(move |event| {
        if let SeriesEvent::SeriesRegenerated { len } = event {
            sink.borrow_mut().push(*len);
        }
    });

    svc.reset_series(&mut SplitMix64::new(9));
    svc.handle_wheel(1.0);
    svc.begin_pan();
    svc.handle_pointer_move(-1.0);
    svc.end_pan();

    assert_eq!(*series_events.borrow(), [5000]);
    assert_eq!(*view_events.borrow(), ["detail:31.5", "pan:true", "scroll:1", "pan:false"]);
}

#[test]
fn saturated_zoom_publishes_nothing() {
    let mut svc = service();
    for _ in 0..100 {
        svc.handle_wheel(-1.0);
    }
    assert_eq!(svc.stats().detail, 3.0);

    let count: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    svc.dispatcher_mut().subscribe_to_view_events(move |_| *sink.borrow_mut() += 1);

    svc.handle_wheel(-1.0);
    assert_eq!(*count.borrow(), 0);
}
