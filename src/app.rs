use leptos::html::Canvas;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::ChartApplicationService,
    domain::{
        chart::ChartConfig,
        events::{SeriesEvent, ViewEvent},
        logging::{LogComponent, get_logger, get_time_provider},
    },
    event_utils::{
        EventOptions, TargetEventListenerHandle, document_event_listener_with_options,
        window_event_listener_with_options,
    },
    global_state::{
        detail_signal, is_panning_signal, series_len_signal, series_revision_signal,
        start_from_signal, status_signal, visible_count_signal,
    },
    infrastructure::{rendering::CanvasRenderer, services::JsRandomSource},
    log_error,
};

// 🔗 Global signals for the in-page event feed
thread_local! {
    static GLOBAL_LOGS: RwSignal<Vec<String>> = create_rw_signal(Vec::new());
    static IS_LOG_PAUSED: RwSignal<bool> = create_rw_signal(false);
}

/// Push one line into the debug console feed (capped at 100 lines).
fn push_console_line(line: String) {
    let provider = get_time_provider();
    let stamped = format!("[{}] {}", provider.format_timestamp(provider.current_timestamp()), line);

    GLOBAL_LOGS.with(|logs| {
        IS_LOG_PAUSED.with(|paused| {
            if !paused.get_untracked() {
                logs.update(|log_vec| {
                    log_vec.push(stamped);
                    while log_vec.len() > 100 {
                        log_vec.remove(0);
                    }
                });
            }
        });
    });
}

fn describe_series_event(event: &SeriesEvent) -> String {
    match event {
        SeriesEvent::SeriesRegenerated { len } => {
            format!("🔄 series regenerated: {} samples", len)
        }
        SeriesEvent::GenerationFailed { reason } => format!("❌ generation failed: {}", reason),
    }
}

fn describe_view_event(event: &ViewEvent) -> String {
    match event {
        ViewEvent::DetailChanged { new_detail, .. } => {
            format!("🔍 detail → {:.1} points", new_detail)
        }
        ViewEvent::WindowScrolled { start_from, .. } => {
            format!("↔ window starts at index {}", start_from)
        }
        ViewEvent::PanStateChanged { is_panning, .. } => {
            if *is_panning {
                "🖱 pan started".to_string()
            } else {
                "🖱 pan ended".to_string()
            }
        }
    }
}

/// 🦀 Root component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .series-scope-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #1e2a38;
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.08);
                padding: 16px;
                border-radius: 12px;
            }

            .view-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 12px;
            }

            .view-item {
                text-align: center;
            }

            .view-value {
                font-size: 22px;
                font-weight: 700;
                color: #00aaff;
                font-family: 'Courier New', monospace;
            }

            .view-label {
                font-size: 12px;
                color: #a0a0a0;
                margin-top: 4px;
            }

            .chart-container {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .status {
                color: #72c685;
                font-size: 14px;
                text-align: center;
            }

            .debug-console {
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-height: 260px;
                overflow-y: auto;
                border: 1px solid #4a5d73;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #72c685;
                font-weight: bold;
            }

            .debug-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.3;
            }

            .log-line {
                color: #e0e0e0;
                margin: 2px 0;
                padding: 1px 5px;
            }
            "#}
        </style>
        <div class="series-scope-app">
            <Header />
            <ChartContainer />
            <DebugConsole />
        </div>
    }
}

/// 📊 Header with the live viewport numbers
#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>"📈 Series Scope"</h1>
            <p>"Scroll to zoom • Drag to pan • Press R to regenerate"</p>

            <div class="view-info">
                <div class="view-item">
                    <div class="view-value">
                        {move || format!("{:.1}", detail_signal().get())}
                    </div>
                    <div class="view-label">"Detail (points across)"</div>
                </div>
                <div class="view-item">
                    <div class="view-value">
                        {move || start_from_signal().get().to_string()}
                    </div>
                    <div class="view-label">"First index"</div>
                </div>
                <div class="view-item">
                    <div class="view-value">
                        {move || visible_count_signal().get().to_string()}
                    </div>
                    <div class="view-label">"Visible points"</div>
                </div>
                <div class="view-item">
                    <div class="view-value">
                        {move || series_len_signal().get().to_string()}
                    </div>
                    <div class="view-label">"Series length"</div>
                </div>
            </div>
        </div>
    }
}

/// 🎨 The canvas plus all input wiring
#[component]
fn ChartContainer() -> impl IntoView {
    let config = ChartConfig::default();
    let canvas_px = config.canvas_size as u32;

    let service = match ChartApplicationService::new("series-scope".to_string(), config) {
        Ok(service) => Rc::new(RefCell::new(service)),
        Err(e) => {
            log_error!(LogComponent::Presentation("ChartContainer"), "❌ Init failed: {}", e);
            return view! {
                <div class="chart-container">
                    <div class="status">{format!("❌ {}", e)}</div>
                </div>
            }
            .into_view();
        }
    };

    // Domain events feed the in-page console
    {
        let mut svc = service.borrow_mut();
        svc.dispatcher_mut()
            .subscribe_to_series_events(|event| push_console_line(describe_series_event(event)));
        svc.dispatcher_mut()
            .subscribe_to_view_events(|event| push_console_line(describe_view_event(event)));
    }

    // Initial series, then mirror the state into the signals
    {
        let mut svc = service.borrow_mut();
        svc.reset_series(&mut JsRandomSource::new());
    }
    let stats = service.borrow().stats();
    detail_signal().set(stats.detail as f64);
    series_len_signal().set(stats.series_len);
    series_revision_signal().set(1);

    let renderer = Rc::new(RefCell::new(CanvasRenderer::new(
        "chart-canvas".to_string(),
        canvas_px,
        canvas_px,
    )));

    let canvas_ref = create_node_ref::<Canvas>();

    // Redraw whenever the viewport or the series changes. No render loop:
    // this effect is the only path to the canvas.
    {
        let service = Rc::clone(&service);
        let renderer = Rc::clone(&renderer);
        create_effect(move |_| {
            let _ = detail_signal().get();
            let _ = start_from_signal().get();
            let _ = series_revision_signal().get();

            if canvas_ref.get().is_none() {
                return;
            }

            let frame = service.borrow().frame();
            visible_count_signal().set(frame.visible.len());

            match renderer.borrow().render_frame(&frame) {
                Ok(()) => {
                    status_signal().set(format!("✅ {} points on screen", frame.visible.len()));
                }
                Err(e) => {
                    log_error!(
                        LogComponent::Presentation("ChartContainer"),
                        "❌ Render failed: {}",
                        e
                    );
                    status_signal().set(format!("❌ {}", e));
                }
            }
        });
    }

    // Wheel zoom, window-wide, installed once
    {
        let service = Rc::clone(&service);
        let wheel_handle = window_event_listener_with_options(
            ev::wheel,
            &EventOptions::default(),
            move |e: web_sys::WheelEvent| {
                let delta = e.delta_y();
                service.borrow_mut().handle_wheel(delta);
                let stats = service.borrow().stats();
                detail_signal().set(stats.detail as f64);
            },
        );
        on_cleanup(move || {
            if let Some(handle) = wheel_handle {
                handle.remove();
            }
        });
    }

    // Reset key, document-wide
    {
        let service = Rc::clone(&service);
        let key_handle = document_event_listener_with_options(
            ev::keydown,
            &EventOptions::default(),
            move |e: web_sys::KeyboardEvent| {
                if e.code() != "KeyR" {
                    return;
                }
                service.borrow_mut().reset_series(&mut JsRandomSource::new());
                let stats = service.borrow().stats();
                series_len_signal().set(stats.series_len);
                series_revision_signal().update(|rev| *rev += 1);
            },
        );
        on_cleanup(move || {
            if let Some(handle) = key_handle {
                handle.remove();
            }
        });
    }

    // Pan lifecycle: mousemove/mouseup listeners exist only while the
    // gesture is active and are detached when it ends. Removal is
    // deferred a frame so a handler never tears itself down mid-call.
    {
        let service = Rc::clone(&service);
        let pan_handles: Rc<RefCell<Vec<TargetEventListenerHandle>>> =
            Rc::new(RefCell::new(Vec::new()));

        create_effect(move |_| {
            if is_panning_signal().get() {
                // A repeated set(true) must not stack a second pair
                if !pan_handles.borrow().is_empty() {
                    return;
                }
                let move_service = Rc::clone(&service);
                let move_handle = document_event_listener_with_options(
                    ev::mousemove,
                    &EventOptions::default(),
                    move |e: web_sys::MouseEvent| {
                        let movement = e.movement_x() as f64;
                        move_service.borrow_mut().handle_pointer_move(movement);
                        let stats = move_service.borrow().stats();
                        start_from_signal().set(stats.start_from);
                    },
                );

                let up_service = Rc::clone(&service);
                let up_handle = document_event_listener_with_options(
                    ev::mouseup,
                    &EventOptions::default(),
                    move |_e: web_sys::MouseEvent| {
                        up_service.borrow_mut().end_pan();
                        is_panning_signal().set(false);
                    },
                );

                let mut handles = pan_handles.borrow_mut();
                handles.extend(move_handle);
                handles.extend(up_handle);
            } else {
                let stale: Vec<TargetEventListenerHandle> =
                    pan_handles.borrow_mut().drain(..).collect();
                if !stale.is_empty() {
                    request_animation_frame(move || {
                        for handle in stale {
                            handle.remove();
                        }
                    });
                }
            }
        });
    }

    let down_service = Rc::clone(&service);
    let on_mouse_down = move |_e: web_sys::MouseEvent| {
        if is_panning_signal().get_untracked() {
            return;
        }
        down_service.borrow_mut().begin_pan();
        is_panning_signal().set(true);
    };

    view! {
        <div class="chart-container">
            <canvas
                id="chart-canvas"
                node_ref=canvas_ref
                width=canvas_px
                height=canvas_px
                style="border: 2px solid #4a5d73; border-radius: 10px; background: #fff; cursor: grab;"
                on:mousedown=on_mouse_down
            />
            <div class="status">
                {move || status_signal().get()}
            </div>
        </div>
    }
    .into_view()
}

/// 🎯 In-page console fed by domain events
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = GLOBAL_LOGS.with(|logs| *logs);
    let is_paused = IS_LOG_PAUSED.with(|paused| *paused);

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Event Console"</span>
                <span>
                    <button
                        on:click=move |_| {
                            is_paused.update(|p| *p = !*p);
                            get_logger()
                                .info(
                                    LogComponent::Presentation("DebugConsole"),
                                    if is_paused.get_untracked() {
                                        "🛑 Event feed paused"
                                    } else {
                                        "▶️ Event feed resumed"
                                    },
                                );
                        }
                        class="debug-btn"
                    >
                        {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                    </button>
                    <button
                        on:click=move |_| {
                            logs.set(Vec::new());
                        }
                        class="debug-btn"
                    >
                        "🗑️ Clear"
                    </button>
                </span>
            </div>
            <div class="debug-log">
                <For
                    each=move || logs.get()
                    key=|log| log.clone()
                    children=move |log| {
                        view! { <div class="log-line">{log}</div> }
                    }
                />
            </div>
        </div>
    }
}
