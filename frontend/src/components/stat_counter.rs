use yew::prelude::*;
use yew_hooks::use_window_scroll;
use gloo_timers::callback::Interval;
use web_sys::Element;

const TICK_MS: u32 = 16;

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

/// Counter value `elapsed_ms` into an animation of `duration_ms` towards `end`.
pub fn value_at(end: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return end;
    }
    let progress = elapsed_ms as f64 / duration_ms as f64;
    (ease_out_quart(progress) * end as f64).floor() as u32
}

pub fn is_done(elapsed_ms: u32, duration_ms: u32) -> bool {
    elapsed_ms >= duration_ms
}

/// Whether any part of a box spanning `top..bottom` sits inside a viewport
/// `viewport_height` pixels tall.
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    viewport_height > 0.0 && bottom > 0.0 && top < viewport_height
}

pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatCounterProps {
    pub end: u32,
    pub label: String,
    #[prop_or_default]
    pub prefix: String,
    #[prop_or_default]
    pub suffix: String,
    #[prop_or(2000)]
    pub duration_ms: u32,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let count = use_state_eq(|| 0u32);
    let started = use_state_eq(|| false);
    let finished = use_state_eq(|| false);
    let node = use_node_ref();
    let (_, scroll_y) = use_window_scroll();

    // Starts once, the first time the counter is on screen.
    {
        let started = started.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                if !*started {
                    let viewport = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    if let Some(el) = node.cast::<Element>() {
                        let rect = el.get_bounding_client_rect();
                        if is_in_view(rect.top(), rect.bottom(), viewport) {
                            started.set(true);
                        }
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    {
        let count = count.clone();
        let finished_setter = finished.clone();
        let (end, duration_ms) = (props.end, props.duration_ms);
        use_effect_with_deps(
            move |&(_, _, started, finished): &(u32, u32, bool, bool)| {
                let interval = (started && !finished).then(|| {
                    let mut elapsed = 0u32;
                    Interval::new(TICK_MS, move || {
                        elapsed = elapsed.saturating_add(TICK_MS);
                        count.set(value_at(end, elapsed, duration_ms));
                        if is_done(elapsed, duration_ms) {
                            // re-runs this effect, whose cleanup drops the interval
                            finished_setter.set(true);
                        }
                    })
                });
                move || drop(interval)
            },
            (end, duration_ms, *started, *finished),
        );
    }

    let shown = (*count).min(props.end);

    html! {
        <div ref={node} class="stat-counter">
            <div class="stat-number">
                {format!("{}{}{}", props.prefix, format_thousands(shown), props.suffix)}
            </div>
            <div class="stat-label">{&props.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: Vec<StatCounterProps>,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    html! {
        <div class="stats-grid">
            { for props.stats.iter().enumerate().map(|(i, stat)| html! {
                <div class="stats-grid-item">
                    <StatCounter
                        end={stat.end}
                        label={stat.label.clone()}
                        prefix={stat.prefix.clone()}
                        suffix={stat.suffix.clone()}
                        duration_ms={stat.duration_ms + i as u32 * 150}
                    />
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }

    #[test]
    fn value_is_monotonic_and_lands_on_end() {
        let mut last = 0;
        for elapsed in (0..=2000).step_by(100) {
            let v = value_at(500, elapsed, 2000);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(value_at(500, 2000, 2000), 500);
        assert_eq!(value_at(500, 99_999, 2000), 500);
        assert_eq!(value_at(7, 0, 0), 7);
    }

    #[test]
    fn done_once_duration_has_elapsed() {
        assert!(!is_done(0, 2000));
        assert!(!is_done(1984, 2000));
        assert!(is_done(2000, 2000));
        assert!(is_done(2016, 2000));
        assert!(is_done(0, 0));
        // the last tick lands exactly on the end value
        assert_eq!(value_at(500, 2016, 2000), 500);
    }

    #[test]
    fn visibility_needs_overlap_with_viewport() {
        assert!(is_in_view(100.0, 200.0, 800.0));
        assert!(is_in_view(-50.0, 20.0, 800.0));
        assert!(!is_in_view(900.0, 1000.0, 800.0));
        assert!(!is_in_view(-200.0, -10.0, 800.0));
        assert!(!is_in_view(100.0, 200.0, 0.0));
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
