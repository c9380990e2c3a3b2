use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, TouchEvent};

/// Where the divider sits, as a percentage of the container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPosition(f64);

impl SliderPosition {
    pub const DEFAULT: SliderPosition = SliderPosition(50.0);

    pub fn value(self) -> f64 {
        self.0
    }

    /// Position for a pointer at `client_x` over a container starting at
    /// `left` and `width` pixels wide. Zero-width containers (not laid out
    /// yet) leave the position where it was.
    pub fn update(self, client_x: f64, left: f64, width: f64) -> SliderPosition {
        if width <= 0.0 || !width.is_finite() {
            return self;
        }
        SliderPosition(position_from_pointer(client_x, left, width))
    }

    pub fn clip_path(self) -> String {
        format!("inset(0 {}% 0 0)", 100.0 - self.0)
    }

    pub fn handle_left(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        SliderPosition::DEFAULT
    }
}

pub fn position_from_pointer(client_x: f64, left: f64, width: f64) -> f64 {
    ((client_x - left) / width * 100.0).clamp(0.0, 100.0)
}

#[derive(Properties, PartialEq)]
pub struct BeforeAfterProps {
    #[prop_or_default]
    pub before_image: Option<String>,
    #[prop_or_default]
    pub after_image: Option<String>,
    #[prop_or("Before".to_string())]
    pub before_label: String,
    #[prop_or("After".to_string())]
    pub after_label: String,
    #[prop_or(true)]
    pub show_labels: bool,
    #[prop_or_default]
    pub compact: bool,
}

fn image_or_placeholder(src: &Option<String>, label: &str, kind: &'static str) -> Html {
    match src {
        Some(src) => html! { <img src={src.clone()} alt={label.to_string()} class="slider-image" /> },
        None => html! {
            <div class={classes!("slider-placeholder", kind)}>
                <p>{format!("{} Photo", label)}</p>
            </div>
        },
    }
}

#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &BeforeAfterProps) -> Html {
    let position = use_state(SliderPosition::default);
    let dragging = use_state(|| false);
    let container = use_node_ref();

    // Window-level listeners only live while a drag is in progress, so the
    // handle keeps tracking when the pointer leaves the image.
    {
        let position = position.clone();
        let dragging_setter = dragging.clone();
        let container = container.clone();
        use_effect_with_deps(
            move |is_dragging: &bool| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if *is_dragging => {
                        let move_to = move |client_x: f64| {
                            if let Some(el) = container.cast::<Element>() {
                                let rect = el.get_bounding_client_rect();
                                position.set((*position).update(client_x, rect.left(), rect.width()));
                            }
                        };

                        let on_mouse_move = {
                            let move_to = move_to.clone();
                            Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                                move_to(e.client_x() as f64);
                            })
                        };
                        let on_touch_move = Closure::<dyn Fn(TouchEvent)>::new(move |e: TouchEvent| {
                            if let Some(touch) = e.touches().get(0) {
                                move_to(touch.client_x() as f64);
                            }
                        });
                        let on_release = Closure::<dyn Fn()>::new(move || dragging_setter.set(false));

                        let _ = window.add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref());
                        let _ = window.add_event_listener_with_callback("touchmove", on_touch_move.as_ref().unchecked_ref());
                        let _ = window.add_event_listener_with_callback("mouseup", on_release.as_ref().unchecked_ref());
                        let _ = window.add_event_listener_with_callback("touchend", on_release.as_ref().unchecked_ref());

                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref());
                            let _ = window.remove_event_listener_with_callback("touchmove", on_touch_move.as_ref().unchecked_ref());
                            let _ = window.remove_event_listener_with_callback("mouseup", on_release.as_ref().unchecked_ref());
                            let _ = window.remove_event_listener_with_callback("touchend", on_release.as_ref().unchecked_ref());
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            *dragging,
        );
    }

    let start_drag = {
        let dragging = dragging.clone();
        Callback::from(move |_: MouseEvent| dragging.set(true))
    };
    let start_touch = {
        let dragging = dragging.clone();
        Callback::from(move |_: TouchEvent| dragging.set(true))
    };

    let pos = *position;

    html! {
        <div ref={container} class={classes!("before-after", props.compact.then(|| "compact"))}>
            <div class="slider-layer">
                { image_or_placeholder(&props.after_image, &props.after_label, "after") }
            </div>
            <div class="slider-layer" style={format!("clip-path: {};", pos.clip_path())}>
                { image_or_placeholder(&props.before_image, &props.before_label, "before") }
            </div>
            <div
                class="slider-handle"
                style={format!("left: {}; transform: translateX(-50%);", pos.handle_left())}
                onmousedown={start_drag}
                ontouchstart={start_touch}
            >
                <div class="slider-knob">{"⇆"}</div>
            </div>
            if props.show_labels {
                <>
                    <div class="slider-label before">{&props.before_label}</div>
                    <div class="slider-label after">{&props.after_label}</div>
                </>
            }
            <div class="slider-hint">{"Drag to compare"}</div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct Comparison {
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub title: String,
}

#[derive(Properties, PartialEq)]
pub struct BeforeAfterGridProps {
    pub items: Vec<Comparison>,
}

#[function_component(BeforeAfterGrid)]
pub fn before_after_grid(props: &BeforeAfterGridProps) -> Html {
    html! {
        <div class="before-after-grid">
            { for props.items.iter().map(|item| html! {
                <div class="before-after-item">
                    <BeforeAfterSlider
                        before_image={item.before_image.clone()}
                        after_image={item.after_image.clone()}
                        show_labels={false}
                        compact={true}
                    />
                    <h4>{&item.title}</h4>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_inside_maps_linearly() {
        assert_eq!(position_from_pointer(150.0, 100.0, 200.0), 25.0);
        assert_eq!(position_from_pointer(300.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn pointer_outside_is_clamped() {
        assert_eq!(position_from_pointer(-5000.0, 100.0, 200.0), 0.0);
        assert_eq!(position_from_pointer(5000.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn zero_width_keeps_position() {
        let pos = SliderPosition::DEFAULT.update(10.0, 0.0, 0.0);
        assert_eq!(pos.value(), 50.0);
    }

    #[test]
    fn clip_and_handle_follow_position() {
        let pos = SliderPosition::DEFAULT.update(75.0, 0.0, 100.0);
        assert_eq!(pos.clip_path(), "inset(0 25% 0 0)");
        assert_eq!(pos.handle_left(), "75%");
    }
}
