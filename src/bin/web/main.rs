use polar_picker::{
    color::Rgba,
    colorwheel::ColorWheel,
    config::WheelConfig,
    error::WheelError,
    geometry::Point,
    picker::ColorPicker,
};
use yew::prelude::*;

const SIZE: f32 = 320.0;

fn main() {
    yew::Renderer::<App>::new().render();
}

fn wheel_config() -> WheelConfig {
    WheelConfig {
        origin: Point::new(SIZE / 2.0, SIZE / 2.0),
        radius: SIZE / 2.0 - 4.0,
        ..WheelConfig::default()
    }
}

fn build_picker() -> Result<ColorPicker, WheelError> {
    let mut picker = ColorPicker::new(ColorWheel::new(wheel_config())?);
    picker.subscribe(|color| log::debug!("light colour -> {}", color.to_hex()));
    Ok(picker)
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[function_component(App)]
pub fn app() -> Html {
    let picker = use_mut_ref(build_picker);
    // bumped after each commit so the component re-renders
    let committed = use_state(|| Rgba::WHITE);

    let onclick = {
        let picker = picker.clone();
        let committed = committed.clone();
        Callback::from(move |e: MouseEvent| {
            let point = Point::new(e.offset_x() as f32, e.offset_y() as f32);
            let color = match &mut *picker.borrow_mut() {
                Ok(picker) => {
                    picker.touch_down(point);
                    picker.touch_up(point)
                }
                Err(_) => None,
            };
            if let Some(color) = color {
                committed.set(color);
            }
        })
    };

    let view = picker.borrow();
    let picker = match &*view {
        Ok(picker) => picker,
        Err(err) => return html! { <p>{ err.to_string() }</p> },
    };
    let wheel = picker.wheel();
    let wedges: Vec<Html> = wheel
        .segments()
        .iter()
        .map(|segment| {
            let points = points_attr(&segment.outline(wheel.origin()));
            let fill = segment.rgba(1.0).to_hex();
            html! { <polygon points={points} fill={fill.clone()} stroke={fill} /> }
        })
        .collect();
    let hex = picker.color().to_hex();

    let size = SIZE.to_string();
    html! {
        <main>
            <h1>{env!("CARGO_PKG_NAME")}</h1>
            <svg width={size.clone()} height={size} {onclick}>
                { for wedges }
            </svg>
            <div style={format!("width: 64px; height: 64px; background: {hex}")} />
            <p>{ hex }</p>
        </main>
    }
}
