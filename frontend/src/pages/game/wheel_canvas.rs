use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use shared::wheel_game::{wedge_label, WEDGE_DEGREES, WHEEL_WEDGES};

use crate::styles;

/// Wedge fill colors, in base-angle order.
const WEDGE_COLORS: [&str; 8] = [
    "#f97316", // orange
    "#06b6d4", // cyan
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#facc15", // gold (jackpot)
    "#22c55e", // green
    "#3b82f6", // blue
    "#ef4444", // red
];

/// Easing for the settle animation: fast start, smooth deceleration.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Cumulative rotation in degrees, clockwise-positive, unbounded. Must
    /// be applied as-is; reducing it here would snap the disc backwards.
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;

        use_effect_with((rotation, is_spinning), move |(rotation, is_spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Some(context) = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
                {
                    draw_wheel(&context, &canvas, *rotation, *is_spinning);
                }
            }
            || ()
        });
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="360"
                height="360"
                class={styles::WHEEL_CANVAS}
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(250, 204, 21, 0.35));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.4));"
                }}
            />
        </div>
    }
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    rotation: f64,
    is_spinning: bool,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Outer glow, brighter while spinning.
    let glow_intensity = if is_spinning { 0.3 } else { 0.15 };
    context.begin_path();
    context.set_fill_style_str(&format!("rgba(250, 204, 21, {})", glow_intensity));
    let _ = context.arc(center_x, center_y, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(deg_to_rad(rotation));
    let _ = context.translate(-center_x, -center_y);

    // Wedge layout: disc angle `a` is drawn clockwise `a` degrees from the
    // top, so that a total rotation of `360 - a` puts it under the pointer.
    let top = -PI / 2.0;
    for i in 0..WHEEL_WEDGES as usize {
        let start = top + deg_to_rad(i as f64 * WEDGE_DEGREES);
        let end = start + deg_to_rad(WEDGE_DEGREES);

        context.begin_path();
        context.set_fill_style_str(WEDGE_COLORS[i]);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.fill();

        context.begin_path();
        context.set_stroke_style_str("rgba(255, 255, 255, 0.7)");
        context.set_line_width(2.0);
        context.move_to(center_x, center_y);
        context.line_to(
            center_x + radius * start.cos(),
            center_y + radius * start.sin(),
        );
        context.stroke();
    }

    // Wedge labels, radial, centered in each wedge.
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color("rgba(0, 0, 0, 0.6)");
    context.set_shadow_blur(3.0);

    for i in 0..WHEEL_WEDGES as usize {
        let mid = top + deg_to_rad(i as f64 * WEDGE_DEGREES + WEDGE_DEGREES / 2.0);
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(mid);
        let _ = context.translate(radius * 0.62, 0.0);
        let _ = context.rotate(PI / 2.0);
        context.set_font("bold 14px 'Segoe UI', Roboto, system-ui, sans-serif");
        let _ = context.fill_text(wedge_label(i), 0.0, 0.0);
        context.restore();
    }

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.restore();

    // Hub.
    let inner_radius = radius * 0.18;
    context.begin_path();
    context.set_fill_style_str("#1e293b");
    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    context.fill();
    context.begin_path();
    context.set_stroke_style_str("rgba(250, 204, 21, 0.8)");
    context.set_line_width(3.0);
    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    context.stroke();

    // Outer ring.
    context.begin_path();
    context.set_stroke_style_str(if is_spinning {
        "rgba(250, 204, 21, 0.9)"
    } else {
        "rgba(250, 204, 21, 0.5)"
    });
    context.set_line_width(4.0);
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Pointer at 12 o'clock; the winning wedge settles underneath it.
    context.begin_path();
    context.move_to(center_x, center_y - radius + 14.0);
    context.line_to(center_x - 12.0, center_y - radius - 12.0);
    context.line_to(center_x + 12.0, center_y - radius - 12.0);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();
}
