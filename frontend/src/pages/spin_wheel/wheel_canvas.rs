use std::f64::consts::PI;

use shared::shared_prize_wheel::{PrizeCatalog, SPIN_DURATION_MS};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub catalog: PrizeCatalog,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
}

fn draw_wheel(canvas: &HtmlCanvasElement, catalog: &PrizeCatalog) -> Option<()> {
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 8.0;
    let segment = 2.0 * PI / catalog.len() as f64;

    context.clear_rect(0.0, 0.0, width, height);

    // Segment 0 starts at 12 o'clock and the rest follow clockwise
    for (i, prize) in catalog.prizes().iter().enumerate() {
        let start = -PI / 2.0 + i as f64 * segment;
        let end = start + segment;

        context.begin_path();
        context.set_fill_style_str(&prize.color);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
        context.set_line_width(2.0);
        context.stroke();

        // Label along the segment's bisector
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(start + segment / 2.0);
        context.set_text_align("right");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 15px sans-serif");
        let _ = context.fill_text(&prize.label, radius - 18.0, -8.0);
        context.set_font("12px sans-serif");
        let _ = context.fill_text(&prize.emoji, radius - 18.0, 10.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(center_x, center_y, radius * 0.18, 0.0, 2.0 * PI);
    context.fill();

    Some(())
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.catalog.clone(), move |catalog| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if draw_wheel(&canvas, catalog).is_none() {
                    log::warn!("canvas 2d context unavailable, wheel not drawn");
                }
            }
            || ()
        });
    }

    let transition = if props.is_spinning {
        format!("transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99)", SPIN_DURATION_MS)
    } else {
        "none".to_string()
    };
    let style = format!("transform: rotate({}deg); transition: {};", props.rotation, transition);

    html! {
        <div class="relative w-80 h-80 sm:w-96 sm:h-96 mx-auto">
            // Pointer at 12 o'clock
            <div class="absolute left-1/2 -translate-x-1/2 -top-3 z-10 w-0 h-0 border-l-[14px] border-r-[14px] border-t-[24px] border-l-transparent border-r-transparent border-t-rose-600 drop-shadow"></div>
            <canvas
                ref={canvas_ref}
                width="400"
                height="400"
                class="w-full h-full rounded-full shadow-2xl ring-8 ring-white/80 dark:ring-gray-800"
                {style}
            />
        </div>
    }
}
