use leptos::{
    ev, html,
    prelude::*,
    wasm_bindgen::{JsCast, JsValue},
};
use leptos_use::{use_event_listener, use_raf_fn, use_window};
use rand::{rngs::SmallRng, SeedableRng};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::particles::{Link, Particle, ParticleField, Surface};
use crate::theme::ThemeContext;

impl Surface for CanvasRenderingContext2d {
    fn clear(&self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_glyph(&self, particle: &Particle) {
        self.set_font(&format!("{}px monospace", particle.size));
        self.set_fill_style_str(particle.color);
        self.set_global_alpha(particle.alpha);
        let _ = self.fill_text(particle.glyph, particle.x, particle.y);
        self.set_global_alpha(1.0);
    }

    fn draw_link(&self, link: &Link) {
        self.begin_path();
        self.set_stroke_style_str(link.color);
        self.set_global_alpha(link.alpha);
        self.set_line_width(1.0);
        self.move_to(link.from.0, link.from.1);
        self.line_to(link.to.0, link.to.1);
        self.stroke();
        self.set_global_alpha(1.0);
    }
}

struct Animation {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    rng: SmallRng,
}

impl Animation {
    fn resize(&mut self, width: f64, height: f64) {
        size_canvas(&self.canvas, width, height);
        self.field.resize(width, height);
    }

    fn frame(&mut self) {
        self.field.tick(&mut self.rng);
        self.field.render(&self.ctx);
    }
}

fn viewport() -> (f64, f64) {
    let window = window();
    let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Animated code-glyph field behind the hero. Does nothing when the canvas
/// has no 2d context; listeners and the frame loop stop with the component.
#[component]
pub fn ParticleBackground() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let animation = StoredValue::new_local(None::<Animation>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            leptos::logging::debug_warn!("particle background: 2d context unavailable");
            return;
        };
        let (width, height) = viewport();
        size_canvas(&canvas, width, height);
        let mut rng = SmallRng::from_entropy();
        let field = ParticleField::new(&mut rng, width, height, theme.mode.get_untracked());
        animation.set_value(Some(Animation {
            canvas,
            ctx,
            field,
            rng,
        }));
    });

    Effect::new(move |_| {
        let mode = theme.mode.get();
        animation.update_value(|a| {
            if let Some(a) = a {
                a.field.set_mode(&mut a.rng, mode);
            }
        });
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        let (width, height) = viewport();
        animation.update_value(|a| {
            if let Some(a) = a {
                a.resize(width, height);
            }
        });
    });

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        let (x, y) = (f64::from(e.client_x()), f64::from(e.client_y()));
        animation.update_value(|a| {
            if let Some(a) = a {
                a.field.set_pointer(x, y);
            }
        });
    });

    let _ = use_raf_fn(move |_| {
        animation.update_value(|a| {
            if let Some(a) = a {
                a.frame();
            }
        });
    });

    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-slate-50 via-slate-100 to-slate-200 dark:from-[#1e293b] dark:via-[#0f172a] dark:to-[#020617] transition-colors duration-500"></div>
            <div class="absolute inset-0 bg-[url('/grid.svg')] opacity-[0.03] bg-center"></div>
            <canvas node_ref=canvas_ref class="absolute inset-0 w-full h-full"></canvas>
        </div>
    }
}
