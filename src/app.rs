use log::info;

use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use crate::input::FrameInput;
use crate::renderer::Renderer;
use crate::surface::PainterSurface;

/// eframe host for the drawing canvas.
pub struct CanvasApp {
    canvas: Canvas,
    renderer: Renderer,
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        cc.egui_ctx.set_visuals(config.theme.visuals());
        info!(
            "Canvas ready: thickness {}, sampling at {} Hz",
            config.stroke_thickness, config.input_rate_hz
        );

        Self {
            canvas: Canvas::new(&config),
            renderer: Renderer::new(&config),
        }
    }
}

impl eframe::App for CanvasApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::none().fill(self.renderer.theme().background);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;

            let input = FrameInput::from_egui(ctx, rect);
            if input.toggle_debug {
                self.renderer.toggle_debug_overlay();
            }
            self.canvas.tick(&input);

            let mut surface = PainterSurface::new(&painter, rect.min);
            self.renderer.render(&self.canvas, &mut surface);
        });

        // Input is sampled on a clock, so keep frames coming.
        ctx.request_repaint();
    }
}
