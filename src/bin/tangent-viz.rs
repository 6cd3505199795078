/*!
 * GUI application for tangent-viz - tangent line diagram viewer
 *
 * Opens a fixed 800 x 800 window showing the rendered diagram:
 * - Coordinate grid with integer tick labels and black axes
 * - Three parametric curves with dashed tangent lines and markers
 * - Legend panel describing the scene
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use tangent_viz::{Scene, Viewport, render_to_buffer};

const WINDOW_SIZE: f32 = 800.0;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_SIZE, WINDOW_SIZE])
            .with_resizable(false)
            .with_title("Tangent Line Visualization"),
        ..Default::default()
    };

    eframe::run_native(
        "Tangent Line Visualization",
        options,
        Box::new(|_cc| Ok(Box::new(TangentApp::new()))),
    )
}

/// Main application state
struct TangentApp {
    scene: Scene,

    // Cached rasterization of the scene, keyed by the panel size it was
    // rendered for
    texture: Option<(egui::TextureHandle, [usize; 2])>,
    error_message: String,
}

impl TangentApp {
    fn new() -> Self {
        Self {
            scene: Scene::standard(),
            texture: None,
            error_message: String::new(),
        }
    }

    /// Re-renders the scene whenever there is no texture yet or the panel
    /// size changed.
    fn ensure_texture(&mut self, ctx: &egui::Context, size: [usize; 2]) {
        if let Some((_, cached_size)) = &self.texture
            && *cached_size == size
        {
            return;
        }

        let viewport = Viewport::new(size[0] as u32, size[1] as u32);
        match render_to_buffer(&self.scene, viewport) {
            Ok(rgb) => {
                let image = egui::ColorImage::from_rgb(size, &rgb);
                self.texture = Some((
                    ctx.load_texture("tangent-scene", image, egui::TextureOptions::NEAREST),
                    size,
                ));
                self.error_message.clear();
            }
            Err(err) => {
                self.texture = None;
                self.error_message = format!("Failed to render the diagram: {}", err);
            }
        }
    }
}

impl eframe::App for TangentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let panel = ui.available_size();
                let size = [
                    (panel.x.round() as usize).max(1),
                    (panel.y.round() as usize).max(1),
                ];
                self.ensure_texture(ctx, size);

                if let Some((texture, _)) = &self.texture {
                    ui.image(texture);
                } else {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
    }
}
