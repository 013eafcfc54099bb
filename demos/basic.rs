//! Standalone demo: a color swatch and hex readout above the picker.
//!
//! Clicking the hex label copies the value to the clipboard. Logging is
//! controlled through `RUST_LOG`.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_palette::{color_picker, SolidColor};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let color = RwSignal::new(SolidColor::default());

    floem::Application::new()
        .window(
            move |_| {
                app_view(color).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 420.0))
                    .title("floem-palette"),
            ),
        )
        .run();
}

fn app_view(color: RwSignal<SolidColor>) -> impl IntoView {
    let hex = move || format!("#{}", color.get().to_hex());

    v_stack((
        h_stack((
            // Swatch
            empty().style(move |s| {
                let c = color.get();
                s.width(30.0)
                    .height(30.0)
                    .border_radius(4.0)
                    .border(1.0)
                    .border_color(Color::rgb8(128, 128, 128))
                    .background(Color::rgba(c.r(), c.g(), c.b(), c.a()))
            }),
            // Hex readout; click to copy
            label(hex)
                .style(|s| {
                    s.font_size(14.0)
                        .font_family("monospace".to_string())
                        .cursor(floem::style::CursorStyle::Pointer)
                })
                .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
                    copy_to_clipboard(&hex());
                }),
        ))
        .style(|s| s.gap(10.0).items_center().justify_center()),
        color_picker(color).on_change(|c| log::debug!("picked #{}", c.to_hex())),
    ))
    .style(|s| s.size_full().gap(12.0).padding(16.0).justify_center())
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
