use heatmap_render_engine::{HeatmapAppSettings, create_app};

fn main() {
    let settings = HeatmapAppSettings::from_env().unwrap_or_else(|err| {
        eprintln!("Warning: {err}; falling back to an entropy seed");
        HeatmapAppSettings::default()
    });

    let mut app = create_app(settings);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
