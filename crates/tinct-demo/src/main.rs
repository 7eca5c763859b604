//! Tinct Demo — headless walkthrough of the picker model.
//!
//! Replays the editing sessions a picker UI drives through the model:
//! single-color edits in each color space, a swatch-list session, and
//! gradient editing (select, recolor, add, delete) for the linear, radial,
//! and angular shapes.

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tinct_core::gradient::samples;
use tinct_core::{
    ColorManager, ColorToken, DeleteOutcome, GradientManager, SelectedColor,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    color_picker_sessions();
    swatch_session();
    gradient_session("linear", GradientManager::new(samples::periwinkle()));
    gradient_session("radial", GradientManager::new(samples::sunset()));
    gradient_session("angular", GradientManager::new(samples::rainbow()));
}

/// One color token walked through each space's picker surface.
fn color_picker_sessions() {
    let rgb = ColorToken::rgb(0.2, 0.5, 0.8);
    info!(color = %rgb, red = rgb.red(), green = rgb.green(), blue = rgb.blue(), "rgb picker");

    let hsb = ColorToken::hsb(0.2, 0.5, 0.5).with_brightness(0.8);
    info!(color = %hsb, hue = hsb.hue(), "hsb picker after brightness slide");

    let cmyk = ColorToken::cmyk(0.5, 0.5, 0.5, 0.5).with_key_black(0.2);
    info!(color = %cmyk, key = cmyk.key_black(), "cmyk picker after key slide");

    let gray = ColorToken::white(0.3);
    info!(color = %gray, level = gray.white_level(), "gray scale picker");

    let faded = ColorToken::hsb(0.3, 0.0, 0.0).with_alpha(0.5);
    info!(color = %faded, alpha = faded.alpha(), "alpha slider");
}

/// The full color picker's swatch list.
fn swatch_session() {
    let mut manager = ColorManager::new(vec![ColorToken::hsb(0.3, 0.5, 0.5)]);
    match ColorToken::from_hex("#fc466b") {
        Ok(color) => manager.push(color),
        Err(err) => warn!(%err, "skipping unparseable swatch"),
    }
    manager.set_current(1);
    manager.replace_current(manager.current().with_saturation(0.9));
    info!(
        swatches = manager.len(),
        current = %manager.current(),
        "swatch session"
    );
}

/// A scripted gradient edit: select the first stop, recolor it through the
/// selection binding, add a stop, then delete the selection.
fn gradient_session(label: &str, mut manager: GradientManager) {
    let mut fallback = ColorToken::rgb(0.2, 0.2, 0.4);

    let first = manager.gradient.stops[0].id();
    manager.select(first);

    let mut binding = SelectedColor::new(&mut manager, &mut fallback);
    let recolored = binding.resolve().with_hue(0.6);
    binding.commit(recolored);

    manager.append_from_selection(&fallback);

    match manager.delete_selected() {
        DeleteOutcome::Removed(id) => info!(%id, "deleted selected stop"),
        other => info!(?other, "delete refused"),
    }

    match serde_json::to_string_pretty(&manager.gradient) {
        Ok(json) => info!(
            session = label,
            name = %manager.gradient.name,
            stops = manager.gradient.stops.len(),
            midpoint = %manager.gradient.sample(0.5),
            "gradient session\n{json}"
        ),
        Err(err) => warn!(session = label, %err, "gradient did not serialize"),
    }
}
