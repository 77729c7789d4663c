use log::Level;

const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Registrations and fires while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Hero 3D scene. `PORTFOLIO_SCENE_URL` at build time overrides it, an empty
/// value turns the scene off.
pub fn scene_url() -> Option<&'static str> {
    resolve_scene_url(option_env!("PORTFOLIO_SCENE_URL"))
}

fn resolve_scene_url(overridden: Option<&'static str>) -> Option<&'static str> {
    match overridden.map(str::trim) {
        Some("") => None,
        Some(url) => Some(url),
        None => Some(DEFAULT_SCENE_URL),
    }
}
