//! Falling-particle celebration effect, driven by the Web Animations API.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, KeyframeAnimationOptions};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::util;

const FALL_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Parameters for one particle, derived from four uniform samples in [0, 1).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ParticleSpec {
    pub color_index: usize,
    pub left_percent: f64,
    pub duration_ms: f64,
    pub rotation_deg: f64,
}

impl ParticleSpec {
    pub fn from_samples(palette_len: usize, samples: [f64; 4]) -> ParticleSpec {
        ParticleSpec {
            color_index: ((samples[0] * palette_len as f64) as usize)
                .min(palette_len.saturating_sub(1)),
            left_percent: samples[1] * 100.0,
            duration_ms: 3_000.0 + samples[2] * 2_000.0,
            rotation_deg: samples[3] * 360.0,
        }
    }
}

pub(crate) fn particle_css(color: &str, left_percent: f64) -> String {
    format!(
        "position: fixed; width: 10px; height: 10px; background: {color}; \
         top: -10px; left: {left_percent}%; opacity: 1; z-index: 9999; \
         pointer-events: none;"
    )
}

/// Spawns the configured number of particles falling from above the viewport
/// to below it. Each node is removed by its animation's `finish` callback.
pub(crate) fn burst(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let window = util::window()?;
    let body = document.body().ok_or(UiError::NoBody)?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(600.0);
    for _ in 0..config.confetti_count {
        let spec = ParticleSpec::from_samples(
            config.confetti_colors.len(),
            [
                js_sys::Math::random(),
                js_sys::Math::random(),
                js_sys::Math::random(),
                js_sys::Math::random(),
            ],
        );
        spawn_particle(document, &body, config, &spec, viewport_height)?;
    }
    Ok(())
}

fn spawn_particle(
    document: &Document,
    body: &HtmlElement,
    config: &UiConfig,
    spec: &ParticleSpec,
    viewport_height: f64,
) -> Result<(), UiError> {
    let particle = document.create_element("div")?;
    let color = config
        .confetti_colors
        .get(spec.color_index)
        .map(String::as_str)
        .unwrap_or("#ffffff");
    if let Some(el) = particle.dyn_ref::<HtmlElement>() {
        el.style().set_css_text(&particle_css(color, spec.left_percent));
    }
    body.append_child(&particle)?;

    let keyframes = fall_keyframes(viewport_height, spec.rotation_deg)?;
    let options = KeyframeAnimationOptions::new();
    options.set_duration(spec.duration_ms);
    options.set_easing(FALL_EASING);
    let animation = particle.animate_with_keyframe_animation_options(Some(keyframes.as_ref()), &options);
    let cleanup = {
        let particle = particle.clone();
        Closure::once_into_js(move || particle.remove())
    };
    animation.set_onfinish(Some(cleanup.unchecked_ref()));
    Ok(())
}

fn fall_keyframes(viewport_height: f64, rotation_deg: f64) -> Result<js_sys::Array, UiError> {
    let from = js_sys::Object::new();
    js_sys::Reflect::set(
        &from,
        &"transform".into(),
        &"translateY(0) rotate(0deg)".into(),
    )?;
    js_sys::Reflect::set(&from, &"opacity".into(), &JsValue::from_f64(1.0))?;
    let to = js_sys::Object::new();
    js_sys::Reflect::set(
        &to,
        &"transform".into(),
        &format!("translateY({viewport_height}px) rotate({rotation_deg}deg)").into(),
    )?;
    js_sys::Reflect::set(&to, &"opacity".into(), &JsValue::from_f64(0.0))?;
    let frames = js_sys::Array::new();
    frames.push(&from);
    frames.push(&to);
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specs_stay_in_range_for_any_samples() {
        for samples in [
            [0.0, 0.0, 0.0, 0.0],
            [0.999, 0.999, 0.999, 0.999],
            [0.5, 0.25, 0.75, 0.1],
        ] {
            let spec = ParticleSpec::from_samples(5, samples);
            assert!(spec.color_index < 5);
            assert!((0.0..100.0).contains(&spec.left_percent));
            assert!((3_000.0..5_000.0).contains(&spec.duration_ms));
            assert!((0.0..360.0).contains(&spec.rotation_deg));
        }
    }

    #[test]
    fn empty_palette_does_not_panic() {
        let spec = ParticleSpec::from_samples(0, [0.9, 0.5, 0.5, 0.5]);
        assert_eq!(spec.color_index, 0);
    }

    #[test]
    fn particles_ignore_pointer_events() {
        let css = particle_css("#00ff41", 42.0);
        assert!(css.contains("pointer-events: none"));
        assert!(css.contains("background: #00ff41"));
        assert!(css.contains("left: 42%"));
        assert!(css.contains("top: -10px"));
    }
}
