// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Default layer list: shipped defaults first, then an optional untracked local override.
pub const DEFAULT_CONFIG_LAYERS: [&str; 2] =
    ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
    pub background: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Globe Shaker".into(),
            auto_close: 0.0,
            background: "#14151F".into(),
        }
    }
}

/// Plain serde-friendly 2D value (kept separate from `Vec2` so RON stays `(x: .., y: ..)`).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}
impl Default for Point2 {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}
impl From<Point2> for Vec2 {
    fn from(p: Point2) -> Self {
        Vec2::new(p.x, p.y)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub pixels_per_meter: f32,
    /// World-space gravity (y-up), in pixels / s².
    pub gravity: Point2,
    /// Reference step rate used to convert per-step air friction into damping.
    pub step_hz: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
            gravity: Point2 { x: 0.0, y: -980.0 },
            step_hz: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoundaryConfig {
    pub radius: f32,
    pub stroke_width: f32,
    pub stroke_color: String,
    /// Number of straight wall segments approximating the ring collider.
    pub segments: u32,
    /// Solid static disc instead of a hollow containing ring.
    pub solid: bool,
}
impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            radius: 300.0,
            stroke_width: 5.0,
            stroke_color: "#000000".into(),
            segments: 96,
            solid: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StackConfig {
    pub columns: u32,
    pub rows: u32,
    pub radius: f32,
    pub gap_x: f32,
    pub gap_y: f32,
    /// Top-left corner of the first body's bounding box, in viewport coordinates.
    pub origin: Point2,
    pub restitution: f32,
    pub air_friction: f32,
    pub color: String,
}
impl Default for StackConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 5,
            radius: 25.0,
            gap_x: 5.0,
            gap_y: 5.0,
            origin: Point2 { x: 300.0, y: 150.0 },
            restitution: 0.8,
            air_friction: 0.05,
            color: "#6D96A6".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    pub enabled: bool,
    /// Fraction of the pointer/body gap the grabbed body's velocity closes per physics step.
    pub stiffness: f32,
    /// Cap on the grabbed body's speed (pixels / s); 0 disables the cap.
    pub max_speed: f32,
    /// Extra pick slack around a body's radius (0 = must click inside the body).
    pub grab_radius: f32,
}
impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stiffness: 0.01,
            max_speed: 1500.0,
            grab_radius: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pointer offset from the viewport center -> per-event stack translation.
    pub shake_scale: f32,
    pub drag: DragConfig,
}
impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            shake_scale: 0.001,
            drag: DragConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    pub log_interval: f32,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self { log_interval: 1.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub boundary: BoundaryConfig,
    pub stack: StackConfig,
    pub interaction: InteractionConfig,
    pub debug: DebugConfig,
    pub rapier_debug: bool,
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` into a Bevy color.
pub fn parse_hex_color(hex: &str) -> Result<Color, String> {
    Srgba::hex(hex)
        .map(Color::from)
        .map_err(|e| format!("invalid color '{hex}': {e}"))
}

fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let mut incoming = Some(v);
                for (ek, ev) in bm.iter_mut() {
                    if *ek == k {
                        if let Some(val) = incoming.take() {
                            merge_value(ev, val);
                        }
                        break;
                    }
                }
                if let Some(val) = incoming {
                    bm.insert(k, val);
                }
            }
        }
        (b, o) => *b = o,
    }
}

impl GameConfig {
    /// Deep-merge every readable layer in order (later wins per key).
    /// Returns the config, the layers actually used, and per-layer problems.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        for (label, hex) in [
            ("window.background", &self.window.background),
            ("boundary.stroke_color", &self.boundary.stroke_color),
            ("stack.color", &self.stack.color),
        ] {
            if let Err(e) = parse_hex_color(hex) {
                w.push(format!("{label}: {e}"));
            }
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.physics.step_hz <= 0.0 {
            w.push("physics.step_hz must be > 0".into());
        }
        if self.boundary.radius <= 0.0 {
            w.push("boundary.radius must be > 0".into());
        }
        if self.boundary.segments < 8 {
            w.push(format!(
                "boundary.segments {} too coarse; bodies may leak through corners",
                self.boundary.segments
            ));
        }
        let s = &self.stack;
        if s.columns == 0 || s.rows == 0 {
            w.push("stack grid is empty; no dynamic bodies will spawn".into());
        }
        if s.radius <= 0.0 {
            w.push("stack.radius must be > 0".into());
        }
        if s.gap_x < 0.0 || s.gap_y < 0.0 {
            w.push("stack gaps negative -> bodies start overlapping".into());
        }
        if !(0.0..=1.5).contains(&s.restitution) {
            w.push(format!(
                "stack.restitution {} outside recommended 0..1.5",
                s.restitution
            ));
        }
        if !(0.0..1.0).contains(&s.air_friction) {
            w.push(format!(
                "stack.air_friction {} outside 0..1 (1.0 would stop bodies dead)",
                s.air_friction
            ));
        }
        let drag = &self.interaction.drag;
        if drag.enabled && !(0.0..=1.0).contains(&drag.stiffness) {
            w.push(format!(
                "interaction.drag.stiffness {} outside 0..1",
                drag.stiffness
            ));
        }
        if drag.max_speed < 0.0 {
            w.push(format!(
                "interaction.drag.max_speed {} negative -> treated as uncapped",
                drag.max_speed
            ));
        }
        if self.debug.log_interval <= 0.0 {
            w.push("debug.log_interval must be > 0".into());
        }
        w
    }
}
