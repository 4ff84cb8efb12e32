// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use anyhow::{bail, Result};
#[cfg(target_arch = "wasm32")]
use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use globe_shaker::core::config::parse_hex_color;
#[cfg(not(target_arch = "wasm32"))]
use globe_shaker::core::config::DEFAULT_CONFIG_LAYERS;
use globe_shaker::{ConfigDiagnostics, GameConfig, GamePlugin};

/// DOM id of the canvas the wasm build draws into.
#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "index";

#[derive(Parser, Debug)]
#[command(name = "globe_shaker", about = "Bouncing bodies inside a static globe, shaken by the mouse")]
struct Cli {
    /// RON config layer (repeatable, merged in order). Replaces the default layers.
    #[arg(long = "config", value_name = "PATH")]
    config: Vec<PathBuf>,
    /// Stop the simulation after this many seconds.
    #[arg(long, value_name = "SECS")]
    auto_close: Option<f32>,
    /// Draw Rapier collider wireframes.
    #[arg(long)]
    rapier_debug: bool,
}

fn load_config(cli: &Cli) -> Result<(GameConfig, ConfigDiagnostics)> {
    // Explicit layers must all load; default layers only warn.
    let mut problems = Vec::new();
    let (mut cfg, layers) = if cli.config.is_empty() {
        #[cfg(target_arch = "wasm32")]
        let loaded = {
            let cfg: GameConfig = ron::from_str(include_str!("../assets/config/game.ron"))
                .context("embedded assets/config/game.ron")?;
            (cfg, vec!["<embedded game.ron>".to_string()])
        };
        #[cfg(not(target_arch = "wasm32"))]
        let loaded = {
            let present = DEFAULT_CONFIG_LAYERS
                .iter()
                .map(std::path::Path::new)
                .filter(|p| p.exists());
            let (cfg, used, errors) = GameConfig::load_layered(present);
            problems.extend(errors);
            (cfg, used)
        };
        loaded
    } else {
        let (cfg, used, errors) = GameConfig::load_layered(&cli.config);
        if !errors.is_empty() {
            bail!("config: {}", errors.join("; "));
        }
        (cfg, used)
    };
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    cfg.rapier_debug |= cli.rapier_debug;
    problems.extend(cfg.validate());
    Ok((cfg, ConfigDiagnostics { layers, problems }))
}

#[cfg(target_arch = "wasm32")]
fn require_canvas(id: &str) -> Result<()> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .map(|_| ())
        .with_context(|| format!("no <canvas id=\"{id}\"> to draw into"))
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cli = Cli::parse();
    let (cfg, diagnostics) = load_config(&cli)?;

    #[cfg(target_arch = "wasm32")]
    require_canvas(CANVAS_ID)?;

    let background = parse_hex_color(&cfg.window.background).unwrap_or(Color::BLACK);
    let window = Window {
        title: cfg.window.title.clone(),
        resolution: (cfg.window.width, cfg.window.height).into(),
        resizable: true,
        #[cfg(target_arch = "wasm32")]
        canvas: Some(format!("#{CANVAS_ID}")),
        #[cfg(target_arch = "wasm32")]
        fit_canvas_to_parent: true,
        ..default()
    };

    let exit = App::new()
        .insert_resource(ClearColor(background))
        .insert_resource(cfg)
        .insert_resource(diagnostics)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("globe_shaker exited with code {code}"),
    }
}
