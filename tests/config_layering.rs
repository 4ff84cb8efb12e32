// This file is part of Globe Shaker.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use globe_shaker::GameConfig;

#[test]
fn shipped_config_parses_and_validates_clean() {
    let (cfg, used, errors) = GameConfig::load_layered(["assets/config/game.ron"]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 1);
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn later_layers_override_per_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("base.ron");
    let local = dir.path().join("local.ron");
    fs::write(
        &base,
        r#"(
            window: (width: 800.0, height: 600.0, title: "Base"),
            stack: (columns: 4, rows: 2, restitution: 0.5),
        )"#,
    )
    .expect("write base");
    fs::write(
        &local,
        r#"(
            stack: (rows: 3),
            boundary: (solid: true),
        )"#,
    )
    .expect("write local");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.title, "Base");
    assert_eq!((cfg.stack.columns, cfg.stack.rows), (4, 3));
    assert_eq!(cfg.stack.restitution, 0.5);
    assert!(cfg.boundary.solid);
    assert_eq!(cfg.boundary.radius, 300.0);
}

#[test]
fn unreadable_and_broken_layers_are_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = dir.path().join("good.ron");
    let broken = dir.path().join("broken.ron");
    let missing = dir.path().join("missing.ron");
    fs::write(&good, "(stack: (columns: 2))").expect("write good");
    fs::write(&broken, "(stack: (columns: ").expect("write broken");

    let (cfg, used, errors) = GameConfig::load_layered([&good, &broken, &missing]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 2, "{errors:?}");
    assert!(errors.iter().any(|e| e.contains("parse error")));
    assert!(errors.iter().any(|e| e.contains("read error")));
    assert_eq!(cfg.stack.columns, 2);
}

#[test]
fn wrongly_typed_merge_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = dir.path().join("bad.ron");
    fs::write(&bad, r#"(stack: (columns: "eight"))"#).expect("write");
    let (cfg, _used, errors) = GameConfig::load_layered([&bad]);
    assert_eq!(cfg, GameConfig::default());
    assert!(errors.iter().any(|e| e.contains("using defaults")));
}
