//! Embedded player adapter.
//!
//! Builds the bootstrap for the CDN-hosted EmulatorJS runtime as one
//! explicit [`PlayerConfig`] object rendered into the play page. The
//! page includes the loader script exactly once per load; leaving the
//! page is the teardown (the runtime owns global browser state and
//! cannot be unloaded in place). Behaviour past the loader call is the
//! external runtime's and is treated as a black box.

use std::fmt::Write;

/// Base URL of the CDN-hosted runtime assets.
const CDN_DATA_PATH: &str = "https://cdn.emulatorjs.org/stable/data/";

/// Loader script injected to boot the runtime.
const CDN_LOADER_URL: &str = "https://cdn.emulatorjs.org/stable/data/loader.js";

/// Runtime core identifier for the PSP handheld.
const CORE_ID: &str = "psp";

/// Element the runtime mounts into.
const MOUNT_SELECTOR: &str = "#game";

/// Core files served from this server instead of the CDN. The heavy
/// PPSSPP WASM core is frequently blocked on corporate networks; the
/// remaining assets still come from the CDN.
const LOCAL_CORE_FILES: [&str; 3] = [
    "ppsspp-thread-wasm.js",
    "ppsspp-thread-wasm.wasm",
    "ppsspp-thread-wasm.data",
];

/// Complete configuration for one embedded play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// CSS selector of the mount element.
    pub mount_selector: &'static str,
    /// Emulator core identifier.
    pub core: &'static str,
    /// Where the runtime fetches its own assets from.
    pub data_path: &'static str,
    /// Absolute URL of the ROM to load.
    pub game_url: String,
    /// Per-file overrides loaded from this server instead of the CDN.
    pub path_overrides: Vec<(String, String)>,
    /// Threaded execution; required by the PSP core.
    pub threads: bool,
}

impl PlayerConfig {
    /// Build the configuration for a game.
    ///
    /// Relative ROM URLs are absolutized against `public_base_url` so
    /// the runtime (which fetches from the CDN origin) can reach them.
    pub fn for_game(public_base_url: &str, game_url: &str) -> Self {
        let base = public_base_url.trim_end_matches('/');

        let game_url = if game_url.starts_with('/') {
            format!("{base}{game_url}")
        } else {
            game_url.to_string()
        };

        let path_overrides = LOCAL_CORE_FILES
            .iter()
            .map(|file| (file.to_string(), format!("{base}/emulatorjs/data/{file}")))
            .collect();

        Self {
            mount_selector: MOUNT_SELECTOR,
            core: CORE_ID,
            data_path: CDN_DATA_PATH,
            game_url,
            path_overrides,
            threads: true,
        }
    }

    /// Render the bootstrap markup: one configuration script setting the
    /// runtime globals, then one loader script tag.
    pub fn render(&self) -> String {
        let mut script = String::new();

        let _ = writeln!(script, "<script>");
        let _ = writeln!(script, "window.EJS_player = {};", js_string(self.mount_selector));
        let _ = writeln!(script, "window.EJS_core = {};", js_string(self.core));
        let _ = writeln!(script, "window.EJS_pathtodata = {};", js_string(self.data_path));
        let _ = writeln!(script, "window.EJS_gameUrl = {};", js_string(&self.game_url));
        let _ = writeln!(script, "window.EJS_threads = {};", self.threads);

        let _ = writeln!(script, "window.EJS_paths = {{");
        for (file, url) in &self.path_overrides {
            let _ = writeln!(script, "  {}: {},", js_string(file), js_string(url));
        }
        let _ = writeln!(script, "}};");
        let _ = writeln!(script, "</script>");

        let _ = writeln!(
            script,
            r#"<script src="{CDN_LOADER_URL}" async></script>"#
        );

        script
    }
}

/// Serialize a string as a JS string literal, escaping quotes and any
/// `</script>`-breaking characters.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}
