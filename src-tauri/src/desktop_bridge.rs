//! Page-side half of the bridge: a script installed into every page of the
//! main window that exposes the host commands as `window.desktopBridge.api`
//! and the `window.desktopBridge.state` object the host pushes into.

/// Commands reachable through `window.desktopBridge.api`, by Tauri command name.
pub(crate) const BRIDGE_COMMANDS: [&str; 5] = [
    "fullscreen",
    "save_content",
    "ls",
    "show_item_in_folder",
    "desktop_bridge_is_desktop_runtime",
];

const BRIDGE_INIT_SCRIPT: &str = r#"(function () {
  if (window.desktopBridge) {
    return;
  }
  const invoke = (command, args) => window.__TAURI_INTERNALS__.invoke(command, args || {});
  window.desktopBridge = {
    api: {
      fullscreen: () => invoke("fullscreen"),
      save_content: (content) => invoke("save_content", { content: String(content) }),
      ls: () => invoke("ls"),
      show_item_in_folder: (path) => invoke("show_item_in_folder", { path: String(path) }),
      isDesktopRuntime: () => invoke("desktop_bridge_is_desktop_runtime"),
    },
    state: {},
  };
})();
"#;

pub(crate) fn bridge_init_script() -> &'static str {
    BRIDGE_INIT_SCRIPT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_script_invokes_every_bridge_command() {
        let script = bridge_init_script();
        for command in BRIDGE_COMMANDS {
            assert!(
                script.contains(&format!("invoke(\"{command}\"")),
                "bridge script does not expose {command}"
            );
        }
    }

    #[test]
    fn init_script_is_idempotent_and_declares_state() {
        let script = bridge_init_script();
        assert!(script.contains("if (window.desktopBridge)"));
        assert!(script.contains("state: {}"));
    }
}
