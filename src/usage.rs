//! Help formatter -- renders registry declarations into usage text.

use crate::registry::Registry;

/// Render the usage text: a banner line naming the program, then one line
/// per declaration in insertion order.
pub fn render(registry: &Registry) -> String {
    let mut out = format!("Usage: {} <flags>\n", registry.program());
    for decl in registry.declarations() {
        out.push_str(&format!("{} :\t {}\n", decl.name, decl.help));
    }
    out
}

/// Render the declarations (name, kind, type, required, help) as a JSON
/// array in insertion order.
pub fn render_json(registry: &Registry) -> serde_json::Result<String> {
    let decls: Vec<_> = registry.declarations().collect();
    serde_json::to_string_pretty(&decls)
}
