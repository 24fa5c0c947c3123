use std::sync::Arc;

use termkit_builder::prelude::*;
use termkit_builder::Style;

fn main() {
    let registry = Arc::new(
        ComponentRegistry::with_manifests(builtin_manifests()).expect("built-in manifests"),
    );
    let mut builder = PanelBuilder::new(registry, BuilderOptions::default());

    builder.register_hook(Hook::on_validate(|config, result| {
        if !result.valid {
            eprintln!("{} has {} problem(s)", config.ty, result.errors.len());
        }
    }));

    // Build a panel using the declarative config API
    let config = panel("Synth")
        .style([("backgroundColor", "#1a1a2e"), ("padding", "12px")].into_iter().collect::<Style>())
        .field("collapsible", true)
        .action(button("Reset").prop("variant", "danger"))
        .content(slider("Cutoff").field("max", 20000).field("value", 8000))
        .content(toggle("Resonance boost"))
        .content(dropdown().prop("options", serde_json::json!(["saw", "square", "sine"])))
        .panel(panel("Envelope").content(slider("Attack")).content(slider("Release")))
        .footer("Patch: init");

    match builder.build(&config) {
        Ok(tree) => println!("{}", tree.to_json().unwrap()),
        Err(e) => eprintln!("✗ Error: {}", e),
    }
}
