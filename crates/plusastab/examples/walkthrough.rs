//! Example: numpad plus moving focus through a small form
//!
//! Run with `RUST_LOG=plusastab=debug` to see each focus move.

use plusastab::{Dispatch, Document, NodeId, Options, PlusAsTab};
use tracing_subscriber::EnvFilter;

const FORM: &str = r#"<!DOCTYPE html>
<html>
<body>
    <form class="plus-as-tab">
        <input id="first-name" type="text" />
        <input id="last-name" type="text" />
        <input id="phone" type="tel" data-plus-as-tab="false" />
        <input id="email" type="email" />
        <button id="submit" type="submit">Send</button>
    </form>
</body>
</html>"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = plusastab::html::parse(FORM)?;
    let mut plus = PlusAsTab::new(Options::default())?;
    let eligible = plus.init(&doc);

    println!("plusastab v{}", plusastab::VERSION);
    println!("Eligible: {}", names(&doc, eligible.iter()).join(", "));

    let first = doc
        .get_element_by_id("first-name")
        .ok_or_else(|| anyhow::anyhow!("form has no #first-name"))?;
    doc.focus(first);

    for shift in [false, false, false, false, true] {
        let outcome = plus.simulate_key_press(&mut doc, shift);
        println!("{:<12} {}", if shift { "shift + plus" } else { "plus" }, describe(&doc, outcome));
    }

    Ok(())
}

fn names(doc: &Document, ids: impl Iterator<Item = NodeId>) -> Vec<String> {
    ids.map(|id| doc.element_id(id).unwrap_or("?").to_string()).collect()
}

fn describe(doc: &Document, outcome: Dispatch) -> String {
    let name = |id: NodeId| doc.element_id(id).unwrap_or("?").to_string();
    match outcome {
        Dispatch::Moved { from, to } => format!("{} -> {}", name(from), name(to)),
        Dispatch::Clamped { at } => format!("stays on {} (boundary)", name(at)),
        other => format!("{other:?}"),
    }
}
