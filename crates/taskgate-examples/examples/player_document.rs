//! Player document example: template, edit, load, compile.
//!
//! Writes a starter document the way host tooling hands one to a player,
//! fills it in the way a player would, then loads it back and runs it
//! through generation. Ends with a broken document to show how validation
//! failures are reported.
//!
//! Run with: `cargo run -p taskgate-examples --example player_document`

use std::fs;
use taskgate_core::graph::TaskGraph;
use taskgate_data::{compile_document, load_document, write_document, write_template};
use taskgate_rules::WorldBlueprint;

fn main() {
    let dir = std::env::temp_dir().join(format!("taskgate_example_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");

    // --- Write a starter template ---

    let starter = dir.join("starter.ron");
    write_template(&starter, 3).expect("write template");
    println!("=== Starter template ({}) ===\n", starter.display());
    println!("{}\n", fs::read_to_string(&starter).expect("read template"));

    // --- Fill it in as a player would ---

    let mut document = load_document(&starter).expect("load template");
    document.name = "Alice".to_string();
    let section = document.section.as_mut().expect("template has a section");
    section.tasks = vec![
        "Plant seeds".to_string(),
        "Water daily".to_string(),
        "Harvest".to_string(),
    ];
    section.rewards = vec![
        "Seed packet".to_string(),
        "Watering can".to_string(),
        "Salad dinner".to_string(),
    ];
    section.task_prereqs = vec![String::new(), "1".to_string(), "2".to_string()];
    section.lock_prereqs = true;

    let edited = dir.join("alice.ron");
    write_document(&edited, &document).expect("write edited document");
    println!("Wrote edited document to {}.\n", edited.display());

    // --- Load and generate ---

    let graph = compile_document(&edited).expect("compile document");
    let blueprint = WorldBlueprint::assemble(&graph);
    println!("=== Generated world for '{}' ===\n", document.name);
    println!(
        "  {} locations, {} pool items, {} locked tokens, {} gated locations\n",
        blueprint.locations().len(),
        blueprint.pool().len(),
        blueprint.locked_placements().len(),
        blueprint.rule_count()
    );

    // --- A broken document is rejected with a precise error ---

    let broken = dir.join("broken.ron");
    fs::write(
        &broken,
        r#"(
    name: "Bob",
    game: "Taskgate",
    Taskgate: (
        tasks: ["A", "B"],
        rewards: ["X", "Y"],
        task_prereqs: ["2", "1"],
        lock_prereqs: true,
    ),
)"#,
    )
    .expect("write broken document");

    println!("=== Broken document ===\n");
    match compile_document(&broken) {
        Ok(_) => println!("  unexpectedly compiled"),
        Err(e) => println!("  rejected: {e}"),
    }

    // The same options fail the same way when compiled directly.
    let options = taskgate_core::options::WorldOptions {
        tasks: vec!["A".to_string(), "B".to_string()],
        rewards: vec!["X".to_string(), "Y".to_string()],
        task_prereqs: vec!["2".to_string(), "1".to_string()],
        lock_prereqs: true,
        ..Default::default()
    };
    if let Err(e) = TaskGraph::compile(&options) {
        println!("  direct compile agrees: {e}");
    }

    let _ = fs::remove_dir_all(&dir);
    println!("\nPlayer document demo complete.");
}
