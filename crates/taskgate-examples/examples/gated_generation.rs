//! Gated generation example: options to blueprint to playthrough.
//!
//! Compiles a five-task world with prerequisites locked, assembles the
//! world blueprint, and plays it through in waves: each wave visits every
//! reachable location and claims the completion token locked there, which
//! opens the next wave. Finishes by printing the slot data the host would
//! publish for the client.
//!
//! Run with: `cargo run -p taskgate-examples --example gated_generation`

use taskgate_core::graph::TaskGraph;
use taskgate_core::options::WorldOptions;
use taskgate_core::slot::SlotData;
use taskgate_rules::{ClaimedItems, VisitedLocations, WorldBlueprint};

fn main() {
    // --- Configure the world ---

    // Task 3 needs 1 and 2; tasks 4 and 5 both need 3.
    let options = WorldOptions {
        tasks: vec![
            "Do the laundry".to_string(),
            "Buy groceries".to_string(),
            "Cook for the week".to_string(),
            "Freeze portions".to_string(),
            "Pack lunches".to_string(),
        ],
        rewards: vec![
            "Podcast episode".to_string(),
            "Fancy coffee".to_string(),
            "Movie night".to_string(),
            "Sleep in".to_string(),
            "New book".to_string(),
        ],
        task_prereqs: vec![
            String::new(),
            String::new(),
            "1, 2".to_string(),
            "3".to_string(),
            "3".to_string(),
        ],
        lock_prereqs: true,
        ..WorldOptions::default()
    };

    // --- Compile and assemble ---

    let graph = TaskGraph::compile(&options).expect("compile options");
    println!(
        "Compiled {} tasks with {} prerequisite edges.\n",
        graph.task_count(),
        graph.edge_count()
    );

    let blueprint = WorldBlueprint::assemble(&graph);
    println!("=== World contents ===\n");
    for location in blueprint.locations() {
        let task = &graph.tasks()[location.task_index];
        let reward = &graph.rewards()[location.task_index];
        let token = &blueprint.locked_placements()[location.task_index];
        print!(
            "  {} (id {}): \"{}\" -> reward \"{}\", token \"{}\"",
            location.name, location.id.0, task, reward, token.item.name
        );
        match blueprint.rule_for(location.id) {
            Some(rule) => println!(", gated on {} token(s)", rule.required().len()),
            None => println!(", open"),
        }
    }
    println!(
        "\nPool: {} filler rewards. Locked: {} progression tokens.\n",
        blueprint.pool().len(),
        blueprint.locked_placements().len()
    );

    // --- Play through in waves ---

    println!("=== Playthrough ===\n");

    let mut items = ClaimedItems::new();
    let mut visited = VisitedLocations::new();
    let mut wave = 0;
    while !blueprint.is_complete(&visited) {
        wave += 1;
        let reachable: Vec<_> = blueprint
            .locations()
            .iter()
            .filter(|l| {
                !visited.has(l.id) && blueprint.reachable(l.id, &items).expect("known location")
            })
            .collect();

        println!("Wave {}:", wave);
        for location in reachable {
            let task = &graph.tasks()[location.task_index];
            println!("  visit {} (\"{}\")", location.name, task);
            visited.visit(location.id);
            items.claim(blueprint.locked_placements()[location.task_index].item.id);
        }
    }
    println!(
        "\nComplete after {} waves: {} locations visited, {} tokens claimed.\n",
        wave,
        visited.count(),
        items.count()
    );

    // --- Publish slot data ---

    println!("=== Slot data ===\n");
    let slot = SlotData::from_options(&options);
    println!("{}", slot.to_json().expect("serialize slot data"));
}
