#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use taskgate_core::graph::TaskGraph;
use taskgate_core::options::WorldOptions;
use taskgate_core::slot::SlotData;

/// Raw option lists as a player document could contain them.
#[derive(Arbitrary, Debug)]
struct FuzzInput {
    tasks: Vec<String>,
    rewards: Vec<String>,
    task_prereqs: Vec<String>,
    lock_prereqs: bool,
    death_link: bool,
    death_link_pool: Vec<String>,
}

fuzz_target!(|input: FuzzInput| {
    // Cap list lengths to prevent timeouts; content stays arbitrary.
    let cap = |mut entries: Vec<String>| {
        entries.truncate(64);
        entries
    };

    let options = WorldOptions {
        tasks: cap(input.tasks),
        rewards: cap(input.rewards),
        task_prereqs: cap(input.task_prereqs),
        lock_prereqs: input.lock_prereqs,
        death_link: input.death_link,
        death_link_pool: cap(input.death_link_pool),
    };

    // Neither compilation nor slot-data assembly may panic on any input.
    let _ = TaskGraph::compile(&options);
    let _ = SlotData::from_options(&options).to_json();
});
