#![no_main]
use libfuzzer_sys::fuzz_target;
use taskgate_core::prereq::parse_prereqs;

fuzz_target!(|input: (Vec<String>, u16)| {
    let (lines, n) = input;
    // Keep the task count in a realistic band around the limit.
    let n = (n as usize) % 1200;
    // Feed arbitrary line sets to the parser.
    // Must not panic -- returning Err is fine.
    let _ = parse_prereqs(&lines, n);
});
