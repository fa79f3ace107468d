#![no_main]
use libfuzzer_sys::fuzz_target;
use patlog::pattern::MAX_INSTRUCTIONS;
use patlog::{CompiledPattern, Level, LogConfig};

fuzz_target!(|data: &str| {
    // Must not panic on any pattern text
    let Ok(pattern) = CompiledPattern::compile(data) else {
        return;
    };
    assert!(pattern.len() <= MAX_INSTRUCTIONS);

    // The canonical text must compile back to the same program
    let again = CompiledPattern::compile(&pattern.to_string());
    if !pattern.is_empty() {
        assert_eq!(again.ok().as_ref(), Some(&pattern));
    }

    let mut config = LogConfig::default();
    config.add_substitution(0, "~");
    config.set_max_message_len(64);
    if let Some(line) = pattern.render(&config, Level::Info, "fuzz") {
        assert!(line.len() <= 64);
    }
});
