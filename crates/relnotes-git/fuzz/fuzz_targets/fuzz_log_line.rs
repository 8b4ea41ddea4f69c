#![no_main]

use libfuzzer_sys::fuzz_target;
use relnotes_git::LogLine;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for line in text.lines() {
        if let Ok(parsed) = LogLine::parse(line) {
            assert!(!parsed.short_sha.is_empty());
            assert!(!parsed.subject.is_empty());
            let _ = parsed.tag();
        }
    }
});
