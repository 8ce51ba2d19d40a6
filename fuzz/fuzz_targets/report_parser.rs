#![no_main]

use libfuzzer_sys::fuzz_target;
use vigia::parser::parse_reports;
use vigia::safety::SafetyClassifier;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic; whatever parses must classify cleanly
        if let Ok(reports) = parse_reports(input) {
            let classifier = SafetyClassifier::default();
            for report in &reports {
                let _ = classifier.evaluate(report);
            }
        }
    }
});
