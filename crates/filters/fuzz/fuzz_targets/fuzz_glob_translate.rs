#![no_main]

use std::path::Path;

use filters::{MatchSyntax, Matcher, PathContext, glob};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(pattern) = std::str::from_utf8(data) else {
        return;
    };

    // Translation never fails; compilation may reject degenerate bracket bodies.
    let fragment = glob::translate(pattern);
    assert!(!pattern.is_empty() || fragment.is_empty());

    let context = PathContext::new("/fuzz", Some("/home/fuzz".into()));
    if let Ok(matcher) = Matcher::new(pattern, MatchSyntax::Glob, &context) {
        let _ = matcher.is_match(Path::new("fuzz/target"), &context);
    }
});
