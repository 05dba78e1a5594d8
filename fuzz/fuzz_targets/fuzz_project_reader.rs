#![no_main]

use libfuzzer_sys::fuzz_target;
use mergeproject::project::ProjectDocument;

fuzz_target!(|data: &[u8]| {
    // Reading must either succeed or fail with an error, never panic
    let Ok(document) = ProjectDocument::from_reader(data) else {
        return;
    };

    // Whatever was read must serialize and read back with the same entry count
    let xml = document
        .to_xml_string()
        .expect("writing to memory cannot fail");
    let reread = ProjectDocument::from_xml_str(&xml).expect("writer output must parse");
    assert_eq!(reread.len(), document.len());
});
