#![no_main]

use isatab::header::FileType;
use isatab::reader::TableReader;
use isatab::writer::TableWriter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Malformed tables must fail with an error, never a panic
    for file_type in [FileType::Study, FileType::Assay] {
        let Ok(table) = TableReader::new(file_type).read(data) else {
            continue;
        };

        // Anything that reads must also lay out again or report why not
        let _ = TableWriter::default().graph_to_string(&table.graph, file_type);
    }
});
