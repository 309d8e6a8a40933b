use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use isatab::dataset::IsaDataset;
use isatab::header::FileType;
use isatab::reader::TableReader;
use isatab::writer::{TableWriter, WriterConfig};
use std::fs;
use tempfile::TempDir;

const ASSAY_HEADER: &str = "Sample Name\tProtocol REF\tParameter Value[kit]\tExtract Name\t\
Protocol REF\tParameter Value[instrument]\tMS Assay Name\tRaw Spectral Data File\n";

/// Assay table where every sample fans out into two runs
fn assay_table(num_samples: usize) -> String {
    let mut text = String::from(ASSAY_HEADER);
    for i in 0..num_samples {
        for run in 0..2 {
            text.push_str(&format!(
                "sample{i}\textraction\tkit{}\textract{i}\tmass spectrometry\tOrbitrap\t\
run{i}_{run}\trun{i}_{run}.raw\n",
                i % 3
            ));
        }
    }
    text
}

/// Benchmark reading assay tables into graphs
fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_assay");

    for num_samples in [100, 1000, 5000] {
        let text = assay_table(num_samples);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}samples", num_samples)),
            &text,
            |b, text| {
                b.iter(|| {
                    let table = TableReader::new(FileType::Assay)
                        .read(black_box(text.as_bytes()))
                        .unwrap();
                    black_box(table.graph.node_count())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark serializing graphs back to text
fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_assay");

    for num_samples in [100, 1000, 5000] {
        let text = assay_table(num_samples);
        let graph = TableReader::new(FileType::Assay)
            .read(text.as_bytes())
            .unwrap()
            .graph;
        group.throughput(Throughput::Bytes(text.len() as u64));

        let writer = TableWriter::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}samples", num_samples)),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let out = writer
                        .graph_to_string(black_box(graph), FileType::Assay)
                        .unwrap();
                    black_box(out.len())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark opening and rewriting a dataset with several assays
fn bench_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_roundtrip");
    group.sample_size(20);

    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let investigation = fs::read_to_string(data_dir.join("i_minimal.txt")).unwrap();
    let study = fs::read_to_string(data_dir.join("s_minimal.txt")).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("i_minimal.txt"), investigation).unwrap();
    fs::write(input.join("s_minimal.txt"), study).unwrap();
    fs::write(input.join("a_minimal.txt"), assay_table(2000)).unwrap();
    let path = input.join("i_minimal.txt");

    group.bench_function("open", |b| {
        b.iter(|| black_box(IsaDataset::open(&path).unwrap()));
    });

    let dataset = IsaDataset::open(&path).unwrap();
    let output = temp_dir.path().join("output");
    group.bench_function("write_to", |b| {
        b.iter(|| dataset.write_to(&output, &WriterConfig::default()).unwrap());
    });

    group.bench_function("validate", |b| {
        b.iter(|| black_box(dataset.validate()));
    });

    group.finish();
}

criterion_group!(benches, bench_read, bench_write, bench_dataset);
criterion_main!(benches);
