//! End-to-end tests over synthetic AHS archives.

use std::io::Write;
use std::sync::Arc;

use flate2::Compression as Level;
use flate2::write::GzEncoder;

use unahs::ahs::{CONTENT_OFFSET, HEADER_SIZE, MAGIC};
use unahs::{AhsError, AhsExtractor, Compression, OutputWriter};

/// Build one complete record: magic, zeroed header, NUL-terminated name
/// padded out to the fixed content offset, then the content.
fn record(name: &[u8], content: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(MAGIC);
    data.extend_from_slice(&[0u8; HEADER_SIZE]);
    data.extend_from_slice(name);
    data.push(0);
    data.resize(CONTENT_OFFSET, 0);
    data.extend_from_slice(content);
    data
}

fn gzip(payload: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Level::default());
    encoder.write_all(payload).unwrap();
    encoder.finish().unwrap()
}

fn extractor(data: Vec<u8>) -> AhsExtractor {
    AhsExtractor::new(Arc::from(data))
}

#[test]
fn archive_without_magic_yields_no_records() {
    let extractor = extractor(b"not an archive at all".to_vec());
    assert!(extractor.list_records().is_empty());
}

#[test]
fn single_record_followed_by_bare_magic() {
    // The exact layout from observed samples: ABJR + 16 zero bytes +
    // "test\0" + zero padding out to offset 116 + "hello world" +
    // a second magic that opens a (truncated) record.
    let mut data = record(b"test", b"hello world");
    let second = data.len();
    data.extend_from_slice(MAGIC);

    let extractor = extractor(data);
    let outcomes = extractor.list_records();
    assert_eq!(outcomes.len(), 2);

    let parsed = outcomes[0].as_ref().unwrap();
    assert_eq!(parsed.name, "test");
    assert_eq!(parsed.compression, Compression::None);
    assert_eq!(parsed.content_range.end, second);
    assert_eq!(extractor.extract_to_memory(parsed).unwrap(), b"hello world");

    assert!(outcomes[1].is_err());
}

#[test]
fn raw_payload_keeps_trailing_padding() {
    let mut data = record(b"report.bin", b"data\x00\x00\x00\x00");
    data.extend_from_slice(&record(b"next", b""));

    let extractor = extractor(data);
    let outcomes = extractor.list_records();
    let parsed = outcomes[0].as_ref().unwrap();

    // Byte identity, padding up to the next magic included.
    assert_eq!(
        extractor.extract_to_memory(parsed).unwrap(),
        b"data\x00\x00\x00\x00"
    );
}

#[test]
fn mixed_archive_extracts_every_record() {
    let blackbox = b"power and thermal telemetry, line after line";

    let mut data = record(b"file.pkg", b"settings=1\n");
    data.extend_from_slice(&record(b"blackbox.zbb", &gzip(blackbox)));
    data.extend_from_slice(&record(b"bcert.pkg", b"<certificate/>"));

    let extractor = extractor(data);
    let outcomes = extractor.list_records();
    assert_eq!(outcomes.len(), 3);

    let records: Vec<_> = outcomes
        .into_iter()
        .map(|outcome| outcome.unwrap())
        .collect();

    // Strictly increasing buffer order.
    assert!(records.windows(2).all(|pair| pair[0].offset < pair[1].offset));

    // Vendor naming quirks resolve on output.
    let names: Vec<String> = records.iter().map(|r| r.output_name()).collect();
    assert_eq!(names, ["file.pkg.txt", "blackbox.bb", "bcert.pkg.xml"]);

    assert_eq!(
        extractor.extract_to_memory(&records[0]).unwrap(),
        b"settings=1\n"
    );
    assert_eq!(extractor.extract_to_memory(&records[1]).unwrap(), blackbox);
    assert_eq!(
        extractor.extract_to_memory(&records[2]).unwrap(),
        b"<certificate/>"
    );
}

#[test]
fn truncated_gzip_spoils_only_its_own_record() {
    let stream = gzip(b"counters that will be cut short");

    let mut data = record(b"broken.zbb", &stream[..stream.len() / 2]);
    data.extend_from_slice(&record(b"intact.bin", b"unaffected"));

    let extractor = extractor(data);
    let outcomes = extractor.list_records();
    let broken = outcomes[0].as_ref().unwrap();
    let intact = outcomes[1].as_ref().unwrap();

    let failure = extractor.extract_to_memory(broken).unwrap_err();
    assert!(matches!(
        &failure,
        AhsError::Decompression { name, .. } if name == "broken.zbb"
    ));
    assert_eq!(failure.record_name(), Some("broken.zbb"));

    assert_eq!(extractor.extract_to_memory(intact).unwrap(), b"unaffected");
}

#[test]
fn bad_name_spoils_only_its_own_record() {
    let mut data = record(&[0xC3, 0x28], b"junk");
    data.extend_from_slice(&record(b"fine.bin", b"ok"));

    let extractor = extractor(data);
    let outcomes = extractor.list_records();

    assert!(matches!(
        outcomes[0],
        Err(AhsError::NameDecode { offset: 0, .. })
    ));
    assert_eq!(outcomes[1].as_ref().unwrap().name, "fine.bin");
}

#[tokio::test]
async fn extracted_payloads_land_under_destination() {
    let payload = b"event log body";

    let mut data = record(b"events.zbb", &gzip(payload));
    data.extend_from_slice(&record(b"file.pkg", b"key=value\n"));

    let extractor = extractor(data);
    let records: Vec<_> = extractor
        .list_records()
        .into_iter()
        .map(|outcome| outcome.unwrap())
        .collect();

    let temp = tempfile::tempdir().unwrap();
    let destination = temp.path().join("dump");
    let writer = OutputWriter::new(&destination);

    for parsed in &records {
        let payload = extractor.extract_to_memory(parsed).unwrap();
        writer.write(&parsed.output_name(), &payload).await.unwrap();
    }

    assert_eq!(
        std::fs::read(destination.join("events.bb")).unwrap(),
        payload
    );
    assert_eq!(
        std::fs::read(destination.join("file.pkg.txt")).unwrap(),
        b"key=value\n"
    );
}
